//! Toast notification host
//!
//! Renders the toast stack in a fixed corner overlay and schedules one
//! auto-dismiss timer per toast. A toast can also be dismissed early by
//! clicking it.

use dioxus::prelude::*;

use crate::presentation::state::{use_toast_state, ToastSeverity, TOAST_DISMISS_MS};
use crate::use_platform;

/// Tracks which toast ids have a dismiss timer in flight.
///
/// An id is held only while its timer runs, so the set stays bounded by
/// the number of visible toasts. Ids are never reused (the stack's
/// counter is monotonic), so a re-added id cannot collide with a
/// finished one.
#[derive(Debug, Default)]
struct DismissSchedule {
    pending: Vec<u64>,
}

impl DismissSchedule {
    /// Claim `id` for scheduling; false if a timer is already running
    fn try_schedule(&mut self, id: u64) -> bool {
        if self.pending.contains(&id) {
            return false;
        }
        self.pending.push(id);
        true
    }

    /// Release `id` once its timer has fired
    fn finished(&mut self, id: u64) {
        self.pending.retain(|&pending| pending != id);
    }
}

#[component]
pub fn ToastHost() -> Element {
    let platform = use_platform();
    let toast_state = use_toast_state();
    let mut schedule = use_signal(DismissSchedule::default);

    let toasts = toast_state.toasts();

    // Schedule an auto-dismiss for every toast exactly once
    use_effect(move || {
        let ids: Vec<u64> = toast_state.toasts().iter().map(|t| t.id).collect();
        for id in ids {
            if !schedule.write().try_schedule(id) {
                continue;
            }

            let platform = platform.clone();
            let mut toast_state = toast_state;
            spawn(async move {
                platform.sleep_ms(TOAST_DISMISS_MS).await;
                toast_state.dismiss(id);
                schedule.write().finished(id);
            });
        }
    });

    rsx! {
        div {
            class: "toast-stack",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: match toast.severity {
                        ToastSeverity::Success => "toast toast-success",
                        ToastSeverity::Error => "toast toast-error",
                    },
                    onclick: {
                        let mut toast_state = toast_state;
                        let id = toast.id;
                        move |_| toast_state.dismiss(id)
                    },
                    "{toast.message}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedules_each_id_once_while_pending() {
        let mut schedule = DismissSchedule::default();
        assert!(schedule.try_schedule(1));
        assert!(!schedule.try_schedule(1));
        assert!(schedule.try_schedule(2));
    }

    #[test]
    fn finished_ids_are_forgotten() {
        let mut schedule = DismissSchedule::default();
        for id in 1..=100 {
            assert!(schedule.try_schedule(id));
            schedule.finished(id);
        }
        // Nothing accumulates once every timer has fired
        assert!(schedule.pending.is_empty());
    }
}
