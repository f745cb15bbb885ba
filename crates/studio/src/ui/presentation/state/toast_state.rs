//! Toast notification state
//!
//! A process-wide, fire-and-forget message surface. Workflows push
//! success/error notices here; the `ToastHost` component renders them
//! and schedules auto-dismissal. Nothing reads toasts back into
//! workflow decisions.

use dioxus::prelude::*;

/// How long a toast stays on screen before auto-dismissing
pub const TOAST_DISMISS_MS: u64 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastSeverity {
    Success,
    Error,
}

/// One visible notification
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub severity: ToastSeverity,
    pub message: String,
}

/// Plain toast queue; ids are monotonically increasing
#[derive(Clone, Debug, Default)]
pub struct ToastStack {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastStack {
    pub fn push(&mut self, severity: ToastSeverity, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            severity,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Signal wrapper provided via Dioxus context
#[derive(Clone, Copy)]
pub struct ToastState {
    stack: Signal<ToastStack>,
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            stack: Signal::new(ToastStack::default()),
        }
    }

    /// Show a success toast; returns its id
    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.stack.write().push(ToastSeverity::Success, message)
    }

    /// Show an error toast; returns its id
    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.stack.write().push(ToastSeverity::Error, message)
    }

    /// Remove a toast (auto-dismiss timer or click)
    pub fn dismiss(&mut self, id: u64) {
        self.stack.write().dismiss(id);
    }

    /// Snapshot of the currently visible toasts
    pub fn toasts(&self) -> Vec<Toast> {
        self.stack.read().toasts().to_vec()
    }
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pushes_assign_unique_ids() {
        let mut stack = ToastStack::default();
        let a = stack.push(ToastSeverity::Success, "one");
        let b = stack.push(ToastSeverity::Error, "two");
        assert_ne!(a, b);
        assert_eq!(stack.toasts().len(), 2);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut stack = ToastStack::default();
        let a = stack.push(ToastSeverity::Success, "one");
        let b = stack.push(ToastSeverity::Error, "two");

        stack.dismiss(a);

        let remaining: Vec<u64> = stack.toasts().iter().map(|t| t.id).collect();
        assert_eq!(remaining, vec![b]);

        // Dismissing an unknown id is a no-op
        stack.dismiss(999);
        assert_eq!(stack.toasts().len(), 1);
    }
}
