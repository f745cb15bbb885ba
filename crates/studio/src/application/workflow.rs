//! The per-page generation workflow state machine.
//!
//! Every tool page owns one `Workflow`. Transitions:
//!
//! ```text
//! Idle|Success|Error --begin--> Loading --complete--> Success
//!                               Loading --fail------> Error
//!                    * --reset--> Idle
//! ```
//!
//! `begin` hands out a [`Ticket`] carrying the current epoch. A
//! completion only applies if its ticket's epoch is still current, so a
//! backend response that arrives after `reset` is silently discarded.
//! This type is plain data on purpose - the UI wraps it in a signal,
//! tests drive it directly.

use copydeck_domain::GenerationResult;

/// Current phase of a tool page's workflow. Exactly one is active.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum WorkflowPhase {
    /// Nothing in flight, nothing to show
    #[default]
    Idle,
    /// A backend call is in flight
    Loading,
    /// The last call succeeded; holds the result being displayed
    Success(GenerationResult),
    /// The last call failed; holds the user-facing message
    Error(String),
}

/// Permission to finish one specific in-flight generation.
///
/// Issued by [`Workflow::begin`]; stale tickets (epoch mismatch after a
/// reset) are rejected by `complete`/`fail`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    epoch: u64,
}

/// Idle/loading/success/error state for one generation request
#[derive(Clone, Debug, Default)]
pub struct Workflow {
    phase: WorkflowPhase,
    epoch: u64,
}

impl Workflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &WorkflowPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, WorkflowPhase::Loading)
    }

    /// Start a generation if none is in flight.
    ///
    /// Returns `None` while `Loading` - the duplicate-submission guard.
    /// On success the epoch is bumped, invalidating any older tickets.
    pub fn begin(&mut self) -> Option<Ticket> {
        if self.is_loading() {
            return None;
        }
        self.epoch += 1;
        self.phase = WorkflowPhase::Loading;
        Some(Ticket { epoch: self.epoch })
    }

    /// Apply a successful backend response.
    ///
    /// Returns whether the result was applied; stale tickets are
    /// ignored.
    pub fn complete(&mut self, ticket: Ticket, result: GenerationResult) -> bool {
        if ticket.epoch != self.epoch || !self.is_loading() {
            return false;
        }
        self.phase = WorkflowPhase::Success(result);
        true
    }

    /// Apply a failed backend response.
    ///
    /// The workflow lands in `Error`, which is re-submittable. Returns
    /// whether the failure was applied.
    pub fn fail(&mut self, ticket: Ticket, message: impl Into<String>) -> bool {
        if ticket.epoch != self.epoch || !self.is_loading() {
            return false;
        }
        self.phase = WorkflowPhase::Error(message.into());
        true
    }

    /// Return to `Idle` unconditionally.
    ///
    /// Bumps the epoch so an in-flight response cannot resurrect state
    /// after the user reset the page.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.phase = WorkflowPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn social_result() -> GenerationResult {
        GenerationResult::Social {
            content: "post".to_string(),
        }
    }

    #[test]
    fn begins_from_idle_and_completes_once() {
        let mut wf = Workflow::new();
        let ticket = wf.begin().expect("idle workflow accepts begin");
        assert!(wf.is_loading());

        assert!(wf.complete(ticket, social_result()));
        assert!(matches!(wf.phase(), WorkflowPhase::Success(_)));

        // A second completion with the same ticket is a no-op
        assert!(!wf.complete(ticket, social_result()));
    }

    #[test]
    fn begin_while_loading_is_rejected() {
        let mut wf = Workflow::new();
        let _ticket = wf.begin().expect("first begin");
        assert!(wf.begin().is_none());
    }

    #[test]
    fn failure_lands_in_error_and_is_resubmittable() {
        let mut wf = Workflow::new();
        let ticket = wf.begin().expect("begin");
        assert!(wf.fail(ticket, "Failed to generate content. Please try again."));
        assert!(matches!(wf.phase(), WorkflowPhase::Error(_)));

        // Error state is re-entrant
        assert!(wf.begin().is_some());
    }

    #[test]
    fn reset_always_yields_idle() {
        let mut wf = Workflow::new();
        let ticket = wf.begin().expect("begin");
        wf.complete(ticket, social_result());
        wf.reset();
        assert_eq!(*wf.phase(), WorkflowPhase::Idle);

        // Reset is allowed mid-loading too
        let _ticket = wf.begin().expect("begin");
        wf.reset();
        assert_eq!(*wf.phase(), WorkflowPhase::Idle);
    }

    #[test]
    fn late_response_after_reset_is_discarded() {
        let mut wf = Workflow::new();
        let ticket = wf.begin().expect("begin");
        wf.reset();

        assert!(!wf.complete(ticket, social_result()));
        assert!(!wf.fail(ticket, "late failure"));
        assert_eq!(*wf.phase(), WorkflowPhase::Idle);
    }

    #[test]
    fn success_is_replaced_wholesale_by_next_request() {
        let mut wf = Workflow::new();
        let first = wf.begin().expect("begin");
        wf.complete(first, social_result());

        let second = wf.begin().expect("re-entrant begin from success");
        let replacement = GenerationResult::Email {
            subject: "s".to_string(),
            body: "b".to_string(),
        };
        assert!(wf.complete(second, replacement.clone()));
        assert_eq!(*wf.phase(), WorkflowPhase::Success(replacement));
    }
}
