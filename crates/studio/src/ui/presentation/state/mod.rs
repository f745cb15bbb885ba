//! Presentation state - Dioxus signal wrappers around plain state types
//!
//! The plain types (`ToastStack`, `CopiedTracker`, `Workflow`) carry
//! the logic and are unit-tested directly; the signal wrappers here
//! only add reactivity.

pub mod copied_state;
pub mod session_state;
pub mod toast_state;

pub use copied_state::{CopiedField, COPIED_REVERT_MS};
pub use session_state::SessionState;
pub use toast_state::{Toast, ToastSeverity, ToastState, TOAST_DISMISS_MS};

use dioxus::prelude::use_context;

/// Hook to access the ToastState from Dioxus context
pub fn use_toast_state() -> ToastState {
    use_context::<ToastState>()
}

/// Hook to access the SessionState from Dioxus context
pub fn use_session_state() -> SessionState {
    use_context::<SessionState>()
}

/// Hook to access the CopiedField from Dioxus context
pub fn use_copied_field() -> CopiedField {
    use_context::<CopiedField>()
}
