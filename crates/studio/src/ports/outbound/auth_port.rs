//! AuthPort - read-only boundary to the external auth provider
//!
//! Authentication is delegated entirely to an external managed service.
//! The UI only needs "who, if anyone, is signed in" for the nav chrome;
//! generation requests never depend on identity. Tool pages read
//! session state via context and never mutate it directly.

use serde::{Deserialize, Serialize};

/// The signed-in account, as far as the client cares
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub id: String,
    pub email: String,
}

/// Auth provider boundary
pub trait AuthPort: Send + Sync {
    /// The currently signed-in account, if any
    fn current_account(&self) -> Option<AccountInfo>;

    /// Drop the current session
    fn sign_out(&self);
}
