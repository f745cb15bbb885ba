//! Session state
//!
//! Read-only view of "who is signed in" for the nav chrome. Hydrated
//! once on app mount from the auth port and cleared on sign-out; tool
//! pages only ever read it.

use dioxus::prelude::*;

use crate::ports::outbound::AccountInfo;

#[derive(Clone, Copy)]
pub struct SessionState {
    account: Signal<Option<AccountInfo>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            account: Signal::new(None),
        }
    }

    pub fn set_account(&mut self, account: Option<AccountInfo>) {
        self.account.set(account);
    }

    pub fn clear(&mut self) {
        self.account.set(None);
    }

    pub fn account(&self) -> Option<AccountInfo> {
        self.account.read().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.account.read().is_some()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
