//! Storage-backed auth adapter
//!
//! Stands in for the external managed auth provider. The session, if
//! any, is whatever account JSON the provider's SDK last persisted in
//! platform storage; signing out removes it. Generation never depends
//! on this - it exists only for the nav chrome.

use std::sync::Arc;

use crate::ports::outbound::{storage_keys, AccountInfo, AuthPort, PlatformPort};

/// Auth adapter reading the persisted session from platform storage
pub struct StorageAuthAdapter {
    platform: Arc<dyn PlatformPort>,
}

impl StorageAuthAdapter {
    pub fn new(platform: Arc<dyn PlatformPort>) -> Self {
        Self { platform }
    }
}

impl AuthPort for StorageAuthAdapter {
    fn current_account(&self) -> Option<AccountInfo> {
        let raw = self.platform.storage_load(storage_keys::ACCOUNT)?;
        match serde_json::from_str(&raw) {
            Ok(account) => Some(account),
            Err(e) => {
                tracing::warn!("Ignoring unparseable stored account: {}", e);
                None
            }
        }
    }

    fn sign_out(&self) {
        self.platform.storage_remove(storage_keys::ACCOUNT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::create_mock_platform;

    #[test]
    fn reads_and_clears_the_stored_session() {
        let (platform, _) = create_mock_platform();
        let platform: Arc<dyn PlatformPort> = Arc::new(platform);
        platform.storage_save(
            storage_keys::ACCOUNT,
            r#"{"id":"u-1","email":"me@example.com"}"#,
        );

        let auth = StorageAuthAdapter::new(platform.clone());
        let account = auth.current_account().expect("account present");
        assert_eq!(account.email, "me@example.com");

        auth.sign_out();
        assert!(auth.current_account().is_none());
    }

    #[test]
    fn garbage_in_storage_reads_as_signed_out() {
        let (platform, _) = create_mock_platform();
        let platform: Arc<dyn PlatformPort> = Arc::new(platform);
        platform.storage_save(storage_keys::ACCOUNT, "not json");

        let auth = StorageAuthAdapter::new(platform);
        assert!(auth.current_account().is_none());
    }
}
