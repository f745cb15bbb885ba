//! Mock platform for tests
//!
//! Instant sleeps, in-memory storage, and a capturing clipboard so
//! tests can assert on exactly what was written.

use crate::ports::outbound::platform::{
    ClipboardProvider, DocumentProvider, LogProvider, SleepFuture, SleepProvider, StorageProvider,
};
use crate::state::Platform;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Sleep provider that returns immediately
#[derive(Clone, Default)]
pub struct MockSleepProvider;

impl SleepProvider for MockSleepProvider {
    fn sleep_ms(&self, _ms: u64) -> SleepFuture {
        Box::pin(async {})
    }
}

/// In-memory storage provider
#[derive(Clone, Default)]
pub struct MockStorageProvider {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl StorageProvider for MockStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Ok(mut guard) = self.values.lock() {
            guard.insert(key.to_string(), value.to_string());
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.values.lock().ok().and_then(|g| g.get(key).cloned())
    }

    fn remove(&self, key: &str) {
        if let Ok(mut guard) = self.values.lock() {
            guard.remove(key);
        }
    }
}

/// Log provider that records every entry as "level: message"
#[derive(Clone, Default)]
pub struct MockLogProvider {
    entries: Arc<Mutex<Vec<String>>>,
}

impl MockLogProvider {
    /// All entries logged so far, in order
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().map(|g| g.clone()).unwrap_or_default()
    }

    fn record(&self, level: &str, msg: &str) {
        if let Ok(mut guard) = self.entries.lock() {
            guard.push(format!("{}: {}", level, msg));
        }
    }
}

impl LogProvider for MockLogProvider {
    fn info(&self, msg: &str) {
        self.record("info", msg);
    }
    fn error(&self, msg: &str) {
        self.record("error", msg);
    }
    fn debug(&self, msg: &str) {
        self.record("debug", msg);
    }
    fn warn(&self, msg: &str) {
        self.record("warn", msg);
    }
}

/// Document provider that records the last title set
#[derive(Clone, Default)]
pub struct MockDocumentProvider {
    pub last_title: Arc<Mutex<Option<String>>>,
}

impl DocumentProvider for MockDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Ok(mut guard) = self.last_title.lock() {
            *guard = Some(title.to_string());
        }
    }
}

/// Clipboard provider that captures every write verbatim
#[derive(Clone, Default)]
pub struct MockClipboardProvider {
    writes: Arc<Mutex<Vec<String>>>,
}

impl MockClipboardProvider {
    /// All texts written so far, in order
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().map(|g| g.clone()).unwrap_or_default()
    }
}

impl ClipboardProvider for MockClipboardProvider {
    fn write_text(&self, text: &str) {
        if let Ok(mut guard) = self.writes.lock() {
            guard.push(text.to_string());
        }
    }
}

/// Create a mock platform plus a handle to the capturing clipboard
pub fn create_mock_platform() -> (Platform, MockClipboardProvider) {
    let clipboard = MockClipboardProvider::default();
    let platform = Platform::new(
        MockSleepProvider,
        MockStorageProvider::default(),
        MockLogProvider::default(),
        MockDocumentProvider::default(),
        clipboard.clone(),
    );
    (platform, clipboard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::PlatformPort;

    #[test]
    fn clipboard_captures_the_literal_text() {
        let (platform, clipboard) = create_mock_platform();
        let text = "Get Started Today - Special Launch Offer!";

        platform.clipboard_write(text);

        assert_eq!(clipboard.writes(), vec![text.to_string()]);
    }

    #[tokio::test]
    async fn sleep_future_can_cross_thread_boundaries() {
        let (platform, _) = create_mock_platform();
        let platform: Arc<dyn PlatformPort> = Arc::new(platform);

        // tokio::spawn requires the awaited future to be Send, same as
        // the async backend trait methods that sleep through the port.
        let handle = tokio::spawn(async move {
            platform.sleep_ms(0).await;
        });
        handle.await.expect("sleep task completes");
    }

    #[test]
    fn log_calls_reach_the_provider() {
        let log = MockLogProvider::default();
        let platform = Platform::new(
            MockSleepProvider,
            MockStorageProvider::default(),
            log.clone(),
            MockDocumentProvider::default(),
            MockClipboardProvider::default(),
        );

        platform.log_error("Ad copy generation failed: backend returned status 502");
        platform.log_debug("dispatching generation request");

        assert_eq!(
            log.entries(),
            vec![
                "error: Ad copy generation failed: backend returned status 502".to_string(),
                "debug: dispatching generation request".to_string(),
            ]
        );
    }

    #[test]
    fn storage_round_trips() {
        let (platform, _) = create_mock_platform();
        platform.storage_save("k", "v");
        assert_eq!(platform.storage_load("k"), Some("v".to_string()));
        platform.storage_remove("k");
        assert_eq!(platform.storage_load("k"), None);
    }
}
