//! Platform abstraction ports for cross-platform compatibility
//!
//! These traits abstract platform-specific operations so that:
//! 1. Application/presentation code remains platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with mock implementations
//!
//! NOTE: The `Platform` struct (DI container) that aggregates these
//! traits lives in `state/platform.rs`, not here. The ports layer
//! contains only trait definitions.

use std::{future::Future, pin::Pin};

/// Boxed sleep future.
///
/// `Send` off-wasm so the future can be awaited inside `Send` async
/// trait methods and spawned tasks; the browser runtime is
/// single-threaded and its timer futures are not `Send`.
#[cfg(not(target_arch = "wasm32"))]
pub type SleepFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;
#[cfg(target_arch = "wasm32")]
pub type SleepFuture = Pin<Box<dyn Future<Output = ()> + 'static>>;

/// Async sleep abstraction
///
/// Used to avoid `#[cfg]` branches in UI code (toast auto-dismiss,
/// copied-indicator revert, stub backend delay).
pub trait SleepProvider: Clone + 'static {
    fn sleep_ms(&self, ms: u64) -> SleepFuture;
}

/// Persistent storage abstraction (localStorage/file-based)
pub trait StorageProvider: Clone + 'static {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// Logging abstraction
pub trait LogProvider: Clone + 'static {
    fn info(&self, msg: &str);
    fn error(&self, msg: &str);
    fn debug(&self, msg: &str);
    fn warn(&self, msg: &str);
}

/// Browser document operations (page title, etc.)
pub trait DocumentProvider: Clone + 'static {
    /// Set the browser page title (window title on desktop)
    fn set_page_title(&self, title: &str);
}

/// System clipboard abstraction (write-only; the app never reads it)
pub trait ClipboardProvider: Clone + 'static {
    /// Write the exact text to the system clipboard.
    ///
    /// Fire-and-forget: failures are logged by the adapter, never
    /// surfaced to the workflow.
    fn write_text(&self, text: &str);
}

/// Storage key constants
///
/// Kept in the ports layer as they define the contract for what keys
/// are used across the application.
pub mod storage_keys {
    pub const BACKEND_URL: &str = "copydeck_backend_url";
    pub const ACCOUNT: &str = "copydeck_account";
}
