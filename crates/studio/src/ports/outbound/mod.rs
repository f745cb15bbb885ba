//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must
//! implement, allowing application and UI code to interact with external
//! systems without depending on concrete implementations.

pub mod auth_port;
pub mod backend_port;
pub mod platform;
pub mod platform_port;

pub use auth_port::{AccountInfo, AuthPort};
pub use backend_port::{BackendError, GenerationBackendPort};
pub use platform::{
    storage_keys, ClipboardProvider, DocumentProvider, LogProvider, SleepFuture, SleepProvider,
    StorageProvider,
};
pub use platform_port::PlatformPort;
