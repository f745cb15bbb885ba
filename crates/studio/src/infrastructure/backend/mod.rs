//! Generation backend adapters
//!
//! Two implementations of `GenerationBackendPort`: an HTTP adapter for
//! a real service and a stub with canned output. The factory picks one
//! based on configuration; nothing above this module knows which.

mod http;
mod stub;
pub mod wire;

pub use http::HttpGenerationBackend;
pub use stub::StubGenerationBackend;

use std::sync::Arc;

use crate::ports::outbound::{storage_keys, GenerationBackendPort, PlatformPort};

/// Select the generation backend from configuration.
///
/// Resolution order: `COPYDECK_BACKEND_URL` environment variable
/// (desktop only), then the persisted backend URL, then the stub.
pub fn create_backend(platform: Arc<dyn PlatformPort>) -> Arc<dyn GenerationBackendPort> {
    let configured_url = configured_backend_url(platform.as_ref());

    match configured_url {
        Some(url) => {
            tracing::info!("Using HTTP generation backend at {}", url);
            Arc::new(HttpGenerationBackend::new(url))
        }
        None => {
            tracing::info!("No backend URL configured, using stub generation backend");
            Arc::new(StubGenerationBackend::new(platform))
        }
    }
}

fn configured_backend_url(platform: &dyn PlatformPort) -> Option<String> {
    #[cfg(not(target_arch = "wasm32"))]
    if let Ok(url) = std::env::var("COPYDECK_BACKEND_URL") {
        if !url.trim().is_empty() {
            return Some(url);
        }
    }

    platform
        .storage_load(storage_keys::BACKEND_URL)
        .filter(|url| !url.trim().is_empty())
}
