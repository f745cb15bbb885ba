//! Service providers for the presentation layer
//!
//! Dioxus context providers for application services. Components use
//! `use_context` to access services without depending on infrastructure
//! implementations.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::services::GenerationService;
use crate::ports::outbound::AuthPort;

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services {
    pub generation: Arc<GenerationService>,
    pub auth: Arc<dyn AuthPort>,
}

impl Services {
    /// Create the service bundle with the given ports
    pub fn new(generation: Arc<GenerationService>, auth: Arc<dyn AuthPort>) -> Self {
        Self { generation, auth }
    }
}

/// Hook to access the GenerationService from context
pub fn use_generation_service() -> Arc<GenerationService> {
    let services = use_context::<Services>();
    services.generation.clone()
}

/// Hook to access the AuthPort from context
pub fn use_auth() -> Arc<dyn AuthPort> {
    let services = use_context::<Services>();
    services.auth.clone()
}
