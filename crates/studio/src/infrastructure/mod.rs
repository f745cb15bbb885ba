//! Infrastructure adapters - concrete implementations of the outbound ports

pub mod auth;
pub mod backend;
pub mod platform;
