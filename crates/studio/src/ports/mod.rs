//! Ports - interface definitions between layers

pub mod outbound;
