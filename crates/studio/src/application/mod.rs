//! Application layer - workflow state machine and services

pub mod services;
pub mod workflow;

pub use workflow::{Ticket, Workflow, WorkflowPhase};
