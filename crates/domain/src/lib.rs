//! CopyDeck domain layer.
//!
//! Pure types shared by the client and any future backend: tool kinds,
//! the per-tool option enums, generation requests/results, and the
//! validation invariants that guard submission. No I/O lives here.

pub mod error;
pub mod options;
pub mod request;
pub mod result;

pub use error::DomainError;
pub use options::{
    AdObjective, AdPlatform, AdTone, ClosedEnum, EmailTone, EmailType, SocialContentType,
    SocialPlatform, SocialTone, ToolKind,
};
pub use request::GenerationRequest;
pub use result::GenerationResult;
