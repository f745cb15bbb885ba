//! Generated content, tagged by tool.
//!
//! A result is immutable once produced; the workflow replaces it
//! wholesale on the next successful request.

use serde::{Deserialize, Serialize};

use crate::options::ToolKind;

/// Tool-specific generated text
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tool")]
pub enum GenerationResult {
    /// Single text blob for a social post/caption/hashtags
    #[serde(rename = "social")]
    Social { content: String },
    /// Subject line and body for a marketing email
    #[serde(rename = "email")]
    Email { subject: String, body: String },
    /// The three ad copy fields, each independently copyable
    #[serde(rename = "ad-copy")]
    AdCopy {
        headline: String,
        description: String,
        call_to_action: String,
    },
}

impl GenerationResult {
    /// The tool this result belongs to
    pub fn tool_kind(&self) -> ToolKind {
        match self {
            Self::Social { .. } => ToolKind::SocialMedia,
            Self::Email { .. } => ToolKind::Email,
            Self::AdCopy { .. } => ToolKind::AdCopy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ad_copy_round_trips_through_json() {
        let result = GenerationResult::AdCopy {
            headline: "Headline".to_string(),
            description: "Description".to_string(),
            call_to_action: "CTA".to_string(),
        };
        let json = serde_json::to_string(&result).expect("serialize");
        let back: GenerationResult = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, result);
        assert_eq!(back.tool_kind(), ToolKind::AdCopy);
    }
}
