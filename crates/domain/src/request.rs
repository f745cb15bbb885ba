//! Generation requests and the submission invariant.
//!
//! A request bundles the enumerated option choices with the user's
//! free-text inputs for one tool. `validate` enforces the invariant
//! that every required free-text field is non-empty (whitespace-only
//! counts as empty) before a request may be issued to the backend.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::options::{
    AdObjective, AdPlatform, AdTone, EmailTone, EmailType, SocialContentType, SocialPlatform,
    SocialTone, ToolKind,
};

/// A single generation request, tagged by tool
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tool")]
pub enum GenerationRequest {
    /// Social media post/caption/hashtags
    #[serde(rename = "social")]
    SocialMedia {
        platform: SocialPlatform,
        content_type: SocialContentType,
        tone: SocialTone,
        /// Required: what the post should be about
        topic: String,
    },
    /// Marketing email (subject + body)
    #[serde(rename = "email")]
    Email {
        email_type: EmailType,
        tone: EmailTone,
        /// Required: the subject line to build on
        subject: String,
        /// Required: what the email should say
        description: String,
    },
    /// Ad copy (headline + description + call-to-action)
    #[serde(rename = "ad-copy")]
    AdCopy {
        platform: AdPlatform,
        objective: AdObjective,
        tone: AdTone,
        /// Required: the product or service being advertised
        product_info: String,
        /// Required: who the ad should speak to
        target_audience: String,
    },
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

impl GenerationRequest {
    /// The tool this request belongs to
    pub fn tool_kind(&self) -> ToolKind {
        match self {
            Self::SocialMedia { .. } => ToolKind::SocialMedia,
            Self::Email { .. } => ToolKind::Email,
            Self::AdCopy { .. } => ToolKind::AdCopy,
        }
    }

    /// Check the required free-text fields for this tool.
    ///
    /// Messages are user-facing and match the validation notices shown
    /// on each tool page. A failed validation must never reach the
    /// backend.
    pub fn validate(&self) -> Result<(), DomainError> {
        match self {
            Self::SocialMedia { topic, .. } => {
                if is_blank(topic) {
                    return Err(DomainError::validation("Please enter a topic"));
                }
            }
            Self::Email {
                subject,
                description,
                ..
            } => {
                if is_blank(subject) || is_blank(description) {
                    return Err(DomainError::validation("Please fill in all fields"));
                }
            }
            Self::AdCopy {
                product_info,
                target_audience,
                ..
            } => {
                if is_blank(product_info) || is_blank(target_audience) {
                    return Err(DomainError::validation(
                        "Please fill in all required fields",
                    ));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn social(topic: &str) -> GenerationRequest {
        GenerationRequest::SocialMedia {
            platform: SocialPlatform::Facebook,
            content_type: SocialContentType::Post,
            tone: SocialTone::Professional,
            topic: topic.to_string(),
        }
    }

    fn ad(product_info: &str, target_audience: &str) -> GenerationRequest {
        GenerationRequest::AdCopy {
            platform: AdPlatform::Google,
            objective: AdObjective::Conversion,
            tone: AdTone::Persuasive,
            product_info: product_info.to_string(),
            target_audience: target_audience.to_string(),
        }
    }

    #[test]
    fn social_requires_a_topic() {
        assert_eq!(
            social("").validate(),
            Err(DomainError::validation("Please enter a topic"))
        );
        assert!(social("Product launch").validate().is_ok());
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        assert!(social("   \n\t").validate().is_err());
        assert!(ad("Eco bottle", "  ").validate().is_err());
    }

    #[test]
    fn email_requires_subject_and_description() {
        let missing_description = GenerationRequest::Email {
            email_type: EmailType::Newsletter,
            tone: EmailTone::Professional,
            subject: "Spring update".to_string(),
            description: String::new(),
        };
        assert_eq!(
            missing_description.validate(),
            Err(DomainError::validation("Please fill in all fields"))
        );
    }

    #[test]
    fn ad_copy_requires_both_fields() {
        assert!(ad("Eco bottle", "").validate().is_err());
        assert!(ad("", "Students").validate().is_err());
        assert!(ad("Eco bottle", "Students").validate().is_ok());
    }

    #[test]
    fn tool_kind_matches_variant() {
        assert_eq!(social("x").tool_kind(), ToolKind::SocialMedia);
        assert_eq!(ad("x", "y").tool_kind(), ToolKind::AdCopy);
    }

    #[test]
    fn serializes_with_tool_tag() {
        let value = serde_json::to_value(social("Launch week")).expect("serialize");
        assert_eq!(value["tool"], "social");
        assert_eq!(value["platform"], "facebook");
        assert_eq!(value["topic"], "Launch week");
    }
}
