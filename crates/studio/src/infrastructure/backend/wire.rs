//! Wire codec for the generation backend contract
//!
//! Request: `{ "tool": "social"|"email"|"ad-copy", "options": {...}, "inputs": {...} }`.
//! Response: the tool-specific result object. Field names are camelCase
//! on the wire.

use copydeck_domain::{GenerationRequest, GenerationResult, ToolKind};
use serde_json::{json, Value};

use crate::ports::outbound::BackendError;

/// Encode a request into the backend's wire shape
pub fn encode_request(request: &GenerationRequest) -> Value {
    match request {
        GenerationRequest::SocialMedia {
            platform,
            content_type,
            tone,
            topic,
        } => json!({
            "tool": ToolKind::SocialMedia.as_str(),
            "options": {
                "platform": platform.as_str(),
                "contentType": content_type.as_str(),
                "tone": tone.as_str(),
            },
            "inputs": { "topic": topic },
        }),
        GenerationRequest::Email {
            email_type,
            tone,
            subject,
            description,
        } => json!({
            "tool": ToolKind::Email.as_str(),
            "options": {
                "emailType": email_type.as_str(),
                "tone": tone.as_str(),
            },
            "inputs": { "subject": subject, "description": description },
        }),
        GenerationRequest::AdCopy {
            platform,
            objective,
            tone,
            product_info,
            target_audience,
        } => json!({
            "tool": ToolKind::AdCopy.as_str(),
            "options": {
                "platform": platform.as_str(),
                "objective": objective.as_str(),
                "tone": tone.as_str(),
            },
            "inputs": {
                "productInfo": product_info,
                "targetAudience": target_audience,
            },
        }),
    }
}

/// Decode a backend response body into the tool's result variant
pub fn decode_response(tool: ToolKind, body: &Value) -> Result<GenerationResult, BackendError> {
    match tool {
        ToolKind::SocialMedia => Ok(GenerationResult::Social {
            content: required_str(body, "content")?,
        }),
        ToolKind::Email => Ok(GenerationResult::Email {
            subject: required_str(body, "subject")?,
            body: required_str(body, "body")?,
        }),
        ToolKind::AdCopy => Ok(GenerationResult::AdCopy {
            headline: required_str(body, "headline")?,
            description: required_str(body, "description")?,
            call_to_action: required_str(body, "callToAction")?,
        }),
    }
}

fn required_str(body: &Value, field: &str) -> Result<String, BackendError> {
    body.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| BackendError::Malformed(format!("missing string field `{}`", field)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use copydeck_domain::{AdObjective, AdPlatform, AdTone};

    #[test]
    fn encodes_ad_copy_with_options_and_inputs() {
        let request = GenerationRequest::AdCopy {
            platform: AdPlatform::Google,
            objective: AdObjective::Conversion,
            tone: AdTone::Urgent,
            product_info: "Eco bottle".to_string(),
            target_audience: "Students".to_string(),
        };

        let payload = encode_request(&request);

        assert_eq!(payload["tool"], "ad-copy");
        assert_eq!(payload["options"]["platform"], "google");
        assert_eq!(payload["options"]["objective"], "conversion");
        assert_eq!(payload["inputs"]["productInfo"], "Eco bottle");
        assert_eq!(payload["inputs"]["targetAudience"], "Students");
    }

    #[test]
    fn decodes_each_tool_variant() {
        let social = json!({ "content": "post text" });
        assert_eq!(
            decode_response(ToolKind::SocialMedia, &social).expect("social"),
            GenerationResult::Social {
                content: "post text".to_string()
            }
        );

        let email = json!({ "subject": "s", "body": "b" });
        assert_eq!(
            decode_response(ToolKind::Email, &email).expect("email"),
            GenerationResult::Email {
                subject: "s".to_string(),
                body: "b".to_string()
            }
        );

        let ad = json!({ "headline": "h", "description": "d", "callToAction": "c" });
        assert_eq!(
            decode_response(ToolKind::AdCopy, &ad).expect("ad"),
            GenerationResult::AdCopy {
                headline: "h".to_string(),
                description: "d".to_string(),
                call_to_action: "c".to_string()
            }
        );
    }

    #[test]
    fn missing_field_is_malformed() {
        let body = json!({ "headline": "h", "description": "d" });
        let err = decode_response(ToolKind::AdCopy, &body).expect_err("must fail");
        assert!(matches!(err, BackendError::Malformed(_)));
    }

    #[test]
    fn wrong_type_is_malformed() {
        let body = json!({ "content": 42 });
        let err = decode_response(ToolKind::SocialMedia, &body).expect_err("must fail");
        assert!(matches!(err, BackendError::Malformed(_)));
    }
}
