//! Stub generation backend
//!
//! The shipped default when no backend URL is configured: a fixed delay
//! followed by canned, tool-specific output. The delay exists so the
//! loading states in the UI are actually visible; tests construct the
//! stub with a zero delay.

use std::sync::Arc;

use copydeck_domain::{GenerationRequest, GenerationResult};

use crate::ports::outbound::{BackendError, GenerationBackendPort, PlatformPort};

/// Simulated generation latency in milliseconds
const STUB_DELAY_MS: u64 = 2000;

/// Backend that pretends to generate content
pub struct StubGenerationBackend {
    platform: Arc<dyn PlatformPort>,
    delay_ms: u64,
}

impl StubGenerationBackend {
    pub fn new(platform: Arc<dyn PlatformPort>) -> Self {
        Self {
            platform,
            delay_ms: STUB_DELAY_MS,
        }
    }

    /// Stub with a custom delay (zero in tests)
    pub fn with_delay(platform: Arc<dyn PlatformPort>, delay_ms: u64) -> Self {
        Self { platform, delay_ms }
    }

    fn canned_response(request: &GenerationRequest) -> GenerationResult {
        match request {
            GenerationRequest::SocialMedia {
                platform,
                content_type,
                tone,
                ..
            } => GenerationResult::Social {
                content: format!(
                    "Here's your {} {} for {}:\n\n\
                     🚀 Exciting news! We're revolutionizing the way businesses approach digital marketing!\n\n\
                     💡 Our AI-powered solutions help you create engaging content that resonates with your audience.\n\n\
                     🎯 Whether you're a startup or an established business, we've got the tools you need to succeed.\n\n\
                     #DigitalMarketing #Innovation #AI #Marketing",
                    tone.as_str(),
                    content_type.as_str(),
                    platform.as_str()
                ),
            },
            GenerationRequest::Email {
                subject,
                description,
                ..
            } => GenerationResult::Email {
                subject: format!("{} - Special Offer Inside!", subject),
                body: format!(
                    "Dear Valued Customer,\n\n\
                     We hope this email finds you well. We're excited to share some amazing news with you!\n\n\
                     {}\n\n\
                     Key Benefits:\n\
                     • Increased engagement with your target audience\n\
                     • Better conversion rates\n\
                     • Time and cost savings\n\
                     • Professional content that resonates\n\n\
                     Don't miss out on this opportunity to transform your business.\n\n\
                     Best regards,\n\
                     Your Company Name",
                    description
                ),
            },
            GenerationRequest::AdCopy { .. } => GenerationResult::AdCopy {
                headline: "Transform Your Business with AI-Powered Marketing".to_string(),
                description: "Unlock the power of AI to create engaging content that resonates \
                              with your audience. Save time and boost your marketing results \
                              with our cutting-edge tools."
                    .to_string(),
                call_to_action: "Get Started Today - Special Launch Offer!".to_string(),
            },
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl GenerationBackendPort for StubGenerationBackend {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, BackendError> {
        self.platform.sleep_ms(self.delay_ms).await;
        Ok(Self::canned_response(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::create_mock_platform;
    use copydeck_domain::{
        AdObjective, AdPlatform, AdTone, EmailTone, EmailType, SocialContentType, SocialPlatform,
        SocialTone,
    };

    fn stub() -> StubGenerationBackend {
        let (platform, _) = create_mock_platform();
        StubGenerationBackend::with_delay(Arc::new(platform), 0)
    }

    #[tokio::test]
    async fn ad_copy_returns_the_fixed_triple() {
        let request = GenerationRequest::AdCopy {
            platform: AdPlatform::Facebook,
            objective: AdObjective::Awareness,
            tone: AdTone::Professional,
            product_info: "Eco bottle".to_string(),
            target_audience: "Students".to_string(),
        };

        let result = stub().generate(&request).await.expect("stub never fails");

        assert_eq!(
            result,
            GenerationResult::AdCopy {
                headline: "Transform Your Business with AI-Powered Marketing".to_string(),
                description: "Unlock the power of AI to create engaging content that resonates \
                              with your audience. Save time and boost your marketing results \
                              with our cutting-edge tools."
                    .to_string(),
                call_to_action: "Get Started Today - Special Launch Offer!".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn social_content_interpolates_the_selected_options() {
        let request = GenerationRequest::SocialMedia {
            platform: SocialPlatform::Linkedin,
            content_type: SocialContentType::Caption,
            tone: SocialTone::Humorous,
            topic: "Launch week".to_string(),
        };

        let result = stub().generate(&request).await.expect("stub never fails");
        let GenerationResult::Social { content } = result else {
            panic!("expected social result");
        };
        assert!(content.starts_with("Here's your humorous caption for linkedin:"));
    }

    #[tokio::test]
    async fn email_builds_subject_and_body_from_inputs() {
        let request = GenerationRequest::Email {
            email_type: EmailType::Promotional,
            tone: EmailTone::Friendly,
            subject: "Spring sale".to_string(),
            description: "Twenty percent off everything this week.".to_string(),
        };

        let result = stub().generate(&request).await.expect("stub never fails");
        let GenerationResult::Email { subject, body } = result else {
            panic!("expected email result");
        };
        assert_eq!(subject, "Spring sale - Special Offer Inside!");
        assert!(body.contains("Twenty percent off everything this week."));
    }
}
