//! Generation service - validation gate in front of the backend port
//!
//! This service wraps the generation backend port and enforces the
//! submission invariant: an invalid request is rejected locally and
//! never reaches the backend. It depends on the trait abstraction, not
//! a concrete adapter.

use std::sync::Arc;

use copydeck_domain::{DomainError, GenerationRequest, GenerationResult};
use thiserror::Error;

use crate::ports::outbound::{BackendError, GenerationBackendPort};

/// Why a generation attempt did not produce a result.
///
/// `Validation` is local and blocks submission until input is
/// corrected; `Backend` is remote and retryable as-is.
#[derive(Debug, Error, Clone)]
pub enum GenerationError {
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Service for issuing generation requests through the backend port
pub struct GenerationService {
    backend: Arc<dyn GenerationBackendPort>,
}

impl GenerationService {
    /// Create a new GenerationService with the given backend
    pub fn new(backend: Arc<dyn GenerationBackendPort>) -> Self {
        Self { backend }
    }

    /// Validate the request, then run it against the backend.
    ///
    /// Validation failures short-circuit; the backend is only invoked
    /// for requests whose required free-text fields are all present.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, GenerationError> {
        request.validate()?;

        tracing::debug!(tool = request.tool_kind().as_str(), "dispatching generation request");
        let result = self.backend.generate(request).await?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use copydeck_domain::{SocialContentType, SocialPlatform, SocialTone};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Fake backend that counts calls and returns a fixed response
    struct CountingBackend {
        calls: AtomicUsize,
        response: Result<GenerationResult, BackendError>,
    }

    impl CountingBackend {
        fn returning(response: Result<GenerationResult, BackendError>) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                response,
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl GenerationBackendPort for CountingBackend {
        async fn generate(
            &self,
            _request: &GenerationRequest,
        ) -> Result<GenerationResult, BackendError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response.clone()
        }
    }

    fn social(topic: &str) -> GenerationRequest {
        GenerationRequest::SocialMedia {
            platform: SocialPlatform::Facebook,
            content_type: SocialContentType::Post,
            tone: SocialTone::Casual,
            topic: topic.to_string(),
        }
    }

    #[tokio::test]
    async fn invalid_request_never_reaches_the_backend() {
        let backend = CountingBackend::returning(Ok(GenerationResult::Social {
            content: "unused".to_string(),
        }));
        let svc = GenerationService::new(backend.clone());

        let err = svc.generate(&social("   ")).await.expect_err("must fail");
        assert!(matches!(err, GenerationError::Validation(_)));
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn valid_request_passes_the_result_through() {
        let expected = GenerationResult::Social {
            content: "generated post".to_string(),
        };
        let backend = CountingBackend::returning(Ok(expected.clone()));
        let svc = GenerationService::new(backend.clone());

        let result = svc.generate(&social("Launch week")).await.expect("ok");
        assert_eq!(result, expected);
        assert_eq!(backend.calls(), 1);
    }

    #[tokio::test]
    async fn backend_failure_is_classified_as_backend_error() {
        let backend = CountingBackend::returning(Err(BackendError::Status(502)));
        let svc = GenerationService::new(backend.clone());

        let err = svc
            .generate(&social("Launch week"))
            .await
            .expect_err("must fail");
        assert!(matches!(err, GenerationError::Backend(BackendError::Status(502))));
        assert_eq!(backend.calls(), 1);
    }
}
