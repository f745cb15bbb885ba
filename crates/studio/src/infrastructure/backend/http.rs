//! HTTP generation backend adapter
//!
//! POSTs the wire-encoded request to `{base}/generate` and decodes the
//! tool-specific response. Uses reqwest on desktop and gloo-net in the
//! browser; the shared wire codec lives in `wire.rs`.

use copydeck_domain::{GenerationRequest, GenerationResult};
use serde_json::Value;

use super::wire;
use crate::ports::outbound::{BackendError, GenerationBackendPort};

/// Generation backend reached over HTTP
pub struct HttpGenerationBackend {
    base_url: String,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl HttpGenerationBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::new(),
        }
    }

    fn generate_url(&self) -> String {
        format!("{}/generate", self.base_url)
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn post_json(&self, payload: &Value) -> Result<Value, BackendError> {
        let response = self
            .client
            .post(self.generate_url())
            .json(payload)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| BackendError::Malformed(e.to_string()))
    }

    #[cfg(target_arch = "wasm32")]
    async fn post_json(&self, payload: &Value) -> Result<Value, BackendError> {
        let response = gloo_net::http::Request::post(&self.generate_url())
            .json(payload)
            .map_err(|e| BackendError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(BackendError::Status(response.status()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| BackendError::Malformed(e.to_string()))
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl GenerationBackendPort for HttpGenerationBackend {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, BackendError> {
        let payload = wire::encode_request(request);
        let body = self.post_json(&payload).await?;
        wire::decode_response(request.tool_kind(), &body)
    }
}
