use async_trait::async_trait;
use common::{AnalysisRequest, ApiError, ScenarioRequest, SubmissionKind, YieldApi};
use gloo_net::http::Request;
use serde::Serialize;
use serde_json::Value;

use crate::settings::AppSettings;

/// `YieldApi` over the browser's `fetch`.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpYieldApi {
    base_url: String,
}

impl HttpYieldApi {
    pub fn new(settings: &AppSettings) -> Self {
        Self {
            base_url: settings.api_base_url(),
        }
    }

    /// POSTs `body` as JSON and returns the response body as an opaque value.
    async fn post<B>(&self, endpoint: &str, body: &B) -> Result<Value, ApiError>
    where
        B: Serialize,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        log::debug!("POST request to: {}", url);

        let response = Request::post(&url)
            .json(body)
            .map_err(|e| {
                log::error!("POST {} - Failed to serialize request: {}", endpoint, e);
                ApiError::Encode(e.to_string())
            })?
            .send()
            .await
            .map_err(|e| {
                log::error!("POST {} - Request failed: {}", endpoint, e);
                ApiError::Network(e.to_string())
            })?;

        if !response.ok() {
            log::error!("POST {} - HTTP error: {}", endpoint, response.status());
            return Err(ApiError::Status(response.status()));
        }

        log::trace!("POST {} - Response received, parsing JSON", endpoint);
        let body: Value = response.json().await.map_err(|e| {
            log::error!("POST {} - Failed to parse response: {}", endpoint, e);
            ApiError::Decode(e.to_string())
        })?;

        log::info!("POST {} - Success", endpoint);
        Ok(body)
    }
}

#[async_trait(?Send)]
impl YieldApi for HttpYieldApi {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<Value, ApiError> {
        self.post(SubmissionKind::Analysis.endpoint(), request).await
    }

    async fn simulate(&self, request: &ScenarioRequest) -> Result<Value, ApiError> {
        self.post(SubmissionKind::Scenario.endpoint(), request).await
    }
}
