//! HTTP Analyzer Implementation
//!
//! Calls the Mentionwatch analyzer endpoint (`POST /v1/analysis/initial`)
//! using reqwest HTTP client.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{AnalysisConfig, AnalysisError, AnalysisService, InitialAnalysis};

/// Analyzer request body
#[derive(Debug, Serialize)]
struct AnalyzeInitialRequest<'a> {
    name: &'a str,
    description: &'a str,
}

/// Analyzer response body
#[derive(Debug, Deserialize)]
struct AnalyzeInitialResponse {
    keywords: Vec<String>,
    subreddits: Vec<String>,
}

/// Analyzer error response
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    message: String,
}

/// HTTP analysis service implementation
pub struct HttpAnalysisService {
    client: Client,
    config: AnalysisConfig,
}

impl HttpAnalysisService {
    /// Create a new HTTP analysis service
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait::async_trait]
impl AnalysisService for HttpAnalysisService {
    async fn analyze_initial(
        &self,
        name: &str,
        description: &str,
    ) -> Result<InitialAnalysis, AnalysisError> {
        let body = AnalyzeInitialRequest { name, description };
        let url = format!("{}/v1/analysis/initial", self.config.base_url);

        tracing::debug!(name = %name, "Sending analyzer request");

        let mut request = self.client.post(&url).json(&body);
        if let Some(token) = &self.config.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AnalysisError::Request(format!("HTTP request failed: {}", e)))?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AnalysisError::RateLimit);
        }

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());

            // Try to parse as a structured API error
            if let Ok(error_response) = serde_json::from_str::<ErrorResponse>(&error_body) {
                return Err(AnalysisError::Response(format!(
                    "Analyzer error ({}): {}",
                    error_response.error.code, error_response.error.message
                )));
            }

            return Err(AnalysisError::Response(format!(
                "Analyzer returned {}: {}",
                status, error_body
            )));
        }

        let api_response: AnalyzeInitialResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::Response(format!("Failed to parse response: {}", e)))?;

        tracing::debug!(
            keywords = api_response.keywords.len(),
            subreddits = api_response.subreddits.len(),
            "Analyzer request completed"
        );

        Ok(InitialAnalysis {
            keywords: api_response.keywords,
            subreddits: api_response.subreddits,
        })
    }
}
