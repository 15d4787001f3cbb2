//! Mentionwatch Analysis Service
//!
//! Derives tracking keywords and candidate subreddits from a project's name
//! and description via the remote analyzer:
//! - HTTP analyzer client for production
//! - Programmable mock analyzer for testing and development
//! - Configurable provider selection via environment

pub mod http;
pub mod mock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Analysis configuration error: {0}")]
    Configuration(String),

    #[error("Analysis request error: {0}")]
    Request(String),

    #[error("Analysis response error: {0}")]
    Response(String),

    #[error("Analysis rate limit exceeded")]
    RateLimit,
}

/// Keywords and subreddits derived from a project draft.
///
/// Immutable once received; a repeated analysis replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialAnalysis {
    pub keywords: Vec<String>,
    pub subreddits: Vec<String>,
}

/// Analysis service configuration
#[derive(Clone)]
pub struct AnalysisConfig {
    pub provider: String,
    pub base_url: String,
    pub api_token: Option<String>,
}

impl std::fmt::Debug for AnalysisConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisConfig")
            .field("provider", &self.provider)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl AnalysisConfig {
    /// Create analysis config from environment variables
    pub fn from_env() -> Result<Self, AnalysisError> {
        let provider = std::env::var("ANALYSIS_PROVIDER").unwrap_or_else(|_| "mock".to_string());
        let base_url = std::env::var("ANALYSIS_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());
        let api_token = std::env::var("ANALYSIS_API_TOKEN").ok();

        Ok(Self {
            provider,
            base_url,
            api_token,
        })
    }
}

/// Analyzer trait for different backends
#[async_trait::async_trait]
pub trait AnalysisService: Send + Sync {
    /// Derive keywords and subreddits from a draft's name and description.
    async fn analyze_initial(
        &self,
        name: &str,
        description: &str,
    ) -> Result<InitialAnalysis, AnalysisError>;
}

/// Factory for creating AnalysisService implementations
pub struct AnalysisServiceFactory;

impl AnalysisServiceFactory {
    pub fn create(config: AnalysisConfig) -> Result<Box<dyn AnalysisService>, AnalysisError> {
        match config.provider.as_str() {
            "http" => {
                tracing::info!("Creating HTTP analysis service");
                Ok(Box::new(http::HttpAnalysisService::new(config)))
            }
            "mock" => {
                tracing::info!("Creating mock analysis service");
                Ok(Box::new(mock::MockAnalysisService::new()))
            }
            provider => Err(AnalysisError::Configuration(format!(
                "Unknown analysis provider: {}. Supported providers: http, mock",
                provider
            ))),
        }
    }
}
