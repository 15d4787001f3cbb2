//! Mentionwatch Project Service
//!
//! Client for the Mentionwatch backend's project REST API:
//! - HTTP client for production (`/v1/projects`)
//! - In-memory mock with programmable failures for testing and development
//! - Configurable provider selection via environment
//!
//! Projects are server-owned records; only `create_project` produces one,
//! and the backend assigns `id` and `created_at`.

pub mod http;
pub mod mock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Project API configuration error: {0}")]
    Configuration(String),

    #[error("Project API request error: {0}")]
    Request(String),

    #[error("Project API response error: {0}")]
    Response(String),

    #[error("Project not found: {0}")]
    NotFound(Uuid),
}

/// A tracked project as held by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub subreddits: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Creation payload for a new project.
///
/// `subreddits` must already be normalized (no `r/` prefix) when the payload
/// crosses this boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub subreddits: Vec<String>,
}

/// Project service configuration
#[derive(Clone)]
pub struct ProjectsConfig {
    pub provider: String,
    pub base_url: String,
    pub api_token: Option<String>,
}

impl std::fmt::Debug for ProjectsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectsConfig")
            .field("provider", &self.provider)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ProjectsConfig {
    /// Create project service config from environment variables
    pub fn from_env() -> Result<Self, ApiError> {
        let provider = std::env::var("PROJECTS_PROVIDER").unwrap_or_else(|_| "mock".to_string());
        let base_url = std::env::var("PROJECTS_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());
        let api_token = std::env::var("PROJECTS_API_TOKEN").ok();

        Ok(Self {
            provider,
            base_url,
            api_token,
        })
    }
}

/// Project service trait for different backends
#[async_trait::async_trait]
pub trait ProjectService: Send + Sync {
    /// Fetch all projects for the current identity.
    async fn get_projects(&self) -> Result<Vec<Project>, ApiError>;

    /// Create a project; the backend assigns id and creation time.
    async fn create_project(&self, new_project: NewProject) -> Result<Project, ApiError>;

    /// Delete a project by id.
    async fn delete_project(&self, id: Uuid) -> Result<(), ApiError>;
}

/// Factory for creating ProjectService implementations
pub struct ProjectServiceFactory;

impl ProjectServiceFactory {
    pub fn create(config: ProjectsConfig) -> Result<Box<dyn ProjectService>, ApiError> {
        match config.provider.as_str() {
            "http" => {
                tracing::info!("Creating HTTP project service");
                Ok(Box::new(http::HttpProjectService::new(config)))
            }
            "mock" => {
                tracing::info!("Creating mock project service");
                Ok(Box::new(mock::MockProjectService::new()))
            }
            provider => Err(ApiError::Configuration(format!(
                "Unknown project provider: {}. Supported providers: http, mock",
                provider
            ))),
        }
    }
}
