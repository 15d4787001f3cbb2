//! HTTP Project Service Implementation
//!
//! Calls the Mentionwatch backend's project endpoints using reqwest:
//! - `GET /v1/projects`
//! - `POST /v1/projects`
//! - `DELETE /v1/projects/{id}`

use reqwest::Client;
use serde::Deserialize;
use uuid::Uuid;

use crate::{ApiError, NewProject, Project, ProjectService, ProjectsConfig};

/// Backend error response
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: String,
    message: String,
}

/// HTTP project service implementation
pub struct HttpProjectService {
    client: Client,
    config: ProjectsConfig,
}

impl HttpProjectService {
    /// Create a new HTTP project service
    pub fn new(config: ProjectsConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn projects_url(&self) -> String {
        format!("{}/v1/projects", self.config.base_url)
    }

    fn with_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Map a non-2xx response into an ApiError, parsing structured error
    /// bodies when the backend provides one.
    async fn response_error(response: reqwest::Response) -> ApiError {
        let status = response.status();
        let error_body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read error body".to_string());

        if let Ok(error_response) = serde_json::from_str::<ErrorResponse>(&error_body) {
            return ApiError::Response(format!(
                "Backend error ({}): {}",
                error_response.error.code, error_response.error.message
            ));
        }

        ApiError::Response(format!("Backend returned {}: {}", status, error_body))
    }
}

#[async_trait::async_trait]
impl ProjectService for HttpProjectService {
    async fn get_projects(&self) -> Result<Vec<Project>, ApiError> {
        tracing::debug!("Fetching project list");

        let response = self
            .with_auth(self.client.get(self.projects_url()))
            .send()
            .await
            .map_err(|e| ApiError::Request(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::response_error(response).await);
        }

        let projects: Vec<Project> = response
            .json()
            .await
            .map_err(|e| ApiError::Response(format!("Failed to parse response: {}", e)))?;

        tracing::debug!(count = projects.len(), "Fetched project list");
        Ok(projects)
    }

    async fn create_project(&self, new_project: NewProject) -> Result<Project, ApiError> {
        tracing::debug!(name = %new_project.name, "Creating project");

        let response = self
            .with_auth(self.client.post(self.projects_url()).json(&new_project))
            .send()
            .await
            .map_err(|e| ApiError::Request(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::response_error(response).await);
        }

        let project: Project = response
            .json()
            .await
            .map_err(|e| ApiError::Response(format!("Failed to parse response: {}", e)))?;

        tracing::info!(project_id = %project.id, "Project created");
        Ok(project)
    }

    async fn delete_project(&self, id: Uuid) -> Result<(), ApiError> {
        tracing::debug!(project_id = %id, "Deleting project");

        let url = format!("{}/{}", self.projects_url(), id);
        let response = self
            .with_auth(self.client.delete(&url))
            .send()
            .await
            .map_err(|e| ApiError::Request(format!("HTTP request failed: {}", e)))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(id));
        }

        if !response.status().is_success() {
            return Err(Self::response_error(response).await);
        }

        tracing::info!(project_id = %id, "Project deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projects_url() {
        let service = HttpProjectService::new(ProjectsConfig {
            provider: "http".to_string(),
            base_url: "https://api.mentionwatch.app".to_string(),
            api_token: None,
        });
        assert_eq!(
            service.projects_url(),
            "https://api.mentionwatch.app/v1/projects"
        );
    }

    #[test]
    fn test_error_response_parsing() {
        let body = r#"{"error": {"code": "CONFLICT", "message": "duplicate project name"}}"#;
        let parsed: ErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.code, "CONFLICT");
        assert_eq!(parsed.error.message, "duplicate project name");
    }
}
