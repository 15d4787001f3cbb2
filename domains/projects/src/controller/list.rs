//! Project list controller
//!
//! Loads, inserts, and removes project records. Deletion is optimistic:
//! the record leaves the held list immediately and a failed backend call is
//! reconciled by a full reload of the server's truth rather than a local
//! undo. Every mutation replaces the held list wholesale, so each state
//! transition is atomic and observable.

use std::sync::Arc;
use uuid::Uuid;

use mentionwatch_api::{Project, ProjectService};
use mentionwatch_common::{Error, Notice, Result};

use crate::controller::flow::ProjectCreationFlow;

/// Holds the project listing page's records
pub struct ProjectListController {
    project_service: Arc<dyn ProjectService>,
    projects: Vec<Project>,
    notices: Vec<Notice>,
}

impl ProjectListController {
    /// Create a controller with an empty held list
    pub fn new(project_service: Arc<dyn ProjectService>) -> Self {
        Self {
            project_service,
            projects: Vec::new(),
            notices: Vec::new(),
        }
    }

    /// The held list of projects
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Drain pending notices for the presentation layer
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Fetch all projects and replace the held list wholesale.
    ///
    /// A failed load leaves the previous list intact.
    pub async fn load(&mut self) -> Result<()> {
        tracing::debug!("Loading project list");

        match self.project_service.get_projects().await {
            Ok(projects) => {
                tracing::info!(count = projects.len(), "Project list loaded");
                self.projects = projects;
                self.notices.push(Notice::success("Projects loaded"));
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load project list");
                self.notices.push(Notice::error("Failed to load projects"));
                Err(Error::Load(e.to_string()))
            }
        }
    }

    /// Create a project through the wizard and append the acknowledged
    /// record to the held list.
    ///
    /// There is no optimistic insert; the flow's error is re-thrown so the
    /// caller keeps the dialog open on failure.
    pub async fn create(&mut self, flow: &mut ProjectCreationFlow) -> Result<Project> {
        let project = flow.submit().await?;

        let mut next = self.projects.clone();
        next.push(project.clone());
        self.projects = next;

        Ok(project)
    }

    /// Optimistically remove a project, then delete it on the backend.
    ///
    /// On failure the held list is resynchronized by a full reload of the
    /// server's truth; if that reload also fails the optimistic list stands
    /// until the next successful load.
    pub async fn delete(&mut self, id: Uuid) -> Result<()> {
        tracing::debug!(project_id = %id, "Deleting project");

        self.projects = self
            .projects
            .iter()
            .filter(|p| p.id != id)
            .cloned()
            .collect();

        match self.project_service.delete_project(id).await {
            Ok(()) => {
                tracing::info!(project_id = %id, "Project deleted");
                self.notices.push(Notice::success("Project deleted"));
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, project_id = %id, "Delete failed, reloading list");
                match self.project_service.get_projects().await {
                    Ok(projects) => self.projects = projects,
                    Err(reload) => {
                        tracing::warn!(error = %reload, "Reload after failed delete also failed")
                    }
                }
                self.notices.push(Notice::error("Failed to delete project"));
                Err(Error::Delete(e.to_string()))
            }
        }
    }
}
