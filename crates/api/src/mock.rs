//! Mock Project Service Implementation
//!
//! In-memory project store with programmable failures:
//! - `MockProjectService`: assigns ids and timestamps like the backend
//! - `MockProjectBehavior`: per-operation failure switches
//! - Recorded operation history for test assertions

use crate::{ApiError, NewProject, Project, ProjectService};
use chrono::Utc;
use std::sync::{Arc, Mutex, RwLock};
use uuid::Uuid;

/// Per-operation failure switches for the mock backend
#[derive(Debug, Default)]
pub struct MockProjectBehavior {
    pub fail_list: RwLock<bool>,
    pub fail_create: RwLock<bool>,
    pub fail_delete: RwLock<bool>,
}

impl MockProjectBehavior {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_list(&self, fail: bool) {
        *self.fail_list.write().unwrap() = fail;
    }

    pub fn set_fail_create(&self, fail: bool) {
        *self.fail_create.write().unwrap() = fail;
    }

    pub fn set_fail_delete(&self, fail: bool) {
        *self.fail_delete.write().unwrap() = fail;
    }

    /// Reset all switches to succeed
    pub fn reset(&self) {
        self.set_fail_list(false);
        self.set_fail_create(false);
        self.set_fail_delete(false);
    }
}

/// A recorded backend operation for test assertions
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedOperation {
    List,
    Create { name: String },
    Delete { id: Uuid },
}

/// Mock project service backed by an in-memory store
#[derive(Clone, Default)]
pub struct MockProjectService {
    store: Arc<Mutex<Vec<Project>>>,
    behavior: Arc<MockProjectBehavior>,
    history: Arc<Mutex<Vec<RecordedOperation>>>,
}

impl MockProjectService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the shared behavior for external configuration
    pub fn behavior(&self) -> &Arc<MockProjectBehavior> {
        &self.behavior
    }

    /// Seed the store with existing projects
    pub fn seed(&self, projects: Vec<Project>) {
        *self.store.lock().unwrap() = projects;
    }

    /// Snapshot of the server-side store, for reconciliation assertions
    pub fn stored_projects(&self) -> Vec<Project> {
        self.store.lock().unwrap().clone()
    }

    /// Get recorded operations
    pub fn recorded_operations(&self) -> Vec<RecordedOperation> {
        self.history.lock().unwrap().clone()
    }

    /// Clear history
    pub fn reset_history(&self) {
        self.history.lock().unwrap().clear();
    }

    /// Build a stored project the way the backend would
    pub fn project_from(new_project: &NewProject) -> Project {
        Project {
            id: Uuid::new_v4(),
            name: new_project.name.clone(),
            description: new_project.description.clone(),
            keywords: new_project.keywords.clone(),
            subreddits: new_project.subreddits.clone(),
            created_at: Utc::now(),
        }
    }
}

#[async_trait::async_trait]
impl ProjectService for MockProjectService {
    async fn get_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.history.lock().unwrap().push(RecordedOperation::List);

        if *self.behavior.fail_list.read().unwrap() {
            return Err(ApiError::Response("Mock list failure".to_string()));
        }

        Ok(self.store.lock().unwrap().clone())
    }

    async fn create_project(&self, new_project: NewProject) -> Result<Project, ApiError> {
        self.history.lock().unwrap().push(RecordedOperation::Create {
            name: new_project.name.clone(),
        });

        if *self.behavior.fail_create.read().unwrap() {
            return Err(ApiError::Response("Mock create failure".to_string()));
        }

        let project = Self::project_from(&new_project);
        self.store.lock().unwrap().push(project.clone());

        tracing::info!(project_id = %project.id, "Mock backend: project created");
        Ok(project)
    }

    async fn delete_project(&self, id: Uuid) -> Result<(), ApiError> {
        self.history
            .lock()
            .unwrap()
            .push(RecordedOperation::Delete { id });

        if *self.behavior.fail_delete.read().unwrap() {
            return Err(ApiError::Response("Mock delete failure".to_string()));
        }

        let mut store = self.store.lock().unwrap();
        let before = store.len();
        store.retain(|p| p.id != id);
        if store.len() == before {
            return Err(ApiError::NotFound(id));
        }

        tracing::info!(project_id = %id, "Mock backend: project deleted");
        Ok(())
    }
}
