//! Shared helpers for workflow integration tests

// Not every test binary uses every helper
#![allow(dead_code)]

use std::sync::Arc;

use mentionwatch_analysis::mock::MockAnalysisService;
use mentionwatch_api::mock::MockProjectService;
use mentionwatch_api::{NewProject, Project};
use mentionwatch_projects::{ProjectCreationFlow, ProjectListController};

/// Mock-backed controllers plus handles to the mocks for assertions
pub struct Harness {
    pub flow: ProjectCreationFlow,
    pub list: ProjectListController,
    pub analysis: MockAnalysisService,
    pub backend: MockProjectService,
}

impl Harness {
    pub fn new() -> Self {
        let analysis = MockAnalysisService::new();
        let backend = MockProjectService::new();

        let flow = ProjectCreationFlow::new(
            Arc::new(analysis.clone()),
            Arc::new(backend.clone()),
        );
        let list = ProjectListController::new(Arc::new(backend.clone()));

        Self {
            flow,
            list,
            analysis,
            backend,
        }
    }
}

/// A stored project the way the backend would hold it
pub fn stored_project(name: &str) -> Project {
    MockProjectService::project_from(&NewProject {
        name: name.to_string(),
        description: "An existing tracked project".to_string(),
        keywords: vec!["existing".to_string()],
        subreddits: vec!["startups".to_string()],
    })
}

/// Fill the wizard's draft step with a valid draft
pub fn fill_draft(flow: &mut ProjectCreationFlow, name: &str) {
    flow.set_name(name).unwrap();
    flow.set_description("Tracks Reddit chatter about this project")
        .unwrap();
}
