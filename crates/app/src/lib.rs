//! Mentionwatch client composition root
//!
//! Wires configuration to service factories and hands out the two
//! controllers the presentation layer drives.

use std::sync::Arc;

use mentionwatch_analysis::{AnalysisConfig, AnalysisServiceFactory};
use mentionwatch_api::{ProjectServiceFactory, ProjectsConfig};
use mentionwatch_projects::{ProjectCreationFlow, ProjectListController};

/// The wired-up controllers backing the project pages
pub struct Controllers {
    pub flow: ProjectCreationFlow,
    pub list: ProjectListController,
}

/// Create the controllers from environment configuration
pub fn create_controllers() -> Result<Controllers, anyhow::Error> {
    let analysis_config = AnalysisConfig::from_env()?;
    let projects_config = ProjectsConfig::from_env()?;

    let analysis_service = Arc::from(AnalysisServiceFactory::create(analysis_config)?);
    let project_service: Arc<dyn mentionwatch_api::ProjectService> =
        Arc::from(ProjectServiceFactory::create(projects_config)?);

    let flow = ProjectCreationFlow::new(analysis_service, Arc::clone(&project_service));
    let list = ProjectListController::new(project_service);

    Ok(Controllers { flow, list })
}
