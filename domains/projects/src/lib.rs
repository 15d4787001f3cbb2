//! Projects domain: creation wizard and project list controllers

pub mod controller;
pub mod domain;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{ProjectDraft, MAX_NAME_CHARS, MIN_DESCRIPTION_CHARS};
pub use domain::state::{StateError, WizardEvent, WizardState, WizardStateMachine};
pub use domain::validation::{
    display_subreddit, normalize_subreddit, normalize_subreddits, validate_subreddit,
};

// Re-export controllers
pub use controller::flow::ProjectCreationFlow;
pub use controller::list::ProjectListController;

// Re-export service types the controllers orchestrate
pub use mentionwatch_analysis::{AnalysisService, InitialAnalysis};
pub use mentionwatch_api::{NewProject, Project, ProjectService};
