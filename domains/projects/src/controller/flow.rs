//! Project creation wizard controller
//!
//! Two-phase create: the user drafts a name and description, the analyzer
//! derives keywords and subreddits, and the reviewed result is submitted to
//! the backend. Remote calls are awaited inline and are not cancellable once
//! issued; the wizard's transient states reject re-entry.

use std::sync::Arc;

use mentionwatch_analysis::{AnalysisService, InitialAnalysis};
use mentionwatch_api::{Project, ProjectService};
use mentionwatch_common::{Error, Notice, Result};

use crate::domain::entities::ProjectDraft;
use crate::domain::state::{WizardEvent, WizardState, WizardStateMachine};

/// Two-step project creation dialog state
pub struct ProjectCreationFlow {
    analysis_service: Arc<dyn AnalysisService>,
    project_service: Arc<dyn ProjectService>,
    state: WizardState,
    draft: ProjectDraft,
    analysis: Option<InitialAnalysis>,
    notices: Vec<Notice>,
}

impl ProjectCreationFlow {
    /// Create a new flow in the pristine draft step
    pub fn new(
        analysis_service: Arc<dyn AnalysisService>,
        project_service: Arc<dyn ProjectService>,
    ) -> Self {
        Self {
            analysis_service,
            project_service,
            state: WizardState::default(),
            draft: ProjectDraft::default(),
            analysis: None,
            notices: Vec::new(),
        }
    }

    /// Current wizard step
    pub fn state(&self) -> WizardState {
        self.state
    }

    /// The draft being edited
    pub fn draft(&self) -> &ProjectDraft {
        &self.draft
    }

    /// The analyzed keywords and subreddits, if analysis has run
    pub fn analysis(&self) -> Option<&InitialAnalysis> {
        self.analysis.as_ref()
    }

    /// Whether a remote call is in flight
    #[mutants::skip] // Delegates to WizardState::is_busy()
    pub fn is_busy(&self) -> bool {
        self.state.is_busy()
    }

    /// Drain pending notices for the presentation layer
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Edit the draft name; only valid in the draft step
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        self.ensure_step(WizardState::Draft, "the draft can only be edited in the draft step")?;
        self.draft.name = name.into();
        Ok(())
    }

    /// Edit the draft description; only valid in the draft step
    pub fn set_description(&mut self, description: impl Into<String>) -> Result<()> {
        self.ensure_step(WizardState::Draft, "the draft can only be edited in the draft step")?;
        self.draft.description = description.into();
        Ok(())
    }

    /// Replace the analyzed keywords during review
    pub fn set_keywords(&mut self, keywords: Vec<String>) -> Result<()> {
        self.ensure_step(WizardState::Review, "keywords can only be edited during review")?;
        if let Some(analysis) = &mut self.analysis {
            analysis.keywords = keywords;
        }
        Ok(())
    }

    /// Replace the analyzed subreddits during review
    pub fn set_subreddits(&mut self, subreddits: Vec<String>) -> Result<()> {
        self.ensure_step(WizardState::Review, "subreddits can only be edited during review")?;
        if let Some(analysis) = &mut self.analysis {
            analysis.subreddits = subreddits;
        }
        Ok(())
    }

    /// Run the analyzer over the current draft.
    ///
    /// A validation failure blocks the call before any network traffic. A
    /// remote failure returns the wizard to the draft step with the draft
    /// untouched; both are recoverable.
    pub async fn request_analysis(&mut self) -> Result<()> {
        self.ensure_event(&WizardEvent::Analyze, "analysis")?;
        self.draft.validate()?;

        self.apply(WizardEvent::Analyze)?;
        tracing::debug!(name = %self.draft.name, "Requesting draft analysis");

        match self
            .analysis_service
            .analyze_initial(&self.draft.name, &self.draft.description)
            .await
        {
            Ok(analysis) => {
                self.apply(WizardEvent::AnalysisSucceeded)?;
                tracing::info!(
                    keywords = analysis.keywords.len(),
                    subreddits = analysis.subreddits.len(),
                    "Draft analysis complete"
                );
                self.analysis = Some(analysis);
                self.notices.push(Notice::success("Analysis complete"));
                Ok(())
            }
            Err(e) => {
                self.apply(WizardEvent::AnalysisFailed)?;
                tracing::warn!(error = %e, "Draft analysis failed");
                self.notices.push(Notice::error("Analysis failed, please try again"));
                Err(Error::Analysis(e.to_string()))
            }
        }
    }

    /// Submit the reviewed project to the backend.
    ///
    /// The payload is normalized (subreddit prefixes stripped) before it is
    /// sent. On success the dialog closes and the flow resets to a pristine
    /// draft; on failure the wizard stays in review with draft and analysis
    /// untouched, so a retry resubmits the same project.
    pub async fn submit(&mut self) -> Result<Project> {
        self.ensure_event(&WizardEvent::Submit, "submission")?;

        let analysis = self
            .analysis
            .clone()
            .ok_or_else(|| Error::Validation("No analysis to submit".to_string()))?;
        let payload = self
            .draft
            .to_new_project(&analysis.keywords, &analysis.subreddits);

        self.apply(WizardEvent::Submit)?;
        tracing::debug!(name = %payload.name, "Submitting project");

        match self.project_service.create_project(payload).await {
            Ok(project) => {
                self.apply(WizardEvent::SubmitSucceeded)?;
                tracing::info!(project_id = %project.id, "Project created");
                self.notices.push(Notice::success("Project created"));
                self.reset();
                Ok(project)
            }
            Err(e) => {
                self.apply(WizardEvent::SubmitFailed)?;
                tracing::warn!(error = %e, "Project submission failed");
                self.notices
                    .push(Notice::error("Failed to create project, please try again"));
                Err(Error::Submission(e.to_string()))
            }
        }
    }

    /// Return from review to the draft step.
    ///
    /// The analyzed lists are preserved for inspection but are not
    /// resubmitted automatically; re-running analysis replaces them.
    pub fn go_back(&mut self) -> Result<()> {
        self.ensure_event(&WizardEvent::Back, "going back")?;
        self.apply(WizardEvent::Back)
    }

    /// Close the dialog, discarding the draft entirely.
    ///
    /// Not valid while a remote call is in flight.
    pub fn cancel(&mut self) -> Result<()> {
        self.ensure_event(&WizardEvent::Cancel, "cancel")?;
        self.apply(WizardEvent::Cancel)?;
        tracing::debug!("Creation dialog cancelled");
        self.reset();
        Ok(())
    }

    /// Full teardown back to a pristine draft; pending notices survive
    fn reset(&mut self) {
        self.state = WizardState::default();
        self.draft = ProjectDraft::default();
        self.analysis = None;
    }

    fn apply(&mut self, event: WizardEvent) -> Result<()> {
        let next = WizardStateMachine::transition(self.state, event)
            .map_err(|e| Error::Validation(e.to_string()))?;
        self.state = next;
        Ok(())
    }

    fn ensure_event(&self, event: &WizardEvent, operation: &str) -> Result<()> {
        if WizardStateMachine::can_transition(self.state, event) {
            return Ok(());
        }
        if self.state.is_busy() {
            return Err(Error::Busy(operation.to_string()));
        }
        Err(Error::Validation(format!(
            "Cannot perform {} from the {} step",
            operation, self.state
        )))
    }

    fn ensure_step(&self, expected: WizardState, message: &str) -> Result<()> {
        if self.state == expected {
            return Ok(());
        }
        if self.state.is_busy() {
            return Err(Error::Busy(message.to_string()));
        }
        Err(Error::Validation(message.to_string()))
    }
}
