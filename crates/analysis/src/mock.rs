//! Mock Analyzer Implementation
//!
//! Programmable mock for testing the creation workflow:
//! - `MockAnalysisService`: configurable mock with request recording
//! - `MockAnalysisBehavior`: controls outcome and canned results
//! - `MockAnalysisOutcome`: Succeed or Fail

use crate::{AnalysisError, AnalysisService, InitialAnalysis};
use std::sync::{Arc, Mutex, RwLock};

/// What outcome the mock should produce
#[derive(Debug, Clone, Default, PartialEq)]
pub enum MockAnalysisOutcome {
    /// Return a derived or canned analysis
    #[default]
    Succeed,
    /// Return a response error
    Fail,
}

/// Programmable behavior for the mock analyzer
#[derive(Debug, Clone)]
pub struct MockAnalysisBehavior {
    pub outcome: Arc<RwLock<MockAnalysisOutcome>>,
    pub canned_result: Arc<RwLock<Option<InitialAnalysis>>>,
    pub error_message: Arc<RwLock<String>>,
}

impl Default for MockAnalysisBehavior {
    fn default() -> Self {
        Self {
            outcome: Arc::new(RwLock::new(MockAnalysisOutcome::Succeed)),
            canned_result: Arc::new(RwLock::new(None)),
            error_message: Arc::new(RwLock::new("Mock analysis failure".to_string())),
        }
    }
}

impl MockAnalysisBehavior {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the mock outcome
    pub fn set_outcome(&self, outcome: MockAnalysisOutcome) {
        *self.outcome.write().unwrap() = outcome;
    }

    /// Configure a canned analysis returned instead of the derived one
    pub fn set_canned_result(&self, result: InitialAnalysis) {
        *self.canned_result.write().unwrap() = Some(result);
    }

    /// Configure the error message for the failure outcome
    pub fn set_error_message(&self, message: impl Into<String>) {
        *self.error_message.write().unwrap() = message.into();
    }

    /// Reset to default behavior
    pub fn reset(&self) {
        *self.outcome.write().unwrap() = MockAnalysisOutcome::Succeed;
        *self.canned_result.write().unwrap() = None;
        *self.error_message.write().unwrap() = "Mock analysis failure".to_string();
    }

    /// Read current outcome
    pub fn get_outcome(&self) -> MockAnalysisOutcome {
        self.outcome.read().unwrap().clone()
    }
}

/// A recorded analyzer request for test assertions
#[derive(Debug, Clone)]
pub struct RecordedAnalysisRequest {
    pub name: String,
    pub description: String,
}

/// Mock analyzer with programmable behavior
#[derive(Debug, Clone)]
pub struct MockAnalysisService {
    behavior: Arc<MockAnalysisBehavior>,
    history: Arc<Mutex<Vec<RecordedAnalysisRequest>>>,
}

impl MockAnalysisService {
    pub fn new() -> Self {
        Self {
            behavior: Arc::new(MockAnalysisBehavior::new()),
            history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_behavior(behavior: Arc<MockAnalysisBehavior>) -> Self {
        Self {
            behavior,
            history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the shared behavior for external configuration
    pub fn behavior(&self) -> &Arc<MockAnalysisBehavior> {
        &self.behavior
    }

    /// Get recorded analyzer requests
    pub fn recorded_requests(&self) -> Vec<RecordedAnalysisRequest> {
        self.history.lock().unwrap().clone()
    }

    /// Number of analyzer calls the mock has received
    pub fn request_count(&self) -> usize {
        self.history.lock().unwrap().len()
    }

    /// Clear history
    pub fn reset_history(&self) {
        self.history.lock().unwrap().clear();
    }

    /// Derive a deterministic analysis from the draft text.
    ///
    /// Lowercased words of the name become keywords; the first keyword is
    /// also proposed as a subreddit alongside a couple of fixed candidates.
    fn derive(name: &str, description: &str) -> InitialAnalysis {
        let mut keywords: Vec<String> = name
            .split_whitespace()
            .map(|w| w.to_lowercase())
            .collect();

        if let Some(first) = description.split_whitespace().next() {
            keywords.push(first.to_lowercase());
        }

        let mut subreddits = vec!["startups".to_string(), "SideProject".to_string()];
        if let Some(first) = keywords.first() {
            subreddits.insert(0, first.clone());
        }

        InitialAnalysis {
            keywords,
            subreddits,
        }
    }
}

impl Default for MockAnalysisService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AnalysisService for MockAnalysisService {
    async fn analyze_initial(
        &self,
        name: &str,
        description: &str,
    ) -> Result<InitialAnalysis, AnalysisError> {
        tracing::info!(name = %name, "Mock analyzer: received analysis request");

        self.history.lock().unwrap().push(RecordedAnalysisRequest {
            name: name.to_string(),
            description: description.to_string(),
        });

        match self.behavior.get_outcome() {
            MockAnalysisOutcome::Fail => {
                let message = self.behavior.error_message.read().unwrap().clone();
                Err(AnalysisError::Response(message))
            }
            MockAnalysisOutcome::Succeed => {
                let canned = self.behavior.canned_result.read().unwrap().clone();
                Ok(canned.unwrap_or_else(|| Self::derive(name, description)))
            }
        }
    }
}
