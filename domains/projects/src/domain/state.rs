//! State machine for the project creation wizard
//!
//! The wizard is a formal state machine:
//! - Valid states, including the transient `Analyzing`/`Submitting` steps
//! - Events that trigger transitions
//! - Terminal state (`Closed`)
//!
//! The transient states double as the busy guard: a second `Analyze` or
//! `Submit` while one is in flight is an invalid transition.

use thiserror::Error;

/// Errors that can occur during state transitions
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StateError {
    #[error("Invalid transition: cannot apply {event} from {from}")]
    InvalidTransition { from: String, event: String },

    #[error("Terminal state: {0} is a terminal state and cannot transition")]
    TerminalState(String),
}

/// Wizard steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WizardState {
    /// Entering name and description
    #[default]
    Draft,
    /// Analysis request in flight
    Analyzing,
    /// Reviewing the analyzed keywords and subreddits
    Review,
    /// Create request in flight
    Submitting,
    /// Dialog closed after a successful submit or a cancel
    Closed,
}

impl WizardState {
    /// Check if this is a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Whether a remote call is in flight from this state
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Analyzing | Self::Submitting)
    }

    /// Get all valid next states from current state
    pub fn valid_transitions(&self) -> &'static [WizardState] {
        match self {
            Self::Draft => &[Self::Analyzing, Self::Closed],
            Self::Analyzing => &[Self::Review, Self::Draft],
            Self::Review => &[Self::Draft, Self::Submitting, Self::Closed],
            Self::Submitting => &[Self::Closed, Self::Review],
            Self::Closed => &[],
        }
    }
}

impl std::fmt::Display for WizardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Analyzing => write!(f, "analyzing"),
            Self::Review => write!(f, "review"),
            Self::Submitting => write!(f, "submitting"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

/// Events that trigger wizard state transitions
#[derive(Debug, Clone, PartialEq)]
pub enum WizardEvent {
    /// Start analyzing the draft
    Analyze,
    /// Analyzer returned keywords and subreddits
    AnalysisSucceeded,
    /// Analyzer call failed
    AnalysisFailed,
    /// Return from review to the draft step
    Back,
    /// Submit the reviewed project
    Submit,
    /// Backend acknowledged the create
    SubmitSucceeded,
    /// Create call failed
    SubmitFailed,
    /// Close the dialog without creating
    Cancel,
}

impl std::fmt::Display for WizardEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Analyze => write!(f, "analyze"),
            Self::AnalysisSucceeded => write!(f, "analysis_succeeded"),
            Self::AnalysisFailed => write!(f, "analysis_failed"),
            Self::Back => write!(f, "back"),
            Self::Submit => write!(f, "submit"),
            Self::SubmitSucceeded => write!(f, "submit_succeeded"),
            Self::SubmitFailed => write!(f, "submit_failed"),
            Self::Cancel => write!(f, "cancel"),
        }
    }
}

/// Wizard state machine
pub struct WizardStateMachine;

impl WizardStateMachine {
    /// Attempt a state transition
    pub fn transition(current: WizardState, event: WizardEvent) -> Result<WizardState, StateError> {
        if current.is_terminal() {
            return Err(StateError::TerminalState(current.to_string()));
        }

        let next = match (&current, &event) {
            // From Draft
            (WizardState::Draft, WizardEvent::Analyze) => WizardState::Analyzing,
            (WizardState::Draft, WizardEvent::Cancel) => WizardState::Closed,

            // From Analyzing
            (WizardState::Analyzing, WizardEvent::AnalysisSucceeded) => WizardState::Review,
            (WizardState::Analyzing, WizardEvent::AnalysisFailed) => WizardState::Draft,

            // From Review
            (WizardState::Review, WizardEvent::Back) => WizardState::Draft,
            (WizardState::Review, WizardEvent::Submit) => WizardState::Submitting,
            (WizardState::Review, WizardEvent::Cancel) => WizardState::Closed,

            // From Submitting
            (WizardState::Submitting, WizardEvent::SubmitSucceeded) => WizardState::Closed,
            (WizardState::Submitting, WizardEvent::SubmitFailed) => WizardState::Review,

            // Invalid transitions
            _ => {
                return Err(StateError::InvalidTransition {
                    from: current.to_string(),
                    event: event.to_string(),
                });
            }
        };

        Ok(next)
    }

    /// Check if a transition is valid without performing it
    pub fn can_transition(current: WizardState, event: &WizardEvent) -> bool {
        Self::transition(current, event.clone()).is_ok()
    }
}
