//! Domain entities for the Projects domain
//!
//! The draft is the only client-owned entity; tracked projects are
//! server-owned records defined in `mentionwatch-api`.

use serde::{Deserialize, Serialize};
use validator::Validate;

use mentionwatch_api::NewProject;
use mentionwatch_common::{Error, Result};

use crate::domain::validation::normalize_subreddits;

/// Minimum description length accepted before analysis may run
pub const MIN_DESCRIPTION_CHARS: u64 = 10;

/// Maximum project name length
pub const MAX_NAME_CHARS: u64 = 200;

/// User-entered, unanalyzed project fields.
///
/// Mutable until analysis runs; a violation here blocks the wizard before
/// any network call is made.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ProjectDraft {
    /// Project display name (1-200 chars, not blank)
    #[validate(
        length(min = 1, max = 200, message = "Project name must be 1-200 characters"),
        custom(function = validate_name_not_blank, message = "Project name must not be blank")
    )]
    pub name: String,

    /// Free-text description the analyzer derives keywords from (≥10 chars)
    #[validate(length(min = 10, message = "Description must be at least 10 characters"))]
    pub description: String,
}

/// Custom validation function rejecting whitespace-only names
fn validate_name_not_blank(name: &str) -> std::result::Result<(), validator::ValidationError> {
    if name.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}

impl ProjectDraft {
    /// Create a new draft
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Whether the draft holds no user input
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.description.is_empty()
    }

    /// Validate invariants; violations never reach the network
    pub fn validate(&self) -> Result<()> {
        Validate::validate(self).map_err(|e| Error::Validation(e.to_string()))
    }

    /// Build the creation payload from this draft and the reviewed lists.
    ///
    /// Subreddits are normalized here; the payload never carries an `r/`
    /// prefix.
    pub fn to_new_project(&self, keywords: &[String], subreddits: &[String]) -> NewProject {
        NewProject {
            name: self.name.clone(),
            description: self.description.clone(),
            keywords: keywords.to_vec(),
            subreddits: normalize_subreddits(subreddits),
        }
    }
}
