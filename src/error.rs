//! Error types for inbound-select.
//!
//! The selection core (filter, projection, reconciler) is total over its
//! input domain and defines no errors. Everything here belongs to the
//! template loading and selection flow.

use thiserror::Error;

/// Errors from fetching or parsing a remote template list.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Failed to fetch template list: {message}")]
    Fetch { message: String },

    #[error("Failed to parse template list: {0}")]
    Parse(#[from] serde_json::Error),
}

impl TemplateError {
    /// Creates a fetch error from any displayable cause.
    ///
    /// Fetch clients live outside this crate, so their failures arrive as
    /// messages rather than typed causes.
    #[must_use]
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }
}

/// Errors from driving the template selector state machine.
#[derive(Debug, Error)]
pub enum SelectorError {
    #[error("Template list is not ready")]
    NotReady,

    #[error("No template is selected")]
    NoSelection,

    #[error("Selection index {index} is out of range (list has {len} templates)")]
    SelectionOutOfRange { index: usize, len: usize },

    #[error("A template load is already in progress")]
    LoadInProgress,
}

/// Top-level error type for inbound-select.
#[derive(Debug, Error)]
pub enum SelectError {
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Selector error: {0}")]
    Selector(#[from] SelectorError),
}

impl SelectError {
    /// Returns true if this is a template fetch/parse error.
    #[must_use]
    pub const fn is_template(&self) -> bool {
        matches!(self, Self::Template(_))
    }

    /// Returns true if this is a selector state error.
    #[must_use]
    pub const fn is_selector(&self) -> bool {
        matches!(self, Self::Selector(_))
    }
}

/// Result type alias for inbound-select operations.
pub type SelectResult<T> = Result<T, SelectError>;
