//! Shared error types for the resolution pipeline

use crate::observability::ResolutionPhase;
use thiserror::Error;

/// Failure reported by an external collaborator (search service, page
/// extractor) while performing I/O.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// Connection, DNS, TLS or HTTP status failures
    #[error("{0}")]
    Network(String),
}

impl TransportError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }
}

/// Main error type for search and resolution operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// Network or transport failure while talking to a collaborator
    #[error("Network error: {0}")]
    Network(String),

    /// The search endpoint answered with something other than the expected schema
    #[error("The documentation search service is unavailable or has changed")]
    SearchUnavailable,

    /// The page is not a function declaration, or its prototype did not parse
    #[error("The referenced API page cannot be resolved: {url} (failed while {phase})")]
    Unresolvable { url: String, phase: ResolutionPhase },

    /// The caller cancelled the operation
    #[error("Operation cancelled")]
    Cancelled,
}

impl ResolveError {
    pub fn unresolvable(url: impl Into<String>, phase: ResolutionPhase) -> Self {
        Self::Unresolvable {
            url: url.into(),
            phase,
        }
    }

    /// Cancellation must be propagated, never reported as a failure.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl From<TransportError> for ResolveError {
    fn from(error: TransportError) -> Self {
        Self::Network(error.to_string())
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, ResolveError>;
