//! Resolution phases for context tracking.

use serde::Serialize;

/// States of a single resolution.
///
/// These phases represent the stages an API name or page reference moves
/// through, helping identify where in the pipeline a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ResolutionPhase {
    /// Querying the documentation search collaborator
    Searching,
    /// Retrieving prototype text through the page-extraction collaborator
    Extracting,
    /// Applying the rule set's patterns to the prototype text
    Parsing,
    /// Mapping native type tokens through the catalog
    Classifying,
    /// Terminal: an entry was produced
    Resolved,
    /// Terminal: the resolution was discarded
    Failed,
}

impl ResolutionPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Resolved | Self::Failed)
    }
}

impl std::fmt::Display for ResolutionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Searching => write!(f, "searching"),
            Self::Extracting => write!(f, "extracting"),
            Self::Parsing => write!(f, "parsing"),
            Self::Classifying => write!(f, "classifying"),
            Self::Resolved => write!(f, "resolved"),
            Self::Failed => write!(f, "failed"),
        }
    }
}
