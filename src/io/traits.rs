//! Collaborator trait definitions for the resolution pipeline.
//!
//! Everything that touches the network or a host symbol system sits behind
//! one of these traits:
//! - [`SearchService`]: fetches the documentation search response for a URL
//! - [`PageExtractor`]: retrieves a page and selects three text fragments
//! - [`DeclaredTypes`]: answers whether a target-language type exists
//!
//! # Design Philosophy
//!
//! The "pure core, imperative shell" pattern: extraction, classification and
//! the modifier algebra stay synchronous and side-effect-free, while I/O is
//! isolated at these boundaries. The async methods are the only suspension
//! points of a resolution.
//!
//! # Example
//!
//! ```rust,ignore
//! use protomap::io::traits::SearchService;
//!
//! async fn body_of<S: SearchService>(search: &S, url: &str) -> Result<String, TransportError> {
//!     search.fetch(url).await
//! }
//! ```

use crate::core::TransportError;
use std::collections::{HashMap, HashSet};
use std::future::Future;

/// Documentation search operations.
///
/// Implementations should be thread-safe (`Send + Sync`) so that many
/// resolutions can share one client.
pub trait SearchService: Send + Sync {
    /// Fetch the raw search response body for a fully built search URL.
    ///
    /// The body is expected to be a JSON document with a `results` array of
    /// `{title, url}` objects; decoding is done by the caller.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` on connection or HTTP failures.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, TransportError>> + Send;
}

/// The three locators passed to a [`PageExtractor`].
///
/// Locators are opaque to this crate; their interpretation (CSS selector,
/// XPath, ...) belongs to the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSelectors<'a> {
    pub kind: &'a str,
    pub prototype: &'a str,
    pub module: &'a str,
}

/// Text fragments selected from a documentation page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageFragments {
    /// Declaration-kind text, e.g. `CreateFileW function (fileapi.h)`
    pub kind_text: String,
    /// Full prototype text
    pub prototype: String,
    /// Owning module or library, e.g. `Kernel32.dll`
    pub module: String,
}

/// Page retrieval and element selection.
pub trait PageExtractor: Send + Sync {
    /// Retrieve `url` and select the fragments named by `selectors`.
    ///
    /// Returns `Ok(None)` when any of the three fragments is not present.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the page cannot be retrieved.
    fn extract(
        &self,
        url: &str,
        selectors: PageSelectors<'_>,
    ) -> impl Future<Output = Result<Option<PageFragments>, TransportError>> + Send;
}

/// Lookup of target-language types declared by the host.
///
/// Stands in for the host symbol system when resolving target-shaped
/// spellings that are not built-in keywords.
pub trait DeclaredTypes: Send + Sync {
    /// Whether a non-generic type named `name` exists.
    fn is_declared(&self, name: &str) -> bool;

    /// Arity of a generic type named `name`, if one exists.
    fn generic_arity(&self, _name: &str) -> Option<usize> {
        None
    }
}

/// Host with no declared types; only built-in keywords resolve.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDeclaredTypes;

impl DeclaredTypes for NoDeclaredTypes {
    fn is_declared(&self, _name: &str) -> bool {
        false
    }
}

impl DeclaredTypes for HashSet<String> {
    fn is_declared(&self, name: &str) -> bool {
        self.contains(name)
    }
}

/// Name to generic arity; arity zero marks a non-generic type.
impl DeclaredTypes for HashMap<String, usize> {
    fn is_declared(&self, name: &str) -> bool {
        self.get(name) == Some(&0)
    }

    fn generic_arity(&self, name: &str) -> Option<usize> {
        self.get(name).copied().filter(|arity| *arity > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_map() {
        let declared: HashMap<String, usize> =
            [("RECT".to_string(), 0), ("Buffer".to_string(), 1)]
                .into_iter()
                .collect();
        assert!(declared.is_declared("RECT"));
        assert!(!declared.is_declared("Buffer"));
        assert_eq!(declared.generic_arity("Buffer"), Some(1));
        assert_eq!(declared.generic_arity("RECT"), None);
    }
}
