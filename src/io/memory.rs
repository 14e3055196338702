//! In-memory implementations of the collaborator traits.
//!
//! These answer from fixed tables instead of the network, for tests and for
//! replaying previously captured pages.
//!
//! ```rust,ignore
//! use protomap::io::MemorySearchService;
//!
//! let search = MemorySearchService::new()
//!     .with_response("https://search/?q=CreateFileW", r#"{"results": []}"#);
//! ```

use super::traits::{PageExtractor, PageFragments, PageSelectors, SearchService};
use crate::core::TransportError;
use std::collections::HashMap;

/// Search service answering from a URL → body table.
///
/// Unknown URLs fail with a network error.
#[derive(Debug, Default, Clone)]
pub struct MemorySearchService {
    responses: HashMap<String, Result<String, TransportError>>,
}

impl MemorySearchService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.responses.insert(url.into(), Ok(body.into()));
        self
    }

    pub fn with_failure(mut self, url: impl Into<String>, error: TransportError) -> Self {
        self.responses.insert(url.into(), Err(error));
        self
    }
}

impl SearchService for MemorySearchService {
    async fn fetch(&self, url: &str) -> Result<String, TransportError> {
        self.responses
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(TransportError::network(format!("no route to {}", url))))
    }
}

/// Page extractor answering from a URL → fragments table.
///
/// Unknown URLs yield "not found", mirroring a page whose selectors match nothing.
#[derive(Debug, Default, Clone)]
pub struct MemoryPageExtractor {
    pages: HashMap<String, PageFragments>,
}

impl MemoryPageExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(
        mut self,
        url: impl Into<String>,
        kind_text: impl Into<String>,
        prototype: impl Into<String>,
        module: impl Into<String>,
    ) -> Self {
        self.pages.insert(
            url.into(),
            PageFragments {
                kind_text: kind_text.into(),
                prototype: prototype.into(),
                module: module.into(),
            },
        );
        self
    }
}

impl PageExtractor for MemoryPageExtractor {
    async fn extract(
        &self,
        url: &str,
        _selectors: PageSelectors<'_>,
    ) -> Result<Option<PageFragments>, TransportError> {
        Ok(self.pages.get(url).cloned())
    }
}
