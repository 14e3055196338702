//! Decoding and deduplication of documentation search responses.

use crate::core::{ResolveError, Result};
use crate::extract::PrototypeExtractor;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;
use url::Url;

/// One usable search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    /// Display title, `"{name} function ({source})"`
    pub title: String,
    /// Canonical API name decomposed from the raw title
    pub name: String,
    pub url: String,
}

/// Outcome of one documentation search.
///
/// An empty outcome is not an error; its `Display` form is the message shown
/// to the user instead of a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub keyword: String,
    pub hits: Vec<SearchHit>,
}

impl SearchResults {
    pub fn new(keyword: impl Into<String>, hits: Vec<SearchHit>) -> Self {
        Self {
            keyword: keyword.into(),
            hits,
        }
    }

    pub fn into_hits(self) -> Vec<SearchHit> {
        self.hits
    }
}

impl std::ops::Deref for SearchResults {
    type Target = [SearchHit];

    fn deref(&self) -> &[SearchHit] {
        &self.hits
    }
}

impl fmt::Display for SearchResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hits.is_empty() {
            return write!(f, "No search results found for \"{}\"", self.keyword);
        }
        for (index, hit) in self.hits.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{}\t{}", hit.title, hit.url)?;
        }
        Ok(())
    }
}

/// Decode a search response body into hits.
///
/// Entries without a title or URL, with a URL that is not absolute, or with
/// a title the rule set cannot decompose are skipped. Duplicates are removed
/// by URL first and then by display title; the first occurrence wins.
///
/// # Errors
///
/// [`ResolveError::SearchUnavailable`] when the body is not a JSON object
/// with a `results` array.
pub fn parse_search_results(extractor: &PrototypeExtractor<'_>, body: &str) -> Result<Vec<SearchHit>> {
    let document: Value =
        serde_json::from_str(body).map_err(|_| ResolveError::SearchUnavailable)?;
    let results = document
        .get("results")
        .and_then(Value::as_array)
        .ok_or(ResolveError::SearchUnavailable)?;

    let mut urls = HashSet::new();
    let mut titles = HashSet::new();
    let mut hits = Vec::new();

    for item in results {
        let (Some(raw_title), Some(url)) = (
            item.get("title").and_then(Value::as_str),
            item.get("url").and_then(Value::as_str),
        ) else {
            continue;
        };

        if Url::parse(url).is_err() || urls.contains(url) {
            continue;
        }

        let Some(title) = extractor.extract_title(raw_title) else {
            continue;
        };
        let display = title.to_string();
        if !titles.insert(display.clone()) {
            continue;
        }

        urls.insert(url.to_string());
        hits.push(SearchHit {
            title: display,
            name: title.name,
            url: url.to_string(),
        });
    }

    Ok(hits)
}
