//! Prototype Extractor.
//!
//! Applies the rule set's patterns to documentation text: page titles, kind
//! labels, function heads and parameter lists. Every operation is pure and
//! reports a non-match as `None`.

pub mod declarator;
mod params;

pub use declarator::{normalize_declarator, Declarator};
pub use params::RawParameter;

use crate::config::defaults::MISSING_SOURCE;
use crate::config::RuleSet;
use crate::core::ReferenceKind;
use serde::Serialize;
use std::fmt;

/// Canonical name and source file decomposed from a page title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ApiTitle {
    pub name: String,
    pub source: String,
}

impl fmt::Display for ApiTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} function ({})", self.name, self.source)
    }
}

/// Name, return token and parameters of a function prototype.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionPrototype {
    pub name: String,
    pub return_type: String,
    pub parameters: Vec<RawParameter>,
}

/// Direction and optionality read from a parameter annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Directionality {
    pub reference_kind: ReferenceKind,
    pub is_optional: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct PrototypeExtractor<'a> {
    rules: &'a RuleSet,
}

impl<'a> PrototypeExtractor<'a> {
    pub fn new(rules: &'a RuleSet) -> Self {
        Self { rules }
    }

    /// Decompose a page title such as `CreateFileW function (fileapi.h)`.
    ///
    /// A title without a source file still succeeds, with
    /// [`MISSING_SOURCE`] in place of the file.
    pub fn extract_title(&self, title: &str) -> Option<ApiTitle> {
        let caps = self.rules.title_pattern().captures(title)?;
        let name = caps.name("name")?.as_str().trim();
        if name.is_empty() {
            return None;
        }

        let source = caps
            .name("source")
            .map(|m| m.as_str().trim())
            .filter(|source| !source.is_empty())
            .unwrap_or(MISSING_SOURCE);

        Some(ApiTitle {
            name: name.to_string(),
            source: source.to_string(),
        })
    }

    /// Declared name from a kind heading, e.g. `RECT` from `RECT structure (windef.h)`.
    pub fn extract_name(&self, text: &str) -> Option<String> {
        self.rules
            .name_pattern()
            .captures(text)?
            .name("name")
            .map(|m| m.as_str().trim().to_string())
            .filter(|name| !name.is_empty())
    }

    /// Kind label from a kind heading, e.g. `callback function`.
    pub fn extract_kind_label(&self, text: &str) -> Option<String> {
        self.rules
            .type_pattern()
            .captures(text)?
            .name("type")
            .map(|m| m.as_str().trim().to_string())
            .filter(|label| !label.is_empty())
    }

    /// Function name and return type token; both must be non-blank.
    pub fn extract_function_head(&self, prototype: &str) -> Option<(String, String)> {
        let caps = self.rules.func_head_pattern().captures(prototype)?;
        let name = caps.name("name")?.as_str().trim();
        let return_type = caps.name("return")?.as_str().trim();
        if name.is_empty() || return_type.is_empty() {
            return None;
        }
        Some((name.to_string(), return_type.to_string()))
    }

    /// Ordered parameters of a function prototype.
    ///
    /// The list is the parenthesised group following the function head (or
    /// the first one in the text when the head does not match). `()` and
    /// `(void)` yield an empty list.
    pub fn extract_function_parameters(&self, prototype: &str) -> Option<Vec<RawParameter>> {
        let open = self
            .rules
            .func_head_pattern()
            .find(prototype)
            .and_then(|head| prototype[..head.end()].rfind('('))
            .or_else(|| prototype.find('('))?;
        let list = params::enclosed_list(prototype, open)?;
        params::scan(self.rules.func_params_pattern(), list)
    }

    /// Read direction and optionality from annotation text.
    ///
    /// An explicit combined pattern wins; otherwise both markers mean
    /// `Ref`. Optionality is independent of direction.
    pub fn parse_directionality(&self, text: &str) -> Directionality {
        let reference_kind = match self.rules.ref_pattern() {
            Some(pattern) if pattern.is_match(text) => ReferenceKind::Ref,
            _ => ReferenceKind::from_directions(
                self.rules.in_pattern().is_match(text),
                self.rules.out_pattern().is_match(text),
            ),
        };

        Directionality {
            reference_kind,
            is_optional: self.rules.optional_pattern().is_match(text),
        }
    }

    pub fn parse_function(&self, prototype: &str) -> Option<FunctionPrototype> {
        let (name, return_type) = self.extract_function_head(prototype)?;
        let parameters = self.extract_function_parameters(prototype)?;
        Some(FunctionPrototype {
            name,
            return_type,
            parameters,
        })
    }
}
