//! The rule set: extraction patterns, locators and mapping tables.
//!
//! Built once per session from an untyped JSON document and shared
//! read-only afterwards. Construction never fails; every key that is
//! missing, mistyped or holds a pattern that does not compile is replaced by
//! its built-in value from [`super::defaults`].

use super::defaults;
use super::reader::{index_str, index_str_array, index_str_map};
use crate::core::PrototypeKind;
use crate::io::PageSelectors;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

static DEFAULT_TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(defaults::TITLE_PATTERN).unwrap());
static DEFAULT_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(defaults::NAME_PATTERN).unwrap());
static DEFAULT_TYPE: Lazy<Regex> = Lazy::new(|| Regex::new(defaults::TYPE_PATTERN).unwrap());
static DEFAULT_FUNC_HEAD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&defaults::expand_template(defaults::FUNC_HEAD_PATTERN)).unwrap()
});
static DEFAULT_FUNC_PARAMS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&defaults::expand_template(defaults::FUNC_PARAMS_PATTERN)).unwrap()
});
static DEFAULT_IN: Lazy<Regex> = Lazy::new(|| Regex::new(defaults::IN_PATTERN).unwrap());
static DEFAULT_OUT: Lazy<Regex> = Lazy::new(|| Regex::new(defaults::OUT_PATTERN).unwrap());
static DEFAULT_OPTIONAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(defaults::OPTIONAL_PATTERN).unwrap());

/// Compile `candidate` (after template expansion) if it is present, valid
/// and exposes every group in `required`; otherwise use `trusted`.
fn compile_or(candidate: Option<&str>, trusted: &Regex, key: &str, required: &[&str]) -> Regex {
    candidate
        .and_then(|pattern| compile_checked(pattern, key, required))
        .unwrap_or_else(|| trusted.clone())
}

fn compile_checked(pattern: &str, key: &str, required: &[&str]) -> Option<Regex> {
    let regex = match Regex::new(&defaults::expand_template(pattern)) {
        Ok(regex) => regex,
        Err(e) => {
            log::warn!("Invalid pattern for {}: {}. Using default.", key, e);
            return None;
        }
    };

    let missing = required
        .iter()
        .find(|group| !regex.capture_names().flatten().any(|name| **group == name));
    if let Some(group) = missing {
        log::warn!("Pattern for {} has no `{}` group. Using default.", key, group);
        return None;
    }

    Some(regex)
}

fn default_type_map() -> HashMap<String, PrototypeKind> {
    defaults::TYPE_MAP
        .iter()
        .map(|(label, kind)| (label.to_string(), *kind))
        .collect()
}

/// Immutable, fully populated rule set.
#[derive(Debug, Clone)]
pub struct RuleSet {
    search_url: String,
    title_pattern: Regex,
    type_selector: String,
    prototype_selector: String,
    module_selector: String,
    name_pattern: Regex,
    type_pattern: Regex,
    type_map: HashMap<String, PrototypeKind>,
    func_head_pattern: Regex,
    func_params_pattern: Regex,
    in_pattern: Regex,
    out_pattern: Regex,
    ref_pattern: Option<Regex>,
    optional_pattern: Regex,
    sharp_type_map: HashMap<String, String>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            search_url: defaults::SEARCH_URL.to_string(),
            title_pattern: DEFAULT_TITLE.clone(),
            type_selector: defaults::TYPE_SELECTOR.to_string(),
            prototype_selector: defaults::PROTOTYPE_SELECTOR.to_string(),
            module_selector: defaults::MODULE_SELECTOR.to_string(),
            name_pattern: DEFAULT_NAME.clone(),
            type_pattern: DEFAULT_TYPE.clone(),
            type_map: default_type_map(),
            func_head_pattern: DEFAULT_FUNC_HEAD.clone(),
            func_params_pattern: DEFAULT_FUNC_PARAMS.clone(),
            in_pattern: DEFAULT_IN.clone(),
            out_pattern: DEFAULT_OUT.clone(),
            ref_pattern: None,
            optional_pattern: DEFAULT_OPTIONAL.clone(),
            sharp_type_map: HashMap::new(),
        }
    }
}

impl RuleSet {
    /// Build a rule set from a JSON document, key by key.
    pub fn from_value(document: &Value) -> Self {
        let text = |key: &str, fallback: &str| {
            index_str(document, key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(fallback)
                .to_string()
        };

        let type_map = index_str_map(document, "type_map")
            .map(|labels| {
                labels
                    .into_iter()
                    .map(|(label, kind)| (label, PrototypeKind::parse_lenient(&kind)))
                    .collect()
            })
            .unwrap_or_else(default_type_map);

        let ref_patterns = index_str_array(document, "ref_patterns").unwrap_or_default();
        let ref_entry = |index: usize| ref_patterns.get(index).and_then(|entry| entry.as_deref());

        Self {
            search_url: text("search_url", defaults::SEARCH_URL),
            title_pattern: compile_or(
                index_str(document, "title_pattern"),
                &DEFAULT_TITLE,
                "title_pattern",
                &["name"],
            ),
            type_selector: text("type_selector", defaults::TYPE_SELECTOR),
            prototype_selector: text("prototype_selector", defaults::PROTOTYPE_SELECTOR),
            module_selector: text("module_selector", defaults::MODULE_SELECTOR),
            name_pattern: compile_or(
                index_str(document, "name_pattern"),
                &DEFAULT_NAME,
                "name_pattern",
                &["name"],
            ),
            type_pattern: compile_or(
                index_str(document, "type_pattern"),
                &DEFAULT_TYPE,
                "type_pattern",
                &["type"],
            ),
            type_map,
            func_head_pattern: compile_or(
                index_str(document, "func_head_pattern"),
                &DEFAULT_FUNC_HEAD,
                "func_head_pattern",
                &["return", "name"],
            ),
            func_params_pattern: compile_or(
                index_str(document, "func_params_pattern"),
                &DEFAULT_FUNC_PARAMS,
                "func_params_pattern",
                &["type", "name"],
            ),
            in_pattern: compile_or(ref_entry(0), &DEFAULT_IN, "ref_patterns[0]", &[]),
            out_pattern: compile_or(ref_entry(1), &DEFAULT_OUT, "ref_patterns[1]", &[]),
            ref_pattern: ref_entry(2)
                .and_then(|pattern| compile_checked(pattern, "ref_patterns[2]", &[])),
            optional_pattern: compile_or(
                ref_entry(3),
                &DEFAULT_OPTIONAL,
                "ref_patterns[3]",
                &[],
            ),
            sharp_type_map: index_str_map(document, "sharp_type_map").unwrap_or_default(),
        }
    }

    /// Substitute `keyword` into the search URL template.
    pub fn build_search_url(&self, keyword: &str) -> String {
        self.search_url.replace(defaults::GRAMMAR_PLACEHOLDER, keyword.trim())
    }

    /// Prototype kind for a documentation label; unknown labels are `None`.
    pub fn classify_kind(&self, label: &str) -> PrototypeKind {
        let label = label.trim();
        self.type_map
            .get(label)
            .or_else(|| {
                self.type_map
                    .iter()
                    .find(|(known, _)| known.eq_ignore_ascii_case(label))
                    .map(|(_, kind)| kind)
            })
            .copied()
            .unwrap_or(PrototypeKind::None)
    }

    /// Target spelling overriding a native token, if configured.
    pub fn bypass(&self, token: &str) -> Option<&str> {
        self.sharp_type_map.get(token).map(String::as_str)
    }

    pub fn selectors(&self) -> PageSelectors<'_> {
        PageSelectors {
            kind: &self.type_selector,
            prototype: &self.prototype_selector,
            module: &self.module_selector,
        }
    }

    pub fn title_pattern(&self) -> &Regex {
        &self.title_pattern
    }

    pub fn name_pattern(&self) -> &Regex {
        &self.name_pattern
    }

    pub fn type_pattern(&self) -> &Regex {
        &self.type_pattern
    }

    pub fn func_head_pattern(&self) -> &Regex {
        &self.func_head_pattern
    }

    pub fn func_params_pattern(&self) -> &Regex {
        &self.func_params_pattern
    }

    pub fn in_pattern(&self) -> &Regex {
        &self.in_pattern
    }

    pub fn out_pattern(&self) -> &Regex {
        &self.out_pattern
    }

    /// Explicit combined in/out pattern; absent means "infer from in and out".
    pub fn ref_pattern(&self) -> Option<&Regex> {
        self.ref_pattern.as_ref()
    }

    pub fn optional_pattern(&self) -> &Regex {
        &self.optional_pattern
    }
}

/// Serialized shape of the rule document, as written for a fresh install.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    pub search_url: String,
    pub title_pattern: String,
    pub type_selector: String,
    pub prototype_selector: String,
    pub module_selector: String,
    pub name_pattern: String,
    pub type_pattern: String,
    pub type_map: BTreeMap<String, String>,
    pub func_head_pattern: String,
    pub func_params_pattern: String,
    pub ref_patterns: Vec<Option<String>>,
    pub sharp_type_map: BTreeMap<String, String>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            search_url: defaults::SEARCH_URL.to_string(),
            title_pattern: defaults::TITLE_PATTERN.to_string(),
            type_selector: defaults::TYPE_SELECTOR.to_string(),
            prototype_selector: defaults::PROTOTYPE_SELECTOR.to_string(),
            module_selector: defaults::MODULE_SELECTOR.to_string(),
            name_pattern: defaults::NAME_PATTERN.to_string(),
            type_pattern: defaults::TYPE_PATTERN.to_string(),
            type_map: defaults::TYPE_MAP
                .iter()
                .map(|(label, _)| (label.to_string(), label.to_string()))
                .collect(),
            func_head_pattern: defaults::FUNC_HEAD_PATTERN.to_string(),
            func_params_pattern: defaults::FUNC_PARAMS_PATTERN.to_string(),
            ref_patterns: vec![
                Some(defaults::IN_PATTERN.to_string()),
                Some(defaults::OUT_PATTERN.to_string()),
                None,
                Some(defaults::OPTIONAL_PATTERN.to_string()),
            ],
            sharp_type_map: BTreeMap::new(),
        }
    }
}
