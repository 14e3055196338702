//! Built-in rule values.
//!
//! Patterns containing `{0}` are templates: the placeholder is replaced with
//! [`NATIVE_TYPE_GRAMMAR`] before compilation, both for these defaults and
//! for user-supplied overrides.

use crate::core::PrototypeKind;

/// File searched for in the working directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".protomap.json";

/// Placeholder standing in for the template argument in patterns.
pub const GRAMMAR_PLACEHOLDER: &str = "{0}";

/// Source reported by title decomposition when the title names none.
pub const MISSING_SOURCE: &str = "<missing file>";

/// A native type spelling: optional `const`, optional sign or tag keyword,
/// a (possibly two-word) base name and any number of trailing `*`.
pub const NATIVE_TYPE_GRAMMAR: &str = r"(?:(?:const|CONST)\s+)?(?:(?:unsigned|signed|struct|union|enum)\s+)?(?:(?:long|short)\s+(?:long\s+)?int|long\s+long|\w+)(?:\s*\*)*";

pub const SEARCH_URL: &str = "https://learn.microsoft.com/api/search?search=WinAPI+function+{0}&locale=en-us&%24top=10&expandScope=true&includeQuestion=false&partnerId=LearnSite";

pub const TITLE_PATTERN: &str =
    r"(?<name>\w+)\s+function(?:\s*\((?<source>\w+(?:\.(?:h|lib|dll))?)\))?";

pub const TYPE_SELECTOR: &str = "#main > div.content > h1";
pub const PROTOTYPE_SELECTOR: &str = "#main > div.content > pre > code";
pub const MODULE_SELECTOR: &str = "meta[name=\"req.dll\"]";

pub const NAME_PATTERN: &str = r"(?<name>\w+)\s+(?:[\w\s]+\w)\s*(?:\(\w+(?:\.(?:h|lib|dll))?\))?";
pub const TYPE_PATTERN: &str = r"\w+\s+(?<type>[\w\s]+\w)\s*(?:\(\w+(?:\.(?:h|lib|dll))?\))?";

pub const FUNC_HEAD_PATTERN: &str = r"(?<return>{0})\s*\b(?:(?:WINAPI|WINAPIV|APIENTRY|CALLBACK|NTAPI|STDAPI|__stdcall|__cdecl)\s+)?(?<name>\w+)\s*\(";

/// One parameter including the `(` or `,` that precedes it.
pub const FUNC_PARAMS_PATTERN: &str = r"(?:\(|,)\s*(?<param>(?<ref>(?:\[[^\]]*\]\s*|_[A-Za-z_]+_(?:\([^)]*\))?\s+|(?:IN|OUT|OPTIONAL)\s+)+)?(?<type>{0})\s*\b(?<name>\w+)(?:\s*\[(?<length>\w*)\])?\s*)";

pub const IN_PATTERN: &str = r"(?i)\bin\b|_in(?:out)?_";
pub const OUT_PATTERN: &str = r"(?i)\bout\b|_(?:in)?out(?:ptr)?_";
pub const OPTIONAL_PATTERN: &str = r"(?i)\boptional\b|_opt_";

/// Documentation kind labels and the prototype kind they denote.
pub const TYPE_MAP: &[(&str, PrototypeKind)] = &[
    ("function", PrototypeKind::Function),
    ("structure", PrototypeKind::Struct),
    ("union", PrototypeKind::Union),
    ("callback function", PrototypeKind::Delegate),
    ("enumeration", PrototypeKind::Enum),
    ("macro", PrototypeKind::Macro),
    ("interface", PrototypeKind::Interface),
];

/// Substitute the native type grammar into a pattern template.
pub fn expand_template(template: &str) -> String {
    template.replace(GRAMMAR_PLACEHOLDER, NATIVE_TYPE_GRAMMAR)
}
