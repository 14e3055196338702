use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::defaults::CONFIG_FILE_NAME;
use super::rule_set::{RuleConfig, RuleSet};

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse a rule document. Only malformed JSON is an error; every key
/// inside a well-formed document is read tolerantly.
pub fn parse_rule_set(contents: &str) -> Result<RuleSet, String> {
    serde_json::from_str::<serde_json::Value>(contents)
        .map(|document| RuleSet::from_value(&document))
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
}

/// Rule file locations to check, nearest first: `start` itself and then its
/// parents, at most `max_depth` directories in total.
pub fn rule_file_candidates(
    start: &Path,
    max_depth: usize,
) -> impl Iterator<Item = PathBuf> + '_ {
    start
        .ancestors()
        .take(max_depth)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// Rules from one candidate file.
///
/// `None` means the file could not be read and the search should go on to
/// the next directory. A file that reads but does not parse ends the search
/// with the built-in rules; it is left untouched for the user to fix.
pub(crate) fn load_rule_file(path: &Path) -> Option<RuleSet> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return None,
        Err(e) => {
            log::warn!("Skipping unreadable rule file {}: {}", path.display(), e);
            return None;
        }
    };

    match parse_rule_set(&contents) {
        Ok(rules) => {
            log::debug!("Loaded rules from {}", path.display());
            Some(rules)
        }
        Err(e) => {
            log::warn!("{}. Using built-in rules.", e);
            Some(RuleSet::default())
        }
    }
}

/// Serialize the built-in rules into `dir`, returning the written path.
pub fn write_default_rules(dir: &Path) -> anyhow::Result<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    let contents = serde_json::to_string_pretty(&RuleConfig::default())?;
    crate::io::write_file(&path, &contents)?;
    Ok(path)
}

/// Load rules by searching `start` and its ancestors.
///
/// When no rule file exists anywhere on the path, the built-in rules are
/// used and a default file is written to `start` on a best-effort basis.
pub fn load_rule_set_from(start: &Path) -> RuleSet {
    if let Some(rules) = rule_file_candidates(start, MAX_TRAVERSAL_DEPTH)
        .filter(|path| path.is_file())
        .find_map(|path| load_rule_file(&path))
    {
        return rules;
    }

    log::debug!(
        "No rule file found after checking {} directories. Using built-in rules.",
        MAX_TRAVERSAL_DEPTH
    );
    match write_default_rules(start) {
        Ok(path) => log::debug!("Wrote default rules to {}", path.display()),
        Err(e) => log::warn!("Could not write default rule file: {:#}", e),
    }
    RuleSet::default()
}

pub fn load_rule_set() -> RuleSet {
    match std::env::current_dir() {
        Ok(dir) => load_rule_set_from(&dir),
        Err(e) => {
            log::warn!("Failed to get current directory: {}. Using built-in rules.", e);
            RuleSet::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PrototypeKind;
    use tempfile::TempDir;

    #[test]
    fn test_candidates_respect_depth() {
        let candidates: Vec<_> = rule_file_candidates(Path::new("/a/b/c/d"), 3).collect();
        assert_eq!(
            candidates,
            vec![
                PathBuf::from("/a/b/c/d").join(CONFIG_FILE_NAME),
                PathBuf::from("/a/b/c").join(CONFIG_FILE_NAME),
                PathBuf::from("/a/b").join(CONFIG_FILE_NAME),
            ]
        );
    }

    #[test]
    fn test_missing_rule_file_continues_search() {
        let temp = TempDir::new().unwrap();
        assert!(load_rule_file(&temp.path().join(CONFIG_FILE_NAME)).is_none());
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(parse_rule_set("{ not json").is_err());
        assert!(parse_rule_set("[]").is_ok());
    }

    #[test]
    fn test_loads_from_ancestor() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("one").join("two");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            r#"{ "type_map": { "api": "function" } }"#,
        )
        .unwrap();

        let rules = load_rule_set_from(&nested);
        assert_eq!(rules.classify_kind("api"), PrototypeKind::Function);
        assert!(!nested.join(CONFIG_FILE_NAME).exists());
    }
}
