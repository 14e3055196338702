use protomap::config::defaults::{CONFIG_FILE_NAME, TITLE_PATTERN};
use protomap::config::{load_rule_set_from, parse_rule_set, RuleConfig};
use protomap::{PrototypeKind, PrototypeExtractor};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_writes_default_rules() {
    let temp = TempDir::new().unwrap();
    let rules = load_rule_set_from(temp.path());

    assert_eq!(rules.title_pattern().as_str(), TITLE_PATTERN);

    let written = fs::read_to_string(temp.path().join(CONFIG_FILE_NAME)).unwrap();
    let config: RuleConfig = serde_json::from_str(&written).unwrap();
    assert_eq!(config, RuleConfig::default());
}

#[test]
fn test_existing_file_is_not_rewritten() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(CONFIG_FILE_NAME);
    fs::write(&path, r#"{ "search_url": "https://example.test/?q={0}" }"#).unwrap();

    let rules = load_rule_set_from(temp.path());
    assert_eq!(rules.build_search_url("Sleep"), "https://example.test/?q=Sleep");
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        r#"{ "search_url": "https://example.test/?q={0}" }"#
    );
}

#[test]
fn test_malformed_file_falls_back_to_defaults() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(CONFIG_FILE_NAME), "{ this is not json").unwrap();

    let rules = load_rule_set_from(temp.path());
    assert_eq!(rules.classify_kind("function"), PrototypeKind::Function);
}

#[test]
fn test_invalid_fields_fall_back_individually() {
    let rules = parse_rule_set(
        r#"{
            "title_pattern": "(?<name>[",
            "func_params_pattern": 42,
            "type_map": { "function": "Function", "thing": "gadget" },
            "module_selector": "meta[name=\"req.lib\"]"
        }"#,
    )
    .unwrap();

    assert_eq!(rules.title_pattern().as_str(), TITLE_PATTERN);
    assert_eq!(rules.classify_kind("thing"), PrototypeKind::None);
    assert_eq!(rules.classify_kind("function"), PrototypeKind::Function);
    assert_eq!(rules.selectors().module, "meta[name=\"req.lib\"]");

    let parsed = PrototypeExtractor::new(&rules)
        .parse_function("void Sleep([in] DWORD dwMilliseconds);")
        .unwrap();
    assert_eq!(parsed.parameters.len(), 1);
}
