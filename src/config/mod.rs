//! Rule configuration: built-in defaults, the tolerant rule set and the
//! file loader.

pub mod defaults;
mod loader;
mod reader;
mod rule_set;

pub use loader::{
    load_rule_set, load_rule_set_from, parse_rule_set, rule_file_candidates, write_default_rules,
};
pub use rule_set::{RuleConfig, RuleSet};
