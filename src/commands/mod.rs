//! CLI command implementations for protomap.
//!
//! Available commands:
//! - **init**: write the default rule file
//! - **classify**: map native type tokens through the catalog
//! - **parse**: parse and classify a function prototype
//! - **title**: decompose a documentation search title
//!
//! Each command loads the rule set from the working directory (see
//! [`crate::config::load_rule_set`]) except `init`, which writes it.

pub mod classify;
pub mod init;
pub mod parse;
pub mod title;

pub use classify::{classify_tokens, describe_mapping, run_classify};
pub use init::{init_config, init_config_in};
pub use parse::{parse_prototype, run_parse};
pub use title::run_title;
