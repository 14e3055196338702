use crate::catalog::{PointerWidth, TypeMapper};
use crate::config::{load_rule_set, RuleSet};
use crate::core::ResolvedEntry;
use crate::extract::PrototypeExtractor;
use crate::resolver::assemble_entry;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Parse and classify prototype text without any network access.
pub fn parse_prototype(
    rules: &RuleSet,
    text: &str,
    pointer_width: PointerWidth,
    module: &str,
    source: &str,
) -> Result<ResolvedEntry> {
    let extractor = PrototypeExtractor::new(rules);
    let prototype = extractor
        .parse_function(text)
        .context("Prototype text does not match the function grammar")?;
    let mapper = TypeMapper::new(rules).with_pointer_width(pointer_width);

    Ok(assemble_entry(&extractor, &mapper, prototype, module, source))
}

pub fn run_parse(
    file: Option<PathBuf>,
    pointer_width: Option<PointerWidth>,
    module: &str,
) -> Result<()> {
    let (text, source) = match &file {
        Some(path) => (crate::io::read_file(path)?, path.display().to_string()),
        None => (
            std::io::read_to_string(std::io::stdin()).context("Failed to read stdin")?,
            String::new(),
        ),
    };

    let rules = load_rule_set();
    let entry = parse_prototype(
        &rules,
        &text,
        pointer_width.unwrap_or_default(),
        module,
        &source,
    )?;
    println!("{}", serde_json::to_string_pretty(&entry)?);
    Ok(())
}
