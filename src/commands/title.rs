use crate::config::load_rule_set;
use crate::extract::PrototypeExtractor;
use anyhow::{Context, Result};

pub fn run_title(text: &str) -> Result<()> {
    let rules = load_rule_set();
    let title = PrototypeExtractor::new(&rules)
        .extract_title(text)
        .with_context(|| format!("Title does not match the title pattern: {}", text))?;

    println!("{}", serde_json::to_string_pretty(&title)?);
    Ok(())
}
