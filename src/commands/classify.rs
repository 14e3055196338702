use crate::catalog::{PointerWidth, TypeMapper};
use crate::config::{load_rule_set, RuleSet};
use crate::core::{StringEncoding, TypeMapping};
use anyhow::Result;

/// Map each token through the full resolution chain, in input order.
pub fn classify_tokens(
    rules: &RuleSet,
    tokens: &[String],
    pointer_width: PointerWidth,
) -> Vec<(String, TypeMapping)> {
    let mapper = TypeMapper::new(rules).with_pointer_width(pointer_width);
    tokens
        .iter()
        .map(|token| {
            let token = token.trim();
            (token.to_string(), mapper.map_native(token))
        })
        .collect()
}

/// One-line rendering: reference keyword, target, pointer markers and
/// string encoding, e.g. `in string (Unicode)` or `byte*`.
pub fn describe_mapping(mapping: &TypeMapping) -> String {
    let qualifier = &mapping.qualifier;
    let mut text = String::new();

    if let Some(keyword) = qualifier.reference_kind.keyword() {
        text.push_str(keyword);
        text.push(' ');
    }
    text.push_str(&mapping.target.to_string());
    text.push_str(&"*".repeat(qualifier.pointer_level as usize));

    match qualifier.string_encoding {
        StringEncoding::None => {}
        StringEncoding::Ansi => text.push_str(" (Ansi)"),
        StringEncoding::Unicode => text.push_str(" (Unicode)"),
    }
    text
}

pub fn run_classify(tokens: &[String], pointer_width: Option<PointerWidth>) -> Result<()> {
    let rules = load_rule_set();
    let pointer_width = pointer_width.unwrap_or_default();

    let mut unresolved = 0;
    for (token, mapping) in classify_tokens(&rules, tokens, pointer_width) {
        if !mapping.is_resolved() {
            unresolved += 1;
        }
        println!("{}\t{}\t{:?}", token, describe_mapping(&mapping), mapping.stage);
    }

    if unresolved > 0 {
        anyhow::bail!("{} token(s) did not resolve", unresolved);
    }
    Ok(())
}
