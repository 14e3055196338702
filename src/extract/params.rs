//! Parameter list scanning.
//!
//! The parameters pattern matches a single parameter together with the `(`
//! or `,` that introduces it. Successive matches must tile the list exactly;
//! any text the pattern cannot account for rejects the whole list rather
//! than silently dropping a parameter.

use regex::{Match, Regex};

/// One parameter as written, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawParameter {
    /// Annotation text such as `[in, optional]` or `_Out_writes_(n)`.
    pub ref_text: Option<String>,
    pub type_token: String,
    pub name: String,
    pub fixed_array_length: Option<String>,
}

struct ParamCapture<'t> {
    span: Match<'t>,
    type_token: Match<'t>,
    name: Match<'t>,
    length: Option<Match<'t>>,
}

/// The parenthesised list opening at byte `open`, parentheses included.
pub(crate) fn enclosed_list(text: &str, open: usize) -> Option<&str> {
    let mut depth = 0usize;
    for (offset, c) in text.get(open..)?.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(&text[open..=open + offset]);
                }
            }
            _ => {}
        }
    }
    None
}

fn is_empty_list(list: &str) -> bool {
    let inner = list
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(list)
        .trim();
    inner.is_empty() || inner == "void" || inner == "VOID"
}

/// Scan a parenthesised list into parameters. `None` when the pattern does
/// not tile the list.
pub(crate) fn scan(pattern: &Regex, list: &str) -> Option<Vec<RawParameter>> {
    if is_empty_list(list) {
        return Some(Vec::new());
    }

    let mut cursor = 0;
    let mut params = Vec::new();
    let mut refs = Vec::new();

    for caps in pattern.captures_iter(list) {
        let whole = caps.get(0)?;
        if whole.start() != cursor || whole.is_empty() {
            return None;
        }
        cursor = whole.end();

        params.push(ParamCapture {
            span: caps.name("param").unwrap_or(whole),
            type_token: caps.name("type")?,
            name: caps.name("name")?,
            length: caps.name("length"),
        });
        if let Some(annotation) = caps.name("ref") {
            refs.push(annotation);
        }
    }

    if params.is_empty() || list[cursor..].trim() != ")" {
        return None;
    }

    Some(correlate(params, &refs))
}

/// Attach annotations to parameters by span containment.
///
/// A separate cursor walks the annotations; one is consumed only when it
/// lies entirely inside the current parameter's span, so a parameter
/// without an annotation never takes its neighbour's.
fn correlate(params: Vec<ParamCapture<'_>>, refs: &[Match<'_>]) -> Vec<RawParameter> {
    let mut ref_cursor = 0;
    let mut resolved = Vec::with_capacity(params.len());

    for param in params {
        let ref_text = match refs.get(ref_cursor) {
            Some(annotation)
                if annotation.start() >= param.span.start()
                    && annotation.end() <= param.span.end() =>
            {
                ref_cursor += 1;
                Some(annotation.as_str().trim().to_string())
            }
            _ => None,
        };

        resolved.push(RawParameter {
            ref_text,
            type_token: param.type_token.as_str().trim().to_string(),
            name: param.name.as_str().to_string(),
            fixed_array_length: param.length.map(|m| m.as_str().to_string()),
        });
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enclosed_list_balances_nested_parens() {
        let text = "void f(_In_reads_(n) int* a, int n);";
        let open = text.find('(').unwrap();
        assert_eq!(
            enclosed_list(text, open),
            Some("(_In_reads_(n) int* a, int n)")
        );
        assert_eq!(enclosed_list("void f(int a", 6), None);
    }

    #[test]
    fn test_void_list_is_empty() {
        let pattern = Regex::new(r"(?:\(|,)\s*(?<type>\w+)\s+(?<name>\w+)\s*").unwrap();
        assert_eq!(scan(&pattern, "( void )"), Some(vec![]));
        assert_eq!(scan(&pattern, "()"), Some(vec![]));
    }

    #[test]
    fn test_untiled_list_is_rejected() {
        let pattern = Regex::new(r"(?:\(|,)\s*(?<type>\w+)\s+(?<name>\w+)\s*").unwrap();
        assert_eq!(scan(&pattern, "(int a, ???, int b)"), None);
        assert_eq!(scan(&pattern, "(int a, int b extra)"), None);
    }
}
