//! Declarator normalisation: splitting a written type token into its
//! catalog spelling and the pointer markers applied to it.

/// Words that qualify a type without changing its catalog spelling.
const TRANSPARENT_WORDS: &[&str] = &["const", "CONST", "volatile", "struct", "union", "enum"];

/// A type token split into its base spelling and declared indirection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declarator {
    pub base: String,
    pub pointer_level: u32,
}

/// Strip qualifier keywords and trailing `*` from a written type token.
///
/// `const char *` becomes `char` with one pointer, `unsigned  long` keeps
/// both words joined by a single space.
pub fn normalize_declarator(token: &str) -> Declarator {
    let pointer_level = token.matches('*').count() as u32;
    let base = token
        .split(|c: char| c.is_whitespace() || c == '*')
        .filter(|word| !word.is_empty() && !TRANSPARENT_WORDS.contains(word))
        .collect::<Vec<_>>()
        .join(" ");

    Declarator {
        base,
        pointer_level,
    }
}
