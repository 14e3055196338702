//! Byte-string and char-string wrapper aliases, declared as a single pointer
//! to their element type.

use crate::core::BaseType;

const WRAPPER_POINTERS: &[(&str, BaseType)] = &[
    ("PUCHAR", BaseType::UInt8),
    ("STRING", BaseType::UInt8),
    ("UNC", BaseType::UInt8),
    ("LPBYTE", BaseType::UInt8),
    ("LMCSTR", BaseType::Char),
    ("BSTR", BaseType::Char),
    ("LMSTR", BaseType::Char),
    ("PTBYTE", BaseType::Char),
    ("PTCHAR", BaseType::Char),
];

/// Element type of a wrapper alias; the pointer level is always one.
pub fn lookup(token: &str) -> Option<BaseType> {
    WRAPPER_POINTERS
        .iter()
        .find(|(spelling, _)| *spelling == token)
        .map(|(_, base)| *base)
}
