//! `P`/`LP` pointer aliases over primitives.
//!
//! Each alias maps to its underlying primitive passed by reference. String
//! aliases carry their marshaling: `W` (and `T`) forms are Unicode, the rest
//! Ansi; `C` (const) forms are input-only.

use super::handles::strip_handle_pointer;
use crate::core::{BaseType, MappingStage, ReferenceKind, StringEncoding, TypeMapping, TypeQualifier};
use once_cell::sync::Lazy;
use std::collections::HashMap;

use BaseType::*;
use ReferenceKind::{In, Ref};
use StringEncoding::{Ansi, Unicode};

const REFERENCE_ALIASES: &[(&str, BaseType, ReferenceKind, StringEncoding)] = &[
    ("PBOOL", Int32, Ref, StringEncoding::None),
    ("LPBOOL", Int32, Ref, StringEncoding::None),
    ("PINT", Int32, Ref, StringEncoding::None),
    ("LPINT", Int32, Ref, StringEncoding::None),
    ("PINT32", Int32, Ref, StringEncoding::None),
    ("PLONG", Int32, Ref, StringEncoding::None),
    ("LPLONG", Int32, Ref, StringEncoding::None),
    ("PLONG32", Int32, Ref, StringEncoding::None),
    ("PDWORD", UInt32, Ref, StringEncoding::None),
    ("LPDWORD", UInt32, Ref, StringEncoding::None),
    ("PDWORD32", UInt32, Ref, StringEncoding::None),
    ("PULONG", UInt32, Ref, StringEncoding::None),
    ("PULONG32", UInt32, Ref, StringEncoding::None),
    ("PUINT", UInt32, Ref, StringEncoding::None),
    ("PUINT32", UInt32, Ref, StringEncoding::None),
    ("LPCOLORREF", UInt32, Ref, StringEncoding::None),
    ("PLCID", UInt32, Ref, StringEncoding::None),
    ("PINT16", Int16, Ref, StringEncoding::None),
    ("PSHORT", Int16, Ref, StringEncoding::None),
    ("PWORD", UInt16, Ref, StringEncoding::None),
    ("LPWORD", UInt16, Ref, StringEncoding::None),
    ("PUINT16", UInt16, Ref, StringEncoding::None),
    ("PUSHORT", UInt16, Ref, StringEncoding::None),
    ("PBOOLEAN", Bool, Ref, StringEncoding::None),
    ("PBYTE", UInt8, Ref, StringEncoding::None),
    ("PCHAR", UInt8, Ref, StringEncoding::None),
    ("PUINT8", UInt8, Ref, StringEncoding::None),
    ("PINT8", Int8, Ref, StringEncoding::None),
    ("PWCHAR", Char, Ref, StringEncoding::None),
    ("PINT64", Int64, Ref, StringEncoding::None),
    ("PLONG64", Int64, Ref, StringEncoding::None),
    ("PLONGLONG", Int64, Ref, StringEncoding::None),
    ("PDWORD64", UInt64, Ref, StringEncoding::None),
    ("PDWORDLONG", UInt64, Ref, StringEncoding::None),
    ("PUINT64", UInt64, Ref, StringEncoding::None),
    ("PULONG64", UInt64, Ref, StringEncoding::None),
    ("PULONGLONG", UInt64, Ref, StringEncoding::None),
    ("PINT_PTR", IntPtr, Ref, StringEncoding::None),
    ("PLONG_PTR", IntPtr, Ref, StringEncoding::None),
    ("PSSIZE_T", IntPtr, Ref, StringEncoding::None),
    ("PDWORD_PTR", UIntPtr, Ref, StringEncoding::None),
    ("PSIZE_T", UIntPtr, Ref, StringEncoding::None),
    ("PUINT_PTR", UIntPtr, Ref, StringEncoding::None),
    ("PULONG_PTR", UIntPtr, Ref, StringEncoding::None),
    ("PFLOAT", Float32, Ref, StringEncoding::None),
    // strings
    ("PCSTR", String, In, Ansi),
    ("LPCSTR", String, In, Ansi),
    ("PSTR", String, Ref, Ansi),
    ("LPSTR", String, Ref, Ansi),
    ("PCWSTR", String, In, Unicode),
    ("LPCWSTR", String, In, Unicode),
    ("PCTSTR", String, In, Unicode),
    ("LPCTSTR", String, In, Unicode),
    ("PWSTR", String, Ref, Unicode),
    ("LPWSTR", String, Ref, Unicode),
    ("PTSTR", String, Ref, Unicode),
    ("LPTSTR", String, Ref, Unicode),
];

static ALIASES: Lazy<HashMap<&'static str, (BaseType, TypeQualifier)>> = Lazy::new(|| {
    REFERENCE_ALIASES
        .iter()
        .map(|&(spelling, base, kind, encoding)| {
            (spelling, (base, TypeQualifier::new(encoding, kind, 0)))
        })
        .collect()
});

/// Resolve a reference alias, or a `P`/`LP` pointer to a known handle.
pub fn lookup(token: &str) -> Option<TypeMapping> {
    if let Some((base, qualifier)) = ALIASES.get(token) {
        return Some(TypeMapping::primitive(
            *base,
            *qualifier,
            MappingStage::ReferenceAlias,
        ));
    }

    strip_handle_pointer(token).map(|_| {
        TypeMapping::primitive(
            IntPtr,
            TypeQualifier::by_ref(Ref),
            MappingStage::HandleAlias,
        )
    })
}

pub fn spellings() -> impl Iterator<Item = &'static str> {
    REFERENCE_ALIASES.iter().map(|(spelling, ..)| *spelling)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_alias_is_by_reference() {
        let mapping = lookup("LPDWORD").unwrap();
        assert_eq!(mapping.target.base(), Some(UInt32));
        assert_eq!(mapping.qualifier, TypeQualifier::by_ref(Ref));
    }

    #[test]
    fn test_string_aliases_distinguish_encoding_and_constness() {
        let ansi_in = lookup("LPCSTR").unwrap();
        assert_eq!(ansi_in.qualifier, TypeQualifier::new(Ansi, In, 0));

        let wide_out = lookup("LPWSTR").unwrap();
        assert_eq!(wide_out.qualifier, TypeQualifier::new(Unicode, Ref, 0));
        assert_eq!(wide_out.target.base(), Some(String));
    }

    #[test]
    fn test_handle_pointer_fallback() {
        let mapping = lookup("LPHANDLE").unwrap();
        assert_eq!(mapping.stage, MappingStage::HandleAlias);
        assert_eq!(mapping.target.base(), Some(IntPtr));
        assert_eq!(mapping.qualifier.reference_kind, Ref);
    }

    #[test]
    fn test_unknown_pointer_alias() {
        assert!(lookup("PFOOBAR").is_none());
    }
}
