//! Modifier algebra: reconciling the qualifier a native type implies with the
//! qualifier a declaration states.
//!
//! A by-reference parameter already implies one level of indirection. When a
//! declaration adds pointer markers on top of a native type that is *not*
//! itself a reference, one of those levels is the reference and must not be
//! counted twice.
//!
//! | inner (native)        | outer (declared)       | result                 |
//! |-----------------------|------------------------|------------------------|
//! | `{Ansi, Ref, 0}`      | `{None, None, 1}`      | `{Ansi, None, 1}`      |
//! | `{None, None, 0}`     | `{None, Out, 1}`       | `{None, Out, 0}`       |
//! | `{None, Ref, 0}`      | `{None, Out, 0}`       | `{None, Out, 0}`       |
//! | `{None, None, 1}`     | `{None, In, 0}`        | `{None, None, 1}`      |

use crate::core::{ReferenceKind, TypeQualifier};

/// Combine the qualifier discovered for a native type (`inner`) with the
/// qualifier declared at the use site (`outer`).
pub fn combine(inner: TypeQualifier, outer: TypeQualifier) -> TypeQualifier {
    let mut pointer_level = inner.pointer_level + outer.pointer_level;

    let reference_kind = if outer.pointer_level > 0 {
        if !inner.reference_kind.includes_ref() {
            pointer_level -= 1;
        }
        outer.reference_kind
    } else if inner.reference_kind.includes_ref() {
        outer.reference_kind
    } else {
        ReferenceKind::None
    };

    TypeQualifier {
        string_encoding: inner.string_encoding,
        reference_kind,
        pointer_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StringEncoding;

    fn q(encoding: StringEncoding, kind: ReferenceKind, level: u32) -> TypeQualifier {
        TypeQualifier::new(encoding, kind, level)
    }

    #[test]
    fn test_outer_pointer_over_reference_is_not_double_counted() {
        let combined = combine(
            q(StringEncoding::Ansi, ReferenceKind::Ref, 0),
            q(StringEncoding::None, ReferenceKind::None, 1),
        );
        assert_eq!(combined, q(StringEncoding::Ansi, ReferenceKind::None, 1));
    }

    #[test]
    fn test_outer_pointer_over_value_is_absorbed_by_reference() {
        let combined = combine(TypeQualifier::NONE, q(StringEncoding::None, ReferenceKind::Out, 1));
        assert_eq!(combined, q(StringEncoding::None, ReferenceKind::Out, 0));
    }

    #[test]
    fn test_double_pointer_keeps_one_level() {
        let combined = combine(TypeQualifier::NONE, q(StringEncoding::None, ReferenceKind::Out, 2));
        assert_eq!(combined.pointer_level, 1);
        assert_eq!(combined.reference_kind, ReferenceKind::Out);
    }

    #[test]
    fn test_reference_alias_takes_declared_direction() {
        let combined = combine(
            TypeQualifier::by_ref(ReferenceKind::Ref),
            TypeQualifier::by_ref(ReferenceKind::Out),
        );
        assert_eq!(combined, TypeQualifier::by_ref(ReferenceKind::Out));
    }

    #[test]
    fn test_value_type_drops_declared_direction() {
        let combined = combine(TypeQualifier::NONE, TypeQualifier::by_ref(ReferenceKind::In));
        assert_eq!(combined, TypeQualifier::NONE);
    }

    #[test]
    fn test_string_encoding_always_from_inner() {
        let combined = combine(
            q(StringEncoding::Unicode, ReferenceKind::In, 0),
            q(StringEncoding::Ansi, ReferenceKind::In, 0),
        );
        assert_eq!(combined.string_encoding, StringEncoding::Unicode);
        assert_eq!(combined.reference_kind, ReferenceKind::In);
    }

    #[test]
    fn test_inner_pointer_survives_plain_declaration() {
        let combined = combine(TypeQualifier::pointer(1), TypeQualifier::NONE);
        assert_eq!(combined, TypeQualifier::pointer(1));
    }
}
