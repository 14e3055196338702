//! Resolver for spellings that are already shaped like the target language,
//! e.g. `ref uint`, `ReadOnlySpan<byte>`, `byte*`, `MY_STRUCT`.
//!
//! Used for the right-hand side of the bypass table and for user-declared
//! aliases. Grammar: an optional leading `in`/`out`/`ref`, a (dotted) base
//! name, an optional single type argument in angle brackets, and trailing
//! pointer markers.

use crate::core::{
    BaseType, GenericContainer, MappingStage, ReferenceKind, StringEncoding, TargetType,
    TypeMapping, TypeQualifier,
};
use crate::io::DeclaredTypes;
use once_cell::sync::Lazy;
use regex::Regex;

static TARGET_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*(?:(?<ref>in|out|ref)\s+)?(?<name>[\w.]+)(?:\s*<\s*(?<arg>[\w.]+)\s*>)?(?<ptr>(?:\s*\*)*)\s*$",
    )
    .unwrap()
});

/// Value-type keywords and their framework names.
fn value_keyword(name: &str) -> Option<BaseType> {
    let base = match name {
        "bool" | "Boolean" => BaseType::Bool,
        "byte" | "Byte" => BaseType::UInt8,
        "sbyte" | "SByte" => BaseType::Int8,
        "char" | "Char" => BaseType::Char,
        "short" | "Int16" => BaseType::Int16,
        "ushort" | "UInt16" => BaseType::UInt16,
        "int" | "Int32" => BaseType::Int32,
        "uint" | "UInt32" => BaseType::UInt32,
        "long" | "Int64" => BaseType::Int64,
        "ulong" | "UInt64" => BaseType::UInt64,
        "float" | "Single" => BaseType::Float32,
        "double" | "Double" => BaseType::Float64,
        "nint" | "IntPtr" => BaseType::IntPtr,
        "nuint" | "UIntPtr" => BaseType::UIntPtr,
        _ => return None,
    };
    Some(base)
}

/// Keywords that are valid only as a standalone type (not as a type argument).
fn standalone_keyword(name: &str) -> Option<(BaseType, StringEncoding)> {
    match name {
        "bytes" | "Utf8" | "Ansi" => Some((BaseType::String, StringEncoding::Ansi)),
        "string" | "String" | "Unicode" => Some((BaseType::String, StringEncoding::Unicode)),
        "void" | "Void" => Some((BaseType::Void, StringEncoding::None)),
        _ => None,
    }
}

fn reference_keyword(text: Option<&str>) -> ReferenceKind {
    match text {
        Some("in") => ReferenceKind::In,
        Some("out") => ReferenceKind::Out,
        Some("ref") => ReferenceKind::Ref,
        _ => ReferenceKind::None,
    }
}

fn resolve_container(name: &str, declared: &dyn DeclaredTypes) -> Option<GenericContainer> {
    GenericContainer::from_name(name).or_else(|| {
        (declared.generic_arity(name) == Some(1))
            .then(|| GenericContainer::Declared(name.to_string()))
    })
}

/// Resolve a target-shaped spelling. Failure yields an unresolved marker
/// carrying the spelling, with whatever qualifier was recognised.
pub fn resolve(spelling: &str, declared: &dyn DeclaredTypes) -> TypeMapping {
    let Some(caps) = TARGET_SHAPE.captures(spelling) else {
        return TypeMapping::unresolved(spelling.trim());
    };

    let reference_kind = reference_keyword(caps.name("ref").map(|m| m.as_str()));
    let pointer_level = caps
        .name("ptr")
        .map_or(0, |m| m.as_str().matches('*').count() as u32);
    let name = caps.name("name").map_or("", |m| m.as_str());
    let qualifier = TypeQualifier::new(StringEncoding::None, reference_kind, pointer_level);

    let target = match caps.name("arg") {
        None => value_keyword(name)
            .map(|base| (TargetType::Primitive(base), StringEncoding::None))
            .or_else(|| {
                standalone_keyword(name)
                    .map(|(base, encoding)| (TargetType::Primitive(base), encoding))
            })
            .or_else(|| {
                declared
                    .is_declared(name)
                    .then(|| (TargetType::Named(name.to_string()), StringEncoding::None))
            }),
        Some(argument) => resolve_container(name, declared).and_then(|container| {
            value_keyword(argument.as_str()).map(|argument| {
                (
                    TargetType::Generic {
                        container,
                        argument,
                    },
                    StringEncoding::None,
                )
            })
        }),
    };

    match target {
        Some((target, string_encoding)) => TypeMapping::new(
            target,
            TypeQualifier {
                string_encoding,
                ..qualifier
            },
            MappingStage::TargetShape,
        ),
        None => TypeMapping::unresolved_with(name, qualifier),
    }
}
