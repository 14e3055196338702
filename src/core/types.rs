//! Value types shared by the extractor, the catalog and the orchestrator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a string-like base type is marshaled across the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StringEncoding {
    #[default]
    None,
    Ansi,
    Unicode,
}

/// Direction of a by-reference parameter.
///
/// `Ref` is the union of `In` and `Out`: a parameter annotated with both
/// directions is passed by reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReferenceKind {
    #[default]
    None,
    In,
    Out,
    Ref,
}

impl ReferenceKind {
    const IN_BIT: u8 = 0b01;
    const OUT_BIT: u8 = 0b10;

    fn bits(self) -> u8 {
        match self {
            Self::None => 0,
            Self::In => Self::IN_BIT,
            Self::Out => Self::OUT_BIT,
            Self::Ref => Self::IN_BIT | Self::OUT_BIT,
        }
    }

    /// Build a kind from the two direction markers.
    pub fn from_directions(is_in: bool, is_out: bool) -> Self {
        match (is_in, is_out) {
            (true, true) => Self::Ref,
            (true, false) => Self::In,
            (false, true) => Self::Out,
            (false, false) => Self::None,
        }
    }

    /// True when any direction bit of `Ref` is set, i.e. the value is
    /// already passed through one level of indirection.
    pub fn includes_ref(self) -> bool {
        self.bits() & Self::Ref.bits() != 0
    }

    /// Parameter keyword in the target language, if any.
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::In => Some("in"),
            Self::Out => Some("out"),
            Self::Ref => Some("ref"),
        }
    }
}

/// How a base type must be declared: pointer depth, reference direction and
/// string marshaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TypeQualifier {
    pub string_encoding: StringEncoding,
    pub reference_kind: ReferenceKind,
    pub pointer_level: u32,
}

impl TypeQualifier {
    pub const NONE: TypeQualifier = TypeQualifier {
        string_encoding: StringEncoding::None,
        reference_kind: ReferenceKind::None,
        pointer_level: 0,
    };

    pub const fn new(
        string_encoding: StringEncoding,
        reference_kind: ReferenceKind,
        pointer_level: u32,
    ) -> Self {
        Self {
            string_encoding,
            reference_kind,
            pointer_level,
        }
    }

    pub const fn by_ref(reference_kind: ReferenceKind) -> Self {
        Self::new(StringEncoding::None, reference_kind, 0)
    }

    pub const fn pointer(pointer_level: u32) -> Self {
        Self::new(StringEncoding::None, ReferenceKind::None, pointer_level)
    }
}

/// Kind of declaration a documentation page describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PrototypeKind {
    #[default]
    None,
    Function,
    Struct,
    Union,
    Delegate,
    Enum,
    /// Recognised but not resolvable.
    Macro,
    /// Recognised but not resolvable.
    Interface,
}

impl PrototypeKind {
    /// Parse a kind from either its variant name or a documentation label.
    /// Matching is case-insensitive; unknown text yields `None`.
    pub fn parse_lenient(text: &str) -> Self {
        match text.trim().to_ascii_lowercase().as_str() {
            "function" => Self::Function,
            "struct" | "structure" => Self::Struct,
            "union" => Self::Union,
            "delegate" | "callback function" | "callback" => Self::Delegate,
            "enum" | "enumeration" => Self::Enum,
            "macro" => Self::Macro,
            "interface" => Self::Interface,
            _ => Self::None,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::None | Self::Macro | Self::Interface)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Function => "Function",
            Self::Struct => "Struct",
            Self::Union => "Union",
            Self::Delegate => "Delegate",
            Self::Enum => "Enum",
            Self::Macro => "Macro",
            Self::Interface => "Interface",
        }
    }
}

/// Base categories of the target type system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseType {
    Bool,
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Char,
    Float32,
    Float64,
    /// Signed platform-width integer, also used for opaque handles.
    IntPtr,
    UIntPtr,
    Void,
    String,
}

impl BaseType {
    /// Keyword spelling in the target language.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int8 => "sbyte",
            Self::UInt8 => "byte",
            Self::Int16 => "short",
            Self::UInt16 => "ushort",
            Self::Int32 => "int",
            Self::UInt32 => "uint",
            Self::Int64 => "long",
            Self::UInt64 => "ulong",
            Self::Char => "char",
            Self::Float32 => "float",
            Self::Float64 => "double",
            Self::IntPtr => "nint",
            Self::UIntPtr => "nuint",
            Self::Void => "void",
            Self::String => "string",
        }
    }
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Single-argument generic wrappers understood by the target-shape resolver.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenericContainer {
    Span,
    Memory,
    ReadOnlySpan,
    ReadOnlyMemory,
    Array,
    /// A caller-declared generic type of arity one.
    Declared(String),
}

impl GenericContainer {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Span" => Some(Self::Span),
            "Memory" => Some(Self::Memory),
            "ReadOnlySpan" => Some(Self::ReadOnlySpan),
            "ReadOnlyMemory" => Some(Self::ReadOnlyMemory),
            "Array" => Some(Self::Array),
            _ => None,
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::Span => "Span",
            Self::Memory => "Memory",
            Self::ReadOnlySpan => "ReadOnlySpan",
            Self::ReadOnlyMemory => "ReadOnlyMemory",
            Self::Array => "Array",
            Self::Declared(name) => name,
        }
    }
}

/// Target-language type descriptor produced by classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetType {
    Primitive(BaseType),
    Generic {
        container: GenericContainer,
        argument: BaseType,
    },
    /// A type the caller declared by name.
    Named(String),
    /// Classification miss; carries the spelling that failed.
    Unresolved(String),
}

impl TargetType {
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Self::Unresolved(_))
    }

    pub fn base(&self) -> Option<BaseType> {
        match self {
            Self::Primitive(base) => Some(*base),
            _ => None,
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(base) => write!(f, "{}", base),
            Self::Generic {
                container: GenericContainer::Array,
                argument,
            } => write!(f, "{}[]", argument),
            Self::Generic {
                container,
                argument,
            } => write!(f, "{}<{}>", container.name(), argument),
            Self::Named(name) => f.write_str(name),
            Self::Unresolved(token) => write!(f, "?{}", token),
        }
    }
}

/// Which stage of the resolution chain produced a mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MappingStage {
    Bypass,
    Primitive,
    PlatformWidth,
    ReferenceAlias,
    HandleAlias,
    WrapperPointer,
    TargetShape,
    Unresolved,
}

/// Result of classifying one type spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMapping {
    pub target: TargetType,
    pub qualifier: TypeQualifier,
    pub stage: MappingStage,
}

impl TypeMapping {
    pub fn new(target: TargetType, qualifier: TypeQualifier, stage: MappingStage) -> Self {
        Self {
            target,
            qualifier,
            stage,
        }
    }

    pub fn primitive(base: BaseType, qualifier: TypeQualifier, stage: MappingStage) -> Self {
        Self::new(TargetType::Primitive(base), qualifier, stage)
    }

    pub fn unresolved(token: impl Into<String>) -> Self {
        Self::new(
            TargetType::Unresolved(token.into()),
            TypeQualifier::NONE,
            MappingStage::Unresolved,
        )
    }

    pub fn unresolved_with(token: impl Into<String>, qualifier: TypeQualifier) -> Self {
        Self::new(
            TargetType::Unresolved(token.into()),
            qualifier,
            MappingStage::Unresolved,
        )
    }

    pub fn is_resolved(&self) -> bool {
        !self.target.is_unresolved()
    }
}

/// One return value, parameter, field or enumerator of a resolved entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSlot {
    /// `None` for the return slot.
    pub name: Option<String>,
    /// Normalised native spelling, without `const` or pointer markers.
    pub native_type: String,
    pub constant_value: Option<String>,
    pub fixed_array_length: Option<String>,
    /// Qualifier as written in the declaration (annotations and `*` markers).
    pub declared: TypeQualifier,
    /// Final qualifier: the native type's qualifier combined with `declared`.
    pub qualifier: TypeQualifier,
    pub target: TargetType,
    pub stage: MappingStage,
    pub is_optional: bool,
}

impl ResolvedSlot {
    pub fn is_return(&self) -> bool {
        self.name.is_none()
    }

    pub fn is_unresolved(&self) -> bool {
        self.target.is_unresolved()
    }
}

/// Fully classified representation of one documented declaration.
///
/// `slots[0]` is the return or primary slot; the remaining slots follow
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedEntry {
    pub name: String,
    pub kind: PrototypeKind,
    pub owning_module: String,
    pub source_url: String,
    pub slots: Vec<ResolvedSlot>,
    /// Secondary aliases introduced by the same declaration.
    pub extended_slots: Vec<ResolvedSlot>,
    /// Inline type definitions.
    pub nested_entries: Vec<ResolvedEntry>,
}

impl ResolvedEntry {
    pub fn return_slot(&self) -> Option<&ResolvedSlot> {
        self.slots.first()
    }

    pub fn parameters(&self) -> &[ResolvedSlot] {
        self.slots.get(1..).unwrap_or(&[])
    }

    /// Native tokens that did not classify, in slot order.
    pub fn unresolved_tokens(&self) -> Vec<&str> {
        self.slots
            .iter()
            .filter(|slot| slot.is_unresolved())
            .map(|slot| slot.native_type.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_kind_from_directions() {
        assert_eq!(ReferenceKind::from_directions(true, true), ReferenceKind::Ref);
        assert_eq!(ReferenceKind::from_directions(true, false), ReferenceKind::In);
        assert_eq!(ReferenceKind::from_directions(false, true), ReferenceKind::Out);
        assert_eq!(ReferenceKind::from_directions(false, false), ReferenceKind::None);
    }

    #[test]
    fn test_includes_ref_overlaps_direction_bits() {
        assert!(ReferenceKind::Ref.includes_ref());
        assert!(ReferenceKind::In.includes_ref());
        assert!(ReferenceKind::Out.includes_ref());
        assert!(!ReferenceKind::None.includes_ref());
    }

    #[test]
    fn test_prototype_kind_accepts_labels_and_names() {
        assert_eq!(PrototypeKind::parse_lenient("structure"), PrototypeKind::Struct);
        assert_eq!(PrototypeKind::parse_lenient("Struct"), PrototypeKind::Struct);
        assert_eq!(
            PrototypeKind::parse_lenient("callback function"),
            PrototypeKind::Delegate
        );
        assert_eq!(PrototypeKind::parse_lenient("Enumeration"), PrototypeKind::Enum);
        assert_eq!(PrototypeKind::parse_lenient("class"), PrototypeKind::None);
        assert!(!PrototypeKind::Macro.is_supported());
    }

    #[test]
    fn test_target_type_display() {
        assert_eq!(TargetType::Primitive(BaseType::UInt32).to_string(), "uint");
        assert_eq!(
            TargetType::Generic {
                container: GenericContainer::ReadOnlySpan,
                argument: BaseType::UInt8,
            }
            .to_string(),
            "ReadOnlySpan<byte>"
        );
        assert_eq!(
            TargetType::Generic {
                container: GenericContainer::Array,
                argument: BaseType::Int32,
            }
            .to_string(),
            "int[]"
        );
        assert_eq!(TargetType::Unresolved("FOO".into()).to_string(), "?FOO");
    }
}
