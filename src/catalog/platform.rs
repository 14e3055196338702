//! Aliases whose width depends on the target platform's pointer width.
//!
//! Entries are keyed by their width-dependence family rather than repeated
//! per platform: the "half pointer" family resolves to an integer half as
//! wide as a native pointer.

use crate::core::{BaseType, ReferenceKind, TypeQualifier};
use serde::{Deserialize, Serialize};

/// Pointer width of the platform the binding targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerWidth {
    Bits32,
    Bits64,
    Bits128,
}

impl PointerWidth {
    /// Pointer width of the platform this crate was compiled for.
    pub fn host() -> Self {
        if cfg!(target_pointer_width = "32") {
            Self::Bits32
        } else {
            Self::Bits64
        }
    }

    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            32 => Some(Self::Bits32),
            64 => Some(Self::Bits64),
            128 => Some(Self::Bits128),
            _ => None,
        }
    }

    pub fn bits(&self) -> u32 {
        match self {
            Self::Bits32 => 32,
            Self::Bits64 => 64,
            Self::Bits128 => 128,
        }
    }
}

impl Default for PointerWidth {
    fn default() -> Self {
        Self::host()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WidthFamily {
    HalfPointerSigned,
    HalfPointerUnsigned,
}

impl WidthFamily {
    fn resolve(self, width: PointerWidth) -> BaseType {
        match (self, width) {
            (Self::HalfPointerSigned, PointerWidth::Bits32) => BaseType::Int16,
            (Self::HalfPointerSigned, PointerWidth::Bits64) => BaseType::Int32,
            (Self::HalfPointerSigned, PointerWidth::Bits128) => BaseType::Int64,
            (Self::HalfPointerUnsigned, PointerWidth::Bits32) => BaseType::UInt16,
            (Self::HalfPointerUnsigned, PointerWidth::Bits64) => BaseType::UInt32,
            (Self::HalfPointerUnsigned, PointerWidth::Bits128) => BaseType::UInt64,
        }
    }
}

const PLATFORM_ALIASES: &[(&str, WidthFamily, ReferenceKind)] = &[
    ("HALF_PTR", WidthFamily::HalfPointerSigned, ReferenceKind::None),
    ("UHALF_PTR", WidthFamily::HalfPointerUnsigned, ReferenceKind::None),
    ("PHALF_PTR", WidthFamily::HalfPointerSigned, ReferenceKind::Ref),
    ("PUHALF_PTR", WidthFamily::HalfPointerUnsigned, ReferenceKind::Ref),
];

/// Resolve a width-dependent alias for the given platform.
pub fn lookup(token: &str, width: PointerWidth) -> Option<(BaseType, TypeQualifier)> {
    PLATFORM_ALIASES
        .iter()
        .find(|(spelling, _, _)| *spelling == token)
        .map(|(_, family, kind)| (family.resolve(width), TypeQualifier::by_ref(*kind)))
}
