//! Native Type Catalog.
//!
//! Classifies a native type spelling (`LPCWSTR`, `DWORD_PTR`, `PHALF_PTR`)
//! into a target type descriptor plus the qualifier the spelling implies.
//! Resolution is an ordered chain; the first stage that recognises the
//! token wins:
//!
//! 1. bypass table from the rule set (target-shaped right-hand side)
//! 2. [`primitives`]: exact aliases with no indirection, including handles
//! 3. [`platform`]: pointer-width dependent aliases
//! 4. [`aliases`]: `P`/`LP` reference aliases and handle pointers
//! 5. [`wrappers`]: string wrapper types declared as one pointer
//! 6. an unresolved marker carrying the token
//!
//! All tables are immutable statics and can be shared across concurrent
//! resolutions without synchronization.

pub mod aliases;
pub mod handles;
pub mod platform;
pub mod primitives;
pub mod target;
pub mod wrappers;

pub use platform::PointerWidth;

use crate::config::RuleSet;
use crate::core::{MappingStage, TypeMapping, TypeQualifier};
use crate::io::{DeclaredTypes, NoDeclaredTypes};
use tracing::trace;

/// Run stages 2-6 of the chain for a native token.
pub fn resolve_native(token: &str, width: PointerWidth) -> TypeMapping {
    if let Some(base) = primitives::lookup(token) {
        return TypeMapping::primitive(base, TypeQualifier::NONE, MappingStage::Primitive);
    }

    if let Some((base, qualifier)) = platform::lookup(token, width) {
        return TypeMapping::primitive(base, qualifier, MappingStage::PlatformWidth);
    }

    if let Some(mapping) = aliases::lookup(token) {
        return mapping;
    }

    if let Some(base) = wrappers::lookup(token) {
        return TypeMapping::primitive(
            base,
            TypeQualifier::pointer(1),
            MappingStage::WrapperPointer,
        );
    }

    TypeMapping::unresolved(token)
}

/// Classifier bound to a rule set, a target platform and a host type registry.
#[derive(Clone, Copy)]
pub struct TypeMapper<'a> {
    rules: &'a RuleSet,
    pointer_width: PointerWidth,
    declared: &'a dyn DeclaredTypes,
}

impl<'a> TypeMapper<'a> {
    pub fn new(rules: &'a RuleSet) -> Self {
        Self {
            rules,
            pointer_width: PointerWidth::host(),
            declared: &NoDeclaredTypes,
        }
    }

    pub fn with_pointer_width(mut self, pointer_width: PointerWidth) -> Self {
        self.pointer_width = pointer_width;
        self
    }

    pub fn with_declared_types(mut self, declared: &'a dyn DeclaredTypes) -> Self {
        self.declared = declared;
        self
    }

    pub fn pointer_width(&self) -> PointerWidth {
        self.pointer_width
    }

    /// Classify a native spelling through the full chain.
    pub fn map_native(&self, token: &str) -> TypeMapping {
        if let Some(spelling) = self.rules.bypass(token) {
            let mapping = self.map_target(spelling);
            trace!(token, spelling, resolved = mapping.is_resolved(), "bypass");
            return if mapping.is_resolved() {
                TypeMapping {
                    stage: MappingStage::Bypass,
                    ..mapping
                }
            } else {
                mapping
            };
        }

        resolve_native(token, self.pointer_width)
    }

    /// Classify a spelling that is already shaped like the target language.
    pub fn map_target(&self, spelling: &str) -> TypeMapping {
        target::resolve(spelling, self.declared)
    }
}

impl std::fmt::Debug for TypeMapper<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeMapper")
            .field("pointer_width", &self.pointer_width)
            .finish_non_exhaustive()
    }
}
