// Export modules for library usage
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod extract;
pub mod io;
pub mod modifier;
pub mod observability;
pub mod resolver;

// Re-export commonly used types
pub use crate::core::{
    BaseType, GenericContainer, MappingStage, PrototypeKind, ReferenceKind, ResolveError,
    ResolvedEntry, ResolvedSlot, StringEncoding, TargetType, TransportError, TypeMapping,
    TypeQualifier,
};

pub use crate::catalog::{resolve_native, PointerWidth, TypeMapper};
pub use crate::config::{load_rule_set, load_rule_set_from, RuleConfig, RuleSet};
pub use crate::extract::{ApiTitle, Directionality, FunctionPrototype, PrototypeExtractor, RawParameter};
pub use crate::io::{DeclaredTypes, NoDeclaredTypes, PageExtractor, PageFragments, SearchService};
pub use crate::modifier::combine;
pub use crate::observability::ResolutionPhase;
pub use crate::resolver::{assemble_entry, Resolver, SearchHit, SearchResults};
