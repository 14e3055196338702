pub mod errors;
pub mod types;

pub use errors::{ResolveError, Result, TransportError};
pub use types::{
    BaseType, GenericContainer, MappingStage, PrototypeKind, ReferenceKind, ResolvedEntry,
    ResolvedSlot, StringEncoding, TargetType, TypeMapping, TypeQualifier,
};
