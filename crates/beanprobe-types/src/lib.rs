//! Beanprobe type model
//!
//! Class registry, primitive boxing and the assignability relation used by
//! property introspection.

#![warn(missing_docs)]

pub mod assignability;
pub mod boxing;
pub mod context;
pub mod error;
pub mod ty;

pub use assignability::AssignabilityContext;
pub use context::{Builtin, TypeContext};
pub use error::TypeError;
pub use ty::{ClassId, ClassKind, ClassType, PrimitiveType, PropertySignature, TypeDescriptor};
