//! Beanprobe
//!
//! Lists the readable properties of a bean: every property a class and its
//! superclasses declare above a stop class is probed once, and the ones that
//! can actually be read are kept as parallel name and type sequences.
//!
//! Classes are described up front in a [`TypeContext`]; beans implement
//! [`Bean`] to expose their class and read accessors.

#![warn(missing_docs)]

pub mod accessor;
pub mod bean;
pub mod config;
pub mod error;
pub mod inspector;
pub mod introspector;
pub mod value;

pub use beanprobe_types;
pub use beanprobe_types::{
    Builtin, ClassId, ClassKind, ClassType, PrimitiveType, PropertySignature, TypeContext,
    TypeDescriptor,
};

pub use accessor::{get_property, probe, require_property};
pub use bean::Bean;
pub use config::{ConfigError, InspectorOptions};
pub use error::{AccessResult, IntrospectionError, PropertyAccessError};
pub use inspector::{
    InspectionSummary, ProbeOutcome, Property, PropertyInspector, PropertyIter, PropertySummary,
};
pub use introspector::{Introspector, PropertyDescriptor};
pub use value::Value;
