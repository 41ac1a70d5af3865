//! Type registry errors

use thiserror::Error;

use crate::ty::ClassId;

/// Errors that can occur while registering classes in a type context
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TypeError {
    /// A class with the same name is already registered
    #[error("Duplicate class: {name}")]
    DuplicateClass {
        /// Class name
        name: String,
    },

    /// Reference to a class id that is not registered
    #[error("Undefined class: {id}")]
    UnknownClass {
        /// Class id that was not found
        id: ClassId,
    },

    /// Superclass is missing, is an interface, or was given to an interface
    #[error("Invalid superclass for {class}: {reason}")]
    InvalidSuperclass {
        /// Class being registered
        class: String,
        /// Why the superclass was rejected
        reason: String,
    },

    /// An implemented interface is not an interface
    #[error("Invalid interface for {class}: {interface} is not an interface")]
    InvalidInterface {
        /// Class being registered
        class: String,
        /// Name of the offending type
        interface: String,
    },

    /// The same property name is declared twice on one class
    #[error("Duplicate property {property} on {class}")]
    DuplicateProperty {
        /// Class being registered
        class: String,
        /// Property name
        property: String,
    },

    /// Property names must be non-empty and free of path syntax
    #[error("Invalid property name {property:?} on {class}")]
    InvalidPropertyName {
        /// Class being registered
        class: String,
        /// Property name
        property: String,
    },
}
