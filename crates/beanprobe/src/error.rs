//! Error types for bean introspection

use beanprobe_types::ClassId;
use thiserror::Error;

/// Result type for property reads
pub type AccessResult<T> = Result<T, PropertyAccessError>;

/// Failure to read a single property
///
/// Inspection treats every variant the same way: the property is left out.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PropertyAccessError {
    /// The class chain does not declare the property
    #[error("No such property: {property}")]
    NoSuchProperty {
        /// Property name
        property: String,
    },

    /// The property is declared but has no read accessor
    #[error("Property {property} has no read method")]
    NoReadMethod {
        /// Property name
        property: String,
    },

    /// The read accessor refused access
    #[error("Access denied to property {property}: {reason}")]
    AccessDenied {
        /// Property name
        property: String,
        /// Why access was refused
        reason: String,
    },

    /// The read accessor failed
    #[error("Reading property {property} failed: {message}")]
    Invocation {
        /// Property name
        property: String,
        /// Failure reported by the accessor
        message: String,
    },

    /// Index past the end of an indexed property
    #[error("Index {index} out of bounds for property {property} of length {len}")]
    IndexOutOfBounds {
        /// Property name
        property: String,
        /// Requested index
        index: usize,
        /// Number of elements
        len: usize,
    },

    /// Index applied to a property that is not a list
    #[error("Property {property} is not indexed (found {found})")]
    NotIndexed {
        /// Property name
        property: String,
        /// Kind of value found
        found: &'static str,
    },

    /// A nested path went through a null value
    #[error("Null value at {path}")]
    NullNested {
        /// Path prefix that evaluated to null
        path: String,
    },

    /// A nested path went through a value that is not a bean
    #[error("Value at {path} is not a bean (found {found})")]
    NotABean {
        /// Path prefix that evaluated to a non-bean
        path: String,
        /// Kind of value found
        found: &'static str,
    },

    /// The property path could not be parsed
    #[error("Invalid property path {path:?}: {reason}")]
    InvalidPath {
        /// The path as given
        path: String,
        /// What is wrong with it
        reason: String,
    },
}

impl PropertyAccessError {
    /// Shorthand for [`PropertyAccessError::NoSuchProperty`]
    pub fn no_such_property(property: impl Into<String>) -> Self {
        PropertyAccessError::NoSuchProperty {
            property: property.into(),
        }
    }

    /// Shorthand for [`PropertyAccessError::AccessDenied`]
    pub fn access_denied(property: impl Into<String>, reason: impl Into<String>) -> Self {
        PropertyAccessError::AccessDenied {
            property: property.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for [`PropertyAccessError::Invocation`]
    pub fn invocation(property: impl Into<String>, message: impl Into<String>) -> Self {
        PropertyAccessError::Invocation {
            property: property.into(),
            message: message.into(),
        }
    }
}

/// Errors that abort introspection of a class
#[derive(Debug, Clone, Error, PartialEq)]
pub enum IntrospectionError {
    /// The class or stop class is not registered
    #[error("Undefined class: {id}")]
    UnknownClass {
        /// Class id that was not found
        id: ClassId,
    },

    /// The stop class is neither the class nor one of its superclasses
    #[error("{stop} is not a superclass of {class}")]
    NotAncestor {
        /// Inspected class
        class: String,
        /// Requested stop class
        stop: String,
    },

    /// Interfaces have no bean properties to introspect
    #[error("{name} is an interface, not a class")]
    NotAClass {
        /// Interface name
        name: String,
    },

    /// A property read failed where the caller required it to succeed
    #[error("couldn't get property [{property}]: {source}")]
    PropertyAccess {
        /// Property path
        property: String,
        /// Underlying failure
        #[source]
        source: PropertyAccessError,
    },
}
