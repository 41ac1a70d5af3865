//! The `Bean` trait: objects whose properties can be introspected

use beanprobe_types::ClassId;

use crate::error::PropertyAccessError;
use crate::value::Value;

/// An object exposing read accessors for the properties its class declares
///
/// The class returned by [`class_id`] must be registered in the
/// [`TypeContext`] the bean is inspected with; the context decides which
/// property names exist and which are readable. `read_property` is only
/// called for names the class chain declares as readable, and plays the part
/// of the getter: it may fail with [`PropertyAccessError::AccessDenied`] or
/// [`PropertyAccessError::Invocation`] to signal a guarded or broken
/// accessor.
///
/// Reads should be fast and side-effect free. Inspection probes every
/// property once per inspector construction.
///
/// [`class_id`]: Bean::class_id
/// [`TypeContext`]: beanprobe_types::TypeContext
pub trait Bean: Send + Sync {
    /// Concrete class of this bean
    fn class_id(&self) -> ClassId;

    /// Read the current value of a property
    fn read_property(&self, name: &str) -> Result<Value, PropertyAccessError>;
}

impl<B: Bean + ?Sized> Bean for Box<B> {
    fn class_id(&self) -> ClassId {
        (**self).class_id()
    }

    fn read_property(&self, name: &str) -> Result<Value, PropertyAccessError> {
        (**self).read_property(name)
    }
}
