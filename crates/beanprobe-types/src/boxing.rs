//! Boxed equivalents of primitive types

use crate::context::Builtin;
use crate::ty::{PrimitiveType, TypeDescriptor};

impl PrimitiveType {
    /// The built-in class that boxes this primitive, e.g. `int` -> `Integer`
    pub fn boxed(self) -> Builtin {
        match self {
            PrimitiveType::Byte => Builtin::Byte,
            PrimitiveType::Short => Builtin::Short,
            PrimitiveType::Int => Builtin::Integer,
            PrimitiveType::Long => Builtin::Long,
            PrimitiveType::Float => Builtin::Float,
            PrimitiveType::Double => Builtin::Double,
            PrimitiveType::Boolean => Builtin::Boolean,
            PrimitiveType::Char => Builtin::Character,
        }
    }
}

impl Builtin {
    /// The primitive this class boxes, if it is a boxed class
    pub fn unboxed(self) -> Option<PrimitiveType> {
        PrimitiveType::ALL.into_iter().find(|p| p.boxed() == self)
    }
}

impl TypeDescriptor {
    /// Boxed equivalent of a primitive type
    ///
    /// Any other descriptor, including already-boxed classes and arrays of
    /// primitives, is returned unchanged.
    pub fn boxed(&self) -> TypeDescriptor {
        match self {
            TypeDescriptor::Primitive(p) => p.boxed().into(),
            other => other.clone(),
        }
    }

    /// Primitive equivalent of a boxed class; the inverse of [`boxed`]
    ///
    /// [`boxed`]: TypeDescriptor::boxed
    pub fn unboxed(&self) -> TypeDescriptor {
        let primitive = Builtin::ALL
            .into_iter()
            .find(|b| Some(b.id()) == self.as_class())
            .and_then(Builtin::unboxed);
        match primitive {
            Some(p) => p.into(),
            None => self.clone(),
        }
    }
}
