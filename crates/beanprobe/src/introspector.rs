//! Class introspection
//!
//! Enumerates the property descriptors a class exposes between itself and a
//! stop class, the way bean introspection treats getter methods: the class
//! and each superclass up to (not including) the stop class contribute their
//! declared properties, and a subclass redeclaring a name shadows its parent.

use std::collections::BTreeMap;

use beanprobe_types::{ClassId, PropertySignature, TypeContext, TypeDescriptor};

use crate::error::IntrospectionError;

/// A property as seen by introspection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    /// Property name
    pub name: String,
    /// Declared property type
    pub ty: TypeDescriptor,
    /// Class whose declaration is in effect
    pub declaring_class: ClassId,
    /// Whether a read accessor exists
    pub readable: bool,
    /// Whether a write accessor exists
    pub writable: bool,
}

impl PropertyDescriptor {
    fn new(signature: &PropertySignature, declaring_class: ClassId) -> Self {
        Self {
            name: signature.name.clone(),
            ty: signature.ty.clone(),
            declaring_class,
            readable: signature.readable,
            writable: signature.writable,
        }
    }
}

/// Property enumeration over a [`TypeContext`]
#[derive(Debug, Clone, Copy)]
pub struct Introspector<'a> {
    type_ctx: &'a TypeContext,
}

impl<'a> Introspector<'a> {
    /// Create an introspector for a context
    pub fn new(type_ctx: &'a TypeContext) -> Self {
        Self { type_ctx }
    }

    /// Property descriptors introduced strictly below `stop`
    ///
    /// `stop` must be `class` itself or one of its superclasses; passing
    /// `class` yields no descriptors. Descriptors are sorted by name and
    /// include write-only properties.
    pub fn bean_info(
        &self,
        class: ClassId,
        stop: ClassId,
    ) -> Result<Vec<PropertyDescriptor>, IntrospectionError> {
        let class_ty = self
            .type_ctx
            .get(class)
            .ok_or(IntrospectionError::UnknownClass { id: class })?;
        let stop_ty = self
            .type_ctx
            .get(stop)
            .ok_or(IntrospectionError::UnknownClass { id: stop })?;

        if class_ty.is_interface() {
            return Err(IntrospectionError::NotAClass {
                name: class_ty.name.clone(),
            });
        }
        if !self.type_ctx.is_subclass_of(class, stop) {
            return Err(IntrospectionError::NotAncestor {
                class: class_ty.name.clone(),
                stop: stop_ty.name.clone(),
            });
        }

        let mut properties: BTreeMap<&str, PropertyDescriptor> = BTreeMap::new();
        for (id, declaring) in self
            .type_ctx
            .hierarchy(class)
            .take_while(|&(id, _)| id != stop)
        {
            for signature in &declaring.properties {
                properties
                    .entry(signature.name.as_str())
                    .or_insert_with(|| PropertyDescriptor::new(signature, id));
            }
        }

        Ok(properties.into_values().collect())
    }
}
