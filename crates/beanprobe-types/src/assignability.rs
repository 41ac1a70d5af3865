//! Assignability rules
//!
//! Implements the relation "T is assignable from U": a value of type `U` can
//! be used where `T` is expected. Primitives only relate to themselves;
//! reference types relate through superclasses and implemented interfaces.

use rustc_hash::FxHashSet;

use crate::context::{Builtin, TypeContext};
use crate::ty::{ClassId, TypeDescriptor};

/// Context for checking assignability between type descriptors
#[derive(Debug, Clone, Copy)]
pub struct AssignabilityContext<'a> {
    /// Type context for resolving classes
    type_ctx: &'a TypeContext,
}

impl<'a> AssignabilityContext<'a> {
    /// Create a new assignability context
    pub fn new(type_ctx: &'a TypeContext) -> Self {
        AssignabilityContext { type_ctx }
    }

    /// Check if `target` is assignable from `source`
    ///
    /// Returns true if `target` is the same as, or a superclass or
    /// super-interface of, `source`.
    pub fn is_assignable_from(&self, target: &TypeDescriptor, source: &TypeDescriptor) -> bool {
        // Reflexivity: T <- T
        if target == source {
            return true;
        }

        match (target, source) {
            // Primitives never widen or box through this relation
            (TypeDescriptor::Primitive(_), _) | (_, TypeDescriptor::Primitive(_)) => false,

            (TypeDescriptor::Class(t), TypeDescriptor::Class(s)) => {
                self.type_ctx.get(*s).is_some() && self.class_assignable(*t, *s)
            }

            // Every array is an Object
            (TypeDescriptor::Class(t), TypeDescriptor::Array(_)) => *t == Builtin::Object.id(),

            // Arrays are covariant in reference element types only
            (TypeDescriptor::Array(t), TypeDescriptor::Array(s)) => {
                !t.is_primitive() && !s.is_primitive() && self.is_assignable_from(t, s)
            }

            (TypeDescriptor::Array(_), TypeDescriptor::Class(_)) => false,
        }
    }

    fn class_assignable(&self, target: ClassId, source: ClassId) -> bool {
        if target == Builtin::Object.id() {
            return true;
        }

        // Interface graphs may share ancestors
        let mut visited = FxHashSet::default();
        let mut pending = vec![source];
        while let Some(id) = pending.pop() {
            if id == target {
                return true;
            }
            if !visited.insert(id) {
                continue;
            }
            if let Some(class) = self.type_ctx.get(id) {
                pending.extend(class.extends);
                pending.extend(class.implements.iter().copied());
            }
        }

        false
    }
}

impl TypeContext {
    /// Check if `target` is assignable from `source` in this context
    pub fn is_assignable_from(&self, target: &TypeDescriptor, source: &TypeDescriptor) -> bool {
        AssignabilityContext::new(self).is_assignable_from(target, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ty::{ClassType, PrimitiveType};

    fn ty(builtin: Builtin) -> TypeDescriptor {
        builtin.into()
    }

    #[test]
    fn test_reflexivity() {
        let ctx = TypeContext::new();
        let assign = AssignabilityContext::new(&ctx);

        assert!(assign.is_assignable_from(&PrimitiveType::Int.into(), &PrimitiveType::Int.into()));
        assert!(assign.is_assignable_from(&ty(Builtin::String), &ty(Builtin::String)));
    }

    #[test]
    fn test_primitives_are_isolated() {
        let ctx = TypeContext::new();
        let assign = AssignabilityContext::new(&ctx);
        let int = TypeDescriptor::from(PrimitiveType::Int);
        let long = TypeDescriptor::from(PrimitiveType::Long);

        assert!(!assign.is_assignable_from(&long, &int));
        assert!(!assign.is_assignable_from(&ty(Builtin::Integer), &int));
        assert!(!assign.is_assignable_from(&int, &ty(Builtin::Integer)));
        assert!(!assign.is_assignable_from(&ty(Builtin::Object), &int));
    }

    #[test]
    fn test_superclass() {
        let ctx = TypeContext::new();
        let assign = AssignabilityContext::new(&ctx);

        assert!(assign.is_assignable_from(&ty(Builtin::Number), &ty(Builtin::Integer)));
        assert!(assign.is_assignable_from(&ty(Builtin::Object), &ty(Builtin::Integer)));
        assert!(!assign.is_assignable_from(&ty(Builtin::Integer), &ty(Builtin::Number)));
        assert!(!assign.is_assignable_from(&ty(Builtin::String), &ty(Builtin::Integer)));
        assert!(!assign.is_assignable_from(&ty(Builtin::Number), &ty(Builtin::Boolean)));
    }

    #[test]
    fn test_super_interface() {
        let ctx = TypeContext::new();
        let assign = AssignabilityContext::new(&ctx);

        assert!(assign.is_assignable_from(&ty(Builtin::Comparable), &ty(Builtin::Integer)));
        assert!(assign.is_assignable_from(&ty(Builtin::CharSequence), &ty(Builtin::String)));
        assert!(!assign.is_assignable_from(&ty(Builtin::CharSequence), &ty(Builtin::Integer)));
        assert!(assign.is_assignable_from(&ty(Builtin::Object), &ty(Builtin::Comparable)));
    }

    #[test]
    fn test_inherited_interface() {
        let mut ctx = TypeContext::new();
        let shape = ctx.register_class(ClassType::interface("Shape")).unwrap();
        let solid = ctx
            .register_class(ClassType::interface("Solid").implements(shape))
            .unwrap();
        let base = ctx
            .register_class(ClassType::class("Base").implements(solid))
            .unwrap();
        let cube = ctx.register_class(ClassType::class("Cube").extends(base)).unwrap();

        let assign = AssignabilityContext::new(&ctx);
        assert!(assign.is_assignable_from(&shape.into(), &cube.into()));
        assert!(assign.is_assignable_from(&solid.into(), &cube.into()));
        assert!(!assign.is_assignable_from(&cube.into(), &shape.into()));
    }

    #[test]
    fn test_arrays() {
        let ctx = TypeContext::new();
        let assign = AssignabilityContext::new(&ctx);
        let numbers = TypeDescriptor::array(Builtin::Number);
        let integers = TypeDescriptor::array(Builtin::Integer);
        let ints = TypeDescriptor::array(PrimitiveType::Int);
        let longs = TypeDescriptor::array(PrimitiveType::Long);

        assert!(assign.is_assignable_from(&numbers, &integers));
        assert!(!assign.is_assignable_from(&integers, &numbers));
        assert!(!assign.is_assignable_from(&longs, &ints));
        assert!(!assign.is_assignable_from(&numbers, &ints));
        assert!(assign.is_assignable_from(&ty(Builtin::Object), &ints));
        assert!(!assign.is_assignable_from(&ty(Builtin::Number), &integers));
        assert!(!assign.is_assignable_from(&integers, &ty(Builtin::Object)));
    }

    #[test]
    fn test_unknown_source_is_not_assignable() {
        let ctx = TypeContext::new();
        assert!(!ctx.is_assignable_from(
            &ty(Builtin::Object),
            &TypeDescriptor::Class(ClassId(900))
        ));
    }
}
