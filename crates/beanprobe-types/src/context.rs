//! Class registry
//!
//! A [`TypeContext`] owns every class and interface declaration that property
//! introspection can see. Classes are appended and never removed, so a
//! [`ClassId`] stays valid for the lifetime of the context.
//!
//! The built-in classes listed in [`Builtin`] are registered by
//! [`TypeContext::new`] in a fixed order, which makes their ids the same in
//! every context.

use std::fmt;

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::error::TypeError;
use crate::ty::{ClassId, ClassKind, ClassType, PropertySignature, TypeDescriptor};

/// Classes every context starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// Root of the class hierarchy
    Object,
    /// Abstract base of the numeric boxed classes
    Number,
    /// Interface implemented by the boxed classes and `String`
    Comparable,
    /// Interface implemented by `String`
    CharSequence,
    /// Boxed `byte`
    Byte,
    /// Boxed `short`
    Short,
    /// Boxed `int`
    Integer,
    /// Boxed `long`
    Long,
    /// Boxed `float`
    Float,
    /// Boxed `double`
    Double,
    /// Boxed `boolean`
    Boolean,
    /// Boxed `char`
    Character,
    /// Character strings
    String,
}

impl Builtin {
    /// All built-ins in registration order
    pub const ALL: [Builtin; 13] = [
        Builtin::Object,
        Builtin::Number,
        Builtin::Comparable,
        Builtin::CharSequence,
        Builtin::Byte,
        Builtin::Short,
        Builtin::Integer,
        Builtin::Long,
        Builtin::Float,
        Builtin::Double,
        Builtin::Boolean,
        Builtin::Character,
        Builtin::String,
    ];

    /// Id of this built-in in any [`TypeContext`]
    pub const fn id(self) -> ClassId {
        ClassId(self as u32)
    }

    /// Class name of this built-in
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Object => "Object",
            Builtin::Number => "Number",
            Builtin::Comparable => "Comparable",
            Builtin::CharSequence => "CharSequence",
            Builtin::Byte => "Byte",
            Builtin::Short => "Short",
            Builtin::Integer => "Integer",
            Builtin::Long => "Long",
            Builtin::Float => "Float",
            Builtin::Double => "Double",
            Builtin::Boolean => "Boolean",
            Builtin::Character => "Character",
            Builtin::String => "String",
        }
    }

    fn declaration(self) -> ClassType {
        let object = Builtin::Object.id();
        let comparable = Builtin::Comparable.id();
        match self {
            Builtin::Object => ClassType::class("Object"),
            Builtin::Number => ClassType::class("Number").extends(object),
            Builtin::Comparable | Builtin::CharSequence => ClassType::interface(self.name()),
            Builtin::Byte
            | Builtin::Short
            | Builtin::Integer
            | Builtin::Long
            | Builtin::Float
            | Builtin::Double => ClassType::class(self.name())
                .extends(Builtin::Number.id())
                .implements(comparable),
            Builtin::Boolean | Builtin::Character => ClassType::class(self.name())
                .extends(object)
                .implements(comparable),
            Builtin::String => ClassType::class("String")
                .extends(object)
                .implements(comparable)
                .implements(Builtin::CharSequence.id()),
        }
    }
}

impl From<Builtin> for ClassId {
    fn from(builtin: Builtin) -> Self {
        builtin.id()
    }
}

impl From<Builtin> for TypeDescriptor {
    fn from(builtin: Builtin) -> Self {
        TypeDescriptor::Class(builtin.id())
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Registry of class and interface declarations
#[derive(Debug, Clone)]
pub struct TypeContext {
    /// Classes indexed by ID
    classes: Vec<ClassType>,
    /// Class name to ID mapping
    name_to_id: FxHashMap<String, ClassId>,
}

impl TypeContext {
    /// Create a context holding only the built-in classes
    pub fn new() -> Self {
        let mut ctx = Self {
            classes: Vec::with_capacity(Builtin::ALL.len()),
            name_to_id: FxHashMap::default(),
        };
        for builtin in Builtin::ALL {
            let id = ctx.push(builtin.declaration());
            debug_assert_eq!(id, builtin.id());
        }
        ctx
    }

    /// Register a new class or interface
    ///
    /// A class declared without a superclass extends `Object`. Every id the
    /// declaration mentions (superclass, interfaces, property types) must
    /// already be registered, so hierarchies are always acyclic.
    pub fn register_class(&mut self, mut class: ClassType) -> Result<ClassId, TypeError> {
        if self.name_to_id.contains_key(&class.name) {
            return Err(TypeError::DuplicateClass { name: class.name });
        }

        match class.kind {
            ClassKind::Class => {
                let parent = *class.extends.get_or_insert(Builtin::Object.id());
                let parent_ty = self.get(parent).ok_or(TypeError::UnknownClass { id: parent })?;
                if parent_ty.is_interface() {
                    return Err(TypeError::InvalidSuperclass {
                        class: class.name,
                        reason: format!("{} is an interface", parent_ty.name),
                    });
                }
            }
            ClassKind::Interface => {
                if class.extends.is_some() {
                    return Err(TypeError::InvalidSuperclass {
                        class: class.name,
                        reason: "interfaces cannot extend a class".to_string(),
                    });
                }
            }
        }

        for &interface in &class.implements {
            let iface = self.get(interface).ok_or(TypeError::UnknownClass { id: interface })?;
            if !iface.is_interface() {
                return Err(TypeError::InvalidInterface {
                    class: class.name.clone(),
                    interface: iface.name.clone(),
                });
            }
        }

        for (i, property) in class.properties.iter().enumerate() {
            if !is_valid_property_name(&property.name) {
                return Err(TypeError::InvalidPropertyName {
                    class: class.name.clone(),
                    property: property.name.clone(),
                });
            }
            if class.properties[..i].iter().any(|p| p.name == property.name) {
                return Err(TypeError::DuplicateProperty {
                    class: class.name.clone(),
                    property: property.name.clone(),
                });
            }
            self.check_descriptor(&property.ty)?;
        }

        Ok(self.push(class))
    }

    fn check_descriptor(&self, ty: &TypeDescriptor) -> Result<(), TypeError> {
        match ty {
            TypeDescriptor::Primitive(_) => Ok(()),
            TypeDescriptor::Class(id) => self
                .get(*id)
                .map(|_| ())
                .ok_or(TypeError::UnknownClass { id: *id }),
            TypeDescriptor::Array(element) => self.check_descriptor(element),
        }
    }

    fn push(&mut self, class: ClassType) -> ClassId {
        let id = ClassId(self.classes.len() as u32);
        trace!(class = %class.name, %id, "registered class");
        self.name_to_id.insert(class.name.clone(), id);
        self.classes.push(class);
        id
    }

    /// Get class by ID
    pub fn get(&self, id: ClassId) -> Option<&ClassType> {
        self.classes.get(id.index())
    }

    /// Look up a class id by name
    pub fn id_of(&self, name: &str) -> Option<ClassId> {
        self.name_to_id.get(name).copied()
    }

    /// Superclass of a class, `None` for the root and for interfaces
    pub fn superclass(&self, id: ClassId) -> Option<ClassId> {
        self.get(id).and_then(|c| c.extends)
    }

    /// Walk the superclass chain
    ///
    /// The first element is the class itself, the last is the root ancestor.
    /// Yields nothing for an unknown id.
    pub fn hierarchy(&self, id: ClassId) -> impl Iterator<Item = (ClassId, &ClassType)> + '_ {
        let mut current = self.get(id).map(|_| id);
        std::iter::from_fn(move || {
            let id = current?;
            let class = self.get(id)?;
            current = class.extends;
            Some((id, class))
        })
    }

    /// Check if `sub` is `sup` or one of its subclasses
    pub fn is_subclass_of(&self, sub: ClassId, sup: ClassId) -> bool {
        self.hierarchy(sub).any(|(id, _)| id == sup)
    }

    /// Find a readable or writable property anywhere in a class's hierarchy
    ///
    /// The most-derived declaration wins.
    pub fn find_property(&self, id: ClassId, name: &str) -> Option<&PropertySignature> {
        self.hierarchy(id)
            .find_map(|(_, class)| class.declared_property(name))
    }

    /// Human-readable name of a type descriptor
    pub fn type_name(&self, ty: &TypeDescriptor) -> String {
        match ty {
            TypeDescriptor::Primitive(p) => p.type_name().to_string(),
            TypeDescriptor::Class(id) => match self.get(*id) {
                Some(class) => class.name.clone(),
                None => format!("<unknown {}>", id),
            },
            TypeDescriptor::Array(element) => format!("{}[]", self.type_name(element)),
        }
    }

    /// Iterate over all classes with their IDs
    pub fn iter(&self) -> impl Iterator<Item = (ClassId, &ClassType)> {
        self.classes
            .iter()
            .enumerate()
            .map(|(i, class)| (ClassId(i as u32), class))
    }

    /// Number of registered classes, built-ins included
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Always false: the built-ins are registered on construction
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Property names are used as path segments, so they cannot contain the
/// separator or index brackets.
fn is_valid_property_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['.', '[', ']'])
}

impl Default for TypeContext {
    fn default() -> Self {
        Self::new()
    }
}
