//! Core type definitions for bean introspection

use std::fmt;

/// Unique identifier for a class or interface registered in a [`TypeContext`]
///
/// [`TypeContext`]: crate::TypeContext
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(pub(crate) u32);

impl ClassId {
    /// Index of this class in its registry
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassId({})", self.0)
    }
}

/// Primitive value types
///
/// These are the types a property can declare without going through a class.
/// Each one has a boxed counterpart registered as a built-in class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// 8-bit signed integer
    Byte,
    /// 16-bit signed integer
    Short,
    /// 32-bit signed integer
    Int,
    /// 64-bit signed integer
    Long,
    /// Single precision float
    Float,
    /// Double precision float
    Double,
    /// `true` / `false`
    Boolean,
    /// A single character
    Char,
}

impl PrimitiveType {
    /// Every primitive type, in declaration order
    pub const ALL: [PrimitiveType; 8] = [
        PrimitiveType::Byte,
        PrimitiveType::Short,
        PrimitiveType::Int,
        PrimitiveType::Long,
        PrimitiveType::Float,
        PrimitiveType::Double,
        PrimitiveType::Boolean,
        PrimitiveType::Char,
    ];

    /// Source-level name of the type
    pub fn type_name(self) -> &'static str {
        match self {
            PrimitiveType::Byte => "byte",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Char => "char",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// The declared type of a property
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    /// Primitive type (int, double, boolean, ...)
    Primitive(PrimitiveType),

    /// Class or interface type (nominal)
    Class(ClassId),

    /// Array type: T[]
    Array(Box<TypeDescriptor>),
}

impl TypeDescriptor {
    /// Create an array type with the given element type
    pub fn array(element: impl Into<TypeDescriptor>) -> Self {
        TypeDescriptor::Array(Box::new(element.into()))
    }

    /// Check if this type is a primitive type
    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeDescriptor::Primitive(_))
    }

    /// Check if this type is an array type
    pub fn is_array(&self) -> bool {
        matches!(self, TypeDescriptor::Array(_))
    }

    /// Get the primitive type if this is a primitive
    pub fn as_primitive(&self) -> Option<PrimitiveType> {
        match self {
            TypeDescriptor::Primitive(p) => Some(*p),
            _ => None,
        }
    }

    /// Get the class id if this is a class or interface type
    pub fn as_class(&self) -> Option<ClassId> {
        match self {
            TypeDescriptor::Class(id) => Some(*id),
            _ => None,
        }
    }

    /// Get the element type if this is an array
    pub fn element_type(&self) -> Option<&TypeDescriptor> {
        match self {
            TypeDescriptor::Array(element) => Some(element),
            _ => None,
        }
    }
}

impl From<PrimitiveType> for TypeDescriptor {
    fn from(p: PrimitiveType) -> Self {
        TypeDescriptor::Primitive(p)
    }
}

impl From<ClassId> for TypeDescriptor {
    fn from(id: ClassId) -> Self {
        TypeDescriptor::Class(id)
    }
}

/// Whether a registered type is a concrete/abstract class or an interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    /// A class, with at most one superclass
    Class,
    /// An interface, which may only extend other interfaces
    Interface,
}

/// A property declared by a class
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertySignature {
    /// Property name
    pub name: String,
    /// Declared property type
    pub ty: TypeDescriptor,
    /// Whether the class declares a read accessor
    pub readable: bool,
    /// Whether the class declares a write accessor
    pub writable: bool,
}

impl PropertySignature {
    /// A property with a getter and a setter
    pub fn read_write(name: impl Into<String>, ty: impl Into<TypeDescriptor>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            readable: true,
            writable: true,
        }
    }

    /// A property with only a getter
    pub fn read_only(name: impl Into<String>, ty: impl Into<TypeDescriptor>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            readable: true,
            writable: false,
        }
    }

    /// A property with only a setter
    pub fn write_only(name: impl Into<String>, ty: impl Into<TypeDescriptor>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            readable: false,
            writable: true,
        }
    }
}

/// Class or interface declaration (nominal typing)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassType {
    /// Class name, unique within a context
    pub name: String,
    /// Class or interface
    pub kind: ClassKind,
    /// Superclass (classes only). `None` only for the root class.
    pub extends: Option<ClassId>,
    /// Implemented interfaces, or extended interfaces for an interface
    pub implements: Vec<ClassId>,
    /// Properties declared directly by this class, in declaration order
    pub properties: Vec<PropertySignature>,
}

impl ClassType {
    /// Start a class declaration
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ClassKind::Class,
            extends: None,
            implements: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// Start an interface declaration
    pub fn interface(name: impl Into<String>) -> Self {
        Self {
            kind: ClassKind::Interface,
            ..Self::class(name)
        }
    }

    /// Set the superclass
    pub fn extends(mut self, parent: ClassId) -> Self {
        self.extends = Some(parent);
        self
    }

    /// Add an implemented (or, for interfaces, extended) interface
    pub fn implements(mut self, interface: ClassId) -> Self {
        self.implements.push(interface);
        self
    }

    /// Declare a property
    pub fn property(mut self, property: PropertySignature) -> Self {
        self.properties.push(property);
        self
    }

    /// Check if this is an interface
    pub fn is_interface(&self) -> bool {
        self.kind == ClassKind::Interface
    }

    /// Look up a property declared directly on this class
    pub fn declared_property(&self, name: &str) -> Option<&PropertySignature> {
        self.properties.iter().find(|p| p.name == name)
    }
}

impl fmt::Display for ClassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ClassKind::Class => write!(f, "class {}", self.name),
            ClassKind::Interface => write!(f, "interface {}", self.name),
        }
    }
}
