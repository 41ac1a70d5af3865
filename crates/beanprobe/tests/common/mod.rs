//! Shared fixtures for the integration tests
#![allow(dead_code)]

use beanprobe::{
    Bean, Builtin, ClassId, ClassType, PrimitiveType, PropertyAccessError, PropertySignature,
    TypeContext, TypeDescriptor, Value,
};

/// A bean backed by a list of canned read results
#[derive(Debug, Clone)]
pub struct Record {
    class: ClassId,
    fields: Vec<(&'static str, Result<Value, PropertyAccessError>)>,
}

impl Record {
    pub fn new(class: ClassId) -> Self {
        Self {
            class,
            fields: Vec::new(),
        }
    }

    pub fn with(mut self, name: &'static str, value: impl Into<Value>) -> Self {
        self.fields.push((name, Ok(value.into())));
        self
    }

    pub fn failing(mut self, name: &'static str, error: PropertyAccessError) -> Self {
        self.fields.push((name, Err(error)));
        self
    }
}

impl Bean for Record {
    fn class_id(&self) -> ClassId {
        self.class
    }

    fn read_property(&self, name: &str) -> Result<Value, PropertyAccessError> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, result)| result.clone())
            .unwrap_or_else(|| Err(PropertyAccessError::no_such_property(name)))
    }
}

/// A small class model:
///
/// ```text
/// Point     extends Object   x: int, y: int
/// Address   extends Object   city: String, lines: String[]
/// Person    extends Object   name, age, nickname, secret, broken, password (write-only),
///                            address, tags
/// Employee  extends Person   name (redeclared), salary, manager
/// Primitives extends Object  one property per primitive type
/// Holder    extends Object   count: Number, label: String, id: Integer, key: Comparable,
///                            raw: int, any: Object
/// ```
pub struct Fixture {
    pub ctx: TypeContext,
    pub point: ClassId,
    pub address: ClassId,
    pub person: ClassId,
    pub employee: ClassId,
    pub primitives: ClassId,
    pub holder: ClassId,
}

pub fn fixture() -> Fixture {
    let mut ctx = TypeContext::new();
    let string = TypeDescriptor::from(Builtin::String);

    let point = ctx
        .register_class(
            ClassType::class("Point")
                .property(PropertySignature::read_write("x", PrimitiveType::Int))
                .property(PropertySignature::read_write("y", PrimitiveType::Int)),
        )
        .unwrap();

    let address = ctx
        .register_class(
            ClassType::class("Address")
                .property(PropertySignature::read_write("city", Builtin::String))
                .property(PropertySignature::read_only(
                    "lines",
                    TypeDescriptor::array(string.clone()),
                )),
        )
        .unwrap();

    let person = ctx
        .register_class(
            ClassType::class("Person")
                .property(PropertySignature::read_write("name", Builtin::String))
                .property(PropertySignature::read_write("age", PrimitiveType::Int))
                .property(PropertySignature::read_only("nickname", Builtin::String))
                .property(PropertySignature::read_only("secret", Builtin::String))
                .property(PropertySignature::read_only("broken", PrimitiveType::Int))
                .property(PropertySignature::write_only("password", Builtin::String))
                .property(PropertySignature::read_only("address", address))
                .property(PropertySignature::read_only("tags", TypeDescriptor::array(string))),
        )
        .unwrap();

    let employee = ctx
        .register_class(
            ClassType::class("Employee")
                .extends(person)
                .property(PropertySignature::read_only("name", Builtin::CharSequence))
                .property(PropertySignature::read_only("salary", PrimitiveType::Double))
                .property(PropertySignature::read_only("manager", person)),
        )
        .unwrap();

    let primitives = ctx
        .register_class(PrimitiveType::ALL.iter().fold(
            ClassType::class("Primitives"),
            |class, &p| class.property(PropertySignature::read_only(primitive_property(p), p)),
        ))
        .unwrap();

    let holder = ctx
        .register_class(
            ClassType::class("Holder")
                .property(PropertySignature::read_only("count", Builtin::Number))
                .property(PropertySignature::read_only("label", Builtin::String))
                .property(PropertySignature::read_only("id", Builtin::Integer))
                .property(PropertySignature::read_only("key", Builtin::Comparable))
                .property(PropertySignature::read_only("raw", PrimitiveType::Int))
                .property(PropertySignature::read_only("any", Builtin::Object)),
        )
        .unwrap();

    Fixture {
        ctx,
        point,
        address,
        person,
        employee,
        primitives,
        holder,
    }
}

/// Property name used for a primitive on the `Primitives` class
pub fn primitive_property(p: PrimitiveType) -> &'static str {
    match p {
        PrimitiveType::Byte => "aByte",
        PrimitiveType::Short => "aShort",
        PrimitiveType::Int => "anInt",
        PrimitiveType::Long => "aLong",
        PrimitiveType::Float => "aFloat",
        PrimitiveType::Double => "aDouble",
        PrimitiveType::Boolean => "aBoolean",
        PrimitiveType::Char => "aChar",
    }
}

pub fn point(f: &Fixture, x: i32, y: i32) -> Record {
    Record::new(f.point).with("x", x).with("y", y)
}

pub fn address(f: &Fixture) -> Record {
    Record::new(f.address)
        .with("city", "Lisbon")
        .with("lines", vec!["Rua Augusta 1", "2nd floor"])
}

/// A person whose `secret` and `broken` accessors fail
pub fn person(f: &Fixture) -> Record {
    person_fields(Record::new(f.person), f)
}

pub fn employee(f: &Fixture) -> Record {
    person_fields(Record::new(f.employee), f)
        .with("salary", 1250.5)
        .with("manager", Value::bean(person(f)))
}

fn person_fields(record: Record, f: &Fixture) -> Record {
    record
        .with("name", "Ana")
        .with("age", 41)
        .with("nickname", None::<&str>)
        .failing("secret", PropertyAccessError::access_denied("secret", "guarded"))
        .failing("broken", PropertyAccessError::invocation("broken", "getter threw"))
        .with("password", "hunter2")
        .with("address", Value::bean(address(f)))
        .with("tags", vec!["admin", "ops"])
}

pub fn primitives(f: &Fixture) -> Record {
    Record::new(f.primitives)
        .with("aByte", Value::Byte(1))
        .with("aShort", Value::Short(2))
        .with("anInt", 3)
        .with("aLong", 4i64)
        .with("aFloat", Value::Float(5.0))
        .with("aDouble", 6.0)
        .with("aBoolean", true)
        .with("aChar", 'c')
}

pub fn holder(f: &Fixture) -> Record {
    Record::new(f.holder)
        .with("count", 3)
        .with("label", "l")
        .with("id", 7)
        .with("key", "k")
        .with("raw", 1)
        .with("any", Value::Null)
}
