use beanprobe_types::{
    Builtin, ClassType, PrimitiveType, PropertySignature, TypeContext, TypeDescriptor, TypeError,
};

// ============================================================================
// Registration
// ============================================================================

#[test]
fn test_builtins_have_fixed_ids() {
    let a = TypeContext::new();
    let b = TypeContext::default();

    for builtin in Builtin::ALL {
        assert_eq!(a.id_of(builtin.name()), Some(builtin.id()));
        assert_eq!(b.id_of(builtin.name()), Some(builtin.id()));
    }
    assert_eq!(a.len(), Builtin::ALL.len());
}

#[test]
fn test_register_model() {
    let mut ctx = TypeContext::new();
    let named = ctx
        .register_class(
            ClassType::interface("Named")
                .property(PropertySignature::read_only("name", Builtin::String)),
        )
        .unwrap();
    let animal = ctx
        .register_class(
            ClassType::class("Animal")
                .implements(named)
                .property(PropertySignature::read_write("legs", PrimitiveType::Int)),
        )
        .unwrap();
    let dog = ctx
        .register_class(ClassType::class("Dog").extends(animal))
        .unwrap();

    assert_eq!(ctx.superclass(animal), Some(Builtin::Object.id()));
    let chain: Vec<&str> = ctx.hierarchy(dog).map(|(_, c)| c.name.as_str()).collect();
    assert_eq!(chain, vec!["Dog", "Animal", "Object"]);

    assert!(ctx.find_property(dog, "legs").is_some());
    // Interface properties are not inherited through the class chain
    assert!(ctx.find_property(dog, "name").is_none());

    assert!(ctx.is_assignable_from(&named.into(), &dog.into()));
    assert!(!ctx.is_assignable_from(&dog.into(), &animal.into()));
}

#[test]
fn test_registration_errors() {
    let mut ctx = TypeContext::new();

    assert_eq!(
        ctx.register_class(ClassType::class("String")),
        Err(TypeError::DuplicateClass {
            name: "String".to_string()
        })
    );
    assert!(matches!(
        ctx.register_class(ClassType::class("Bad").extends(Builtin::Comparable.id())),
        Err(TypeError::InvalidSuperclass { .. })
    ));
    assert!(matches!(
        ctx.register_class(ClassType::class("Bad").implements(Builtin::Number.id())),
        Err(TypeError::InvalidInterface { .. })
    ));
    assert!(matches!(
        ctx.register_class(
            ClassType::class("Bad")
                .property(PropertySignature::read_only("a.b", PrimitiveType::Int))
        ),
        Err(TypeError::InvalidPropertyName { .. })
    ));
    assert!(matches!(
        ctx.register_class(
            ClassType::class("Bad")
                .property(PropertySignature::read_only("a", PrimitiveType::Int))
                .property(PropertySignature::write_only("a", PrimitiveType::Long))
        ),
        Err(TypeError::DuplicateProperty { .. })
    ));

    // Failed registrations leave the context untouched
    assert_eq!(ctx.len(), Builtin::ALL.len());
    assert!(ctx.id_of("Bad").is_none());
}

// ============================================================================
// Boxing and Assignability
// ============================================================================

#[test]
fn test_boxing_round_trip() {
    for primitive in PrimitiveType::ALL {
        let boxed = primitive.boxed();
        assert_eq!(boxed.unboxed(), Some(primitive));
        assert_eq!(
            TypeDescriptor::from(primitive).boxed(),
            TypeDescriptor::from(boxed)
        );
    }
    assert_eq!(Builtin::String.unboxed(), None);
}

#[test]
fn test_boxed_numbers_are_numbers() {
    let ctx = TypeContext::new();
    let number = TypeDescriptor::from(Builtin::Number);

    for primitive in PrimitiveType::ALL {
        let boxed = TypeDescriptor::from(primitive).boxed();
        assert_eq!(
            ctx.is_assignable_from(&number, &boxed),
            !matches!(primitive, PrimitiveType::Boolean | PrimitiveType::Char),
            "{}",
            primitive
        );
        // Primitives themselves are never assignable to a class
        assert!(!ctx.is_assignable_from(&number, &primitive.into()));
    }
}

#[test]
fn test_type_names() {
    let ctx = TypeContext::new();

    assert_eq!(ctx.type_name(&PrimitiveType::Boolean.into()), "boolean");
    assert_eq!(ctx.type_name(&Builtin::Character.into()), "Character");
    assert_eq!(
        ctx.type_name(&TypeDescriptor::array(TypeDescriptor::array(
            PrimitiveType::Char
        ))),
        "char[][]"
    );
}
