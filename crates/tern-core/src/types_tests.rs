use crate::Type;

#[test]
fn base_types_compare_by_tag() {
    assert_eq!(Type::Int, Type::Int);
    assert_ne!(Type::Int, Type::Float);
    assert_ne!(Type::Bool, Type::Unit);
}

#[test]
fn compound_types_compare_by_shape() {
    let a = Type::pair(Type::Int, Type::list(Type::Bool));
    let b = Type::pair(Type::Int, Type::list(Type::Bool));
    let c = Type::pair(Type::Int, Type::list(Type::Int));

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(Type::reference(Type::Int), Type::list(Type::Int));
}

#[test]
fn struct_equality_ignores_field_order() {
    let a = Type::structure([("x", Type::Int), ("y", Type::Bool)]);
    let b = Type::structure([("y", Type::Bool), ("x", Type::Int)]);
    let c = Type::structure([("x", Type::Int)]);

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn display_nested() {
    let ty = Type::function(
        Type::pair(Type::Int, Type::Float),
        Type::reference(Type::list(Type::Unit)),
    );
    insta::assert_snapshot!(ty, @"Function(Pair(Int, Float), Ref(List(Unit)))");
}

#[test]
fn display_struct_in_declaration_order() {
    let ty = Type::structure([("b", Type::Bool), ("a", Type::Int)]);
    insta::assert_snapshot!(ty, @"Struct{b: Bool, a: Int}");
}

#[test]
fn curried_and_uncurry() {
    let ty = Type::curried([Type::Int, Type::Bool], Type::Float);
    assert_eq!(
        ty,
        Type::function(Type::Int, Type::function(Type::Bool, Type::Float))
    );

    let (params, result) = ty.uncurry(2).unwrap();
    assert_eq!(params, vec![Type::Int, Type::Bool]);
    assert_eq!(result, Type::Float);

    let (params, result) = ty.uncurry(1).unwrap();
    assert_eq!(params, vec![Type::Int]);
    assert_eq!(result, Type::function(Type::Bool, Type::Float));

    assert!(ty.uncurry(3).is_none());
}

#[test]
fn uncurry_zero_arity_is_identity() {
    let (params, result) = Type::Int.uncurry(0).unwrap();
    assert!(params.is_empty());
    assert_eq!(result, Type::Int);
}
