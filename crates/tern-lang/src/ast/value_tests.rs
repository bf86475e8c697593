use tern_core::{TokenKind, Type};

use crate::ast::{ArithOp, CmpOp, Expr, NumKind, WrongOperator};

#[test]
fn canonical_forms_are_values() {
    assert!(Expr::int(1).is_value());
    assert!(Expr::float(1.5).is_value());
    assert!(Expr::nan(NumKind::Float).is_value());
    assert!(Expr::bool(true).is_value());
    assert!(Expr::unit().is_value());
    assert!(Expr::ptr(0, Type::Int).is_value());
    assert!(Expr::pair(Expr::int(1), Expr::unit()).is_value());
    assert!(Expr::empty_list(Type::Int).is_value());
    assert!(Expr::structure([("a", Expr::int(1), Type::Int)]).is_value());
}

#[test]
fn reducible_forms_are_not_values() {
    let sum = Expr::arith(ArithOp::Add, Expr::int(1), Expr::int(2));

    assert!(!Expr::var("x").is_value());
    assert!(!sum.is_value());
    assert!(!Expr::pair(Expr::int(1), sum.clone()).is_value());
    assert!(!Expr::list(vec![Expr::int(0), sum.clone()], Type::Int).is_value());
    assert!(!Expr::structure([("a", sum, Type::Int)]).is_value());
    assert!(!Expr::reference(Expr::int(1)).is_value());
}

#[test]
fn float_nan_payload_becomes_marker() {
    let e = Expr::float(f64::NAN);
    assert!(e.is_nan());
    assert_eq!(e.as_nan(), NumKind::Float);
}

#[test]
fn accessors() {
    assert_eq!(Expr::int(7).as_int(), 7);
    assert_eq!(Expr::float(0.25).as_float(), 0.25);
    assert!(Expr::bool(true).as_bool());
    assert_eq!(Expr::var("v").as_var(), "v");
    assert_eq!(Expr::ptr(3, Type::Unit).as_ptr(), 3);

    let pair = Expr::pair(Expr::int(1), Expr::bool(false));
    let (first, second) = pair.as_pair();
    assert_eq!(first.as_int(), 1);
    assert!(!second.as_bool());

    let list = Expr::list(vec![Expr::int(5)], Type::Int);
    let (items, elem) = list.as_list();
    assert_eq!(items.len(), 1);
    assert_eq!(elem, &Type::Int);

    let record = Expr::structure([("k", Expr::unit(), Type::Unit)]);
    assert!(record.as_struct()["k"].is_unit());
}

#[test]
#[should_panic(expected = "expected an integer literal, found `true`")]
fn accessor_on_wrong_kind_panics() {
    Expr::bool(true).as_int();
}

#[test]
fn value_types() {
    assert_eq!(Expr::int(1).value_type(), Type::Int);
    assert_eq!(Expr::nan(NumKind::Int).value_type(), Type::Int);
    assert_eq!(Expr::nan(NumKind::Float).value_type(), Type::Float);
    assert_eq!(
        Expr::ptr(0, Type::list(Type::Bool)).value_type(),
        Type::reference(Type::list(Type::Bool))
    );
    assert_eq!(
        Expr::pair(Expr::float(1.0), Expr::empty_list(Type::Unit)).value_type(),
        Type::pair(Type::Float, Type::list(Type::Unit))
    );
    assert_eq!(
        Expr::structure([("x", Expr::int(0), Type::Int)]).value_type(),
        Type::structure([("x", Type::Int)])
    );
}

#[test]
#[should_panic(expected = "is not a value")]
fn value_type_of_redex_panics() {
    Expr::var("x").value_type();
}

#[test]
fn operators_from_tokens() {
    assert_eq!(ArithOp::try_from(TokenKind::Percent), Ok(ArithOp::Rem));
    assert_eq!(CmpOp::try_from(TokenKind::GtEq), Ok(CmpOp::Ge));
    assert_eq!(
        ArithOp::try_from(TokenKind::EqEq),
        Err(WrongOperator(TokenKind::EqEq))
    );

    let e = Expr::binary(TokenKind::LtEq, Expr::int(1), Expr::int(2));
    assert!(matches!(*e, Expr::Compare { op: CmpOp::Le, .. }));
    let e = Expr::binary(TokenKind::Slash, Expr::int(1), Expr::int(2));
    assert!(matches!(*e, Expr::Arith { op: ArithOp::Div, .. }));
}

#[test]
fn nan_kind_join() {
    assert_eq!(NumKind::Int.join(NumKind::Int), NumKind::Int);
    assert_eq!(NumKind::Int.join(NumKind::Float), NumKind::Float);
    assert_eq!(NumKind::Float.join(NumKind::Int), NumKind::Float);
}
