use tern_core::{TokenKind, Type};

use crate::ast::{ArithOp, CmpOp, Expr, NumKind};

#[test]
fn literals() {
    assert_eq!(Expr::int(-3).to_string(), "-3");
    assert_eq!(Expr::float(1.0).to_string(), "1.0");
    assert_eq!(Expr::float(2.5).to_string(), "2.5");
    assert_eq!(Expr::nan(NumKind::Int).to_string(), "NaN");
    assert_eq!(Expr::bool(false).to_string(), "false");
    assert_eq!(Expr::unit().to_string(), "()");
    assert_eq!(Expr::ptr(4, Type::Int).to_string(), "<ptr 4>");
}

#[test]
fn operators_are_parenthesized() {
    let e = Expr::binary(
        TokenKind::Star,
        Expr::arith(ArithOp::Add, Expr::int(1), Expr::int(2)),
        Expr::var("x"),
    );
    assert_eq!(e.to_string(), "((1 + 2) * x)");

    let e = Expr::compare(CmpOp::Ne, Expr::var("a"), Expr::float(0.5));
    assert_eq!(e.to_string(), "(a != 0.5)");
}

#[test]
fn open_forms_as_operands() {
    let e = Expr::arith(
        ArithOp::Sub,
        Expr::cond(Expr::bool(true), Expr::int(1), Expr::int(2)),
        Expr::int(3),
    );
    assert_eq!(e.to_string(), "((if true then 1 else 2) - 3)");

    let e = Expr::deref(Expr::reference(Expr::int(7)));
    assert_eq!(e.to_string(), "!(ref 7)");
}

#[test]
fn binding_forms() {
    let e = Expr::let_in(
        "x",
        Type::Int,
        Expr::int(3),
        Expr::arith(ArithOp::Add, Expr::var("x"), Expr::int(4)),
    );
    insta::assert_snapshot!(e, @"let x: Int = 3 in (x + 4)");

    let e = Expr::def(
        "add",
        ["a", "b"],
        Type::curried([Type::Int, Type::Int], Type::Int),
        Expr::arith(ArithOp::Add, Expr::var("a"), Expr::var("b")),
        Expr::app("add", vec![Expr::int(1), Expr::int(2)]),
    );
    insta::assert_snapshot!(e, @"def add(a, b): Function(Int, Function(Int, Int)) = (a + b) in add(1, 2)");
}

#[test]
fn structures() {
    let e = Expr::cons(
        Expr::pair(Expr::int(1), Expr::bool(true)),
        Expr::empty_list(Type::pair(Type::Int, Type::Bool)),
    );
    assert_eq!(e.to_string(), "cons((1, true), [])");

    let e = Expr::field(
        Expr::structure([("a", Expr::int(1), Type::Int), ("b", Expr::unit(), Type::Unit)]),
        "b",
    );
    assert_eq!(e.to_string(), "{a = 1, b = ()}.b");

    let e = Expr::list(vec![Expr::int(1), Expr::int(2)], Type::Int);
    assert_eq!(Expr::car(Expr::cdr(e)).to_string(), "car(cdr([1, 2]))");
}

#[test]
fn imperative_forms() {
    let p = Expr::var("p");
    let body = Expr::assign(
        p.clone(),
        Expr::arith(ArithOp::Add, Expr::deref(p.clone()), Expr::int(1)),
    );
    let e = Expr::seq(
        Expr::while_loop(Expr::compare(CmpOp::Lt, Expr::deref(p.clone()), Expr::int(3)), body),
        Expr::deref(p),
    );
    insta::assert_snapshot!(e, @"(while (!p < 3) do p := (!p + 1); !p)");
}
