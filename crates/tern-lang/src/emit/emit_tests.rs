use std::rc::Rc;

use tern_core::{StructFields, Type};
use tern_ir::{Node, Ty, dump};

use super::{convert, convert_type, emit};
use crate::ast::{ArithOp, CmpOp, Expr, NumKind, StructValues};

fn add(lhs: Rc<Expr>, rhs: Rc<Expr>) -> Rc<Expr> {
    Expr::arith(ArithOp::Add, lhs, rhs)
}

#[test]
fn types() {
    let ty = Type::function(
        Type::pair(Type::Int, Type::Bool),
        Type::reference(Type::list(Type::Unit)),
    );
    insta::assert_snapshot!(format!("{:?}", convert_type(&ty)), @"Func(Pair(Int, Bool), Ref(List(Unit)))");

    let ty = Type::structure([("b", Type::Float), ("a", Type::Int)]);
    assert_eq!(
        convert_type(&ty),
        Ty::Record(vec![("b".into(), Ty::Float), ("a".into(), Ty::Int)])
    );
}

#[test]
fn let_and_arithmetic() {
    let e = Expr::let_in("x", Type::Int, Expr::int(3), add(Expr::var("x"), Expr::int(4)));
    insta::assert_snapshot!(dump(&convert(&e)), @"(let x int (int 3) (add (var x) (int 4)))");
}

#[test]
fn leaves() {
    assert_eq!(convert(&Expr::nan(NumKind::Int)), Node::NaN(tern_ir::NumKind::Int));
    assert_eq!(convert(&Expr::unit()), Node::Unit);
    assert_eq!(dump(&convert(&Expr::ptr(1, Type::Bool))), "(addr 1 bool)");
}

#[test]
fn definition_gets_typed_parameters() {
    let e = Expr::def(
        "inc",
        ["x"],
        Type::function(Type::Int, Type::Int),
        add(Expr::var("x"), Expr::int(1)),
        Expr::app("inc", vec![Expr::int(41)]),
    );
    insta::assert_snapshot!(dump(&convert(&e)), @r"
    (func inc
      ((x int))
      int
      (add (var x) (int 1))
      (call inc (int 41)))
    ");
}

#[test]
fn references_and_lists() {
    let e = Expr::seq(
        Expr::assign(Expr::reference(Expr::int(0)), Expr::int(1)),
        Expr::car(Expr::cons(Expr::int(1), Expr::empty_list(Type::Int))),
    );
    insta::assert_snapshot!(dump(&convert(&e)), @r"
    (seq
      (store (alloc (int 0)) (int 1))
      (head (cons (int 1) (list int))))
    ");
}

#[test]
fn fresh_loop_converts_directly() {
    let e = Expr::while_loop(Expr::bool(false), Expr::unit());
    assert_eq!(dump(&convert(&e)), "(while (bool false) unit)");
}

#[test]
fn drifted_loop_expands_one_iteration() {
    let template = Expr::assign(Expr::var("p"), Expr::int(1));
    let drifted = Rc::new(Expr::While {
        cond: Expr::compare(CmpOp::Lt, Expr::int(0), Expr::int(1)),
        body: Expr::assign(Expr::ptr(0, Type::Int), Expr::int(1)),
        template,
    });
    insta::assert_snapshot!(dump(&convert(&drifted)), @r"
    (if
      (lt (int 0) (int 1))
      (seq
        (store (addr 0 int) (int 1))
        (while (lt (int 0) (int 1)) (store (var p) (int 1))))
      unit)
    ");
}

#[test]
fn struct_fields_follow_declared_order() {
    let e = Expr::field(
        Expr::structure([("a", Expr::int(1), Type::Int), ("b", Expr::bool(true), Type::Bool)]),
        "b",
    );
    insta::assert_snapshot!(dump(&convert(&e)), @"(get (record (a int (int 1)) (b bool (bool true))) b)");
}

#[test]
fn bound_call_carries_its_definition() {
    let e = Expr::def(
        "inc",
        ["x"],
        Type::function(Type::Int, Type::Int),
        add(Expr::var("x"), Expr::int(1)),
        Expr::app("inc", vec![Expr::int(2)]),
    );
    let Expr::Def { def, scope } = &*e else {
        unreachable!()
    };
    // What a `def` reduces to: its scope with the call bound.
    let bound = scope.bind_function(def);
    assert_eq!(crate::typecheck(&bound), Ok(Type::Int));

    insta::assert_snapshot!(dump(&convert(&bound)), @r"
    (func inc
      ((x int))
      int
      (add (var x) (int 1))
      (call inc (int 2)))
    ");
}

#[test]
fn struct_fields_follow_literal_order() {
    // `{a = .., b = ..}` annotated as `Struct{b: Bool, a: Int}`
    let mut fields = StructValues::new();
    fields.insert("a".into(), Expr::int(1));
    fields.insert("b".into(), Expr::bool(true));
    let mut types = StructFields::new();
    types.insert("b".into(), Type::Bool);
    types.insert("a".into(), Type::Int);
    let e = Expr::Struct { fields, types };
    assert_eq!(crate::typecheck(&e), Ok(Type::structure([("a", Type::Int), ("b", Type::Bool)])));

    insta::assert_snapshot!(dump(&convert(&e)), @"(record (a int (int 1)) (b bool (bool true)))");
}

#[test]
fn emit_wraps_module() {
    let module = emit(&Expr::int(7));
    assert_eq!(module.root(), &Node::Int(7));
}
