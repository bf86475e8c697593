use std::rc::Rc;

use tern_core::Type;
use tern_lang::{ArithOp, CmpOp, Expr};

use super::error::RuntimeError;
use super::vm::Machine;

fn add(lhs: Rc<Expr>, rhs: Rc<Expr>) -> Rc<Expr> {
    Expr::arith(ArithOp::Add, lhs, rhs)
}

/// Render each intermediate expression until a value remains.
fn steps(expr: Rc<Expr>) -> Vec<String> {
    let mut machine = Machine::new();
    let mut current = expr;
    let mut out = vec![current.to_string()];
    while !current.is_value() {
        current = machine.step(&current).unwrap();
        out.push(current.to_string());
    }
    out
}

#[test]
fn operands_reduce_left_to_right() {
    let e = add(
        add(Expr::int(1), Expr::int(2)),
        add(Expr::int(3), Expr::int(4)),
    );
    assert_eq!(
        steps(e),
        ["((1 + 2) + (3 + 4))", "(3 + (3 + 4))", "(3 + 7)", "10"]
    );
}

#[test]
fn conditional_reduces_guard_first() {
    let e = Expr::cond(
        Expr::compare(CmpOp::Gt, Expr::int(2), Expr::int(1)),
        Expr::int(10),
        Expr::int(20),
    );
    assert_eq!(
        steps(e),
        ["if (2 > 1) then 10 else 20", "if true then 10 else 20", "10"]
    );
}

#[test]
fn let_substitutes_value() {
    let e = Expr::let_in(
        "x",
        Type::Int,
        add(Expr::int(1), Expr::int(2)),
        add(Expr::var("x"), Expr::var("x")),
    );
    assert_eq!(
        steps(e),
        [
            "let x: Int = (1 + 2) in (x + x)",
            "let x: Int = 3 in (x + x)",
            "(3 + 3)",
            "6",
        ]
    );
}

#[test]
fn call_evaluates_arguments_then_body() {
    let e = Expr::def(
        "sub",
        ["a", "b"],
        Type::curried([Type::Int, Type::Int], Type::Int),
        Expr::arith(ArithOp::Sub, Expr::var("a"), Expr::var("b")),
        Expr::app("sub", vec![add(Expr::int(5), Expr::int(5)), Expr::int(3)]),
    );
    insta::assert_snapshot!(steps(e).join("\n"), @r"
    def sub(a, b): Function(Int, Function(Int, Int)) = (a - b) in sub((5 + 5), 3)
    sub((5 + 5), 3)
    sub(10, 3)
    (10 - 3)
    7
    ");
}

#[test]
fn pairs_and_projections() {
    let e = Expr::snd(Expr::pair(add(Expr::int(1), Expr::int(1)), Expr::bool(false)));
    assert_eq!(
        steps(e),
        ["snd(((1 + 1), false))", "snd((2, false))", "false"]
    );
}

#[test]
fn list_operations() {
    let xs = Expr::cons(Expr::int(1), Expr::list(vec![Expr::int(2)], Type::Int));
    assert_eq!(steps(Expr::cdr(xs.clone())), ["cdr(cons(1, [2]))", "cdr([1, 2])", "[2]"]);
    assert_eq!(steps(Expr::car(xs.clone())), ["car(cons(1, [2]))", "car([1, 2])", "1"]);
    assert_eq!(
        steps(Expr::is_empty(Expr::empty_list(Type::Int))),
        ["empty?([])", "true"]
    );
    assert_eq!(
        steps(Expr::list(vec![Expr::int(0), add(Expr::int(1), Expr::int(1))], Type::Int)),
        ["[0, (1 + 1)]", "[0, 2]"]
    );
}

#[test]
fn empty_list_access_is_runtime_error() {
    let mut machine = Machine::new();
    let err = machine
        .step(&Expr::car(Expr::empty_list(Type::Int)))
        .unwrap_err();
    assert_eq!(err, RuntimeError::EmptyList { op: "car" });

    let err = machine
        .step(&Expr::cdr(Expr::empty_list(Type::Bool)))
        .unwrap_err();
    assert_eq!(err.to_string(), "cdr of an empty list");
}

#[test]
fn reference_cells() {
    let mut machine = Machine::new();
    let ptr = machine.step(&Expr::reference(Expr::int(4))).unwrap();
    assert_eq!(*ptr, Expr::Ptr { addr: 0, pointee: Type::Int });
    assert_eq!(machine.store().len(), 1);

    let unit = machine.step(&Expr::assign(ptr.clone(), Expr::int(9))).unwrap();
    assert!(unit.is_unit());
    assert_eq!(machine.step(&Expr::deref(ptr)).unwrap().as_int(), 9);
    assert_eq!(machine.store().len(), 1);
}

#[test]
fn while_unrolls_into_conditional() {
    let e = Expr::while_loop(Expr::var("go"), Expr::var("work"));
    let mut machine = Machine::new();
    let next = machine.step(&e).unwrap();
    assert_eq!(
        next.to_string(),
        "if go then (work; while go do work) else ()"
    );
}

#[test]
fn while_restarts_from_template() {
    let drifted = Rc::new(Expr::While {
        cond: Expr::var("go"),
        body: Expr::var("drifted"),
        template: Expr::var("fresh"),
    });
    let mut machine = Machine::new();
    let next = machine.step(&drifted).unwrap();
    assert_eq!(
        next.to_string(),
        "if go then (drifted; while go do fresh) else ()"
    );
}

#[test]
fn struct_fields_reduce_in_order() {
    let e = Expr::field(
        Expr::structure([
            ("a", add(Expr::int(1), Expr::int(1)), Type::Int),
            ("b", add(Expr::int(2), Expr::int(2)), Type::Int),
        ]),
        "b",
    );
    assert_eq!(
        steps(e),
        [
            "{a = (1 + 1), b = (2 + 2)}.b",
            "{a = 2, b = (2 + 2)}.b",
            "{a = 2, b = 4}.b",
            "4",
        ]
    );
}

#[test]
#[should_panic(expected = "no reduction applies to `x`")]
fn free_variable_is_stuck() {
    let _ = Machine::new().step(&Expr::Var("x".into()));
}

#[test]
#[should_panic(expected = "no reduction applies to `3`")]
fn value_is_stuck() {
    let _ = Machine::new().step(&Expr::Int(3));
}

#[test]
#[should_panic(expected = "without a bound definition")]
fn unbound_call_panics() {
    let _ = Machine::new().step(&Expr::app("f", vec![]));
}
