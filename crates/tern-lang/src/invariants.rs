//! Invariant checks excluded from coverage reports.
//!
//! Each of these fires only when a caller broke a documented precondition
//! (ran an accessor on the wrong node kind, converted an ill-typed tree).

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::ast::Expr;

#[track_caller]
pub(crate) fn wrong_kind(expected: &str, expr: &Expr) -> ! {
    panic!("expected {expected}, found `{expr}`")
}

#[track_caller]
pub(crate) fn not_a_value(expr: &Expr) -> ! {
    panic!("`{expr}` is not a value")
}

#[track_caller]
pub(crate) fn bad_signature(name: &str, arity: usize) -> ! {
    panic!("definition of `{name}` does not declare {arity} parameter types (type-check first)")
}

#[track_caller]
pub(crate) fn undeclared_field(field: &str, expr: &Expr) -> ! {
    panic!("struct literal `{expr}` has no declared type for field `{field}` (type-check first)")
}
