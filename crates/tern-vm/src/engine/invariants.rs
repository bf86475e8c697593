//! Invariant checks excluded from coverage reports.
//!
//! Evaluation assumes a type-checked input. These fire when that assumption
//! does not hold or when the engine itself is wrong.

#![cfg_attr(coverage_nightly, coverage(off))]

use tern_lang::Expr;

#[track_caller]
pub(super) fn stuck(expr: &Expr) -> ! {
    panic!("no reduction applies to `{expr}`")
}

#[track_caller]
pub(super) fn unbound_call(func: &str) -> ! {
    panic!("call to `{func}` reached evaluation without a bound definition")
}

#[track_caller]
pub(super) fn arity_mismatch(func: &str, expected: usize, actual: usize) -> ! {
    panic!("`{func}` takes {expected} arguments, called with {actual}")
}

#[track_caller]
pub(super) fn non_numeric(lhs: &Expr, rhs: &Expr) -> ! {
    panic!("numeric operator applied to `{lhs}` and `{rhs}`")
}

#[track_caller]
pub(super) fn dangling(addr: usize, len: usize) -> ! {
    panic!("address {addr} is outside the store ({len} cells)")
}

#[track_caller]
pub(super) fn missing_field(name: &str, record: &Expr) -> ! {
    panic!("`{record}` has no field `{name}`")
}
