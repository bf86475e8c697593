//! Runtime arithmetic and comparison on numeric values.
//!
//! - NaN in, NaN out. The result is float-kinded if either side is.
//! - `Int` mixed with `Float` computes in floating point.
//! - Division or remainder by zero (`0` or `0.0`) yields NaN.
//! - Integer arithmetic wraps on overflow.
//! - Comparisons always produce a boolean; with a NaN operand only `!=`
//!   holds.

use std::cmp::Ordering;
use std::rc::Rc;

use tern_lang::{ArithOp, CmpOp, Expr, NumKind};

use super::invariants;

fn kind_of(lhs: &Expr, rhs: &Expr, operand: &Expr) -> NumKind {
    match operand {
        Expr::Int(_) => NumKind::Int,
        Expr::Float(_) => NumKind::Float,
        Expr::NaN(kind) => *kind,
        _ => invariants::non_numeric(lhs, rhs),
    }
}

pub(super) fn arith(op: ArithOp, lhs: &Expr, rhs: &Expr) -> Rc<Expr> {
    match (lhs, rhs) {
        (Expr::NaN(kind), other) | (other, Expr::NaN(kind)) => {
            Expr::nan(kind.join(kind_of(lhs, rhs, other)))
        }
        (Expr::Int(a), Expr::Int(b)) => int_arith(op, *a, *b),
        (Expr::Int(a), Expr::Float(b)) => float_arith(op, *a as f64, *b),
        (Expr::Float(a), Expr::Int(b)) => float_arith(op, *a, *b as f64),
        (Expr::Float(a), Expr::Float(b)) => float_arith(op, *a, *b),
        _ => invariants::non_numeric(lhs, rhs),
    }
}

fn int_arith(op: ArithOp, a: i64, b: i64) -> Rc<Expr> {
    if op.is_division() && b == 0 {
        return Expr::nan(NumKind::Int);
    }
    Expr::int(match op {
        ArithOp::Add => a.wrapping_add(b),
        ArithOp::Sub => a.wrapping_sub(b),
        ArithOp::Mul => a.wrapping_mul(b),
        ArithOp::Div => a.wrapping_div(b),
        ArithOp::Rem => a.wrapping_rem(b),
    })
}

fn float_arith(op: ArithOp, a: f64, b: f64) -> Rc<Expr> {
    if op.is_division() && b == 0.0 {
        return Expr::nan(NumKind::Float);
    }
    // `Expr::float` folds a NaN result (e.g. `inf - inf`) into the marker.
    Expr::float(match op {
        ArithOp::Add => a + b,
        ArithOp::Sub => a - b,
        ArithOp::Mul => a * b,
        ArithOp::Div => a / b,
        ArithOp::Rem => a % b,
    })
}

fn ordering(lhs: &Expr, rhs: &Expr) -> Option<Ordering> {
    match (lhs, rhs) {
        (Expr::NaN(_), _) | (_, Expr::NaN(_)) => None,
        (Expr::Int(a), Expr::Int(b)) => Some(a.cmp(b)),
        (Expr::Int(a), Expr::Float(b)) => (*a as f64).partial_cmp(b),
        (Expr::Float(a), Expr::Int(b)) => a.partial_cmp(&(*b as f64)),
        (Expr::Float(a), Expr::Float(b)) => a.partial_cmp(b),
        _ => invariants::non_numeric(lhs, rhs),
    }
}

pub(super) fn compare(op: CmpOp, lhs: &Expr, rhs: &Expr) -> bool {
    let Some(ord) = ordering(lhs, rhs) else {
        return op == CmpOp::Ne;
    };
    match op {
        CmpOp::Lt => ord.is_lt(),
        CmpOp::Le => ord.is_le(),
        CmpOp::Gt => ord.is_gt(),
        CmpOp::Ge => ord.is_ge(),
        CmpOp::Eq => ord.is_eq(),
        CmpOp::Ne => ord.is_ne(),
    }
}
