//! Textual rendering of expressions, used by traces and error messages.
//!
//! Binary operators are always parenthesized. Open-ended forms (`if`, `let`,
//! `def`, `while`, assignment, `ref`) get parentheses only when they appear as
//! an operand, where they would otherwise swallow what follows.

use std::fmt;

use super::{Expr, NumKind};

impl fmt::Display for NumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumKind::Int => f.write_str("Int"),
            NumKind::Float => f.write_str("Float"),
        }
    }
}

struct Operand<'a>(&'a Expr);

impl fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Expr::If { .. }
            | Expr::Let { .. }
            | Expr::Def { .. }
            | Expr::While { .. }
            | Expr::Assign { .. }
            | Expr::Ref(_) => write!(f, "({})", self.0),
            other => fmt::Display::fmt(other, f),
        }
    }
}

fn comma_separated<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl IntoIterator<Item = T>,
) -> fmt::Result {
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        item.fmt(f)?;
    }
    Ok(())
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Int(v) => write!(f, "{v}"),
            Expr::Float(v) => write!(f, "{v:?}"),
            Expr::NaN(_) => f.write_str("NaN"),
            Expr::Bool(b) => write!(f, "{b}"),
            Expr::Var(name) => f.write_str(name),
            Expr::Unit => f.write_str("()"),
            Expr::If {
                cond,
                then_branch,
                else_branch,
            } => write!(f, "if {cond} then {then_branch} else {else_branch}"),
            Expr::Let {
                name,
                ty,
                value,
                body,
            } => write!(f, "let {name}: {ty} = {value} in {body}"),
            Expr::App { func, args, .. } => {
                write!(f, "{func}(")?;
                comma_separated(f, args)?;
                f.write_str(")")
            }
            Expr::Arith { op, lhs, rhs } => {
                write!(f, "({} {op} {})", Operand(lhs), Operand(rhs))
            }
            Expr::Compare { op, lhs, rhs } => {
                write!(f, "({} {op} {})", Operand(lhs), Operand(rhs))
            }
            Expr::Pair(first, second) => write!(f, "({first}, {second})"),
            Expr::Fst(e) => write!(f, "fst({e})"),
            Expr::Snd(e) => write!(f, "snd({e})"),
            Expr::List { items, .. } => {
                f.write_str("[")?;
                comma_separated(f, items)?;
                f.write_str("]")
            }
            Expr::Cons { head, tail } => write!(f, "cons({head}, {tail})"),
            Expr::Car(e) => write!(f, "car({e})"),
            Expr::Cdr(e) => write!(f, "cdr({e})"),
            Expr::IsEmpty(e) => write!(f, "empty?({e})"),
            Expr::Ref(e) => write!(f, "ref {}", Operand(e)),
            Expr::Ptr { addr, .. } => write!(f, "<ptr {addr}>"),
            Expr::Deref(e) => write!(f, "!{}", Operand(e)),
            Expr::Assign { target, value } => write!(f, "{} := {value}", Operand(target)),
            Expr::Seq(first, second) => write!(f, "({first}; {second})"),
            Expr::While { cond, body, .. } => write!(f, "while {cond} do {body}"),
            Expr::Def { def, scope } => {
                write!(f, "def {}(", def.name)?;
                comma_separated(f, &def.params)?;
                write!(f, "): {} = {} in {scope}", def.ty, def.body)
            }
            Expr::Struct { fields, .. } => {
                f.write_str("{")?;
                comma_separated(
                    f,
                    fields.iter().map(|(name, value)| format!("{name} = {value}")),
                )?;
                f.write_str("}")
            }
            Expr::Field { record, name } => write!(f, "{}.{name}", Operand(record)),
        }
    }
}
