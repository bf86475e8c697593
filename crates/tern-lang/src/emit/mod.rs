//! Conversion to Tern IR.
//!
//! One node in, one node out, with a few exceptions for terms caught
//! mid-evaluation: a loop whose live body has drifted from its template is
//! expanded to the conditional it would step to, and a call already bound to
//! its definition is wrapped in that definition. Definitions split their
//! curried type into typed parameters. Record fields keep literal order, the
//! order they are evaluated in.
//! Input must have type-checked; violations panic.

#[cfg(test)]
mod emit_tests;

use std::rc::Rc;

use tern_core::Type;
use tern_ir::{BinOp, Module, Node, Param, RecordField, Ty};

use crate::analyze::Signature;
use crate::ast::{ArithOp, CmpOp, Expr, FnDef, NumKind};
use crate::invariants;

/// Convert a type-checked expression into a self-contained IR module.
pub fn emit(expr: &Expr) -> Module {
    Module::new(convert(expr))
}

pub fn convert(expr: &Expr) -> Node {
    expr.convert()
}

pub fn convert_type(ty: &Type) -> Ty {
    match ty {
        Type::Int => Ty::Int,
        Type::Float => Ty::Float,
        Type::Bool => Ty::Bool,
        Type::Unit => Ty::Unit,
        Type::Function(a, b) => Ty::Func(Box::new(convert_type(a)), Box::new(convert_type(b))),
        Type::Pair(a, b) => Ty::Pair(Box::new(convert_type(a)), Box::new(convert_type(b))),
        Type::List(t) => Ty::List(Box::new(convert_type(t))),
        Type::Ref(t) => Ty::Ref(Box::new(convert_type(t))),
        Type::Struct(fields) => Ty::Record(
            fields
                .iter()
                .map(|(name, ty)| (name.clone(), convert_type(ty)))
                .collect(),
        ),
    }
}

fn bin_op(op: ArithOp) -> BinOp {
    match op {
        ArithOp::Add => BinOp::Add,
        ArithOp::Sub => BinOp::Sub,
        ArithOp::Mul => BinOp::Mul,
        ArithOp::Div => BinOp::Div,
        ArithOp::Rem => BinOp::Rem,
    }
}

fn cmp_op(op: CmpOp) -> tern_ir::CmpOp {
    match op {
        CmpOp::Lt => tern_ir::CmpOp::Lt,
        CmpOp::Le => tern_ir::CmpOp::Le,
        CmpOp::Gt => tern_ir::CmpOp::Gt,
        CmpOp::Ge => tern_ir::CmpOp::Ge,
        CmpOp::Eq => tern_ir::CmpOp::Eq,
        CmpOp::Ne => tern_ir::CmpOp::Ne,
    }
}

fn num_kind(kind: NumKind) -> tern_ir::NumKind {
    match kind {
        NumKind::Int => tern_ir::NumKind::Int,
        NumKind::Float => tern_ir::NumKind::Float,
    }
}

fn boxed(expr: &Expr) -> Box<Node> {
    Box::new(expr.convert())
}

/// `def` as an IR function whose scope is `scope`.
fn convert_def(def: &FnDef, scope: Node) -> Node {
    let signature =
        Signature::of(def).unwrap_or_else(|| invariants::bad_signature(&def.name, def.params.len()));
    let params = def
        .params
        .iter()
        .zip(&signature.params)
        .map(|(name, ty)| Param {
            name: name.clone(),
            ty: convert_type(ty),
        })
        .collect();
    Node::Func {
        name: def.name.clone(),
        params,
        ret: convert_type(&signature.result),
        body: boxed(&def.body),
        scope: Box::new(scope),
    }
}

impl Expr {
    pub fn convert(&self) -> Node {
        match self {
            Expr::Int(v) => Node::Int(*v),
            Expr::Float(v) => Node::Float(*v),
            Expr::NaN(kind) => Node::NaN(num_kind(*kind)),
            Expr::Bool(b) => Node::Bool(*b),
            Expr::Unit => Node::Unit,
            Expr::Var(name) => Node::Var(name.clone()),
            Expr::If {
                cond,
                then_branch,
                else_branch,
            } => Node::If {
                cond: boxed(cond),
                then_branch: boxed(then_branch),
                else_branch: boxed(else_branch),
            },
            Expr::Let {
                name,
                ty,
                value,
                body,
            } => Node::Let {
                name: name.clone(),
                ty: convert_type(ty),
                value: boxed(value),
                body: boxed(body),
            },
            Expr::App { func, args, target } => {
                let call = Node::Call {
                    func: func.clone(),
                    args: args.iter().map(|arg| arg.convert()).collect(),
                };
                // A bound call has left its `def` behind; carry it along.
                match target {
                    Some(def) => convert_def(def, call),
                    None => call,
                }
            }
            Expr::Arith { op, lhs, rhs } => Node::Binary {
                op: bin_op(*op),
                lhs: boxed(lhs),
                rhs: boxed(rhs),
            },
            Expr::Compare { op, lhs, rhs } => Node::Compare {
                op: cmp_op(*op),
                lhs: boxed(lhs),
                rhs: boxed(rhs),
            },
            Expr::Pair(first, second) => Node::Pair {
                first: boxed(first),
                second: boxed(second),
            },
            Expr::Fst(e) => Node::First(boxed(e)),
            Expr::Snd(e) => Node::Second(boxed(e)),
            Expr::List { items, elem } => Node::List {
                elem: convert_type(elem),
                items: items.iter().map(|item| item.convert()).collect(),
            },
            Expr::Cons { head, tail } => Node::Cons {
                head: boxed(head),
                tail: boxed(tail),
            },
            Expr::Car(e) => Node::Head(boxed(e)),
            Expr::Cdr(e) => Node::Tail(boxed(e)),
            Expr::IsEmpty(e) => Node::IsEmpty(boxed(e)),
            Expr::Ref(e) => Node::Alloc(boxed(e)),
            Expr::Ptr { addr, pointee } => Node::Addr {
                addr: *addr as u64,
                pointee: convert_type(pointee),
            },
            Expr::Deref(e) => Node::Load(boxed(e)),
            Expr::Assign { target, value } => Node::Store {
                target: boxed(target),
                value: boxed(value),
            },
            Expr::Seq(first, second) => Node::Seq {
                first: boxed(first),
                second: boxed(second),
            },
            Expr::While {
                cond,
                body,
                template,
            } => {
                let fresh = Node::While {
                    cond: boxed(cond),
                    body: boxed(template),
                };
                if Rc::ptr_eq(body, template) || body == template {
                    fresh
                } else {
                    Node::If {
                        cond: boxed(cond),
                        then_branch: Box::new(Node::Seq {
                            first: boxed(body),
                            second: Box::new(fresh),
                        }),
                        else_branch: Box::new(Node::Unit),
                    }
                }
            }
            Expr::Def { def, scope } => convert_def(def, scope.convert()),
            Expr::Struct { fields, types } => Node::Record {
                fields: fields
                    .iter()
                    .map(|(name, value)| {
                        let ty = types
                            .get(name)
                            .unwrap_or_else(|| invariants::undeclared_field(name, self));
                        RecordField {
                            name: name.clone(),
                            ty: convert_type(ty),
                            value: value.convert(),
                        }
                    })
                    .collect(),
            },
            Expr::Field { record, name } => Node::GetField {
                record: boxed(record),
                field: name.clone(),
            },
        }
    }
}
