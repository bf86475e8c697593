//! Structural type checker.
//!
//! Synthesizes a type bottom-up and compares annotations by equality. There
//! is no inference and no subtyping; `Int` and `Float` only mix at runtime.
//! The first error found is returned.

use std::collections::HashSet;
use std::rc::Rc;

use tern_core::Type;

use super::context::{Binding, Context, Signature};
use super::error::{Expected, TypeError};
use crate::ast::Expr;

/// Type of a closed expression.
pub fn typecheck(expr: &Expr) -> Result<Type, TypeError> {
    expr.typecheck(&Context::new())
}

fn mismatch(expr: &Expr, expected: impl Into<Expected>, actual: Type) -> TypeError {
    TypeError::Mismatch {
        expr: expr.to_string(),
        expected: expected.into(),
        actual,
    }
}

fn expect(expr: &Expr, expected: &Type, actual: Type) -> Result<(), TypeError> {
    if &actual == expected {
        Ok(())
    } else {
        Err(mismatch(expr, expected.clone(), actual))
    }
}

impl Expr {
    /// Type of this expression under `ctx`.
    pub fn typecheck(&self, ctx: &Context) -> Result<Type, TypeError> {
        match self {
            Expr::Int(_) => Ok(Type::Int),
            Expr::Float(_) => Ok(Type::Float),
            Expr::NaN(_) => Ok(self.value_type()),
            Expr::Bool(_) => Ok(Type::Bool),
            Expr::Unit => Ok(Type::Unit),
            Expr::Var(name) => match ctx.lookup(name) {
                Some(Binding::Var(ty)) => Ok(ty.clone()),
                Some(Binding::Function(_)) => Err(TypeError::FunctionAsValue { name: name.clone() }),
                None => Err(TypeError::UnboundVariable { name: name.clone() }),
            },
            Expr::If {
                cond,
                then_branch,
                else_branch,
            } => {
                expect(cond, &Type::Bool, cond.typecheck(ctx)?)?;
                let ty = then_branch.typecheck(ctx)?;
                expect(else_branch, &ty, else_branch.typecheck(ctx)?)?;
                Ok(ty)
            }
            Expr::Let {
                name,
                ty,
                value,
                body,
            } => {
                expect(value, ty, value.typecheck(ctx)?)?;
                body.typecheck(&ctx.with_var(name.clone(), ty.clone()))
            }
            Expr::App { func, args, target } => {
                let signature = match target {
                    Some(def) => Signature::of(def).ok_or_else(|| TypeError::BadSignature {
                        name: def.name.clone(),
                        ty: def.ty.clone(),
                        arity: def.params.len(),
                    })?,
                    None => match ctx.lookup(func) {
                        Some(Binding::Function(signature)) => signature.clone(),
                        Some(Binding::Var(ty)) => {
                            return Err(TypeError::NotAFunction {
                                name: func.clone(),
                                actual: ty.clone(),
                            });
                        }
                        None => return Err(TypeError::UndeclaredFunction { name: func.clone() }),
                    },
                };
                if signature.params.len() != args.len() {
                    return Err(TypeError::ArityMismatch {
                        expr: self.to_string(),
                        expected: signature.params.len(),
                        actual: args.len(),
                    });
                }
                for (arg, param) in args.iter().zip(&signature.params) {
                    expect(arg, param, arg.typecheck(ctx)?)?;
                }
                Ok(signature.result)
            }
            Expr::Arith { lhs, rhs, .. } => {
                let ty = lhs.typecheck(ctx)?;
                if !ty.is_numeric() {
                    return Err(mismatch(lhs, Expected::Numeric, ty));
                }
                expect(rhs, &ty, rhs.typecheck(ctx)?)?;
                Ok(ty)
            }
            Expr::Compare { lhs, rhs, .. } => {
                let ty = lhs.typecheck(ctx)?;
                if !ty.is_numeric() {
                    return Err(mismatch(lhs, Expected::Numeric, ty));
                }
                expect(rhs, &ty, rhs.typecheck(ctx)?)?;
                Ok(Type::Bool)
            }
            Expr::Pair(first, second) => Ok(Type::pair(
                first.typecheck(ctx)?,
                second.typecheck(ctx)?,
            )),
            Expr::Fst(e) => match e.typecheck(ctx)? {
                Type::Pair(first, _) => Ok(*first),
                other => Err(mismatch(e, Expected::Pair, other)),
            },
            Expr::Snd(e) => match e.typecheck(ctx)? {
                Type::Pair(_, second) => Ok(*second),
                other => Err(mismatch(e, Expected::Pair, other)),
            },
            Expr::List { items, elem } => {
                for item in items {
                    expect(item, elem, item.typecheck(ctx)?)?;
                }
                Ok(Type::list(elem.clone()))
            }
            Expr::Cons { head, tail } => {
                let head_ty = head.typecheck(ctx)?;
                match tail.typecheck(ctx)? {
                    Type::List(elem) => {
                        expect(head, &elem, head_ty)?;
                        Ok(Type::List(elem))
                    }
                    other => Err(mismatch(tail, Expected::List, other)),
                }
            }
            Expr::Car(e) => match e.typecheck(ctx)? {
                Type::List(elem) => Ok(*elem),
                other => Err(mismatch(e, Expected::List, other)),
            },
            Expr::Cdr(e) => match e.typecheck(ctx)? {
                ty @ Type::List(_) => Ok(ty),
                other => Err(mismatch(e, Expected::List, other)),
            },
            Expr::IsEmpty(e) => match e.typecheck(ctx)? {
                Type::List(_) => Ok(Type::Bool),
                other => Err(mismatch(e, Expected::List, other)),
            },
            Expr::Ref(e) => Ok(Type::reference(e.typecheck(ctx)?)),
            Expr::Ptr { pointee, .. } => Ok(Type::reference(pointee.clone())),
            Expr::Deref(e) => match e.typecheck(ctx)? {
                Type::Ref(pointee) => Ok(*pointee),
                other => Err(mismatch(e, Expected::Ref, other)),
            },
            Expr::Assign { target, value } => {
                let pointee = match target.typecheck(ctx)? {
                    Type::Ref(pointee) => *pointee,
                    other => return Err(mismatch(target, Expected::Ref, other)),
                };
                expect(value, &pointee, value.typecheck(ctx)?)?;
                Ok(Type::Unit)
            }
            Expr::Seq(first, second) => {
                first.typecheck(ctx)?;
                second.typecheck(ctx)
            }
            Expr::While {
                cond,
                body,
                template,
            } => {
                expect(cond, &Type::Bool, cond.typecheck(ctx)?)?;
                body.typecheck(ctx)?;
                if !Rc::ptr_eq(body, template) {
                    template.typecheck(ctx)?;
                }
                Ok(Type::Unit)
            }
            Expr::Def { def, scope } => {
                let mut seen = HashSet::new();
                if let Some(param) = def.params.iter().find(|p| !seen.insert(p.as_str())) {
                    return Err(TypeError::DuplicateParameter {
                        name: def.name.clone(),
                        param: param.clone(),
                    });
                }
                let signature = Signature::of(def).ok_or_else(|| TypeError::BadSignature {
                    name: def.name.clone(),
                    ty: def.ty.clone(),
                    arity: def.params.len(),
                })?;

                let outer = ctx.with_function(def.name.clone(), signature.clone());
                let inner = def
                    .params
                    .iter()
                    .zip(&signature.params)
                    .fold(outer.clone(), |acc, (name, ty)| {
                        acc.with_var(name.clone(), ty.clone())
                    });
                expect(&def.body, &signature.result, def.body.typecheck(&inner)?)?;
                scope.typecheck(&outer)
            }
            Expr::Struct { fields, types } => {
                if let Some(name) = types.keys().find(|name| !fields.contains_key(*name)) {
                    return Err(TypeError::MissingField {
                        expr: self.to_string(),
                        field: name.clone(),
                    });
                }
                for (name, value) in fields {
                    let Some(ty) = types.get(name) else {
                        return Err(TypeError::UnexpectedField {
                            expr: self.to_string(),
                            field: name.clone(),
                        });
                    };
                    expect(value, ty, value.typecheck(ctx)?)?;
                }
                Ok(Type::Struct(types.clone()))
            }
            Expr::Field { record, name } => match record.typecheck(ctx)? {
                Type::Struct(fields) => match fields.get(name) {
                    Some(ty) => Ok(ty.clone()),
                    None => Err(TypeError::UnknownField {
                        expr: self.to_string(),
                        field: name.clone(),
                        ty: Type::Struct(fields),
                    }),
                },
                other => Err(mismatch(record, Expected::Struct, other)),
            },
        }
    }
}
