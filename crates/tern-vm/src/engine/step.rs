//! Single-step reduction.
//!
//! Call-by-value, leftmost-innermost: the first operand that is not yet a
//! value is reduced in place; once every operand is a value the node itself
//! fires. Calling `step` on a value or a free variable is an invariant
//! violation.

use std::rc::Rc;

use tern_lang::Expr;

use super::error::RuntimeError;
use super::invariants;
use super::numeric;
use super::store::Store;
use super::trace::Tracer;

/// Reduce the first non-value in `items`. `None` when all are values.
fn step_first<T: Tracer>(
    items: &[Rc<Expr>],
    store: &mut Store,
    tracer: &mut T,
) -> Result<Option<Vec<Rc<Expr>>>, RuntimeError> {
    let Some(i) = items.iter().position(|item| !item.is_value()) else {
        return Ok(None);
    };
    let mut items = items.to_vec();
    items[i] = step(&items[i], store, tracer)?;
    Ok(Some(items))
}

pub(super) fn step<T: Tracer>(
    expr: &Expr,
    store: &mut Store,
    tracer: &mut T,
) -> Result<Rc<Expr>, RuntimeError> {
    let next = match expr {
        Expr::If {
            cond,
            then_branch,
            else_branch,
        } => {
            if !cond.is_value() {
                Expr::cond(
                    step(cond, store, tracer)?,
                    then_branch.clone(),
                    else_branch.clone(),
                )
            } else if cond.as_bool() {
                then_branch.clone()
            } else {
                else_branch.clone()
            }
        }
        Expr::Let {
            name,
            ty,
            value,
            body,
        } => {
            if !value.is_value() {
                Expr::let_in(name.clone(), ty.clone(), step(value, store, tracer)?, body.clone())
            } else {
                body.substitute(name, value)
            }
        }
        Expr::App { func, args, target } => match step_first(args, store, tracer)? {
            Some(args) => Rc::new(Expr::App {
                func: func.clone(),
                args,
                target: target.clone(),
            }),
            None => {
                let Some(def) = target else {
                    invariants::unbound_call(func);
                };
                if def.params.len() != args.len() {
                    invariants::arity_mismatch(func, def.params.len(), args.len());
                }
                tracer.trace_call(func, args);
                // Recursive calls in the body need the definition too.
                let body = def.body.bind_function(def);
                def.params
                    .iter()
                    .zip(args)
                    .fold(body, |body, (param, arg)| body.substitute(param, arg))
            }
        },
        Expr::Def { def, scope } => scope.bind_function(def),
        Expr::Arith { op, lhs, rhs } => {
            if !lhs.is_value() {
                Expr::arith(*op, step(lhs, store, tracer)?, rhs.clone())
            } else if !rhs.is_value() {
                Expr::arith(*op, lhs.clone(), step(rhs, store, tracer)?)
            } else {
                numeric::arith(*op, lhs, rhs)
            }
        }
        Expr::Compare { op, lhs, rhs } => {
            if !lhs.is_value() {
                Expr::compare(*op, step(lhs, store, tracer)?, rhs.clone())
            } else if !rhs.is_value() {
                Expr::compare(*op, lhs.clone(), step(rhs, store, tracer)?)
            } else {
                Expr::bool(numeric::compare(*op, lhs, rhs))
            }
        }
        Expr::Pair(first, second) => {
            if !first.is_value() {
                Expr::pair(step(first, store, tracer)?, second.clone())
            } else if !second.is_value() {
                Expr::pair(first.clone(), step(second, store, tracer)?)
            } else {
                invariants::stuck(expr)
            }
        }
        Expr::Fst(e) => {
            if !e.is_value() {
                Expr::fst(step(e, store, tracer)?)
            } else {
                e.as_pair().0.clone()
            }
        }
        Expr::Snd(e) => {
            if !e.is_value() {
                Expr::snd(step(e, store, tracer)?)
            } else {
                e.as_pair().1.clone()
            }
        }
        Expr::List { items, elem } => match step_first(items, store, tracer)? {
            Some(items) => Expr::list(items, elem.clone()),
            None => invariants::stuck(expr),
        },
        Expr::Cons { head, tail } => {
            if !head.is_value() {
                Expr::cons(step(head, store, tracer)?, tail.clone())
            } else if !tail.is_value() {
                Expr::cons(head.clone(), step(tail, store, tracer)?)
            } else {
                let (items, elem) = tail.as_list();
                let mut consed = Vec::with_capacity(items.len() + 1);
                consed.push(head.clone());
                consed.extend(items.iter().cloned());
                Expr::list(consed, elem.clone())
            }
        }
        Expr::Car(e) => {
            if !e.is_value() {
                Expr::car(step(e, store, tracer)?)
            } else {
                match e.as_list().0.first() {
                    Some(first) => first.clone(),
                    None => return Err(RuntimeError::EmptyList { op: "car" }),
                }
            }
        }
        Expr::Cdr(e) => {
            if !e.is_value() {
                Expr::cdr(step(e, store, tracer)?)
            } else {
                let (items, elem) = e.as_list();
                match items.split_first() {
                    Some((_, rest)) => Expr::list(rest.to_vec(), elem.clone()),
                    None => return Err(RuntimeError::EmptyList { op: "cdr" }),
                }
            }
        }
        Expr::IsEmpty(e) => {
            if !e.is_value() {
                Expr::is_empty(step(e, store, tracer)?)
            } else {
                Expr::bool(e.as_list().0.is_empty())
            }
        }
        Expr::Ref(e) => {
            if !e.is_value() {
                Expr::reference(step(e, store, tracer)?)
            } else {
                let addr = store.alloc(e.clone());
                tracer.trace_alloc(addr, e);
                Expr::ptr(addr, e.value_type())
            }
        }
        Expr::Deref(e) => {
            if !e.is_value() {
                Expr::deref(step(e, store, tracer)?)
            } else {
                store.read(e.as_ptr())
            }
        }
        Expr::Assign { target, value } => {
            if !target.is_value() {
                Expr::assign(step(target, store, tracer)?, value.clone())
            } else if !value.is_value() {
                Expr::assign(target.clone(), step(value, store, tracer)?)
            } else {
                let addr = target.as_ptr();
                store.write(addr, value.clone());
                tracer.trace_assign(addr, value);
                Expr::unit()
            }
        }
        Expr::Seq(first, second) => {
            if !first.is_value() {
                Expr::seq(step(first, store, tracer)?, second.clone())
            } else {
                second.clone()
            }
        }
        Expr::While {
            cond,
            body,
            template,
        } => {
            // The next iteration restarts from the template, not from `body`.
            let again = Rc::new(Expr::While {
                cond: cond.clone(),
                body: template.clone(),
                template: template.clone(),
            });
            Expr::cond(cond.clone(), Expr::seq(body.clone(), again), Expr::unit())
        }
        Expr::Struct { fields, types } => {
            let Some((name, value)) = fields.iter().find(|(_, value)| !value.is_value()) else {
                invariants::stuck(expr);
            };
            let name = name.clone();
            let stepped = step(value, store, tracer)?;
            let mut fields = fields.clone();
            fields.insert(name, stepped);
            Rc::new(Expr::Struct {
                fields,
                types: types.clone(),
            })
        }
        Expr::Field { record, name } => {
            if !record.is_value() {
                Expr::field(step(record, store, tracer)?, name.clone())
            } else {
                match record.as_struct().get(name) {
                    Some(value) => value.clone(),
                    None => invariants::missing_field(name, record),
                }
            }
        }
        Expr::Int(_)
        | Expr::Float(_)
        | Expr::NaN(_)
        | Expr::Bool(_)
        | Expr::Unit
        | Expr::Ptr { .. }
        | Expr::Var(_) => invariants::stuck(expr),
    };
    Ok(next)
}
