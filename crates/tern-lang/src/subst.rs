//! Substitution and function binding.
//!
//! Both walks share one traversal and one scoping rule: a `let` binding,
//! function name, or parameter spelled like the name being replaced hides it
//! in the region that binding covers.
//!
//! Substitution does not rename binders, so a replacement whose free
//! variables are bound at the use site gets captured. Evaluation only ever
//! substitutes closed values, where capture cannot happen.
//!
//! Untouched subtrees are shared with the input rather than copied.

use std::rc::Rc;

use crate::ast::{Expr, FnDef, StructValues};

enum Rewrite<'a> {
    /// Replace free occurrences of a variable.
    Var {
        name: &'a str,
        replacement: &'a Rc<Expr>,
    },
    /// Attach a definition to free, unbound calls of its name.
    Call { def: &'a Rc<FnDef> },
}

impl Rewrite<'_> {
    fn name(&self) -> &str {
        match self {
            Rewrite::Var { name, .. } => name,
            Rewrite::Call { def } => &def.name,
        }
    }
}

/// Collects rebuilt children and remembers whether any of them changed.
#[derive(Default)]
struct Rebuild {
    changed: bool,
}

impl Rebuild {
    fn child(&mut self, orig: &Rc<Expr>, rewritten: Option<Rc<Expr>>) -> Rc<Expr> {
        match rewritten {
            Some(new) => {
                self.changed = true;
                new
            }
            None => orig.clone(),
        }
    }

    fn children(&mut self, items: &[Rc<Expr>], rw: &Rewrite<'_>) -> Vec<Rc<Expr>> {
        items
            .iter()
            .map(|item| self.child(item, item.rewrite(rw)))
            .collect()
    }

    fn finish(self, node: Expr) -> Option<Rc<Expr>> {
        self.changed.then(|| Rc::new(node))
    }
}

impl Expr {
    /// Replace every free occurrence of variable `name` with `replacement`.
    pub fn substitute(&self, name: &str, replacement: &Rc<Expr>) -> Rc<Expr> {
        let rw = Rewrite::Var { name, replacement };
        self.rewrite(&rw)
            .unwrap_or_else(|| Rc::new(self.clone()))
    }

    /// Attach `def` to every free call of `def.name` that has no target yet.
    ///
    /// Arguments and nested definition bodies are searched too. A binding of
    /// the same name (variable, parameter, or inner function) hides the
    /// definition in the region it covers.
    pub fn bind_function(&self, def: &Rc<FnDef>) -> Rc<Expr> {
        let rw = Rewrite::Call { def };
        self.rewrite(&rw)
            .unwrap_or_else(|| Rc::new(self.clone()))
    }

    /// Rewritten node, or `None` when nothing below this node changed.
    fn rewrite(&self, rw: &Rewrite<'_>) -> Option<Rc<Expr>> {
        let mut rb = Rebuild::default();
        let node = match self {
            Expr::Var(name) => {
                return match rw {
                    Rewrite::Var {
                        name: target,
                        replacement,
                    } if name == target => Some(Rc::clone(replacement)),
                    _ => None,
                };
            }
            Expr::Int(_)
            | Expr::Float(_)
            | Expr::NaN(_)
            | Expr::Bool(_)
            | Expr::Unit
            | Expr::Ptr { .. } => return None,
            Expr::If {
                cond,
                then_branch,
                else_branch,
            } => Expr::If {
                cond: rb.child(cond, cond.rewrite(rw)),
                then_branch: rb.child(then_branch, then_branch.rewrite(rw)),
                else_branch: rb.child(else_branch, else_branch.rewrite(rw)),
            },
            Expr::Let {
                name,
                ty,
                value,
                body,
            } => {
                let value = rb.child(value, value.rewrite(rw));
                let body = if name == rw.name() {
                    body.clone()
                } else {
                    rb.child(body, body.rewrite(rw))
                };
                Expr::Let {
                    name: name.clone(),
                    ty: ty.clone(),
                    value,
                    body,
                }
            }
            Expr::App { func, args, target } => {
                let args = rb.children(args, rw);
                let target = match rw {
                    Rewrite::Call { def } if target.is_none() && func == &def.name => {
                        rb.changed = true;
                        Some(Rc::clone(def))
                    }
                    _ => target.clone(),
                };
                Expr::App {
                    func: func.clone(),
                    args,
                    target,
                }
            }
            Expr::Arith { op, lhs, rhs } => Expr::Arith {
                op: *op,
                lhs: rb.child(lhs, lhs.rewrite(rw)),
                rhs: rb.child(rhs, rhs.rewrite(rw)),
            },
            Expr::Compare { op, lhs, rhs } => Expr::Compare {
                op: *op,
                lhs: rb.child(lhs, lhs.rewrite(rw)),
                rhs: rb.child(rhs, rhs.rewrite(rw)),
            },
            Expr::Pair(first, second) => Expr::Pair(
                rb.child(first, first.rewrite(rw)),
                rb.child(second, second.rewrite(rw)),
            ),
            Expr::Fst(e) => Expr::Fst(rb.child(e, e.rewrite(rw))),
            Expr::Snd(e) => Expr::Snd(rb.child(e, e.rewrite(rw))),
            Expr::List { items, elem } => Expr::List {
                items: rb.children(items, rw),
                elem: elem.clone(),
            },
            Expr::Cons { head, tail } => Expr::Cons {
                head: rb.child(head, head.rewrite(rw)),
                tail: rb.child(tail, tail.rewrite(rw)),
            },
            Expr::Car(e) => Expr::Car(rb.child(e, e.rewrite(rw))),
            Expr::Cdr(e) => Expr::Cdr(rb.child(e, e.rewrite(rw))),
            Expr::IsEmpty(e) => Expr::IsEmpty(rb.child(e, e.rewrite(rw))),
            Expr::Ref(e) => Expr::Ref(rb.child(e, e.rewrite(rw))),
            Expr::Deref(e) => Expr::Deref(rb.child(e, e.rewrite(rw))),
            Expr::Assign { target, value } => Expr::Assign {
                target: rb.child(target, target.rewrite(rw)),
                value: rb.child(value, value.rewrite(rw)),
            },
            Expr::Seq(first, second) => Expr::Seq(
                rb.child(first, first.rewrite(rw)),
                rb.child(second, second.rewrite(rw)),
            ),
            Expr::While {
                cond,
                body,
                template,
            } => {
                let cond = rb.child(cond, cond.rewrite(rw));
                let body_new = body.rewrite(rw);
                // Keep body and template shared when they started out shared.
                let template = if Rc::ptr_eq(body, template) {
                    rb.child(template, body_new.clone())
                } else {
                    rb.child(template, template.rewrite(rw))
                };
                Expr::While {
                    cond,
                    body: rb.child(body, body_new),
                    template,
                }
            }
            Expr::Def { def, scope } => {
                if def.name == rw.name() {
                    return None;
                }
                let body = if def.params.iter().any(|p| p == rw.name()) {
                    def.body.clone()
                } else {
                    rb.child(&def.body, def.body.rewrite(rw))
                };
                let def = if Rc::ptr_eq(&body, &def.body) {
                    def.clone()
                } else {
                    Rc::new(FnDef {
                        name: def.name.clone(),
                        params: def.params.clone(),
                        ty: def.ty.clone(),
                        body,
                    })
                };
                Expr::Def {
                    def,
                    scope: rb.child(scope, scope.rewrite(rw)),
                }
            }
            Expr::Struct { fields, types } => {
                let fields: StructValues = fields
                    .iter()
                    .map(|(name, value)| (name.clone(), rb.child(value, value.rewrite(rw))))
                    .collect();
                Expr::Struct {
                    fields,
                    types: types.clone(),
                }
            }
            Expr::Field { record, name } => Expr::Field {
                record: rb.child(record, record.rewrite(rw)),
                name: name.clone(),
            },
        };
        rb.finish(node)
    }
}
