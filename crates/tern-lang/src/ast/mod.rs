//! Expression trees.
//!
//! Subtrees are reference counted and never mutated: every pass (substitution,
//! stepping) builds new nodes and shares whatever it did not touch. Trees
//! arrive from an external parser already built, so the constructors here are
//! the whole construction surface.

mod display;
mod ops;
mod value;

#[cfg(test)]
mod display_tests;
#[cfg(test)]
mod value_tests;

use std::rc::Rc;

use indexmap::IndexMap;
use tern_core::{StructFields, TokenKind, Type};

pub use ops::{ArithOp, CmpOp, NumKind, WrongOperator};

/// Field name to field expression, in source order.
pub type StructValues = IndexMap<String, Rc<Expr>>;

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Int(i64),
    Float(f64),
    /// Result of an undefined numeric operation.
    NaN(NumKind),
    Bool(bool),
    Var(String),
    Unit,
    If {
        cond: Rc<Expr>,
        then_branch: Rc<Expr>,
        else_branch: Rc<Expr>,
    },
    Let {
        name: String,
        ty: Type,
        value: Rc<Expr>,
        body: Rc<Expr>,
    },
    /// Call of a named function.
    ///
    /// `target` is empty in parsed trees. Evaluating the enclosing `Def`
    /// attaches the definition so the call can be reduced without an
    /// environment.
    App {
        func: String,
        args: Vec<Rc<Expr>>,
        target: Option<Rc<FnDef>>,
    },
    Arith {
        op: ArithOp,
        lhs: Rc<Expr>,
        rhs: Rc<Expr>,
    },
    Compare {
        op: CmpOp,
        lhs: Rc<Expr>,
        rhs: Rc<Expr>,
    },
    Pair(Rc<Expr>, Rc<Expr>),
    Fst(Rc<Expr>),
    Snd(Rc<Expr>),
    /// List literal; `elem` is the element type, needed when `items` is empty.
    List {
        items: Vec<Rc<Expr>>,
        elem: Type,
    },
    Cons {
        head: Rc<Expr>,
        tail: Rc<Expr>,
    },
    Car(Rc<Expr>),
    Cdr(Rc<Expr>),
    IsEmpty(Rc<Expr>),
    Ref(Rc<Expr>),
    /// Store address. Only produced by evaluation.
    Ptr {
        addr: usize,
        pointee: Type,
    },
    Deref(Rc<Expr>),
    Assign {
        target: Rc<Expr>,
        value: Rc<Expr>,
    },
    Seq(Rc<Expr>, Rc<Expr>),
    /// `template` is the pristine body; each unrolled iteration starts from
    /// it, while `body` may already be partially reduced.
    While {
        cond: Rc<Expr>,
        body: Rc<Expr>,
        template: Rc<Expr>,
    },
    /// Function definition visible in its own body and in `scope`.
    Def {
        def: Rc<FnDef>,
        scope: Rc<Expr>,
    },
    Struct {
        fields: StructValues,
        types: StructFields,
    },
    Field {
        record: Rc<Expr>,
        name: String,
    },
}

/// A named function: parameters plus a curried declared type.
#[derive(Debug, PartialEq)]
pub struct FnDef {
    pub name: String,
    pub params: Vec<String>,
    /// `Function(p1, Function(p2, ... result))`.
    pub ty: Type,
    pub body: Rc<Expr>,
}

impl Expr {
    pub fn int(value: i64) -> Rc<Expr> {
        Rc::new(Expr::Int(value))
    }

    /// A float literal. A NaN payload becomes the float-kinded NaN marker.
    pub fn float(value: f64) -> Rc<Expr> {
        if value.is_nan() {
            Self::nan(NumKind::Float)
        } else {
            Rc::new(Expr::Float(value))
        }
    }

    pub fn nan(kind: NumKind) -> Rc<Expr> {
        Rc::new(Expr::NaN(kind))
    }

    pub fn bool(value: bool) -> Rc<Expr> {
        Rc::new(Expr::Bool(value))
    }

    pub fn var(name: impl Into<String>) -> Rc<Expr> {
        Rc::new(Expr::Var(name.into()))
    }

    pub fn unit() -> Rc<Expr> {
        Rc::new(Expr::Unit)
    }

    pub fn cond(cond: Rc<Expr>, then_branch: Rc<Expr>, else_branch: Rc<Expr>) -> Rc<Expr> {
        Rc::new(Expr::If {
            cond,
            then_branch,
            else_branch,
        })
    }

    pub fn let_in(name: impl Into<String>, ty: Type, value: Rc<Expr>, body: Rc<Expr>) -> Rc<Expr> {
        Rc::new(Expr::Let {
            name: name.into(),
            ty,
            value,
            body,
        })
    }

    pub fn app(func: impl Into<String>, args: Vec<Rc<Expr>>) -> Rc<Expr> {
        Rc::new(Expr::App {
            func: func.into(),
            args,
            target: None,
        })
    }

    pub fn arith(op: ArithOp, lhs: Rc<Expr>, rhs: Rc<Expr>) -> Rc<Expr> {
        Rc::new(Expr::Arith { op, lhs, rhs })
    }

    pub fn compare(op: CmpOp, lhs: Rc<Expr>, rhs: Rc<Expr>) -> Rc<Expr> {
        Rc::new(Expr::Compare { op, lhs, rhs })
    }

    /// Binary operator node discriminated by the parser's token.
    pub fn binary(kind: TokenKind, lhs: Rc<Expr>, rhs: Rc<Expr>) -> Rc<Expr> {
        match ArithOp::try_from(kind) {
            Ok(op) => Self::arith(op, lhs, rhs),
            Err(_) => match CmpOp::try_from(kind) {
                Ok(op) => Self::compare(op, lhs, rhs),
                Err(_) => unreachable!("token `{kind}` is neither arithmetic nor comparison"),
            },
        }
    }

    pub fn pair(first: Rc<Expr>, second: Rc<Expr>) -> Rc<Expr> {
        Rc::new(Expr::Pair(first, second))
    }

    pub fn fst(operand: Rc<Expr>) -> Rc<Expr> {
        Rc::new(Expr::Fst(operand))
    }

    pub fn snd(operand: Rc<Expr>) -> Rc<Expr> {
        Rc::new(Expr::Snd(operand))
    }

    pub fn list(items: Vec<Rc<Expr>>, elem: Type) -> Rc<Expr> {
        Rc::new(Expr::List { items, elem })
    }

    pub fn empty_list(elem: Type) -> Rc<Expr> {
        Self::list(Vec::new(), elem)
    }

    pub fn cons(head: Rc<Expr>, tail: Rc<Expr>) -> Rc<Expr> {
        Rc::new(Expr::Cons { head, tail })
    }

    pub fn car(operand: Rc<Expr>) -> Rc<Expr> {
        Rc::new(Expr::Car(operand))
    }

    pub fn cdr(operand: Rc<Expr>) -> Rc<Expr> {
        Rc::new(Expr::Cdr(operand))
    }

    pub fn is_empty(operand: Rc<Expr>) -> Rc<Expr> {
        Rc::new(Expr::IsEmpty(operand))
    }

    pub fn reference(operand: Rc<Expr>) -> Rc<Expr> {
        Rc::new(Expr::Ref(operand))
    }

    pub fn ptr(addr: usize, pointee: Type) -> Rc<Expr> {
        Rc::new(Expr::Ptr { addr, pointee })
    }

    pub fn deref(operand: Rc<Expr>) -> Rc<Expr> {
        Rc::new(Expr::Deref(operand))
    }

    pub fn assign(target: Rc<Expr>, value: Rc<Expr>) -> Rc<Expr> {
        Rc::new(Expr::Assign { target, value })
    }

    pub fn seq(first: Rc<Expr>, second: Rc<Expr>) -> Rc<Expr> {
        Rc::new(Expr::Seq(first, second))
    }

    /// A loop whose live body starts out as its template.
    pub fn while_loop(cond: Rc<Expr>, body: Rc<Expr>) -> Rc<Expr> {
        Rc::new(Expr::While {
            cond,
            template: body.clone(),
            body,
        })
    }

    pub fn def<P: Into<String>>(
        name: impl Into<String>,
        params: impl IntoIterator<Item = P>,
        ty: Type,
        body: Rc<Expr>,
        scope: Rc<Expr>,
    ) -> Rc<Expr> {
        let def = FnDef {
            name: name.into(),
            params: params.into_iter().map(Into::into).collect(),
            ty,
            body,
        };
        Rc::new(Expr::Def {
            def: Rc::new(def),
            scope,
        })
    }

    /// Struct literal from `(name, value, declared type)` triples.
    pub fn structure<N: Into<String>>(
        fields: impl IntoIterator<Item = (N, Rc<Expr>, Type)>,
    ) -> Rc<Expr> {
        let mut values = StructValues::new();
        let mut types = StructFields::new();
        for (name, value, ty) in fields {
            let name = name.into();
            values.insert(name.clone(), value);
            types.insert(name, ty);
        }
        Rc::new(Expr::Struct {
            fields: values,
            types,
        })
    }

    pub fn field(record: Rc<Expr>, name: impl Into<String>) -> Rc<Expr> {
        Rc::new(Expr::Field {
            record,
            name: name.into(),
        })
    }
}
