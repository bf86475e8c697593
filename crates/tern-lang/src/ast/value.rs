//! Value classification, accessors, and the runtime type of values.
//!
//! Accessors are for callers that already know the node kind, typically
//! because the tree type-checked. They panic otherwise.

use std::rc::Rc;

use tern_core::Type;

use super::{Expr, NumKind, StructValues};
use crate::invariants;

impl Expr {
    /// Fully reduced: literals, booleans, unit, pointers, and pairs, lists,
    /// or structs whose components are all values.
    pub fn is_value(&self) -> bool {
        match self {
            Expr::Int(_)
            | Expr::Float(_)
            | Expr::NaN(_)
            | Expr::Bool(_)
            | Expr::Unit
            | Expr::Ptr { .. } => true,
            Expr::Pair(first, second) => first.is_value() && second.is_value(),
            Expr::List { items, .. } => items.iter().all(|item| item.is_value()),
            Expr::Struct { fields, .. } => fields.values().all(|field| field.is_value()),
            _ => false,
        }
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Expr::Int(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Expr::Float(_))
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, Expr::NaN(_))
    }

    /// Numeric literal or NaN marker.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Expr::Int(_) | Expr::Float(_) | Expr::NaN(_))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Expr::Bool(_))
    }

    pub fn is_var(&self) -> bool {
        matches!(self, Expr::Var(_))
    }

    pub fn is_unit(&self) -> bool {
        matches!(self, Expr::Unit)
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, Expr::Pair(..))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Expr::List { .. })
    }

    pub fn is_ptr(&self) -> bool {
        matches!(self, Expr::Ptr { .. })
    }

    pub fn is_struct(&self) -> bool {
        matches!(self, Expr::Struct { .. })
    }

    #[track_caller]
    pub fn as_int(&self) -> i64 {
        match self {
            Expr::Int(v) => *v,
            _ => invariants::wrong_kind("an integer literal", self),
        }
    }

    #[track_caller]
    pub fn as_float(&self) -> f64 {
        match self {
            Expr::Float(v) => *v,
            _ => invariants::wrong_kind("a float literal", self),
        }
    }

    #[track_caller]
    pub fn as_nan(&self) -> NumKind {
        match self {
            Expr::NaN(kind) => *kind,
            _ => invariants::wrong_kind("NaN", self),
        }
    }

    #[track_caller]
    pub fn as_bool(&self) -> bool {
        match self {
            Expr::Bool(b) => *b,
            _ => invariants::wrong_kind("a boolean", self),
        }
    }

    #[track_caller]
    pub fn as_var(&self) -> &str {
        match self {
            Expr::Var(name) => name,
            _ => invariants::wrong_kind("a variable", self),
        }
    }

    #[track_caller]
    pub fn as_pair(&self) -> (&Rc<Expr>, &Rc<Expr>) {
        match self {
            Expr::Pair(first, second) => (first, second),
            _ => invariants::wrong_kind("a pair", self),
        }
    }

    /// Items and element type of a list literal.
    #[track_caller]
    pub fn as_list(&self) -> (&[Rc<Expr>], &Type) {
        match self {
            Expr::List { items, elem } => (items, elem),
            _ => invariants::wrong_kind("a list", self),
        }
    }

    #[track_caller]
    pub fn as_ptr(&self) -> usize {
        match self {
            Expr::Ptr { addr, .. } => *addr,
            _ => invariants::wrong_kind("a pointer", self),
        }
    }

    #[track_caller]
    pub fn as_struct(&self) -> &StructValues {
        match self {
            Expr::Struct { fields, .. } => fields,
            _ => invariants::wrong_kind("a struct", self),
        }
    }

    /// Type of a value, read off its shape and annotations.
    ///
    /// Lists report their annotated element type and pointers their recorded
    /// pointee type, so this never has to look inside the store.
    #[track_caller]
    pub fn value_type(&self) -> Type {
        match self {
            Expr::Int(_) | Expr::NaN(NumKind::Int) => Type::Int,
            Expr::Float(_) | Expr::NaN(NumKind::Float) => Type::Float,
            Expr::Bool(_) => Type::Bool,
            Expr::Unit => Type::Unit,
            Expr::Ptr { pointee, .. } => Type::reference(pointee.clone()),
            Expr::Pair(first, second) => Type::pair(first.value_type(), second.value_type()),
            Expr::List { elem, .. } => Type::list(elem.clone()),
            Expr::Struct { types, .. } => Type::Struct(types.clone()),
            _ => invariants::not_a_value(self),
        }
    }
}
