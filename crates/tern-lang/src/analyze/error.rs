//! Type errors.

use std::fmt;

use tern_core::Type;

/// What a position required, for mismatch messages.
///
/// Either an exact type or a family of types when any member would do.
#[derive(Clone, Debug, PartialEq)]
pub enum Expected {
    Type(Type),
    Numeric,
    Pair,
    List,
    Ref,
    Struct,
}

impl From<Type> for Expected {
    fn from(ty: Type) -> Self {
        Expected::Type(ty)
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Type(ty) => write!(f, "{ty}"),
            Expected::Numeric => f.write_str("Int or Float"),
            Expected::Pair => f.write_str("Pair(_, _)"),
            Expected::List => f.write_str("List(_)"),
            Expected::Ref => f.write_str("Ref(_)"),
            Expected::Struct => f.write_str("Struct{..}"),
        }
    }
}

/// The first violation found in a tree. `expr` fields hold the rendering
/// of the offending subexpression.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TypeError {
    #[error("{expr}: expected {expected}, got {actual}")]
    Mismatch {
        expr: String,
        expected: Expected,
        actual: Type,
    },
    #[error("unbound variable `{name}`")]
    UnboundVariable { name: String },
    #[error("`{name}` is a function and cannot be used as a value")]
    FunctionAsValue { name: String },
    #[error("call to undeclared function `{name}`")]
    UndeclaredFunction { name: String },
    #[error("`{name}` is not a function, it has type {actual}")]
    NotAFunction { name: String, actual: Type },
    #[error("`{name}` declares type {ty}, which does not take {arity} parameters")]
    BadSignature { name: String, ty: Type, arity: usize },
    #[error("`{name}` has parameter `{param}` more than once")]
    DuplicateParameter { name: String, param: String },
    #[error("{expr}: expected {expected} arguments, got {actual}")]
    ArityMismatch {
        expr: String,
        expected: usize,
        actual: usize,
    },
    #[error("{expr}: missing field `{field}`")]
    MissingField { expr: String, field: String },
    #[error("{expr}: field `{field}` is not declared")]
    UnexpectedField { expr: String, field: String },
    #[error("{expr}: {ty} has no field `{field}`")]
    UnknownField {
        expr: String,
        field: String,
        ty: Type,
    },
}
