//! Structural type model.
//!
//! Types are plain trees compared by shape: base kinds by tag, compound kinds
//! by recursing into their components. Struct types compare as maps, so two
//! struct types with the same fields in a different order are equal.

use std::fmt;

use indexmap::IndexMap;

/// Field name to field type, in declaration order.
pub type StructFields = IndexMap<String, Type>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Type {
    Int,
    Float,
    Bool,
    Unit,
    Function(Box<Type>, Box<Type>),
    Pair(Box<Type>, Box<Type>),
    List(Box<Type>),
    Ref(Box<Type>),
    Struct(StructFields),
}

impl Type {
    pub fn function(domain: Type, range: Type) -> Self {
        Self::Function(Box::new(domain), Box::new(range))
    }

    pub fn pair(first: Type, second: Type) -> Self {
        Self::Pair(Box::new(first), Box::new(second))
    }

    pub fn list(element: Type) -> Self {
        Self::List(Box::new(element))
    }

    pub fn reference(pointee: Type) -> Self {
        Self::Ref(Box::new(pointee))
    }

    pub fn structure<N: Into<String>>(fields: impl IntoIterator<Item = (N, Type)>) -> Self {
        Self::Struct(fields.into_iter().map(|(n, t)| (n.into(), t)).collect())
    }

    /// Build the curried type `p1 -> p2 -> ... -> result`.
    pub fn curried(params: impl IntoIterator<Item = Type>, result: Type) -> Self {
        let params: Vec<Type> = params.into_iter().collect();
        params
            .into_iter()
            .rev()
            .fold(result, |range, domain| Self::function(domain, range))
    }

    /// Split off `arity` parameter types from a curried function type.
    ///
    /// Returns `None` if fewer than `arity` arrows are available. An arity of
    /// zero always succeeds with the whole type as the result.
    pub fn uncurry(&self, arity: usize) -> Option<(Vec<Type>, Type)> {
        let mut params = Vec::with_capacity(arity);
        let mut current = self;
        for _ in 0..arity {
            let Self::Function(domain, range) = current else {
                return None;
            };
            params.push((**domain).clone());
            current = range;
        }
        Some((params, current.clone()))
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int | Self::Float)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => f.write_str("Int"),
            Self::Float => f.write_str("Float"),
            Self::Bool => f.write_str("Bool"),
            Self::Unit => f.write_str("Unit"),
            Self::Function(a, b) => write!(f, "Function({a}, {b})"),
            Self::Pair(a, b) => write!(f, "Pair({a}, {b})"),
            Self::List(t) => write!(f, "List({t})"),
            Self::Ref(t) => write!(f, "Ref({t})"),
            Self::Struct(fields) => {
                f.write_str("Struct{")?;
                for (i, (name, ty)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name}: {ty}")?;
                }
                f.write_str("}")
            }
        }
    }
}
