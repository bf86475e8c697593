//! Typing context: a persistent map from names to bindings.
//!
//! Extending a context never touches the original. Frames are linked through
//! shared parent pointers, so sibling scopes reuse their common prefix and
//! lookup walks from the innermost frame outwards.

use std::rc::Rc;

use tern_core::Type;

use crate::ast::FnDef;

/// What a name refers to. Variables and functions share one namespace.
#[derive(Clone, Debug, PartialEq)]
pub enum Binding {
    Var(Type),
    Function(Signature),
}

/// Uncurried view of a function's declared type.
#[derive(Clone, Debug, PartialEq)]
pub struct Signature {
    pub params: Vec<Type>,
    pub result: Type,
}

impl Signature {
    /// Split the declared type into one type per parameter plus the result.
    ///
    /// `None` when the type has fewer arrows than the definition has
    /// parameters.
    pub fn of(def: &FnDef) -> Option<Signature> {
        let (params, result) = def.ty.uncurry(def.params.len())?;
        Some(Signature { params, result })
    }
}

#[derive(Debug)]
struct Frame {
    name: String,
    binding: Binding,
    parent: Option<Rc<Frame>>,
}

#[derive(Clone, Debug, Default)]
pub struct Context {
    head: Option<Rc<Frame>>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new context in which `name` is bound, shadowing any outer binding.
    pub fn bind(&self, name: impl Into<String>, binding: Binding) -> Self {
        let frame = Frame {
            name: name.into(),
            binding,
            parent: self.head.clone(),
        };
        Self {
            head: Some(Rc::new(frame)),
        }
    }

    pub fn with_var(&self, name: impl Into<String>, ty: Type) -> Self {
        self.bind(name, Binding::Var(ty))
    }

    pub fn with_function(&self, name: impl Into<String>, signature: Signature) -> Self {
        self.bind(name, Binding::Function(signature))
    }

    /// Innermost binding of `name`.
    pub fn lookup(&self, name: &str) -> Option<&Binding> {
        let mut frame = self.head.as_deref();
        while let Some(f) = frame {
            if f.name == name {
                return Some(&f.binding);
            }
            frame = f.parent.as_deref();
        }
        None
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}
