//! Tern language: expression model and the passes over it.
//!
//! - `ast` - expression trees, constructors, predicates, rendering
//! - `subst` - capture-unaware substitution and function binding
//! - `analyze` - typing context and the structural type checker
//! - `emit` - one-to-one conversion to Tern IR

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
pub mod ast;
pub mod emit;
mod invariants;
mod subst;


pub use analyze::{Binding, Context, Expected, Signature, TypeError, typecheck};
pub use ast::{ArithOp, CmpOp, Expr, FnDef, NumKind, StructValues};
pub use emit::{convert, convert_type, emit};
pub use tern_core::{StructFields, TokenKind, Type};
