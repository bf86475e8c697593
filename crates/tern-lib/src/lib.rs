//! Tern: a small typed expression language core.
//!
//! Programs arrive as already-parsed expression trees. A program must pass
//! the type checker before it can be evaluated or converted; the staged API
//! makes that order impossible to skip.
//!
//! # Example
//!
//! ```
//! use tern_lib::{Expr, Program, RunOptions, Type};
//!
//! let expr = Expr::let_in(
//!     "x",
//!     Type::Int,
//!     Expr::int(3),
//!     Expr::binary(tern_lib::TokenKind::Plus, Expr::var("x"), Expr::int(4)),
//! );
//!
//! let program = Program::new(expr).check().unwrap();
//! assert_eq!(program.ty(), &Type::Int);
//!
//! let outcome = program.run(&RunOptions::new()).unwrap();
//! assert_eq!(outcome.value.to_string(), "7");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::rc::Rc;

mod program;


pub use program::{CheckedProgram, Outcome, Program, RunOptions};

pub use tern_core::{Colors, TokenKind, Type};
pub use tern_ir::{Module, ModuleError, Node, Ty};
pub use tern_lang::{ArithOp, CmpOp, Expr, FnDef, NumKind, TypeError};
pub use tern_vm::{FuelLimits, RuntimeError, Store, Verbosity};

/// Errors from any stage of running a program.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("type error: {0}")]
    Type(#[from] TypeError),

    #[error("runtime error: {0}")]
    Runtime(#[from] RuntimeError),

    #[error("module error: {0}")]
    Module(#[from] ModuleError),
}

/// Result type for whole-program operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Type-check and evaluate `expr`, the one-call form.
///
/// With `trace` on, every reduction step is printed to stdout.
pub fn run(expr: Rc<Expr>, trace: bool) -> Result<Rc<Expr>> {
    let program = Program::new(expr).check()?;
    let outcome = program.run(&RunOptions::new().trace(trace))?;
    Ok(outcome.value)
}
