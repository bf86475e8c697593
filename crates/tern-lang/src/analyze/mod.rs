//! Static analysis: typing contexts and the type checker.

mod context;
mod error;
mod type_check;


pub use context::{Binding, Context, Signature};
pub use error::{Expected, TypeError};
pub use type_check::typecheck;
