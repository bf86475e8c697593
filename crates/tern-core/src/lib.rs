#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the Tern crates.
//!
//! - **Type model** (`Type`): structural types with structural equality
//! - **Token kinds** (`TokenKind`): operator discrimination shared with the parser
//! - **Colors** (`Colors`): ANSI palette for trace output

mod colors;
mod token;
mod types;

#[cfg(test)]
mod types_tests;

pub use colors::Colors;
pub use token::TokenKind;
pub use types::{StructFields, Type};
