//! Tern IR: the companion representation produced by the converter.
//!
//! This crate contains:
//! - The node and type sets (`Node`, `Ty`)
//! - A textual s-expression dump for inspection
//! - The binary module format (header + postcard payload) and a JSON view
//!
//! Evaluation of Tern IR belongs to the backend that consumes it and is not
//! defined here.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod dump;
mod module;
mod node;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod module_tests;

pub use dump::dump;
pub use module::{HEADER_SIZE, MAGIC, Module, ModuleError, VERSION};
pub use node::{BinOp, CmpOp, Node, NumKind, Param, RecordField, Ty};
