//! Evaluation engine: store, reduction rules, machine loop, tracing.

mod error;
mod invariants;
mod numeric;
mod step;
mod store;
mod trace;
mod vm;

#[cfg(test)]
mod step_tests;

pub use error::RuntimeError;
pub use store::Store;
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
pub use vm::{FuelLimits, Machine, MachineBuilder, evaluate};
