//! Small-step evaluator for type-checked Tern expressions.
//!
//! Evaluation rewrites the expression tree one reduction at a time until a
//! value remains. Reference cells live in a per-machine `Store`.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod engine;

pub use engine::{
    FuelLimits, Machine, MachineBuilder, NoopTracer, PrintTracer, RuntimeError, Store, Tracer,
    Verbosity, evaluate,
};
