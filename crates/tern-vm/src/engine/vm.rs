//! The evaluation machine: a store plus a step counter.

use std::rc::Rc;

use tern_core::Colors;
use tern_lang::Expr;

use super::error::RuntimeError;
use super::step;
use super::store::Store;
use super::trace::{NoopTracer, PrintTracer, Tracer, Verbosity};

/// Runtime limits for evaluation.
///
/// Unlimited by default: a well-typed program may still loop forever, and
/// bounding it is the caller's choice.
#[derive(Clone, Copy, Debug, Default)]
pub struct FuelLimits {
    /// Maximum number of reduction steps.
    pub(crate) exec_fuel: Option<u64>,
}

impl FuelLimits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the execution fuel limit.
    pub fn exec_fuel(mut self, fuel: u64) -> Self {
        self.exec_fuel = Some(fuel);
        self
    }

    pub fn get_exec_fuel(&self) -> Option<u64> {
        self.exec_fuel
    }
}

/// Evaluation state: the store and the number of steps taken so far.
///
/// One machine is one run. Pointers produced by a machine index its own
/// store and mean nothing to another machine.
#[derive(Debug, Default)]
pub struct Machine {
    store: Store,
    steps: u64,
    limits: FuelLimits,
}

/// Builder for `Machine` instances.
#[derive(Debug, Default)]
pub struct MachineBuilder {
    store: Store,
    limits: FuelLimits,
}

impl MachineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fuel limits.
    pub fn limits(mut self, limits: FuelLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the execution fuel limit.
    pub fn exec_fuel(mut self, fuel: u64) -> Self {
        self.limits = self.limits.exec_fuel(fuel);
        self
    }

    /// Start from an existing store instead of an empty one.
    pub fn store(mut self, store: Store) -> Self {
        self.store = store;
        self
    }

    pub fn build(self) -> Machine {
        Machine {
            store: self.store,
            steps: 0,
            limits: self.limits,
        }
    }
}

impl Machine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> MachineBuilder {
        MachineBuilder::new()
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn into_store(self) -> Store {
        self.store
    }

    /// Reduction steps taken so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn limits(&self) -> FuelLimits {
        self.limits
    }

    /// Perform exactly one reduction. `expr` must not be a value.
    pub fn step(&mut self, expr: &Expr) -> Result<Rc<Expr>, RuntimeError> {
        self.step_with(expr, &mut NoopTracer)
    }

    pub fn step_with<T: Tracer>(
        &mut self,
        expr: &Expr,
        tracer: &mut T,
    ) -> Result<Rc<Expr>, RuntimeError> {
        let next = step::step(expr, &mut self.store, tracer)?;
        self.steps += 1;
        tracer.trace_step(self.steps, &next);
        Ok(next)
    }

    /// Step until a value remains.
    ///
    /// Convenience for `evaluate_with` using `NoopTracer`.
    pub fn evaluate(&mut self, expr: Rc<Expr>) -> Result<Rc<Expr>, RuntimeError> {
        self.evaluate_with(expr, &mut NoopTracer)
    }

    /// Step until a value remains, reporting every step to `tracer`.
    ///
    /// The input must have type-checked; ill-typed input panics.
    pub fn evaluate_with<T: Tracer>(
        &mut self,
        expr: Rc<Expr>,
        tracer: &mut T,
    ) -> Result<Rc<Expr>, RuntimeError> {
        let start = self.steps;
        let mut current = expr;
        while !current.is_value() {
            if let Some(fuel) = self.limits.exec_fuel {
                if self.steps - start >= fuel {
                    tracing::debug!(fuel, "execution fuel exhausted");
                    return Err(RuntimeError::ExecFuelExhausted(fuel));
                }
            }
            current = self.step_with(&current, tracer)?;
        }
        tracing::debug!(
            steps = self.steps - start,
            cells = self.store.len(),
            "evaluation finished"
        );
        Ok(current)
    }
}

/// Evaluate `expr` on a fresh machine.
///
/// With `trace` on, every step is printed to stdout as it happens.
pub fn evaluate(expr: Rc<Expr>, trace: bool) -> Result<Rc<Expr>, RuntimeError> {
    let mut machine = Machine::new();
    if trace {
        let mut tracer = PrintTracer::echoing(Verbosity::Default, Colors::OFF);
        machine.evaluate_with(expr, &mut tracer)
    } else {
        machine.evaluate(expr)
    }
}
