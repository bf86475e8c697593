//! Staged program API: `Program` -> `check()` -> `CheckedProgram`.
//!
//! Only a checked program can be evaluated or converted, which is how the
//! "type-check first" precondition of the evaluator and converter is kept.

use std::rc::Rc;

use tern_core::{Colors, Type};
use tern_ir::{Module, ModuleError, Node};
use tern_lang::{Expr, TypeError};
use tern_vm::{
    FuelLimits, Machine, NoopTracer, PrintTracer, RuntimeError, Store, Tracer, Verbosity,
};

/// A parsed, not yet checked, program.
#[derive(Clone, Debug)]
pub struct Program {
    expr: Rc<Expr>,
}

impl Program {
    pub fn new(expr: Rc<Expr>) -> Self {
        Self { expr }
    }

    pub fn expr(&self) -> &Rc<Expr> {
        &self.expr
    }

    /// Type-check the whole program. The first error aborts the check.
    pub fn check(self) -> Result<CheckedProgram, TypeError> {
        let ty = tern_lang::typecheck(&self.expr)?;
        tracing::debug!(%ty, "program type-checked");
        Ok(CheckedProgram {
            expr: self.expr,
            ty,
        })
    }
}

/// A program known to be well-typed.
#[derive(Clone, Debug)]
pub struct CheckedProgram {
    expr: Rc<Expr>,
    ty: Type,
}

impl CheckedProgram {
    pub fn expr(&self) -> &Rc<Expr> {
        &self.expr
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// Convert to Tern IR.
    pub fn convert(&self) -> Node {
        self.expr.convert()
    }

    pub fn emit(&self) -> Module {
        tern_lang::emit(&self.expr)
    }

    /// Serialized module for a backend.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ModuleError> {
        self.emit().to_bytes()
    }

    /// Evaluate on a fresh machine.
    ///
    /// With tracing enabled, steps are printed to stdout as they happen.
    pub fn run(&self, options: &RunOptions) -> Result<Outcome, RuntimeError> {
        if options.trace {
            let colors = Colors::new(options.colors);
            let mut tracer = PrintTracer::echoing(options.verbosity, colors);
            self.run_with(options, &mut tracer)
        } else {
            self.run_with(options, &mut NoopTracer)
        }
    }

    /// Evaluate on a fresh machine, reporting to a caller-supplied tracer.
    ///
    /// `options.trace` is ignored here; the tracer decides what to record.
    pub fn run_with<T: Tracer>(
        &self,
        options: &RunOptions,
        tracer: &mut T,
    ) -> Result<Outcome, RuntimeError> {
        let mut machine = Machine::builder().limits(options.limits).build();
        let value = machine.evaluate_with(self.expr.clone(), tracer)?;
        Ok(Outcome {
            value,
            steps: machine.steps(),
            store: machine.into_store(),
        })
    }
}

/// Evaluation settings. Defaults: no trace, no fuel limit.
#[derive(Clone, Copy, Debug, Default)]
pub struct RunOptions {
    trace: bool,
    verbosity: Verbosity,
    colors: bool,
    limits: FuelLimits,
}

impl RunOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print one line per reduction step.
    pub fn trace(mut self, enabled: bool) -> Self {
        self.trace = enabled;
        self
    }

    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Color the trace with ANSI escapes.
    pub fn colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    pub fn limits(mut self, limits: FuelLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the execution fuel limit.
    pub fn exec_fuel(mut self, fuel: u64) -> Self {
        self.limits = self.limits.exec_fuel(fuel);
        self
    }
}

/// Result of a completed run.
#[derive(Debug)]
pub struct Outcome {
    /// Final value.
    pub value: Rc<Expr>,
    /// Reduction steps taken.
    pub steps: u64,
    /// Store as the run left it.
    pub store: Store,
}
