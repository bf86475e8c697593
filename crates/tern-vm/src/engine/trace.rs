//! Step tracing for debugging evaluation.
//!
//! `NoopTracer` methods are empty and `#[inline(always)]`, so untraced runs
//! pay nothing. `PrintTracer` renders one line per reduction step and, when
//! verbose, sub-lines for store traffic and calls.

use std::rc::Rc;

use tern_core::Colors;
use tern_lang::Expr;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// One line per step.
    #[default]
    Default,
    /// Step lines plus allocation, assignment, and call sub-lines.
    Verbose,
}

/// Instrumentation hooks called by the machine.
///
/// - `trace_call` - a call is about to be replaced by its body
/// - `trace_alloc` - a reference cell was appended to the store
/// - `trace_assign` - a reference cell was overwritten
/// - `trace_step` - after each reduction, with the resulting expression
pub trait Tracer {
    fn trace_call(&mut self, func: &str, args: &[Rc<Expr>]);

    fn trace_alloc(&mut self, addr: usize, value: &Expr);

    fn trace_assign(&mut self, addr: usize, value: &Expr);

    fn trace_step(&mut self, step: u64, expr: &Expr);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_call(&mut self, _func: &str, _args: &[Rc<Expr>]) {}

    #[inline(always)]
    fn trace_alloc(&mut self, _addr: usize, _value: &Expr) {}

    #[inline(always)]
    fn trace_assign(&mut self, _addr: usize, _value: &Expr) {}

    #[inline(always)]
    fn trace_step(&mut self, _step: u64, _expr: &Expr) {}
}

/// Width of the step-number column.
const STEP_WIDTH: usize = 4;

/// Tracer that renders execution as text lines.
///
/// Lines are collected for `lines()`/`print()`. An echoing tracer also writes
/// each line to stdout as soon as it is produced, so a run that never
/// finishes still shows its progress.
pub struct PrintTracer {
    verbosity: Verbosity,
    colors: Colors,
    echo: bool,
    lines: Vec<String>,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            verbosity,
            colors,
            echo: false,
            lines: Vec::new(),
        }
    }

    /// A tracer that also prints every line as it is produced.
    pub fn echoing(verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            echo: true,
            ..Self::new(verbosity, colors)
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Print all collected lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{line}");
        }
    }

    fn push(&mut self, line: String) {
        if self.echo {
            println!("{line}");
        }
        self.lines.push(line);
    }

    /// Sub-line: blank step column, then dimmed content.
    fn add_subline(&mut self, content: String) {
        if self.verbosity != Verbosity::Verbose {
            return;
        }
        let c = self.colors;
        let line = format!(
            "{:w$} {}{content}{}",
            "",
            c.detail,
            c.reset,
            w = STEP_WIDTH
        );
        self.push(line);
    }
}

impl Tracer for PrintTracer {
    fn trace_call(&mut self, func: &str, args: &[Rc<Expr>]) {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        self.add_subline(format!("call {func}({})", args.join(", ")));
    }

    fn trace_alloc(&mut self, addr: usize, value: &Expr) {
        self.add_subline(format!("alloc [{addr}] = {value}"));
    }

    fn trace_assign(&mut self, addr: usize, value: &Expr) {
        self.add_subline(format!("store [{addr}] = {value}"));
    }

    fn trace_step(&mut self, step: u64, expr: &Expr) {
        let c = self.colors;
        let rendered = if expr.is_value() {
            format!("{}{expr}{}", c.value, c.reset)
        } else {
            expr.to_string()
        };
        let line = format!(
            "{}{step:>w$}{} {rendered}",
            c.step,
            c.reset,
            w = STEP_WIDTH
        );
        self.push(line);
    }
}
