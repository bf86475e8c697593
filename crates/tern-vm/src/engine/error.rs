//! Errors that can occur during evaluation of a well-typed expression.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// `car` or `cdr` of an empty list.
    #[error("{op} of an empty list")]
    EmptyList { op: &'static str },

    /// Execution fuel exhausted (more reduction steps than allowed).
    #[error("runtime execution limit exceeded after {0} steps")]
    ExecFuelExhausted(u64),
}
