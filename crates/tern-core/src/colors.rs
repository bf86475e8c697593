//! ANSI escapes for the evaluation trace.

/// Escape codes by role in a trace line. `OFF` turns every role into "".
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    /// Step-number column (blue).
    pub step: &'static str,
    /// Final value (green).
    pub value: &'static str,
    /// Verbose sub-lines (dim).
    pub detail: &'static str,
    pub reset: &'static str,
}

impl Colors {
    pub const ON: Self = Self {
        step: "\x1b[34m",
        value: "\x1b[32m",
        detail: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        step: "",
        value: "",
        detail: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }
}
