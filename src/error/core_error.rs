use crate::error::{EvalError, SplitError};

#[derive(Debug)]
/// The umbrella error returned by statement execution and the script driver.
///
/// Structural mismatches and unknown identifiers never surface here; those
/// recover locally with a diagnostic on the output stream. What does surface
/// is fail-fast by design: malformed brackets, expression evaluation
/// failures and stream I/O failures.
pub enum CoreError {
    /// The splitter rejected an expression.
    Split(SplitError),
    /// The numeric expression evaluator rejected an expression.
    Eval(EvalError),
    /// Reading from the input stream or writing to the output stream failed.
    Io(std::io::Error),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Split(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "Error: stream failure: {e}."),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Split(e) => Some(e),
            Self::Eval(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<SplitError> for CoreError {
    fn from(e: SplitError) -> Self {
        Self::Split(e)
    }
}

impl From<EvalError> for CoreError {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
