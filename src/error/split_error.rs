#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents errors raised by the bracket-aware expression splitter.
pub enum SplitError {
    /// Bracket nesting in the expression is not well formed.
    MalformedBrackets {
        /// The offending expression, verbatim.
        expr: String,
    },
}

impl std::fmt::Display for SplitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedBrackets { expr } => {
                write!(f, "Error: malformed brackets in expression '{expr}'.")
            },
        }
    }
}

impl std::error::Error for SplitError {}
