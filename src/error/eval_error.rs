#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while lexing, parsing or evaluating
/// a numeric expression.
pub enum EvalError {
    /// Found an unexpected token while lexing or parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
    },
    /// Reached the end of the expression unexpectedly.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen,
    /// A closing bracket `]` was expected but not found.
    ExpectedClosingBracket,
    /// Found extra tokens after the expression should have ended.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
    },
    /// Tried to use a variable that is not defined in the current scope.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a function that is not registered.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// Indexed into a variable that is not an array.
    NotAnArray {
        /// The name of the variable.
        name: String,
    },
    /// Used an array variable where a scalar was required.
    NotAScalar {
        /// The name of the variable.
        name: String,
    },
    /// Tried to access an array element outside the array's bounds.
    IndexOutOfBounds {
        /// The number of elements in the array.
        size:  usize,
        /// The index that was actually requested.
        found: usize,
    },
    /// An index expression produced a value unusable as an index.
    InvalidIndex {
        /// The computed value.
        value: f64,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Function calls nested past the recursion limit.
    RecursionLimitExceeded {
        /// The function whose call exceeded the limit.
        name: String,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token } => write!(f, "Error: unexpected token '{token}'."),
            Self::UnexpectedEndOfInput => write!(f, "Error: unexpected end of expression."),
            Self::ExpectedClosingParen => {
                write!(f, "Error: expected closing parenthesis ')' but none found.")
            },
            Self::ExpectedClosingBracket => {
                write!(f, "Error: expected closing bracket ']' but none found.")
            },
            Self::UnexpectedTrailingTokens { token } => {
                write!(f, "Error: extra tokens after expression: {token}")
            },
            Self::UnknownVariable { name } => write!(f, "Error variable {name} is not defined."),
            Self::UnknownFunction { name } => write!(f, "Error function {name} is not defined."),
            Self::NotAnArray { name } => write!(f, "Error variable {name} is not an array."),
            Self::NotAScalar { name } => write!(f, "Error variable {name} is an array, not a scalar."),
            Self::IndexOutOfBounds { size, found } => {
                write!(f, "index {found} out of range for array of size {size}")
            },
            Self::InvalidIndex { value } => {
                write!(f, "Error: {value} cannot be used as an array index.")
            },
            Self::DivisionByZero => write!(f, "Error: division by zero."),
            Self::RecursionLimitExceeded { name } => {
                write!(f, "Error: recursion limit exceeded while calling {name}.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
