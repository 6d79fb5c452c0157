/// Splitter errors.
///
/// Defines the error raised by the bracket-aware operator splitter when an
/// expression's bracket nesting is not well formed. Malformed nesting is
/// detected eagerly instead of producing garbage operands.
pub mod split_error;

/// Evaluation errors.
///
/// Contains all error types that can be raised while lexing, parsing or
/// evaluating a numeric expression: syntax mistakes, unknown identifiers,
/// bad array indices, division by zero and runaway recursion. These are
/// fail-fast and propagate unmodified out of statement execution.
pub mod eval_error;

/// Top-level error umbrella.
///
/// Wraps splitter, evaluation and stream I/O failures into one type returned
/// by the statement driver.
pub mod core_error;

pub use core_error::CoreError;
pub use eval_error::EvalError;
pub use split_error::SplitError;
