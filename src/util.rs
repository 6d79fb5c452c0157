/// Pure predicates over statement tokens.
///
/// These are the shape tests the dispatcher, assignment engine and I/O
/// handlers share: number literal, legal variable name, quoted text literal
/// and dotted attribute access. They inspect text only and never touch
/// interpreter state.
pub mod predicates;

/// Numeric helpers.
///
/// Conversion and formatting routines used across the interpreter: turning
/// an evaluated `f64` into an array index, and rendering results the way the
/// language prints them (integral values without a decimal point).
pub mod num;
