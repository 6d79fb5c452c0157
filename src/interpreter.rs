/// The per-program execution context.
///
/// `Context` replaces the original's process-wide function table and
/// variable dictionaries with one explicit object passed by reference into
/// every operation. It owns the variable store, the function table, the
/// named-constant table and the line-based input/output streams, so multiple
/// interpreters can run independently and tests can capture output.
///
/// # Responsibilities
/// - Holds all durable interpreter state for one running program.
/// - Drives line-by-line script execution (`run_source`).
/// - Routes diagnostics to the program's output stream.
pub mod context;

/// The variable store and scope resolver.
///
/// Scalar and array variables are keyed by name and scope; reads fall back
/// from a named scope to the global scope, and writes land in the nearest
/// scope that already holds the name.
pub mod store;

/// Statement classification and dispatch.
///
/// One classification function maps a raw statement line to an explicit
/// tagged union of statement shapes; unrecognized lines are a first-class,
/// testable outcome rather than a silent fall-through.
pub mod dispatch;

/// The function table and invocation engine.
///
/// Definition statements parse the body once into an expression tree;
/// invocation binds actual arguments positionally and substitutes them by
/// tree rewrite before evaluating in the caller's scope.
pub mod functions;

/// The assignment engine and variable declarations.
pub mod assign;

/// The built-in `ans` (output) and `ask` (input) statement handlers.
pub mod io;

/// The lexer for the numeric expression language.
///
/// Tokenizes a single expression string into numbers, identifiers, the five
/// arithmetic operators, brackets and commas.
pub mod lexer;

/// The parser for the numeric expression language.
///
/// Builds the small expression tree (`ast::Expr`) from the token stream:
/// standard precedence for `+ - * /`, right-associative `^`, unary minus,
/// parentheses, calls and array indexing.
pub mod parser;

/// The tree-walking expression evaluator.
pub mod evaluator;

/// The named-constant table (`π`, `ë`).
pub mod constants;
