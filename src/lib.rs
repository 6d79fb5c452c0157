//! # bhask
//!
//! bhask is the evaluation core of the Bhaskara scripting language: a small,
//! expression-oriented language with user-defined functions, typed variable
//! declarations, numeric arrays and built-in `ans`/`ask` statements for
//! console output and input.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::CoreError, interpreter::context::Context, util::num::format_number};

/// Defines the expression tree of parsed function bodies and right-hand
/// sides.
///
/// This module declares the `Expr` enum and the function-definition record.
/// Trees are built by the parser, rewritten by argument substitution at
/// call time, and walked by the evaluator.
pub mod ast;
/// Provides unified error types for splitting, evaluation and I/O.
///
/// Hard errors abort a run and surface through these enums; recoverable
/// problems are diagnostics on the program's output stream instead and
/// never appear here.
pub mod error;
/// Orchestrates the entire process of script execution.
///
/// This module ties together the statement dispatcher, the variable store,
/// the function table, expression parsing and evaluation, and the built-in
/// I/O statements, all behind one explicit `Context` object.
pub mod interpreter;
/// The bracket-aware operator splitter.
///
/// Splits expression text into top-level operands with sign normalization,
/// splits argument lists on top-level commas, and extracts call tokens.
/// Everything here is pure text manipulation with no interpreter state.
pub mod split;
/// General utilities: token predicates and numeric helpers.
pub mod util;

/// Runs a whole script and returns once it finishes.
///
/// This is the crate's top-level entry point: it creates a fresh
/// [`Context`] over standard input and output, executes the script line by
/// line and, when `auto_print` is set, echoes the result of the last
/// value-producing statement.
///
/// # Errors
/// Returns an error when an expression fails to evaluate, brackets are
/// malformed, or a stream fails. Diagnostics (unknown variables and the
/// like) are printed and do not abort the run.
///
/// # Examples
/// ```
/// use bhask::run_script;
///
/// let source = "let result = 2 + 2";
/// assert!(run_script(source, false).is_ok());
///
/// let source = "let y = (2 + 3"; // unbalanced brackets
/// assert!(run_script(source, false).is_err());
/// ```
pub fn run_script(source: &str, auto_print: bool) -> Result<(), CoreError> {
    let mut context = Context::new();
    let result = context.run_source(source)?;

    if auto_print && let Some(value) = result {
        println!("{}", format_number(value));
    }

    Ok(())
}
