use std::{
    collections::HashMap,
    io::{BufRead, Write, stdin, stdout},
};

use crate::{
    ast::FunctionDef,
    error::CoreError,
    interpreter::store::{Scope, VariableStore},
};

/// Resolves a dotted attribute-access parameter such as `node.a` to a
/// number, for embedders that expose host objects to scripts.
pub type AttributeResolver = Box<dyn Fn(&str, &Scope) -> Option<f64>>;

/// All durable state of one running program.
///
/// Every interpreter operation takes the context by reference; there is no
/// process-wide state, so independent programs never observe each other's
/// variables or functions.
pub struct Context {
    /// All scalar and array variables, by scope.
    pub store:          VariableStore,
    /// The function table, keyed by function name.
    pub functions:      HashMap<String, FunctionDef>,
    pub(crate) input:   Box<dyn BufRead>,
    pub(crate) output:  Box<dyn Write>,
    pub(crate) resolver: Option<AttributeResolver>,
    pub(crate) call_depth: usize,
}

impl Context {
    /// Creates a context reading from standard input and writing to
    /// standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_streams(Box::new(stdin().lock()), Box::new(stdout()))
    }

    /// Creates a context over explicit input/output streams.
    ///
    /// This is how tests drive `ask` statements and capture everything the
    /// program prints.
    #[must_use]
    pub fn with_streams(input: Box<dyn BufRead>, output: Box<dyn Write>) -> Self {
        Self {
            store:      VariableStore::new(),
            functions:  HashMap::new(),
            input,
            output,
            resolver:   None,
            call_depth: 0,
        }
    }

    /// Installs a resolver for dotted attribute-access parameters.
    pub fn set_attribute_resolver(&mut self, resolver: AttributeResolver) {
        self.resolver = Some(resolver);
    }

    /// Reports a recoverable problem on the program's output stream.
    ///
    /// Diagnostics abort the current statement but never the program; the
    /// next line still executes.
    ///
    /// # Errors
    /// Returns [`CoreError::Io`] when the output stream fails.
    pub fn diagnostic(&mut self, message: &str) -> Result<(), CoreError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Runs a whole script, line by line, in the global scope.
    ///
    /// Blank lines and `%` comment lines are skipped; a `terminate`
    /// statement stops execution early. The returned value is the result of
    /// the last statement that produced one, which lets a driver echo the
    /// final answer of a calculation script.
    ///
    /// # Errors
    /// Returns [`CoreError::Eval`] when an expression fails to evaluate,
    /// [`CoreError::Split`] on malformed brackets and [`CoreError::Io`] when
    /// a stream fails.
    pub fn run_source(&mut self, source: &str) -> Result<Option<f64>, CoreError> {
        let mut last = None;

        for line in source.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('%') {
                continue;
            }
            if trimmed == "terminate" {
                break;
            }
            if let Some(value) = self.dispatch(trimmed, &Scope::Global)? {
                last = Some(value);
            }
        }
        Ok(last)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
