use std::collections::HashMap;

use crate::{
    ast::FunctionDef,
    error::{CoreError, EvalError},
    interpreter::{context::Context, parser::parse_expression, store::Scope},
    split::{parse_call, split_arguments},
    util::predicates::{is_legal_name, is_number_literal},
};

/// Calls nested past this depth abort with a recursion diagnostic, matching
/// the original's deliberately low limit.
pub const RECURSION_LIMIT: usize = 100;

impl Context {
    /// Registers a function from a 4-token definition statement:
    /// `func f(x,y) = body`.
    ///
    /// The body is parsed into an expression tree once, here; invocation
    /// never rescans the source text. A later definition with the same name
    /// overwrites the earlier one wholesale, parameters and body both.
    ///
    /// Header problems (a missing `=`, an illegal name, non-alphabetic
    /// parameters) are reported as diagnostics on the output stream and the
    /// statement is ignored.
    ///
    /// # Errors
    /// Returns [`CoreError::Eval`] when the body does not parse, surfacing
    /// body errors at definition time rather than first call.
    pub fn define(&mut self, tokens: &[String]) -> Result<(), CoreError> {
        if tokens.len() != 4 || tokens[0] != "func" {
            return Ok(());
        }
        if tokens[2] != "=" {
            return self.diagnostic(&format!("Error '=' expected in definition of {}.", tokens[1]));
        }
        let Some(header) = parse_call(&tokens[1]) else {
            return self.diagnostic(&format!("Error {} is not a valid function header.", tokens[1]));
        };
        if !is_legal_name(&header.name) {
            return self.diagnostic(&format!("Error {} is not a legal function name.", header.name));
        }

        let mut params = Vec::new();
        for param in header.raw_args.split(',') {
            let param = param.trim();
            if param.is_empty() {
                continue;
            }
            if !param.chars().all(|c| c.is_ascii_alphabetic()) {
                return self.diagnostic(&format!("Error {param} is not a legal parameter name."));
            }
            params.push(param.to_owned());
        }

        let body = parse_expression(&tokens[3])?;
        self.functions.insert(header.name.clone(),
                              FunctionDef { name: header.name,
                                            params,
                                            body,
                                            source: tokens[3].clone(), });
        Ok(())
    }

    /// Invokes a registered function from a bare call statement such as
    /// `f(2,3)` or `f(x,g(1))`.
    ///
    /// Arguments resolve in the caller's scope: numeric literals parse
    /// directly, nested calls to registered functions invoke recursively,
    /// and plain names read from the variable store. An argument that does
    /// not resolve produces a diagnostic and the call is abandoned with
    /// `Ok(None)`.
    ///
    /// Returns `Ok(None)` when the token is not a call or names no
    /// registered function, so the dispatcher can report an unknown
    /// statement instead.
    ///
    /// # Errors
    /// Returns [`CoreError::Eval`] when the body evaluation fails and
    /// [`CoreError::Io`] when a diagnostic cannot be written.
    pub fn invoke(&mut self, token: &str, scope: &Scope) -> Result<Option<f64>, CoreError> {
        let Some(call) = parse_call(token) else {
            return Ok(None);
        };
        if !self.functions.contains_key(&call.name) {
            return Ok(None);
        }

        let arguments = split_arguments(&call.raw_args)?;
        let mut values = Vec::with_capacity(arguments.len());

        for argument in &arguments {
            if is_number_literal(argument) {
                if let Ok(v) = argument.parse::<f64>() {
                    values.push(v);
                    continue;
                }
            }
            if let Some(nested) = parse_call(argument)
                && self.functions.contains_key(&nested.name)
            {
                match self.invoke(argument, scope)? {
                    Some(v) => {
                        values.push(v);
                        continue;
                    },
                    None => return Ok(None),
                }
            }
            if is_legal_name(argument) {
                if let Some(v) = self.store.get_scalar(argument, scope) {
                    values.push(v);
                    continue;
                }
                self.diagnostic(&format!("Error variable {argument} is not defined."))?;
                return Ok(None);
            }
            self.diagnostic(&format!("Error cannot resolve argument {argument}."))?;
            return Ok(None);
        }

        self.call_function(&call.name, &values, scope).map(Some)
    }

    /// Calls a registered function with already-resolved argument values.
    ///
    /// Binds the values positionally to the parameter names, substitutes
    /// them into the body tree and evaluates the result in the caller's
    /// scope, so unbound identifiers in the body still resolve through the
    /// store.
    ///
    /// # Errors
    /// - [`EvalError::UnknownFunction`] when no such function is registered.
    /// - [`EvalError::RecursionLimitExceeded`] when calls nest past
    ///   [`RECURSION_LIMIT`].
    /// - Evaluation errors from the body.
    pub fn call_function(&mut self, name: &str, values: &[f64], scope: &Scope) -> Result<f64, CoreError> {
        let Some(def) = self.functions.get(name).cloned() else {
            return Err(EvalError::UnknownFunction { name: name.to_owned() }.into());
        };
        if self.call_depth >= RECURSION_LIMIT {
            return Err(EvalError::RecursionLimitExceeded { name: name.to_owned() }.into());
        }

        let bindings: HashMap<String, f64> = def.params
                                                .iter()
                                                .cloned()
                                                .zip(values.iter().copied())
                                                .collect();
        let body = def.body.substitute(&bindings);

        self.call_depth += 1;
        let result = self.eval_expr(&body, scope);
        self.call_depth -= 1;
        result
    }
}
