use std::io::Write;

use crate::{
    error::CoreError,
    interpreter::{
        constants,
        context::Context,
        store::{Scope, detect_indexed_target},
    },
    split::{parse_call, split_arguments},
    util::{
        num::format_number,
        predicates::{has_operator, is_attribute_access, is_legal_name, is_number_literal,
                     is_text_literal, unquote},
    },
};

impl Context {
    /// Executes an `ans(...)` output statement.
    ///
    /// Every parameter is resolved to text before anything is written, so a
    /// statement with one bad parameter prints nothing at all: the
    /// diagnostic names the offending parameter and the statement is
    /// abandoned. Resolved parameters print on one line, joined by single
    /// spaces, followed by a newline.
    ///
    /// # Errors
    /// Returns [`CoreError::Eval`] for failing expression parameters and
    /// [`CoreError::Io`] when the output stream fails.
    pub fn io_output(&mut self, token: &str, scope: &Scope) -> Result<Option<f64>, CoreError> {
        let Some(call) = parse_call(token) else {
            return Ok(None);
        };
        let params = split_arguments(&call.raw_args)?;

        let mut pieces = Vec::with_capacity(params.len());
        for param in &params {
            match self.resolve_output_param(param, scope)? {
                Some(text) => pieces.push(text),
                None       => {
                    self.diagnostic(&format!("Error cannot resolve parameter {param}."))?;
                    return Ok(None);
                },
            }
        }

        writeln!(self.output, "{}", pieces.join(" "))?;
        Ok(None)
    }

    /// Resolves one `ans` parameter to its printable text.
    ///
    /// Resolution order: named constant, quoted text literal, registered
    /// function call, indexed array element, numeric literal (printed
    /// verbatim), declared scalar variable, dotted attribute access through
    /// the installed resolver, and finally any text containing an operator
    /// as an arithmetic expression.
    fn resolve_output_param(&mut self, param: &str, scope: &Scope) -> Result<Option<String>, CoreError> {
        if let Some(value) = constants::lookup(param) {
            return Ok(Some(format_number(value)));
        }
        if is_text_literal(param) {
            return Ok(Some(unquote(param).to_owned()));
        }
        if let Some(call) = parse_call(param)
            && self.functions.contains_key(&call.name)
        {
            return Ok(self.invoke(param, scope)?.map(format_number));
        }
        if let Some((name, index_expr)) = detect_indexed_target(param)
            && self.store.exists(&name, scope)
        {
            let Some(index) = self.compute_index(&index_expr, scope)? else {
                return Ok(None);
            };
            let value = self.store.get_array_element(&name, index, scope)?;
            return Ok(Some(format_number(value)));
        }
        if is_number_literal(param) {
            return Ok(Some(param.to_owned()));
        }
        if is_legal_name(param) {
            return Ok(self.store.get_scalar(param, scope).map(format_number));
        }
        if is_attribute_access(param)
            && let Some(resolver) = &self.resolver
        {
            return Ok(resolver(param, scope).map(format_number));
        }
        if has_operator(param) {
            return Ok(Some(format_number(self.evaluate(param, scope)?)));
        }
        Ok(None)
    }

    /// Executes an `ask(...)` input statement.
    ///
    /// The first parameter names the target variable, the optional second
    /// is a prompt printed without a trailing newline. One line is read
    /// from the input stream, trimmed, and assigned to the target through
    /// the regular assignment path, so declared kinds and indexed targets
    /// behave exactly as in `target = value`.
    ///
    /// # Errors
    /// Returns [`CoreError::Io`] when a stream fails and [`CoreError::Eval`]
    /// when an indexed target's index fails to evaluate.
    pub fn io_input(&mut self, token: &str, scope: &Scope) -> Result<Option<f64>, CoreError> {
        let Some(call) = parse_call(token) else {
            return Ok(None);
        };
        let params = split_arguments(&call.raw_args)?;
        let Some(target) = params.first() else {
            return Ok(None);
        };

        if let Some(prompt) = params.get(1) {
            write!(self.output, "{}", unquote(prompt))?;
            self.output.flush()?;
        }

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        let input = line.trim().to_owned();

        self.assign(target, &input, scope)
    }
}
