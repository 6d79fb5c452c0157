use crate::{
    error::CoreError,
    interpreter::{
        constants,
        context::Context,
        store::{NumKind, Scope, Value, detect_indexed_target},
    },
    split::{Selector, parse_call, split_arguments, split_expression},
    util::{
        num::f64_to_index,
        predicates::{is_legal_name, is_number_literal},
    },
};

impl Context {
    /// Executes a 3-token assignment statement `target = rhs`.
    ///
    /// The target must already be declared; assigning to an undeclared name
    /// is a diagnostic and the right-hand side is never evaluated, so a
    /// failing target cannot run side effects. The target may be a scalar
    /// name or an indexed array element such as `arr[i+1]`; writing a
    /// scalar over a whole array variable is a diagnostic as well.
    ///
    /// Returns the assigned value, or `None` when the statement was
    /// abandoned with a diagnostic.
    ///
    /// # Errors
    /// Returns [`CoreError::Eval`] for failing right-hand-side or index
    /// evaluation and [`CoreError::Io`] when a diagnostic cannot be written.
    pub fn assign(&mut self, target: &str, rhs: &str, scope: &Scope) -> Result<Option<f64>, CoreError> {
        let (name, index_expr) = match detect_indexed_target(target) {
            Some((name, index)) => (name, Some(index)),
            None                => (target.to_owned(), None),
        };

        if !is_legal_name(&name) {
            return Ok(None);
        }
        if !self.store.exists(&name, scope) {
            self.diagnostic(&format!("Error variable {name} is not defined."))?;
            return Ok(None);
        }
        // A whole array is never silently replaced by a scalar.
        if index_expr.is_none()
            && matches!(self.store.get(&name, scope), Some(Value::Array(_)))
        {
            self.diagnostic(&format!("Error variable {name} is an array, not a scalar."))?;
            return Ok(None);
        }

        let Some(value) = self.resolve_rhs(rhs, scope, false)? else {
            return Ok(None);
        };

        if let Some(index_expr) = index_expr {
            let Some(index) = self.compute_index(&index_expr, scope)? else {
                return Ok(None);
            };
            self.store.set_array_element(&name, index, scope, value)?;
            return Ok(Some(value));
        }

        if self.store.set(&name, scope, value) {
            return Ok(Some(value));
        }
        Ok(None)
    }

    /// Executes a scalar declaration statement `int x = rhs`, `float x =
    /// rhs` or `let x = rhs`.
    ///
    /// Unlike assignment, a declaration accepts a bare variable name as its
    /// right-hand side, and it creates the variable in the statement's own
    /// scope, shadowing any global of the same name while inside a named
    /// scope.
    ///
    /// # Errors
    /// Same conditions as [`Context::assign`].
    pub fn declare(&mut self, kind: NumKind, name: &str, rhs: &str, scope: &Scope) -> Result<Option<f64>, CoreError> {
        if !is_legal_name(name) {
            self.diagnostic(&format!("Error {name} is not a legal variable name."))?;
            return Ok(None);
        }
        let Some(value) = self.resolve_rhs(rhs, scope, true)? else {
            return Ok(None);
        };

        self.store.define(name, scope, Value::Scalar(value), kind);
        Ok(Some(kind.apply(value)))
    }

    /// Executes an array declaration statement such as
    /// `int_arr fib[5] = (1,1,2,3,5)`.
    ///
    /// The header carries the declared size; when present it must match the
    /// element count exactly or the statement is abandoned with a
    /// diagnostic. Elements may be numeric literals or declared scalar
    /// variables.
    ///
    /// # Errors
    /// Same conditions as [`Context::assign`].
    pub fn declare_array(&mut self, kind: NumKind, header: &str, rhs: &str, scope: &Scope) -> Result<Option<f64>, CoreError> {
        let (name, declared_size) = match detect_indexed_target(header) {
            Some((name, size_expr)) => {
                let Some(size) = self.compute_index(&size_expr, scope)? else {
                    return Ok(None);
                };
                (name, Some(size))
            },
            None => (header.to_owned(), None),
        };
        if !is_legal_name(&name) {
            self.diagnostic(&format!("Error {name} is not a legal variable name."))?;
            return Ok(None);
        }

        let Some(raw) = rhs.strip_prefix('(').and_then(|r| r.strip_suffix(')')) else {
            self.diagnostic(&format!("Error array {name} requires a parenthesized element list."))?;
            return Ok(None);
        };

        let mut elements = Vec::new();
        for piece in split_arguments(raw)? {
            if is_number_literal(&piece) {
                if let Ok(v) = piece.parse::<f64>() {
                    elements.push(v);
                    continue;
                }
            }
            if is_legal_name(&piece) {
                if let Some(v) = self.store.get_scalar(&piece, scope) {
                    elements.push(v);
                    continue;
                }
                self.diagnostic(&format!("Error variable {piece} is not defined."))?;
                return Ok(None);
            }
            self.diagnostic(&format!("Error cannot resolve array element {piece}."))?;
            return Ok(None);
        }

        if let Some(size) = declared_size
            && size != elements.len()
        {
            self.diagnostic(&format!("Error index {size} does not match the number of elements in the array."))?;
            return Ok(None);
        }

        self.store.define(&name, scope, Value::Array(elements), kind);
        Ok(None)
    }

    /// Resolves the right-hand side of an assignment or declaration to a
    /// number.
    ///
    /// Resolution order: named constant, bare variable name (declarations
    /// only), arithmetic expression, registered function call, indexed
    /// array element, numeric literal. A bare variable on the right of a
    /// plain assignment is deliberately not resolved; `x = y` copies
    /// nothing and the statement is silently ignored, matching the
    /// original. Anything unresolvable yields `None`.
    ///
    /// # Errors
    /// Returns [`CoreError::Eval`] when an expression form fails to
    /// evaluate and [`CoreError::Split`] on malformed brackets.
    pub fn resolve_rhs(&mut self, rhs: &str, scope: &Scope, allow_bare_variable: bool) -> Result<Option<f64>, CoreError> {
        if let Some(value) = constants::lookup(rhs) {
            return Ok(Some(value));
        }
        if is_legal_name(rhs) {
            if !allow_bare_variable {
                return Ok(None);
            }
            if let Some(value) = self.store.get_scalar(rhs, scope) {
                return Ok(Some(value));
            }
            self.diagnostic(&format!("Error variable {rhs} is not defined."))?;
            return Ok(None);
        }
        if split_expression(rhs, Selector::Any)?.len() > 1 {
            return self.evaluate(rhs, scope).map(Some);
        }
        if let Some(call) = parse_call(rhs)
            && self.functions.contains_key(&call.name)
        {
            return self.invoke(rhs, scope);
        }
        if let Some((name, index_expr)) = detect_indexed_target(rhs)
            && self.store.exists(&name, scope)
        {
            let Some(index) = self.compute_index(&index_expr, scope)? else {
                return Ok(None);
            };
            return Ok(Some(self.store.get_array_element(&name, index, scope)?));
        }
        if is_number_literal(rhs) {
            if let Ok(v) = rhs.parse::<f64>() {
                return Ok(Some(v));
            }
        }
        Ok(None)
    }

    /// Evaluates an index expression to a `usize` array index.
    ///
    /// Accepts a numeric literal, an arithmetic expression or a declared
    /// scalar variable; an undeclared variable is a diagnostic and yields
    /// `None`.
    ///
    /// # Errors
    /// Returns [`CoreError::Eval`] when the expression fails to evaluate or
    /// produces a value unusable as an index.
    pub fn compute_index(&mut self, index_expr: &str, scope: &Scope) -> Result<Option<usize>, CoreError> {
        if is_number_literal(index_expr) {
            if let Ok(v) = index_expr.parse::<f64>() {
                return Ok(Some(f64_to_index(v)?));
            }
        }
        if split_expression(index_expr, Selector::Any)?.len() > 1 {
            let value = self.evaluate(index_expr, scope)?;
            return Ok(Some(f64_to_index(value)?));
        }
        match self.store.get_scalar(index_expr, scope) {
            Some(value) => Ok(Some(f64_to_index(value)?)),
            None        => {
                self.diagnostic(&format!("Error variable {index_expr} is not defined."))?;
                Ok(None)
            },
        }
    }
}
