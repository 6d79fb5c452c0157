use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::{CoreError, EvalError},
    interpreter::{
        context::Context,
        parser::parse_expression,
        store::{Scope, Value},
    },
    util::num::f64_to_index,
};

impl Context {
    /// Parses and evaluates an expression string in the given scope.
    ///
    /// # Errors
    /// Returns [`CoreError::Eval`] for lexing, parsing and evaluation
    /// failures; evaluation is fail-fast, so the first failing subexpression
    /// aborts the whole expression.
    ///
    /// # Example
    /// ```
    /// use bhask::interpreter::{context::Context, store::Scope};
    ///
    /// let mut context = Context::new();
    ///
    /// assert_eq!(context.evaluate("2+3*4", &Scope::Global).unwrap(), 14.0);
    /// ```
    pub fn evaluate(&mut self, expr: &str, scope: &Scope) -> Result<f64, CoreError> {
        let parsed = parse_expression(expr)?;
        self.eval_expr(&parsed, scope)
    }

    /// Evaluates an expression tree in the given scope.
    ///
    /// Variables resolve through the store with named-to-global fallback;
    /// calls resolve through the function table.
    ///
    /// # Errors
    /// - [`EvalError::UnknownVariable`] for unresolved identifiers.
    /// - [`EvalError::NotAScalar`] when an array is used as a number.
    /// - [`EvalError::DivisionByZero`] on a zero divisor.
    /// - Array access errors from the store.
    pub fn eval_expr(&mut self, expr: &Expr, scope: &Scope) -> Result<f64, CoreError> {
        match expr {
            Expr::Number(v) => Ok(*v),
            Expr::Variable(name) => match self.store.get(name, scope) {
                Some(Value::Scalar(v)) => Ok(*v),
                Some(Value::Array(_))  => {
                    Err(EvalError::NotAScalar { name: name.clone() }.into())
                },
                None => Err(EvalError::UnknownVariable { name: name.clone() }.into()),
            },
            Expr::UnaryOp { op, expr } => {
                let value = self.eval_expr(expr, scope)?;
                match op {
                    UnaryOperator::Negate => Ok(-value),
                }
            },
            Expr::BinaryOp { left, op, right } => {
                let lhs = self.eval_expr(left, scope)?;
                let rhs = self.eval_expr(right, scope)?;
                match op {
                    BinaryOperator::Add => Ok(lhs + rhs),
                    BinaryOperator::Sub => Ok(lhs - rhs),
                    BinaryOperator::Mul => Ok(lhs * rhs),
                    BinaryOperator::Div => {
                        if rhs == 0.0 {
                            return Err(EvalError::DivisionByZero.into());
                        }
                        Ok(lhs / rhs)
                    },
                    BinaryOperator::Pow => Ok(lhs.powf(rhs)),
                }
            },
            Expr::Call { name, arguments } => {
                let mut values = Vec::with_capacity(arguments.len());
                for argument in arguments {
                    values.push(self.eval_expr(argument, scope)?);
                }
                self.call_function(name, &values, scope)
            },
            Expr::Index { name, index } => {
                let index = f64_to_index(self.eval_expr(index, scope)?)?;
                Ok(self.store.get_array_element(name, index, scope)?)
            },
        }
    }
}
