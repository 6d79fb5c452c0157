use std::collections::HashMap;

/// An expression tree node for the numeric expression language.
///
/// `Expr` is deliberately small: numbers, identifiers, unary negation, the
/// five arithmetic operators, calls to registered functions and array
/// indexing. Function bodies are parsed into this tree once, at definition
/// time, and invoked by rewriting identifier leaves.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number(f64),
    /// Reference to a variable (or an unbound function parameter).
    Variable(String),
    /// A unary operation, currently only negation.
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// A call to a registered function, e.g. `f(x,2)`.
    Call {
        /// Name of the function being called.
        name:      String,
        /// Argument expressions in positional order.
        arguments: Vec<Self>,
    },
    /// An array element access, e.g. `arr[i+1]`.
    Index {
        /// Name of the array variable.
        name:  String,
        /// The index expression.
        index: Box<Self>,
    },
}

impl Expr {
    /// Rewrites the tree, replacing every identifier leaf that names a bound
    /// parameter with its numeric value.
    ///
    /// This is how function invocation substitutes actual arguments into a
    /// body: the tree is rewritten instead of the body text being rescanned,
    /// so a parameter named `x` never collides with a longer identifier such
    /// as `x1`. Identifiers without a binding are left untouched and resolve
    /// through the variable store at evaluation time.
    ///
    /// # Example
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use bhask::ast::Expr;
    ///
    /// let body = Expr::Variable("x".to_string());
    /// let bindings = HashMap::from([("x".to_string(), 4.0)]);
    ///
    /// assert_eq!(body.substitute(&bindings), Expr::Number(4.0));
    /// ```
    #[must_use]
    pub fn substitute(&self, bindings: &HashMap<String, f64>) -> Self {
        match self {
            Self::Number(v) => Self::Number(*v),
            Self::Variable(name) => bindings.get(name)
                                            .map_or_else(|| Self::Variable(name.clone()),
                                                         |v| Self::Number(*v)),
            Self::UnaryOp { op, expr } => Self::UnaryOp { op:   *op,
                                                          expr: Box::new(expr.substitute(bindings)), },
            Self::BinaryOp { left, op, right } => {
                Self::BinaryOp { left:  Box::new(left.substitute(bindings)),
                                 op:    *op,
                                 right: Box::new(right.substitute(bindings)), }
            },
            Self::Call { name, arguments } => {
                Self::Call { name:      name.clone(),
                             arguments: arguments.iter().map(|a| a.substitute(bindings)).collect(), }
            },
            Self::Index { name, index } => Self::Index { name:  name.clone(),
                                                         index: Box::new(index.substitute(bindings)), },
        }
    }
}

/// Represents a user-defined function definition.
///
/// Created by a 4-token definition statement `func f(x,y) = body`. A later
/// definition with the same name overwrites the entry wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in positional order.
    pub params: Vec<String>,
    /// The body, parsed once at definition time.
    pub body:   Expr,
    /// The raw body text as written, kept for diagnostics.
    pub source: String,
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}
