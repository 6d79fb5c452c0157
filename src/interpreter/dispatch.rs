use crate::{
    error::CoreError,
    interpreter::{
        context::Context,
        store::{NumKind, Scope},
    },
    split::parse_call,
    util::predicates::is_legal_name,
};

/// The direction of a built-in I/O statement.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IoKind {
    /// An `ans(...)` statement writing to the output stream.
    Output,
    /// An `ask(...)` statement reading from the input stream.
    Input,
}

/// The recognized shape of one statement line.
///
/// Classification is purely syntactic: it looks at the space-delimited
/// tokens of the line and never consults interpreter state, so a line
/// classifies the same way whether or not the names in it are declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// A lone call token such as `f(2,3)`.
    BareCall(String),
    /// A function definition: `func f(x,y) = body`, normalized to exactly
    /// four tokens with the body whitespace-stripped.
    Definition(Vec<String>),
    /// A scalar assignment: `target = rhs`.
    Assignment {
        /// The left-hand side, a name or indexed element.
        target: String,
        /// The right-hand side text, whitespace-stripped.
        rhs:    String,
    },
    /// An `ans` or `ask` statement.
    IoCall {
        /// Whether the statement reads or writes.
        kind:  IoKind,
        /// The full call token.
        token: String,
    },
    /// A scalar declaration: `int x = rhs`, `float x = rhs` or
    /// `let x = rhs`.
    Declaration {
        /// The storage kind the keyword selects.
        kind: NumKind,
        /// The declared name.
        name: String,
        /// The right-hand side text, whitespace-stripped.
        rhs:  String,
    },
    /// An array declaration: `int_arr a[3] = (1,2,3)`.
    ArrayDeclaration {
        /// The storage kind the keyword selects.
        kind:   NumKind,
        /// The declared name with optional size, e.g. `a[3]`.
        header: String,
        /// The right-hand side text, whitespace-stripped.
        rhs:    String,
    },
    /// A line matching no statement form.
    Unrecognized,
}

/// Classifies one statement line into its [`Shape`].
///
/// # Example
/// ```
/// use bhask::interpreter::dispatch::{Shape, classify};
///
/// assert_eq!(classify("x = 3"),
///            Shape::Assignment { target: "x".to_owned(),
///                                rhs:    "3".to_owned(), });
/// assert_eq!(classify("what is this"), Shape::Unrecognized);
/// ```
#[must_use]
pub fn classify(line: &str) -> Shape {
    // A statement that is one call token, such as `f(2,3)` or
    // `ans('x is', x)`, may contain spaces inside its argument list, so it
    // is recognized before the line is tokenized.
    if let Some(call) = parse_call(line.trim()) {
        let name = call.name.trim();
        let token = format!("{}({})", name, call.raw_args);
        match name {
            "ans" => {
                return Shape::IoCall { kind: IoKind::Output,
                                       token, };
            },
            "ask" => {
                return Shape::IoCall { kind: IoKind::Input,
                                       token, };
            },
            name if is_legal_name(name) => return Shape::BareCall(token),
            _ => {},
        }
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();

    if tokens.len() >= 4 && tokens[2] == "=" {
        let rhs = tokens[3..].concat();
        match tokens[0] {
            "func" => {
                return Shape::Definition(vec!["func".to_owned(),
                                              tokens[1].to_owned(),
                                              "=".to_owned(),
                                              rhs]);
            },
            "int" => {
                return Shape::Declaration { kind: NumKind::Int,
                                            name: tokens[1].to_owned(),
                                            rhs };
            },
            "float" | "let" => {
                return Shape::Declaration { kind: NumKind::Float,
                                            name: tokens[1].to_owned(),
                                            rhs };
            },
            "int_arr" => {
                return Shape::ArrayDeclaration { kind:   NumKind::Int,
                                                 header: tokens[1].to_owned(),
                                                 rhs };
            },
            "float_arr" => {
                return Shape::ArrayDeclaration { kind:   NumKind::Float,
                                                 header: tokens[1].to_owned(),
                                                 rhs };
            },
            _ => {},
        }
    }

    if tokens.len() >= 3 && tokens[1] == "=" {
        return Shape::Assignment { target: tokens[0].to_owned(),
                                   rhs:    tokens[2..].concat(), };
    }

    Shape::Unrecognized
}

impl Context {
    /// Classifies and executes one statement line in the given scope.
    ///
    /// Unrecognized lines, and bare calls to functions that are not
    /// registered, are structural mismatches: they have no effect and
    /// execution continues with the next line.
    ///
    /// # Errors
    /// Returns [`CoreError::Eval`] for failing expressions,
    /// [`CoreError::Split`] on malformed brackets and [`CoreError::Io`]
    /// when a stream fails.
    pub fn dispatch(&mut self, line: &str, scope: &Scope) -> Result<Option<f64>, CoreError> {
        match classify(line) {
            Shape::BareCall(token) => self.invoke(&token, scope),
            Shape::Definition(tokens) => {
                self.define(&tokens)?;
                Ok(None)
            },
            Shape::Assignment { target, rhs } => self.assign(&target, &rhs, scope),
            Shape::IoCall { kind, token } => match kind {
                IoKind::Output => self.io_output(&token, scope),
                IoKind::Input  => self.io_input(&token, scope),
            },
            Shape::Declaration { kind, name, rhs } => self.declare(kind, &name, &rhs, scope),
            Shape::ArrayDeclaration { kind, header, rhs } => {
                self.declare_array(kind, &header, &rhs, scope)
            },
            Shape::Unrecognized => Ok(None),
        }
    }
}
