use crate::error::SplitError;

/// The arithmetic operator characters the splitter recognizes.
pub const OPERATORS: &[char] = &['+', '-', '*', '/', '^'];

/// Selects which operator(s) cause a split.
///
/// `Any` splits on all five arithmetic operators; `Only(op)` splits on one
/// specific operator character, leaving the others embedded in the operands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Split on every arithmetic operator.
    Any,
    /// Split only on the given operator character.
    Only(char),
}

impl Selector {
    /// Tests whether the given operator character causes a split under this
    /// selector.
    #[must_use]
    pub fn matches(self, op: char) -> bool {
        match self {
            Self::Any => OPERATORS.contains(&op),
            Self::Only(c) => op == c,
        }
    }
}

/// The result of extracting a call token, e.g. `f(x,2)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    /// The text before the first `(`.
    pub name:     String,
    /// The raw argument list between the first `(` and its matching `)`.
    pub raw_args: String,
}

/// Splits an expression into its top-level operand tokens.
///
/// The scan maintains a signed nesting depth over the three bracket kinds
/// `()`, `[]` and `{}`; while the depth is positive every character is copied
/// verbatim into the current operand, so a split point never falls inside a
/// bracketed sub-expression. Whitespace is stripped before scanning.
///
/// Sign normalization happens inline:
/// - `--` is algebraically `+` and merges the adjacent operands with `+`;
/// - `-+` and `+-` are algebraically `-`;
/// - a single `-` at the very start, or directly after `*`, `/` or `^`, is
///   unary and stays attached to the operand that follows it.
///
/// An empty expression yields an empty sequence; an expression without the
/// selected operator yields a single operand equal to the stripped whole.
///
/// # Errors
/// Returns [`SplitError::MalformedBrackets`] when the bracket nesting is not
/// well formed.
///
/// # Example
/// ```
/// use bhask::split::{Selector, split_expression};
///
/// let operands = split_expression("6*2+2", Selector::Only('+')).unwrap();
/// assert_eq!(operands, vec!["6*2", "2"]);
///
/// let operands = split_expression("2--2", Selector::Only('+')).unwrap();
/// assert_eq!(operands, vec!["2", "2"]);
/// ```
pub fn split_expression(expr: &str, selector: Selector) -> Result<Vec<String>, SplitError> {
    let chars: Vec<char> = expr.chars().filter(|c| !c.is_whitespace()).collect();
    if chars.is_empty() {
        return Ok(Vec::new());
    }

    let malformed = || SplitError::MalformedBrackets { expr: expr.to_string() };

    let mut operands = Vec::new();
    let mut current = String::new();
    let mut depth: i32 = 0;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if matches!(c, '(' | '[' | '{') {
            depth += 1;
            current.push(c);
            i += 1;
            continue;
        }
        if matches!(c, ')' | ']' | '}') {
            depth -= 1;
            if depth < 0 {
                return Err(malformed());
            }
            current.push(c);
            i += 1;
            continue;
        }
        if depth > 0 || !OPERATORS.contains(&c) {
            current.push(c);
            i += 1;
            continue;
        }

        // Top-level operator: normalize adjacent signs before deciding
        // whether this position splits.
        let (op, width) = match (c, chars.get(i + 1).copied()) {
            ('-', Some('-')) => ('+', 2),
            ('-', Some('+')) | ('+', Some('-')) => ('-', 2),
            _ => (c, 1),
        };

        if op == '-' && width == 1 && (i == 0 || matches!(chars[i - 1], '*' | '/' | '^')) {
            // Unary minus stays attached to the operand that follows.
            current.push('-');
            i += 1;
            continue;
        }

        if selector.matches(op) {
            if !current.is_empty() {
                operands.push(std::mem::take(&mut current));
            }
        } else {
            current.push(op);
        }
        i += width;
    }

    if depth != 0 {
        return Err(malformed());
    }
    if !current.is_empty() {
        operands.push(current);
    }
    Ok(operands)
}

/// Splits a raw argument list on top-level commas.
///
/// This is the bracket-aware comma splitter used for call arguments and for
/// the parameters of an output statement: commas inside any bracketed
/// sub-expression do not split, arithmetic operators are never treated as
/// delimiters, and whitespace outside quoted text is discarded. Quoted text
/// passes through verbatim, so a prompt like `"Enter x: "` keeps its spaces.
/// Empty pieces are dropped.
///
/// # Errors
/// Returns [`SplitError::MalformedBrackets`] when the bracket nesting is not
/// well formed.
///
/// # Example
/// ```
/// use bhask::split::split_arguments;
///
/// let args = split_arguments("f(1,2), arr[i+1], 3").unwrap();
/// assert_eq!(args, vec!["f(1,2)", "arr[i+1]", "3"]);
/// ```
pub fn split_arguments(raw: &str) -> Result<Vec<String>, SplitError> {
    let malformed = || SplitError::MalformedBrackets { expr: raw.to_string() };

    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut depth: i32 = 0;
    let mut quote: Option<char> = None;

    for c in raw.chars() {
        if let Some(q) = quote {
            current.push(c);
            if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '\'' | '"' => {
                quote = Some(c);
                current.push(c);
            },
            c if c.is_whitespace() => {},
            '(' | '[' | '{' => {
                depth += 1;
                current.push(c);
            },
            ')' | ']' | '}' => {
                depth -= 1;
                if depth < 0 {
                    return Err(malformed());
                }
                current.push(c);
            },
            ',' if depth == 0 => {
                if !current.is_empty() {
                    pieces.push(std::mem::take(&mut current));
                }
            },
            _ => current.push(c),
        }
    }

    if depth != 0 {
        return Err(malformed());
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    Ok(pieces)
}

/// Extracts the name and raw argument list from a call token.
///
/// The name is the text before the first `(`; the argument list is the text
/// up to the parenthesis that balances it. Returns `None` unless the token
/// has a `(`, the parentheses balance, and the balancing `)` is the final
/// character — so `f(x)+1` is not a call token, while `f(g(1,2))` is.
///
/// # Example
/// ```
/// use bhask::split::parse_call;
///
/// let call = parse_call("f(x,2)").unwrap();
/// assert_eq!(call.name, "f");
/// assert_eq!(call.raw_args, "x,2");
///
/// assert!(parse_call("f(x)+1").is_none());
/// assert!(parse_call("42").is_none());
/// ```
#[must_use]
pub fn parse_call(token: &str) -> Option<Call> {
    let open = token.find('(')?;
    let name = &token[..open];

    let mut depth = 0usize;
    for (offset, c) in token[open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    // The balancing parenthesis must close the token.
                    if open + offset + 1 != token.len() {
                        return None;
                    }
                    return Some(Call { name:     name.to_string(),
                                       raw_args: token[open + 1..open + offset].to_string(), });
                }
            },
            _ => {},
        }
    }
    None
}
