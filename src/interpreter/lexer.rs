use logos::Logos;

use crate::error::EvalError;

/// A single lexical token of the expression language.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t]+")]
pub enum Token {
    /// A numeric literal, e.g. `42`, `3.5`, `.25`.
    #[regex(r"[0-9]+\.[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"[0-9]+",         |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"\.[0-9]+",       |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),
    /// The circle constant `π`.
    #[token("π")]
    Pi,
    /// Euler's number, written `ë`.
    #[token("ë")]
    Euler,
    /// A variable or function name.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_owned())]
    Identifier(String),
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("^")]
    Caret,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
}

/// Tokenizes one expression string.
///
/// # Errors
/// Returns [`EvalError::UnexpectedToken`] on any character the expression
/// language does not know.
///
/// # Example
/// ```
/// use bhask::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2*x").unwrap();
///
/// assert_eq!(tokens, vec![
///     Token::Number(2.0),
///     Token::Star,
///     Token::Identifier("x".to_owned()),
/// ]);
/// ```
pub fn tokenize(expr: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::new();

    for (result, span) in Token::lexer(expr).spanned() {
        match result {
            Ok(token) => tokens.push(token),
            Err(())   => {
                return Err(EvalError::UnexpectedToken { token: expr[span].to_owned() });
            },
        }
    }
    Ok(tokens)
}
