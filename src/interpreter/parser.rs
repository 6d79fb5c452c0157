use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::EvalError,
    interpreter::lexer::{Token, tokenize},
};

pub type ParseResult<T> = Result<T, EvalError>;

/// Parses one complete expression string into an expression tree.
///
/// This is the entry point for expression parsing. It tokenizes the string,
/// begins at the lowest-precedence level, additive, and recursively descends
/// through the precedence hierarchy. Trailing tokens after a complete
/// expression are an error, so `2+3 4` never silently drops the `4`.
///
/// # Errors
/// - Propagates lexer errors.
/// - [`EvalError::UnexpectedTrailingTokens`] when tokens remain after the
///   expression ends.
///
/// # Example
/// ```
/// use bhask::{ast::Expr, interpreter::parser::parse_expression};
///
/// assert_eq!(parse_expression("42").unwrap(), Expr::Number(42.0));
/// assert!(parse_expression("2+").is_err());
/// ```
pub fn parse_expression(expr: &str) -> ParseResult<Expr> {
    let tokens = tokenize(expr)?;
    let mut tokens = tokens.iter().peekable();

    let parsed = parse_additive(&mut tokens)?;
    match tokens.next() {
        None        => Ok(parsed),
        Some(token) => Err(EvalError::UnexpectedTrailingTokens { token: format!("{token:?}") }),
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for all non-operator tokens.
///
/// # Example
/// ```
/// use bhask::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus  => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star  => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_multiplicative(tokens)?;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right), };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// The rule is: `multiplicative := exponent (("*" | "/") exponent)*`
fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_exponent(tokens)?;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            tokens.next();
            let right = parse_exponent(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right), };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Right-associative: `a ^ b ^ c` parses as `a ^ (b ^ c)`.
///
/// The rule is: `exponent := unary ("^" exponent)?`
fn parse_exponent<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let left = parse_unary(tokens)?;
    if let Some(Token::Caret) = tokens.peek() {
        tokens.next();
        let right = parse_exponent(tokens)?;
        return Ok(Expr::BinaryOp { left:  Box::new(left),
                                   op:    BinaryOperator::Pow,
                                   right: Box::new(right), });
    }
    Ok(left)
}

/// Parses a unary expression.
///
/// The rule is: `unary := "-" unary | primary`
fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(Token::Minus) = tokens.peek() {
        tokens.next();
        let expr = parse_unary(tokens)?;
        return Ok(Expr::UnaryOp { op:   UnaryOperator::Negate,
                                  expr: Box::new(expr), });
    }
    parse_primary(tokens)
}

/// Parses a primary (atomic) expression: a numeric literal, a named
/// constant, a variable, a function call, an array element access or a
/// parenthesized expression.
fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.next() {
        Some(Token::Number(v)) => Ok(Expr::Number(*v)),
        Some(Token::Pi)        => Ok(Expr::Number(3.141_592_65)),
        Some(Token::Euler)     => Ok(Expr::Number(2.718_281_82)),
        Some(Token::Identifier(name)) => parse_identifier(tokens, name),
        Some(Token::LParen) => {
            let expr = parse_additive(tokens)?;
            match tokens.next() {
                Some(Token::RParen) => Ok(expr),
                _                   => Err(EvalError::ExpectedClosingParen),
            }
        },
        Some(token) => Err(EvalError::UnexpectedToken { token: format!("{token:?}") }),
        None        => Err(EvalError::UnexpectedEndOfInput),
    }
}

/// Parses what follows an identifier: `(args)` makes it a call, `[index]`
/// an array access, anything else a plain variable reference.
fn parse_identifier<'a, I>(tokens: &mut Peekable<I>, name: &str) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.peek() {
        Some(Token::LParen) => {
            tokens.next();
            let arguments = parse_arguments(tokens)?;
            Ok(Expr::Call { name: name.to_owned(),
                            arguments, })
        },
        Some(Token::LBracket) => {
            tokens.next();
            let index = parse_additive(tokens)?;
            match tokens.next() {
                Some(Token::RBracket) => Ok(Expr::Index { name:  name.to_owned(),
                                                          index: Box::new(index), }),
                _ => Err(EvalError::ExpectedClosingBracket),
            }
        },
        _ => Ok(Expr::Variable(name.to_owned())),
    }
}

/// Parses a comma-separated argument list up to the closing `)`.
fn parse_arguments<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut arguments = Vec::new();

    if let Some(Token::RParen) = tokens.peek() {
        tokens.next();
        return Ok(arguments);
    }
    loop {
        arguments.push(parse_additive(tokens)?);
        match tokens.next() {
            Some(Token::Comma)  => {},
            Some(Token::RParen) => return Ok(arguments),
            Some(token)         => {
                return Err(EvalError::UnexpectedToken { token: format!("{token:?}") });
            },
            None => return Err(EvalError::ExpectedClosingParen),
        }
    }
}
