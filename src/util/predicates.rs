use crate::split::OPERATORS;

/// Tests whether the text parses as a numeric literal, e.g. `42`, `-3.5`.
///
/// # Example
/// ```
/// use bhask::util::predicates::is_number_literal;
///
/// assert!(is_number_literal("42"));
/// assert!(is_number_literal("-3.5"));
/// assert!(!is_number_literal("x1"));
/// ```
#[must_use]
pub fn is_number_literal(text: &str) -> bool {
    // The digit check keeps `f64` oddities like "inf" and "nan" from
    // classifying as numbers.
    !text.is_empty()
    && text.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+'))
    && text.parse::<f64>().is_ok()
}

/// Tests whether the text is a legal variable or function name: a letter or
/// underscore followed by letters, digits or underscores.
///
/// # Example
/// ```
/// use bhask::util::predicates::is_legal_name;
///
/// assert!(is_legal_name("res"));
/// assert!(is_legal_name("_examp_a"));
/// assert!(!is_legal_name("2x"));
/// assert!(!is_legal_name(""));
/// ```
#[must_use]
pub fn is_legal_name(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Tests whether the text is a quoted text literal, wrapped in matching
/// single or double quotes.
#[must_use]
pub fn is_text_literal(text: &str) -> bool {
    text.len() >= 2
    && ((text.starts_with('\'') && text.ends_with('\''))
        || (text.starts_with('"') && text.ends_with('"')))
}

/// Strips the surrounding quotes from a text literal, or returns the text
/// unchanged when it is not one.
#[must_use]
pub fn unquote(text: &str) -> &str {
    if is_text_literal(text) {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

/// Tests whether the text is a dotted attribute-access expression such as
/// `node.a` or `node.get_element(i)`: a legal name, a dot, and a non-empty
/// remainder.
#[must_use]
pub fn is_attribute_access(text: &str) -> bool {
    if is_number_literal(text) {
        return false;
    }
    match text.split_once('.') {
        Some((object, rest)) => is_legal_name(object) && !rest.is_empty(),
        None => false,
    }
}

/// Tests whether the text contains any arithmetic operator character.
#[must_use]
pub fn has_operator(text: &str) -> bool {
    text.chars().any(|c| OPERATORS.contains(&c))
}
