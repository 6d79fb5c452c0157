use bhask::split::{Selector, parse_call, split_arguments, split_expression};

#[test]
fn splits_on_selected_operator_only() {
    let operands = split_expression("6*2+2", Selector::Only('+')).unwrap();
    assert_eq!(operands, vec!["6*2", "2"]);

    let operands = split_expression("6*2+2", Selector::Only('*')).unwrap();
    assert_eq!(operands, vec!["6", "2+2"]);
}

#[test]
fn splits_on_any_operator() {
    let operands = split_expression("1+2*3-4", Selector::Any).unwrap();
    assert_eq!(operands, vec!["1", "2", "3", "4"]);
}

#[test]
fn bracketed_subexpressions_stay_atomic() {
    let operands = split_expression("arr[i+1]+2", Selector::Only('+')).unwrap();
    assert_eq!(operands, vec!["arr[i+1]", "2"]);

    let operands = split_expression("f(1+2)+g(3,4)", Selector::Only('+')).unwrap();
    assert_eq!(operands, vec!["f(1+2)", "g(3,4)"]);

    let operands = split_expression("(2+3)*4", Selector::Only('+')).unwrap();
    assert_eq!(operands, vec!["(2+3)*4"]);
}

#[test]
fn double_minus_normalizes_to_plus() {
    let operands = split_expression("2--2", Selector::Only('+')).unwrap();
    assert_eq!(operands, vec!["2", "2"]);
}

#[test]
fn mixed_signs_normalize_to_minus() {
    let operands = split_expression("2+-2", Selector::Only('-')).unwrap();
    assert_eq!(operands, vec!["2", "2"]);

    let operands = split_expression("2-+2", Selector::Only('-')).unwrap();
    assert_eq!(operands, vec!["2", "2"]);
}

#[test]
fn leading_minus_is_unary() {
    let operands = split_expression("-6-+6*8", Selector::Only('-')).unwrap();
    assert_eq!(operands, vec!["-6", "6*8"]);
}

#[test]
fn minus_after_multiplicative_operator_is_unary() {
    let operands = split_expression("6*-2", Selector::Any).unwrap();
    assert_eq!(operands, vec!["6", "-2"]);
}

#[test]
fn whitespace_is_stripped() {
    let operands = split_expression(" 6 * 2 + 2 ", Selector::Only('+')).unwrap();
    assert_eq!(operands, vec!["6*2", "2"]);
}

#[test]
fn degenerate_inputs() {
    assert!(split_expression("", Selector::Any).unwrap().is_empty());
    assert_eq!(split_expression("x", Selector::Any).unwrap(), vec!["x"]);
    assert_eq!(split_expression("42", Selector::Only('+')).unwrap(), vec!["42"]);
}

#[test]
fn malformed_brackets_are_rejected() {
    assert!(split_expression("(2+3", Selector::Any).is_err());
    assert!(split_expression("2)+3", Selector::Any).is_err());
    assert!(split_expression("arr[1+2", Selector::Any).is_err());
}

#[test]
fn argument_lists_split_on_top_level_commas() {
    let args = split_arguments("f(1,2), arr[i+1], 3").unwrap();
    assert_eq!(args, vec!["f(1,2)", "arr[i+1]", "3"]);
}

#[test]
fn argument_lists_keep_quoted_text_verbatim() {
    let args = split_arguments("'a, b', 2").unwrap();
    assert_eq!(args, vec!["'a, b'", "2"]);

    let args = split_arguments("x, \"Enter x: \"").unwrap();
    assert_eq!(args, vec!["x", "\"Enter x: \""]);
}

#[test]
fn argument_lists_drop_empty_pieces() {
    let args = split_arguments("1,,2,").unwrap();
    assert_eq!(args, vec!["1", "2"]);
    assert!(split_arguments("").unwrap().is_empty());
}

#[test]
fn call_tokens_are_extracted() {
    let call = parse_call("f(x,2)").unwrap();
    assert_eq!(call.name, "f");
    assert_eq!(call.raw_args, "x,2");

    let call = parse_call("f(g(1,2))").unwrap();
    assert_eq!(call.raw_args, "g(1,2)");

    let call = parse_call("ans()").unwrap();
    assert_eq!(call.name, "ans");
    assert_eq!(call.raw_args, "");
}

#[test]
fn non_call_tokens_are_rejected() {
    assert!(parse_call("42").is_none());
    assert!(parse_call("f(x)+1").is_none());
    assert!(parse_call("f(x").is_none());
}
