use std::{
    cell::RefCell,
    io::{Cursor, Write},
    rc::Rc,
};

use bhask::interpreter::{
    context::Context,
    store::{NumKind, Scope, Value},
};

/// Captures everything a program writes so tests can assert on it.
#[derive(Clone, Default)]
struct SharedBuf(Rc<RefCell<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).expect("output was not UTF-8")
    }
}

fn context_with(input: &str) -> (Context, SharedBuf) {
    let buf = SharedBuf::default();
    let context = Context::with_streams(Box::new(Cursor::new(input.to_owned())),
                                        Box::new(buf.clone()));
    (context, buf)
}

fn run(source: &str) -> (Context, SharedBuf) {
    run_with_input(source, "")
}

fn run_with_input(source: &str, input: &str) -> (Context, SharedBuf) {
    let (mut context, buf) = context_with(input);
    if let Err(e) = context.run_source(source) {
        panic!("Script failed: {e}");
    }
    (context, buf)
}

fn scalar(context: &Context, name: &str) -> f64 {
    context.store
           .get_scalar(name, &Scope::Global)
           .unwrap_or_else(|| panic!("expected scalar variable {name}"))
}

#[test]
fn declarations_and_arithmetic() {
    let (context, _) = run("int a = 7\nfloat b = 2.5\nlet c = a + b");

    assert_eq!(scalar(&context, "a"), 7.0);
    assert_eq!(scalar(&context, "b"), 2.5);
    assert_eq!(scalar(&context, "c"), 9.5);
}

#[test]
fn int_declarations_truncate_on_every_write() {
    let (context, _) = run("int x = 7.9\nx = 2.5");

    assert_eq!(scalar(&context, "x"), 2.0);
}

#[test]
fn function_definition_and_invocation() {
    let source = "func f(x,y) = 2*x+3*y\n\
                  int x = 2\n\
                  let y = f(x,5)";
    let (context, _) = run(source);

    assert_eq!(scalar(&context, "y"), 19.0);
}

#[test]
fn invocation_with_literal_arguments() {
    let source = "func f(x,y) = 2*x+3*y\n\
                  let r = f(2,3)";
    let (context, _) = run(source);

    assert_eq!(scalar(&context, "r"), 13.0);
}

#[test]
fn assignment_from_function_call() {
    let source = "let x = 2\n\
                  let y = 0\n\
                  func f(x,y) = 2*x+3*y\n\
                  y = f(x,5)";
    let (context, _) = run(source);

    assert_eq!(scalar(&context, "y"), 19.0);
}

#[test]
fn nested_call_arguments_resolve_innermost_first() {
    let source = "func g(n) = n+1\n\
                  func f(x,y) = x*y\n\
                  let r = f(g(2),4)";
    let (context, _) = run(source);

    assert_eq!(scalar(&context, "r"), 12.0);
}

#[test]
fn redefinition_replaces_parameters_and_body() {
    let source = "func f(x) = x+1\n\
                  func f(a,b) = a*b\n\
                  let r = f(3,4)";
    let (context, _) = run(source);

    assert_eq!(scalar(&context, "r"), 12.0);
}

#[test]
fn assignment_to_undeclared_name_is_diagnosed() {
    let (context, buf) = run("x = 3");

    assert!(!context.store.exists("x", &Scope::Global));
    assert!(buf.contents().contains("Error variable x is not defined."));
}

#[test]
fn failing_target_never_evaluates_the_right_hand_side() {
    // A 1/0 right-hand side would abort the run if it were evaluated.
    let (context, buf) = run("x = 1/0");

    assert!(!context.store.exists("x", &Scope::Global));
    assert!(buf.contents().contains("is not defined"));
}

#[test]
fn bare_variable_assignment_is_silently_ignored() {
    let (context, buf) = run("let x = 2\nlet y = 3\ny = x");

    assert_eq!(scalar(&context, "y"), 3.0);
    assert!(buf.contents().is_empty());
}

#[test]
fn declarations_accept_bare_variables() {
    let (context, _) = run("let x = 2\nlet y = x");

    assert_eq!(scalar(&context, "y"), 2.0);
}

#[test]
fn named_constants_resolve_everywhere() {
    let (context, buf) = run("let p = π\nans(π)");

    assert_eq!(scalar(&context, "p"), 3.14159265);
    assert_eq!(buf.contents(), "3.14159265\n");
}

#[test]
fn arrays_declare_and_assign_by_index() {
    let source = "int_arr a[3] = (1,2,3)\n\
                  a[1] = 9";
    let (context, _) = run(source);

    assert_eq!(context.store.get("a", &Scope::Global),
               Some(&Value::Array(vec![1.0, 9.0, 3.0])));
}

#[test]
fn array_size_mismatch_is_diagnosed() {
    let (context, buf) = run("int_arr b[2] = (1,2,3)");

    assert!(!context.store.exists("b", &Scope::Global));
    assert!(buf.contents()
               .contains("does not match the number of elements"));
}

#[test]
fn array_elements_may_be_variables() {
    let (context, _) = run("int x = 4\nint_arr a = (x, 2)");

    assert_eq!(context.store.get("a", &Scope::Global),
               Some(&Value::Array(vec![4.0, 2.0])));
}

#[test]
fn out_of_bounds_access_aborts_the_run() {
    let (mut context, _) = context_with("");

    assert!(context.run_source("int_arr a[2] = (1,2)\na[5] = 1").is_err());
}

#[test]
fn division_by_zero_aborts_the_run() {
    let (mut context, _) = context_with("");

    assert!(context.run_source("let x = 1/0").is_err());
}

#[test]
fn runaway_recursion_is_cut_off() {
    let (mut context, _) = context_with("");

    assert!(context.run_source("func f(x) = f(x)\nlet y = f(1)").is_err());
}

#[test]
fn undeclared_invoke_arguments_are_diagnosed() {
    let source = "func f(x) = x+1\n\
                  let r = 0\n\
                  r = f(nope)";
    let (context, buf) = run(source);

    assert_eq!(scalar(&context, "r"), 0.0);
    assert!(buf.contents().contains("Error variable nope is not defined."));
}

#[test]
fn scalar_writes_to_array_variables_are_diagnosed() {
    let (context, buf) = run("int_arr a[2] = (1,2)\na = 5");

    assert_eq!(context.store.get("a", &Scope::Global),
               Some(&Value::Array(vec![1.0, 2.0])));
    assert!(buf.contents()
               .contains("Error variable a is an array, not a scalar."));
}

#[test]
fn output_joins_resolved_parameters() {
    let (_, buf) = run("int x = 4\nans('x is', x, x+1)");

    assert_eq!(buf.contents(), "x is 4 5\n");
}

#[test]
fn output_with_one_bad_parameter_prints_nothing() {
    let (_, buf) = run("int x = 1\nans(x, nope)");

    assert_eq!(buf.contents(), "Error cannot resolve parameter nope.\n");
}

#[test]
fn output_resolves_calls_and_array_elements() {
    let source = "func square(n) = n^2\n\
                  int_arr a = (5, 6)\n\
                  ans(square(3), a[1])";
    let (_, buf) = run(source);

    assert_eq!(buf.contents(), "9 6\n");
}

#[test]
fn input_assigns_through_the_regular_path() {
    let source = "let x = 0\n\
                  ask(x, 'Enter x: ')\n\
                  ans(x)";
    let (context, buf) = run_with_input(source, "41\n");

    assert_eq!(scalar(&context, "x"), 41.0);
    assert_eq!(buf.contents(), "Enter x: 41\n");
}

#[test]
fn input_reaches_indexed_targets() {
    let (context, _) = run_with_input("int_arr a[2] = (1,2)\nask(a[1])", "7\n");

    assert_eq!(context.store.get("a", &Scope::Global),
               Some(&Value::Array(vec![1.0, 7.0])));
}

#[test]
fn comments_and_terminate_are_honored() {
    let source = "% setup\n\
                  int x = 1\n\
                  terminate\n\
                  x = 2";
    let (context, _) = run(source);

    assert_eq!(scalar(&context, "x"), 1.0);
}

#[test]
fn unrecognized_lines_are_skipped() {
    let (context, buf) = run("what is this\nint x = 1");

    assert!(buf.contents().is_empty());
    assert_eq!(scalar(&context, "x"), 1.0);
}

#[test]
fn unknown_bare_calls_have_no_effect() {
    let (_, buf) = run("f(1)");

    assert!(buf.contents().is_empty());
}

#[test]
fn named_scopes_shadow_and_fall_back() {
    let (mut context, _) = context_with("");
    let local = Scope::Named("job".to_owned());

    context.store
           .define("x", &Scope::Global, Value::Scalar(1.0), NumKind::Float);
    context.store
           .define("x", &local, Value::Scalar(2.0), NumKind::Float);
    context.store
           .define("y", &Scope::Global, Value::Scalar(3.0), NumKind::Float);

    assert_eq!(context.store.get_scalar("x", &local), Some(2.0));
    assert_eq!(context.store.get_scalar("x", &Scope::Global), Some(1.0));
    // Reads in a named scope fall back to globals.
    assert_eq!(context.store.get_scalar("y", &local), Some(3.0));

    // Writes land in the nearest scope holding the name.
    assert!(context.store.set("x", &local, 9.0));
    assert_eq!(context.store.get_scalar("x", &local), Some(9.0));
    assert_eq!(context.store.get_scalar("x", &Scope::Global), Some(1.0));
}

#[test]
fn attribute_parameters_use_the_installed_resolver() {
    let (mut context, buf) = context_with("");
    context.set_attribute_resolver(Box::new(|path, _| {
               (path == "node.a").then_some(5.0)
           }));

    context.run_source("ans(node.a)").expect("script failed");
    assert_eq!(buf.contents(), "5\n");
}
