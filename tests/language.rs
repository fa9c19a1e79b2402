use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use verdict::{Error, ExpressionFunction, Value, evaluate, parse};

fn eval(src: &str) -> Result<Value, Error> {
    evaluate(src, &HashMap::new(), &HashMap::new())
}

fn assert_value(src: &str, expected: Value) {
    match eval(src) {
        Ok(value) => assert_eq!(value, expected, "wrong result for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if let Ok(value) = eval(src) {
        panic!("Expression {src:?} succeeded with {value:?} but was expected to fail");
    }
}

#[test]
fn literals() {
    assert_value("42", Value::Int(42));
    assert_value("3.14", Value::Float(3.14));
    assert_value("true", Value::Bool(true));
    assert_value("false", Value::Bool(false));
    assert_value("'hello'", Value::Str("hello".into()));
    assert_value("\"hello\"", Value::Str("hello".into()));
}

#[test]
fn string_literals_mix_delimiters() {
    assert_value("'he said \"hi\"'", Value::Str("he said \"hi\"".into()));
    assert_value("\"it's fine\"", Value::Str("it's fine".into()));
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", Value::Int(3));
    assert_value("8 - 5", Value::Int(3));
    assert_value("7 * 9", Value::Int(63));
    assert_value("7 / 2", Value::Int(3));
    assert_value("7 % 3", Value::Int(1));
}

#[test]
fn numeric_coercion() {
    assert_value("2 + 3", Value::Int(5));
    assert_value("2 + 1.5", Value::Float(3.5));
    assert_value("1.5 + 2", Value::Float(3.5));
    assert_value("7.0 / 2", Value::Float(3.5));
    assert_value("7.5 % 2", Value::Float(1.5));
}

#[test]
fn unary_minus_and_binary_minus() {
    assert_value("-3 + 5", Value::Int(2));
    assert_value("2 - -3", Value::Int(5));
    assert_value("-(1 + 2)", Value::Int(-3));
    assert_value("-2.5", Value::Float(-2.5));
}

#[test]
fn comparisons() {
    assert_value("2 < 3", Value::Bool(true));
    assert_value("3 > 2", Value::Bool(true));
    assert_value("2 <= 2", Value::Bool(true));
    assert_value("3 >= 3.0", Value::Bool(true));
    assert_value("2 >= 3.0", Value::Bool(false));
    assert_value("2 == 2.0", Value::Bool(true));
    assert_value("2 != 3", Value::Bool(true));
    assert_value("false == false", Value::Bool(true));
    assert_value("'a' == 'a'", Value::Bool(true));
    assert_value("'a' != 'b'", Value::Bool(true));
}

#[test]
fn cross_kind_equality_is_error() {
    assert_failure("'a' == 1");
    assert_failure("true == 1");
    assert_failure("'true' == true");
}

#[test]
fn strings_have_no_arithmetic_or_ordering() {
    assert_failure("'a' + 'b'");
    assert_failure("'a' < 'b'");
    assert_failure("'a' * 2");
}

#[test]
fn logic_requires_booleans() {
    assert_value("true && false", Value::Bool(false));
    assert_value("true || false", Value::Bool(true));
    assert_value("!true", Value::Bool(false));
    assert_value("!false", Value::Bool(true));
    assert_failure("1 && true");
    assert_failure("true || 0");
    assert_failure("!1");
}

#[test]
fn precedence_scenario() {
    // Multiplicative before additive, relational before logical-and,
    // unary-not binds tightest.
    assert_value("1 + 2 * 3 > 5 && !false", Value::Bool(true));
    assert_value("(1 + 2) * 3", Value::Int(9));
    assert_value("1 + 2 == 3 || false", Value::Bool(true));
}

#[test]
fn division_and_modulo_by_zero_are_errors() {
    assert_failure("1 / 0");
    assert_failure("1.0 / 0.0");
    assert_failure("5 % 0");
    assert_failure("5.0 % 0.0");
}

#[test]
fn integer_overflow_is_a_fault() {
    assert_failure("9223372036854775807 + 1");
    assert_failure("0 - 9223372036854775807 - 2");
    assert_failure("3037000500 * 3037000500");
    // The one quotient and remainder without a 64-bit representation.
    assert_failure("(0 - 9223372036854775807 - 1) / (0 - 1)");
    assert_failure("(0 - 9223372036854775807 - 1) % (0 - 1)");
    assert_failure("-(0 - 9223372036854775807 - 1)");

    match eval("9223372036854775807 + 1") {
        Err(Error::Eval(verdict::error::EvalError::IntegerOverflow { line })) => {
            assert_eq!(line, 1);
        },
        other => panic!("Expected an integer-overflow fault, got {other:?}"),
    }
}

#[test]
fn large_integer_comparisons_are_exact() {
    // Adjacent integers above 2^53 are indistinguishable as floats.
    assert_value("9007199254740993 > 9007199254740992", Value::Bool(true));
    assert_value("9007199254740992 < 9007199254740993", Value::Bool(true));
    assert_value("9007199254740993 <= 9007199254740992", Value::Bool(false));
    assert_value("9007199254740993 != 9007199254740992", Value::Bool(true));
}

#[test]
fn unknown_variable_is_error_not_nil() {
    match eval("x") {
        Err(Error::Eval(verdict::error::EvalError::UnknownVariable { name, .. })) => {
            assert_eq!(name, "x");
        },
        other => panic!("Expected an unknown-variable fault, got {other:?}"),
    }
}

#[test]
fn bound_variables_resolve() {
    let vars = HashMap::from([("grade".to_string(), Value::Int(30)),
                              ("name".to_string(), Value::Str("ada".into()))]);

    let result = evaluate("grade < 40 && name == 'ada'", &vars, &HashMap::new());
    assert_eq!(result.unwrap(), Value::Bool(true));
}

#[test]
fn function_calls_dispatch_and_return() {
    let functions = function_table(vec![("add",
                                         Box::new(|args: &[Value]| {
                                             let mut sum = 0;
                                             for arg in args {
                                                 match arg {
                                                     Value::Int(n) => sum += n,
                                                     other => {
                                                         return Err(format!("expected int, got \
                                                                             {}",
                                                                            other.kind()).into());
                                                     },
                                                 }
                                             }
                                             Ok(Value::Int(sum))
                                         })),
                                        ("answer", Box::new(|_: &[Value]| Ok(Value::Int(42))))]);

    let result = evaluate("add(2, 3) == 5 && answer() == 42", &HashMap::new(), &functions);
    assert_eq!(result.unwrap(), Value::Bool(true));
}

#[test]
fn function_errors_propagate() {
    let functions = function_table(vec![("boom",
                                         Box::new(|_: &[Value]| Err("it broke".into())))]);

    match evaluate("boom()", &HashMap::new(), &functions) {
        Err(Error::Eval(verdict::error::EvalError::FunctionFailed { name, message, .. })) => {
            assert_eq!(name, "boom");
            assert_eq!(message, "it broke");
        },
        other => panic!("Expected a function fault, got {other:?}"),
    }
}

#[test]
fn unknown_function_is_error() {
    assert_failure("f(1)");
}

#[test]
fn short_circuit_skips_function_calls() {
    let calls = Arc::new(AtomicUsize::new(0));
    let probe_calls = Arc::clone(&calls);
    let functions = function_table(vec![("probe",
                                         Box::new(move |_: &[Value]| {
                                             probe_calls.fetch_add(1, Ordering::SeqCst);
                                             Ok(Value::Bool(true))
                                         })),
                                        ("boom",
                                         Box::new(|_: &[Value]| Err("must not run".into())))]);

    // The right operand is never evaluated once the left decides.
    let result = evaluate("false && boom()", &HashMap::new(), &functions);
    assert_eq!(result.unwrap(), Value::Bool(false));

    let result = evaluate("true || boom()", &HashMap::new(), &functions);
    assert_eq!(result.unwrap(), Value::Bool(true));

    // And it is evaluated when the left does not decide.
    let result = evaluate("true && probe()", &HashMap::new(), &functions);
    assert_eq!(result.unwrap(), Value::Bool(true));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn arguments_evaluate_left_to_right() {
    let order = Arc::new(std::sync::Mutex::new(Vec::new()));
    let seen = Arc::clone(&order);
    let functions = function_table(vec![("record",
                                         Box::new(move |args: &[Value]| {
                                             seen.lock().unwrap().extend(args.to_vec());
                                             Ok(Value::Bool(true))
                                         }))]);

    evaluate("record(1, 2, 3)", &HashMap::new(), &functions).unwrap();
    assert_eq!(*order.lock().unwrap(),
               vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
}

#[test]
fn parse_errors() {
    assert_failure("");
    assert_failure("1 +");
    assert_failure("(1 + 2");
    assert_failure("1 2");
    assert_failure("f(1,");
    assert_failure("&& true");
}

#[test]
fn end_of_input_errors_carry_the_last_line() {
    match parse("1 +\n2 *") {
        Err(verdict::error::ParseError::UnexpectedEndOfInput { line }) => assert_eq!(line, 2),
        other => panic!("Expected an end-of-input error, got {other:?}"),
    }

    match parse("f(1,\n2,") {
        Err(verdict::error::ParseError::UnexpectedEndOfInput { line }) => assert_eq!(line, 2),
        other => panic!("Expected an end-of-input error, got {other:?}"),
    }
}

#[test]
fn single_equals_is_rejected() {
    // `=` is lexed for diagnostics but has no place in the grammar.
    assert_failure("1 = 1");
}

#[test]
fn illegal_characters_are_lex_errors() {
    assert_failure("1 $ 2");
    assert_failure("a ? b");
}

#[test]
fn no_exponent_notation() {
    // `1e5` lexes as an integer followed by an identifier, which the
    // parser rejects as trailing input.
    assert_failure("1e5");
}

#[test]
fn parse_once_evaluate_repeatedly() {
    use verdict::interpreter::evaluator::core::Context;

    let expr = parse("grade < 40").unwrap();
    let functions = HashMap::new();

    let low = HashMap::from([("grade".to_string(), Value::Int(30))]);
    let high = HashMap::from([("grade".to_string(), Value::Int(90))]);

    assert_eq!(Context::new(&low, &functions).eval(&expr).unwrap(),
               Value::Bool(true));
    assert_eq!(Context::new(&high, &functions).eval(&expr).unwrap(),
               Value::Bool(false));
}

#[test]
fn evaluation_is_idempotent() {
    let vars = HashMap::from([("grade".to_string(), Value::Int(30))]);
    let first = evaluate("grade < 40", &vars, &HashMap::new()).unwrap();
    let second = evaluate("grade < 40", &vars, &HashMap::new()).unwrap();
    assert_eq!(first, second);
}

fn function_table(entries: Vec<(&str, ExpressionFunction)>) -> HashMap<String, ExpressionFunction> {
    entries.into_iter()
           .map(|(name, function)| (name.to_string(), function))
           .collect()
}
