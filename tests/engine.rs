use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    thread,
};

use regex::Regex;
use verdict::{Config, Engine, EngineError, ExpressionFunction, Rule, Value};

fn noop_rule(name: &str, condition: &str) -> Rule {
    Rule::new(name, condition, |_| Ok(Value::Nil))
}

fn grade_engine() -> Engine {
    let engine = Engine::new().with_logger(Box::new(|_| {}));
    engine.add_rule(noop_rule("low grade", "grade < 40")).unwrap();
    engine.add_rule(noop_rule("passed", "grade > 60")).unwrap();
    engine
}

fn grade_vars(grade: i64) -> HashMap<String, Value> {
    HashMap::from([("grade".to_string(), Value::Int(grade))])
}

fn matched_names(rules: &[Rule]) -> Vec<&str> {
    rules.iter().map(Rule::name).collect()
}

#[test]
fn add_rule_rejects_duplicate_names() {
    let engine = Engine::new();
    engine.add_rule(noop_rule("r", "true")).unwrap();

    // Duplicate names fail regardless of the rules' content.
    let result = engine.add_rule(noop_rule("r", "false"));
    match result {
        Err(EngineError::RuleExists { name }) => assert_eq!(name, "r"),
        other => panic!("Expected a duplicate-name error, got {other:?}"),
    }
}

#[test]
fn match_returns_rules_whose_condition_holds() {
    let engine = grade_engine();

    let matched = engine.match_rules(&grade_vars(30), &HashMap::new()).unwrap();
    assert_eq!(matched_names(&matched), vec!["low grade"]);

    let matched = engine.match_rules(&grade_vars(90), &HashMap::new()).unwrap();
    assert_eq!(matched_names(&matched), vec!["passed"]);

    let matched = engine.match_rules(&grade_vars(50), &HashMap::new()).unwrap();
    assert!(matched.is_empty());
}

#[test]
fn match_aborts_on_missing_variables_by_default() {
    let engine = grade_engine();

    match engine.match_rules(&HashMap::new(), &HashMap::new()) {
        Err(EngineError::EvaluationFailed { .. }) => {},
        other => panic!("Expected an evaluation failure, got {other:?}"),
    }
}

#[test]
fn match_skips_bad_rules_when_configured() {
    let engine =
        grade_engine().with_config(Config { skip_bad_rule_during_match: true, });

    // With nothing bound, every condition faults and is skipped.
    let matched = engine.match_rules(&HashMap::new(), &HashMap::new()).unwrap();
    assert!(matched.is_empty());

    // Rules that still evaluate cleanly keep matching.
    let matched = engine.match_rules(&grade_vars(30), &HashMap::new()).unwrap();
    assert_eq!(matched_names(&matched), vec!["low grade"]);
}

#[test]
fn non_boolean_conditions_abort_by_default() {
    let engine = Engine::new().with_logger(Box::new(|_| {}));
    engine.add_rule(noop_rule("numeric", "grade + 1")).unwrap();

    match engine.match_rules(&grade_vars(30), &HashMap::new()) {
        Err(EngineError::NonBooleanResult { name, kind }) => {
            assert_eq!(name, "numeric");
            assert_eq!(kind, "int");
        },
        other => panic!("Expected a non-boolean-result error, got {other:?}"),
    }
}

#[test]
fn non_boolean_conditions_are_skipped_when_configured() {
    let engine = Engine::new().with_config(Config { skip_bad_rule_during_match: true, });
    engine.add_rule(noop_rule("numeric", "grade + 1")).unwrap();
    engine.add_rule(noop_rule("boolean", "grade < 40")).unwrap();

    let matched = engine.match_rules(&grade_vars(30), &HashMap::new()).unwrap();
    assert_eq!(matched_names(&matched), vec!["boolean"]);
}

#[test]
fn match_with_regex_function() {
    let engine = Engine::new().with_logger(Box::new(|_| {}));
    engine.add_rule(noop_rule("regex rule", "matches(text, regex)")).unwrap();

    let vars = HashMap::from([("text".to_string(), Value::Str("hello world".into())),
                              ("regex".to_string(), Value::Str("hello.*".into()))]);

    let good: ExpressionFunction = Box::new(|args: &[Value]| {
        let (Some(Value::Str(text)), Some(Value::Str(pattern))) = (args.first(), args.get(1))
        else {
            return Err("matches expects two strings".into());
        };
        Ok(Value::Bool(Regex::new(pattern)?.is_match(text)))
    });
    let functions = HashMap::from([("matches".to_string(), good)]);

    let matched = engine.match_rules(&vars, &functions).unwrap();
    assert_eq!(matched_names(&matched), vec!["regex rule"]);

    // A function table entry that always fails aborts the match.
    let bad: ExpressionFunction = Box::new(|_: &[Value]| Err("bad function".into()));
    let functions = HashMap::from([("matches".to_string(), bad)]);

    match engine.match_rules(&vars, &functions) {
        Err(EngineError::EvaluationFailed { name, cause }) => {
            assert_eq!(name, "regex rule");
            assert!(cause.to_string().contains("bad function"));
        },
        other => panic!("Expected an evaluation failure, got {other:?}"),
    }
}

#[test]
fn matched_rules_execute_their_actions() {
    let engine = Engine::new();
    engine.add_rule(Rule::new("discount", "vipLevel >= 10 && !inBlacklist", |_| {
                        Ok(Value::Int(30))
                    }))
          .unwrap();

    let vars = HashMap::from([("vipLevel".to_string(), Value::Int(10)),
                              ("inBlacklist".to_string(), Value::Bool(false))]);

    let matched = engine.match_rules(&vars, &HashMap::new()).unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].execute(None).unwrap(), Value::Int(30));
}

#[test]
fn failing_actions_surface_their_error() {
    let rule = Rule::new("always fails", "true", |_| Err("failed".into()));
    let err = rule.execute(Some(&Value::Str("input".into()))).unwrap_err();
    assert_eq!(err.to_string(), "failed");
}

#[test]
fn fault_paths_reach_the_injected_logger() {
    let messages = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&messages);

    let engine = Engine::new().with_logger(Box::new(move |message: &str| {
                                               sink.lock().unwrap().push(message.to_string());
                                           }));
    engine.add_rule(noop_rule("needs grade", "grade < 40")).unwrap();

    engine.match_rules(&HashMap::new(), &HashMap::new()).unwrap_err();

    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("needs grade"));
}

#[test]
fn concurrent_add_and_match_share_the_registry_lock() {
    let engine = Arc::new(Engine::new());

    let adders: Vec<_> =
        (0..4).map(|t| {
                  let engine = Arc::clone(&engine);
                  thread::spawn(move || {
                      for i in 0..25 {
                          engine.add_rule(noop_rule(&format!("rule-{t}-{i}"), "true")).unwrap();
                      }
                  })
              })
              .collect();

    let matchers: Vec<_> = (0..4).map(|_| {
                                     let engine = Arc::clone(&engine);
                                     thread::spawn(move || {
                                         for _ in 0..25 {
                                             engine.match_rules(&HashMap::new(), &HashMap::new())
                                                   .unwrap();
                                         }
                                     })
                                 })
                                 .collect();

    for handle in adders.into_iter().chain(matchers) {
        handle.join().unwrap();
    }

    let matched = engine.match_rules(&HashMap::new(), &HashMap::new()).unwrap();
    assert_eq!(matched.len(), 100);
}
