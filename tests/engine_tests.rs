// Integration tests for the step driver

use pretty_assertions::assert_eq;
use stepviz::config::EngineConfig;
use stepviz::memory::value::{Value, ValueKind};
use stepviz::snapshot::HistoryKind;
use stepviz::{Engine, ExecutionStatus, Snapshot};

fn load(source: &str) -> Engine {
    let mut engine = Engine::default();
    engine.load_source(source);
    engine
}

/// Step until completion or failure, returning every snapshot produced
fn run_to_end(engine: &mut Engine) -> Vec<Snapshot> {
    let mut snapshots = Vec::new();
    while !engine.status().is_terminal() {
        snapshots.push(engine.advance_one_step());
    }
    snapshots
}

fn descriptions(snapshot: &Snapshot) -> Vec<&str> {
    snapshot
        .history
        .iter()
        .map(|entry| entry.description.as_str())
        .collect()
}

#[test]
fn test_completion_is_idempotent() {
    let mut engine = load("let a = 1;\nconsole.log(a);");
    let snapshots = run_to_end(&mut engine);
    let last = snapshots.last().cloned().unwrap();

    assert!(last.is_complete);
    assert_eq!(last.status, ExecutionStatus::Complete);
    for _ in 0..3 {
        assert_eq!(engine.advance_one_step(), last);
    }
}

#[test]
fn test_completion_deactivates_loops() {
    let mut engine = load("for (let i = 0; i < 3; i++) {\n}");
    let first = engine.advance_one_step();
    assert_eq!(first.active_loops().count(), 1);

    let last = run_to_end(&mut engine).pop().unwrap();
    assert!(last.is_complete);
    assert_eq!(last.active_loops().count(), 0);
    assert_eq!(last.loops.len(), 1);
}

#[test]
fn test_reset_returns_to_idle() {
    let mut engine = load("let a = 1;\nfor (let i = 0; i < 2; i++) {\nconsole.log(a);\n}");
    run_to_end(&mut engine);

    engine.reset();
    let state = engine.current_state();
    assert_eq!(state.status, ExecutionStatus::Idle);
    assert!(state.history.is_empty());
    assert!(state.output.is_empty());
    assert!(state.variables.is_empty());
    assert!(state.loops.is_empty());
    assert_eq!(state.current_line, 0);
    assert_eq!(state.steps_taken, 0);
    assert_eq!(state.call_stack, vec!["main"]);

    // The program is still loaded
    assert_eq!(engine.advance_one_step().current_line, 1);
}

#[test]
fn test_declaration_creates_changed_binding() {
    let mut engine = load("let x = 5;");
    let snapshot = engine.advance_one_step();

    let x = snapshot.variable("x").unwrap();
    assert_eq!(x.value, Value::Number(5.0));
    assert_eq!(x.declared_type, ValueKind::Number);
    assert_eq!(x.display, "5");
    assert!(x.changed);
    assert_eq!(descriptions(&snapshot), vec!["Set x = 5"]);
    assert_eq!(snapshot.history[0].kind, HistoryKind::Assignment);
}

#[test]
fn test_change_flags_follow_the_last_step() {
    let mut engine = load("let a = 1;\nlet b = 2;\na = 1;\nb = 3;");
    engine.advance_one_step();
    let second = engine.advance_one_step();
    assert!(!second.variable("a").unwrap().changed);
    assert!(second.variable("b").unwrap().changed);

    // Rewriting the same value is not a change
    let third = engine.advance_one_step();
    assert!(!third.variable("a").unwrap().changed);

    let fourth = engine.advance_one_step();
    assert!(fourth.variable("b").unwrap().changed);
    assert_eq!(descriptions(&fourth)[3], "b: 2 → 3");
}

#[test]
fn test_for_loop_tracks_manual_increments() {
    let source = "for (let i = 0; i < 3; i = i + 1) {\n  i = i + 1;\n  i = i + 1;\n  i = i + 1;\n}";
    let mut engine = load(source);
    let snapshots = run_to_end(&mut engine);

    // Header plus three increments, then completion
    let after_third = &snapshots[3];
    let tracker = &after_third.loops[0];
    assert_eq!(tracker.id, "loop_0");
    assert_eq!(tracker.controlling_variable, "i");
    assert_eq!(tracker.iteration_history, vec![0.0, 1.0, 2.0, 3.0]);
    assert_eq!(tracker.current_value, 3.0);
    assert_eq!(tracker.bound_value, 3.0);
    assert!(tracker.is_active);
    assert_eq!(
        descriptions(after_third),
        vec!["Loop started", "i: 0 → 1", "i: 1 → 2", "i: 2 → 3"]
    );
}

#[test]
fn test_while_loop_logs_condition() {
    let source = "let n = 0;\nwhile (n < 2) {\nn = n + 1;\n}";
    let mut engine = load(source);
    let last = run_to_end(&mut engine).pop().unwrap();

    assert_eq!(
        descriptions(&last),
        vec!["Set n = 0", "Loop: continuing", "n: 0 → 1"]
    );
    let tracker = &last.loops[0];
    assert_eq!(tracker.iteration_history, vec![0.0, 1.0]);
    assert_eq!(tracker.bound_value, 2.0);
}

#[test]
fn test_conditions_never_branch() {
    let source = "let x = 1;\nif (x > 5) {\nconsole.log(\"big\");\n} else {\nconsole.log(\"small\");\n}";
    let mut engine = load(source);
    let last = run_to_end(&mut engine).pop().unwrap();

    assert_eq!(last.output, vec!["big", "small"]);
    assert_eq!(
        descriptions(&last),
        vec![
            "Set x = 1",
            "Condition: ✗ false",
            "Output: big",
            "Else branch",
            "Output: small"
        ]
    );
}

#[test]
fn test_outputs_accumulate_in_order() {
    let mut engine = load("console.log(1);\nconsole.log(2);");

    let first = engine.advance_one_step();
    assert_eq!(first.output, vec!["1"]);

    let second = engine.advance_one_step();
    assert_eq!(second.output, vec!["1", "2"]);
    let kinds: Vec<HistoryKind> = second.history.iter().map(|entry| entry.kind).collect();
    assert_eq!(kinds, vec![HistoryKind::Output, HistoryKind::Output]);
    assert_eq!(descriptions(&second), vec!["Output: 1", "Output: 2"]);
}

#[test]
fn test_output_joins_arguments() {
    let mut engine = load("let n = 3;\nconsole.log(\"n is\", n, [1, 2]);");
    let last = run_to_end(&mut engine).pop().unwrap();
    assert_eq!(last.output, vec!["n is 3 [1,2]"]);
}

#[test]
fn test_const_reassignment_fails_the_step() {
    let source = "const limit = 3;\nconsole.log(limit);\nlimit = 4;\nconsole.log(\"unreached\");";
    let mut engine = load(source);
    let snapshots = run_to_end(&mut engine);
    let failed = snapshots.last().cloned().unwrap();

    assert_eq!(failed.status, ExecutionStatus::Error);
    assert_eq!(failed.current_line, 3);
    assert_eq!(
        failed.error.as_deref(),
        Some("Error at line 3: Assignment to constant variable 'limit'")
    );
    assert_eq!(failed.output, vec!["3"]);
    assert_eq!(descriptions(&failed), vec!["Set limit = 3", "Output: 3"]);
    assert_eq!(failed.variable("limit").unwrap().value, Value::Number(3.0));
    assert_eq!(failed.steps_taken, 2);

    // Stepping after a failure changes nothing until reset
    assert_eq!(engine.advance_one_step(), failed);
    engine.reset();
    assert_eq!(engine.status(), ExecutionStatus::Idle);
}

#[test]
fn test_step_limit_is_configurable() {
    let mut engine = Engine::new(EngineConfig {
        max_steps: Some(2),
        ..EngineConfig::default()
    });
    engine.load_source("let i = 0;\nwhile (i < 10) {\ni = i + 1;\n}");
    let last = run_to_end(&mut engine).pop().unwrap();

    assert_eq!(last.status, ExecutionStatus::Error);
    assert_eq!(last.current_line, 3);
    assert_eq!(last.error.as_deref(), Some("Error at line 3: Step limit of 2 exceeded"));
}

#[test]
fn test_inert_lines_are_logged() {
    let source = "function greet(name) {\nreturn \"hi \" + name;\n}\ngreet(\"Ada\");\ni++;";
    let mut engine = load(source);
    let last = run_to_end(&mut engine).pop().unwrap();

    assert_eq!(
        descriptions(&last),
        vec![
            "Function: greet",
            "Return: \"hi <undefined: name>\"",
            "Called: greet()",
            "Line 5"
        ]
    );
    assert!(last.variables.is_empty());
}

#[test]
fn test_history_timestamps_are_sequential() {
    let mut engine = load("let a = 1;\nlet b = 2;\nlet c = 3;");
    let last = run_to_end(&mut engine).pop().unwrap();
    let stamps: Vec<u64> = last.history.iter().map(|entry| entry.timestamp).collect();
    assert_eq!(stamps, vec![0, 1, 2]);
}

#[test]
fn test_snapshot_is_independent_of_later_steps() {
    let mut engine = load("let a = 1;\na = 2;");
    let first = engine.advance_one_step();
    engine.advance_one_step();
    assert_eq!(first.variable("a").unwrap().value, Value::Number(1.0));
    assert_eq!(first.history.len(), 1);
}

#[test]
fn test_let_without_initializer() {
    let mut engine = load("let x;");
    let snapshot = engine.advance_one_step();
    let x = snapshot.variable("x").unwrap();
    assert_eq!(x.value, Value::Undefined);
    assert_eq!(x.declared_type, ValueKind::Undefined);
    assert_eq!(descriptions(&snapshot), vec!["Set x = undefined"]);
}

#[test]
fn test_arrow_function_is_stored_as_text() {
    let mut engine = load("const add = (a, b) => a + b;");
    let snapshot = engine.advance_one_step();

    let add = snapshot.variable("add").unwrap();
    assert_eq!(add.value, Value::Symbolic("(a, b) => a + b".into()));
    assert_eq!(add.declared_type, ValueKind::Symbolic);
    assert_eq!(descriptions(&snapshot), vec!["Set add = \"(a, b) => a + b\""]);
}

#[test]
fn test_load_source_replaces_a_run_program() {
    let mut engine = load("let a = 1;\nlet b = 2;\nconsole.log(a);");
    engine.advance_one_step();
    let before_reload = engine.advance_one_step();

    engine.load_source("let z = 9;");
    assert_eq!(engine.status(), ExecutionStatus::Idle);
    assert_eq!(engine.line_count(), 1);
    assert_eq!(engine.source(), "let z = 9;");

    let state = engine.current_state();
    assert!(state.variables.is_empty());
    assert!(state.history.is_empty());
    assert_eq!(state.steps_taken, 0);

    let first = engine.advance_one_step();
    assert_eq!(first.current_line, 1);
    assert_eq!(first.variables.len(), 1);
    assert_eq!(first.variable("z").unwrap().value, Value::Number(9.0));
    assert!(first.variable("a").is_none());
    assert_eq!(descriptions(&first), vec!["Set z = 9"]);
    assert!(engine.advance_one_step().is_complete);

    // Snapshots taken before the reload keep the old program's state
    assert_eq!(before_reload.variable("a").unwrap().value, Value::Number(1.0));
    assert_eq!(before_reload.current_line, 2);
    assert_eq!(before_reload.history.len(), 2);
}

#[test]
fn test_extreme_numbers_display_in_exponent_form() {
    let mut engine = load("let tiny = 0.0000001;\nlet big = 100000000000 * 100000000000;");
    let last = run_to_end(&mut engine).pop().unwrap();

    assert_eq!(last.variable("tiny").unwrap().display, "1e-7");
    assert_eq!(last.variable("big").unwrap().display, "1e+22");
    assert_eq!(descriptions(&last), vec!["Set tiny = 1e-7", "Set big = 1e+22"]);
}
