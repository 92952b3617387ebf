// Integration tests for snapshot contents and their JSON form

use pretty_assertions::assert_eq;
use serde_json::json;
use stepviz::interpreter::ExecutionState;
use stepviz::memory::value::Value;
use stepviz::memory::Environment;
use stepviz::snapshot::{HistoryKind, Snapshot};
use stepviz::Engine;

#[test]
fn test_capture_flags_new_and_changed_bindings() {
    let mut previous = Environment::new();
    previous.set("kept", Value::Number(1.0), false);
    previous.set("edited", Value::Str("old".into()), false);

    let mut state = ExecutionState::new("main");
    state.environment = previous.clone();
    state.environment.set("edited", Value::Str("new".into()), false);
    state.environment.set("added", Value::Bool(false), false);

    let snapshot = Snapshot::capture(&state, Some(&previous));
    let flags: Vec<(&str, bool)> = snapshot
        .variables
        .iter()
        .map(|view| (view.name.as_str(), view.changed))
        .collect();
    assert_eq!(flags, vec![("kept", false), ("edited", true), ("added", true)]);

    let unflagged = Snapshot::capture(&state, None);
    assert!(unflagged.variables.iter().all(|view| !view.changed));
}

#[test]
fn test_nan_rewrite_is_not_a_change() {
    let mut previous = Environment::new();
    previous.set("n", Value::Number(f64::NAN), false);

    let mut state = ExecutionState::new("main");
    state.environment = previous.clone();

    let snapshot = Snapshot::capture(&state, Some(&previous));
    assert!(!snapshot.variables[0].changed);
    assert_eq!(snapshot.variables[0].display, "NaN");
}

#[test]
fn test_snapshot_json_shape() {
    let mut engine = Engine::default();
    engine.load_source("let x = 5;");
    let snapshot = engine.advance_one_step();

    let value = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(
        value,
        json!({
            "current_line": 1,
            "variables": [{
                "name": "x",
                "value": {"type": "number", "value": 5.0},
                "declared_type": "number",
                "display": "5",
                "changed": true
            }],
            "call_stack": ["main"],
            "history": [{
                "line": 1,
                "description": "Set x = 5",
                "timestamp": 0,
                "kind": "assignment"
            }],
            "output": [],
            "error": null,
            "is_complete": false,
            "loops": [],
            "status": "running",
            "steps_taken": 1
        })
    );
}

#[test]
fn test_structured_and_unit_values_serialize_with_tags() {
    let array = serde_json::to_value(Value::Structured(json!([1, 2]))).unwrap();
    assert_eq!(array, json!({"type": "structured", "value": [1, 2]}));

    let undefined = serde_json::to_value(Value::Undefined).unwrap();
    assert_eq!(undefined, json!({"type": "undefined"}));
}

#[test]
fn test_loop_tracker_serializes() {
    let mut engine = Engine::default();
    engine.load_source("while (k < 4) {");
    let snapshot = engine.advance_one_step();

    let loops = serde_json::to_value(&snapshot.loops).unwrap();
    assert_eq!(
        loops,
        json!([{
            "id": "loop_0",
            "controlling_variable": "k",
            "current_value": 0.0,
            "bound_value": 4.0,
            "iteration_history": [0.0],
            "is_active": true,
            "header_line": 1
        }])
    );
    assert_eq!(snapshot.history[0].kind, HistoryKind::Loop);
    // `k` is unbound, so the condition is falsy
    assert_eq!(snapshot.history[0].description, "Loop: finished");
}
