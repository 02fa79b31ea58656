use serde_json::json;

use super::*;

#[test]
fn rewrites_a_bare_error_object() {
    let input = json!({"name": "TypeError", "message": "boom", "stack": "at foo.js:1"});
    let output = deep_serialize_errors(input);
    assert_eq!(
        output,
        json!({"__error": true, "name": "TypeError", "message": "boom", "stack": "at foo.js:1"})
    );
}

#[test]
fn defaults_missing_name_and_stack() {
    let input = json!({"message": "boom", "stack": "at foo.js:1"});
    let output = deep_serialize_errors(input);
    assert_eq!(output["name"], json!("Error"));
    assert_eq!(output["__error"], json!(true));
}

#[test]
fn maps_arrays_element_wise() {
    let input = json!([{"name": "Err", "message": "a"}, "plain string", 42]);
    let output = deep_serialize_errors(input);
    assert_eq!(output[0]["__error"], json!(true));
    assert_eq!(output[1], json!("plain string"));
    assert_eq!(output[2], json!(42));
}

#[test]
fn maps_plain_objects_field_wise_without_rewriting() {
    let input = json!({"result": "ok", "count": 3});
    let output = deep_serialize_errors(input);
    assert_eq!(output, json!({"result": "ok", "count": 3}));
}

#[test]
fn recurses_into_nested_errors() {
    let input = json!({"outcome": {"name": "Err", "message": "nested failure"}});
    let output = deep_serialize_errors(input);
    assert_eq!(output["outcome"]["__error"], json!(true));
}

#[test]
fn a_message_only_object_is_not_error_like() {
    let input = json!({"message": "just a note"});
    let output = deep_serialize_errors(input);
    assert_eq!(output, json!({"message": "just a note"}));
}
