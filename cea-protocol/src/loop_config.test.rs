use super::*;

#[test]
fn defaults_are_unbounded_turns_with_continuation_enabled() {
    let config = LoopConfig::default();
    assert_eq!(config.max_turns, None);
    assert!(config.auto_continue_on_incomplete_todos);
    assert_eq!(config.tool_timeout_ms, 120_000);
}

#[test]
fn constants_match_spec_ceilings() {
    assert_eq!(MANUAL_TOOL_LOOP_MAX_STEPS, 200);
    assert_eq!(TODO_CONTINUATION_MAX_LOOPS, 5);
}
