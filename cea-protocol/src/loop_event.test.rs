use super::*;

#[test]
fn token_usage_totals() {
    let usage = TokenUsage::new(10, 5);
    assert_eq!(usage.total(), 15);
}

#[test]
fn loop_event_serializes_with_tagged_type() {
    let event = LoopEvent::TurnStarted {
        turn_id: "t1".to_string(),
        turn_number: 1,
    };
    let json = serde_json::to_value(&event).expect("serializable");
    assert_eq!(json["type"], "turn_started");
    assert_eq!(json["turn_number"], 1);
}

#[test]
fn max_turns_reached_round_trips() {
    let event = LoopEvent::MaxTurnsReached;
    let json = serde_json::to_string(&event).expect("serializable");
    let back: LoopEvent = serde_json::from_str(&json).expect("deserializable");
    assert!(matches!(back, LoopEvent::MaxTurnsReached));
}
