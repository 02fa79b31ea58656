use super::*;

#[test]
fn parses_bare_tag() {
    let anchor = parse_tag("7#mq").expect("tag parses");
    assert_eq!(anchor.line, 7);
    assert_eq!(anchor.hash, "MQ");
}

#[test]
fn parses_diff_prefixed_tag() {
    let anchor = parse_tag(">>> 12#ZP | some line").expect("tag parses");
    assert_eq!(anchor.line, 12);
    assert_eq!(anchor.hash, "ZP");
}

#[test]
fn parses_grep_style_embedded_tag() {
    let anchor = parse_tag("./file.ts:7#MQ | const x = 1;").expect("tag parses");
    assert_eq!(anchor.line, 7);
    assert_eq!(anchor.hash, "MQ");
}

#[test]
fn rejects_missing_tag() {
    assert!(parse_tag("no tag here").is_none());
}

#[test]
fn format_tag_round_trips() {
    let tag = format_tag(7, "MQ");
    let anchor = parse_tag(&tag).expect("tag parses");
    assert_eq!(anchor, Anchor::new(7, "MQ"));
}
