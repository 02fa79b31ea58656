use super::*;

#[test]
fn strips_hashline_prefixes_when_majority_present() {
    let input = "  1#MQ | alpha\n  2#ZP | beta\n";
    let out = strip_copied_prefixes(input);
    assert_eq!(out, vec!["alpha".to_string(), "beta".to_string()]);
}

#[test]
fn strips_diff_plus_markers_when_majority_present() {
    let input = "+alpha\n+beta\n";
    let out = strip_copied_prefixes(input);
    assert_eq!(out, vec!["alpha".to_string(), "beta".to_string()]);
}

#[test]
fn leaves_plain_text_untouched() {
    let input = "alpha\nbeta\n";
    let out = strip_copied_prefixes(input);
    assert_eq!(out, vec!["alpha".to_string(), "beta".to_string()]);
}

#[test]
fn leaves_minority_prefixed_text_untouched() {
    let input = "alpha\nbeta\ngamma\n1#MQ | delta\n";
    let out = strip_copied_prefixes(input);
    assert_eq!(out[3], "1#MQ | delta");
}
