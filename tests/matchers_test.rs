use dirdoc::{
    match_all, match_custom, match_exact, match_extension, match_regex, DirdocError, IntoMatcher, Matcher,
    Priority,
};

#[test]
fn exact_matches_only_the_literal() {
    let m = match_exact("info.json");

    assert!(m.is_match("info.json"));
    assert!(!m.is_match("info.JSON"));
    assert!(!m.is_match("xinfo.json"));
    assert_eq!(m.priority(), Priority::EXACT);
}

#[test]
fn string_is_exact_shorthand() {
    let m = "about.md".into_matcher();

    assert!(m.is_match("about.md"));
    assert!(!m.is_match("about.mdx"));
    assert_eq!(m.priority(), Priority::EXACT);
}

#[test]
fn extension_is_case_insensitive_and_anchored() {
    let m = match_extension(".json");

    assert!(m.is_match("a.json"));
    assert!(m.is_match("a.JSON"));
    assert!(!m.is_match("a.json.bak"));
    assert!(!m.is_match("ajson"), "dot must be literal");
    assert!(m.is_match("a\nb.json"), "newlines are legal in file names");
    assert!(!m.is_match("a.json\n"));
    assert_eq!(m.priority(), Priority::PATTERN);
}

#[test]
fn regex_is_unanchored() {
    let m = match_regex(r"^\d{4}-").unwrap();

    assert!(m.is_match("2024-fall"));
    assert!(!m.is_match("fall-2024"));
    assert_eq!(m.priority(), Priority::PATTERN);

    let m = match_regex("draft").unwrap();
    assert!(m.is_match("my-draft-notes"));
}

#[test]
fn invalid_regex_fails_at_construction() {
    let err = match_regex("(unclosed").unwrap_err();

    match err {
        DirdocError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "(unclosed"),
        other => panic!("expected InvalidPattern, got {other:?}"),
    }
}

#[test]
fn catch_all_matches_anything() {
    let m = match_all();

    assert!(m.is_match(""));
    assert!(m.is_match(".hidden"));
    assert_eq!(m.priority(), Priority::ANY);
}

#[test]
fn custom_uses_caller_priority() {
    let m = match_custom(Priority(0), |name| name.starts_with('_'));

    assert!(m.is_match("_layout"));
    assert!(!m.is_match("layout"));
    assert_eq!(m.priority(), Priority(0));
}

#[test]
fn priority_ordering_is_strict() {
    assert!(Priority::EXACT.beats(Priority::PATTERN));
    assert!(Priority::PATTERN.beats(Priority::ANY));
    assert!(!Priority::PATTERN.beats(Priority::PATTERN));
    assert!(!Priority::ANY.beats(Priority::EXACT));
}
