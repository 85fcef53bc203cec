use dirdoc::{parsers, Collector, ListCollector, MapCollector};
use serde_json::json;

#[test]
fn map_collector_keys_by_name() {
    let mut c = MapCollector::new();
    c.add("a", json!(1));
    c.add("b", json!({ "v": 2 }));

    assert_eq!(c.get(), json!({ "a": 1, "b": { "v": 2 } }));
}

#[test]
fn map_collector_last_write_wins() {
    let mut c = MapCollector::new();
    c.add("a", json!("x"));
    c.add("b", json!("y"));
    c.add("a", json!("z"));

    assert_eq!(c.get(), json!({ "a": "z", "b": "y" }));
}

#[test]
fn list_collector_injects_name() {
    let mut c = ListCollector::new();
    c.add("a", json!({ "v": 1 }));
    c.add("b", json!({ "v": 2 }));

    assert_eq!(
        c.get(),
        json!([
            { "v": 1, "_name": "a" },
            { "v": 2, "_name": "b" },
        ])
    );
}

#[test]
fn list_collector_keeps_duplicates_in_order() {
    let mut c = ListCollector::new();
    c.add("z", json!({}));
    c.add("a", json!({}));
    c.add("z", json!({}));

    let names: Vec<_> = c.get().as_array().unwrap().iter().map(|d| d["_name"].clone()).collect();
    assert_eq!(names, vec![json!("z"), json!("a"), json!("z")]);
}

#[test]
fn list_collector_wraps_non_mappings() {
    let mut c = ListCollector::new();
    c.add("notes.txt", json!("hi"));
    c.add("team.json", json!(["ann", "bo"]));

    assert_eq!(
        c.get(),
        json!([
            { "value": "hi", "_name": "notes.txt" },
            { "value": ["ann", "bo"], "_name": "team.json" },
        ])
    );
}

#[test]
fn reset_empties_both_collectors() {
    let mut map = MapCollector::new();
    map.add("a", json!(1));
    map.reset();
    assert_eq!(map.get(), json!({}));

    let mut list = ListCollector::new();
    list.add("a", json!({}));
    list.reset();
    assert_eq!(list.get(), json!([]));
}

#[test]
fn take_returns_document_and_resets() {
    let mut c = ListCollector::new();
    c.add("a", json!({ "v": 1 }));

    assert_eq!(c.take(), json!([{ "v": 1, "_name": "a" }]));
    assert_eq!(c.get(), json!([]));
}

#[test]
fn builtin_parsers() {
    assert_eq!(parsers::raw(b"hi").unwrap(), json!({ "contents": "hi" }));
    assert_eq!(parsers::json(br#"{"k":1}"#).unwrap(), json!({ "k": 1 }));
    assert_eq!(parsers::text(b"plain").unwrap(), json!("plain"));
    assert_eq!(parsers::lines(b"one\ntwo\r\n").unwrap(), json!(["one", "two"]));

    assert!(parsers::json(b"{ nope").is_err());
    assert!(parsers::text(&[0xff, 0xfe]).is_err());
    assert_eq!(parsers::raw(&[0xff]).unwrap(), json!({ "contents": "\u{fffd}" }));
}
