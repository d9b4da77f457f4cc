use std::collections::BTreeMap;

use monadic_parsec::analyzer::parsers::json::{parse_jint, parse_json};
use monadic_parsec::analyzer::prelude::*;
use monadic_parsec::config::{OutputFormat, ParsecConfig};
use monadic_parsec::{parse_document, Error, JsonValue};
use pretty_assertions::assert_eq;

fn int(n: i64) -> JsonValue {
    JsonValue::Int(n)
}

fn map(entries: Vec<(&str, JsonValue)>) -> JsonValue {
    JsonValue::Map(
        entries
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect::<BTreeMap<_, _>>(),
    )
}

#[test]
fn it_interleaves_digits() {
    let digit = sat(|c: &char| c.is_ascii_digit());
    let (values, rest) = interleave(digit, sat(|c: &char| *c == ','))
        .parse("1,2,3")
        .unwrap();
    assert_eq!(values, vec!['1', '2', '3']);
    assert_eq!(rest.as_string(), "");
}

#[test]
fn it_parses_integer_prefix() {
    let (value, rest) = parse_jint().parse("123abc").unwrap();
    assert_eq!(value, 123);
    assert_eq!(rest.as_string(), "abc");
}

#[test]
fn it_parses_list() {
    let (value, rest) = parse_json().parse("[1,2,3]").unwrap();
    assert_eq!(value, JsonValue::List(vec![int(1), int(2), int(3)]));
    assert!(rest.is_empty());
}

#[test]
fn it_parses_map() {
    let (value, rest) = parse_json().parse(r#"{"x":1,"b":[1,2,3]}"#).unwrap();
    assert_eq!(
        value,
        map(vec![
            ("x", int(1)),
            ("b", JsonValue::List(vec![int(1), int(2), int(3)])),
        ])
    );
    assert!(rest.is_empty());
}

#[test]
fn it_parses_nested_document() {
    let input = r#"{"name":"parsec","tags":["a","b"],"meta":{"depth":[[1],[2,[3]]]}}"#;
    let (value, rest) = parse_json().parse(input).unwrap();
    assert!(rest.is_empty());

    let expected = map(vec![
        ("name", JsonValue::from("parsec")),
        ("tags", JsonValue::List(vec!["a".into(), "b".into()])),
        (
            "meta",
            map(vec![(
                "depth",
                JsonValue::List(vec![
                    JsonValue::List(vec![int(1)]),
                    JsonValue::List(vec![int(2), JsonValue::List(vec![int(3)])]),
                ]),
            )]),
        ),
    ]);
    assert_eq!(value, expected);
}

#[test]
fn it_handles_deep_nesting() {
    let depth = 50;
    let input = format!("{}1{}", "[".repeat(depth), "]".repeat(depth));
    let (mut value, rest) = parse_json().parse(input.as_str()).unwrap();
    assert!(rest.is_empty());

    for _ in 0..depth {
        value = match value {
            JsonValue::List(mut items) => items.remove(0),
            other => panic!("expected list, got {other}"),
        };
    }
    assert_eq!(value, int(1));
}

#[test]
fn it_handles_long_flat_lists() {
    let items = (0..5_000).map(|n| n.to_string()).collect::<Vec<_>>();
    let input = format!("[{}]", items.join(","));
    let (value, rest) = parse_json().parse(input.as_str()).unwrap();
    assert!(rest.is_empty());
    match value {
        JsonValue::List(values) => {
            assert_eq!(values.len(), 5_000);
            assert_eq!(values[4_999], int(4_999));
        }
        other => panic!("expected list, got {other}"),
    }
}

#[test]
fn it_reports_empty_stream_as_no_match() {
    assert!(sat(|c: &char| c.is_ascii_digit()).parse("").is_none());
    assert!(parse_json().parse("").is_none());
}

#[test]
fn it_parses_document_and_renders() {
    let config = ParsecConfig {
        output: OutputFormat::Compact,
        ..ParsecConfig::default()
    };
    let value = parse_document("\n{\"b\":[1,2],\"a\":\"x\"}\n", &config).unwrap();
    assert_eq!(value.render(config.output).unwrap(), r#"{"a":"x","b":[1,2]}"#);
}

#[test]
fn it_rejects_trailing_input_in_strict_mode() {
    let result = parse_document("[1,2]]", &ParsecConfig::default());
    match result {
        Err(Error::TrailingInput { offset, remainder }) => {
            assert_eq!(offset, 5);
            assert_eq!(remainder, "]");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
