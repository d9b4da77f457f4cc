//! A small JSON-like grammar over characters.
//!
//! Integers are unsigned decimal, strings end at the next `"` with no escape
//! handling, lists and maps hold at least one element, and whitespace is not
//! skipped anywhere.

use std::collections::BTreeMap;

use crate::analyzer::prelude::*;
use crate::ast::JsonValue;
use crate::steps;

/// Any value: integer, string, map or list, tried in that order.
pub fn parse_json() -> Parser<char, JsonValue> {
    choice(
        parse_jint().map(JsonValue::Int),
        choice(
            parse_jstr().map(JsonValue::Str),
            choice(
                lazy(parse_jmap).map(JsonValue::Map),
                lazy(parse_jlist).map(JsonValue::List),
            ),
        ),
    )
}

// 基本的なパーサー
pub fn parse_digit() -> Parser<char, i64> {
    run_do(|| steps! {
        let c = sat(|c: &char| c.is_ascii_digit());
        done match c.to_digit(10) {
            Some(d) => unit(i64::from(d)),
            None => mzero(),
        }
    })
}

/// One or more digits, most significant first. A literal that does not fit
/// in an `i64` is a no-match.
pub fn parse_jint() -> Parser<char, i64> {
    run_do(|| steps! {
        let (first, rest) = sequence(parse_digit(), repeat(parse_digit()));
        done match accumulate_digits(first, &rest) {
            Some(value) => unit(value),
            None => mzero(),
        }
    })
}

fn accumulate_digits(first: i64, rest: &[i64]) -> Option<i64> {
    let value = rest
        .iter()
        .try_fold(first, |acc, digit| acc.checked_mul(10)?.checked_add(*digit));
    if value.is_none() {
        tracing::trace!(
            target: "parsec::json",
            digits = rest.len() + 1,
            "integer literal overflows i64"
        );
    }
    value
}

pub fn parse_jstr() -> Parser<char, String> {
    run_do(|| steps! {
        token('"');
        let chars = everythinguntil(|c: &char| *c == '"');
        return chars.into_iter().collect::<String>()
    })
}

pub fn parse_name() -> Parser<char, String> {
    parse_jstr()
}

// 複合パーサー
pub fn parse_jlist() -> Parser<char, Vec<JsonValue>> {
    run_do(|| steps! {
        token('[');
        let items = interleave(lazy(parse_json), token(','));
        token(']');
        return items.clone()
    })
}

/// `{"name":value,...}`. A repeated name keeps its last value.
pub fn parse_jmap() -> Parser<char, BTreeMap<String, JsonValue>> {
    run_do(|| steps! {
        token('{');
        let entries = interleave(parse_nvp(), token(','));
        token('}');
        return entries.iter().cloned().collect::<BTreeMap<_, _>>()
    })
}

pub fn parse_nvp() -> Parser<char, (String, JsonValue)> {
    run_do(|| {
        Step::bind(parse_name(), |name: String| {
            Step::then(token(':'), move || {
                let name = name.clone();
                Step::bind(lazy(parse_json), move |value: JsonValue| {
                    Step::Return((name.clone(), value))
                })
            })
        })
    })
}
