use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::Result;

/// A value produced by the JSON grammar.
///
/// Map ordering is not significant; a `BTreeMap` only keeps output stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum JsonValue {
    Int(i64),
    Str(String),
    List(Vec<JsonValue>),
    Map(BTreeMap<String, JsonValue>),
}

impl JsonValue {
    /// Renders the value in the requested output format.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        let rendered = match format {
            OutputFormat::Pretty => serde_json::to_string_pretty(self)?,
            OutputFormat::Compact => serde_json::to_string(self)?,
            OutputFormat::Debug => format!("{:#?}", self),
        };
        Ok(rendered)
    }
}

impl From<i64> for JsonValue {
    fn from(value: i64) -> Self {
        JsonValue::Int(value)
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::Str(value.to_string())
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(values: Vec<JsonValue>) -> Self {
        JsonValue::List(values)
    }
}

// Written in the grammar's own syntax: no whitespace and no escapes.
impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonValue::Int(n) => write!(f, "{}", n),
            JsonValue::Str(s) => write!(f, "\"{}\"", s),
            JsonValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            JsonValue::Map(entries) => {
                write!(f, "{{")?;
                for (i, (name, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "\"{}\":{}", name, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}
