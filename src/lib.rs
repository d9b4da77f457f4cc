//! # monadic-parsec: Monadic Parser Combinators
//!
//! A small parser-combinator library built on a generic monad abstraction
//! and a do-block interpreter that turns sequential, imperative-looking steps
//! into nested monadic binds.
//!
//! ## Layers
//!
//! * Monad and do-block interpreter ([`analyzer::monad`], [`analyzer::do_block`])
//! * Parser monad and combinators ([`analyzer::core`], [`analyzer::prelude`])
//! * An example JSON-like grammar ([`analyzer::parsers::json`]) producing [`ast::JsonValue`]
//!
//! ## Parsing Pipeline
//!
//! ```text
//! text → TokenStream<char> → parse_json → (JsonValue, rest) → parse_document checks
//! ```
//!
//! [`parse_document`] is the entry point used by the `parsec` binary. It
//! converts the payload-free parser outcome into an [`Error`] and, depending
//! on [`config::ParsecConfig`], rejects input that the grammar left unread.

pub mod analyzer;
pub mod ast;
pub mod config;
pub mod error;

// Re-exports
pub use ast::*;
pub use error::*;

use analyzer::parsers::json::parse_json;
use config::ParsecConfig;
use tracing::debug;

/// Parses a complete document with the JSON grammar.
///
/// Fails with [`Error::NoParse`] when no value can be read and, in strict
/// mode, with [`Error::TrailingInput`] when characters remain after it. The
/// offset is counted in characters of the (possibly trimmed) input.
pub fn parse_document(text: &str, config: &ParsecConfig) -> Result<JsonValue> {
    let input = if config.trim_input { text.trim() } else { text };
    debug!(
        target: "parsec::document",
        chars = input.chars().count(),
        strict = config.strict,
        "parsing document"
    );

    let (value, rest) = parse_json().parse(input).ok_or(Error::NoParse)?;

    if !rest.is_empty() {
        if config.strict {
            return Err(Error::TrailingInput {
                offset: rest.position(),
                remainder: rest.as_string(),
            });
        }
        debug!(
            target: "parsec::document",
            offset = rest.position(),
            remaining = rest.len(),
            "ignoring unconsumed input"
        );
    }

    Ok(value)
}
