//! # Parser Combinators
//!
//! Combinators that are more naturally written as a direct function of the
//! stream than as a do-block. Each one implements [`Parse`] and is wrapped in
//! a [`Parser`] by the constructor functions in [`prelude`](super::prelude).
//!
//! ## Combinator Types
//!
//! * **Primitives**: `Item`, `MZero`
//! * **Alternative**: `Choice`
//! * **Repetition**: `Repeat`, `EverythingUntil`
//! * **Deferral**: `Lazy`
//!
//! `Repeat` and `EverythingUntil` loop instead of recursing through the
//! do-block interpreter, so the call stack does not grow with the number of
//! repetitions.

use std::marker::PhantomData;
use std::rc::Rc;

use super::core::{Parse, ParseResult, Parser};
use super::stream::TokenStream;

/// A deferred supplier of a parser, used to break self-reference in grammars.
pub type Thunk<T, O> = Rc<dyn Fn() -> Parser<T, O>>;

/// Item: Consumes and returns exactly one token
///
/// Fails on an empty stream.
pub struct Item<T> {
    _phantom: PhantomData<T>,
}

impl<T> Item<T> {
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for Item<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Parse<T, T> for Item<T> {
    fn run(&self, input: TokenStream<T>) -> ParseResult<T, T> {
        let head = input.head()?.clone();
        Some((head, input.tail()?))
    }
}

/// MZero: Always fails without consuming anything
pub struct MZero<T, O> {
    _phantom: PhantomData<(T, O)>,
}

impl<T, O> MZero<T, O> {
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T, O> Default for MZero<T, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, O> Parse<T, O> for MZero<T, O> {
    fn run(&self, _input: TokenStream<T>) -> ParseResult<T, O> {
        None
    }
}

/// Choice: Ordered choice between exactly two alternatives
///
/// The first alternative runs on the current stream. Only if it fails does
/// the second one run, on that same stream. The first success wins; there is
/// no longest-match and no ambiguity resolution.
pub struct Choice<T, O> {
    first: Parser<T, O>,
    second: Parser<T, O>,
}

impl<T, O> Choice<T, O> {
    pub fn new(first: Parser<T, O>, second: Parser<T, O>) -> Self {
        Self { first, second }
    }
}

impl<T, O> Parse<T, O> for Choice<T, O> {
    fn run(&self, input: TokenStream<T>) -> ParseResult<T, O> {
        match self.first.run(input.clone()) {
            Some(result) => Some(result),
            None => {
                tracing::trace!(
                    target: "parsec::choice",
                    position = input.position(),
                    "first alternative failed, trying second"
                );
                self.second.run(input)
            }
        }
    }
}

/// Repeat: Applies a parser zero or more times
///
/// Collects results until the inner parser fails or succeeds without
/// consuming anything, then returns them with the stream as it was before
/// that attempt. The value of a non-consuming attempt is dropped. It never
/// fails itself.
pub struct Repeat<T, O> {
    parser: Parser<T, O>,
}

impl<T, O> Repeat<T, O> {
    pub fn new(parser: Parser<T, O>) -> Self {
        Self { parser }
    }
}

impl<T, O> Parse<T, Vec<O>> for Repeat<T, O> {
    fn run(&self, input: TokenStream<T>) -> ParseResult<T, Vec<O>> {
        let mut results = Vec::new();
        let mut current = input;

        while let Some((value, rest)) = self.parser.run(current.clone()) {
            // A success that consumes nothing would repeat forever.
            if rest.position() == current.position() {
                break;
            }
            results.push(value);
            current = rest;
        }

        tracing::trace!(
            target: "parsec::repeat",
            position = current.position(),
            items_collected = results.len(),
            "repeat stopped"
        );

        Some((results, current))
    }
}

/// EverythingUntil: Collects tokens up to a terminator
///
/// Consumes tokens one at a time until one satisfies the predicate. The
/// terminator is consumed but not included in the result. Fails if the
/// stream runs out first.
pub struct EverythingUntil<T, F> {
    predicate: F,
    _phantom: PhantomData<T>,
}

impl<T, F> EverythingUntil<T, F> {
    pub fn new(predicate: F) -> Self {
        Self {
            predicate,
            _phantom: PhantomData,
        }
    }
}

impl<T, F> Parse<T, Vec<T>> for EverythingUntil<T, F>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    fn run(&self, input: TokenStream<T>) -> ParseResult<T, Vec<T>> {
        let mut collected = Vec::new();
        let mut current = input;

        loop {
            let Some(token) = current.head().cloned() else {
                tracing::trace!(
                    target: "parsec::everythinguntil",
                    items_collected = collected.len(),
                    "input exhausted before terminator"
                );
                return None;
            };
            current = current.tail()?;
            if (self.predicate)(&token) {
                return Some((collected, current));
            }
            collected.push(token);
        }
    }
}

/// Lazy: Builds its parser only when run
///
/// The thunk is forced on every run, never at construction, which is what
/// lets a grammar rule refer to itself.
pub struct Lazy<T, O> {
    thunk: Thunk<T, O>,
}

impl<T, O> Lazy<T, O> {
    pub fn new(thunk: Thunk<T, O>) -> Self {
        Self { thunk }
    }
}

impl<T, O> Parse<T, O> for Lazy<T, O> {
    fn run(&self, input: TokenStream<T>) -> ParseResult<T, O> {
        (self.thunk)().run(input)
    }
}
