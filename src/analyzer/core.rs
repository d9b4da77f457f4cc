//! # Core Parser Definitions
//!
//! This module defines the parsing contract ([`Parse`]), the concrete parser
//! value ([`Parser`]) and the monad family it belongs to ([`Parsec`]).
//!
//! A parser is a pure function from a [`TokenStream`] to an optional
//! `(value, rest)` pair. `None` is the only failure there is: it carries no
//! position and no message, so an alternative can always be retried from the
//! original stream.

use std::marker::PhantomData;
use std::rc::Rc;

use super::monad::{Monad, Monadic};
use super::stream::TokenStream;

/// Result type for parsing operations.
///
/// On success, the produced value and the stream that was not consumed.
/// On failure, `None`.
pub type ParseResult<T, O> = Option<(O, TokenStream<T>)>;

/// Parse trait defines the core parsing interface.
///
/// # Type Parameters
///
/// * `T` - The token type
/// * `O` - The output value type
pub trait Parse<T, O> {
    /// Applies the parser to `input`.
    ///
    /// Implementations must be deterministic: running twice on the same
    /// stream yields the same result.
    fn run(&self, input: TokenStream<T>) -> ParseResult<T, O>;
}

impl<T, O, F> Parse<T, O> for F
where
    F: Fn(TokenStream<T>) -> ParseResult<T, O>,
{
    fn run(&self, input: TokenStream<T>) -> ParseResult<T, O> {
        self(input)
    }
}

/// A parser value: a deferred computation that has not seen any input yet.
///
/// Cloning only bumps a reference count, so combinators take parsers by value.
pub struct Parser<T, O> {
    inner: Rc<dyn Parse<T, O>>,
}

impl<T, O> Clone for Parser<T, O> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T, O> Parse<T, O> for Parser<T, O> {
    fn run(&self, input: TokenStream<T>) -> ParseResult<T, O> {
        self.inner.run(input)
    }
}

impl<T: 'static, O: 'static> Parser<T, O> {
    pub fn new<P: Parse<T, O> + 'static>(parser: P) -> Self {
        Self {
            inner: Rc::new(parser),
        }
    }

    /// Runs the parser on anything convertible into a token stream.
    pub fn parse(&self, input: impl Into<TokenStream<T>>) -> ParseResult<T, O> {
        self.run(input.into())
    }

    /// Sequences `self` with a continuation.
    ///
    /// On failure of `self` the failure propagates untouched. On success the
    /// parser built by `f` runs on the remaining input; if it fails, the
    /// tokens consumed by `self` are not given back.
    pub fn bind<U, F>(self, f: F) -> Parser<T, U>
    where
        U: 'static,
        F: Fn(O) -> Parser<T, U> + 'static,
    {
        Parser::new(move |input: TokenStream<T>| {
            let (value, rest) = self.run(input)?;
            f(value).run(rest)
        })
    }

    /// Runs `self` for its effect and keeps the value of `next`.
    pub fn then<U: 'static>(self, next: Parser<T, U>) -> Parser<T, U> {
        self.bind(move |_| next.clone())
    }

    pub fn map<U, F>(self, f: F) -> Parser<T, U>
    where
        U: 'static,
        F: Fn(O) -> U + 'static,
    {
        Parser::new(move |input: TokenStream<T>| {
            self.run(input).map(|(value, rest)| (f(value), rest))
        })
    }
}

/// The parser monad family: `Parsec<T>::Of<A>` is `Parser<T, A>`.
pub struct Parsec<T> {
    _phantom: PhantomData<T>,
}

impl<T: 'static> Monad for Parsec<T> {
    type Of<A: Clone + 'static> = Parser<T, A>;

    /// Succeeds with `value` without consuming anything.
    fn unit<A: Clone + 'static>(value: A) -> Self::Of<A> {
        Parser::new(move |input: TokenStream<T>| Some((value.clone(), input)))
    }

    fn bind<A, B, F>(m: Self::Of<A>, f: F) -> Self::Of<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> Self::Of<B> + 'static,
    {
        m.bind(f)
    }
}

impl<T: 'static, O: Clone + 'static> Monadic for Parser<T, O> {
    type Family = Parsec<T>;
    type Value = O;

    fn into_monad(self) -> Parser<T, O> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn any_char() -> Parser<char, char> {
        Parser::new(|input: TokenStream<char>| {
            let head = *input.head()?;
            Some((head, input.tail()?))
        })
    }

    #[test]
    fn test_unit_consumes_nothing() {
        let parser = Parsec::<char>::unit(7);
        let (value, rest) = parser.parse("abc").unwrap();
        assert_eq!(value, 7);
        assert_eq!(rest.as_string(), "abc");
    }

    #[test]
    fn test_bind_threads_remaining_input() {
        let parser = any_char().bind(|a| any_char().map(move |b| format!("{a}{b}")));
        let (value, rest) = parser.parse("xyz").unwrap();
        assert_eq!(value, "xy");
        assert_eq!(rest.as_string(), "z");
    }

    #[test]
    fn test_bind_propagates_failure() {
        let parser = any_char().bind(|_| any_char());
        assert!(parser.parse("x").is_none());
        assert!(parser.parse("").is_none());
    }

    #[test]
    fn test_then_discards_first_value() {
        let parser = any_char().then(Parsec::<char>::unit("done"));
        let (value, rest) = parser.parse("ab").unwrap();
        assert_eq!(value, "done");
        assert_eq!(rest.as_string(), "b");
    }

    #[test]
    fn test_monad_then_consumes_first_and_keeps_second() {
        let parser = Parsec::<char>::then(any_char(), || Parsec::<char>::unit(42));
        let (value, rest) = parser.parse("ab").unwrap();
        assert_eq!(value, 42);
        assert_eq!(rest.as_string(), "b");

        // 最初のパーサーが失敗すれば全体も失敗
        assert!(parser.parse("").is_none());
    }

    #[test]
    fn test_running_twice_is_deterministic() {
        let parser = any_char().bind(|_| any_char());
        let input = TokenStream::from("abc");
        assert_eq!(parser.run(input.clone()), parser.run(input));
    }
}
