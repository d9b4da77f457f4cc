use std::rc::Rc;

use super::combinators::*;
use super::core::Parsec;
use super::monad::Monad;
use crate::steps;

pub use super::core::{Parse, ParseResult, Parser};
pub use super::do_block::{run_do, Step};
pub use super::stream::TokenStream;

/// Succeeds with `value` without consuming input.
pub fn unit<T: 'static, O: Clone + 'static>(value: O) -> Parser<T, O> {
    Parsec::<T>::unit(value)
}

pub fn item<T: Clone + 'static>() -> Parser<T, T> {
    Parser::new(Item::new())
}

pub fn mzero<T: 'static, O: 'static>() -> Parser<T, O> {
    Parser::new(MZero::new())
}

/// Consumes one token if it satisfies `predicate`; otherwise fails without
/// consuming anything.
pub fn sat<T, F>(predicate: F) -> Parser<T, T>
where
    T: Clone + 'static,
    F: Fn(&T) -> bool + 'static,
{
    run_do(move || {
        Step::bind(item::<T>(), move |token: T| {
            if predicate(&token) {
                Step::Return(token)
            } else {
                Step::Substitute(mzero::<T, T>())
            }
        })
    })
}

pub fn token<T>(expected: T) -> Parser<T, T>
where
    T: Clone + PartialEq + 'static,
{
    sat(move |t: &T| *t == expected)
}

/// Ordered choice: `second` runs from the same position only if `first` fails.
pub fn choice<T: 'static, O: 'static>(first: Parser<T, O>, second: Parser<T, O>) -> Parser<T, O> {
    Parser::new(Choice::new(first, second))
}

/// Zero or more repetitions. Never fails.
pub fn repeat<T: 'static, O: 'static>(parser: Parser<T, O>) -> Parser<T, Vec<O>> {
    Parser::new(Repeat::new(parser))
}

/// Zero or one occurrence. Never fails.
pub fn option<T, O>(parser: Parser<T, O>) -> Parser<T, Option<O>>
where
    T: 'static,
    O: Clone + 'static,
{
    run_do(move || steps! {
        let found = choice(parser.map(Some), unit(None));
        return found
    })
}

/// Runs `first` then `second` and pairs their results.
pub fn sequence<T, A, B>(first: Parser<T, A>, second: Parser<T, B>) -> Parser<T, (A, B)>
where
    T: 'static,
    A: Clone + 'static,
    B: Clone + 'static,
{
    run_do(move || steps! {
        let a = first;
        let b = second.clone();
        return (a.clone(), b)
    })
}

/// One or more items separated by a delimiter; delimiters are discarded.
///
/// The first item is required. After it, `(delimiter, item)` pairs are read
/// until one of them fails, in which case that pair consumes nothing.
pub fn interleave<T, O, D>(item_parser: Parser<T, O>, delimiter: Parser<T, D>) -> Parser<T, Vec<O>>
where
    T: 'static,
    O: Clone + 'static,
    D: Clone + 'static,
{
    let pairs = repeat(sequence(delimiter, item_parser.clone()));
    run_do(move || steps! {
        let first = item_parser;
        let rest = pairs.clone();
        return std::iter::once(first.clone())
            .chain(rest.into_iter().map(|(_, item)| item))
            .collect::<Vec<_>>()
    })
}

/// Collects tokens until one satisfies `predicate`; that token is consumed
/// and dropped. Fails if the input ends first.
pub fn everythinguntil<T, F>(predicate: F) -> Parser<T, Vec<T>>
where
    T: Clone + 'static,
    F: Fn(&T) -> bool + 'static,
{
    Parser::new(EverythingUntil::new(predicate))
}

/// Defers building a parser until it is run, for self-referential rules.
pub fn lazy<T, O, F>(thunk: F) -> Parser<T, O>
where
    T: 'static,
    O: 'static,
    F: Fn() -> Parser<T, O> + 'static,
{
    Parser::new(Lazy::new(Rc::new(thunk)))
}

pub fn empty_list<T: 'static, O: Clone + 'static>() -> Parser<T, Vec<O>> {
    unit(Vec::new())
}
