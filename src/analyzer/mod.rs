//! # Analyzer (Parser) System
//!
//! A recursive-descent parser built from monadic combinators over an
//! in-memory token sequence.
//!
//! ## Core Components
//!
//! * **Token Stream**: immutable suffix views over the input ([`stream`])
//! * **Monad**: the `unit`/`bind` abstraction ([`monad`])
//! * **Do-Block Interpreter**: sequential steps as nested binds ([`do_block`])
//! * **Parser**: the parsing contract and the parser monad ([`core`])
//! * **Combinators**: ordered choice, repetition, interleaving ([`combinators`], [`prelude`])
//! * **Grammars**: parsers for concrete languages ([`parsers`])
//!
//! ## Failure Model
//!
//! A parser either succeeds with `(value, rest)` or fails with `None`.
//! Failures carry no payload, so `choice` can always retry its second
//! alternative from the original position. Binding does not backtrack: once
//! the first parser of a `bind` has consumed tokens, a failure of the
//! continuation fails the whole `bind`.
//!
//! ## Usage Example
//!
//! ```ignore
//! use monadic_parsec::analyzer::prelude::*;
//!
//! let digits = interleave(sat(|c: &char| c.is_ascii_digit()), token(','));
//! let result = digits.parse("1,2,3");
//! ```

pub mod combinators;
pub mod core;
pub mod do_block;
pub mod monad;
pub mod parsers;
pub mod prelude;
pub mod stream;

pub use core::Parse;
pub use core::ParseResult;
pub use core::Parsec;
pub use core::Parser;
pub use do_block::{drive, run_do, Step};
pub use monad::{Monad, Monadic};
pub use stream::TokenStream;

pub use crate::ast;
