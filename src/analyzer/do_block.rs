//! # Do-Block Interpreter
//!
//! Sequential, imperative-looking monadic code without nesting every `bind`
//! by hand. A block is a closure returning a [`Step`]; every step is one of
//!
//! * [`Step::Continue`]: run an action, feed its value to the rest of the block
//! * [`Step::Return`]: stop and produce `unit(value)`
//! * [`Step::Substitute`]: stop and produce the given monadic value as-is
//!
//! [`drive`] turns a step into a single monadic value by right-nesting binds.
//! Each continuation re-enters [`drive`] with the next step, so
//!
//! ```text
//! steps! { let a = p; let b = q; return (a, b) }
//! ```
//!
//! means exactly `bind(p, |a| bind(q, |b| unit((a, b))))`.
//!
//! Everything runs on one synchronous call stack. Nothing is suspended across
//! blocks; "resuming" a block is just calling its continuation.

use super::monad::{Monad, Monadic};

/// One step of a do-block targeting the monad family `M` and producing `O`.
pub enum Step<M: Monad, O: Clone + 'static> {
    /// An action bound to the remainder of the block.
    Continue(Suspended<M, O>),
    /// Early return of a plain value.
    Return(O),
    /// Early exit with an already built monadic value.
    Substitute(M::Of<O>),
}

/// An action whose binding to the rest of the block is deferred until the
/// interpreter drives it. The action's own value type is erased here.
pub struct Suspended<M: Monad, O: Clone + 'static> {
    resume: Box<dyn FnOnce() -> M::Of<O>>,
}

impl<M: Monad, O: Clone + 'static> Step<M, O> {
    /// Runs `action`, then continues the block with `k(value)`.
    ///
    /// `k` may be called any number of times: once per run of the composed
    /// monadic value.
    pub fn bind<A, K>(action: A, k: K) -> Self
    where
        A: Monadic<Family = M>,
        K: Fn(A::Value) -> Step<M, O> + 'static,
    {
        Step::Continue(Suspended {
            resume: Box::new(move || {
                M::bind::<A::Value, O, _>(action.into_monad(), move |value| drive(k(value)))
            }),
        })
    }

    /// Runs `action` for its effect only, then continues with `k()`.
    pub fn then<A, K>(action: A, k: K) -> Self
    where
        A: Monadic<Family = M>,
        K: Fn() -> Step<M, O> + 'static,
    {
        Self::bind(action, move |_| k())
    }

    /// The end of a block without an explicit return: `unit(O::default())`,
    /// which is `unit(None)` for blocks producing an `Option`.
    pub fn finish() -> Self
    where
        O: Default,
    {
        Step::Return(O::default())
    }
}

/// Interprets a step as one composed monadic value.
pub fn drive<M: Monad, O: Clone + 'static>(step: Step<M, O>) -> M::Of<O> {
    match step {
        Step::Continue(suspended) => (suspended.resume)(),
        Step::Return(value) => M::unit(value),
        Step::Substitute(monadic) => monadic,
    }
}

/// Invokes `block` exactly once and interprets the step it describes.
pub fn run_do<M, O, B>(block: B) -> M::Of<O>
where
    M: Monad,
    O: Clone + 'static,
    B: FnOnce() -> Step<M, O>,
{
    drive(block())
}

/// Do-notation for [`Step`]s.
///
/// * `let pat = action; rest` binds the action's value to `pat`
/// * `action; rest` runs the action and discards its value
/// * `return value` ends the block with `unit(value)`
/// * `done monadic` ends the block with `monadic` itself
/// * a trailing expression must itself evaluate to a [`Step`]
/// * an empty tail ends the block with [`Step::finish`]
///
/// Continuations are `Fn` closures, so a variable bound two or more steps
/// earlier has to be cloned before it is used again.
#[macro_export]
macro_rules! steps {
    () => {
        $crate::analyzer::do_block::Step::finish()
    };
    (return $value:expr $(;)?) => {
        $crate::analyzer::do_block::Step::Return($value)
    };
    (done $monadic:expr $(;)?) => {
        $crate::analyzer::do_block::Step::Substitute($monadic)
    };
    (let $binding:pat_param = $action:expr; $($rest:tt)*) => {
        $crate::analyzer::do_block::Step::bind($action, move |$binding| $crate::steps!($($rest)*))
    };
    ($action:expr; $($rest:tt)*) => {
        $crate::analyzer::do_block::Step::then($action, move || $crate::steps!($($rest)*))
    };
    ($step:expr) => {
        $step
    };
}
