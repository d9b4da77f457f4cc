//! # Monad Abstraction
//!
//! Rust has no higher-kinded types, so a monad is described by a *family*
//! type: an uninhabited marker whose generic associated type [`Monad::Of`]
//! names the monadic value carrying an `A`. For parsers the family is
//! [`Parsec<T>`](super::core::Parsec) and `Parsec<T>::Of<A>` is
//! [`Parser<T, A>`](super::core::Parser).
//!
//! Implementations must satisfy the monad laws:
//!
//! ```text
//! bind(unit(x), f)    == f(x)
//! bind(m, unit)       == m
//! bind(bind(m, f), g) == bind(m, |x| bind(f(x), g))
//! ```

/// A monad family.
///
/// Carried values are `Clone` because a monadic value may be run more than
/// once and must produce the same result each time.
pub trait Monad: 'static {
    /// The monadic value producing an `A`.
    type Of<A: Clone + 'static>;

    /// Lifts a plain value into the monad without any effect.
    fn unit<A: Clone + 'static>(value: A) -> Self::Of<A>;

    /// Sequences `m` with a continuation that receives its produced value.
    fn bind<A, B, F>(m: Self::Of<A>, f: F) -> Self::Of<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> Self::Of<B> + 'static;

    /// Runs `m` for its effect only, then the action built by `next`.
    fn then<A, B, F>(m: Self::Of<A>, next: F) -> Self::Of<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn() -> Self::Of<B> + 'static,
    {
        Self::bind::<A, B, _>(m, move |_| next())
    }
}

/// A concrete monadic value that knows which [`Monad`] family it belongs to.
///
/// The do-block interpreter uses this to pick the target monad from the
/// first action of a block instead of requiring a type annotation.
pub trait Monadic: Sized + 'static {
    type Family: Monad;
    type Value: Clone + 'static;

    fn into_monad(self) -> <Self::Family as Monad>::Of<Self::Value>;
}
