//! Chaining, mapping and fallback over [`Result`].
//!
//! Every combinator comes in three receiver forms:
//!
//! - by value (`and_then`), moving both payloads,
//! - by shared reference (`and_then_ref`), cloning the payload that is passed
//!   through untouched,
//! - by mutable reference (`and_then_mut`), letting the callback mutate the
//!   payload it receives.
//!
//! The payload that is *not* handed to the callback always propagates
//! unchanged.

use super::{
    Fallible,
    Result::{self, Failure, Success},
};

impl<T, E> Result<T, E> {
    /// Calls `f` with the success payload, or propagates the current error.
    ///
    /// `f` must return a result-shaped value whose failure type is `E`.
    /// On a `Failure`, `f` is never invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use fallible::{Failure, Result, Success};
    ///
    /// fn checked_half(x: i32) -> Result<i32, &'static str> {
    ///     if x % 2 == 0 { Success(x / 2) } else { Failure("odd") }
    /// }
    ///
    /// assert_eq!(Success(8).and_then(checked_half).and_then(checked_half), Success(2));
    /// assert_eq!(Success(6).and_then(checked_half).and_then(checked_half), Failure("odd"));
    /// ```
    pub fn and_then<R, F>(self, f: F) -> R
    where
        F: FnOnce(T) -> R,
        R: Fallible<Failure = E>,
    {
        match self {
            Success(value) => f(value),
            Failure(error) => R::from_failure(error),
        }
    }

    pub fn and_then_ref<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
        R: Fallible<Failure = E>,
        E: Clone,
    {
        match self {
            Success(value) => f(value),
            Failure(error) => R::from_failure(error.clone()),
        }
    }

    pub fn and_then_mut<R, F>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
        R: Fallible<Failure = E>,
        E: Clone,
    {
        match self {
            Success(value) => f(value),
            Failure(error) => R::from_failure(error.clone()),
        }
    }

    /// Calls `f` with the error payload, or passes the success through.
    ///
    /// The dual of [`and_then`](Self::and_then), used for recovery chains.
    pub fn or_else<R, F>(self, f: F) -> R
    where
        F: FnOnce(E) -> R,
        R: Fallible,
        R::Success: From<T>,
    {
        match self {
            Success(value) => R::from_success(value.into()),
            Failure(error) => f(error),
        }
    }

    pub fn or_else_ref<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&E) -> R,
        R: Fallible,
        R::Success: From<T>,
        T: Clone,
    {
        match self {
            Success(value) => R::from_success(value.clone().into()),
            Failure(error) => f(error),
        }
    }

    pub fn or_else_mut<R, F>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut E) -> R,
        R: Fallible,
        R::Success: From<T>,
        T: Clone,
    {
        match self {
            Success(value) => R::from_success(value.clone().into()),
            Failure(error) => f(error),
        }
    }

    /// Maps the success payload, wrapping whatever `f` returns.
    ///
    /// Unlike [`and_then`](Self::and_then), the return value of `f` is never
    /// flattened: a function returning a `Result` yields a nested `Result`.
    pub fn transform<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Success(value) => Success(f(value)),
            Failure(error) => Failure(error),
        }
    }

    pub fn transform_ref<U, F>(&self, f: F) -> Result<U, E>
    where
        F: FnOnce(&T) -> U,
        E: Clone,
    {
        match self {
            Success(value) => Success(f(value)),
            Failure(error) => Failure(error.clone()),
        }
    }

    pub fn transform_mut<U, F>(&mut self, f: F) -> Result<U, E>
    where
        F: FnOnce(&mut T) -> U,
        E: Clone,
    {
        match self {
            Success(value) => Success(f(value)),
            Failure(error) => Failure(error.clone()),
        }
    }

    /// Maps the error payload, leaving a success untouched.
    pub fn transform_error<G, F>(self, f: F) -> Result<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(f(error)),
        }
    }

    pub fn transform_error_ref<G, F>(&self, f: F) -> Result<T, G>
    where
        F: FnOnce(&E) -> G,
        T: Clone,
    {
        match self {
            Success(value) => Success(value.clone()),
            Failure(error) => Failure(f(error)),
        }
    }

    pub fn transform_error_mut<G, F>(&mut self, f: F) -> Result<T, G>
    where
        F: FnOnce(&mut E) -> G,
        T: Clone,
    {
        match self {
            Success(value) => Success(value.clone()),
            Failure(error) => Failure(f(error)),
        }
    }
}
