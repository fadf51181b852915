use alloc::boxed::Box;

use core::{
    convert::Infallible,
    hint::unreachable_unchecked,
    ops::{ControlFlow, FromResidual, Residual, Try},
};

use crate::{
    error_box::{ErrorBox, NotErrorBox},
    errors::{self, BadAccess, Error},
    tags::{InPlace, Unexpect},
};

use self::Result::{Failure, Success};

mod combinators;

/// Either a success value or a failure, never both and never neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "this `Result` may be a `Failure`, which should be handled"]
pub enum Result<Success, Failure = Box<dyn Error>> {
    Success(Success),
    Failure(Failure),
}

/// Result-shaped types: something built from either a success or a failure.
///
/// `and_then` and `or_else` callbacks may return any `Fallible`, so a chain
/// can move between [`Result`] and [`Completion`](crate::Completion).
pub trait Fallible: Sized {
    type Success;
    type Failure;

    fn from_success(value: Self::Success) -> Self;

    fn from_failure(error: Self::Failure) -> Self;

    fn has_value(&self) -> bool;
}

impl<T, E> Fallible for Result<T, E> {
    type Success = T;
    type Failure = E;

    fn from_success(value: T) -> Self {
        Success(value)
    }

    fn from_failure(error: E) -> Self {
        Failure(error)
    }

    fn has_value(&self) -> bool {
        Self::has_value(self)
    }
}

impl<T: Default, E> Default for Result<T, E> {
    /// A success holding `T::default()`.
    fn default() -> Self {
        Success(T::default())
    }
}

impl<T, E> Result<T, E> {
    /// Builds a success from anything convertible into `T`.
    ///
    /// When `T` and `E` could be confused, prefer the explicit
    /// `(InPlace, value)` and `(Unexpect, error)` conversions.
    pub fn new(value: impl Into<T>) -> Self {
        Success(value.into())
    }

    /// A `bool` value indicating whether the success alternative is active.
    #[must_use]
    pub const fn has_value(&self) -> bool {
        matches!(self, Success(_))
    }

    #[must_use]
    pub const fn has_error(&self) -> bool {
        !self.has_value()
    }

    /// Returns a reference to the success payload.
    ///
    /// # Panics
    ///
    /// Panics with [`BadAccess::MESSAGE`] if this is a `Failure`.
    #[must_use]
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Success(value) => value,
            Failure(_) => errors::no_value(),
        }
    }

    /// Returns a mutable reference to the success payload.
    ///
    /// # Panics
    ///
    /// Panics with [`BadAccess::MESSAGE`] if this is a `Failure`.
    #[must_use]
    #[track_caller]
    pub fn value_mut(&mut self) -> &mut T {
        match self {
            Success(value) => value,
            Failure(_) => errors::no_value(),
        }
    }

    /// Moves the success payload out.
    ///
    /// # Panics
    ///
    /// Panics with [`BadAccess::MESSAGE`] if this is a `Failure`.
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Success(value) => value,
            Failure(_) => errors::no_value(),
        }
    }

    /// Like [`value`](Self::value), but reports misuse as data.
    ///
    /// # Errors
    ///
    /// Returns [`BadAccess`] if this is a `Failure`.
    pub const fn try_value(&self) -> core::result::Result<&T, BadAccess> {
        match self {
            Success(value) => Ok(value),
            Failure(_) => Err(BadAccess),
        }
    }

    /// Returns the success payload without checking the state.
    ///
    /// # Safety
    ///
    /// The caller must have established that `has_value()` is `true`.
    /// Debug builds assert it.
    #[must_use]
    pub unsafe fn value_unchecked(&self) -> &T {
        debug_assert!(self.has_value(), "{}", BadAccess::MESSAGE);
        match self {
            Success(value) => value,
            Failure(_) => unsafe { unreachable_unchecked() },
        }
    }

    /// # Safety
    ///
    /// The caller must have established that `has_value()` is `true`.
    #[must_use]
    pub unsafe fn value_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.has_value(), "{}", BadAccess::MESSAGE);
        match self {
            Success(value) => value,
            Failure(_) => unsafe { unreachable_unchecked() },
        }
    }

    /// # Safety
    ///
    /// The caller must have established that `has_value()` is `true`.
    pub unsafe fn into_value_unchecked(self) -> T {
        debug_assert!(self.has_value(), "{}", BadAccess::MESSAGE);
        match self {
            Success(value) => value,
            Failure(_) => unsafe { unreachable_unchecked() },
        }
    }

    /// Returns a reference to the error payload.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Success`. Use [`error_unchecked`](Self::error_unchecked)
    /// once the state is known.
    #[must_use]
    #[track_caller]
    pub fn error(&self) -> &E {
        match self {
            Failure(error) => error,
            Success(_) => errors::no_error(),
        }
    }

    /// # Panics
    ///
    /// Panics if this is a `Success`.
    #[must_use]
    #[track_caller]
    pub fn error_mut(&mut self) -> &mut E {
        match self {
            Failure(error) => error,
            Success(_) => errors::no_error(),
        }
    }

    /// # Panics
    ///
    /// Panics if this is a `Success`.
    #[track_caller]
    pub fn into_error(self) -> E {
        match self {
            Failure(error) => error,
            Success(_) => errors::no_error(),
        }
    }

    /// Returns the error payload without checking the state.
    ///
    /// # Safety
    ///
    /// The caller must have established that `has_value()` is `false`.
    /// Debug builds assert it.
    #[must_use]
    pub unsafe fn error_unchecked(&self) -> &E {
        debug_assert!(self.has_error(), "{}", BadAccess::NO_ERROR);
        match self {
            Failure(error) => error,
            Success(_) => unsafe { unreachable_unchecked() },
        }
    }

    /// # Safety
    ///
    /// The caller must have established that `has_value()` is `false`.
    #[must_use]
    pub unsafe fn error_unchecked_mut(&mut self) -> &mut E {
        debug_assert!(self.has_error(), "{}", BadAccess::NO_ERROR);
        match self {
            Failure(error) => error,
            Success(_) => unsafe { unreachable_unchecked() },
        }
    }

    /// # Safety
    ///
    /// The caller must have established that `has_value()` is `false`.
    pub unsafe fn into_error_unchecked(self) -> E {
        debug_assert!(self.has_error(), "{}", BadAccess::NO_ERROR);
        match self {
            Failure(error) => error,
            Success(_) => unsafe { unreachable_unchecked() },
        }
    }

    /// Returns the success payload, or `default` converted into `T`.
    pub fn value_or(self, default: impl Into<T>) -> T {
        match self {
            Success(value) => value,
            Failure(_) => default.into(),
        }
    }

    /// Returns a copy of the success payload, or `default` converted into `T`.
    pub fn value_or_ref(&self, default: impl Into<T>) -> T
    where
        T: Clone,
    {
        match self {
            Success(value) => value.clone(),
            Failure(_) => default.into(),
        }
    }

    /// Replaces whatever is stored with a fresh success payload.
    pub fn emplace(&mut self, value: impl Into<T>) -> &mut T {
        *self = Success(value.into());
        // SAFETY: the success alternative was written on the line above.
        unsafe { self.value_unchecked_mut() }
    }

    /// Overwrites into the success state, even if an error was held.
    pub fn assign(&mut self, value: impl Into<T>) -> &mut Self {
        *self = Success(value.into());
        self
    }

    /// Overwrites into the failure state, even if a value was held.
    pub fn assign_error<G>(&mut self, error: ErrorBox<G>) -> &mut Self
    where
        G: NotErrorBox + Into<E>,
    {
        *self = Failure(error.into_error().into());
        self
    }

    /// Exchanges the entire state, including which alternative is active.
    pub const fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    pub const fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }

    pub const fn as_mut(&mut self) -> Result<&mut T, &mut E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }

    /// Converts into an `Option`, discarding the error.
    #[must_use]
    pub fn success(self) -> Option<T> {
        match self {
            Success(value) => Some(value),
            Failure(_) => None,
        }
    }

    /// Converts into an `Option`, discarding the success payload.
    #[must_use]
    pub fn failure(self) -> Option<E> {
        match self {
            Success(_) => None,
            Failure(error) => Some(error),
        }
    }

    /// Converts into the standard library's result.
    ///
    /// # Errors
    ///
    /// Returns `Err` carrying the error payload if this is a `Failure`.
    pub fn into_result(self) -> core::result::Result<T, E> {
        match self {
            Success(value) => Ok(value),
            Failure(error) => Err(error),
        }
    }
}

impl<T: Clone, E> Result<&T, E> {
    pub fn cloned(self) -> Result<T, E> {
        match self {
            Success(value) => Success(value.clone()),
            Failure(error) => Failure(error),
        }
    }
}

impl<T: Copy, E> Result<&T, E> {
    pub fn copied(self) -> Result<T, E> {
        match self {
            Success(&value) => Success(value),
            Failure(error) => Failure(error),
        }
    }
}

/// Exchanges the states of two results.
pub const fn swap<T, E>(lhs: &mut Result<T, E>, rhs: &mut Result<T, E>) {
    lhs.swap(rhs);
}

impl<T, E, G> From<ErrorBox<G>> for Result<T, E>
where
    G: NotErrorBox + Into<E>,
{
    fn from(error: ErrorBox<G>) -> Self {
        Failure(error.into_error().into())
    }
}

impl<T, E, A> From<(InPlace, A)> for Result<T, E>
where
    A: Into<T>,
{
    fn from((_, args): (InPlace, A)) -> Self {
        Success(args.into())
    }
}

impl<T, E, A> From<(Unexpect, A)> for Result<T, E>
where
    A: Into<E>,
{
    fn from((_, args): (Unexpect, A)) -> Self {
        Failure(args.into())
    }
}

impl<T, E> From<core::result::Result<T, E>> for Result<T, E> {
    fn from(result: core::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Success(value),
            Err(error) => Failure(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for core::result::Result<T, E> {
    fn from(result: Result<T, E>) -> Self {
        result.into_result()
    }
}

impl<T, E> Try for Result<T, E> {
    type Output = T;
    type Residual = Result<Infallible, E>;

    fn from_output(output: Self::Output) -> Self {
        Success(output)
    }

    fn branch(self) -> ControlFlow<Self::Residual, Self::Output> {
        match self {
            Success(value) => ControlFlow::Continue(value),
            Failure(error) => ControlFlow::Break(Failure(error)),
        }
    }
}

impl<T, E> Residual<T> for Result<Infallible, E> {
    type TryType = Result<T, E>;
}

impl<T, E, F: From<E>> FromResidual<Result<Infallible, E>> for Result<T, F> {
    fn from_residual(residual: Result<Infallible, E>) -> Self {
        let Failure(error) = residual;
        Failure(From::from(error))
    }
}

impl<T, E, F: From<E>> FromResidual<core::result::Result<Infallible, E>> for Result<T, F> {
    fn from_residual(residual: core::result::Result<Infallible, E>) -> Self {
        let Err(error) = residual;
        Failure(From::from(error))
    }
}
