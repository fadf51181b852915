use core::{
    convert::Infallible,
    hint::unreachable_unchecked,
    ops::{ControlFlow, FromResidual, Try},
};

use crate::{
    error_box::{ErrorBox, NotErrorBox},
    errors::{self, BadAccess},
    result::{
        Fallible,
        Result::{self, Failure, Success},
    },
    tags::{InPlace, Unexpect},
};

/// The outcome of an operation whose success carries no data.
///
/// Success is the absence of an error, so a `Completion` holds at most one
/// `E`.
///
/// ```
/// use fallible::{Completion, ErrorBox};
///
/// let done: Completion<String> = Completion::new();
/// assert!(done.has_value());
///
/// let failed: Completion<String> = ErrorBox::new(String::from("fail")).into();
/// assert_eq!(failed.transform_error(|e| e + "!").error(), "fail!");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "this `Completion` may hold an error, which should be handled"]
pub struct Completion<E> {
    error: Option<E>,
}

impl<E> Default for Completion<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Fallible for Completion<E> {
    type Success = ();
    type Failure = E;

    fn from_success((): ()) -> Self {
        Self::new()
    }

    fn from_failure(error: E) -> Self {
        Self { error: Some(error) }
    }

    fn has_value(&self) -> bool {
        Self::has_value(self)
    }
}

impl<E> Completion<E> {
    /// A successful completion.
    pub const fn new() -> Self {
        Self { error: None }
    }

    #[must_use]
    pub const fn has_value(&self) -> bool {
        self.error.is_none()
    }

    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Asserts success; there is no payload to return.
    ///
    /// # Panics
    ///
    /// Panics with [`BadAccess::MESSAGE`] if an error is stored.
    #[track_caller]
    pub fn value(&self) {
        if self.has_error() {
            errors::no_value();
        }
    }

    /// # Errors
    ///
    /// Returns [`BadAccess`] if an error is stored.
    pub const fn try_value(&self) -> core::result::Result<(), BadAccess> {
        if self.has_value() {
            Ok(())
        } else {
            Err(BadAccess)
        }
    }

    /// Does nothing: a completion has no payload to substitute.
    pub const fn value_or(&self) {}

    /// # Safety
    ///
    /// The caller must have established that `has_value()` is `true`.
    /// Debug builds assert it.
    pub unsafe fn value_unchecked(&self) {
        debug_assert!(self.has_value(), "{}", BadAccess::MESSAGE);
    }

    /// # Panics
    ///
    /// Panics if no error is stored.
    #[must_use]
    #[track_caller]
    pub fn error(&self) -> &E {
        match &self.error {
            Some(error) => error,
            None => errors::no_error(),
        }
    }

    /// # Panics
    ///
    /// Panics if no error is stored.
    #[must_use]
    #[track_caller]
    pub fn error_mut(&mut self) -> &mut E {
        match &mut self.error {
            Some(error) => error,
            None => errors::no_error(),
        }
    }

    /// # Panics
    ///
    /// Panics if no error is stored.
    #[track_caller]
    pub fn into_error(self) -> E {
        match self.error {
            Some(error) => error,
            None => errors::no_error(),
        }
    }

    /// # Safety
    ///
    /// The caller must have established that `has_value()` is `false`.
    #[must_use]
    pub unsafe fn error_unchecked(&self) -> &E {
        debug_assert!(self.has_error(), "{}", BadAccess::NO_ERROR);
        match &self.error {
            Some(error) => error,
            None => unsafe { unreachable_unchecked() },
        }
    }

    /// # Safety
    ///
    /// The caller must have established that `has_value()` is `false`.
    #[must_use]
    pub unsafe fn error_unchecked_mut(&mut self) -> &mut E {
        debug_assert!(self.has_error(), "{}", BadAccess::NO_ERROR);
        match &mut self.error {
            Some(error) => error,
            None => unsafe { unreachable_unchecked() },
        }
    }

    /// # Safety
    ///
    /// The caller must have established that `has_value()` is `false`.
    pub unsafe fn into_error_unchecked(self) -> E {
        debug_assert!(self.has_error(), "{}", BadAccess::NO_ERROR);
        match self.error {
            Some(error) => error,
            None => unsafe { unreachable_unchecked() },
        }
    }

    /// Clears any stored error.
    pub fn emplace(&mut self) {
        self.error = None;
    }

    /// Overwrites into the failure state.
    pub fn assign_error<G>(&mut self, error: ErrorBox<G>) -> &mut Self
    where
        G: NotErrorBox + Into<E>,
    {
        self.error = Some(error.into_error().into());
        self
    }

    pub const fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.error, &mut other.error);
    }

    /// The stored error, if any.
    #[must_use]
    pub fn failure(self) -> Option<E> {
        self.error
    }

    /// # Errors
    ///
    /// Returns `Err` carrying the stored error, if any.
    pub fn into_result(self) -> core::result::Result<(), E> {
        self.error.map_or(Ok(()), Err)
    }

    /// Calls `f` on success, or propagates the current error.
    pub fn and_then<R, F>(self, f: F) -> R
    where
        F: FnOnce() -> R,
        R: Fallible<Failure = E>,
    {
        match self.error {
            None => f(),
            Some(error) => R::from_failure(error),
        }
    }

    pub fn and_then_ref<R, F>(&self, f: F) -> R
    where
        F: FnOnce() -> R,
        R: Fallible<Failure = E>,
        E: Clone,
    {
        match &self.error {
            None => f(),
            Some(error) => R::from_failure(error.clone()),
        }
    }

    /// Calls `f` with the stored error, or returns a success of `R`.
    pub fn or_else<R, F>(self, f: F) -> R
    where
        F: FnOnce(E) -> R,
        R: Fallible<Success = ()>,
    {
        match self.error {
            None => R::from_success(()),
            Some(error) => f(error),
        }
    }

    pub fn or_else_ref<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&E) -> R,
        R: Fallible<Success = ()>,
    {
        match &self.error {
            None => R::from_success(()),
            Some(error) => f(error),
        }
    }

    pub fn or_else_mut<R, F>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut E) -> R,
        R: Fallible<Success = ()>,
    {
        match &mut self.error {
            None => R::from_success(()),
            Some(error) => f(error),
        }
    }

    /// Produces a success payload from `f` on success.
    pub fn transform<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce() -> U,
    {
        match self.error {
            None => Success(f()),
            Some(error) => Failure(error),
        }
    }

    pub fn transform_ref<U, F>(&self, f: F) -> Result<U, E>
    where
        F: FnOnce() -> U,
        E: Clone,
    {
        match &self.error {
            None => Success(f()),
            Some(error) => Failure(error.clone()),
        }
    }

    pub fn transform_error<G, F>(self, f: F) -> Completion<G>
    where
        F: FnOnce(E) -> G,
    {
        Completion {
            error: self.error.map(f),
        }
    }

    pub fn transform_error_ref<G, F>(&self, f: F) -> Completion<G>
    where
        F: FnOnce(&E) -> G,
    {
        Completion {
            error: self.error.as_ref().map(f),
        }
    }

    pub fn transform_error_mut<G, F>(&mut self, f: F) -> Completion<G>
    where
        F: FnOnce(&mut E) -> G,
    {
        Completion {
            error: self.error.as_mut().map(f),
        }
    }
}

/// Exchanges the states of two completions.
pub const fn swap<E>(lhs: &mut Completion<E>, rhs: &mut Completion<E>) {
    lhs.swap(rhs);
}

impl<E> From<InPlace> for Completion<E> {
    fn from(_: InPlace) -> Self {
        Self::new()
    }
}

impl<E, G> From<ErrorBox<G>> for Completion<E>
where
    G: NotErrorBox + Into<E>,
{
    fn from(error: ErrorBox<G>) -> Self {
        Self {
            error: Some(error.into_error().into()),
        }
    }
}

impl<E, A> From<(Unexpect, A)> for Completion<E>
where
    A: Into<E>,
{
    fn from((_, args): (Unexpect, A)) -> Self {
        Self {
            error: Some(args.into()),
        }
    }
}

impl<E> From<Result<(), E>> for Completion<E> {
    fn from(result: Result<(), E>) -> Self {
        Self {
            error: result.failure(),
        }
    }
}

impl<E> From<Completion<E>> for Result<(), E> {
    fn from(completion: Completion<E>) -> Self {
        match completion.error {
            None => Success(()),
            Some(error) => Failure(error),
        }
    }
}

impl<E> From<core::result::Result<(), E>> for Completion<E> {
    fn from(result: core::result::Result<(), E>) -> Self {
        Self { error: result.err() }
    }
}

impl<E> Try for Completion<E> {
    type Output = ();
    type Residual = Result<Infallible, E>;

    fn from_output((): ()) -> Self {
        Self::new()
    }

    fn branch(self) -> ControlFlow<Self::Residual> {
        match self.error {
            None => ControlFlow::Continue(()),
            Some(error) => ControlFlow::Break(Failure(error)),
        }
    }
}

impl<E, F: From<E>> FromResidual<Result<Infallible, E>> for Completion<F> {
    fn from_residual(residual: Result<Infallible, E>) -> Self {
        let Failure(error) = residual;
        Self {
            error: Some(From::from(error)),
        }
    }
}

impl<E, F: From<E>> FromResidual<core::result::Result<Infallible, E>> for Completion<F> {
    fn from_residual(residual: core::result::Result<Infallible, E>) -> Self {
        let Err(error) = residual;
        Self {
            error: Some(From::from(error)),
        }
    }
}
