use core::fmt;

use crate::tags::InPlace;

/// An error payload on its way into a [`Result`](crate::Result) or
/// [`Completion`](crate::Completion).
///
/// Wrapping a value in `ErrorBox` marks it as the failure alternative at the
/// construction site, even when the success and error types coincide.
///
/// ```
/// use fallible::{ErrorBox, Result};
///
/// let r: Result<i32, i32> = ErrorBox::new(5).into();
/// assert!(!r.has_value());
/// assert_eq!(*r.error(), 5);
/// ```
///
/// The payload may not itself be an `ErrorBox`:
///
/// ```compile_fail
/// use fallible::ErrorBox;
///
/// let nested = ErrorBox::new(ErrorBox::new(1));
/// ```
#[derive(Debug, Clone, Copy, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[must_use]
pub struct ErrorBox<E: NotErrorBox> {
    error: E,
}

/// Every type except `ErrorBox` itself, and types that hold one.
///
/// Bounds the payload of [`ErrorBox`] so a box can never wrap another box.
/// [`Error`](crate::Error) trait objects implement it through the supertrait.
pub auto trait NotErrorBox {}

impl<E: NotErrorBox> !NotErrorBox for ErrorBox<E> {}

impl<E: NotErrorBox> ErrorBox<E> {
    pub const fn new(error: E) -> Self {
        Self { error }
    }

    #[must_use]
    pub const fn error(&self) -> &E {
        &self.error
    }

    #[must_use]
    pub const fn error_mut(&mut self) -> &mut E {
        &mut self.error
    }

    #[must_use]
    pub fn into_error(self) -> E {
        self.error
    }

    /// Exchanges the payloads of two boxes.
    pub const fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.error, &mut other.error);
    }

    /// Rebuilds the box around `f` applied to the payload.
    pub fn map<G, F>(self, f: F) -> ErrorBox<G>
    where
        F: FnOnce(E) -> G,
        G: NotErrorBox,
    {
        ErrorBox::new(f(self.error))
    }
}

impl<E, A> From<(InPlace, A)> for ErrorBox<E>
where
    E: NotErrorBox,
    A: Into<E>,
{
    fn from((_, args): (InPlace, A)) -> Self {
        Self::new(args.into())
    }
}

impl<E, E2> PartialEq<ErrorBox<E2>> for ErrorBox<E>
where
    E: NotErrorBox + PartialEq<E2>,
    E2: NotErrorBox,
{
    fn eq(&self, other: &ErrorBox<E2>) -> bool {
        self.error == other.error
    }
}

impl<E: NotErrorBox + fmt::Display> fmt::Display for ErrorBox<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.error.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use alloc::{
        boxed::Box,
        string::{String, ToString},
    };

    use crate::{
        error_box::ErrorBox,
        errors::{BadAccess, Error},
        result::Result,
        tags::InPlace,
    };

    #[test]
    fn test_access_forms() {
        let mut boxed = ErrorBox::new(String::from("bad"));
        assert_eq!(boxed.error(), "bad");
        boxed.error_mut().push('!');
        assert_eq!(boxed.into_error(), "bad!");
    }

    #[test]
    fn test_in_place() {
        let boxed: ErrorBox<String> = (InPlace, "bad").into();
        assert_eq!(boxed.error(), "bad");
    }

    #[test]
    fn test_equality_across_payload_types() {
        let owned = ErrorBox::new(String::from("bad"));
        let borrowed = ErrorBox::new("bad");
        assert!(owned == borrowed);
        assert!(owned != ErrorBox::new("worse"));
    }

    #[test]
    fn test_swap() {
        let mut a = ErrorBox::new(1);
        let mut b = ErrorBox::new(2);
        a.swap(&mut b);
        assert_eq!(*a.error(), 2);
        assert_eq!(*b.error(), 1);
    }

    #[test]
    fn test_map_and_display() {
        let boxed = ErrorBox::new(404).map(|code: i32| code.to_string());
        assert_eq!(boxed.to_string(), "404");
    }

    #[test]
    fn test_boxed_trait_object_payload() {
        let payload: Box<dyn Error> = Box::new(BadAccess);
        let boxed = ErrorBox::new(payload);
        assert_eq!(boxed.error().to_string(), BadAccess::MESSAGE);

        let r: Result<i32> = boxed.into();
        assert!(r.has_error());
    }
}
