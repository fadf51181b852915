use thiserror::Error as ThisError;

use crate::error_box::NotErrorBox;

/// Error payloads that can travel behind the default `Box<dyn Error>` failure.
pub trait Error: core::error::Error + NotErrorBox {}

/// Raised when a checked accessor reads the success payload of a failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ThisError)]
#[error("{}", BadAccess::MESSAGE)]
pub struct BadAccess;

impl BadAccess {
    /// Fixed diagnostic carried by every misuse violation.
    pub const MESSAGE: &'static str = "bad access: this result has no value";

    /// Diagnostic for reading the error payload of a success.
    pub const NO_ERROR: &'static str = "bad access: this result has no error";
}

impl Error for BadAccess {}

#[cold]
#[track_caller]
pub(crate) fn no_value() -> ! {
    tracing::error!(target: "fallible::access", "{}", BadAccess::MESSAGE);
    panic!("{}", BadAccess)
}

#[cold]
#[track_caller]
pub(crate) fn no_error() -> ! {
    tracing::debug!(target: "fallible::access", "{}", BadAccess::NO_ERROR);
    panic!("{}", BadAccess::NO_ERROR)
}

/// Runs `f`, turning a misuse violation raised inside it back into data.
///
/// Panics that are not misuse violations keep unwinding.
#[cfg(feature = "std")]
pub fn catch_bad_access<R>(
    f: impl FnOnce() -> R + std::panic::UnwindSafe,
) -> core::result::Result<R, BadAccess> {
    use alloc::string::String;

    match std::panic::catch_unwind(f) {
        Ok(value) => Ok(value),
        Err(payload) => {
            let message = payload
                .downcast_ref::<String>()
                .map(String::as_str)
                .or_else(|| payload.downcast_ref::<&'static str>().copied());
            if message == Some(BadAccess::MESSAGE) {
                Err(BadAccess)
            } else {
                std::panic::resume_unwind(payload)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::{boxed::Box, string::ToString};

    use super::BadAccess;

    #[test]
    fn test_message_is_fixed() {
        assert_eq!(BadAccess.to_string(), BadAccess::MESSAGE);
    }

    #[test]
    fn test_boxed_bad_access_is_crate_error() {
        let boxed: Box<dyn super::Error> = Box::new(BadAccess);
        assert_eq!(boxed.to_string(), BadAccess::MESSAGE);
    }

    #[test]
    #[should_panic(expected = "bad access: this result has no value")]
    fn test_no_value_panics_with_message() {
        super::no_value();
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_catch_bad_access() {
        assert_eq!(super::catch_bad_access(|| 3), Ok(3));
        assert_eq!(super::catch_bad_access(|| -> i32 { super::no_value() }), Err(BadAccess));
    }
}
