//! Marker values that pick which alternative a constructor builds.
//!
//! Both tags are zero-sized and carry no state. They only matter when the
//! success and error payload types could be confused, e.g. `Result<i32, i32>`:
//!
//! ```
//! use fallible::{InPlace, Result, Unexpect};
//!
//! let ok = Result::<i32, i32>::from((InPlace, 7));
//! let err = Result::<i32, i32>::from((Unexpect, 7));
//! assert!(ok.has_value());
//! assert!(!err.has_value());
//! ```

/// Construct the success alternative in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InPlace;

/// Construct the error alternative in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unexpect;
