#![no_std]
#![warn(clippy::nursery, clippy::pedantic, clippy::all)]
#![feature(auto_traits, negative_impls, try_trait_v2, try_trait_v2_residual)]

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod completion;
pub mod error_box;
pub mod errors;
pub mod result;
pub mod tags;

pub use completion::Completion;
pub use error_box::{ErrorBox, NotErrorBox};
pub use errors::{BadAccess, Error};
pub use result::{Fallible, Result};
pub use result::Result::{Failure, Success};
pub use tags::{InPlace, Unexpect};
