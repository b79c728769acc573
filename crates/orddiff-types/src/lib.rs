//! Foundation types for orddiff.
//!
//! Every other orddiff crate depends on `orddiff-types`. The types here carry
//! no merge logic; they describe what a merge emits and how an input can be
//! found to break the ordering contract.
//!
//! # Key Types
//!
//! - [`Tag`] — A value tagged with the input that produced it
//! - [`Side`] — Which of the two inputs, without the value
//! - [`OrderError`] — First position at which an input stops being strictly ascending

pub mod error;
pub mod tag;

pub use error::{OrderError, OrderResult};
pub use tag::{Side, Tag};
