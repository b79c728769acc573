//! Single-pass symmetric difference of two ordered sequences.
//!
//! Given two strictly ascending, duplicate-free inputs, the merge walks both
//! once, front to back, holding at most one value in reserve. Values present
//! in both inputs cancel out; everything else is emitted in ascending order,
//! tagged with the input it came from. No hashing, no buffering.
//!
//! The same merge is offered in two control-flow shapes:
//!
//! - **Pull**: [`symmetric_difference`] returns a lazy [`SymDiff`] iterator.
//!   The caller regains control after every value.
//! - **Push**: [`symmetric_difference_for_each`] runs the merge in one call
//!   and hands each value to a callback, which may stop it early.
//!
//! Both produce identical sequences for identical inputs.
//!
//! # Key Types
//!
//! - [`Cursor`] / [`IterCursor`] -- Single-pass pull handle over one input
//! - [`SymDiff`] -- Pull-based merge state (two cursors + remainder slot)
//! - [`traverse`] -- Push-based driver over arbitrary cursors
//! - [`SymmetricDifference`] -- Method syntax on any `IntoIterator`

pub mod cursor;
pub mod drive;
pub mod ext;
pub mod iter;
pub mod validate;

pub use cursor::{Cursor, IterCursor};
pub use drive::{
    symmetric_difference_for_each, symmetric_difference_for_each_by, symmetric_difference_split,
    traverse, try_symmetric_difference_for_each,
};
pub use ext::SymmetricDifference;
pub use iter::{symmetric_difference, symmetric_difference_by, OrdCmp, SymDiff};
pub use orddiff_types::{OrderError, OrderResult, Side, Tag};
pub use validate::{check_strictly_ascending, check_strictly_ascending_by};
