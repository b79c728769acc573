//! Provenance tags for merged output.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two inputs of a merge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The other input.
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// A value together with the input it came from.
///
/// A symmetric difference emits every value exactly once, so the tag is the
/// only record of which sequence held it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag<T> {
    /// Present in the left input only.
    Left(T),
    /// Present in the right input only.
    Right(T),
}

impl<T> Tag<T> {
    /// Wrap `value` as coming from `side`.
    pub fn new(side: Side, value: T) -> Self {
        match side {
            Side::Left => Self::Left(value),
            Side::Right => Self::Right(value),
        }
    }

    /// Which input produced the value.
    pub fn side(&self) -> Side {
        match self {
            Self::Left(_) => Side::Left,
            Self::Right(_) => Side::Right,
        }
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Drop the tag and keep the value.
    pub fn into_inner(self) -> T {
        match self {
            Self::Left(v) | Self::Right(v) => v,
        }
    }

    /// Borrow the value regardless of side.
    pub fn as_inner(&self) -> &T {
        match self {
            Self::Left(v) | Self::Right(v) => v,
        }
    }

    /// Convert `&Tag<T>` into `Tag<&T>`.
    pub fn as_ref(&self) -> Tag<&T> {
        match self {
            Self::Left(v) => Tag::Left(v),
            Self::Right(v) => Tag::Right(v),
        }
    }

    /// Transform the value, keeping the side.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Tag<U> {
        match self {
            Self::Left(v) => Tag::Left(f(v)),
            Self::Right(v) => Tag::Right(f(v)),
        }
    }

    /// Split into side and value.
    pub fn into_parts(self) -> (Side, T) {
        match self {
            Self::Left(v) => (Side::Left, v),
            Self::Right(v) => (Side::Right, v),
        }
    }
}

impl<T: Copy> Tag<&T> {
    /// Convert `Tag<&T>` into `Tag<T>` by copying the value.
    pub fn copied(self) -> Tag<T> {
        self.map(|v| *v)
    }
}

impl<T: Clone> Tag<&T> {
    /// Convert `Tag<&T>` into `Tag<T>` by cloning the value.
    pub fn cloned(self) -> Tag<T> {
        self.map(T::clone)
    }
}

impl<T: fmt::Display> fmt::Display for Tag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.side(), self.as_inner())
    }
}
