//! Error types shared by every container.
//!
//! All fallible operations return [`CollectionError`]. The enum keeps one
//! variant per concrete failure so messages can carry the offending numbers,
//! while [`CollectionError::kind`] collapses them into the five abstract
//! categories callers usually match on.

use std::fmt;

// =============================================================================
// Error Types
// =============================================================================

/// Errors produced by collection operations.
///
/// # Examples
///
/// ```rust
/// use orderly::{CollectionError, ErrorKind, OrderedList};
///
/// let list: OrderedList<i32> = OrderedList::new();
/// let error = list.get(3).unwrap_err();
/// assert_eq!(error, CollectionError::IndexNotFound { index: 3 });
/// assert_eq!(error.kind(), ErrorKind::NotFound);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// The requested index does not exist.
    IndexNotFound {
        /// The index that was requested.
        index: usize,
    },

    /// The requested key does not exist in the dictionary.
    KeyNotFound,

    /// The requested value is not present in the set.
    ValueNotFound,

    /// An index was supplied outside `0..=len`.
    IndexOutOfRange {
        /// The index that was supplied.
        index: usize,
        /// The current number of elements.
        length: usize,
    },

    /// A length or chunk size of zero was supplied where at least 1 is
    /// required.
    NonPositiveLength,

    /// A sample count outside `1..=len` was supplied to `random` or
    /// `secure_random`.
    SampleOutOfRange {
        /// The number of elements requested.
        requested: usize,
        /// The number of elements available.
        available: usize,
    },

    /// The operation requires at least one element.
    Empty,

    /// The value is already present in the set at a different index.
    DuplicateValue,

    /// `Dictionary::combine` was given key and value sequences of different
    /// lengths.
    KeyValueCountMismatch {
        /// The number of keys supplied.
        keys: usize,
        /// The number of values supplied.
        values: usize,
    },
}

/// The abstract category of a [`CollectionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A requested index, key, or value does not exist.
    NotFound,
    /// A supplied index, length, or count is outside its legal bound.
    RangeViolation,
    /// The operation requires a non-empty collection.
    Empty,
    /// A duplicate value was supplied where uniqueness is required.
    Conflict,
    /// Mismatched inputs, such as key and value sequences of different
    /// lengths.
    TypeMismatch,
}

impl CollectionError {
    /// Returns the abstract category this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::IndexNotFound { .. } | Self::KeyNotFound | Self::ValueNotFound => {
                ErrorKind::NotFound
            }
            Self::IndexOutOfRange { .. }
            | Self::NonPositiveLength
            | Self::SampleOutOfRange { .. } => ErrorKind::RangeViolation,
            Self::Empty => ErrorKind::Empty,
            Self::DuplicateValue => ErrorKind::Conflict,
            Self::KeyValueCountMismatch { .. } => ErrorKind::TypeMismatch,
        }
    }
}

impl fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexNotFound { index } => {
                write!(formatter, "the specified index ({index}) does not exist")
            }
            Self::KeyNotFound => {
                write!(formatter, "the specified key does not exist")
            }
            Self::ValueNotFound => {
                write!(formatter, "the specified value is not present in the set")
            }
            Self::IndexOutOfRange { index, length } => {
                write!(
                    formatter,
                    "the index ({index}) must be between 0 and the length ({length}) of the collection"
                )
            }
            Self::NonPositiveLength => {
                write!(formatter, "the length must be at least 1")
            }
            Self::SampleOutOfRange {
                requested,
                available,
            } => {
                write!(
                    formatter,
                    "the sample count ({requested}) must be between 1 and the number of elements ({available})"
                )
            }
            Self::Empty => {
                write!(formatter, "the collection is empty")
            }
            Self::DuplicateValue => {
                write!(formatter, "the specified value is already present in the set")
            }
            Self::KeyValueCountMismatch { keys, values } => {
                write!(
                    formatter,
                    "the number of keys ({keys}) and values ({values}) do not match"
                )
            }
        }
    }
}

impl std::error::Error for CollectionError {}

// =============================================================================
// Tests
// =============================================================================
