//! # orderly
//!
//! Strongly-typed ordered collections sharing one operation algebra.
//!
//! ## Overview
//!
//! This library provides three container kinds unified behind a shared set
//! of higher-order operations:
//!
//! - [`OrderedList`]: contiguous, integer-indexed, insertion-order sequence
//! - [`UniqueSet`]: integer-indexed sequence deduplicated by normalized key
//! - [`Dictionary`]: insertion-ordered key/value mapping accepting
//!   heterogeneous key types through the [`Key`] enum
//!
//! The [`Collection`] trait defines the shared algebra — `map`, `filter`,
//! `reduce`, `diff`, `intersect`, `merge`, `flip`, `count_values`, random
//! sampling, sorting — once, in terms of each container's primitive
//! accessors. Key identity is controlled by the [`Hashable`] trait; types
//! without a canonical form fall back to per-instance [`ObjectToken`]s.
//!
//! These are pure, in-process, single-threaded data structures: no
//! persistence, no I/O, and no internal synchronization. Every container
//! exclusively owns its backing storage, and derived containers are always
//! freshly allocated.
//!
//! ## Example
//!
//! ```rust
//! use orderly::{Collection, list_of, set_of};
//!
//! let list = list_of([1, 2, 3, 1, 2, 1]);
//! let counts = list.count_values();
//! assert_eq!(counts.get(&1), Ok(&3));
//! assert_eq!(counts.get(&2), Ok(&2));
//! assert_eq!(counts.get(&3), Ok(&1));
//!
//! let deduplicated = list.to_set();
//! assert_eq!(deduplicated, set_of([1, 2, 3]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use orderly::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::{Collection, PairSequence, ValueSequence};
    pub use crate::dictionary::Dictionary;
    pub use crate::error::{CollectionError, ErrorKind};
    pub use crate::key::{HashKey, Hashable, Key, ObjectToken};
    pub use crate::list::OrderedList;
    pub use crate::pair::Pair;
    pub use crate::set::UniqueSet;
    pub use crate::sort::SortDirection;
    pub use crate::{dictionary_of, list_of, set_of};
}

pub mod collection;
pub mod dictionary;
pub mod error;
pub mod key;
pub mod list;
pub mod pair;
pub mod set;
pub mod sort;

pub use collection::Collection;
pub use collection::PairSequence;
pub use collection::ValueSequence;
pub use dictionary::Dictionary;
pub use dictionary::DictionaryIntoIterator;
pub use dictionary::DictionaryIterator;
pub use error::CollectionError;
pub use error::ErrorKind;
pub use key::HashKey;
pub use key::Hashable;
pub use key::Key;
pub use key::ObjectToken;
pub use list::OrderedList;
pub use list::OrderedListIntoIterator;
pub use list::OrderedListIterator;
pub use pair::Pair;
pub use set::UniqueSet;
pub use set::UniqueSetIntoIterator;
pub use set::UniqueSetIterator;
pub use sort::SortDirection;

// =============================================================================
// Convenience constructors
// =============================================================================

/// Builds an [`OrderedList`] from the given items, preserving order.
///
/// # Examples
///
/// ```rust
/// use orderly::list_of;
///
/// let list = list_of([1, 2, 3]);
/// assert_eq!(list.len(), 3);
/// ```
pub fn list_of<T>(items: impl IntoIterator<Item = T>) -> OrderedList<T> {
    items.into_iter().collect()
}

/// Builds a [`UniqueSet`] from the given items, deduplicating by normalized
/// key in first-seen order.
///
/// # Examples
///
/// ```rust
/// use orderly::set_of;
///
/// let set = set_of([1, 2, 2, 3]);
/// assert_eq!(set.len(), 3);
/// ```
pub fn set_of<T: Hashable>(items: impl IntoIterator<Item = T>) -> UniqueSet<T> {
    items.into_iter().collect()
}

/// Builds a [`Dictionary`] from the given keyed items, upserting in order.
///
/// # Examples
///
/// ```rust
/// use orderly::dictionary_of;
///
/// let dictionary = dictionary_of([("a", 1), ("b", 2)]);
/// assert_eq!(dictionary.get(&"b"), Ok(&2));
/// ```
pub fn dictionary_of<K: Hashable, V>(
    items: impl IntoIterator<Item = (K, V)>,
) -> Dictionary<K, V> {
    items.into_iter().collect()
}

// =============================================================================
// Tests
// =============================================================================
