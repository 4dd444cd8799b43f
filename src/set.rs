//! Integer-indexed sequence of unique elements.
//!
//! [`UniqueSet`] keeps a dense element sequence (for index access and
//! iteration) and a normalized-key map (for membership) in lock-step. No two
//! elements normalize to the same [`HashKey`]; construction deduplicates,
//! keeping the first occurrence per key in first-seen order.
//!
//! After any interior removal the later indices shift down by one and the
//! key map is fully rebuilt; correctness over update cost.
//!
//! # Examples
//!
//! ```rust
//! use orderly::{set_of, UniqueSet};
//!
//! let set: UniqueSet<i32> = set_of([1, 2, 1, 3, 2]);
//! assert_eq!(set.as_slice(), &[1, 2, 3]);
//! assert!(set.contains(&2));
//!
//! let mut set = set;
//! set.remove(&2)?;
//! assert_eq!(set.as_slice(), &[1, 3]);
//! # Ok::<(), orderly::CollectionError>(())
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHashMap;

use crate::collection::Collection;
use crate::error::CollectionError;
use crate::key::{HashKey, Hashable};

// =============================================================================
// UniqueSet
// =============================================================================

/// A dense integer-indexed sequence with uniqueness by normalized key.
///
/// Membership is decided by [`Hashable`] normalization, while the
/// replace-in-place [`set`](UniqueSet::set) additionally uses strict
/// equality to recognize the "already exactly here" no-op case.
#[derive(Clone)]
pub struct UniqueSet<T> {
    values: Vec<T>,
    keys: FxHashMap<HashKey, usize>,
}

impl<T: Hashable> UniqueSet<T> {
    /// Creates a new empty set.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            keys: FxHashMap::default(),
        }
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `true` if an element normalizing to the same key is present.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.keys.contains_key(&value.hash_key())
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexNotFound`] when `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, CollectionError> {
        self.values
            .get(index)
            .ok_or(CollectionError::IndexNotFound { index })
    }

    /// Adds a value to the end of the set. No-op when an element with the
    /// same normalized key already exists.
    pub fn add(&mut self, value: T) {
        let key = value.hash_key();
        if self.keys.contains_key(&key) {
            return;
        }
        self.keys.insert(key, self.values.len());
        self.values.push(value);
    }

    /// Adds every value in order, silently dropping duplicates.
    pub fn push_all(&mut self, values: impl IntoIterator<Item = T>) {
        for value in values {
            self.add(value);
        }
    }

    /// Removes the element normalizing to the same key as `value`, shifting
    /// later elements down and rebuilding the key map.
    ///
    /// # Errors
    ///
    /// [`CollectionError::ValueNotFound`] when no element normalizes to that
    /// key.
    pub fn remove(&mut self, value: &T) -> Result<(), CollectionError> {
        let index = *self
            .keys
            .get(&value.hash_key())
            .ok_or(CollectionError::ValueNotFound)?;
        self.values.remove(index);
        self.rebuild_keys();
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// down and rebuilding the key map.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexNotFound`] when `index >= len`.
    pub fn unset(&mut self, index: usize) -> Result<T, CollectionError> {
        if index >= self.values.len() {
            return Err(CollectionError::IndexNotFound { index });
        }
        let value = self.values.remove(index);
        self.rebuild_keys();
        Ok(value)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Empty`] when the set is empty.
    pub fn pop(&mut self) -> Result<T, CollectionError> {
        let value = self.values.pop().ok_or(CollectionError::Empty)?;
        self.keys.remove(&value.hash_key());
        Ok(value)
    }

    /// Removes and returns the first element, shifting the rest down and
    /// rebuilding the key map.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Empty`] when the set is empty.
    pub fn shift(&mut self) -> Result<T, CollectionError> {
        if self.values.is_empty() {
            return Err(CollectionError::Empty);
        }
        let value = self.values.remove(0);
        self.rebuild_keys();
        Ok(value)
    }

    /// Sorts the set in place with a caller comparator and rebuilds the key
    /// map. The comparator must be a total preorder.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.values.sort_unstable_by(compare);
        self.rebuild_keys();
    }

    /// Returns the elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Consumes the set, returning the backing vector.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }

    /// Returns an iterator over the elements in index order.
    #[must_use]
    pub fn iter(&self) -> UniqueSetIterator<'_, T> {
        UniqueSetIterator {
            inner: self.values.iter(),
        }
    }

    /// Returns a new set with `function(value, index)` applied to each
    /// element. Mapped values that collide on normalized key silently
    /// collapse to the first occurrence.
    #[must_use]
    pub fn map<U, F>(&self, mut function: F) -> UniqueSet<U>
    where
        U: Hashable,
        F: FnMut(&T, usize) -> U,
    {
        self.values
            .iter()
            .enumerate()
            .map(|(index, value)| function(value, index))
            .collect()
    }

    fn rebuild_keys(&mut self) {
        self.keys.clear();
        for (index, value) in self.values.iter().enumerate() {
            self.keys.insert(value.hash_key(), index);
        }
    }
}

impl<T: Hashable + Clone> UniqueSet<T> {
    /// Returns a new set keeping the elements for which the predicate is
    /// true, re-indexed from 0.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T, usize) -> bool,
    {
        self.values
            .iter()
            .enumerate()
            .filter(|&(index, value)| predicate(value, index))
            .map(|(_, value)| value.clone())
            .collect()
    }

    /// Splits the set into consecutive sub-sets of at most `size` elements,
    /// preserving order.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NonPositiveLength`] when `size < 1`.
    pub fn chunk(
        &self,
        size: usize,
    ) -> Result<crate::OrderedList<Self>, CollectionError> {
        if size < 1 {
            return Err(CollectionError::NonPositiveLength);
        }
        Ok(self
            .values
            .chunks(size)
            .map(|chunk| chunk.iter().cloned().collect())
            .collect())
    }
}

impl<T: Hashable + PartialEq> UniqueSet<T> {
    /// Replaces the element at `index` with `value`.
    ///
    /// When a strictly equal `value` is already present, this is a no-op
    /// only if that occurrence sits exactly at `index`; any other collision
    /// is a conflict. An index equal to the current length appends.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::IndexOutOfRange`] when `index > len`.
    /// - [`CollectionError::DuplicateValue`] when `value` already exists at
    ///   a different index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::{set_of, CollectionError};
    ///
    /// let mut set = set_of([1, 2, 3]);
    /// set.set(1, 4)?;
    /// assert_eq!(set.as_slice(), &[1, 4, 3]);
    ///
    /// let mut clashing = set_of([1, 2, 3, 4]);
    /// assert_eq!(clashing.set(1, 4), Err(CollectionError::DuplicateValue));
    /// # Ok::<(), orderly::CollectionError>(())
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<(), CollectionError> {
        if index > self.values.len() {
            return Err(CollectionError::IndexOutOfRange {
                index,
                length: self.values.len(),
            });
        }

        if self.contains(&value) {
            if index < self.values.len() && self.values[index] == value {
                return Ok(());
            }
            return Err(CollectionError::DuplicateValue);
        }

        if index == self.values.len() {
            self.add(value);
            return Ok(());
        }

        let previous_key = self.values[index].hash_key();
        self.keys.remove(&previous_key);
        self.keys.insert(value.hash_key(), index);
        self.values[index] = value;
        Ok(())
    }

    /// Replaces each element with `function(value, index)` in place,
    /// positions preserved.
    ///
    /// # Errors
    ///
    /// [`CollectionError::DuplicateValue`] when a mapped value collides with
    /// an element at a different index. Positions before the collision keep
    /// their replaced values.
    pub fn apply<F>(&mut self, mut function: F) -> Result<(), CollectionError>
    where
        F: FnMut(&T, usize) -> T,
    {
        for index in 0..self.values.len() {
            let replacement = function(&self.values[index], index);
            self.set(index, replacement)?;
        }
        Ok(())
    }
}

impl<T: Hashable + Ord> UniqueSet<T> {
    /// Sorts the set in place by natural order and rebuilds the key map.
    pub fn sort(&mut self, direction: crate::SortDirection) {
        self.values
            .sort_unstable_by(|a, b| direction.apply(a.cmp(b)));
        self.rebuild_keys();
    }
}

// =============================================================================
// Collection
// =============================================================================

impl<T: Clone + PartialEq + Hashable> Collection for UniqueSet<T> {
    type Key = usize;
    type Value = T;

    fn len(&self) -> usize {
        self.values.len()
    }

    fn key_at(&self, position: usize) -> usize {
        position
    }

    fn value_at(&self, position: usize) -> &T {
        &self.values[position]
    }
}

// =============================================================================
// Standard trait implementations
// =============================================================================

impl<T: Hashable> Default for UniqueSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hashable> FromIterator<T> for UniqueSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        let mut set = Self::new();
        set.push_all(iterator);
        set
    }
}

impl<T: Hashable> Extend<T> for UniqueSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iterator: I) {
        self.push_all(iterator);
    }
}

impl<T> IntoIterator for UniqueSet<T> {
    type Item = T;
    type IntoIter = UniqueSetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        UniqueSetIntoIterator {
            inner: self.values.into_iter(),
        }
    }
}

impl<'a, T: Hashable> IntoIterator for &'a UniqueSet<T> {
    type Item = &'a T;
    type IntoIter = UniqueSetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for UniqueSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<T: Eq> Eq for UniqueSet<T> {}

impl<T: Hash> Hash for UniqueSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.values.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for UniqueSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.values.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for UniqueSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("{")?;
        for (index, value) in self.values.iter().enumerate() {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{value}")?;
        }
        formatter.write_str("}")
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over a [`UniqueSet`].
pub struct UniqueSetIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for UniqueSetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for UniqueSetIterator<'_, T> {}

/// Owning iterator over a [`UniqueSet`].
pub struct UniqueSetIntoIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for UniqueSetIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for UniqueSetIntoIterator<T> {}

// =============================================================================
// Tests
// =============================================================================
