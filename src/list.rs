//! Contiguous, integer-indexed, insertion-ordered list.
//!
//! [`OrderedList`] is the most primitive container: a dense zero-based
//! sequence whose indices are exactly `0..len` with no gaps. Insertion
//! order, iteration order, and index order always coincide; every removal
//! re-densifies the indices.
//!
//! # Examples
//!
//! ```rust
//! use orderly::{Collection, OrderedList, SortDirection};
//!
//! let mut list: OrderedList<i32> = [3, 1, 2].into_iter().collect();
//! list.push(4);
//! list.sort(SortDirection::Ascending);
//! assert_eq!(list.as_slice(), &[1, 2, 3, 4]);
//!
//! let doubled = list.map(|value, _index| value * 2);
//! assert_eq!(doubled.as_slice(), &[2, 4, 6, 8]);
//! assert_eq!(list.search(&3), Some(2));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::repeat_n;

use crate::collection::Collection;
use crate::error::CollectionError;

// =============================================================================
// OrderedList
// =============================================================================

/// A resizable, dense, zero-based integer-indexed sequence.
///
/// Invariant: indices are exactly `0..len`, contiguous, no gaps. All
/// removal operations shift later elements left by one.
#[derive(Clone)]
pub struct OrderedList<T> {
    values: Vec<T>,
}

impl<T> OrderedList<T> {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::OrderedList;
    ///
    /// let list: OrderedList<i32> = OrderedList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Returns the number of elements in the list.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
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

    /// Returns a mutable borrow of the element at `index`.
    ///
    /// This is the scoped replacement for aliasing reads: compound in-place
    /// mutation goes through a mutable borrow instead of an exposed internal
    /// reference.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexNotFound`] when `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, CollectionError> {
        self.values
            .get_mut(index)
            .ok_or(CollectionError::IndexNotFound { index })
    }

    /// Writes `value` at `index`. An index equal to the current length
    /// appends.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfRange`] when `index > len`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), CollectionError> {
        match index.cmp(&self.values.len()) {
            Ordering::Less => {
                self.values[index] = value;
                Ok(())
            }
            Ordering::Equal => {
                self.values.push(value);
                Ok(())
            }
            Ordering::Greater => Err(CollectionError::IndexOutOfRange {
                index,
                length: self.values.len(),
            }),
        }
    }

    /// Removes and returns the element at `index`, shifting all later
    /// elements left by one.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexNotFound`] when `index >= len`.
    pub fn unset(&mut self, index: usize) -> Result<T, CollectionError> {
        if index >= self.values.len() {
            return Err(CollectionError::IndexNotFound { index });
        }
        Ok(self.values.remove(index))
    }

    /// Appends a value to the end of the list.
    pub fn push(&mut self, value: T) {
        self.values.push(value);
    }

    /// Appends every value in order.
    pub fn push_all(&mut self, values: impl IntoIterator<Item = T>) {
        self.values.extend(values);
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Empty`] when the list is empty.
    pub fn pop(&mut self) -> Result<T, CollectionError> {
        self.values.pop().ok_or(CollectionError::Empty)
    }

    /// Removes and returns the first element, shifting the rest left.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Empty`] when the list is empty.
    pub fn shift(&mut self) -> Result<T, CollectionError> {
        if self.values.is_empty() {
            return Err(CollectionError::Empty);
        }
        Ok(self.values.remove(0))
    }

    /// Sorts the list in place with a caller comparator.
    ///
    /// The comparator must be a total preorder; an inconsistent comparator
    /// leaves the elements in an unspecified permutation.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.values.sort_unstable_by(compare);
    }

    /// Applies `function` to every element in place, preserving positions.
    pub fn apply<F>(&mut self, mut function: F)
    where
        F: FnMut(&T, usize) -> T,
    {
        for (index, value) in self.values.iter_mut().enumerate() {
            *value = function(&*value, index);
        }
    }

    /// Returns the elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Consumes the list, returning the backing vector.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }

    /// Returns an iterator over the elements in index order.
    #[must_use]
    pub fn iter(&self) -> OrderedListIterator<'_, T> {
        OrderedListIterator {
            inner: self.values.iter(),
        }
    }
}

impl<T: Ord> OrderedList<T> {
    /// Sorts the list in place by natural order, ascending or descending.
    pub fn sort(&mut self, direction: crate::SortDirection) {
        self.values
            .sort_unstable_by(|a, b| direction.apply(a.cmp(b)));
    }
}

impl<T: Clone> OrderedList<T> {
    /// Grows the list to `length` elements by inserting copies of `value`
    /// on the left. No-op when the list already has at least `length`
    /// elements.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NonPositiveLength`] when `length < 1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::list_of;
    ///
    /// let mut list = list_of([1, 2]);
    /// list.pad_left(5, 0)?;
    /// assert_eq!(list.as_slice(), &[0, 0, 0, 1, 2]);
    /// # Ok::<(), orderly::CollectionError>(())
    /// ```
    pub fn pad_left(&mut self, length: usize, value: T) -> Result<(), CollectionError> {
        let missing = self.pad_missing(length)?;
        self.values.splice(0..0, repeat_n(value, missing));
        Ok(())
    }

    /// Grows the list to `length` elements by appending copies of `value`.
    /// No-op when the list already has at least `length` elements.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NonPositiveLength`] when `length < 1`.
    pub fn pad_right(&mut self, length: usize, value: T) -> Result<(), CollectionError> {
        let missing = self.pad_missing(length)?;
        self.values.extend(repeat_n(value, missing));
        Ok(())
    }

    fn pad_missing(&self, length: usize) -> Result<usize, CollectionError> {
        if length < 1 {
            return Err(CollectionError::NonPositiveLength);
        }
        Ok(length.saturating_sub(self.values.len()))
    }

    /// Splits the list into consecutive sub-lists of at most `size`
    /// elements, preserving order. The last chunk may be shorter.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NonPositiveLength`] when `size < 1`.
    pub fn chunk(&self, size: usize) -> Result<OrderedList<Self>, CollectionError> {
        if size < 1 {
            return Err(CollectionError::NonPositiveLength);
        }
        Ok(self
            .values
            .chunks(size)
            .map(|chunk| Self::from(chunk.to_vec()))
            .collect())
    }

    /// Returns a new list with `function(value, index)` applied to each
    /// element, re-indexed from 0.
    #[must_use]
    pub fn map<U, F>(&self, mut function: F) -> OrderedList<U>
    where
        F: FnMut(&T, usize) -> U,
    {
        self.values
            .iter()
            .enumerate()
            .map(|(index, value)| function(value, index))
            .collect()
    }

    /// Returns a new list keeping the elements for which the predicate is
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
}

// =============================================================================
// Collection
// =============================================================================

impl<T: Clone + PartialEq> Collection for OrderedList<T> {
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

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for OrderedList<T> {
    fn from(values: Vec<T>) -> Self {
        Self { values }
    }
}

impl<T> FromIterator<T> for OrderedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self {
            values: iterator.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for OrderedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iterator: I) {
        self.values.extend(iterator);
    }
}

impl<T> IntoIterator for OrderedList<T> {
    type Item = T;
    type IntoIter = OrderedListIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        OrderedListIntoIterator {
            inner: self.values.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;
    type IntoIter = OrderedListIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for OrderedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<T: Eq> Eq for OrderedList<T> {}

impl<T: Hash> Hash for OrderedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.values.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.values.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for OrderedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("[")?;
        for (index, value) in self.values.iter().enumerate() {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{value}")?;
        }
        formatter.write_str("]")
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over an [`OrderedList`].
pub struct OrderedListIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for OrderedListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for OrderedListIterator<'_, T> {}

impl<T> DoubleEndedIterator for OrderedListIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

/// Owning iterator over an [`OrderedList`].
pub struct OrderedListIntoIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for OrderedListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for OrderedListIntoIterator<T> {}

impl<T> DoubleEndedIterator for OrderedListIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

// =============================================================================
// Tests
// =============================================================================
