//! Insertion-ordered key/value dictionary.
//!
//! [`Dictionary`] stores an ordered sequence of [`Pair`]s plus a
//! normalized-key map into that sequence, kept in lock-step. Iteration
//! yields pairs in order of first assignment; re-assigning an existing key
//! overwrites in place without changing its position.
//!
//! Keys are anything [`Hashable`] — a concrete type, or the dynamic
//! [`Key`](crate::Key) enum when one dictionary must mix key kinds.
//!
//! # Examples
//!
//! ```rust
//! use orderly::{dictionary_of, Collection};
//!
//! let mut ages = dictionary_of([("ada", 36), ("grace", 45)]);
//! ages.set("ada", 37);
//! ages.set("edsger", 72);
//!
//! let names: Vec<&&str> = ages.iter().map(|(key, _)| key).collect();
//! assert_eq!(names, [&"ada", &"grace", &"edsger"]);
//! assert_eq!(ages.get(&"ada"), Ok(&37));
//! ```

use std::cmp::Ordering;
use std::fmt;

use rustc_hash::FxHashMap;

use crate::collection::Collection;
use crate::error::CollectionError;
use crate::key::{HashKey, Hashable};
use crate::list::OrderedList;
use crate::pair::Pair;
use crate::set::UniqueSet;

// =============================================================================
// Dictionary
// =============================================================================

/// An ordered mapping from normalized keys to values.
///
/// Invariant: the pair sequence and the key map always agree; any interior
/// removal shifts later indices down and rebuilds the map. Removing the
/// last pair is O(1), no reindexing needed.
#[derive(Clone)]
pub struct Dictionary<K, V> {
    entries: Vec<Pair<K, V>>,
    keys: FxHashMap<HashKey, usize>,
}

impl<K: Hashable, V> Dictionary<K, V> {
    /// Creates a new empty dictionary.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            keys: FxHashMap::default(),
        }
    }

    /// Builds a dictionary pairing `keys[i]` with `values[i]`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::KeyValueCountMismatch`] when the two sequences'
    /// lengths differ.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::{Dictionary, list_of, set_of};
    ///
    /// let ranks = Dictionary::combine(&set_of(["gold", "silver"]), &list_of([1, 2]))?;
    /// assert_eq!(ranks.get(&"silver"), Ok(&2));
    /// # Ok::<(), orderly::CollectionError>(())
    /// ```
    pub fn combine(
        keys: &UniqueSet<K>,
        values: &OrderedList<V>,
    ) -> Result<Self, CollectionError>
    where
        K: Clone,
        V: Clone,
    {
        if keys.len() != values.len() {
            return Err(CollectionError::KeyValueCountMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }

        let mut dictionary = Self::new();
        for (key, value) in keys.iter().zip(values.iter()) {
            dictionary.set(key.clone(), value.clone());
        }
        Ok(dictionary)
    }

    /// Returns the number of entries in the dictionary.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the dictionary contains no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if a key normalizing to the same token exists.
    #[must_use]
    pub fn contains_key<Q: Hashable + ?Sized>(&self, key: &Q) -> bool {
        self.keys.contains_key(&key.hash_key())
    }

    /// Returns the value stored under `key`.
    ///
    /// Lookup goes through normalization, so any [`Hashable`] key form
    /// works: a `Dictionary<String, _>` resolves `&str` keys directly.
    ///
    /// # Errors
    ///
    /// [`CollectionError::KeyNotFound`] when the key is missing.
    pub fn get<Q: Hashable + ?Sized>(&self, key: &Q) -> Result<&V, CollectionError> {
        let index = self.index_of(key)?;
        Ok(self.entries[index].value())
    }

    /// Returns a mutable borrow of the value stored under `key`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::KeyNotFound`] when the key is missing.
    pub fn get_mut<Q: Hashable + ?Sized>(&mut self, key: &Q) -> Result<&mut V, CollectionError> {
        let index = self.index_of(key)?;
        Ok(self.entries[index].value_mut())
    }

    /// Upserts: overwrites in place when the key exists (keeping its
    /// position), otherwise appends a new pair.
    pub fn set(&mut self, key: K, value: V) {
        let token = key.hash_key();
        if let Some(&index) = self.keys.get(&token) {
            self.entries[index] = Pair::new(key, value);
            return;
        }
        self.keys.insert(token, self.entries.len());
        self.entries.push(Pair::new(key, value));
    }

    /// Removes the entry under `key` and returns its value.
    ///
    /// Removing the last entry is O(1); interior removal shifts later
    /// entries down and rebuilds the key map.
    ///
    /// # Errors
    ///
    /// [`CollectionError::KeyNotFound`] when the key is missing.
    pub fn unset<Q: Hashable + ?Sized>(&mut self, key: &Q) -> Result<V, CollectionError> {
        let index = self.index_of(key)?;

        if index == self.entries.len() - 1 {
            self.keys.remove(&key.hash_key());
            let pair = self.entries.pop().ok_or(CollectionError::KeyNotFound)?;
            return Ok(pair.into_value());
        }

        let pair = self.entries.remove(index);
        self.rebuild_keys();
        Ok(pair.into_value())
    }

    /// Removes and returns the value of the last pair.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Empty`] when the dictionary is empty.
    pub fn pop(&mut self) -> Result<V, CollectionError> {
        let pair = self.entries.pop().ok_or(CollectionError::Empty)?;
        self.keys.remove(&pair.key().hash_key());
        Ok(pair.into_value())
    }

    /// Removes and returns the value of the first pair, shifting the rest
    /// down and rebuilding the key map.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Empty`] when the dictionary is empty.
    pub fn shift(&mut self) -> Result<V, CollectionError> {
        if self.entries.is_empty() {
            return Err(CollectionError::Empty);
        }
        let pair = self.entries.remove(0);
        self.rebuild_keys();
        Ok(pair.into_value())
    }

    /// Replaces each value with `function(value, key)` in place, iteration
    /// positions preserved.
    pub fn apply<F>(&mut self, mut function: F)
    where
        F: FnMut(&V, &K) -> V,
    {
        for pair in &mut self.entries {
            let replacement = function(pair.value(), pair.key());
            pair.replace_value(replacement);
        }
    }

    /// Sorts the entries in place with a caller comparator over pairs and
    /// rebuilds the key map. The comparator must be a total preorder.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Pair<K, V>, &Pair<K, V>) -> Ordering,
    {
        self.entries.sort_unstable_by(compare);
        self.rebuild_keys();
    }

    /// Returns the entries as a slice of pairs.
    #[inline]
    #[must_use]
    pub fn as_pairs(&self) -> &[Pair<K, V>] {
        &self.entries
    }

    /// Returns an iterator over `(&key, &value)` in insertion order.
    #[must_use]
    pub fn iter(&self) -> DictionaryIterator<'_, K, V> {
        DictionaryIterator {
            inner: self.entries.iter(),
        }
    }

    fn index_of<Q: Hashable + ?Sized>(&self, key: &Q) -> Result<usize, CollectionError> {
        self.keys
            .get(&key.hash_key())
            .copied()
            .ok_or(CollectionError::KeyNotFound)
    }

    fn rebuild_keys(&mut self) {
        self.keys.clear();
        for (index, pair) in self.entries.iter().enumerate() {
            self.keys.insert(pair.key().hash_key(), index);
        }
    }
}

impl<K: Hashable, V: Ord> Dictionary<K, V> {
    /// Sorts the entries in place by value and rebuilds the key map.
    pub fn sort(&mut self, direction: crate::SortDirection) {
        self.entries
            .sort_unstable_by(|a, b| direction.apply(a.value().cmp(b.value())));
        self.rebuild_keys();
    }
}

impl<K: Hashable + Clone, V> Dictionary<K, V> {
    /// Returns a new dictionary with `function(value, key)` applied to each
    /// value, original keys preserved.
    #[must_use]
    pub fn map<U, F>(&self, mut function: F) -> Dictionary<K, U>
    where
        F: FnMut(&V, &K) -> U,
    {
        let mut mapped = Dictionary::new();
        for pair in &self.entries {
            mapped.set(pair.key().clone(), function(pair.value(), pair.key()));
        }
        mapped
    }
}

impl<K: Hashable + Clone, V: Clone> Dictionary<K, V> {
    /// Returns a new dictionary keeping the entries for which the predicate
    /// is true, original keys preserved.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&V, &K) -> bool,
    {
        let mut kept = Self::new();
        for pair in &self.entries {
            if predicate(pair.value(), pair.key()) {
                kept.set(pair.key().clone(), pair.value().clone());
            }
        }
        kept
    }

    /// Splits the dictionary into consecutive sub-dictionaries of at most
    /// `size` entries, preserving order and keys.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NonPositiveLength`] when `size < 1`.
    pub fn chunk(&self, size: usize) -> Result<OrderedList<Self>, CollectionError> {
        if size < 1 {
            return Err(CollectionError::NonPositiveLength);
        }
        Ok(self
            .entries
            .chunks(size)
            .map(|chunk| {
                let mut part = Self::new();
                for pair in chunk {
                    part.set(pair.key().clone(), pair.value().clone());
                }
                part
            })
            .collect())
    }
}

// =============================================================================
// Collection
// =============================================================================

impl<K: Clone + Hashable, V: Clone + PartialEq> Collection for Dictionary<K, V> {
    type Key = K;
    type Value = V;

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn key_at(&self, position: usize) -> K {
        self.entries[position].key().clone()
    }

    fn value_at(&self, position: usize) -> &V {
        self.entries[position].value()
    }
}

// =============================================================================
// Standard trait implementations
// =============================================================================

impl<K: Hashable, V> Default for Dictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hashable, V> FromIterator<(K, V)> for Dictionary<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iterator: I) -> Self {
        let mut dictionary = Self::new();
        for (key, value) in iterator {
            dictionary.set(key, value);
        }
        dictionary
    }
}

impl<K: Hashable, V> FromIterator<Pair<K, V>> for Dictionary<K, V> {
    fn from_iter<I: IntoIterator<Item = Pair<K, V>>>(iterator: I) -> Self {
        iterator.into_iter().map(Pair::into_parts).collect()
    }
}

impl<K: Hashable, V> Extend<(K, V)> for Dictionary<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iterator: I) {
        for (key, value) in iterator {
            self.set(key, value);
        }
    }
}

impl<K, V> IntoIterator for Dictionary<K, V> {
    type Item = (K, V);
    type IntoIter = DictionaryIntoIterator<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        DictionaryIntoIterator {
            inner: self.entries.into_iter(),
        }
    }
}

impl<'a, K: Hashable, V> IntoIterator for &'a Dictionary<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = DictionaryIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for Dictionary<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq, V: Eq> Eq for Dictionary<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Dictionary<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_map()
            .entries(self.entries.iter().map(|pair| (pair.key(), pair.value())))
            .finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Dictionary<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("{")?;
        for (index, pair) in self.entries.iter().enumerate() {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{pair}")?;
        }
        formatter.write_str("}")
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over a [`Dictionary`], yielding `(&key, &value)`.
pub struct DictionaryIterator<'a, K, V> {
    inner: std::slice::Iter<'a, Pair<K, V>>,
}

impl<'a, K, V> Iterator for DictionaryIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|pair| (pair.key(), pair.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for DictionaryIterator<'_, K, V> {}

/// Owning iterator over a [`Dictionary`], yielding `(key, value)`.
pub struct DictionaryIntoIterator<K, V> {
    inner: std::vec::IntoIter<Pair<K, V>>,
}

impl<K, V> Iterator for DictionaryIntoIterator<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Pair::into_parts)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for DictionaryIntoIterator<K, V> {}

// =============================================================================
// Tests
// =============================================================================
