//! The shared operation algebra.
//!
//! Every container implements [`Collection`] by exposing three primitive
//! accessors (`len`, `key_at`, `value_at`); the whole cross-container
//! algebra — conversions, search, folds, `diff`/`intersect`/`merge`,
//! `flip`, `count_values`, random sampling — is defined once here as
//! provided methods on top of those primitives.
//!
//! `diff`, `intersect`, and `merge` accept *mixed* container kinds through
//! the object-safe [`ValueSequence`] and [`PairSequence`] seams, which every
//! `Collection` implements for free.
//!
//! # Examples
//!
//! ```rust
//! use orderly::{Collection, Key, dictionary_of, list_of, set_of};
//!
//! let base = list_of([1, 2, 34, 4, 48, 5, 10]);
//! let survivors = base.diff(&[
//!     &list_of([4, 5, 6, 7, 8]),
//!     &dictionary_of([(Key::from(1_i64), 1), (Key::from(2_i64), 1)]),
//!     &set_of([34, 10]),
//! ]);
//!
//! assert_eq!(survivors.get(&1_usize), Ok(&2));
//! assert_eq!(survivors.get(&4_usize), Ok(&48));
//! assert_eq!(survivors.len(), 2);
//! ```

use rand::Rng;
use rand::rngs::OsRng;
use rand::seq::index::sample;
use rand::thread_rng;

use crate::dictionary::Dictionary;
use crate::error::CollectionError;
use crate::key::Hashable;
use crate::list::OrderedList;
use crate::set::UniqueSet;

// =============================================================================
// Object-safe seams
// =============================================================================

/// A source of values, independent of container kind.
///
/// `diff` and `intersect` compare against other collections only through
/// their values; this seam lets a list be diffed against dictionaries and
/// sets in one call.
pub trait ValueSequence<V> {
    /// Returns a fresh copy of the values in iteration order.
    fn sequence_values(&self) -> Vec<V>;
}

impl<C: Collection> ValueSequence<C::Value> for C {
    fn sequence_values(&self) -> Vec<C::Value> {
        (0..self.len())
            .map(|position| self.value_at(position).clone())
            .collect()
    }
}

/// A source of key/value pairs, independent of container kind.
///
/// The key type parameter is the *target* key type: a positional container
/// (keys of `usize`) merges into a dictionary keyed by any `K: From<usize>`,
/// including the heterogeneous [`Key`](crate::Key) enum.
pub trait PairSequence<K, V> {
    /// Returns a fresh copy of the (key, value) pairs in iteration order.
    fn sequence_pairs(&self) -> Vec<(K, V)>;
}

impl<C: Collection, K: From<C::Key>> PairSequence<K, C::Value> for C {
    fn sequence_pairs(&self) -> Vec<(K, C::Value)> {
        (0..self.len())
            .map(|position| (K::from(self.key_at(position)), self.value_at(position).clone()))
            .collect()
    }
}

// =============================================================================
// Collection
// =============================================================================

/// The behavioral contract shared by all three container kinds.
///
/// Implementors supply [`len`](Collection::len),
/// [`key_at`](Collection::key_at), and [`value_at`](Collection::value_at);
/// everything else is provided. All provided operations are non-mutating and
/// return freshly allocated containers that never alias the source's
/// storage.
///
/// Value comparison in `contains`, `search`, `diff`, and `intersect` is
/// strict `PartialEq`; distinctness in `count_values` and key identity in
/// the returned dictionaries use [`Hashable`] normalization.
pub trait Collection {
    /// The key type: positions for lists and sets, the declared key type for
    /// dictionaries.
    type Key: Clone + Hashable;

    /// The element type.
    type Value: Clone + PartialEq;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns the key at the given iteration position.
    ///
    /// # Panics
    ///
    /// May panic when `position >= self.len()`; positions are an internal
    /// contract of the algebra layer.
    fn key_at(&self, position: usize) -> Self::Key;

    /// Returns the value at the given iteration position.
    ///
    /// # Panics
    ///
    /// May panic when `position >= self.len()`; positions are an internal
    /// contract of the algebra layer.
    fn value_at(&self, position: usize) -> &Self::Value;

    /// Returns `true` if the collection contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the keys as a set, in iteration order.
    fn keys(&self) -> UniqueSet<Self::Key> {
        (0..self.len()).map(|position| self.key_at(position)).collect()
    }

    /// Returns a fresh, index-renumbered list of the values.
    fn values(&self) -> OrderedList<Self::Value> {
        (0..self.len())
            .map(|position| self.value_at(position).clone())
            .collect()
    }

    /// Returns the values as a list. Alias for [`values`](Collection::values).
    fn to_list(&self) -> OrderedList<Self::Value> {
        self.values()
    }

    /// Returns the values as a set, deduplicated in first-seen order.
    fn to_set(&self) -> UniqueSet<Self::Value>
    where
        Self::Value: Hashable,
    {
        (0..self.len())
            .map(|position| self.value_at(position).clone())
            .collect()
    }

    /// Returns a dictionary pairing each key with its value, in iteration
    /// order.
    fn to_dictionary(&self) -> Dictionary<Self::Key, Self::Value> {
        let mut dictionary = Dictionary::new();
        for position in 0..self.len() {
            dictionary.set(self.key_at(position), self.value_at(position).clone());
        }
        dictionary
    }

    /// Returns `true` if a strictly equal value is present.
    fn contains(&self, value: &Self::Value) -> bool {
        (0..self.len()).any(|position| self.value_at(position) == value)
    }

    /// Returns the key of the first strictly equal value, if any.
    fn search(&self, value: &Self::Value) -> Option<Self::Key> {
        (0..self.len())
            .find(|&position| self.value_at(position) == value)
            .map(|position| self.key_at(position))
    }

    /// Returns the keys of all values matching the predicate, in iteration
    /// order.
    fn search_all<P>(&self, mut predicate: P) -> OrderedList<Self::Key>
    where
        P: FnMut(&Self::Value) -> bool,
    {
        (0..self.len())
            .filter(|&position| predicate(self.value_at(position)))
            .map(|position| self.key_at(position))
            .collect()
    }

    /// Returns `true` if any value matches the predicate.
    fn any<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Value) -> bool,
    {
        (0..self.len()).any(|position| predicate(self.value_at(position)))
    }

    /// Returns `true` if every value matches the predicate.
    fn every<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Value) -> bool,
    {
        (0..self.len()).all(|position| predicate(self.value_at(position)))
    }

    /// Left-folds the values in iteration order.
    fn reduce<A, F>(&self, initial: A, mut function: F) -> A
    where
        F: FnMut(A, &Self::Value) -> A,
    {
        let mut accumulator = initial;
        for position in 0..self.len() {
            accumulator = function(accumulator, self.value_at(position));
        }
        accumulator
    }

    /// Returns a dictionary of this collection's (key, value) pairs whose
    /// value does not appear in any of the other collections.
    fn diff(&self, others: &[&dyn ValueSequence<Self::Value>]) -> Dictionary<Self::Key, Self::Value> {
        let pools: Vec<Vec<Self::Value>> =
            others.iter().map(|other| other.sequence_values()).collect();
        let mut result = Dictionary::new();
        for position in 0..self.len() {
            let value = self.value_at(position);
            let appears = pools
                .iter()
                .any(|pool| pool.iter().any(|candidate| candidate == value));
            if !appears {
                result.set(self.key_at(position), value.clone());
            }
        }
        result
    }

    /// Returns a dictionary of this collection's (key, value) pairs whose
    /// value appears in every one of the other collections.
    fn intersect(
        &self,
        others: &[&dyn ValueSequence<Self::Value>],
    ) -> Dictionary<Self::Key, Self::Value> {
        let pools: Vec<Vec<Self::Value>> =
            others.iter().map(|other| other.sequence_values()).collect();
        let mut result = Dictionary::new();
        for position in 0..self.len() {
            let value = self.value_at(position);
            let appears_everywhere = pools
                .iter()
                .all(|pool| pool.iter().any(|candidate| candidate == value));
            if appears_everywhere {
                result.set(self.key_at(position), value.clone());
            }
        }
        result
    }

    /// Merges this collection and the others into a new dictionary.
    ///
    /// Upserts run in argument order, so later collections win on key
    /// collision. Keys are preserved regardless of origin: `K2` only has to
    /// be convertible from each source's key type.
    fn merge<K2>(&self, others: &[&dyn PairSequence<K2, Self::Value>]) -> Dictionary<K2, Self::Value>
    where
        K2: From<Self::Key> + Clone + Hashable,
        Self: Sized,
    {
        let mut merged = Dictionary::new();
        for (key, value) in self.sequence_pairs() {
            merged.set(key, value);
        }
        for other in others {
            for (key, value) in other.sequence_pairs() {
                merged.set(key, value);
            }
        }
        merged
    }

    /// Returns a dictionary mapping each value to its original key. When two
    /// elements share a value, the later one wins.
    fn flip(&self) -> Dictionary<Self::Value, Self::Key>
    where
        Self::Value: Hashable,
    {
        let mut flipped = Dictionary::new();
        for position in 0..self.len() {
            flipped.set(self.value_at(position).clone(), self.key_at(position));
        }
        flipped
    }

    /// Returns a dictionary from each distinct value (by normalized key) to
    /// its number of occurrences.
    fn count_values(&self) -> Dictionary<Self::Value, usize>
    where
        Self::Value: Hashable,
    {
        let mut counts: Dictionary<Self::Value, usize> = Dictionary::new();
        for position in 0..self.len() {
            let value = self.value_at(position);
            let occurrences = counts.get(value).map_or(1, |count| count + 1);
            counts.set(value.clone(), occurrences);
        }
        counts
    }

    /// Returns a dictionary of `count` entries drawn uniformly without
    /// replacement, keyed by their original keys and listed in original
    /// iteration order.
    ///
    /// Uses the thread-local generator from `rand`; it is **not**
    /// cryptographically secure. Use
    /// [`secure_random`](Collection::secure_random) when that matters.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::Empty`] when the collection has no elements.
    /// - [`CollectionError::SampleOutOfRange`] when `count` is zero or
    ///   exceeds the number of elements.
    fn random(&self, count: usize) -> Result<Dictionary<Self::Key, Self::Value>, CollectionError>
    where
        Self: Sized,
    {
        sample_entries(self, &mut thread_rng(), count)
    }

    /// Returns a dictionary of `count` entries drawn uniformly without
    /// replacement using the operating system's cryptographically secure
    /// generator.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::Empty`] when the collection has no elements.
    /// - [`CollectionError::SampleOutOfRange`] when `count` is zero or
    ///   exceeds the number of elements.
    fn secure_random(
        &self,
        count: usize,
    ) -> Result<Dictionary<Self::Key, Self::Value>, CollectionError>
    where
        Self: Sized,
    {
        sample_entries(self, &mut OsRng, count)
    }
}

/// Draws `count` distinct positions and keeps them in original order, which
/// is what the returned dictionary's iteration order reflects.
fn sample_entries<C, R>(
    collection: &C,
    rng: &mut R,
    count: usize,
) -> Result<Dictionary<C::Key, C::Value>, CollectionError>
where
    C: Collection,
    R: Rng,
{
    if collection.is_empty() {
        return Err(CollectionError::Empty);
    }

    let available = collection.len();
    if count == 0 || count > available {
        return Err(CollectionError::SampleOutOfRange {
            requested: count,
            available,
        });
    }

    let mut positions = sample(rng, available, count).into_vec();
    positions.sort_unstable();

    let mut result = Dictionary::new();
    for position in positions {
        result.set(
            collection.key_at(position),
            collection.value_at(position).clone(),
        );
    }
    Ok(result)
}
