//! The immutable key/value tuple backing dictionary storage.

use std::fmt;

/// An immutable key+value tuple.
///
/// A `Pair` never mutates: [`with_key`](Pair::with_key) and
/// [`with_value`](Pair::with_value) produce fresh pairs. Pairs are owned by
/// the dictionary entry holding them, or transiently by algebra operations.
///
/// # Examples
///
/// ```rust
/// use orderly::Pair;
///
/// let pair = Pair::new("answer", 41);
/// let corrected = pair.with_value(42);
///
/// assert_eq!(pair.value(), &41);
/// assert_eq!(corrected.key(), &"answer");
/// assert_eq!(corrected.value(), &42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pair<K, V> {
    key: K,
    value: V,
}

impl<K, V> Pair<K, V> {
    /// Creates a pair from its key and value.
    #[inline]
    #[must_use]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Returns the key of the pair.
    #[inline]
    #[must_use]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value of the pair.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Creates a new pair with the specified key and this pair's value.
    #[must_use]
    pub fn with_key(&self, key: K) -> Self
    where
        V: Clone,
    {
        Self {
            key,
            value: self.value.clone(),
        }
    }

    /// Creates a new pair with this pair's key and the specified value.
    #[must_use]
    pub fn with_value(&self, value: V) -> Self
    where
        K: Clone,
    {
        Self {
            key: self.key.clone(),
            value,
        }
    }

    /// Consumes the pair, returning its key and value.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }

    /// Consumes the pair, returning its key.
    #[inline]
    #[must_use]
    pub fn into_key(self) -> K {
        self.key
    }

    /// Consumes the pair, returning its value.
    #[inline]
    #[must_use]
    pub fn into_value(self) -> V {
        self.value
    }

    /// Replaces the stored value in place. Crate-internal so `Pair` stays
    /// externally immutable; used by `Dictionary::apply`.
    pub(crate) fn replace_value(&mut self, value: V) {
        self.value = value;
    }

    /// Mutable borrow of the stored value. Crate-internal, backing
    /// `Dictionary::get_mut`.
    pub(crate) fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }
}

impl<K, V> From<(K, V)> for Pair<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Pair<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: {}", self.key, self.value)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_accessors() {
        let pair = Pair::new("k", 1);
        assert_eq!(pair.key(), &"k");
        assert_eq!(pair.value(), &1);
        assert_eq!(pair.into_parts(), ("k", 1));
    }

    #[rstest]
    fn test_with_key_leaves_original_untouched() {
        let pair = Pair::new("old", 1);
        let renamed = pair.with_key("new");
        assert_eq!(pair.key(), &"old");
        assert_eq!(renamed.key(), &"new");
        assert_eq!(renamed.value(), &1);
    }

    #[rstest]
    fn test_with_value_leaves_original_untouched() {
        let pair = Pair::new("k", 1);
        let updated = pair.with_value(2);
        assert_eq!(pair.value(), &1);
        assert_eq!(updated.value(), &2);
    }

    #[rstest]
    fn test_display() {
        assert_eq!(format!("{}", Pair::new("k", 1)), "k: 1");
    }
}
