//! Key normalization.
//!
//! Sets and dictionaries decide uniqueness by converting a value into a
//! canonical [`HashKey`] token. Two values are the same key exactly when
//! their tokens are equal. The [`Hashable`] trait is the extension point:
//! any type can declare how it normalizes, and types without a natural
//! canonical form embed an [`ObjectToken`] to fall back to per-instance
//! identity.
//!
//! # Examples
//!
//! ```rust
//! use orderly::{Hashable, Key};
//!
//! assert_eq!(42_i64.hash_key(), "42".to_string().hash_key());
//! assert_eq!(Key::from(42_i64).hash_key(), Key::from("42").hash_key());
//! assert_ne!(true.hash_key(), "1".hash_key());
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Token produced for absent values. Mirrors the textual form used by the
/// reference implementation.
const NULL_KEY: &str = "type::null";

// =============================================================================
// HashKey
// =============================================================================

/// The canonical, comparable token a value normalizes to.
///
/// `HashKey` is an opaque string newtype: equality and hashing on the token
/// define key identity for [`UniqueSet`](crate::UniqueSet) and
/// [`Dictionary`](crate::Dictionary).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HashKey(String);

impl HashKey {
    /// Creates a token from its canonical text.
    #[inline]
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the canonical text of this token.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HashKey {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

// =============================================================================
// Hashable
// =============================================================================

/// A value that can be normalized into a [`HashKey`].
///
/// Implement this to control how a type behaves as a set element or
/// dictionary key. The contract: two values must produce equal tokens
/// exactly when they should be treated as the same key.
///
/// Unsupported key kinds simply do not implement `Hashable`; what the
/// reference implementation reported as a runtime type error is rejected at
/// compile time here.
pub trait Hashable {
    /// Returns the canonical token for this value.
    fn hash_key(&self) -> HashKey;
}

impl Hashable for String {
    fn hash_key(&self) -> HashKey {
        HashKey::new(self.clone())
    }
}

impl Hashable for str {
    fn hash_key(&self) -> HashKey {
        HashKey::new(self)
    }
}

impl<T: Hashable + ?Sized> Hashable for &T {
    fn hash_key(&self) -> HashKey {
        (**self).hash_key()
    }
}

macro_rules! impl_hashable_display {
    ($($kind:ty),* $(,)?) => {
        $(
            impl Hashable for $kind {
                fn hash_key(&self) -> HashKey {
                    HashKey::new(self.to_string())
                }
            }
        )*
    };
}

impl_hashable_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char
);

impl Hashable for bool {
    fn hash_key(&self) -> HashKey {
        HashKey::new(if *self { "true" } else { "false" })
    }
}

impl Hashable for () {
    fn hash_key(&self) -> HashKey {
        HashKey::new(NULL_KEY)
    }
}

impl<T: Hashable> Hashable for Option<T> {
    fn hash_key(&self) -> HashKey {
        self.as_ref()
            .map_or_else(|| HashKey::new(NULL_KEY), Hashable::hash_key)
    }
}

/// Composite values serialize structurally: the token embeds the element
/// count and each child token length-prefixed, so distinct sequences cannot
/// collide by concatenation.
impl<T: Hashable> Hashable for [T] {
    fn hash_key(&self) -> HashKey {
        let mut text = format!("seq:{}{{", self.len());
        for element in self {
            let child = element.hash_key();
            text.push_str(&child.as_str().len().to_string());
            text.push(':');
            text.push_str(child.as_str());
            text.push(';');
        }
        text.push('}');
        HashKey::new(text)
    }
}

impl<T: Hashable> Hashable for Vec<T> {
    fn hash_key(&self) -> HashKey {
        self.as_slice().hash_key()
    }
}

impl<T: Hashable, const N: usize> Hashable for [T; N] {
    fn hash_key(&self) -> HashKey {
        self.as_slice().hash_key()
    }
}

// =============================================================================
// ObjectToken
// =============================================================================

static NEXT_TOKEN: AtomicU64 = AtomicU64::new(0);

/// Ambient per-object identity token.
///
/// Types with no natural canonical form embed one of these (assigned at
/// construction) and normalize through it. The token is unique within the
/// process and stable for the token's lifetime; it is **not** stable across
/// process restarts or serialization.
///
/// # Examples
///
/// ```rust
/// use orderly::{Hashable, ObjectToken};
///
/// struct Session {
///     token: ObjectToken,
/// }
///
/// impl Hashable for Session {
///     fn hash_key(&self) -> orderly::HashKey {
///         self.token.hash_key()
///     }
/// }
///
/// let first = Session { token: ObjectToken::new() };
/// let second = Session { token: ObjectToken::new() };
/// assert_ne!(first.hash_key(), second.hash_key());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectToken(u64);

impl ObjectToken {
    /// Allocates the next process-unique token.
    #[must_use]
    pub fn new() -> Self {
        Self(NEXT_TOKEN.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ObjectToken {
    fn default() -> Self {
        Self::new()
    }
}

impl Hashable for ObjectToken {
    fn hash_key(&self) -> HashKey {
        HashKey::new(format!("object:{}", self.0))
    }
}

// =============================================================================
// Key
// =============================================================================

/// A dynamically-typed dictionary key.
///
/// A single `Dictionary<Key, V>` can mix textual, numeric, boolean, null,
/// composite, and identity-token keys, matching the heterogeneous keying of
/// the reference implementation. Numeric and textual keys normalize to the
/// same token when their canonical text matches, so `Key::from(5_i64)` and
/// `Key::from("5")` address the same entry.
///
/// # Examples
///
/// ```rust
/// use orderly::{Dictionary, Key};
///
/// let mut settings: Dictionary<Key, &str> = Dictionary::new();
/// settings.set(Key::from("name"), "orderly");
/// settings.set(Key::from(3_i64), "third");
/// settings.set(Key::Null, "fallback");
///
/// assert_eq!(settings.get(&Key::from("3")), Ok(&"third"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    /// A textual key; normalizes to the text itself.
    Text(String),
    /// An integer key; normalizes to its decimal form.
    Integer(i64),
    /// A floating-point key; normalizes to its display form.
    Float(f64),
    /// A boolean key.
    Bool(bool),
    /// The absent key; normalizes to a fixed sentinel.
    Null,
    /// A composite key; normalizes structurally.
    Sequence(Vec<Key>),
    /// A per-instance identity key.
    Token(ObjectToken),
}

impl Hashable for Key {
    fn hash_key(&self) -> HashKey {
        match self {
            Self::Text(text) => text.hash_key(),
            Self::Integer(value) => value.hash_key(),
            Self::Float(value) => value.hash_key(),
            Self::Bool(value) => value.hash_key(),
            Self::Null => HashKey::new(NULL_KEY),
            Self::Sequence(elements) => elements.hash_key(),
            Self::Token(token) => token.hash_key(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => formatter.write_str(text),
            Self::Integer(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value}"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Null => formatter.write_str("null"),
            Self::Sequence(elements) => {
                formatter.write_str("[")?;
                for (position, element) in elements.iter().enumerate() {
                    if position > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{element}")?;
                }
                formatter.write_str("]")
            }
            Self::Token(token) => write!(formatter, "{}", token.hash_key()),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

/// Positional keys from lists and sets convert losslessly; indices beyond
/// `i64::MAX` cannot occur in an in-memory dense sequence.
impl From<usize> for Key {
    #[allow(clippy::cast_possible_wrap)]
    fn from(value: usize) -> Self {
        Self::Integer(value as i64)
    }
}

impl From<f64> for Key {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Key {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<()> for Key {
    fn from((): ()) -> Self {
        Self::Null
    }
}

impl From<Vec<Key>> for Key {
    fn from(value: Vec<Key>) -> Self {
        Self::Sequence(value)
    }
}

impl From<ObjectToken> for Key {
    fn from(value: ObjectToken) -> Self {
        Self::Token(value)
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
    fn test_text_normalizes_to_itself() {
        assert_eq!("hello".hash_key().as_str(), "hello");
        assert_eq!("hello".to_string().hash_key().as_str(), "hello");
    }

    #[rstest]
    #[case(42_i64, "42")]
    #[case(-7_i64, "-7")]
    fn test_integer_normalizes_to_decimal(#[case] value: i64, #[case] expected: &str) {
        assert_eq!(value.hash_key().as_str(), expected);
    }

    #[rstest]
    fn test_integer_and_text_collide_on_canonical_form() {
        assert_eq!(5_i64.hash_key(), "5".hash_key());
        assert_eq!(5_usize.hash_key(), 5_i64.hash_key());
    }

    #[rstest]
    fn test_bool_normalization() {
        assert_eq!(true.hash_key().as_str(), "true");
        assert_eq!(false.hash_key().as_str(), "false");
        assert_ne!(true.hash_key(), "1".hash_key());
    }

    #[rstest]
    fn test_null_sentinel() {
        assert_eq!(().hash_key().as_str(), "type::null");
        let absent: Option<i32> = None;
        assert_eq!(absent.hash_key(), ().hash_key());
        assert_eq!(Some(3).hash_key(), 3.hash_key());
    }

    #[rstest]
    fn test_sequence_normalization_is_structural() {
        assert_eq!(vec![1, 2].hash_key(), vec![1, 2].hash_key());
        assert_ne!(vec![1, 2].hash_key(), vec![2, 1].hash_key());
        assert_ne!(vec![12].hash_key(), vec![1, 2].hash_key());
    }

    #[rstest]
    fn test_nested_sequences_do_not_collide() {
        let flat = vec!["a".to_string(), "b".to_string()];
        let nested = vec![vec!["a".to_string()], vec!["b".to_string()]];
        assert_ne!(flat.hash_key(), nested.hash_key());
    }

    #[rstest]
    fn test_object_tokens_are_unique() {
        let first = ObjectToken::new();
        let second = ObjectToken::new();
        assert_ne!(first.hash_key(), second.hash_key());
        assert_eq!(first.hash_key(), first.clone().hash_key());
    }

    #[rstest]
    fn test_key_variants_delegate() {
        assert_eq!(Key::from("x").hash_key(), "x".hash_key());
        assert_eq!(Key::from(9_i64).hash_key(), 9.hash_key());
        assert_eq!(Key::Null.hash_key().as_str(), "type::null");
        assert_eq!(
            Key::Sequence(vec![Key::from(1_i64)]).hash_key(),
            vec![1_i64].hash_key()
        );
    }

    #[rstest]
    fn test_key_display() {
        assert_eq!(format!("{}", Key::from("x")), "x");
        assert_eq!(
            format!("{}", Key::Sequence(vec![Key::from(1_i64), Key::Null])),
            "[1, null]"
        );
    }
}
