//! Sort direction for the in-place sorting operations.

use std::cmp::Ordering;

/// The direction of an in-place natural-order sort.
///
/// # Examples
///
/// ```rust
/// use orderly::{OrderedList, SortDirection};
///
/// let mut list: OrderedList<i32> = [3, 1, 2].into_iter().collect();
/// list.sort(SortDirection::Descending);
/// assert_eq!(list.as_slice(), &[3, 2, 1]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Smallest element first.
    #[default]
    Ascending,
    /// Largest element first.
    Descending,
}

impl SortDirection {
    /// Applies the direction to a natural-order comparison result.
    #[inline]
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    /// Returns the comparison multiplier: `1` ascending, `-1` descending.
    #[inline]
    #[must_use]
    pub const fn multiplier(self) -> i32 {
        match self {
            Self::Ascending => 1,
            Self::Descending => -1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_reverses_for_descending() {
        assert_eq!(
            SortDirection::Ascending.apply(Ordering::Less),
            Ordering::Less
        );
        assert_eq!(
            SortDirection::Descending.apply(Ordering::Less),
            Ordering::Greater
        );
        assert_eq!(
            SortDirection::Descending.apply(Ordering::Equal),
            Ordering::Equal
        );
    }

    #[test]
    fn test_multiplier() {
        assert_eq!(SortDirection::Ascending.multiplier(), 1);
        assert_eq!(SortDirection::Descending.multiplier(), -1);
    }

    #[test]
    fn test_default_is_ascending() {
        assert_eq!(SortDirection::default(), SortDirection::Ascending);
    }
}
