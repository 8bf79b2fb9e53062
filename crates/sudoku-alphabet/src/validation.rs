//! Standalone checks over candidate symbol sequences.
//!
//! These are the building blocks of [`Alphabet::new`]. They operate on plain
//! slices so that a sequence can be inspected before any [`Alphabet`] exists.
//! An empty slice stands in for an absent sequence: it never has a valid size
//! and never reports a duplicate.
//!
//! [`Alphabet`]: crate::Alphabet
//! [`Alphabet::new`]: crate::Alphabet::new
//!
//! # Examples
//!
//! ```
//! use sudoku_alphabet::validation;
//!
//! assert!(validation::has_correct_size(&['a', 'b', 'c', 'd']));
//! assert!(!validation::has_correct_size(&['a', 'b', 'c']));
//!
//! assert_eq!(validation::find_duplicate(&['a', 'b', 'a']), Some('a'));
//! assert_eq!(validation::find_duplicate(&['a', 'b', 'c']), None);
//! ```

use std::{collections::HashSet, hash::Hash};

/// Returns `r` such that `r * r == len`, or `None` if `len` is zero or not a
/// perfect square.
///
/// Uses integer arithmetic only, so the result is exact for every `usize`.
///
/// # Examples
///
/// ```
/// use sudoku_alphabet::validation::perfect_square_root;
///
/// assert_eq!(perfect_square_root(9), Some(3));
/// assert_eq!(perfect_square_root(16), Some(4));
/// assert_eq!(perfect_square_root(10), None);
/// assert_eq!(perfect_square_root(0), None);
/// ```
#[must_use]
pub const fn perfect_square_root(len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let root = len.isqrt();
    if root * root == len { Some(root) } else { None }
}

/// Returns `true` if `len` is a positive perfect square.
#[must_use]
#[inline]
pub const fn is_perfect_square(len: usize) -> bool {
    perfect_square_root(len).is_some()
}

/// Returns `true` if the sequence is non-empty and its length is a perfect
/// square (1, 4, 9, 16, ...).
#[must_use]
#[inline]
pub fn has_correct_size<T>(symbols: &[T]) -> bool {
    is_perfect_square(symbols.len())
}

/// Finds a repeated item by exhaustive pairwise comparison.
///
/// Every item at position `i` is compared with every item at `j > i`; the
/// item of the first equal pair in that order is returned. Returns `None`
/// for empty input and for sequences without repetition.
///
/// # Examples
///
/// ```
/// use sudoku_alphabet::validation::find_duplicate;
///
/// // 'b' at index 1 is matched before 'c' at index 2
/// assert_eq!(find_duplicate(&['a', 'b', 'c', 'c', 'b']), Some('b'));
/// assert_eq!(find_duplicate::<char>(&[]), None);
/// ```
#[must_use]
pub fn find_duplicate<T>(symbols: &[T]) -> Option<T>
where
    T: PartialEq + Copy,
{
    symbols.iter().enumerate().find_map(|(i, a)| {
        symbols[i + 1..].iter().any(|b| a == b).then_some(*a)
    })
}

/// Returns `true` if any item appears more than once, by comparing the number
/// of distinct items with the length.
///
/// Agrees with [`find_duplicate`] on whether a repetition exists, but cannot
/// say which item repeats.
///
/// # Examples
///
/// ```
/// use sudoku_alphabet::validation::has_duplicates_hashed;
///
/// assert!(has_duplicates_hashed(&["x", "y", "x"]));
/// assert!(!has_duplicates_hashed(&[1, 2, 3, 4]));
/// ```
#[must_use]
pub fn has_duplicates_hashed<T>(symbols: &[T]) -> bool
where
    T: Eq + Hash,
{
    let distinct = symbols.iter().collect::<HashSet<_>>().len();
    distinct != symbols.len()
}
