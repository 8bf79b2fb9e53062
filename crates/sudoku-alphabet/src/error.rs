//! Errors reported when constructing an [`Alphabet`].
//!
//! [`Alphabet`]: crate::Alphabet

/// Reasons a symbol sequence cannot be used as a sudoku alphabet.
///
/// Construction checks the size first, so a sequence that is both the wrong
/// size and contains repeated symbols is reported as [`InvalidSize`].
///
/// [`InvalidSize`]: AlphabetError::InvalidSize
///
/// # Examples
///
/// ```
/// use sudoku_alphabet::{Alphabet, AlphabetError};
///
/// let err = Alphabet::new(['a', 'b', 'c']).unwrap_err();
/// assert_eq!(err, AlphabetError::InvalidSize { len: 3 });
/// assert!(err.is_invalid_size());
///
/// let err = Alphabet::new(['1', '2', '2', '4']).unwrap_err();
/// assert_eq!(err, AlphabetError::DuplicateSymbol { symbol: '2' });
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum AlphabetError {
    /// The sequence is absent, empty, or its length is not a perfect square.
    #[display("invalid alphabet size: {len} is not a positive perfect square")]
    InvalidSize {
        /// Offending length (0 when the sequence was absent).
        len: usize,
    },
    /// A symbol appears more than once.
    #[display("duplicate symbol in alphabet: {symbol:?}")]
    DuplicateSymbol {
        /// One of the repeated symbols.
        symbol: char,
    },
}

impl AlphabetError {
    /// Returns the offending length for [`AlphabetError::InvalidSize`].
    #[must_use]
    pub const fn invalid_len(&self) -> Option<usize> {
        match *self {
            Self::InvalidSize { len } => Some(len),
            Self::DuplicateSymbol { .. } => None,
        }
    }

    /// Returns the repeated symbol for [`AlphabetError::DuplicateSymbol`].
    #[must_use]
    pub const fn duplicate_symbol(&self) -> Option<char> {
        match *self {
            Self::InvalidSize { .. } => None,
            Self::DuplicateSymbol { symbol } => Some(symbol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            AlphabetError::InvalidSize { len: 3 }.to_string(),
            "invalid alphabet size: 3 is not a positive perfect square"
        );
        assert_eq!(
            AlphabetError::DuplicateSymbol { symbol: '2' }.to_string(),
            "duplicate symbol in alphabet: '2'"
        );
    }

    #[test]
    fn test_payload_accessors() {
        let size = AlphabetError::InvalidSize { len: 0 };
        assert!(size.is_invalid_size());
        assert!(!size.is_duplicate_symbol());
        assert_eq!(size.invalid_len(), Some(0));
        assert_eq!(size.duplicate_symbol(), None);

        let dup = AlphabetError::DuplicateSymbol { symbol: 'x' };
        assert!(dup.is_duplicate_symbol());
        assert_eq!(dup.invalid_len(), None);
        assert_eq!(dup.duplicate_symbol(), Some('x'));
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(AlphabetError::InvalidSize { len: 2 });
        assert!(err.source().is_none());
    }
}
