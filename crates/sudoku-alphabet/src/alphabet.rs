//! The validated symbol set of a sudoku grid.

use std::{
    fmt::{self, Display},
    slice,
    str::FromStr,
    sync::LazyLock,
};

use crate::{AlphabetError, validation};

static DEFAULT_ALPHABET: LazyLock<Alphabet> = LazyLock::new(|| {
    Alphabet::new(Alphabet::DEFAULT_SYMBOLS)
        .unwrap_or_else(|err| unreachable!("default alphabet must be valid: {err}"))
});

/// An ordered set of unique symbols whose count is a perfect square.
///
/// An alphabet of `n = r * r` symbols fills an `n × n` grid made of `r × r`
/// boxes: 4 symbols for a 4×4 grid, 9 for the classic 9×9 grid, 16 for 16×16.
///
/// The invariants (non-empty, perfect-square length, no repeated symbol) are
/// checked once by [`Alphabet::new`] and cannot be broken afterwards: there is
/// no way to mutate an alphabet in place. To use a different symbol set,
/// construct a new alphabet.
///
/// # Examples
///
/// ```
/// use sudoku_alphabet::Alphabet;
///
/// let alphabet = Alphabet::new(['A', 'B', 'C', 'D'])?;
/// assert_eq!(alphabet.len(), 4);
/// assert_eq!(alphabet.box_size(), 2);
/// assert_eq!(alphabet.element_at(0), 'A');
/// assert!(alphabet.contains('C'));
/// assert_eq!(alphabet.to_string(), "[A, B, C, D]");
/// # Ok::<(), sudoku_alphabet::AlphabetError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alphabet {
    symbols: Box<[char]>,
}

impl Alphabet {
    /// Number of symbols in the default alphabet.
    pub const DEFAULT_SIZE: usize = 9;

    /// Symbols of the default alphabet, `'1'` through `'9'`.
    pub const DEFAULT_SYMBOLS: [char; Self::DEFAULT_SIZE] =
        ['1', '2', '3', '4', '5', '6', '7', '8', '9'];

    /// Value returned by [`Alphabet::element_at`] for an out-of-range index.
    pub const NO_SYMBOL: char = '\0';

    /// Creates an alphabet from a symbol sequence.
    ///
    /// The size is checked before uniqueness, so the first failing check
    /// determines the error.
    ///
    /// # Errors
    ///
    /// - [`AlphabetError::InvalidSize`] if the sequence is empty or its length
    ///   is not a perfect square.
    /// - [`AlphabetError::DuplicateSymbol`] if a symbol appears more than once.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudoku_alphabet::{Alphabet, AlphabetError};
    ///
    /// assert!(Alphabet::new(['x']).is_ok());
    /// assert_eq!(
    ///     Alphabet::new(Vec::new()),
    ///     Err(AlphabetError::InvalidSize { len: 0 })
    /// );
    /// assert_eq!(
    ///     Alphabet::new(['1', '2', '2', '4']),
    ///     Err(AlphabetError::DuplicateSymbol { symbol: '2' })
    /// );
    /// ```
    pub fn new<S>(symbols: S) -> Result<Self, AlphabetError>
    where
        S: Into<Vec<char>>,
    {
        let symbols = symbols.into();
        let len = symbols.len();

        if !validation::has_correct_size(&symbols) {
            log::debug!("rejected alphabet of {len} symbols: size is not a perfect square");
            return Err(AlphabetError::InvalidSize { len });
        }
        if let Some(symbol) = validation::find_duplicate(&symbols) {
            log::debug!("rejected alphabet of {len} symbols: {symbol:?} is repeated");
            return Err(AlphabetError::DuplicateSymbol { symbol });
        }

        log::trace!("created alphabet of {len} symbols");
        Ok(Self {
            symbols: symbols.into_boxed_slice(),
        })
    }

    /// Creates an alphabet from a sequence that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`AlphabetError::InvalidSize`] with `len: 0` if `symbols` is
    /// `None`, and otherwise behaves like [`Alphabet::new`].
    pub fn from_option<S>(symbols: Option<S>) -> Result<Self, AlphabetError>
    where
        S: Into<Vec<char>>,
    {
        match symbols {
            Some(symbols) => Self::new(symbols),
            None => {
                log::debug!("rejected absent alphabet");
                Err(AlphabetError::InvalidSize { len: 0 })
            }
        }
    }

    /// Creates an alphabet of `size` default-valued symbols (`'\0'`).
    ///
    /// Every slot holds the same symbol, so this only succeeds for `size == 1`.
    /// Any other perfect square fails the uniqueness check, and every other
    /// size fails the size check.
    ///
    /// # Errors
    ///
    /// Same as [`Alphabet::new`] applied to `vec!['\0'; size]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudoku_alphabet::{Alphabet, AlphabetError};
    ///
    /// assert_eq!(Alphabet::with_size(1)?.len(), 1);
    /// assert_eq!(
    ///     Alphabet::with_size(4),
    ///     Err(AlphabetError::DuplicateSymbol { symbol: '\0' })
    /// );
    /// assert_eq!(
    ///     Alphabet::with_size(3),
    ///     Err(AlphabetError::InvalidSize { len: 3 })
    /// );
    /// # Ok::<(), AlphabetError>(())
    /// ```
    pub fn with_size(size: usize) -> Result<Self, AlphabetError> {
        // Decided from `size` alone; only `size == 1` allocates.
        if !validation::is_perfect_square(size) {
            log::debug!("rejected alphabet of {size} symbols: size is not a perfect square");
            return Err(AlphabetError::InvalidSize { len: size });
        }
        if size > 1 {
            log::debug!("rejected alphabet of {size} symbols: {:?} is repeated", Self::NO_SYMBOL);
            return Err(AlphabetError::DuplicateSymbol {
                symbol: Self::NO_SYMBOL,
            });
        }
        Self::new(vec![Self::NO_SYMBOL; size])
    }

    /// Returns the shared default alphabet (`'1'` through `'9'`).
    ///
    /// It is built on first use and never changes afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudoku_alphabet::Alphabet;
    ///
    /// let alphabet = Alphabet::default_ref();
    /// assert_eq!(alphabet.len(), Alphabet::DEFAULT_SIZE);
    /// assert_eq!(alphabet.symbols(), &Alphabet::DEFAULT_SYMBOLS);
    /// ```
    #[must_use]
    pub fn default_ref() -> &'static Self {
        &DEFAULT_ALPHABET
    }

    /// Returns the number of symbols.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always returns `false`: a valid alphabet has at least one symbol.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the number of symbols of a possibly absent alphabet, or 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudoku_alphabet::Alphabet;
    ///
    /// assert_eq!(Alphabet::len_of(Some(Alphabet::default_ref())), 9);
    /// assert_eq!(Alphabet::len_of(None), 0);
    /// ```
    #[must_use]
    pub fn len_of(alphabet: Option<&Self>) -> usize {
        alphabet.map_or(0, Self::len)
    }

    /// Returns the side length of a box, `r` where `r * r == self.len()`.
    #[must_use]
    pub fn box_size(&self) -> usize {
        // len() is a perfect square by construction
        self.len().isqrt()
    }

    /// Returns the symbols in order.
    #[must_use]
    #[inline]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Returns an iterator over the symbols in order.
    pub fn iter(&self) -> slice::Iter<'_, char> {
        self.symbols.iter()
    }

    /// Returns the symbol at `index`, or `None` if it is out of range.
    #[must_use]
    #[inline]
    pub fn get(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// Returns the symbol at `index`, or [`Alphabet::NO_SYMBOL`] if `index` is
    /// negative or not less than [`Alphabet::len`].
    ///
    /// # Examples
    ///
    /// ```
    /// use sudoku_alphabet::Alphabet;
    ///
    /// let alphabet = Alphabet::default();
    /// assert_eq!(alphabet.element_at(0), '1');
    /// assert_eq!(alphabet.element_at(8), '9');
    /// assert_eq!(alphabet.element_at(-1), Alphabet::NO_SYMBOL);
    /// assert_eq!(alphabet.element_at(9), Alphabet::NO_SYMBOL);
    /// ```
    #[must_use]
    pub fn element_at(&self, index: isize) -> char {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.get(index))
            .unwrap_or(Self::NO_SYMBOL)
    }

    /// Like [`Alphabet::element_at`], but also returns
    /// [`Alphabet::NO_SYMBOL`] when the alphabet is absent.
    #[must_use]
    pub fn element_at_in(alphabet: Option<&Self>, index: isize) -> char {
        alphabet.map_or(Self::NO_SYMBOL, |alphabet| alphabet.element_at(index))
    }

    /// Returns the index of `symbol`, or `None` if it is not in the alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudoku_alphabet::Alphabet;
    ///
    /// let alphabet = Alphabet::default();
    /// assert_eq!(alphabet.position('1'), Some(0));
    /// assert_eq!(alphabet.position('0'), None);
    /// ```
    #[must_use]
    pub fn position(&self, symbol: char) -> Option<usize> {
        self.symbols.iter().position(|&s| s == symbol)
    }

    /// Returns `true` if `symbol` is one of the symbols of this alphabet.
    #[must_use]
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Returns `true` if the length is a perfect square.
    ///
    /// Holds for every alphabet; kept as an explicit check of the invariant.
    #[must_use]
    pub fn has_correct_size(&self) -> bool {
        validation::has_correct_size(&self.symbols)
    }

    /// Returns `true` if any symbol appears more than once.
    ///
    /// Never holds for a constructed alphabet.
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        validation::find_duplicate(&self.symbols).is_some()
    }

    /// Returns `true` if the alphabet satisfies all of its invariants.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudoku_alphabet::Alphabet;
    ///
    /// assert!(Alphabet::default().is_valid());
    /// assert!("ABCDEFGHIJKLMNOP".parse::<Alphabet>()?.is_valid());
    /// # Ok::<(), sudoku_alphabet::AlphabetError>(())
    /// ```
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.has_correct_size() && !self.has_duplicates()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::default_ref().clone()
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = String::from("[");
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                s.push_str(", ");
            }
            s.push(*symbol);
        }
        s.push(']');
        f.pad(&s)
    }
}

impl<'a> IntoIterator for &'a Alphabet {
    type Item = &'a char;
    type IntoIter = slice::Iter<'a, char>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<char>> for Alphabet {
    type Error = AlphabetError;

    fn try_from(symbols: Vec<char>) -> Result<Self, Self::Error> {
        Self::new(symbols)
    }
}

impl TryFrom<&[char]> for Alphabet {
    type Error = AlphabetError;

    fn try_from(symbols: &[char]) -> Result<Self, Self::Error> {
        Self::new(symbols)
    }
}

impl TryFrom<&str> for Alphabet {
    type Error = AlphabetError;

    fn try_from(symbols: &str) -> Result<Self, Self::Error> {
        symbols.parse()
    }
}

impl FromStr for Alphabet {
    type Err = AlphabetError;

    /// Parses each `char` of the string as one symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.chars().collect::<Vec<_>>())
    }
}

impl From<Alphabet> for Vec<char> {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.symbols.into_vec()
    }
}
