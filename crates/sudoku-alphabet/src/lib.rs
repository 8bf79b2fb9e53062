//! Symbol alphabets for sudoku grids of any perfect-square size.
//!
//! A sudoku grid is filled with a fixed set of distinct symbols. The usual set
//! is the digits 1-9 for a 9×9 grid of 3×3 boxes, but any symbols work as long
//! as their count is a perfect square: 4 symbols for a 4×4 grid, 16 for 16×16,
//! and so on.
//!
//! # Overview
//!
//! - [`alphabet`]: The [`Alphabet`] type. Construction validates the symbol
//!   sequence once; every query afterwards is infallible.
//! - [`error`]: [`AlphabetError`], the two ways construction can fail.
//! - [`validation`]: Standalone checks over candidate sequences, usable
//!   before an [`Alphabet`] exists.
//!
//! # Examples
//!
//! ```
//! use sudoku_alphabet::{Alphabet, AlphabetError};
//!
//! // The default alphabet is '1' through '9'
//! let digits = Alphabet::default();
//! assert_eq!(digits.to_string(), "[1, 2, 3, 4, 5, 6, 7, 8, 9]");
//!
//! // A 16×16 grid with hexadecimal symbols
//! let hex: Alphabet = "0123456789ABCDEF".parse()?;
//! assert_eq!(hex.box_size(), 4);
//!
//! // Construction reports why a sequence was rejected
//! assert_eq!(
//!     "abc".parse::<Alphabet>(),
//!     Err(AlphabetError::InvalidSize { len: 3 })
//! );
//! # Ok::<(), AlphabetError>(())
//! ```

pub mod alphabet;
pub mod error;
pub mod validation;

// Re-export commonly used types
pub use self::{alphabet::Alphabet, error::AlphabetError};

#[cfg(doctest)]
#[doc = include_str!("../../../README.md")]
struct ReadmeDoctests;
