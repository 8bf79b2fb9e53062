//! Example demonstrating alphabet construction and queries.
//!
//! This example shows how to:
//! - Build an `Alphabet` from a string of symbols, or use the default one
//! - Inspect why a symbol sequence is rejected
//! - Look up symbols by index and test membership
//!
//! # Usage
//!
//! Inspect the default alphabet (`1`-`9`):
//!
//! ```sh
//! cargo run --example inspect_alphabet
//! ```
//!
//! Inspect a custom alphabet for a 16×16 grid:
//!
//! ```sh
//! cargo run --example inspect_alphabet -- 0123456789ABCDEF
//! ```
//!
//! Probe membership and indexed lookup (negative and out-of-range indices are
//! reported as the "no symbol" sentinel):
//!
//! ```sh
//! cargo run --example inspect_alphabet -- abcd --probe a --probe z --index 0 --index -1
//! ```
//!
//! Use the size-only constructor:
//!
//! ```sh
//! cargo run --example inspect_alphabet -- --size 4
//! ```
//!
//! Set `RUST_LOG=debug` to see why construction rejected the input.

use std::process;

use clap::Parser;
use sudoku_alphabet::{Alphabet, AlphabetError};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Symbols of the alphabet, one per character. Defaults to `123456789`.
    #[arg(value_name = "SYMBOLS", conflicts_with = "size")]
    symbols: Option<String>,

    /// Build an alphabet of this many default-valued symbols instead.
    #[arg(long, value_name = "COUNT")]
    size: Option<usize>,

    /// Symbol to test for membership. Repeatable.
    #[arg(short, long = "probe", value_name = "SYMBOL")]
    probes: Vec<char>,

    /// Index to look up. Repeatable.
    #[arg(short, long = "index", value_name = "INDEX", allow_negative_numbers = true)]
    indices: Vec<isize>,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let alphabet = match build_alphabet(&args) {
        Ok(alphabet) => alphabet,
        Err(err) => {
            eprintln!("Invalid alphabet: {err}");
            process::exit(1);
        }
    };

    print_alphabet(&alphabet, &args.probes, &args.indices);
}

fn build_alphabet(args: &Args) -> Result<Alphabet, AlphabetError> {
    match (&args.symbols, args.size) {
        (Some(symbols), _) => symbols.parse(),
        (None, Some(size)) => Alphabet::with_size(size),
        (None, None) => Ok(Alphabet::default()),
    }
}

fn print_alphabet(alphabet: &Alphabet, probes: &[char], indices: &[isize]) {
    println!("Alphabet:");
    println!("  {alphabet}");
    println!();

    println!("Grid:");
    println!("  Size: {0}x{0}", alphabet.len());
    println!("  Box: {0}x{0}", alphabet.box_size());
    println!();

    if !probes.is_empty() {
        println!("Membership:");
        for &probe in probes {
            match alphabet.position(probe) {
                Some(i) => println!("  {probe:?}: yes (index {i})"),
                None => println!("  {probe:?}: no"),
            }
        }
        println!();
    }

    if !indices.is_empty() {
        println!("Lookup:");
        for &index in indices {
            match alphabet.element_at(index) {
                Alphabet::NO_SYMBOL => println!("  {index}: (no symbol)"),
                symbol => println!("  {index}: {symbol:?}"),
            }
        }
    }
}
