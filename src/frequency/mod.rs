//! Frequency tables built from tokenizer/classifier output.
//!
//! - [`LetterFrequencyTable`] - fixed 26-bucket counts over the ASCII
//!   letters `a`-`z`
//! - [`WordFrequencyTable`] - normalized word counts with a documented
//!   descending-count, first-occurrence-tie ordering
//!
//! Both tables are deterministic functions of their input: no randomness,
//! no external state.

pub mod letter;
pub mod word;

pub use letter::{ALPHABET_LEN, LetterFrequencyTable};
pub use word::WordFrequencyTable;
