//! Text analysis pipeline: tokens, character classification, tokenizers,
//! token filters, and analyzers.
//!
//! The pipeline turns a raw text buffer into the inputs of the frequency
//! tables: a single-pass character classification (vowel / special /
//! other) and a stream of normalized candidate words.
//!
//! ```text
//! Raw Text ─┬─> classify chars ──> CharClassCounts
//!           └─> Tokenizer ──> Filter chain ──> normalized words
//! ```

pub mod analyzer;
pub mod char_class;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::{Analyzer, WordAnalyzer};
pub use char_class::{CharClass, CharClassCounts, classify};
pub use token::{Token, TokenStream};
pub use token_filter::{AlphaFilter, Filter, LowercaseFilter, RemoveEmptyFilter};
pub use tokenizer::{Tokenizer, WhitespaceTokenizer};
