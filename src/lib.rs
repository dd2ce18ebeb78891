//! # Stylo
//!
//! A text analytics engine for document editors.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Single-pass character classification (vowels, special symbols)
//! - Letter and word frequency tables with reproducible ordering
//! - Fixed-layout analysis reports
//! - Regex search with match offsets
//!
//! ## Quick start
//!
//! ```
//! use stylo::engine::{analyze, search};
//!
//! let report = analyze("Hello, World!").unwrap();
//! assert_eq!(report.classes().vowels, 3);
//!
//! let matches = search("Hello, World!", "l+").unwrap();
//! assert_eq!(matches.len(), 2);
//! ```

pub mod analysis;
pub mod cli;
pub mod engine;
pub mod error;
pub mod frequency;
pub mod report;
pub mod search;

pub mod prelude {
    //! Convenient re-exports of the most commonly used types.

    pub use crate::analysis::{Analyzer, WordAnalyzer};
    pub use crate::engine::{AnalyticsEngine, analyze, search};
    pub use crate::error::{Result, StyloError};
    pub use crate::frequency::{LetterFrequencyTable, WordFrequencyTable};
    pub use crate::report::AnalysisReport;
    pub use crate::search::{MatchResult, RegexMatch, RegexSearcher};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
