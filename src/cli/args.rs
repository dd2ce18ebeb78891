//! Command line argument parsing for the stylo CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Stylo - a text analytics engine for document editors
#[derive(Parser, Debug, Clone)]
#[command(name = "stylo")]
#[command(about = "A text analytics engine for document editors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct StyloArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl StyloArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output format for command results.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze a text and print the report
    Analyze(AnalyzeArgs),

    /// Search a text for a regular-expression pattern
    Search(SearchArgs),

    /// Analyze a text and write the report into an output directory
    Report(ReportArgs),

    /// Emit chart data (non-zero letters, top words) for an analysis
    #[command(name = "chart-data")]
    ChartData(ChartDataArgs),
}

/// Arguments for the analyze command
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Input text file (stdin if omitted)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,
}

/// Arguments for the search command
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// The regular expression to search for
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Input text file (stdin if omitted)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,
}

/// Arguments for the report command
#[derive(Parser, Debug, Clone)]
pub struct ReportArgs {
    /// Input text file (stdin if omitted)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Directory the report file is written into (created if missing)
    #[arg(short, long, value_name = "DIR", default_value = "analysis_results")]
    pub output_dir: PathBuf,
}

/// Arguments for the chart-data command
#[derive(Parser, Debug, Clone)]
pub struct ChartDataArgs {
    /// Input text file (stdin if omitted)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// How many of the most frequent words to include
    #[arg(long, value_name = "N", default_value_t = crate::report::TOP_WORDS)]
    pub top_words: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        let args = StyloArgs::parse_from(["stylo", "analyze"]);
        assert_eq!(args.verbosity(), 1);

        let args = StyloArgs::parse_from(["stylo", "-vv", "analyze"]);
        assert_eq!(args.verbosity(), 2);

        let args = StyloArgs::parse_from(["stylo", "--quiet", "-v", "analyze"]);
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_search_args() {
        let args = StyloArgs::parse_from(["stylo", "search", "a+b", "notes.txt"]);
        match args.command {
            Command::Search(search) => {
                assert_eq!(search.pattern, "a+b");
                assert_eq!(search.input.unwrap().to_str(), Some("notes.txt"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_report_default_output_dir() {
        let args = StyloArgs::parse_from(["stylo", "report"]);
        match args.command {
            Command::Report(report) => {
                assert_eq!(report.output_dir.to_str(), Some("analysis_results"));
                assert!(report.input.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_chart_data_defaults() {
        let args = StyloArgs::parse_from(["stylo", "chart-data"]);
        match args.command {
            Command::ChartData(chart) => assert_eq!(chart.top_words, 10),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
