//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, StyloArgs};
use crate::error::Result;
use crate::report::AnalysisReport;
use crate::search::MatchResult;

/// JSON shape of one analysis invocation.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisOutput {
    pub vowels: u64,
    pub special_characters: u64,
    pub letters: Vec<LetterEntry>,
    pub words: Vec<WordEntry>,
}

/// JSON shape of one search invocation.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchOutput {
    pub pattern: String,
    pub total_matches: usize,
    pub matches: Vec<MatchEntry>,
}

/// One letter/count pair.
#[derive(Debug, Serialize, Deserialize)]
pub struct LetterEntry {
    pub letter: char,
    pub count: u64,
}

/// One word/count pair.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub count: u64,
}

/// One match with its offset.
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchEntry {
    pub text: String,
    pub start: usize,
}

/// Chart data for the charting collaborator: non-zero letters and the
/// top-N word subset.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChartDataOutput {
    pub letters: Vec<LetterEntry>,
    pub top_words: Vec<WordEntry>,
}

impl AnalysisOutput {
    /// Build the JSON shape from a report (full letter table, zeros
    /// included, words in report order).
    pub fn from_report(report: &AnalysisReport) -> Self {
        AnalysisOutput {
            vowels: report.classes().vowels,
            special_characters: report.classes().specials,
            letters: report
                .letters()
                .iter()
                .map(|(letter, count)| LetterEntry { letter, count })
                .collect(),
            words: report
                .words()
                .sorted_entries()
                .into_iter()
                .map(|(word, count)| WordEntry { word, count })
                .collect(),
        }
    }
}

impl SearchOutput {
    /// Build the JSON shape from a match result.
    pub fn from_result(result: &MatchResult) -> Self {
        SearchOutput {
            pattern: result.pattern().to_string(),
            total_matches: result.len(),
            matches: result
                .iter()
                .map(|m| MatchEntry {
                    text: m.text.clone(),
                    start: m.start,
                })
                .collect(),
        }
    }
}

impl ChartDataOutput {
    /// Build chart data from a report.
    pub fn from_report(report: &AnalysisReport, top_words: usize) -> Self {
        ChartDataOutput {
            letters: report
                .letter_chart_entries()
                .into_iter()
                .map(|(letter, count)| LetterEntry { letter, count })
                .collect(),
            top_words: report
                .top_words(top_words)
                .into_iter()
                .map(|(word, count)| WordEntry { word, count })
                .collect(),
        }
    }
}

/// Serialize a value according to the CLI's format flags and print it.
pub fn output_json<T: Serialize>(value: &T, cli_args: &StyloArgs) -> Result<()> {
    let rendered = if cli_args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}

/// Render a match result the way the editor UI shows it.
pub fn render_matches(result: &MatchResult) -> String {
    if result.is_empty() {
        return "No matches found.".to_string();
    }

    let mut out = String::from("Matches found:\n");
    for (i, m) in result.iter().enumerate() {
        out.push_str(&format!(
            "Match {}: {} at position {}\n",
            i + 1,
            m.text,
            m.start
        ));
    }
    out
}

/// Print a match result in the selected format.
pub fn print_matches(result: &MatchResult, cli_args: &StyloArgs) -> Result<()> {
    match cli_args.output_format {
        OutputFormat::Human => {
            println!("{}", render_matches(result));
            Ok(())
        }
        OutputFormat::Json => output_json(&SearchOutput::from_result(result), cli_args),
    }
}

/// Print an analysis report in the selected format.
pub fn print_report(report: &AnalysisReport, cli_args: &StyloArgs) -> Result<()> {
    match cli_args.output_format {
        OutputFormat::Human => {
            print!("{report}");
            Ok(())
        }
        OutputFormat::Json => output_json(&AnalysisOutput::from_report(report), cli_args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine;

    #[test]
    fn test_render_matches_numbering() {
        let result = engine::search("aaa", "a").unwrap();
        let rendered = render_matches(&result);

        assert!(rendered.starts_with("Matches found:\n"));
        assert!(rendered.contains("Match 1: a at position 0\n"));
        assert!(rendered.contains("Match 3: a at position 2\n"));
    }

    #[test]
    fn test_render_no_matches() {
        let result = engine::search("abc", "z").unwrap();
        assert_eq!(render_matches(&result), "No matches found.");
    }

    #[test]
    fn test_analysis_output_shape() {
        let report = engine::analyze("Hello, World!").unwrap();
        let output = AnalysisOutput::from_report(&report);

        assert_eq!(output.vowels, 3);
        assert_eq!(output.special_characters, 2);
        assert_eq!(output.letters.len(), 26);
        assert_eq!(output.words.len(), 2);
    }

    #[test]
    fn test_chart_data_output() {
        let report = engine::analyze("b a b c b a").unwrap();
        let chart = ChartDataOutput::from_report(&report, 2);

        // Only non-zero letters, only the two most frequent words.
        assert_eq!(chart.letters.len(), 3);
        assert_eq!(chart.top_words.len(), 2);
        assert_eq!(chart.top_words[0].word, "b");
        assert_eq!(chart.top_words[0].count, 3);
    }
}
