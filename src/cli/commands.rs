//! Command implementations for the stylo CLI.

use std::fs;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::engine::AnalyticsEngine;
use crate::error::Result;

/// File name of the written analysis report.
pub const REPORT_FILE_NAME: &str = "text_analysis_report.txt";

/// Execute a CLI command.
pub fn execute_command(args: StyloArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze_text(analyze_args.clone(), &args),
        Command::Search(search_args) => search_text(search_args.clone(), &args),
        Command::Report(report_args) => write_report(report_args.clone(), &args),
        Command::ChartData(chart_args) => emit_chart_data(chart_args.clone(), &args),
    }
}

/// Read the input text from a file, or from stdin when no path is given.
fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => {
            debug!("reading input from {}", path.display());
            Ok(fs::read_to_string(path)?)
        }
        None => {
            debug!("reading input from stdin");
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Analyze the input and print the report.
fn analyze_text(args: AnalyzeArgs, cli_args: &StyloArgs) -> Result<()> {
    let text = read_input(args.input.as_deref())?;
    let report = AnalyticsEngine::new().analyze(&text)?;

    print_report(&report, cli_args)
}

/// Search the input for a pattern and print the matches.
fn search_text(args: SearchArgs, cli_args: &StyloArgs) -> Result<()> {
    let text = read_input(args.input.as_deref())?;
    let result = AnalyticsEngine::new().search(&text, &args.pattern)?;

    if cli_args.verbosity() > 1 {
        println!("Pattern: {}", result.pattern());
    }

    print_matches(&result, cli_args)
}

/// Analyze the input and persist the report into the output directory.
fn write_report(args: ReportArgs, cli_args: &StyloArgs) -> Result<()> {
    let text = read_input(args.input.as_deref())?;
    let report = AnalyticsEngine::new().analyze(&text)?;

    fs::create_dir_all(&args.output_dir)?;
    let report_path = args.output_dir.join(REPORT_FILE_NAME);
    fs::write(&report_path, report.render())?;

    if cli_args.verbosity() > 0 {
        println!("Analysis report saved to {}", report_path.display());
    }

    Ok(())
}

/// Analyze the input and emit chart data as JSON.
fn emit_chart_data(args: ChartDataArgs, cli_args: &StyloArgs) -> Result<()> {
    let text = read_input(args.input.as_deref())?;
    let report = AnalyticsEngine::new().analyze(&text)?;

    let chart = ChartDataOutput::from_report(&report, args.top_words);
    output_json(&chart, cli_args)
}
