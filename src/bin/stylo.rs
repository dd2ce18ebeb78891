//! Stylo CLI binary.

use clap::Parser;
use log::LevelFilter;
use std::process;
use stylo::cli::{args::StyloArgs, commands::execute_command};

fn main() {
    // Parse command line arguments using clap
    let args = StyloArgs::parse();

    // Map the verbosity flags onto the logger
    let level = match args.verbosity() {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
