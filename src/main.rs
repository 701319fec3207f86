mod args;
mod filter;
mod report;
mod rules;
mod scanner;
mod transformer;

use anyhow::{Context, Result};
use std::process;

/// Main entry point of the application
/// Handles argument parsing and executes the conversion with error handling
fn main() -> Result<()> {
    // Parse command line arguments
    let config = args::parse().context("Failed to parse arguments")?;

    // Execute the conversion
    match run(&config) {
        Ok(errors) if errors > 0 => {
            // Partial failure: some files could not be converted
            process::exit(1);
        }
        Ok(_) => Ok(()),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Run one full conversion pass over the configured roots
///
/// # Arguments
/// * `config` - Resolved run configuration
///
/// # Returns
/// * `Result<usize>` - Number of files that errored
fn run(config: &args::Config) -> Result<usize> {
    let rules = rules::rule_table().context("Failed to compile rule table")?;

    report::print_banner(config.dry_run);
    let summary = scanner::scan_and_convert(config, &rules)?;
    report::print_summary(&summary, config.dry_run);

    Ok(summary.error_files)
}
