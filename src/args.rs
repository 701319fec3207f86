use clap::Parser;
use anyhow::Result;
use std::path::PathBuf;

/// Command line arguments parser
#[derive(Parser, Debug)]
#[command(author, version, about = "Convert hardcoded Flutter colors to theme-aware references for dark mode support")]
#[command(name = "shade")]
pub struct Args {
    /// Root directories to scan (defaults to lib/screens and lib/features)
    pub roots: Vec<PathBuf>,

    /// Report intended changes without writing any file
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(long = "verbose")]
    pub verbose: bool,
}

/// Resolved configuration for one run, passed into the scanner.
/// Tests build this directly with synthetic roots instead of parsing argv.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directories to scan
    pub roots: Vec<PathBuf>,

    /// Extension of source files to process, without the dot
    pub extension: String,

    /// Report changes without writing files
    pub dry_run: bool,

    /// Enable verbose output
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roots: vec![
                PathBuf::from("lib/screens"),
                PathBuf::from("lib/features"),
            ],
            extension: String::from("dart"),
            dry_run: false,
            verbose: false,
        }
    }
}

/// Parse command line arguments into a run configuration
///
/// # Returns
/// * `Result<Config>` - The resolved configuration
pub fn parse() -> Result<Config> {
    let args = Args::parse();

    let mut config = Config::default();
    if !args.roots.is_empty() {
        config.roots = args.roots;
    }
    config.dry_run = args.dry_run;
    config.verbose = args.verbose;

    Ok(config)
}
