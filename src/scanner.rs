use crate::args::Config;
use crate::filter;
use crate::report::Summary;
use crate::rules::Rule;
use crate::transformer::{self, Outcome};
use anyhow::Result;
use ignore::WalkBuilder;
use std::path::Path;

/// Scan every configured root and convert eligible files
///
/// # Arguments
/// * `config` - Run configuration (roots, extension, dry-run)
/// * `rules` - The compiled rule table
///
/// # Returns
/// * `Result<Summary>` - Aggregated outcome of the whole run
pub fn scan_and_convert(config: &Config, rules: &[Rule]) -> Result<Summary> {
    let mut summary = Summary::default();

    for root in &config.roots {
        if !root.exists() {
            if config.verbose {
                eprintln!("Warning: directory not found: {}", root.display());
            }
            continue;
        }

        println!("\n📂 Processing {}/...", root.display());
        println!("{}", "-".repeat(70));

        walk_root(root, config, rules, &mut summary);
    }

    Ok(summary)
}

/// Walk one root directory, pruning data-layer directories, and fold each
/// file's outcome into the summary
fn walk_root(root: &Path, config: &Config, rules: &[Rule], summary: &mut Summary) {
    let walker = WalkBuilder::new(root)
        .hidden(false)   // Process hidden files too
        .git_ignore(true)
        .filter_entry(|entry| {
            // Prune descent into non-UI directories; files pass through to
            // the path filter below
            match entry.file_type() {
                Some(file_type) if file_type.is_dir() => {
                    !filter::is_pruned_dir(&entry.file_name().to_string_lossy())
                }
                _ => true,
            }
        })
        .build();

    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                eprintln!("Error walking directory: {}", err);
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some(config.extension.as_str()) {
            continue;
        }

        summary.total_files += 1;
        process_file(path, config, rules, summary);
    }
}

/// Filter then transform a single file, printing its status line
fn process_file(path: &Path, config: &Config, rules: &[Rule], summary: &mut Summary) {
    let relative_path = display_path(path);

    if filter::should_skip(path) {
        summary.skipped_files += 1;
        if config.verbose {
            println!("⏭️  {:<50} Skipped (not a UI file)", relative_path);
        }
        return;
    }

    match transformer::transform_file(path, rules, config.dry_run) {
        Ok(Outcome::Converted { lines_changed }) => {
            summary.converted_files += 1;
            summary.converted.push(relative_path.clone());
            println!("✅ {:<50} {} lines changed", relative_path, lines_changed);
        }
        Ok(Outcome::Unchanged) => {
            summary.skipped_files += 1;
            if config.verbose {
                println!("⏭️  {:<50} No changes needed", relative_path);
            }
        }
        Err(err) => {
            summary.error_files += 1;
            println!("❌ {:<50} Error: {:#}", relative_path, err);
        }
    }
}

/// Render a path relative to the Flutter lib/ directory for reporting
fn display_path(path: &Path) -> String {
    let path_str = path.to_string_lossy();
    path_str
        .strip_prefix("lib/")
        .unwrap_or(&path_str)
        .to_string()
}
