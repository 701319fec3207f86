use crate::rules::{self, Rule};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Terminal outcome of transforming one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// File was rewritten, or would have been in dry-run mode
    Converted { lines_changed: usize },
    /// Rules produced no textual change; nothing was written
    Unchanged,
}

/// Read a file, apply the rule table, and write it back if anything changed
///
/// # Arguments
/// * `path` - File to transform
/// * `rules` - The compiled rule table
/// * `dry_run` - When true, never write; still report what would change
///
/// # Returns
/// * `Result<Outcome>` - The outcome, or the I/O failure for this file
pub fn transform_file(path: &Path, rules: &[Rule], dry_run: bool) -> Result<Outcome> {
    let original = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let converted = rules::apply_rules(&original, rules);

    if converted == original {
        return Ok(Outcome::Unchanged);
    }

    if !dry_run {
        fs::write(path, &converted)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
    }

    Ok(Outcome::Converted {
        lines_changed: count_changed_lines(&original, &converted),
    })
}

/// Count differing lines by positional pairing. Not a true diff: a rule that
/// inserts a line break shifts everything after it and skews the count.
fn count_changed_lines(original: &str, converted: &str) -> usize {
    original
        .split('\n')
        .zip(converted.split('\n'))
        .filter(|(a, b)| a != b)
        .count()
}
