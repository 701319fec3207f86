/// Aggregate counters for one run, plus the converted-file listing
#[derive(Debug, Default)]
pub struct Summary {
    /// Every source file seen under the configured roots
    pub total_files: usize,
    pub converted_files: usize,
    pub skipped_files: usize,
    pub error_files: usize,
    /// Relative paths of converted files, in discovery order
    pub converted: Vec<String>,
}

const RULE_WIDTH: usize = 70;

/// Print the opening banner
pub fn print_banner(dry_run: bool) {
    println!("{}", "=".repeat(RULE_WIDTH));
    if dry_run {
        println!("🎨 DARK MODE CONVERSION - FULL APP (dry run)");
    } else {
        println!("🎨 DARK MODE CONVERSION - FULL APP");
    }
    println!("{}", "=".repeat(RULE_WIDTH));
    println!();
}

/// Print the closing summary block, converted-file listing, and follow-up
/// guidance
///
/// # Arguments
/// * `summary` - Aggregated outcome of the run
/// * `dry_run` - Whether files were actually written
pub fn print_summary(summary: &Summary, dry_run: bool) {
    println!();
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("📊 CONVERSION SUMMARY");
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("Total UI files scanned:    {}", summary.total_files);
    println!("✅ Successfully converted: {}", summary.converted_files);
    println!("⏭️  Skipped:                {}", summary.skipped_files);
    println!("❌ Errors:                 {}", summary.error_files);
    println!("{}", "=".repeat(RULE_WIDTH));

    if !summary.converted.is_empty() {
        println!();
        println!("📝 Converted files:");
        for path in &summary.converted {
            println!("   - {}", path);
        }
    }

    println!();
    println!("🎉 Next Steps:");
    if dry_run {
        println!("   1. Review the intended changes above");
        println!("   2. Re-run without --dry-run to apply them");
    } else {
        println!("   1. Test the app with: flutter run");
        println!("   2. Toggle dark mode in Settings");
        println!("   3. Check all screens for any visual issues");
        println!("   4. Fix any remaining hardcoded colors manually");
    }
    println!();
}
