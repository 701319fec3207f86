use anyhow::{Context, Result};
use fancy_regex::Regex;

/// Marker produced by most replacements; a file containing many occurrences
/// of it was already migrated by a previous run.
pub const CONVERTED_MARKER: &str = "Theme.of(context).colorScheme";

/// Occurrence count above which a file counts as already converted
const CONVERTED_THRESHOLD: usize = 5;

/// One textual substitution: a compiled pattern and its literal replacement
#[derive(Debug)]
pub struct Rule {
    pub pattern: Regex,
    pub replacement: &'static str,
}

/// Ordered (pattern, replacement) pairs for the migration.
///
/// Order matters: each rule scans the text already rewritten by the rules
/// before it, in a single pass per rule. The patterns are lexical matches
/// against raw source text, so a rule can fire inside a comment or string
/// literal and will miss a logically equivalent but differently formatted
/// expression. That imprecision is accepted; the result is reviewed by hand.
const RULE_SPECS: &[(&str, &str)] = &[
    // Backgrounds
    (
        r"backgroundColor:\s*Colors\.white(?!\w)",
        "backgroundColor: Theme.of(context).colorScheme.surface",
    ),
    (
        r"backgroundColor:\s*AppTheme\.paleBlue",
        "backgroundColor: Theme.of(context).colorScheme.background",
    ),
    // Scaffold
    (
        r"Scaffold\s*\(\s*backgroundColor:\s*AppTheme\.paleBlue",
        "Scaffold(\n      backgroundColor: Theme.of(context).colorScheme.background",
    ),
    // Surface / container colors
    (
        r"(?<!\.with)color:\s*Colors\.white,",
        "color: Theme.of(context).colorScheme.surface,",
    ),
    // Text colors
    (
        r"color:\s*AppTheme\.textDark",
        "color: Theme.of(context).colorScheme.onSurface",
    ),
    (
        r"color:\s*AppTheme\.textGrey",
        "color: Theme.of(context).textTheme.bodyMedium?.color",
    ),
    (
        r"(?<!\.with)color:\s*Colors\.black,",
        "color: Theme.of(context).colorScheme.onSurface,",
    ),
    // Text styles
    (
        r"TextStyle\(\s*color:\s*AppTheme\.textDark\s*\)",
        "TextStyle(color: Theme.of(context).colorScheme.onSurface)",
    ),
    (
        r"TextStyle\(\s*color:\s*AppTheme\.textGrey\s*\)",
        "TextStyle(color: Theme.of(context).textTheme.bodyMedium?.color)",
    ),
    // AppBar
    (
        r"AppBar\s*\(\s*backgroundColor:\s*Colors\.white,",
        "AppBar(\n        backgroundColor: Theme.of(context).colorScheme.surface,",
    ),
    // Card
    (
        r"Card\s*\(\s*color:\s*Colors\.white,",
        "Card(\n          color: Theme.of(context).colorScheme.surface,",
    ),
    // Container with white color
    (
        r"Container\s*\(\s*color:\s*Colors\.white,",
        "Container(\n          color: Theme.of(context).colorScheme.surface,",
    ),
];

/// Compile the rule table
///
/// # Returns
/// * `Result<Vec<Rule>>` - The compiled rules, in table order
pub fn rule_table() -> Result<Vec<Rule>> {
    RULE_SPECS
        .iter()
        .map(|&(pattern, replacement)| {
            let regex = Regex::new(pattern)
                .with_context(|| format!("Invalid rule pattern: {}", pattern))?;
            Ok(Rule {
                pattern: regex,
                replacement,
            })
        })
        .collect()
}

/// Check whether content already shows heavy prior conversion
pub fn already_converted(content: &str) -> bool {
    content.matches(CONVERTED_MARKER).count() > CONVERTED_THRESHOLD
}

/// Apply the rule table to content, sequentially and in table order
///
/// # Arguments
/// * `content` - The source text to rewrite
/// * `rules` - The compiled rule table
///
/// # Returns
/// * `String` - The rewritten text (equal to the input when nothing matched)
pub fn apply_rules(content: &str, rules: &[Rule]) -> String {
    if already_converted(content) {
        return content.to_string();
    }

    let mut result = content.to_string();
    for rule in rules {
        result = rule
            .pattern
            .replace_all(&result, rule.replacement)
            .into_owned();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Vec<Rule> {
        rule_table().unwrap()
    }

    #[test]
    fn test_background_white_becomes_surface() {
        let input = "return Container(\n  backgroundColor: Colors.white,\n);";
        let output = apply_rules(input, &table());
        assert!(output.contains("backgroundColor: Theme.of(context).colorScheme.surface"));
        assert!(!output.contains("Colors.white"));
    }

    #[test]
    fn test_background_white_shade_is_left_alone() {
        // Colors.white70 is a different color; the trailing word-character
        // lookahead must keep the rule from truncating it.
        let input = "backgroundColor: Colors.white70,";
        let output = apply_rules(input, &table());
        assert_eq!(output, input);
    }

    #[test]
    fn test_text_grey_becomes_body_medium() {
        let input = "Text('hi', style: TextStyle())\ncolor: AppTheme.textGrey,";
        let output = apply_rules(input, &table());
        assert!(output.contains("color: Theme.of(context).textTheme.bodyMedium?.color"));
    }

    #[test]
    fn test_with_qualifier_blocks_color_rules() {
        // `.with` immediately before `color:` marks a derived color; the
        // lookbehind keeps the surface/onSurface rules away from it.
        let input = "final c = base.withcolor: Colors.white, other;";
        let output = apply_rules(input, &table());
        assert_eq!(output, input);
    }

    #[test]
    fn test_black_text_becomes_on_surface() {
        let input = "Icon(Icons.add, color: Colors.black,)";
        let output = apply_rules(input, &table());
        assert!(output.contains("color: Theme.of(context).colorScheme.onSurface,"));
    }

    #[test]
    fn test_text_style_wrappers() {
        let input = "style: TextStyle(color: AppTheme.textDark)";
        let output = apply_rules(input, &table());
        assert_eq!(
            output,
            "style: TextStyle(color: Theme.of(context).colorScheme.onSurface)"
        );
    }

    #[test]
    fn test_appbar_white_is_rewritten() {
        // The generic backgroundColor rule runs first, so the AppBar-specific
        // rule sees already-rewritten text and has nothing left to match.
        let input = "AppBar(backgroundColor: Colors.white, title: Text('x'))";
        let output = apply_rules(input, &table());
        assert_eq!(
            output,
            "AppBar(backgroundColor: Theme.of(context).colorScheme.surface, title: Text('x'))"
        );
    }

    #[test]
    fn test_rules_apply_sequentially() {
        // The plain paleBlue rule comes before the Scaffold-specific one, so
        // the Scaffold text is already rewritten by the time the later rule
        // scans it. The combined result is still theme-aware.
        let input = "Scaffold(backgroundColor: AppTheme.paleBlue)";
        let output = apply_rules(input, &table());
        assert!(output.contains("backgroundColor: Theme.of(context).colorScheme.background"));
        assert!(!output.contains("paleBlue"));
    }

    #[test]
    fn test_no_match_leaves_content_unchanged() {
        let input = "void main() {\n  runApp(MyApp());\n}\n";
        let output = apply_rules(input, &table());
        assert_eq!(output, input);
    }

    #[test]
    fn test_already_converted_guard() {
        let marker_lines = vec![format!("  color: {}.primary,", CONVERTED_MARKER); 6];
        let input = format!(
            "{}\n  backgroundColor: Colors.white,\n",
            marker_lines.join("\n")
        );
        assert!(already_converted(&input));

        // The guard wins even though a rule would otherwise match
        let output = apply_rules(&input, &table());
        assert_eq!(output, input);
    }

    #[test]
    fn test_guard_requires_more_than_threshold() {
        let input = vec![CONVERTED_MARKER; 5].join("\n");
        assert!(!already_converted(&input));
    }

    #[test]
    fn test_conversion_is_idempotent() {
        let input = "Card(color: Colors.white, child: Text('a', style: TextStyle(color: AppTheme.textGrey)))";
        let rules = table();
        let once = apply_rules(input, &rules);
        let twice = apply_rules(&once, &rules);
        assert_eq!(once, twice);
    }
}
