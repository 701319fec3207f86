use std::path::Path;

/// Path fragments marking files that belong to the data or test layers and
/// must never be rewritten
const SKIP_PATTERNS: &[&str] = &[
    "firebase_options.dart",
    "/models/",
    "/services/",
    "/repositories/",
    "/datasources/",
    "/entities/",
    "/domain/",
    "_test.dart",
    "test/",
];

/// Directory names the walker prunes without descending into
const SKIP_DIRS: &[&str] = &["models", "services", "repositories", "domain", "data"];

/// Decide whether a file is outside the UI layer and should be skipped
///
/// # Arguments
/// * `path` - Path of the candidate file
///
/// # Returns
/// * `bool` - true when the path matches a skip fragment
pub fn should_skip(path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    SKIP_PATTERNS.iter().any(|pattern| path_str.contains(pattern))
}

/// Decide whether a directory name is on the prune list
pub fn is_pruned_dir(name: &str) -> bool {
    SKIP_DIRS.contains(&name)
}
