//! Title-to-anchor slugs.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_SLUG_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("valid slug regex"));

/// Lowercases `value`, collapses every run outside `[a-z0-9]` to one `-`,
/// and strips hyphens at both ends.
///
/// Distinct titles may produce the same slug.
pub fn slug(value: &str) -> String {
    let lowered = value.to_lowercase();
    NON_SLUG_RUN_RE
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
