//! Tag vocabulary derivation.

use crate::model::project::Project;
use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed};
use once_cell::sync::Lazy;
use std::cmp::Ordering;

/// Root-locale collator at tertiary strength: base letters first, then
/// accents, then case (lowercase first).
static TAG_COLLATOR: Lazy<CollatorBorrowed<'static>> = Lazy::new(|| {
    let mut options = CollatorOptions::default();
    options.strength = Some(Strength::Tertiary);
    Collator::try_new(Default::default(), options).expect("root collation data is compiled in")
});

/// Returns every distinct tag across `projects`, sorted with [`locale_cmp`].
pub fn derive_tag_vocabulary(projects: &[Project]) -> Vec<String> {
    let mut tags: Vec<String> = projects
        .iter()
        .flat_map(|project| project.tags.iter().cloned())
        .collect();
    tags.sort_by(|a, b| locale_cmp(a, b));
    tags.dedup();
    tags
}

/// Collation used for chip order.
///
/// Strings the collator considers equal fall back to code point order, so
/// only identical strings compare equal.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    TAG_COLLATOR.compare(a, b).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::{derive_tag_vocabulary, locale_cmp};
    use crate::model::project::Project;
    use std::cmp::Ordering;

    #[test]
    fn ignores_case_for_primary_order() {
        let projects = vec![Project::new("A").with_tags(["web", "API", "cli"])];
        assert_eq!(derive_tag_vocabulary(&projects), vec!["API", "cli", "web"]);
    }

    #[test]
    fn lowercase_sorts_before_uppercase_variant() {
        assert_eq!(locale_cmp("go", "Go"), Ordering::Less);
        assert_eq!(locale_cmp("Go", "go"), Ordering::Greater);
        assert_eq!(locale_cmp("go", "go"), Ordering::Equal);
    }

    #[test]
    fn accented_tags_sort_with_base_letter() {
        assert_eq!(locale_cmp("élan", "zig"), Ordering::Less);
        assert_eq!(locale_cmp("elan", "élan"), Ordering::Less);
    }

    #[test]
    fn underscore_sorts_before_hyphen() {
        assert_eq!(locale_cmp("node_js", "node-js"), Ordering::Less);
    }

    #[test]
    fn mixed_accents_and_punctuation_follow_root_collation() {
        let projects = vec![
            Project::new("A").with_tags(["rust", "élan", "zig"]),
            Project::new("B").with_tags(["node_js", "node-js", "rust"]),
        ];
        assert_eq!(
            derive_tag_vocabulary(&projects),
            vec!["élan", "node_js", "node-js", "rust", "zig"]
        );
    }

    #[test]
    fn case_variants_stay_distinct_tags() {
        let projects = vec![
            Project::new("A").with_tags(["Go"]),
            Project::new("B").with_tags(["go", "Go"]),
        ];
        assert_eq!(derive_tag_vocabulary(&projects), vec!["go", "Go"]);
    }
}
