//! Visitor filter state and project matching.
//!
//! # Responsibility
//! - Hold the session's search text and active tag set.
//! - Decide which catalog projects are visible for a given state.
//! - Derive the sorted tag vocabulary shown as chips.
//!
//! # Invariants
//! - Matching is a pure function of `(project, state)`.
//! - Filtering is stable: visible projects keep catalog order.
//! - Tag predicate and text predicate are combined with logical AND.

mod vocabulary;

pub use vocabulary::{derive_tag_vocabulary, locale_cmp};

use crate::model::project::{Catalog, Project};
use std::collections::HashSet;

/// Visitor-controlled predicate configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Raw search input as typed; trimmed and case-folded at match time.
    pub search_text: String,
    /// Tags combined with OR semantics against each project's tag list.
    pub active_tags: HashSet<String>,
}

/// Outcome of [`FilterState::toggle_tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagToggle {
    Activated,
    Deactivated,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `tag` when absent, removes it when present.
    pub fn toggle_tag(&mut self, tag: &str) -> TagToggle {
        if self.active_tags.remove(tag) {
            TagToggle::Deactivated
        } else {
            self.active_tags.insert(tag.to_string());
            TagToggle::Activated
        }
    }

    pub fn is_tag_active(&self, tag: &str) -> bool {
        self.active_tags.contains(tag)
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Trimmed, case-folded search needle. Empty means "no text filter".
    pub fn search_needle(&self) -> String {
        self.search_text.trim().to_lowercase()
    }
}

/// Tag predicate: no active tags, or at least one shared tag.
pub fn tag_predicate(project: &Project, state: &FilterState) -> bool {
    state.active_tags.is_empty() || project.tags.iter().any(|tag| state.is_tag_active(tag))
}

/// Text predicate: empty needle, or needle is a substring of the haystack.
pub fn text_predicate(project: &Project, state: &FilterState) -> bool {
    let needle = state.search_needle();
    if needle.is_empty() {
        return true;
    }
    search_haystack(project).contains(&needle)
}

/// Returns whether `project` is visible under `state`.
pub fn matches_filter(project: &Project, state: &FilterState) -> bool {
    tag_predicate(project, state) && text_predicate(project, state)
}

/// Stable filter of the catalog through [`matches_filter`].
pub fn filter_projects<'c>(catalog: &'c Catalog, state: &FilterState) -> Vec<&'c Project> {
    catalog
        .projects
        .iter()
        .filter(|project| matches_filter(project, state))
        .collect()
}

/// Case-folded searchable text: title, description, tags, then tech, space
/// separated.
pub fn search_haystack(project: &Project) -> String {
    let fields = [project.title.as_str(), project.description.as_str()]
        .into_iter()
        .chain(project.tags.iter().map(String::as_str))
        .chain(project.tech.iter().map(String::as_str))
        .collect::<Vec<_>>();
    fields.join(" ").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::{matches_filter, search_haystack, tag_predicate, FilterState, TagToggle};
    use crate::model::project::Project;

    #[test]
    fn toggle_adds_then_removes() {
        let mut state = FilterState::new();
        assert_eq!(state.toggle_tag("go"), TagToggle::Activated);
        assert!(state.is_tag_active("go"));
        assert_eq!(state.toggle_tag("go"), TagToggle::Deactivated);
        assert!(state.active_tags.is_empty());
    }

    #[test]
    fn haystack_joins_fields_in_order() {
        let project = Project::new("Title")
            .with_description("Desc")
            .with_tags(["Go"])
            .with_tech(["Rust"]);
        assert_eq!(search_haystack(&project), "title desc go rust");
    }

    #[test]
    fn search_is_trimmed_and_case_folded() {
        let project = Project::new("Log Shipper").with_tech(["Kafka"]);
        let mut state = FilterState::new();
        state.set_search_text("  KAFKA ");
        assert!(matches_filter(&project, &state));
    }

    #[test]
    fn whitespace_only_search_matches_everything() {
        let project = Project::new("Anything");
        let mut state = FilterState::new();
        state.set_search_text("   ");
        assert!(matches_filter(&project, &state));
    }

    #[test]
    fn project_without_tags_fails_any_active_tag() {
        let project = Project::new("Untagged");
        let mut state = FilterState::new();
        state.toggle_tag("web");
        assert!(!tag_predicate(&project, &state));
    }

    #[test]
    fn text_must_match_even_when_tag_matches() {
        let project = Project::new("Parser").with_tags(["go"]);
        let mut state = FilterState::new();
        state.toggle_tag("go");
        state.set_search_text("compiler");
        assert!(!matches_filter(&project, &state));
    }
}
