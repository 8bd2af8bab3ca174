//! Project and catalog records.
//!
//! # Responsibility
//! - Mirror the embedded `{ "projects": [...] }` payload shape.
//! - Normalize absent/`null` optional fields to empty values on decode.
//!
//! # Invariants
//! - `tags` and `tech` keep payload order.
//! - `title` and `description` are never `None`; missing means empty.

use serde::{Deserialize, Deserializer, Serialize};

/// One portfolio entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Display title. Slugified into the card anchor; not unique.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Filter tags, rendered as badges and chips.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Technology list, rendered as pills. Searchable but not filterable.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tech: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
}

impl Project {
    /// Creates a project with only a title set.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Builder-style helper for tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style helper for tech entries.
    pub fn with_tech<I, S>(mut self, tech: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tech = tech.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_repo_url(mut self, url: impl Into<String>) -> Self {
        self.repo_url = Some(url.into());
        self
    }

    pub fn with_demo_url(mut self, url: impl Into<String>) -> Self {
        self.demo_url = Some(url.into());
        self
    }

    /// Returns whether any of this project's tags equals `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }
}

/// The full set of projects available for one page session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Payload order is display order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// Catalog substituted when the payload cannot be read.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::{Catalog, Project};

    #[test]
    fn decode_defaults_missing_and_null_fields() {
        let value = serde_json::json!({
            "projects": [
                { "title": "Bare" },
                { "title": "Nulls", "description": null, "tags": null, "tech": null }
            ]
        });

        let catalog: Catalog =
            serde_json::from_value(value).expect("catalog fixture should decode");
        assert_eq!(catalog.len(), 2);
        for project in &catalog.projects {
            assert!(project.description.is_empty());
            assert!(project.tags.is_empty());
            assert!(project.tech.is_empty());
            assert_eq!(project.repo_url, None);
            assert_eq!(project.demo_url, None);
        }
    }

    #[test]
    fn decode_treats_missing_projects_as_empty() {
        let catalog: Catalog =
            serde_json::from_str("{}").expect("empty object is an empty catalog");
        assert!(catalog.is_empty());
    }

    #[test]
    fn decode_keeps_tag_and_tech_order() {
        let value = serde_json::json!({
            "title": "Ordered",
            "tags": ["web", "cli", "go"],
            "tech": ["rust", "axum"],
            "repo_url": "https://example.com/repo"
        });

        let project: Project =
            serde_json::from_value(value).expect("project fixture should decode");
        assert_eq!(project.tags, vec!["web", "cli", "go"]);
        assert_eq!(project.tech, vec!["rust", "axum"]);
        assert_eq!(project.repo_url.as_deref(), Some("https://example.com/repo"));
    }

    #[test]
    fn has_tag_is_exact_match() {
        let project = Project::new("Case").with_tags(["Go"]);
        assert!(project.has_tag("Go"));
        assert!(!project.has_tag("go"));
    }
}
