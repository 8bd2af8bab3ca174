//! Project card markup.

use crate::model::project::Project;
use crate::render::html::escape_html;
use crate::render::slug::slug;

/// Placeholder URL authors leave in payloads for links that do not exist yet.
const PLACEHOLDER_URL: &str = "#";

/// Returns the trimmed URL when it is present, non-blank and not the `#`
/// placeholder.
pub fn actionable_link(url: Option<&str>) -> Option<&str> {
    url.map(str::trim)
        .filter(|trimmed| !trimmed.is_empty() && *trimmed != PLACEHOLDER_URL)
}

/// Renders one `<article class="card">` for `project`.
pub fn render_card(project: &Project) -> String {
    let anchor = format!("t-{}", slug(&project.title));
    let badges: String = project
        .tags
        .iter()
        .map(|tag| {
            let tag = escape_html(tag);
            format!(r#"<span class="badge" aria-label="tag {tag}">#{tag}</span>"#)
        })
        .collect();
    let pills: String = project
        .tech
        .iter()
        .map(|tech| format!(r#"<span class="pill">{}</span>"#, escape_html(tech)))
        .collect();

    let links: Vec<String> = [
        (project.repo_url.as_deref(), "Code ↗"),
        (project.demo_url.as_deref(), "Demo ↗"),
    ]
    .into_iter()
    .filter_map(|(url, label)| {
        actionable_link(url).map(|href| {
            format!(
                r#"<a class="btn" href="{}" target="_blank" rel="noopener">{label}</a>"#,
                escape_html(href)
            )
        })
    })
    .collect();
    let actions = if links.is_empty() {
        String::new()
    } else {
        format!(r#"<div class="actions">{}</div>"#, links.concat())
    };

    format!(
        concat!(
            r#"<article class="card" aria-labelledby="{anchor}">"#,
            r#"<header><h4 id="{anchor}">{title}</h4><div class="badges">{badges}</div></header>"#,
            r#"<p>{description}</p>"#,
            r#"<div class="tech">{pills}</div>"#,
            "{actions}",
            "</article>"
        ),
        anchor = anchor,
        title = escape_html(&project.title),
        badges = badges,
        description = escape_html(&project.description),
        pills = pills,
        actions = actions,
    )
}

#[cfg(test)]
mod tests {
    use super::{actionable_link, render_card};
    use crate::model::project::Project;

    #[test]
    fn placeholder_and_blank_links_are_not_actionable() {
        assert_eq!(actionable_link(None), None);
        assert_eq!(actionable_link(Some("")), None);
        assert_eq!(actionable_link(Some("   ")), None);
        assert_eq!(actionable_link(Some("  #  ")), None);
        assert_eq!(actionable_link(Some(" https://x ")), Some("https://x"));
        assert_eq!(actionable_link(Some("#section")), Some("#section"));
    }

    #[test]
    fn card_contains_anchor_badges_pills_and_links() {
        let project = Project::new("My Cool App!")
            .with_description("Does things")
            .with_tags(["cli"])
            .with_tech(["rust"])
            .with_repo_url("https://example.com/repo")
            .with_demo_url("#");
        let html = render_card(&project);

        assert!(html.contains(r#"aria-labelledby="t-my-cool-app""#));
        assert!(html.contains(r#"<h4 id="t-my-cool-app">My Cool App!</h4>"#));
        assert!(html.contains(r#"<span class="badge" aria-label="tag cli">#cli</span>"#));
        assert!(html.contains(r#"<span class="pill">rust</span>"#));
        assert!(html.contains("<p>Does things</p>"));
        assert_eq!(html.matches("Code ↗").count(), 1);
        assert_eq!(html.matches("Demo ↗").count(), 0);
    }

    #[test]
    fn card_without_links_omits_actions() {
        let html = render_card(&Project::new("Quiet"));
        assert!(!html.contains("actions"));
        assert!(html.contains("<p></p>"));
    }

    #[test]
    fn card_escapes_hostile_text() {
        let project = Project::new("<script>alert(1)</script>").with_tags([r#"x" onclick="y"#]);
        let html = render_card(&project);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("x&quot; onclick=&quot;y"));
    }
}
