//! HTML fragment rendering for the grid and chip row.
//!
//! # Responsibility
//! - Turn `(Catalog, FilterState)` into the grid and chip-row markup.
//! - Expose what was rendered alongside the markup for callers and tests.
//!
//! # Invariants
//! - Output is a pure function of its inputs; nothing is cached.
//! - All interpolated text and attribute values are HTML-escaped.
//! - An empty visible set renders exactly one placeholder paragraph.

mod card;
mod html;
mod slug;

pub use card::{actionable_link, render_card};
pub use html::escape_html;
pub use slug::slug;

use crate::config::DEFAULT_EMPTY_MESSAGE;
use crate::filter::{derive_tag_vocabulary, filter_projects, FilterState};
use crate::model::project::{Catalog, Project};

/// Rendered grid plus the projects that survived filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRender<'c> {
    /// Visible projects in catalog order.
    pub visible: Vec<&'c Project>,
    pub html: String,
}

impl GridRender<'_> {
    /// True when the placeholder replaced the card list.
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Titles of the visible projects, in render order.
    pub fn titles(&self) -> Vec<&str> {
        self.visible.iter().map(|p| p.title.as_str()).collect()
    }
}

/// One toggle control in the chip row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub tag: String,
    pub active: bool,
}

/// Rendered chip row plus the chips it contains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChipRowRender {
    /// Vocabulary order.
    pub chips: Vec<Chip>,
    pub html: String,
}

impl ChipRowRender {
    /// Whether a control for `tag` exists in this row.
    pub fn contains(&self, tag: &str) -> bool {
        self.chips.iter().any(|chip| chip.tag == tag)
    }
}

/// Renders the grid with the default no-results message.
pub fn render_grid<'c>(catalog: &'c Catalog, state: &FilterState) -> GridRender<'c> {
    render_grid_with_message(catalog, state, DEFAULT_EMPTY_MESSAGE)
}

/// Renders the grid, substituting `empty_message` when nothing matches.
pub fn render_grid_with_message<'c>(
    catalog: &'c Catalog,
    state: &FilterState,
    empty_message: &str,
) -> GridRender<'c> {
    let visible = filter_projects(catalog, state);
    let html = if visible.is_empty() {
        format!("<p>{}</p>", escape_html(empty_message))
    } else {
        visible.iter().map(|project| render_card(project)).collect()
    };
    GridRender { visible, html }
}

/// Renders one chip per vocabulary tag, marking active tags.
pub fn render_tag_chips(catalog: &Catalog, state: &FilterState) -> ChipRowRender {
    let chips: Vec<Chip> = derive_tag_vocabulary(&catalog.projects)
        .into_iter()
        .map(|tag| Chip {
            active: state.is_tag_active(&tag),
            tag,
        })
        .collect();
    let html = chips.iter().map(render_chip).collect();
    ChipRowRender { chips, html }
}

fn render_chip(chip: &Chip) -> String {
    let class = if chip.active { "chip active" } else { "chip" };
    let tag = escape_html(&chip.tag);
    format!(
        r#"<button class="{class}" data-tag="{tag}" aria-pressed="{pressed}">{tag}</button>"#,
        pressed = chip.active
    )
}
