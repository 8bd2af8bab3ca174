//! Core logic for the Folio portfolio page.
//! Loads the embedded project catalog, filters it by search text and tag
//! chips, and renders the card grid and chip row as HTML fragments.

pub mod catalog;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod filter;
pub mod logging;
pub mod markup;
pub mod model;
pub mod render;

pub use catalog::{
    extract_embedded_payload, load_catalog, load_catalog_from_page, load_catalog_from_path,
    try_load_catalog, try_load_catalog_from_page, try_load_catalog_from_path, CatalogError,
    CatalogResult,
};
pub use config::PageConfig;
pub use controller::{
    EventOutcome, FilterRenderController, HtmlPage, MemorySurface, PageEvent, PageSurface,
    RenderPhase,
};
pub use debounce::{Debouncer, TaskId};
pub use filter::{
    derive_tag_vocabulary, filter_projects, matches_filter, tag_predicate, text_predicate,
    FilterState, TagToggle,
};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig};
pub use markup::{replace_inner_html, MarkupError};
pub use model::project::{Catalog, Project};
pub use render::{
    actionable_link, escape_html, render_card, render_grid, render_grid_with_message,
    render_tag_chips, slug, Chip, ChipRowRender, GridRender,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
