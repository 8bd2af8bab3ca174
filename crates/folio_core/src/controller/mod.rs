//! Filter-Render Controller for one page session.
//!
//! # Responsibility
//! - Own the session's catalog, filter state and pending search render.
//! - Translate visitor input into full re-renders of grid and chip row.
//!
//! # Invariants
//! - Every render is a full recompute from `(Catalog, FilterState)`.
//! - Renders run to completion synchronously; they never overlap.
//! - Search input is debounced; chip clicks render immediately.
//! - The catalog is never mutated after `init`.

mod surface;

pub use surface::{HtmlPage, MemorySurface, PageSurface};

use crate::catalog::load_catalog_from_page;
use crate::config::PageConfig;
use crate::debounce::Debouncer;
use crate::filter::{derive_tag_vocabulary, filter_projects, FilterState, TagToggle};
use crate::model::project::{Catalog, Project};
use crate::render::{render_grid_with_message, render_tag_chips};
use chrono::Datelike;
use log::{debug, info};
use std::time::Instant;

/// Controller lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPhase {
    /// Waiting for input.
    Idle,
    /// Computing and committing new output.
    Rendering,
}

/// Visitor input delivered by the host, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// Current value of the search field after a text change.
    SearchInput(String),
    /// Click on the chip carrying this `data-tag`.
    ChipClick(String),
}

/// What handling one event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// A debounced render was (re)scheduled.
    Scheduled,
    /// Output was re-rendered synchronously.
    Rendered,
    /// The event referenced a control that does not exist.
    Ignored,
}

/// Session-scoped controller writing into a host [`PageSurface`].
pub struct FilterRenderController<S: PageSurface> {
    config: PageConfig,
    catalog: Catalog,
    filter: FilterState,
    pending_search: Debouncer<String>,
    surface: S,
    phase: RenderPhase,
}

impl<S: PageSurface> FilterRenderController<S> {
    /// Creates a controller with an empty catalog and empty filter state.
    pub fn new(config: PageConfig, surface: S) -> Self {
        let pending_search = Debouncer::new(config.search_quiet_period());
        Self {
            config,
            catalog: Catalog::empty(),
            filter: FilterState::new(),
            pending_search,
            surface,
            phase: RenderPhase::Idle,
        }
    }

    /// Loads the catalog embedded in `page_html` and performs the first
    /// render.
    ///
    /// A missing or malformed payload yields an empty catalog, an empty chip
    /// row and the no-results placeholder.
    pub fn init(&mut self, page_html: &str) {
        let catalog = load_catalog_from_page(page_html, &self.config);
        self.init_with_catalog(catalog);
    }

    /// Same as [`Self::init`] for hosts that already decoded the payload.
    pub fn init_with_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.render_chips();
        self.render_grid();
        self.surface.write_year(chrono::Local::now().year());
        info!(
            "event=controller_init module=controller status=ok projects={} quiet_ms={}",
            self.catalog.len(),
            self.config.search_quiet_ms
        );
    }

    /// Records a search text change. The grid re-renders once input has
    /// been quiet for the configured period; see [`Self::tick`].
    pub fn on_search_input(&mut self, text: impl Into<String>, now: Instant) {
        self.pending_search.schedule(text.into(), now);
    }

    /// Fires the pending search render if it is due. Returns whether the
    /// grid was re-rendered.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending_search.poll(now) {
            Some(text) => {
                self.commit_search(text);
                true
            }
            None => false,
        }
    }

    /// Fires the pending search render now, if any.
    pub fn flush_pending_search(&mut self) -> bool {
        match self.pending_search.take_pending() {
            Some(text) => {
                self.commit_search(text);
                true
            }
            None => false,
        }
    }

    /// Instant at which the pending search render becomes due.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending_search.pending_deadline()
    }

    /// Toggles `tag` and re-renders chips and grid immediately.
    ///
    /// Returns `None` when no chip exists for `tag`.
    pub fn on_chip_click(&mut self, tag: &str) -> Option<TagToggle> {
        if !derive_tag_vocabulary(&self.catalog.projects)
            .iter()
            .any(|known| known == tag)
        {
            debug!(
                "event=chip_click module=controller status=ignored reason=unknown_tag tag_chars={}",
                tag.chars().count()
            );
            return None;
        }

        let toggle = self.filter.toggle_tag(tag);
        self.render_chips();
        self.render_grid();
        Some(toggle)
    }

    /// Dispatches one host event.
    pub fn handle_event(&mut self, event: PageEvent, now: Instant) -> EventOutcome {
        match event {
            PageEvent::SearchInput(text) => {
                self.on_search_input(text, now);
                EventOutcome::Scheduled
            }
            PageEvent::ChipClick(tag) => match self.on_chip_click(&tag) {
                Some(_) => EventOutcome::Rendered,
                None => EventOutcome::Ignored,
            },
        }
    }

    /// Projects visible under the current filter state, in catalog order.
    pub fn visible_projects(&self) -> Vec<&Project> {
        filter_projects(&self.catalog, &self.filter)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn phase(&self) -> RenderPhase {
        self.phase
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Consumes the controller, handing the surface back to the host.
    pub fn into_surface(self) -> S {
        self.surface
    }

    fn commit_search(&mut self, text: String) {
        self.filter.set_search_text(text);
        self.render_grid();
    }

    fn render_grid(&mut self) {
        self.begin_render();
        let grid =
            render_grid_with_message(&self.catalog, &self.filter, &self.config.empty_message);
        self.surface.write_grid(&grid.html);
        debug!(
            "event=render_grid module=controller visible={} total={} active_tags={}",
            grid.visible.len(),
            self.catalog.len(),
            self.filter.active_tags.len()
        );
        self.end_render();
    }

    fn render_chips(&mut self) {
        self.begin_render();
        let row = render_tag_chips(&self.catalog, &self.filter);
        self.surface.write_chip_row(&row.html);
        self.end_render();
    }

    fn begin_render(&mut self) {
        debug_assert_eq!(self.phase, RenderPhase::Idle, "renders must not overlap");
        self.phase = RenderPhase::Rendering;
    }

    fn end_render(&mut self) {
        self.phase = RenderPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::{EventOutcome, FilterRenderController, MemorySurface, PageEvent, RenderPhase};
    use crate::config::PageConfig;
    use crate::filter::TagToggle;
    use crate::model::project::{Catalog, Project};
    use std::time::{Duration, Instant};

    fn controller() -> FilterRenderController<MemorySurface> {
        let mut controller =
            FilterRenderController::new(PageConfig::default(), MemorySurface::default());
        controller.init_with_catalog(Catalog::new(vec![
            Project::new("A").with_tags(["go", "cli"]),
            Project::new("B").with_tags(["web"]),
        ]));
        controller
    }

    #[test]
    fn init_writes_all_three_regions() {
        let controller = controller();
        let surface = controller.surface();
        assert_eq!(surface.chip_row_writes, 1);
        assert_eq!(surface.grid_writes, 1);
        assert!(surface.year.is_some_and(|year| year >= 2024));
        assert_eq!(controller.phase(), RenderPhase::Idle);
    }

    #[test]
    fn unknown_chip_click_is_ignored_without_rendering() {
        let mut controller = controller();
        let outcome = controller.handle_event(PageEvent::ChipClick("rust".into()), Instant::now());
        assert_eq!(outcome, EventOutcome::Ignored);
        assert!(controller.filter_state().active_tags.is_empty());
        assert_eq!(controller.surface().grid_writes, 1);
    }

    #[test]
    fn chip_click_twice_restores_unfiltered_grid() {
        let mut controller = controller();
        assert_eq!(controller.on_chip_click("web"), Some(TagToggle::Activated));
        assert_eq!(controller.visible_projects().len(), 1);
        assert_eq!(controller.on_chip_click("web"), Some(TagToggle::Deactivated));
        assert_eq!(controller.visible_projects().len(), 2);
        assert_eq!(controller.surface().grid_writes, 3);
        assert_eq!(controller.surface().chip_row_writes, 3);
    }

    #[test]
    fn flush_commits_pending_search() {
        let mut controller = controller();
        controller.on_search_input("web", Instant::now());
        assert!(controller.next_deadline().is_some());
        assert!(controller.flush_pending_search());
        assert_eq!(controller.filter_state().search_text, "web");
        assert!(!controller.flush_pending_search());
    }

    #[test]
    fn search_event_schedules_instead_of_rendering() {
        let mut controller = controller();
        let start = Instant::now();
        let outcome = controller.handle_event(PageEvent::SearchInput("go".into()), start);
        assert_eq!(outcome, EventOutcome::Scheduled);
        assert_eq!(controller.surface().grid_writes, 1);
        assert!(controller.tick(start + Duration::from_millis(120)));
        assert_eq!(controller.surface().grid_writes, 2);
    }
}
