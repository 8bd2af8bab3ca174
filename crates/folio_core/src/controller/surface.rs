//! Write targets the controller renders into.

use crate::config::PageConfig;
use crate::markup::replace_inner_html;
use log::warn;

/// Host-provided page regions. The controller only ever writes to them.
pub trait PageSurface {
    /// Replaces the project grid container content.
    fn write_grid(&mut self, html: &str);
    /// Replaces the tag-chip row content.
    fn write_chip_row(&mut self, html: &str);
    /// Sets the footer year display.
    fn write_year(&mut self, year: i32);
}

/// In-memory surface keeping the latest content of each region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySurface {
    pub grid_html: String,
    pub chip_row_html: String,
    pub year: Option<i32>,
    /// Number of grid writes so far.
    pub grid_writes: usize,
    /// Number of chip-row writes so far.
    pub chip_row_writes: usize,
}

impl PageSurface for MemorySurface {
    fn write_grid(&mut self, html: &str) {
        self.grid_html = html.to_string();
        self.grid_writes += 1;
    }

    fn write_chip_row(&mut self, html: &str) {
        self.chip_row_html = html.to_string();
        self.chip_row_writes += 1;
    }

    fn write_year(&mut self, year: i32) {
        self.year = Some(year);
    }
}

/// Full page document whose configured regions receive the fragments.
///
/// A region missing from the page is logged and skipped; the rest of the
/// document is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlPage {
    html: String,
    grid_element_id: String,
    chip_row_element_id: String,
    year_element_id: String,
    missing_regions: Vec<String>,
}

impl HtmlPage {
    pub fn new(html: impl Into<String>, config: &PageConfig) -> Self {
        Self {
            html: html.into(),
            grid_element_id: config.grid_element_id.clone(),
            chip_row_element_id: config.chip_row_element_id.clone(),
            year_element_id: config.year_element_id.clone(),
            missing_regions: Vec::new(),
        }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }

    /// Ids of regions that could not be written, in first-failure order.
    pub fn missing_regions(&self) -> &[String] {
        &self.missing_regions
    }

    fn write_region(&mut self, element_id: &str, inner_html: &str) {
        match replace_inner_html(&self.html, element_id, inner_html) {
            Ok(spliced) => self.html = spliced,
            Err(err) => {
                warn!(
                    "event=page_write module=controller status=skipped region={} error={}",
                    element_id, err
                );
                if !self.missing_regions.iter().any(|id| id == element_id) {
                    self.missing_regions.push(element_id.to_string());
                }
            }
        }
    }
}

impl PageSurface for HtmlPage {
    fn write_grid(&mut self, html: &str) {
        let id = self.grid_element_id.clone();
        self.write_region(&id, html);
    }

    fn write_chip_row(&mut self, html: &str) {
        let id = self.chip_row_element_id.clone();
        self.write_region(&id, html);
    }

    fn write_year(&mut self, year: i32) {
        let id = self.year_element_id.clone();
        self.write_region(&id, &year.to_string());
    }
}

impl<S: PageSurface + ?Sized> PageSurface for &mut S {
    fn write_grid(&mut self, html: &str) {
        (**self).write_grid(html);
    }

    fn write_chip_row(&mut self, html: &str) {
        (**self).write_chip_row(html);
    }

    fn write_year(&mut self, year: i32) {
        (**self).write_year(year);
    }
}
