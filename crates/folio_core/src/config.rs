//! Page wiring configuration.
//!
//! # Responsibility
//! - Name the page regions the payload is read from and fragments are written into.
//! - Hold the search quiet period and the empty-results message.
//!
//! # Invariants
//! - `PageConfig::default()` matches the shipped portfolio page markup.
//! - Partial JSON overrides keep defaults for omitted keys.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Element id of the `<script>` holding the project payload.
pub const DEFAULT_DATA_ELEMENT_ID: &str = "projects-data";
pub const DEFAULT_GRID_ELEMENT_ID: &str = "projectsGrid";
pub const DEFAULT_CHIP_ROW_ELEMENT_ID: &str = "tagChips";
pub const DEFAULT_YEAR_ELEMENT_ID: &str = "year";
/// Quiet period before a search keystroke burst renders.
pub const DEFAULT_SEARCH_QUIET_MS: u64 = 120;
pub const DEFAULT_EMPTY_MESSAGE: &str = "No matching projects yet. Try clearing filters.";

/// Element ids and timing used by one page session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub data_element_id: String,
    /// Region replaced with the rendered card grid.
    pub grid_element_id: String,
    /// Region replaced with the rendered chip row.
    pub chip_row_element_id: String,
    /// Region replaced with the current year.
    pub year_element_id: String,
    /// Milliseconds of input silence before the grid re-renders.
    pub search_quiet_ms: u64,
    /// Plain text shown in place of the grid when nothing matches.
    pub empty_message: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            data_element_id: DEFAULT_DATA_ELEMENT_ID.to_string(),
            grid_element_id: DEFAULT_GRID_ELEMENT_ID.to_string(),
            chip_row_element_id: DEFAULT_CHIP_ROW_ELEMENT_ID.to_string(),
            year_element_id: DEFAULT_YEAR_ELEMENT_ID.to_string(),
            search_quiet_ms: DEFAULT_SEARCH_QUIET_MS,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
        }
    }
}

impl PageConfig {
    /// Parses a JSON override document. Omitted keys keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn search_quiet_period(&self) -> Duration {
        Duration::from_millis(self.search_quiet_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::{PageConfig, DEFAULT_DATA_ELEMENT_ID};
    use std::time::Duration;

    #[test]
    fn default_quiet_period_is_120ms() {
        assert_eq!(
            PageConfig::default().search_quiet_period(),
            Duration::from_millis(120)
        );
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let config = PageConfig::from_json(r#"{ "search_quiet_ms": 250 }"#)
            .expect("partial override should parse");
        assert_eq!(config.search_quiet_ms, 250);
        assert_eq!(config.data_element_id, DEFAULT_DATA_ELEMENT_ID);
    }
}
