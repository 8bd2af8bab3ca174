//! Catalog loading from the page's embedded payload.
//!
//! # Responsibility
//! - Decode the `{ "projects": [...] }` payload into a [`Catalog`].
//! - Recover from any load failure with an empty catalog plus an error log.
//!
//! # Invariants
//! - `load_*` functions never fail and never panic.
//! - `try_load_*` functions report the failure kind instead of recovering.

mod embedded;

pub use embedded::extract_embedded_payload;

use crate::config::PageConfig;
use crate::model::project::Catalog;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Result type for fallible catalog loading.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Why a catalog payload could not be turned into a [`Catalog`].
#[derive(Debug)]
pub enum CatalogError {
    /// No element with the configured id exists in the page.
    MissingPayload { element_id: String },
    /// Payload is not JSON, or not the expected shape.
    Malformed(serde_json::Error),
    /// Element lookup pattern could not be compiled.
    Pattern(regex::Error),
    /// Page file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingPayload { element_id } => {
                write!(f, "no payload element with id `{element_id}`")
            }
            Self::Malformed(err) => write!(f, "malformed projects payload: {err}"),
            Self::Pattern(err) => write!(f, "invalid payload lookup pattern: {err}"),
            Self::Io { path, source } => {
                write!(f, "failed to read page `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingPayload { .. } => None,
            Self::Malformed(err) => Some(err),
            Self::Pattern(err) => Some(err),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed(value)
    }
}

impl From<regex::Error> for CatalogError {
    fn from(value: regex::Error) -> Self {
        Self::Pattern(value)
    }
}

/// Decodes a raw JSON payload.
pub fn try_load_catalog(payload: &str) -> CatalogResult<Catalog> {
    Ok(serde_json::from_str(payload)?)
}

/// Decodes a raw JSON payload, substituting an empty catalog on failure.
pub fn load_catalog(payload: &str) -> Catalog {
    recover(try_load_catalog(payload))
}

/// Locates the payload element inside a page and decodes it.
pub fn try_load_catalog_from_page(page_html: &str, config: &PageConfig) -> CatalogResult<Catalog> {
    let payload = extract_embedded_payload(page_html, &config.data_element_id)?;
    try_load_catalog(payload)
}

/// Page variant of [`load_catalog`].
pub fn load_catalog_from_page(page_html: &str, config: &PageConfig) -> Catalog {
    recover(try_load_catalog_from_page(page_html, config))
}

/// Reads a page from disk and decodes its embedded payload.
pub fn try_load_catalog_from_path(path: &Path, config: &PageConfig) -> CatalogResult<Catalog> {
    let page_html = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    try_load_catalog_from_page(&page_html, config)
}

/// Path variant of [`load_catalog`].
pub fn load_catalog_from_path(path: &Path, config: &PageConfig) -> Catalog {
    recover(try_load_catalog_from_path(path, config))
}

fn recover(result: CatalogResult<Catalog>) -> Catalog {
    match result {
        Ok(catalog) => {
            info!(
                "event=catalog_load module=catalog status=ok projects={}",
                catalog.len()
            );
            catalog
        }
        Err(err) => {
            error!(
                "event=catalog_load module=catalog status=error fallback=empty error={}",
                err
            );
            Catalog::empty()
        }
    }
}
