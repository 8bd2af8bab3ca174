//! Element lookup and splicing inside page markup.
//!
//! # Responsibility
//! - Locate elements by `id` attribute without a full HTML parser.
//! - Replace an element's inner HTML, leaving the rest of the page intact.
//!
//! # Invariants
//! - `id` matching is exact; `projects` never matches `projects-data`.
//! - Nested elements with the same tag name are balanced when splicing.

use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure to find or splice an element.
#[derive(Debug)]
pub enum MarkupError {
    /// Lookup pattern could not be compiled.
    Pattern(regex::Error),
    /// No element carries the requested id.
    MissingElement(String),
    /// The element's closing tag was not found.
    Unclosed(String),
}

impl Display for MarkupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pattern(err) => write!(f, "invalid element lookup pattern: {err}"),
            Self::MissingElement(id) => write!(f, "no element with id `{id}`"),
            Self::Unclosed(id) => write!(f, "element `{id}` has no closing tag"),
        }
    }
}

impl Error for MarkupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Pattern(err) => Some(err),
            _ => None,
        }
    }
}

impl From<regex::Error> for MarkupError {
    fn from(value: regex::Error) -> Self {
        Self::Pattern(value)
    }
}

/// Regex fragment matching an `id` attribute equal to `element_id`.
pub(crate) fn id_attribute_pattern(element_id: &str) -> String {
    format!(
        r#"\sid\s*=\s*(?:"{id}"|'{id}'|{id}\b)"#,
        id = regex::escape(element_id)
    )
}

/// Returns `page` with the inner HTML of element `element_id` replaced by
/// `inner_html`.
pub fn replace_inner_html(
    page: &str,
    element_id: &str,
    inner_html: &str,
) -> Result<String, MarkupError> {
    let open_re = Regex::new(&format!(
        r"(?i)<([a-z][a-z0-9-]*)\b[^>]*?{}[^>]*>",
        id_attribute_pattern(element_id)
    ))?;
    let open = open_re
        .captures(page)
        .ok_or_else(|| MarkupError::MissingElement(element_id.to_string()))?;
    let (Some(whole), Some(tag)) = (open.get(0), open.get(1)) else {
        return Err(MarkupError::MissingElement(element_id.to_string()));
    };
    let content_start = whole.end();

    let tag_re = Regex::new(&format!(r"(?i)<(/?){}\b[^>]*>", regex::escape(tag.as_str())))?;
    let mut depth = 1usize;
    for caps in tag_re.captures_iter(&page[content_start..]) {
        let Some(found) = caps.get(0) else { continue };
        let closing = caps.get(1).is_some_and(|slash| !slash.as_str().is_empty());
        if closing {
            depth -= 1;
            if depth == 0 {
                let content_end = content_start + found.start();
                return Ok(format!(
                    "{}{}{}",
                    &page[..content_start],
                    inner_html,
                    &page[content_end..]
                ));
            }
        } else if !found.as_str().ends_with("/>") {
            depth += 1;
        }
    }

    Err(MarkupError::Unclosed(element_id.to_string()))
}
