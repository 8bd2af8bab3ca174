//! Payload lookup inside page markup.

use crate::catalog::{CatalogError, CatalogResult};
use crate::markup::id_attribute_pattern;
use regex::Regex;

/// Returns the raw text content of the `<script>` element whose `id` is
/// `element_id`.
///
/// Script content is raw text in HTML, so no entity decoding happens here.
pub fn extract_embedded_payload<'page>(
    page_html: &'page str,
    element_id: &str,
) -> CatalogResult<&'page str> {
    let pattern = format!(
        r"(?is)<script\b[^>]*?{}[^>]*>(.*?)</script\s*>",
        id_attribute_pattern(element_id)
    );
    let re = Regex::new(&pattern)?;

    re.captures(page_html)
        .and_then(|caps| caps.get(1))
        .map(|body| body.as_str())
        .ok_or_else(|| CatalogError::MissingPayload {
            element_id: element_id.to_string(),
        })
}
