//! JSON reporter
//!
//! Outputs the full BatchResult as pretty-printed JSON. Labels appear as
//! their alias keys (`BodyType.Curvy`) so the tag store can map them back.

use crate::catalog::CatalogEntry;
use crate::classify::BatchResult;
use anyhow::Result;

/// Render result as JSON
pub fn render(result: &BatchResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Render catalog entries as a JSON array
pub fn render_catalog(entries: &[CatalogEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}
