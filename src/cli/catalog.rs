//! Catalog command - export label entries for the tag store

use super::write_output;
use anyhow::Result;
use bodycalc::catalog::export_catalog;
use bodycalc::config::BodycalcConfig;
use bodycalc::reporters::{self, OutputFormat};
use tracing::debug;

pub fn run(format: OutputFormat, output: Option<&std::path::Path>, config: &BodycalcConfig) -> Result<()> {
    let sets = config.enabled_categories();
    let entries = export_catalog(&sets, config.description_prefix());
    debug!("Exporting {} catalog entries from {} sets", entries.len(), sets.len());

    let rendered = reporters::catalog_with_format(&entries, format)?;
    write_output(&rendered, output)
}
