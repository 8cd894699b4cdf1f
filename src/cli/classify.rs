//! Classify command - label a batch of subject records

use super::write_output;
use anyhow::{Context, Result};
use bodycalc::config::BodycalcConfig;
use bodycalc::reporters::{self, OutputFormat};
use bodycalc::{Classifier, SubjectRecord};
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Run the classify command
pub fn run(
    input: &Path,
    format: OutputFormat,
    output: Option<&Path>,
    config: &BodycalcConfig,
) -> Result<()> {
    let subjects = read_subjects(input)?;
    info!("Classifying {} subjects", subjects.len());

    let classifier = Classifier::new().with_categories(config.enabled_categories());
    let result = classifier.classify_batch(&subjects);

    let rendered = reporters::report_with_format(&result, format)?;
    write_output(&rendered, output)
}

/// Read a JSON array of subject records from a file, or stdin for `-`
fn read_subjects(input: &Path) -> Result<Vec<SubjectRecord>> {
    let content = if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read subjects from stdin")?;
        buf
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read {}", input.display()))?
    };

    serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON array of subject records", input.display()))
}
