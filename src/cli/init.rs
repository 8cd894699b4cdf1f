//! Init command - write an example bodycalc.toml

use anyhow::{Context, Result};
use bodycalc::config::{CONFIG_FILE_NAME, EXAMPLE_CONFIG};
use console::style;
use std::path::Path;

/// Run the init command
pub fn run(path: &Path, force: bool) -> Result<()> {
    let dir = path
        .canonicalize()
        .with_context(|| format!("Path does not exist: {}", path.display()))?;

    if !dir.is_dir() {
        anyhow::bail!("Path is not a directory: {}", dir.display());
    }

    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() && !force {
        println!(
            "{} {} already exists (use --force to overwrite)",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
        return Ok(());
    }

    std::fs::write(&config_path, EXAMPLE_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!(
        "{} Created {}",
        style("✓").green(),
        style(config_path.display()).cyan()
    );

    println!("\nNext steps:");
    println!("  {} Pick the category sets to emit", style(CONFIG_FILE_NAME).cyan());
    println!("  {} Classify subjects", style("bodycalc classify subjects.json").cyan());
    println!("  {} Export the label catalog", style("bodycalc catalog").cyan());

    Ok(())
}
