//! `bodycalc.toml` support
//!
//! Loaded from the working directory, or from an explicit `--config` path.
//!
//! # Configuration Format
//!
//! ```toml
//! # bodycalc.toml
//!
//! # Category sets to emit (default: all of them)
//! categories = ["body_shape", "body_type", "breast_cup", "height_type"]
//!
//! [catalog]
//! description_prefix = "[Managed By: PBC Plugin]\n"
//!
//! [defaults]
//! format = "json"
//! log_level = "debug"
//! ```

use crate::catalog::CategorySet;
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

pub const CONFIG_FILE_NAME: &str = "bodycalc.toml";

/// Prefix the tag store uses to recognize entries it manages
pub const DEFAULT_DESCRIPTION_PREFIX: &str = "[Managed By: PBC Plugin]\n";

/// Written by `bodycalc init`
pub const EXAMPLE_CONFIG: &str = r#"# bodycalc configuration

# Category sets to emit. Sets left out are still computed when another set
# depends on them, but never appear in the output or the exported catalog.
categories = [
    "body_mass_index",
    "breast_size",
    "breast_cup",
    "hip_size",
    "butt_size",
    "height_type",
    "body_shape",
    "body_type",
]

[catalog]
# Prepended to every exported catalog description
description_prefix = "[Managed By: PBC Plugin]\n"

[defaults]
# Output format: text or json
format = "text"
# trace, debug, info, warn, error
log_level = "info"
"#;


/// Configuration loaded from bodycalc.toml
#[derive(Debug, Clone, Deserialize, Default)]
pub struct BodycalcConfig {
    /// Category sets to emit; `None` means all of them
    #[serde(default)]
    pub categories: Option<Vec<String>>,

    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Default CLI flags
    #[serde(default)]
    pub defaults: CliDefaults,
}

/// Catalog export settings
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_description_prefix")]
    pub description_prefix: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            description_prefix: default_description_prefix(),
        }
    }
}

fn default_description_prefix() -> String {
    DEFAULT_DESCRIPTION_PREFIX.to_string()
}

/// Default CLI flags that can be set in config
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CliDefaults {
    /// Default output format (text, json)
    #[serde(default)]
    pub format: Option<String>,

    /// Default log level, overridden by `--log-level` and `RUST_LOG`
    #[serde(default)]
    pub log_level: Option<String>,
}

impl BodycalcConfig {
    /// Category sets to emit, in step order.
    ///
    /// Accepts either `body_shape` or `BodyShape`. Unknown names are logged
    /// and ignored.
    pub fn enabled_categories(&self) -> Vec<CategorySet> {
        let Some(names) = &self.categories else {
            return CategorySet::all().to_vec();
        };

        let mut sets = Vec::new();
        for name in names {
            match CategorySet::from_name(name.trim()) {
                Some(set) => sets.push(set),
                None => warn!("Unknown category '{}' in {}, ignoring", name, CONFIG_FILE_NAME),
            }
        }
        sets.sort();
        sets.dedup();
        sets
    }

    pub fn description_prefix(&self) -> &str {
        &self.catalog.description_prefix
    }
}

/// Load configuration from `dir/bodycalc.toml`.
///
/// Returns defaults if the file is missing or cannot be parsed.
pub fn load_config(dir: &Path) -> BodycalcConfig {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        debug!("No {} found, using defaults", CONFIG_FILE_NAME);
        return BodycalcConfig::default();
    }
    load_or_default(&path)
}

/// Load configuration from an explicitly named file.
///
/// A missing file is an error; a malformed one falls back to defaults.
pub fn load_config_file(path: &Path) -> anyhow::Result<BodycalcConfig> {
    if !path.exists() {
        anyhow::bail!("Config file not found: {}", path.display());
    }
    Ok(load_or_default(path))
}

fn load_or_default(path: &Path) -> BodycalcConfig {
    match load_toml_config(path) {
        Ok(config) => {
            debug!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            warn!("Failed to load {}: {:#}", path.display(), e);
            BodycalcConfig::default()
        }
    }
}

fn load_toml_config(path: &Path) -> anyhow::Result<BodycalcConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: BodycalcConfig = toml::from_str(&content)?;
    Ok(config)
}
