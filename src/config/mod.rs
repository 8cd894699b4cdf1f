//! Configuration module for bodycalc
//!
//! This module handles:
//! - Loading `bodycalc.toml`
//! - Which category sets are emitted
//! - Catalog export settings
//! - CLI defaults

mod project_config;

pub use project_config::{
    load_config, load_config_file, BodycalcConfig, CatalogConfig, CliDefaults, CONFIG_FILE_NAME,
    DEFAULT_DESCRIPTION_PREFIX, EXAMPLE_CONFIG,
};
