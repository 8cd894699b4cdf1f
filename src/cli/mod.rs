//! CLI command definitions and handlers

mod catalog;
mod classify;
mod init;

use anyhow::Result;
use bodycalc::config::{self, BodycalcConfig};
use bodycalc::reporters::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// bodycalc - body measurement classifier
#[derive(Parser, Debug)]
#[command(name = "bodycalc")]
#[command(
    version,
    about = "Classify subjects into body shape, size and BMI labels from measurements, height and weight",
    after_help = "\
Examples:
  bodycalc classify subjects.json                 Classify and print a summary
  bodycalc classify subjects.json --format json   JSON output for the tag store
  cat subjects.json | bodycalc classify -         Read subjects from stdin
  bodycalc catalog                                Export the label catalog as JSON
  bodycalc init                                   Write an example bodycalc.toml"
)]
pub struct Cli {
    /// Config file (default: ./bodycalc.toml if present)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace) [default: info]
    #[arg(long, global = true, value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify subjects from a JSON array of subject records
    Classify {
        /// Input file, or `-` for stdin
        input: PathBuf,

        /// Output format: text, json (default from config, else text)
        #[arg(long, short = 'f', value_parser = ["text", "json"])]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Export the static label catalog for the enabled category sets
    Catalog {
        /// Output format: json, text
        #[arg(long, short = 'f', default_value = "json", value_parser = ["text", "json"])]
        format: String,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Write an example bodycalc.toml
    Init {
        /// Directory to write into
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing bodycalc.toml
        #[arg(long)]
        force: bool,
    },
}

/// Load the config named by `--config`, or bodycalc.toml in the working directory.
pub fn load_config(cli: &Cli) -> Result<BodycalcConfig> {
    match &cli.config {
        Some(path) => config::load_config_file(path),
        None => Ok(config::load_config(Path::new("."))),
    }
}

pub fn run(cli: Cli, config: BodycalcConfig) -> Result<()> {
    match cli.command {
        Commands::Classify {
            input,
            format,
            output,
        } => {
            let format = resolve_format(format.as_deref(), &config)?;
            classify::run(&input, format, output.as_deref(), &config)
        }

        Commands::Catalog { format, output } => {
            let format = OutputFormat::from_str(&format)?;
            catalog::run(format, output.as_deref(), &config)
        }

        Commands::Init { path, force } => init::run(&path, force),
    }
}

/// `--format` flag, then `[defaults].format`, then text
fn resolve_format(flag: Option<&str>, config: &BodycalcConfig) -> Result<OutputFormat> {
    match flag.or(config.defaults.format.as_deref()) {
        Some(name) => OutputFormat::from_str(name),
        None => Ok(OutputFormat::default()),
    }
}

/// Write rendered output to a file, or stdout when no path is given
fn write_output(rendered: &str, output: Option<&Path>) -> Result<()> {
    use anyhow::Context;
    use console::style;

    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{} Wrote {}",
                style("✓").green(),
                style(path.display()).cyan()
            );
        }
        None => print!("{}", rendered),
    }
    Ok(())
}
