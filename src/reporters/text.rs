//! Text (terminal) reporter with colors and formatting

use crate::catalog::CatalogEntry;
use crate::classify::BatchResult;
use crate::models::{Diagnostic, Severity};
use anyhow::Result;

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Diagnostics listed before the rest are elided
const MAX_DIAGNOSTICS: usize = 20;

fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "\x1b[31m",   // Red
        Severity::Warning => "\x1b[33m", // Yellow
        Severity::Debug => "\x1b[90m",   // Gray
    }
}

fn severity_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "[E]",
        Severity::Warning => "[W]",
        Severity::Debug => "[D]",
    }
}

/// Render result as formatted terminal output
pub fn render(result: &BatchResult) -> Result<String> {
    let mut out = String::new();
    let summary = result.summary();
    let label_count: usize = result.subjects.iter().map(|s| s.labels.len()).sum();

    // Header
    out.push_str(&format!("\n{BOLD}bodycalc classification{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Labelled: {BOLD}{}{RESET}  Skipped: {}  Labels: {}\n\n",
        result.subjects.len(),
        result.skipped(),
        label_count
    ));

    // Per subject
    if !result.subjects.is_empty() {
        out.push_str(&format!("{BOLD}SUBJECTS{RESET}\n"));
        for subject in &result.subjects {
            out.push_str(&format!(
                "  {BOLD}{}{RESET} {DIM}({}){RESET}\n",
                subject.name, subject.id
            ));
            if subject.labels.is_empty() {
                out.push_str(&format!("    {DIM}no labels{RESET}\n"));
            } else {
                let names: Vec<&str> = subject.labels.iter().map(|l| l.display_name()).collect();
                out.push_str(&format!("    {}\n", names.join(", ")));
            }
        }
        out.push('\n');
    }

    // Label counts
    if !result.aggregate.is_empty() {
        out.push_str(&format!("{BOLD}LABELS{RESET}\n"));
        for (label, ids) in result.aggregate.iter() {
            out.push_str(&format!(
                "  {:<32} {:>4}\n",
                label.display_name(),
                ids.len()
            ));
        }
        out.push('\n');
    }

    // Diagnostics
    if summary.total > 0 {
        out.push_str(&format!(
            "{BOLD}DIAGNOSTICS{RESET} ({} total)\n",
            summary.total
        ));

        let mut summary_parts = Vec::new();
        if summary.error > 0 {
            summary_parts.push(format!("\x1b[31m{} error{RESET}", summary.error));
        }
        if summary.warning > 0 {
            summary_parts.push(format!("\x1b[33m{} warning{RESET}", summary.warning));
        }
        if summary.debug > 0 {
            summary_parts.push(format!("\x1b[90m{} missing data{RESET}", summary.debug));
        }
        out.push_str(&format!("  {}\n", summary_parts.join(" | ")));

        // Expected gaps only clutter the listing
        let notable: Vec<&Diagnostic> = result
            .diagnostics
            .iter()
            .filter(|d| d.severity > Severity::Debug)
            .collect();
        for d in notable.iter().take(MAX_DIAGNOSTICS) {
            let color = severity_color(d.severity);
            out.push_str(&format!(
                "  {color}{}{RESET} {} {DIM}({}){RESET}: {}\n",
                severity_tag(d.severity),
                d.subject_name,
                d.subject_id,
                d.message
            ));
        }
        let remaining = notable.len().saturating_sub(MAX_DIAGNOSTICS);
        if remaining > 0 {
            out.push_str(&format!(
                "\n  {DIM}...and {} more (use --format json for the full list){RESET}\n",
                remaining
            ));
        }
    }

    Ok(out)
}

/// Render catalog entries as a listing grouped by alias-key set
pub fn render_catalog(entries: &[CatalogEntry]) -> Result<String> {
    let mut out = String::new();
    let mut current_set = "";

    for entry in entries {
        let set = entry
            .alias_key
            .split_once('.')
            .map(|(set, _)| set)
            .unwrap_or_default();
        if set != current_set {
            if !current_set.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("{BOLD}{}{RESET}\n", set));
            current_set = set;
        }
        out.push_str(&format!(
            "  {:<28} {DIM}{}{RESET}\n",
            entry.display_name, entry.alias_key
        ));
    }

    Ok(out)
}
