//! Core data models for bodycalc
//!
//! Subject records come in from the tag store, classified subjects and
//! diagnostics go back out. Everything here is plain data.

use crate::catalog::Label;
use serde::{Deserialize, Serialize};

/// How loudly a per-subject problem is reported
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Expected absence of data
    #[default]
    Debug,
    /// Malformed input a human should review
    Warning,
    /// Unexpected internal failure
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Debug => write!(f, "debug"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Raw subject fields as provided by the tag store
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SubjectRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Free-text measurement notation, e.g. "32D-28-34"
    #[serde(default)]
    pub measurements: Option<String>,
    /// Weight in kilograms
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub ethnicity: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
}

impl SubjectRecord {
    /// "Name (id)" used in log lines and diagnostics
    pub fn display_id(&self) -> String {
        format!("{} ({})", self.name, self.id)
    }

    pub fn is_female(&self) -> bool {
        self.gender
            .as_deref()
            .is_some_and(|g| g.trim().eq_ignore_ascii_case("female"))
    }
}

/// A subject and the labels it received, in classification step order
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClassifiedSubject {
    pub id: String,
    pub name: String,
    pub labels: Vec<Label>,
}

/// A problem recorded for one subject during a batch
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Diagnostic {
    pub subject_id: String,
    pub subject_name: String,
    pub severity: Severity,
    pub message: String,
}

/// Diagnostic counts by severity
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct DiagnosticSummary {
    pub error: usize,
    pub warning: usize,
    pub debug: usize,
    pub total: usize,
}

impl DiagnosticSummary {
    pub fn from_diagnostics(diagnostics: &[Diagnostic]) -> Self {
        let mut summary = Self::default();
        for d in diagnostics {
            match d.severity {
                Severity::Error => summary.error += 1,
                Severity::Warning => summary.warning += 1,
                Severity::Debug => summary.debug += 1,
            }
            summary.total += 1;
        }
        summary
    }
}
