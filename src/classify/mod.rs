//! Classification orchestrator
//!
//! Runs every classification step for one subject in a fixed order and
//! collects the resulting labels. Missing or invalid inputs only cost the
//! labels that depend on them. A batch never stops on a bad subject: the
//! error is logged at its severity, recorded as a [`Diagnostic`] and the next
//! subject is processed.

use crate::catalog::{BmiScale, BreastSize, ButtSize, CategorySet, Label};
use crate::descriptor::{bmi_category, body_type, height_type, hip_size};
use crate::error::{ClassifyError, ClassifyResult};
use crate::matcher::match_threshold;
use crate::measurements;
use crate::measurements::Measurements;
use crate::metrics::{positive_quantity, MeasurementRecord};
use crate::models::{ClassifiedSubject, Diagnostic, DiagnosticSummary, Severity, SubjectRecord};
use crate::shape::{classify_shape, ShapeOutcome};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, error, info, warn};


/// Label -> ids of the subjects that received it.
///
/// Iterates in catalog order; ids within a label are sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LabelAggregate(BTreeMap<Label, BTreeSet<String>>);

impl LabelAggregate {
    pub fn record(&mut self, subject_id: &str, labels: &[Label]) {
        for label in labels {
            self.0
                .entry(*label)
                .or_default()
                .insert(subject_id.to_string());
        }
    }

    pub fn subjects_for(&self, label: Label) -> Option<&BTreeSet<String>> {
        self.0.get(&label)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Label, &BTreeSet<String>)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Everything a batch run produced
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchResult {
    pub subjects: Vec<ClassifiedSubject>,
    pub aggregate: LabelAggregate,
    pub diagnostics: Vec<Diagnostic>,
}

impl BatchResult {
    pub fn summary(&self) -> DiagnosticSummary {
        DiagnosticSummary::from_diagnostics(&self.diagnostics)
    }

    /// Subjects that produced a diagnostic but no result
    pub fn skipped(&self) -> usize {
        let labelled: BTreeSet<&str> = self.subjects.iter().map(|s| s.id.as_str()).collect();
        self.diagnostics
            .iter()
            .filter(|d| !labelled.contains(d.subject_id.as_str()))
            .count()
    }
}

/// Labels for one subject plus the intermediate results behind them
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectOutcome {
    pub labels: Vec<Label>,
    pub record: MeasurementRecord,
    pub shape: ShapeOutcome,
    /// Recoverable problems with individual inputs; the labels that need
    /// them are left out, the rest are still emitted
    pub issues: Vec<ClassifyError>,
}

/// Drives the classification steps for a sequence of subjects.
///
/// Disabled category sets are still computed when another step depends on
/// them (shapes feed the Curvy override) but are never emitted.
#[derive(Debug, Clone)]
pub struct Classifier {
    enabled: BTreeSet<CategorySet>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            enabled: CategorySet::all().iter().copied().collect(),
        }
    }

    /// Restrict emitted labels to `sets`
    pub fn with_categories(mut self, sets: impl IntoIterator<Item = CategorySet>) -> Self {
        self.enabled = sets.into_iter().collect();
        self
    }

    pub fn is_enabled(&self, set: CategorySet) -> bool {
        self.enabled.contains(&set)
    }

    /// Classify one subject.
    ///
    /// Labels come out in step order: BMI, breast size, cup, hip size, butt
    /// size, height, shapes, body type. An empty label list is a valid result.
    ///
    /// Empty measurements and invalid weight or height are collected in
    /// [`SubjectOutcome::issues`]. Malformed measurements and failed
    /// derivations reject the whole subject.
    pub fn classify_subject(&self, subject: &SubjectRecord) -> ClassifyResult<SubjectOutcome> {
        let mut issues = Vec::new();
        let mut recover = |result: ClassifyResult<Option<f64>>| {
            result.unwrap_or_else(|err| {
                issues.push(err);
                None
            })
        };
        let weight = recover(positive_quantity("weight", subject.weight));
        let height = recover(positive_quantity("height", subject.height_cm));

        let raw = subject.measurements.as_deref().unwrap_or_default();
        let parsed = match measurements::parse(raw) {
            Err(ClassifyError::EmptyMeasurements) => {
                issues.push(ClassifyError::EmptyMeasurements);
                Measurements::absent()
            }
            other => other?,
        };
        let record = MeasurementRecord::derive(raw, parsed)?.with_bmi(weight, height)?;

        let scale = BmiScale::for_ethnicity(subject.ethnicity.as_deref());
        let shape = classify_shape(record.bust, record.waist, record.hips);

        let mut labels = Vec::new();
        let mut emit = |label: Option<Label>| {
            if let Some(label) = label.filter(|l| self.is_enabled(l.set())) {
                labels.push(label);
            }
        };

        emit(bmi_category(record.body_mass_index, scale).map(Label::BodyMassIndex));
        emit(record
            .breast_volume
            .and_then(|v| match_threshold::<BreastSize>(v))
            .map(Label::BreastSize));
        emit(record.cup.map(Label::BreastCup));
        emit(hip_size(record.waist, record.hips).map(Label::HipSize));
        emit(record
            .hips
            .and_then(|h| match_threshold::<ButtSize>(h))
            .map(Label::ButtSize));
        emit(height_type(height, subject.is_female()).map(Label::HeightType));
        for s in shape.shapes() {
            emit(Some(Label::BodyShape(*s)));
        }
        emit(body_type(record.body_mass_index, height, shape.shapes()).map(Label::BodyType));

        Ok(SubjectOutcome {
            labels,
            record,
            shape,
            issues,
        })
    }

    /// Classify subjects in the order given.
    pub fn classify_batch(&self, subjects: &[SubjectRecord]) -> BatchResult {
        let mut result = BatchResult::default();

        for subject in subjects {
            let subject_id = subject.display_id();
            match self.classify_subject(subject) {
                Ok(outcome) => {
                    for issue in &outcome.issues {
                        log_issue(&subject_id, issue);
                        result
                            .diagnostics
                            .push(diagnostic(subject, issue.severity(), issue.to_string()));
                    }
                    match &outcome.shape {
                        ShapeOutcome::Unclassified { bust, waist, hips } => {
                            let message = format!(
                                "no body shape matched {:.1}-{:.1}-{:.1} from '{}'",
                                bust, waist, hips, outcome.record.raw
                            );
                            warn!("{}: {}", subject_id, message);
                            result
                                .diagnostics
                                .push(diagnostic(subject, Severity::Warning, message));
                        }
                        ShapeOutcome::MissingMeasurements => {
                            debug!("{}: not enough measurements for a body shape", subject_id);
                        }
                        ShapeOutcome::Matched(_) => {}
                    }

                    debug!(
                        "{}: {}",
                        subject_id,
                        outcome
                            .labels
                            .iter()
                            .map(Label::display_name)
                            .collect::<Vec<_>>()
                            .join(", ")
                    );
                    result.aggregate.record(&subject.id, &outcome.labels);
                    result.subjects.push(ClassifiedSubject {
                        id: subject.id.clone(),
                        name: subject.name.clone(),
                        labels: outcome.labels,
                    });
                }
                Err(err) => {
                    log_failure(&subject_id, &err);
                    result
                        .diagnostics
                        .push(diagnostic(subject, err.severity(), err.to_string()));
                }
            }
        }

        let summary = result.summary();
        info!(
            "Classification complete: {}/{} subjects labelled, {} warnings, {} errors",
            result.subjects.len(),
            subjects.len(),
            summary.warning,
            summary.error
        );
        result
    }
}

fn log_failure(subject_id: &str, err: &ClassifyError) {
    match err.severity() {
        Severity::Debug => debug!("{}: skipped, {}", subject_id, err),
        Severity::Warning => warn!("{}: skipped, {}", subject_id, err),
        Severity::Error => error!("{}: skipped, {}", subject_id, err),
    }
}

fn log_issue(subject_id: &str, issue: &ClassifyError) {
    match issue.severity() {
        Severity::Debug => debug!("{}: {}", subject_id, issue),
        Severity::Warning => warn!("{}: {}, dependent labels left out", subject_id, issue),
        Severity::Error => error!("{}: {}", subject_id, issue),
    }
}

fn diagnostic(subject: &SubjectRecord, severity: Severity, message: String) -> Diagnostic {
    Diagnostic {
        subject_id: subject.id.clone(),
        subject_name: subject.name.clone(),
        severity,
        message,
    }
}
