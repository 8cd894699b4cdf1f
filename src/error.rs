//! Errors raised while classifying a single subject
//!
//! None of these abort a batch. Each maps to a [`Severity`] that decides
//! how loudly the orchestrator reports it.

use crate::models::Severity;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifyError {
    #[error("no measurements recorded")]
    EmptyMeasurements,

    #[error("could not parse measurements: '{0}'")]
    UnrecognizedMeasurements(String),

    #[error("{field} must be a positive number in '{raw}'")]
    NonPositiveMeasurement { field: &'static str, raw: String },

    #[error("could not identify cup size '{0}'")]
    UnrecognizedCup(String),

    #[error("invalid {field}: {value}")]
    InvalidQuantity { field: &'static str, value: f64 },

    #[error("{quantity} is not a finite number")]
    NonFinite { quantity: &'static str },
}

impl ClassifyError {
    pub fn severity(&self) -> Severity {
        match self {
            ClassifyError::EmptyMeasurements => Severity::Debug,
            ClassifyError::UnrecognizedMeasurements(_)
            | ClassifyError::NonPositiveMeasurement { .. }
            | ClassifyError::UnrecognizedCup(_)
            | ClassifyError::InvalidQuantity { .. } => Severity::Warning,
            ClassifyError::NonFinite { .. } => Severity::Error,
        }
    }
}

pub type ClassifyResult<T> = Result<T, ClassifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_mapping() {
        assert_eq!(ClassifyError::EmptyMeasurements.severity(), Severity::Debug);
        assert_eq!(
            ClassifyError::UnrecognizedMeasurements("garbage".into()).severity(),
            Severity::Warning
        );
        assert_eq!(
            ClassifyError::UnrecognizedCup("Z".into()).severity(),
            Severity::Warning
        );
        assert_eq!(
            ClassifyError::NonFinite { quantity: "bmi" }.severity(),
            Severity::Error
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ClassifyError::UnrecognizedMeasurements("abc".into()).to_string(),
            "could not parse measurements: 'abc'"
        );
        assert_eq!(
            ClassifyError::NonPositiveMeasurement {
                field: "waist",
                raw: "34D-0-36".into()
            }
            .to_string(),
            "waist must be a positive number in '34D-0-36'"
        );
    }
}
