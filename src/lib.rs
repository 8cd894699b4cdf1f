//! bodycalc - body measurement classification
//!
//! Parses loosely formatted measurement notations ("32D-28-34", "36-28-34",
//! "32D (81D)"), derives bust, breast volume and breast-mass adjusted BMI, and
//! matches the results against ordered category tables to produce labels
//! such as `Figure: Hourglass`, `Curvy Body` or `Medium Breasts`.
//!
//! The core is pure: no file, network or storage access happens outside of
//! [`config`], [`reporters`] and the binary's CLI layer.

pub mod catalog;
pub mod classify;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod matcher;
pub mod measurements;
pub mod metrics;
pub mod models;
pub mod reporters;
pub mod shape;

pub use catalog::{CatalogEntry, CategorySet, Label};
pub use classify::{BatchResult, Classifier, LabelAggregate};
pub use error::ClassifyError;
pub use models::{ClassifiedSubject, Diagnostic, Severity, SubjectRecord};
