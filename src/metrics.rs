//! Derived metrics
//!
//! Everything computed from parsed measurements plus weight and height:
//! bust-band difference, bust estimate, breast-volume proxy, approximate
//! breast mass and the breast-mass adjusted BMI.

use crate::catalog::BreastCup;
use crate::error::{ClassifyError, ClassifyResult};
use crate::matcher::match_threshold;
use crate::measurements::Measurements;
use tracing::debug;

const LB_TO_KG: f64 = 0.453;

/// Adjusted BMI values below this are treated as missing data
pub const MIN_PLAUSIBLE_BMI: f64 = 1.0;

/// Index of a cup letter in the cup equivalence scale.
///
/// Letters must already be uppercase. "E" and "DD" both give 5.
pub fn bust_band_difference(cup: &str) -> ClassifyResult<usize> {
    recognize_cup(cup).map(|c| c.bust_band_difference())
}

pub fn recognize_cup(cup: &str) -> ClassifyResult<BreastCup> {
    match_threshold::<BreastCup>(cup).ok_or_else(|| ClassifyError::UnrecognizedCup(cup.to_string()))
}

/// Approximate weight of both breasts in kilograms.
///
/// Third-degree polynomial trendline over published weight-per-cup figures,
/// in pounds, evaluated at `difference - 1`. Unknown difference weighs 0.
pub fn approximate_breast_mass_kg(bust_band_difference: Option<usize>) -> f64 {
    let Some(diff) = bust_band_difference else {
        return 0.0;
    };
    let d = diff as f64 - 1.0;
    let weight_lb = 0.765 + 0.415 * d + -0.0168 * d.powi(2) + 0.00247 * d.powi(3);
    weight_lb * LB_TO_KG
}

/// BMI with the estimated breast mass removed from body weight.
///
/// `None` when weight or height is missing, or when the result falls below
/// [`MIN_PLAUSIBLE_BMI`].
pub fn adjusted_bmi(weight_kg: Option<f64>, height_cm: Option<f64>, breast_mass_kg: f64) -> Option<f64> {
    let (weight, height) = (weight_kg?, height_cm?);
    let height_m = height / 100.0;
    let bmi = (weight - breast_mass_kg) / height_m.powi(2);
    (bmi >= MIN_PLAUSIBLE_BMI).then_some(bmi)
}

/// Parsed measurements together with everything derived from them.
///
/// Built fresh for each subject and discarded once its labels are emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementRecord {
    pub raw: String,
    pub band: Option<f64>,
    pub cup: Option<BreastCup>,
    /// Cup letters as written, uppercased
    pub cup_letters: Option<String>,
    pub bust: Option<f64>,
    pub waist: Option<f64>,
    pub hips: Option<f64>,
    pub bust_band_difference: Option<usize>,
    pub breast_volume: Option<f64>,
    pub body_mass_index: Option<f64>,
}

impl MeasurementRecord {
    /// Derive bust, cup and breast volume from parsed measurements.
    ///
    /// A bust parsed directly from fashion notation is kept as-is; otherwise
    /// it is estimated as band + bust-band difference.
    pub fn derive(raw: &str, parsed: Measurements) -> ClassifyResult<Self> {
        let mut record = Self {
            raw: raw.to_string(),
            band: parsed.band,
            cup: None,
            cup_letters: parsed.cup,
            bust: parsed.bust,
            waist: parsed.waist,
            hips: parsed.hips,
            bust_band_difference: None,
            breast_volume: None,
            body_mass_index: None,
        };

        if let (Some(band), Some(letters)) = (record.band, record.cup_letters.as_deref()) {
            let cup = recognize_cup(letters)?;
            let diff = cup.bust_band_difference();
            let volume = band / 2.0 + diff as f64;
            debug!(
                "Bra size {:.0}{} converted to {} + {} = {} volume points",
                band,
                letters,
                band / 2.0,
                diff,
                volume
            );
            record.cup = Some(cup);
            record.bust_band_difference = Some(diff);
            record.bust = Some(finite("bust", band + diff as f64)?);
            record.breast_volume = Some(finite("breast volume", volume)?);
        }
        Ok(record)
    }

    /// Compute and store the adjusted BMI.
    ///
    /// Expects weight and height already checked with [`positive_quantity`].
    pub fn with_bmi(mut self, weight_kg: Option<f64>, height_cm: Option<f64>) -> ClassifyResult<Self> {
        let breast_mass = approximate_breast_mass_kg(self.bust_band_difference);
        self.body_mass_index = match adjusted_bmi(weight_kg, height_cm, breast_mass) {
            Some(bmi) => Some(finite("bmi", bmi)?),
            None => None,
        };
        Ok(self)
    }
}

/// A weight or height that is present must be finite and positive.
pub fn positive_quantity(field: &'static str, value: Option<f64>) -> ClassifyResult<Option<f64>> {
    match value {
        Some(v) if !(v.is_finite() && v > 0.0) => Err(ClassifyError::InvalidQuantity { field, value: v }),
        other => Ok(other),
    }
}

fn finite(quantity: &'static str, value: f64) -> ClassifyResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ClassifyError::NonFinite { quantity })
    }
}
