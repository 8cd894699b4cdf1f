//! Body shape classifier
//!
//! Nine independent geometric rules over bust, waist and hips. The rules
//! overlap on purpose, so a subject can carry several shapes at once. The
//! breakpoints are empirical and must not be "tidied up".

use crate::catalog::{BodyShape, Category};

/// Differences and ratio every shape rule is written against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proportions {
    pub bust_hips: f64,
    pub hips_bust: f64,
    pub bust_waist: f64,
    pub hips_waist: f64,
    pub hips_to_waist: f64,
}

impl Proportions {
    pub fn new(bust: f64, waist: f64, hips: f64) -> Self {
        Self {
            bust_hips: bust - hips,
            hips_bust: hips - bust,
            bust_waist: bust - waist,
            hips_waist: hips - waist,
            hips_to_waist: hips / waist,
        }
    }

    /// Shapes whose rule holds, in catalog order.
    pub fn shapes(&self) -> Vec<BodyShape> {
        BodyShape::all()
            .iter()
            .copied()
            .filter(|shape| self.fits(*shape))
            .collect()
    }

    pub fn fits(&self, shape: BodyShape) -> bool {
        let Self {
            bust_hips: bh,
            hips_bust: hb,
            bust_waist: bw,
            hips_waist: hw,
            hips_to_waist: ratio,
        } = *self;

        match shape {
            BodyShape::Hourglass => bh <= 1.0 && hb < 3.6 && (bw >= 9.0 || hw >= 10.0),
            BodyShape::BottomHourglass => (3.6..10.0).contains(&hb) && hw >= 9.0 && ratio < 1.193,
            BodyShape::TopHourglass => bh > 1.0 && bh < 10.0 && bw >= 9.0,
            BodyShape::Spoon => hb > 2.0 && hw >= 7.0 && ratio > 1.193,
            BodyShape::Triangle => (hb >= 3.6 && (0.0..9.0).contains(&hw)) || (bw < 0.0 && hw >= 0.0),
            BodyShape::InvertedTriangle => bh >= 3.6 && bw < 9.0,
            BodyShape::Rectangle => {
                hb < 3.6 && bh < 3.6 && (0.0..9.0).contains(&bw) && (0.0..10.0).contains(&hw)
            }
            BodyShape::Diamond => hw < 0.0 && bw < 0.0,
            BodyShape::Oval => hw < 0.0 && bw >= 0.0,
        }
    }
}

/// What the shape classifier concluded for one subject
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeOutcome {
    /// Bust, waist or hips not available
    MissingMeasurements,
    /// All three present, but no rule fired
    Unclassified { bust: f64, waist: f64, hips: f64 },
    Matched(Vec<BodyShape>),
}

impl ShapeOutcome {
    pub fn shapes(&self) -> &[BodyShape] {
        match self {
            ShapeOutcome::Matched(shapes) => shapes,
            _ => &[],
        }
    }
}

pub fn classify_shape(bust: Option<f64>, waist: Option<f64>, hips: Option<f64>) -> ShapeOutcome {
    let (Some(bust), Some(waist), Some(hips)) = (bust, waist, hips) else {
        return ShapeOutcome::MissingMeasurements;
    };
    let shapes = Proportions::new(bust, waist, hips).shapes();
    if shapes.is_empty() {
        ShapeOutcome::Unclassified { bust, waist, hips }
    } else {
        ShapeOutcome::Matched(shapes)
    }
}
