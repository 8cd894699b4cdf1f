//! Measurement notation parser
//!
//! Recognizes three notations, tried in this order:
//!
//! 1. Full measurements, band + cup, waist, hips: `32D-28-34`
//! 2. Fashion measurements, bust, waist, hips: `36-28-34`
//! 3. Bra size only, optionally with a parenthesized alternate: `32D`, `32D (81D)`
//!
//! Whitespace anywhere in the input is ignored. Triples whose populated
//! fields all exceed 50 are taken to be centimeters and converted to inches.

use crate::error::{ClassifyError, ClassifyResult};
use regex::{Captures, Regex};
use std::fmt;
use std::sync::OnceLock;
use tracing::debug;

pub const CM_PER_INCH: f64 = 2.54;

/// Any triple with every value above this is assumed to be metric
pub const METRIC_THRESHOLD: f64 = 50.0;

static BAND_CUP_WAIST_HIPS: OnceLock<Regex> = OnceLock::new();
static BUST_WAIST_HIPS: OnceLock<Regex> = OnceLock::new();
static BAND_CUP: OnceLock<Regex> = OnceLock::new();

fn band_cup_waist_hips() -> &'static Regex {
    BAND_CUP_WAIST_HIPS.get_or_init(|| {
        Regex::new(r"^(?P<band>[0-9]+)(?P<cup>[a-zA-Z]+)-(?P<waist>[0-9]+)-(?P<hips>[0-9]+)$")
            .expect("valid regex")
    })
}

fn bust_waist_hips() -> &'static Regex {
    BUST_WAIST_HIPS.get_or_init(|| {
        Regex::new(r"^(?P<bust>[0-9]+)-(?P<waist>[0-9]+)-(?P<hips>[0-9]+)$").expect("valid regex")
    })
}

fn band_cup() -> &'static Regex {
    // The parenthesized group is the same size in another unit and is ignored
    BAND_CUP.get_or_init(|| {
        Regex::new(r"^(?P<band>[0-9]+)(?P<cup>[a-zA-Z]+)(?:\([0-9]+[a-zA-Z]+\))?$").expect("valid regex")
    })
}

/// Which notation a measurement string was written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    BandCupWaistHips,
    BustWaistHips,
    BandCup,
}

/// Primary quantities recovered from a measurement string.
///
/// Lengths are in inches after parsing. Every populated number is finite
/// and strictly positive; absent fields are `None`, never zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Measurements {
    /// `None` when nothing was recorded
    pub notation: Option<Notation>,
    pub band: Option<f64>,
    /// Uppercased cup letters as written ("DD"), not yet validated
    pub cup: Option<String>,
    pub bust: Option<f64>,
    pub waist: Option<f64>,
    pub hips: Option<f64>,
    pub converted_from_metric: bool,
}

impl Measurements {
    fn empty(notation: Notation) -> Self {
        Self {
            notation: Some(notation),
            ..Self::default()
        }
    }

    /// Record for a subject with no measurements at all
    pub fn absent() -> Self {
        Self::default()
    }

    /// Convert centimeter triples to inches.
    ///
    /// Applies to band/waist/hips first, then bust/waist/hips. Only runs once
    /// per record no matter how often it is called.
    pub fn normalize_units(&mut self) {
        if self.converted_from_metric {
            return;
        }
        let metric = |v: Option<f64>| v.is_some_and(|x| x > METRIC_THRESHOLD);

        if metric(self.band) && metric(self.waist) && metric(self.hips) {
            self.band = self.band.map(to_inches);
        } else if metric(self.bust) && metric(self.waist) && metric(self.hips) {
            self.bust = self.bust.map(to_inches);
        } else {
            return;
        }
        self.waist = self.waist.map(to_inches);
        self.hips = self.hips.map(to_inches);
        self.converted_from_metric = true;
    }
}

fn to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

impl fmt::Display for Measurements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.band, &self.cup, self.bust) {
            (Some(band), Some(cup), _) => write!(f, "{:.0}{}", band, cup)?,
            (_, _, Some(bust)) => write!(f, "{:.0}", bust)?,
            _ => {}
        }
        if let (Some(waist), Some(hips)) = (self.waist, self.hips) {
            write!(f, "-{:.0}-{:.0}", waist, hips)?;
        }
        Ok(())
    }
}

/// Parse a raw measurement string.
///
/// Empty input is [`ClassifyError::EmptyMeasurements`]; anything that fits
/// none of the notations is [`ClassifyError::UnrecognizedMeasurements`].
pub fn parse(raw: &str) -> ClassifyResult<Measurements> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(ClassifyError::EmptyMeasurements);
    }

    let mut parsed = if let Some(caps) = band_cup_waist_hips().captures(&compact) {
        let mut m = Measurements::empty(Notation::BandCupWaistHips);
        m.band = number(&caps, "band", raw)?;
        m.cup = cup_letters(&caps);
        m.waist = number(&caps, "waist", raw)?;
        m.hips = number(&caps, "hips", raw)?;
        m
    } else if let Some(caps) = bust_waist_hips().captures(&compact) {
        let mut m = Measurements::empty(Notation::BustWaistHips);
        m.bust = number(&caps, "bust", raw)?;
        m.waist = number(&caps, "waist", raw)?;
        m.hips = number(&caps, "hips", raw)?;
        m
    } else if let Some(caps) = band_cup().captures(&compact) {
        let mut m = Measurements::empty(Notation::BandCup);
        m.band = number(&caps, "band", raw)?;
        m.cup = cup_letters(&caps);
        m
    } else {
        return Err(ClassifyError::UnrecognizedMeasurements(raw.to_string()));
    };

    parsed.normalize_units();
    if parsed.converted_from_metric {
        debug!("converted measurements from metric {} -> {}", compact, parsed);
    }
    Ok(parsed)
}

fn number(caps: &Captures<'_>, field: &'static str, raw: &str) -> ClassifyResult<Option<f64>> {
    let Some(m) = caps.name(field) else {
        return Ok(None);
    };
    match m.as_str().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(Some(v)),
        _ => Err(ClassifyError::NonPositiveMeasurement {
            field,
            raw: raw.to_string(),
        }),
    }
}

fn cup_letters(caps: &Captures<'_>) -> Option<String> {
    caps.name("cup").map(|m| m.as_str().to_uppercase())
}
