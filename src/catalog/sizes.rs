//! Threshold-driven size scales
//!
//! Bounds are in the unit of the value each set is matched against:
//! BMI for body type and BMI category, centimeters for height, volume
//! points for breast size and inches of hip circumference for butt size.

use super::{Category, Label, Rule, VariantInfo};

/// Mean adult female height used for the height breakpoints (cm)
pub const FEMALE_MEAN_HEIGHT_CM: f64 = 164.7;
/// One standard deviation of adult female height (cm)
pub const FEMALE_HEIGHT_STDDEV_CM: f64 = 7.07;

pub const SHORT_HEIGHT_CM: f64 = FEMALE_MEAN_HEIGHT_CM - FEMALE_HEIGHT_STDDEV_CM;
pub const TALL_HEIGHT_CM: f64 = FEMALE_MEAN_HEIGHT_CM + FEMALE_HEIGHT_STDDEV_CM;

/// Overall body type, matched against breast-mass adjusted BMI.
///
/// Petite and Curvy have no threshold; the descriptor resolver assigns them
/// as overrides of Fit and Average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BodyType {
    Petite,
    Curvy,
    Skinny,
    Fit,
    Average,
    Bbw,
    Ssbbw,
}

impl Category for BodyType {
    fn all() -> &'static [Self] {
        &[
            BodyType::Petite,
            BodyType::Curvy,
            BodyType::Skinny,
            BodyType::Fit,
            BodyType::Average,
            BodyType::Bbw,
            BodyType::Ssbbw,
        ]
    }

    fn key(&self) -> &'static str {
        match self {
            BodyType::Petite => "Petite",
            BodyType::Curvy => "Curvy",
            BodyType::Skinny => "Skinny",
            BodyType::Fit => "Fit",
            BodyType::Average => "Average",
            BodyType::Bbw => "BBW",
            BodyType::Ssbbw => "SSBBW",
        }
    }

    fn rule(&self) -> Rule {
        match self {
            BodyType::Petite | BodyType::Curvy => Rule::Manual,
            BodyType::Skinny => Rule::less_than(18.0),
            BodyType::Fit => Rule::less_than(23.0),
            BodyType::Average => Rule::less_than(29.0),
            BodyType::Bbw => Rule::less_than(55.0),
            BodyType::Ssbbw => Rule::greater_or_equal(55.0),
        }
    }

    fn info(&self) -> VariantInfo {
        match self {
            BodyType::Petite => VariantInfo {
                description: "Fit body type at or below one standard deviation under mean female height.",
                ..VariantInfo::named("Petite Body")
            },
            BodyType::Curvy => VariantInfo {
                description: "Average body type with an hourglass figure.",
                ..VariantInfo::named("Curvy Body")
            },
            BodyType::Skinny => VariantInfo::named("Skinny Body"),
            BodyType::Fit => VariantInfo::named("Fit Body"),
            BodyType::Average => VariantInfo::named("Average Body"),
            BodyType::Bbw => VariantInfo::named("BBW Body"),
            BodyType::Ssbbw => VariantInfo::named("SSBBW Body"),
        }
    }

    fn label(self) -> Label {
        Label::BodyType(self)
    }
}

/// Height band, matched against height in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeightType {
    Short,
    Average,
    Tall,
}

impl Category for HeightType {
    fn all() -> &'static [Self] {
        &[HeightType::Short, HeightType::Average, HeightType::Tall]
    }

    fn key(&self) -> &'static str {
        match self {
            HeightType::Short => "Short",
            HeightType::Average => "Average",
            HeightType::Tall => "Tall",
        }
    }

    fn rule(&self) -> Rule {
        match self {
            HeightType::Short => Rule::less_or_equal(SHORT_HEIGHT_CM),
            HeightType::Average => Rule::Manual,
            HeightType::Tall => Rule::greater_or_equal(TALL_HEIGHT_CM),
        }
    }

    fn info(&self) -> VariantInfo {
        match self {
            HeightType::Short => VariantInfo::named("Short"),
            HeightType::Average => VariantInfo::named("Average Height"),
            HeightType::Tall => VariantInfo::named("Tall"),
        }
    }

    fn label(self) -> Label {
        Label::HeightType(self)
    }
}

/// Breast size, matched against the breast-volume proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BreastSize {
    Tiny,
    Small,
    Medium,
    Large,
    Huge,
    Massive,
}

impl Category for BreastSize {
    fn all() -> &'static [Self] {
        &[
            BreastSize::Tiny,
            BreastSize::Small,
            BreastSize::Medium,
            BreastSize::Large,
            BreastSize::Huge,
            BreastSize::Massive,
        ]
    }

    fn key(&self) -> &'static str {
        size_key(self.order())
    }

    fn rule(&self) -> Rule {
        match self {
            BreastSize::Tiny => Rule::less_than(16.0),
            BreastSize::Small => Rule::less_than(19.0),
            BreastSize::Medium => Rule::less_than(23.0),
            BreastSize::Large => Rule::less_than(27.0),
            BreastSize::Huge => Rule::less_than(31.0),
            BreastSize::Massive => Rule::greater_or_equal(31.0),
        }
    }

    fn info(&self) -> VariantInfo {
        match self {
            BreastSize::Tiny => VariantInfo::named("Tiny Breasts"),
            BreastSize::Small => VariantInfo::named("Small Breasts"),
            BreastSize::Medium => VariantInfo::named("Medium Breasts"),
            BreastSize::Large => VariantInfo::named("Large Breasts"),
            BreastSize::Huge => VariantInfo::named("Huge Breasts"),
            BreastSize::Massive => VariantInfo::named("Massive Breasts"),
        }
    }

    fn label(self) -> Label {
        Label::BreastSize(self)
    }
}

/// Butt size, matched against hip circumference in inches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ButtSize {
    Tiny,
    Small,
    Medium,
    Large,
    Huge,
    Massive,
}

impl Category for ButtSize {
    fn all() -> &'static [Self] {
        &[
            ButtSize::Tiny,
            ButtSize::Small,
            ButtSize::Medium,
            ButtSize::Large,
            ButtSize::Huge,
            ButtSize::Massive,
        ]
    }

    fn key(&self) -> &'static str {
        size_key(self.order())
    }

    fn rule(&self) -> Rule {
        match self {
            ButtSize::Tiny => Rule::less_than(28.0),
            ButtSize::Small => Rule::less_than(32.0),
            ButtSize::Medium => Rule::less_than(40.0),
            ButtSize::Large => Rule::less_than(44.0),
            ButtSize::Huge => Rule::less_than(48.0),
            ButtSize::Massive => Rule::greater_or_equal(48.0),
        }
    }

    fn info(&self) -> VariantInfo {
        match self {
            ButtSize::Tiny => VariantInfo::named("Tiny Ass"),
            ButtSize::Small => VariantInfo::named("Small Ass"),
            ButtSize::Medium => VariantInfo::named("Medium Ass"),
            ButtSize::Large => VariantInfo::named("Large Ass"),
            ButtSize::Huge => VariantInfo::named("Huge Ass"),
            ButtSize::Massive => VariantInfo::named("Massive Ass"),
        }
    }

    fn label(self) -> Label {
        Label::ButtSize(self)
    }
}

fn size_key(order: usize) -> &'static str {
    ["Tiny", "Small", "Medium", "Large", "Huge", "Massive"]
        .get(order)
        .copied()
        .unwrap_or("Unknown")
}

/// Hip size from the waist-to-hip ratio.
///
/// Not threshold driven; see [`crate::descriptor::hip_size`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HipSize {
    Slim,
    Medium,
    Wide,
}

impl Category for HipSize {
    fn all() -> &'static [Self] {
        &[HipSize::Slim, HipSize::Medium, HipSize::Wide]
    }

    fn key(&self) -> &'static str {
        match self {
            HipSize::Slim => "Slim",
            HipSize::Medium => "Medium",
            HipSize::Wide => "Wide",
        }
    }

    fn rule(&self) -> Rule {
        Rule::Manual
    }

    fn info(&self) -> VariantInfo {
        match self {
            HipSize::Slim => VariantInfo {
                description: "Waist-to-hip ratio of 0.64 or less.",
                ..VariantInfo::named("Slim Hips")
            },
            HipSize::Medium => VariantInfo {
                description: "Waist-to-hip ratio above 0.64 and up to 0.8.",
                ..VariantInfo::named("Medium Hips")
            },
            HipSize::Wide => VariantInfo {
                description: "Waist-to-hip ratio above 0.8.",
                ..VariantInfo::named("Wide Hips")
            },
        }
    }

    fn label(self) -> Label {
        Label::HipSize(self)
    }
}

/// Breakpoint table used for the BMI category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiScale {
    General,
    /// Lower cut-offs recommended for Asian populations
    Asian,
}

impl BmiScale {
    pub fn for_ethnicity(ethnicity: Option<&str>) -> Self {
        match ethnicity {
            Some(e) if e.trim().eq_ignore_ascii_case("asian") => BmiScale::Asian,
            _ => BmiScale::General,
        }
    }
}

/// BMI category, matched against breast-mass adjusted BMI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BodyMassIndex {
    SeverelyUnderweight,
    Underweight,
    Healthy,
    Overweight,
    Obese1,
    Obese2,
    SeverelyObese,
}

impl BodyMassIndex {
    pub fn rule_for(&self, scale: BmiScale) -> Rule {
        let (general, asian) = match self {
            BodyMassIndex::SeverelyUnderweight => (16.5, 16.5),
            BodyMassIndex::Underweight => (18.5, 18.5),
            BodyMassIndex::Healthy => (25.0, 23.0),
            BodyMassIndex::Overweight => (30.0, 25.0),
            BodyMassIndex::Obese1 => (35.0, 30.0),
            BodyMassIndex::Obese2 => (40.0, 35.0),
            BodyMassIndex::SeverelyObese => {
                return match scale {
                    BmiScale::General => Rule::greater_or_equal(40.0),
                    BmiScale::Asian => Rule::greater_or_equal(35.0),
                };
            }
        };
        match scale {
            BmiScale::General => Rule::less_than(general),
            BmiScale::Asian => Rule::less_than(asian),
        }
    }
}

impl Category for BodyMassIndex {
    fn all() -> &'static [Self] {
        &[
            BodyMassIndex::SeverelyUnderweight,
            BodyMassIndex::Underweight,
            BodyMassIndex::Healthy,
            BodyMassIndex::Overweight,
            BodyMassIndex::Obese1,
            BodyMassIndex::Obese2,
            BodyMassIndex::SeverelyObese,
        ]
    }

    fn key(&self) -> &'static str {
        match self {
            BodyMassIndex::SeverelyUnderweight => "SeverelyUnderweight",
            BodyMassIndex::Underweight => "Underweight",
            BodyMassIndex::Healthy => "Healthy",
            BodyMassIndex::Overweight => "Overweight",
            BodyMassIndex::Obese1 => "Obese1",
            BodyMassIndex::Obese2 => "Obese2",
            BodyMassIndex::SeverelyObese => "SeverelyObese",
        }
    }

    fn rule(&self) -> Rule {
        self.rule_for(BmiScale::General)
    }

    fn info(&self) -> VariantInfo {
        match self {
            BodyMassIndex::SeverelyUnderweight => VariantInfo::named("BMI: Severely Underweight"),
            BodyMassIndex::Underweight => VariantInfo::named("BMI: Underweight"),
            BodyMassIndex::Healthy => VariantInfo::named("BMI: Healthy"),
            BodyMassIndex::Overweight => VariantInfo::named("BMI: Overweight"),
            BodyMassIndex::Obese1 => VariantInfo {
                aliases: &["BMI: Obese Class I"],
                ..VariantInfo::named("BMI: Obese 1")
            },
            BodyMassIndex::Obese2 => VariantInfo {
                aliases: &["BMI: Obese Class II"],
                ..VariantInfo::named("BMI: Obese 2")
            },
            BodyMassIndex::SeverelyObese => VariantInfo {
                aliases: &["BMI: Obese Class III"],
                ..VariantInfo::named("BMI: Severely Obese")
            },
        }
    }

    fn label(self) -> Label {
        Label::BodyMassIndex(self)
    }
}
