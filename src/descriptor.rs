//! Descriptor resolver
//!
//! Single-valued descriptors that combine a threshold match with override
//! rules: BMI category, height band, body type and hip size.

use crate::catalog::{BmiScale, BodyMassIndex, BodyShape, BodyType, Category, HeightType, HipSize};
use crate::matcher::{first_match, match_threshold, within_threshold};

/// Heights strictly inside this band are always Average, regardless of the
/// standard-deviation breakpoints.
pub const AVERAGE_HEIGHT_BAND_CM: (f64, f64) = (160.0, 180.0);

const WIDE_HIP_RATIO: f64 = 0.8;
const MEDIUM_HIP_RATIO: f64 = 0.64;

/// BMI category on the given breakpoint scale.
pub fn bmi_category(bmi: Option<f64>, scale: BmiScale) -> Option<BodyMassIndex> {
    let bmi = bmi?;
    first_match(BodyMassIndex::all(), bmi.into(), |v| v.rule_for(scale))
}

/// Height band, only assigned to female subjects.
///
/// Heights in the (160, 180) band are forced to Average, so a subject at
/// 158 cm is unlabelled while one at 175 cm is Average, not Tall.
pub fn height_type(height_cm: Option<f64>, is_female: bool) -> Option<HeightType> {
    if !is_female {
        return None;
    }
    let height = height_cm?;
    let (low, high) = AVERAGE_HEIGHT_BAND_CM;
    if height > low && height < high {
        return Some(HeightType::Average);
    }
    match_threshold::<HeightType>(height)
}

/// Body type from adjusted BMI, with the Petite and Curvy overrides.
///
/// Fit becomes Petite for short subjects. Average becomes Curvy when any
/// hourglass shape was assigned.
pub fn body_type(bmi: Option<f64>, height_cm: Option<f64>, shapes: &[BodyShape]) -> Option<BodyType> {
    let matched = match_threshold::<BodyType>(bmi?)?;
    let resolved = match matched {
        BodyType::Fit if height_cm.is_some_and(|h| within_threshold(HeightType::Short, h)) => {
            BodyType::Petite
        }
        BodyType::Average if shapes.iter().any(BodyShape::is_curvy) => BodyType::Curvy,
        other => other,
    };
    Some(resolved)
}

/// Hip size from the waist-to-hip ratio.
pub fn hip_size(waist: Option<f64>, hips: Option<f64>) -> Option<HipSize> {
    let ratio = waist? / hips?;
    if !ratio.is_finite() {
        return None;
    }
    Some(if ratio > WIDE_HIP_RATIO {
        HipSize::Wide
    } else if ratio > MEDIUM_HIP_RATIO {
        HipSize::Medium
    } else {
        HipSize::Slim
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_general_scale() {
        let general = |bmi| bmi_category(Some(bmi), BmiScale::General);
        assert_eq!(general(16.0), Some(BodyMassIndex::SeverelyUnderweight));
        assert_eq!(general(18.0), Some(BodyMassIndex::Underweight));
        assert_eq!(general(24.0), Some(BodyMassIndex::Healthy));
        assert_eq!(general(25.0), Some(BodyMassIndex::Overweight));
        assert_eq!(general(34.9), Some(BodyMassIndex::Obese1));
        assert_eq!(general(39.0), Some(BodyMassIndex::Obese2));
        assert_eq!(general(40.0), Some(BodyMassIndex::SeverelyObese));
        assert_eq!(bmi_category(None, BmiScale::General), None);
    }

    #[test]
    fn test_bmi_asian_scale_is_stricter() {
        assert_eq!(
            bmi_category(Some(24.0), BmiScale::Asian),
            Some(BodyMassIndex::Overweight)
        );
        assert_eq!(
            bmi_category(Some(36.0), BmiScale::Asian),
            Some(BodyMassIndex::SeverelyObese)
        );
        assert_eq!(
            bmi_category(Some(36.0), BmiScale::General),
            Some(BodyMassIndex::Obese2)
        );
    }

    #[test]
    fn test_height_only_for_women() {
        assert_eq!(height_type(Some(150.0), false), None);
        assert_eq!(height_type(None, true), None);
        assert_eq!(height_type(Some(150.0), true), Some(HeightType::Short));
        assert_eq!(height_type(Some(185.0), true), Some(HeightType::Tall));
    }

    #[test]
    fn test_height_average_band_quirk() {
        assert_eq!(height_type(Some(165.0), true), Some(HeightType::Average));
        // above the Tall breakpoint but inside the forced band
        assert_eq!(height_type(Some(175.0), true), Some(HeightType::Average));
        // above Short but below the forced band: no label
        assert_eq!(height_type(Some(158.5), true), None);
        // band edges are exclusive
        assert_eq!(height_type(Some(160.0), true), None);
        assert_eq!(height_type(Some(180.0), true), Some(HeightType::Tall));
    }

    #[test]
    fn test_body_type_thresholds() {
        assert_eq!(body_type(Some(17.0), None, &[]), Some(BodyType::Skinny));
        assert_eq!(body_type(Some(20.0), None, &[]), Some(BodyType::Fit));
        assert_eq!(body_type(Some(26.0), None, &[]), Some(BodyType::Average));
        assert_eq!(body_type(Some(40.0), None, &[]), Some(BodyType::Bbw));
        assert_eq!(body_type(Some(60.0), None, &[]), Some(BodyType::Ssbbw));
        assert_eq!(body_type(None, Some(150.0), &[BodyShape::Hourglass]), None);
    }

    #[test]
    fn test_petite_override() {
        assert_eq!(body_type(Some(20.0), Some(155.0), &[]), Some(BodyType::Petite));
        assert_eq!(body_type(Some(20.0), Some(165.0), &[]), Some(BodyType::Fit));
        // only Fit is overridden
        assert_eq!(body_type(Some(26.0), Some(150.0), &[]), Some(BodyType::Average));
    }

    #[test]
    fn test_curvy_override() {
        for shape in BodyShape::CURVY {
            assert_eq!(
                body_type(Some(26.0), None, &[*shape]),
                Some(BodyType::Curvy)
            );
        }
        assert_eq!(
            body_type(Some(26.0), None, &[BodyShape::Spoon, BodyShape::Triangle]),
            Some(BodyType::Average)
        );
        // only Average is overridden
        assert_eq!(
            body_type(Some(20.0), None, &[BodyShape::Hourglass]),
            Some(BodyType::Fit)
        );
    }

    #[test]
    fn test_hip_size() {
        assert_eq!(hip_size(Some(26.0), Some(36.0)), Some(HipSize::Medium));
        assert_eq!(hip_size(Some(30.0), Some(36.0)), Some(HipSize::Wide));
        assert_eq!(hip_size(Some(22.0), Some(36.0)), Some(HipSize::Slim));
        assert_eq!(hip_size(Some(32.0), Some(40.0)), Some(HipSize::Medium));
        assert_eq!(hip_size(None, Some(36.0)), None);
        assert_eq!(hip_size(Some(26.0), None), None);
    }
}
