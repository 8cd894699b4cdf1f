//! Static category catalog
//!
//! Every label the classifier can emit belongs to one ordered category set
//! (body shape, body type, breast size, ...). Each variant carries an
//! immutable [`Rule`] that the threshold matcher evaluates in declaration
//! order, plus presentation metadata that the tag store uses to create or
//! find its entries. The metadata never influences classification.

mod cups;
mod shapes;
mod sizes;

pub use cups::BreastCup;
pub use shapes::BodyShape;
pub use sizes::{BmiScale, BodyMassIndex, BodyType, ButtSize, BreastSize, HeightType, HipSize};

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Numeric comparison used by threshold rules.
///
/// The comparison value is always on the left: `LessThan` with bound 18
/// holds for `value < 18`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    LessThan,
    LessOrEqual,
    GreaterOrEqual,
}

impl Comparison {
    pub fn holds(self, value: f64, bound: f64) -> bool {
        match self {
            Comparison::LessThan => value < bound,
            Comparison::LessOrEqual => value <= bound,
            Comparison::GreaterOrEqual => value >= bound,
        }
    }
}

/// Rule attached to a category variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// Ordinary numeric comparison against a fixed bound
    Numeric { op: Comparison, bound: f64 },
    /// Literal membership of a text value in a fixed set
    OneOf { allowed: &'static [&'static str] },
    /// Never auto-matched; only reachable through an explicit override
    Manual,
}

impl Rule {
    pub const fn less_than(bound: f64) -> Self {
        Rule::Numeric {
            op: Comparison::LessThan,
            bound,
        }
    }

    pub const fn less_or_equal(bound: f64) -> Self {
        Rule::Numeric {
            op: Comparison::LessOrEqual,
            bound,
        }
    }

    pub const fn greater_or_equal(bound: f64) -> Self {
        Rule::Numeric {
            op: Comparison::GreaterOrEqual,
            bound,
        }
    }

    pub const fn one_of(allowed: &'static [&'static str]) -> Self {
        Rule::OneOf { allowed }
    }

    /// Whether `value` satisfies this rule.
    ///
    /// A numeric rule never matches a text value and vice versa.
    pub fn is_satisfied_by(&self, value: CompareValue<'_>) -> bool {
        match (self, value) {
            (Rule::Numeric { op, bound }, CompareValue::Number(v)) => op.holds(v, *bound),
            (Rule::OneOf { allowed }, CompareValue::Text(s)) => allowed.iter().any(|a| *a == s),
            _ => false,
        }
    }
}

/// Value a rule is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CompareValue<'a> {
    Number(f64),
    Text(&'a str),
}

impl From<f64> for CompareValue<'_> {
    fn from(v: f64) -> Self {
        CompareValue::Number(v)
    }
}

impl<'a> From<&'a str> for CompareValue<'a> {
    fn from(s: &'a str) -> Self {
        CompareValue::Text(s)
    }
}

/// Presentation metadata for one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub aliases: &'static [&'static str],
    pub image: Option<&'static str>,
}

impl VariantInfo {
    pub const fn named(name: &'static str) -> Self {
        Self {
            name,
            description: "",
            aliases: &[],
            image: None,
        }
    }
}

/// An ordered set of category variants.
///
/// `all()` must list variants in declaration order; matching walks that
/// slice front to back and the first satisfied rule wins, so sets that model
/// a monotonic scale list their strictest bound first.
pub trait Category: Copy + Eq + Ord + fmt::Debug + 'static {
    fn all() -> &'static [Self];

    /// Stable machine name, unique within the set ("TopHourglass")
    fn key(&self) -> &'static str;

    fn rule(&self) -> Rule;

    fn info(&self) -> VariantInfo;

    fn label(self) -> Label;

    /// Position within the set
    fn order(&self) -> usize {
        Self::all()
            .iter()
            .position(|v| v == self)
            .unwrap_or(usize::MAX)
    }
}

/// The category sets known to the catalog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CategorySet {
    BodyMassIndex,
    BreastSize,
    BreastCup,
    HipSize,
    ButtSize,
    HeightType,
    BodyShape,
    BodyType,
}

impl CategorySet {
    pub fn all() -> &'static [CategorySet] {
        &[
            CategorySet::BodyMassIndex,
            CategorySet::BreastSize,
            CategorySet::BreastCup,
            CategorySet::HipSize,
            CategorySet::ButtSize,
            CategorySet::HeightType,
            CategorySet::BodyShape,
            CategorySet::BodyType,
        ]
    }

    /// Name used as the first half of alias keys
    pub fn name(&self) -> &'static str {
        match self {
            CategorySet::BodyMassIndex => "BodyMassIndex",
            CategorySet::BreastSize => "BreastSize",
            CategorySet::BreastCup => "BreastCup",
            CategorySet::HipSize => "HipSize",
            CategorySet::ButtSize => "ButtSize",
            CategorySet::HeightType => "HeightType",
            CategorySet::BodyShape => "BodyShape",
            CategorySet::BodyType => "BodyType",
        }
    }

    /// Key used in `bodycalc.toml`
    pub fn config_key(&self) -> &'static str {
        match self {
            CategorySet::BodyMassIndex => "body_mass_index",
            CategorySet::BreastSize => "breast_size",
            CategorySet::BreastCup => "breast_cup",
            CategorySet::HipSize => "hip_size",
            CategorySet::ButtSize => "butt_size",
            CategorySet::HeightType => "height_type",
            CategorySet::BodyShape => "body_shape",
            CategorySet::BodyType => "body_type",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|s| s.name() == name || s.config_key() == name)
    }

    /// Every label of this set, in declaration order
    pub fn labels(&self) -> Vec<Label> {
        fn collect<C: Category>() -> Vec<Label> {
            C::all().iter().map(|v| v.label()).collect()
        }
        match self {
            CategorySet::BodyMassIndex => collect::<BodyMassIndex>(),
            CategorySet::BreastSize => collect::<BreastSize>(),
            CategorySet::BreastCup => collect::<BreastCup>(),
            CategorySet::HipSize => collect::<HipSize>(),
            CategorySet::ButtSize => collect::<ButtSize>(),
            CategorySet::HeightType => collect::<HeightType>(),
            CategorySet::BodyShape => collect::<BodyShape>(),
            CategorySet::BodyType => collect::<BodyType>(),
        }
    }
}

impl fmt::Display for CategorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single emitted label: one variant of one category set.
///
/// Labels order by set (in classification step order), then by variant
/// declaration order. They serialize as their alias key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    BodyMassIndex(BodyMassIndex),
    BreastSize(BreastSize),
    BreastCup(BreastCup),
    HipSize(HipSize),
    ButtSize(ButtSize),
    HeightType(HeightType),
    BodyShape(BodyShape),
    BodyType(BodyType),
}

impl Label {
    pub fn set(&self) -> CategorySet {
        match self {
            Label::BodyMassIndex(_) => CategorySet::BodyMassIndex,
            Label::BreastSize(_) => CategorySet::BreastSize,
            Label::BreastCup(_) => CategorySet::BreastCup,
            Label::HipSize(_) => CategorySet::HipSize,
            Label::ButtSize(_) => CategorySet::ButtSize,
            Label::HeightType(_) => CategorySet::HeightType,
            Label::BodyShape(_) => CategorySet::BodyShape,
            Label::BodyType(_) => CategorySet::BodyType,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Label::BodyMassIndex(v) => v.key(),
            Label::BreastSize(v) => v.key(),
            Label::BreastCup(v) => v.key(),
            Label::HipSize(v) => v.key(),
            Label::ButtSize(v) => v.key(),
            Label::HeightType(v) => v.key(),
            Label::BodyShape(v) => v.key(),
            Label::BodyType(v) => v.key(),
        }
    }

    pub fn info(&self) -> VariantInfo {
        match self {
            Label::BodyMassIndex(v) => v.info(),
            Label::BreastSize(v) => v.info(),
            Label::BreastCup(v) => v.info(),
            Label::HipSize(v) => v.info(),
            Label::ButtSize(v) => v.info(),
            Label::HeightType(v) => v.info(),
            Label::BodyShape(v) => v.info(),
            Label::BodyType(v) => v.info(),
        }
    }

    pub fn display_name(&self) -> &'static str {
        self.info().name
    }

    /// Stable machine key, e.g. `BodyType.Curvy`
    pub fn alias_key(&self) -> String {
        format!("{}.{}", self.set().name(), self.key())
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.alias_key())
    }
}

impl FromStr for Label {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (set_name, key) = s
            .split_once('.')
            .ok_or_else(|| anyhow::anyhow!("'{}' is not an alias key (expected Set.Variant)", s))?;
        let set = CategorySet::from_name(set_name)
            .ok_or_else(|| anyhow::anyhow!("Unknown category set '{}'", set_name))?;
        set.labels()
            .into_iter()
            .find(|l| l.key() == key)
            .ok_or_else(|| anyhow::anyhow!("Unknown variant '{}' in {}", key, set))
    }
}

/// One catalog record as consumed by the tag store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub display_name: String,
    pub description: String,
    pub alias_key: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl CatalogEntry {
    pub fn from_label(label: Label, description_prefix: &str) -> Self {
        let info = label.info();
        Self {
            display_name: info.name.to_string(),
            description: format!("{}{}", description_prefix, info.description),
            alias_key: label.alias_key(),
            aliases: info.aliases.iter().map(|a| a.to_string()).collect(),
            image_url: info.image.map(str::to_string),
        }
    }
}

/// Export catalog entries for the given sets, in set then variant order.
pub fn export_catalog(sets: &[CategorySet], description_prefix: &str) -> Vec<CatalogEntry> {
    let mut sets = sets.to_vec();
    sets.sort();
    sets.dedup();
    sets.iter()
        .flat_map(|s| s.labels())
        .map(|l| CatalogEntry::from_label(l, description_prefix))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rule_type_mismatch_never_matches() {
        let numeric = Rule::less_than(10.0);
        assert!(numeric.is_satisfied_by(CompareValue::Number(5.0)));
        assert!(!numeric.is_satisfied_by(CompareValue::Text("5")));

        let set = Rule::one_of(&["E", "DD"]);
        assert!(set.is_satisfied_by(CompareValue::Text("DD")));
        assert!(!set.is_satisfied_by(CompareValue::Text("dd")));
        assert!(!set.is_satisfied_by(CompareValue::Number(5.0)));

        assert!(!Rule::Manual.is_satisfied_by(CompareValue::Number(0.0)));
        assert!(!Rule::Manual.is_satisfied_by(CompareValue::Text("")));
    }

    #[test]
    fn test_comparison_boundaries() {
        assert!(!Comparison::LessThan.holds(18.0, 18.0));
        assert!(Comparison::LessOrEqual.holds(18.0, 18.0));
        assert!(Comparison::GreaterOrEqual.holds(18.0, 18.0));
    }

    #[test]
    fn test_alias_keys_are_unique() {
        let mut seen = HashSet::new();
        for set in CategorySet::all() {
            for label in set.labels() {
                assert!(seen.insert(label.alias_key()), "duplicate {}", label.alias_key());
            }
        }
    }

    #[test]
    fn test_alias_key_roundtrip() {
        let label = Label::BodyType(BodyType::Curvy);
        assert_eq!(label.alias_key(), "BodyType.Curvy");
        assert_eq!("BodyType.Curvy".parse::<Label>().unwrap(), label);
        assert_eq!(
            "body_shape.TopHourglass".parse::<Label>().unwrap(),
            Label::BodyShape(BodyShape::TopHourglass)
        );
        assert!("BodyType.Gigantic".parse::<Label>().is_err());
        assert!("Curvy".parse::<Label>().is_err());
    }

    #[test]
    fn test_label_serializes_as_alias_key() {
        let json = serde_json::to_string(&Label::BreastCup(BreastCup::E)).unwrap();
        assert_eq!(json, "\"BreastCup.E\"");
    }

    #[test]
    fn test_order_follows_declaration() {
        assert_eq!(BodyType::Petite.order(), 0);
        assert_eq!(BodyType::Ssbbw.order(), BodyType::all().len() - 1);
        assert!(BreastCup::E < BreastCup::F);
        assert!(BreastSize::Tiny < BreastSize::Massive);
    }

    #[test]
    fn test_export_catalog_prefix_and_filter() {
        let entries = export_catalog(&[CategorySet::BodyType], "[Managed]\n");
        assert_eq!(entries.len(), BodyType::all().len());
        assert!(entries.iter().all(|e| e.description.starts_with("[Managed]\n")));
        assert!(entries.iter().all(|e| e.alias_key.starts_with("BodyType.")));
        assert_eq!(entries[0].display_name, "Petite Body");
    }

    #[test]
    fn test_export_catalog_dedups_sets() {
        let once = export_catalog(&[CategorySet::HipSize], "");
        let twice = export_catalog(&[CategorySet::HipSize, CategorySet::HipSize], "");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_shape_entries_carry_images() {
        let entries = export_catalog(&[CategorySet::BodyShape], "");
        assert_eq!(entries.len(), 9);
        assert!(entries.iter().all(|e| e.image_url.is_some()));
        assert!(entries.iter().all(|e| !e.description.is_empty()));
    }
}
