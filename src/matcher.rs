//! Threshold matcher
//!
//! Walks an ordered category set and returns the first variant whose rule is
//! satisfied. The matcher never looks for the tightest bound: a set whose
//! rules are declared out of order will happily return a looser match, so
//! catalog sets list their strictest bounds first.

use crate::catalog::{Category, CompareValue, Rule};

/// First variant in `variants` whose rule (as given by `rule_of`) holds for `value`.
///
/// Returns `None` when nothing matches; that is a valid outcome, not an error.
pub fn first_match<V, F>(variants: &[V], value: CompareValue<'_>, rule_of: F) -> Option<V>
where
    V: Copy,
    F: Fn(&V) -> Rule,
{
    variants
        .iter()
        .find(|v| rule_of(v).is_satisfied_by(value))
        .copied()
}

/// Match `value` against a category set using each variant's own rule.
pub fn match_threshold<'a, C: Category>(value: impl Into<CompareValue<'a>>) -> Option<C> {
    first_match(C::all(), value.into(), C::rule)
}

/// Whether a single variant's rule holds for `value`.
///
/// Manual variants never hold.
pub fn within_threshold<'a, C: Category>(variant: C, value: impl Into<CompareValue<'a>>) -> bool {
    variant.rule().is_satisfied_by(value.into())
}
