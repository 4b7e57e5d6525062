use std::fmt;
use std::hash::Hash;

use ndarray::{ArrayBase, Data, Ix1};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// An equality test `feature == value` on a single categorical feature
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition<V> {
    feature_idx: usize,
    feature_name: String,
    value: V,
}

impl<V: PartialEq> Condition<V> {
    pub fn new(feature_idx: usize, feature_name: impl Into<String>, value: V) -> Self {
        Condition {
            feature_idx,
            feature_name: feature_name.into(),
            value,
        }
    }

    /// Column of the feature in the records matrix
    pub fn feature_idx(&self) -> usize {
        self.feature_idx
    }

    pub fn feature_name(&self) -> &str {
        &self.feature_name
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    /// Whether the observation `row` holds exactly this value for the feature
    ///
    /// ### Panics
    ///
    /// If `row` has fewer than `feature_idx + 1` entries
    pub fn matches(&self, row: &ArrayBase<impl Data<Elem = V>, Ix1>) -> bool {
        row[self.feature_idx] == self.value
    }
}

impl<V: fmt::Display> fmt::Display for Condition<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.feature_name, self.value)
    }
}

/// Order-invariant identity of a conjunction of conditions
///
/// Feature indices within a rule are distinct, so sorting the pairs by feature index gives a
/// canonical form: two conjunctions listing the same conditions in a different order produce
/// the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct RuleKey<V>(Vec<(usize, V)>);

impl<V: Clone + Eq + Hash> RuleKey<V> {
    pub(crate) fn of(conditions: &[Condition<V>]) -> Self {
        let mut pairs: Vec<(usize, V)> = conditions
            .iter()
            .map(|cond| (cond.feature_idx, cond.value.clone()))
            .collect();
        pairs.sort_by_key(|(feature_idx, _)| *feature_idx);

        RuleKey(pairs)
    }
}

/// A conjunction of one or two conditions together with the class it predicts
///
/// Rules are only constructed by the learner after the conjunction was found to be pure on the
/// full training set. `coverage` is the number of training observations satisfying all
/// conditions at the time the rule was accepted.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct Rule<V, L> {
    conditions: Vec<Condition<V>>,
    prediction: L,
    coverage: usize,
}

impl<V: PartialEq, L> Rule<V, L> {
    pub(crate) fn new(mut conditions: Vec<Condition<V>>, prediction: L, coverage: usize) -> Self {
        conditions.sort_by_key(|cond| cond.feature_idx);

        Rule {
            conditions,
            prediction,
            coverage,
        }
    }

    /// Conditions of the rule, sorted by feature index
    pub fn conditions(&self) -> &[Condition<V>] {
        &self.conditions
    }

    pub fn prediction(&self) -> &L {
        &self.prediction
    }

    pub fn coverage(&self) -> usize {
        self.coverage
    }

    /// Number of conditions in the conjunction
    pub fn order(&self) -> usize {
        self.conditions.len()
    }

    /// Whether every condition holds for the observation `row`
    pub fn matches(&self, row: &ArrayBase<impl Data<Elem = V>, Ix1>) -> bool {
        self.conditions.iter().all(|cond| cond.matches(row))
    }
}

impl<V: fmt::Display, L: fmt::Display> fmt::Display for Rule<V, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IF ")?;
        for (i, cond) in self.conditions.iter().enumerate() {
            if i > 0 {
                write!(f, " AND ")?;
            }
            write!(f, "{}", cond)?;
        }
        write!(f, " THEN {}", self.prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn key_ignores_condition_order() {
        let ab = vec![Condition::new(0, "a", 1), Condition::new(2, "c", 5)];
        let ba = vec![Condition::new(2, "c", 5), Condition::new(0, "a", 1)];

        assert_eq!(RuleKey::of(&ab), RuleKey::of(&ba));
        assert_ne!(
            RuleKey::of(&ab),
            RuleKey::of(&[Condition::new(0, "a", 1), Condition::new(2, "c", 6)])
        );
    }

    #[test]
    fn rule_matches_conjunction() {
        let rule = Rule::new(
            vec![Condition::new(1, "b", 3), Condition::new(0, "a", 1)],
            true,
            2,
        );

        assert_eq!(rule.order(), 2);
        assert_eq!(rule.conditions()[0].feature_idx(), 0);
        assert!(rule.matches(&array![1, 3, 9]));
        assert!(!rule.matches(&array![1, 4, 9]));
        assert!(!rule.matches(&array![2, 3, 9]));
    }

    #[test]
    fn display_rule() {
        let rule = Rule::new(
            vec![
                Condition::new(2, "humidity", "high"),
                Condition::new(0, "outlook", "sunny"),
            ],
            "no",
            3,
        );

        assert_eq!(
            rule.to_string(),
            "IF outlook = sunny AND humidity = high THEN no"
        );
    }
}
