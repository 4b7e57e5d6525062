use linfa::{Label, ParamGuard};
use std::marker::PhantomData;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::{RuleSet, RulesError};

/// The set of hyperparameters that can be specified for learning a
/// [rule set](struct.RuleSet.html) by sequential covering.
///
/// ### Example
///
/// ```rust
/// use linfa::prelude::*;
/// use linfa_rules::RuleSet;
/// use ndarray::array;
///
/// let records = array![[1, 0], [1, 1], [2, 0]];
/// let dataset = Dataset::new(records, array![1usize, 1, 2]);
///
/// // Initialize the default set of parameters and adjust the budget
/// let params = RuleSet::params().max_rules(3).default_label(0);
/// let rules = params.fit(&dataset).unwrap();
///
/// assert_eq!(rules.predict(&array![[1, 5], [3, 3]]), array![1usize, 0]);
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct RuleSetValidParams<V, L> {
    max_rules: usize,
    max_order: usize,
    default_label: L,

    value_marker: PhantomData<V>,
}

impl<V, L> RuleSetValidParams<V, L> {
    pub fn max_rules(&self) -> usize {
        self.max_rules
    }

    pub fn max_order(&self) -> usize {
        self.max_order
    }

    pub fn default_label(&self) -> &L {
        &self.default_label
    }
}

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct RuleSetParams<V, L>(RuleSetValidParams<V, L>);

impl<V, L: Label + Default> RuleSetParams<V, L> {
    pub fn new() -> Self {
        Self(RuleSetValidParams {
            max_rules: 5,
            max_order: 2,
            default_label: L::default(),
            value_marker: PhantomData,
        })
    }
}

impl<V, L: Label> RuleSetParams<V, L> {
    /// Sets the maximal number of rules accepted before learning stops
    pub fn max_rules(mut self, max_rules: usize) -> Self {
        self.0.max_rules = max_rules;
        self
    }

    /// Sets the largest number of conditions in a rule
    ///
    /// With an order of one only single-condition rules are generated, with two the pass over
    /// pairs of features follows.
    pub fn max_order(mut self, max_order: usize) -> Self {
        self.0.max_order = max_order;
        self
    }

    /// Sets the label predicted for observations no rule matches
    pub fn default_label(mut self, default_label: L) -> Self {
        self.0.default_label = default_label;
        self
    }
}

impl<V, L: Label + Default> Default for RuleSetParams<V, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, L: Label + Default> RuleSet<V, L> {
    /// Defaults are provided if the optional parameters are not specified:
    /// * `max_rules = 5`
    /// * `max_order = 2`
    /// * `default_label = L::default()`
    // Violates the convention that new should return a value of type `Self`
    #[allow(clippy::new_ret_no_self)]
    pub fn params() -> RuleSetParams<V, L> {
        RuleSetParams::new()
    }
}

impl<V, L> ParamGuard for RuleSetParams<V, L> {
    type Checked = RuleSetValidParams<V, L>;
    type Error = RulesError;

    fn check_ref(&self) -> Result<&Self::Checked, Self::Error> {
        if self.0.max_rules == 0 {
            Err(RulesError::InvalidMaxRules(self.0.max_rules))
        } else if !(1..=2).contains(&self.0.max_order) {
            Err(RulesError::InvalidMaxOrder(self.0.max_order))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked, Self::Error> {
        self.check_ref()?;
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let params = RuleSet::<u8, usize>::params().check().unwrap();

        assert_eq!(params.max_rules(), 5);
        assert_eq!(params.max_order(), 2);
        assert_eq!(*params.default_label(), 0);
    }

    #[test]
    #[should_panic]
    fn panic_zero_max_rules() {
        RuleSet::<u8, usize>::params()
            .max_rules(0)
            .check()
            .unwrap();
    }

    #[test]
    fn reject_unsupported_order() {
        let res = RuleSet::<u8, bool>::params().max_order(3).check();
        assert!(matches!(res, Err(RulesError::InvalidMaxOrder(3))));

        let res = RuleSet::<u8, bool>::params().max_order(0).check_ref().is_err();
        assert!(res);
    }
}
