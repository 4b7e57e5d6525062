//! Sequential covering rule induction
//!
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};
use ndarray::{Array1, ArrayBase, ArrayView1, Data, Ix1, Ix2};

use super::{evaluate, Condition, Rule, RuleKey, RuleSetValidParams};
use crate::error::{Result, RulesError};
use linfa::{dataset::AsSingleTargets, traits::*, DatasetBase, Label};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Remainder tracks the observations no accepted rule explains yet
///
/// Only the choice of candidate conditions is driven by the remainder. Whether a candidate is
/// accepted is always decided on the full dataset.
struct Remainder {
    mask: Vec<bool>,
    nsamples: usize,
}

impl Remainder {
    /// Generates a remainder containing every observation
    fn all(nsamples: usize) -> Self {
        Remainder {
            mask: vec![true; nsamples],
            nsamples,
        }
    }

    fn contains(&self, idx: usize) -> bool {
        self.mask[idx]
    }

    /// Removes the covered observations, ignoring those already removed
    fn remove(&mut self, covered: &[usize]) {
        for &idx in covered {
            if self.mask[idx] {
                self.mask[idx] = false;
                self.nsamples -= 1;
            }
        }
    }
}

/// Result of offering a candidate conjunction to the learner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Candidate {
    /// The same set of conditions was evaluated before
    Seen,
    /// Contradictory or without coverage
    Rejected,
    Accepted,
}

/// Working state of a single learning run
struct Learner<'a, V, L, D: Data<Elem = V>> {
    records: &'a ArrayBase<D, Ix2>,
    targets: ArrayView1<'a, L>,
    feature_names: Vec<String>,
    max_rules: usize,
    rules: Vec<Rule<V, L>>,
    seen: HashSet<RuleKey<V>>,
    remainder: Remainder,
}

impl<'a, V, L, D> Learner<'a, V, L, D>
where
    V: Clone + Eq + Hash + Debug,
    L: Label + Debug,
    D: Data<Elem = V>,
{
    fn condition(&self, row: usize, feature_idx: usize) -> Condition<V> {
        Condition::new(
            feature_idx,
            self.feature_names[feature_idx].clone(),
            self.records[(row, feature_idx)].clone(),
        )
    }

    fn is_full(&self) -> bool {
        self.rules.len() >= self.max_rules
    }

    /// Evaluates the conjunction on the full dataset and accepts it if it is pure
    fn offer(&mut self, conditions: Vec<Condition<V>>) -> Candidate {
        if !self.seen.insert(RuleKey::of(&conditions)) {
            return Candidate::Seen;
        }

        let covered = evaluate(self.records, &self.targets, &conditions);
        let first = match covered.first() {
            Some(&first) => first,
            None => {
                trace!("rejected candidate {:?}", conditions);
                return Candidate::Rejected;
            }
        };

        let rule = Rule::new(conditions, self.targets[first].clone(), covered.len());
        self.remainder.remove(&covered);
        debug!(
            "accepted rule #{} {:?} => {:?} covering {} observations, {} unexplained",
            self.rules.len(),
            rule.conditions(),
            rule.prediction(),
            rule.coverage(),
            self.remainder.nsamples
        );
        self.rules.push(rule);

        Candidate::Accepted
    }

    /// Tries every single-condition rule of the rows still in the remainder
    ///
    /// Returns whether the rule budget was exhausted.
    fn single_conditions(&mut self) -> bool {
        for row in 0..self.records.nrows() {
            if !self.remainder.contains(row) {
                continue;
            }

            for feature_idx in 0..self.records.ncols() {
                let cond = self.condition(row, feature_idx);
                if self.offer(vec![cond]) == Candidate::Accepted && self.is_full() {
                    return true;
                }
            }
        }

        false
    }

    /// Tries pairs of conditions of the rows left in the remainder after the single conditions,
    /// accepting at most one rule per row
    ///
    /// The rows are fixed when the pass starts: a row explained by a pair accepted for an earlier
    /// row still contributes its own candidates.
    fn paired_conditions(&mut self) {
        let nfeatures = self.records.ncols();
        let pairs: Vec<(usize, usize)> = (0..nfeatures)
            .flat_map(|first| (first + 1..nfeatures).map(move |second| (first, second)))
            .collect();

        let rows: Vec<usize> = (0..self.records.nrows())
            .filter(|&row| self.remainder.contains(row))
            .collect();

        for row in rows {
            for &(first, second) in &pairs {
                let conditions = vec![self.condition(row, first), self.condition(row, second)];
                if self.offer(conditions) == Candidate::Accepted {
                    if self.is_full() {
                        return;
                    }
                    break;
                }
            }
        }
    }
}

/// An ordered list of classification rules learned by sequential covering
///
/// The order of the rules is the order in which they were accepted. An observation is
/// classified by the first rule whose conditions it satisfies; observations matching no rule
/// receive the default label.
///
/// ### Example
///
/// ```rust
/// use linfa::prelude::*;
/// use linfa_rules::RuleSet;
/// use ndarray::array;
///
/// let records = array![["1", "x"], ["1", "y"], ["2", "x"]];
/// let dataset = Dataset::new(records, array!["P", "P", "N"]).with_feature_names(vec!["A", "B"]);
///
/// let model = RuleSet::params().default_label("0").fit(&dataset).unwrap();
///
/// assert_eq!(model.len(), 2);
/// assert_eq!(model.rules()[0].to_string(), "IF A = 1 THEN P");
/// assert_eq!(model.predict(&array![["1", "x"], ["3", "z"]]), array!["P", "0"]);
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet<V, L> {
    rules: Vec<Rule<V, L>>,
    default_label: L,
    num_features: usize,
}

impl<V: PartialEq, L: Label> RuleSet<V, L> {
    /// Rules in acceptance order
    pub fn rules(&self) -> &[Rule<V, L>] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule<V, L>> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Label predicted for observations no rule matches
    pub fn default_label(&self) -> &L {
        &self.default_label
    }

    /// Number of features of the records the rules were learned on
    pub fn num_features(&self) -> usize {
        self.num_features
    }

    /// Returns the index and the rule deciding the class of `row`, if any rule matches
    ///
    /// ### Panics
    ///
    /// If `row` does not have as many entries as the records the rules were learned on
    pub fn first_match(
        &self,
        row: &ArrayBase<impl Data<Elem = V>, Ix1>,
    ) -> Option<(usize, &Rule<V, L>)> {
        assert_eq!(
            row.len(),
            self.num_features,
            "The number of features must match the number of features the rules were learned on."
        );

        self.rules.iter().enumerate().find(|(_, rule)| rule.matches(row))
    }

    /// Classify a single observation
    fn classify(&self, row: &ArrayBase<impl Data<Elem = V>, Ix1>) -> L {
        self.first_match(row)
            .map(|(_, rule)| rule.prediction().clone())
            .unwrap_or_else(|| self.default_label.clone())
    }
}

impl<'a, V, L> IntoIterator for &'a RuleSet<V, L> {
    type Item = &'a Rule<V, L>;
    type IntoIter = std::slice::Iter<'a, Rule<V, L>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl<V: PartialEq, L: Label, D: Data<Elem = V>> PredictInplace<ArrayBase<D, Ix2>, Array1<L>>
    for RuleSet<V, L>
{
    /// Make predictions for each row of a matrix of features `x`.
    fn predict_inplace(&self, x: &ArrayBase<D, Ix2>, y: &mut Array1<L>) {
        assert_eq!(
            x.nrows(),
            y.len(),
            "The number of data points must match the number of output targets."
        );
        assert_eq!(
            x.ncols(),
            self.num_features,
            "The number of features must match the number of features the rules were learned on."
        );

        for (row, target) in x.rows().into_iter().zip(y.iter_mut()) {
            *target = self.classify(&row);
        }
    }

    fn default_target(&self, x: &ArrayBase<D, Ix2>) -> Array1<L> {
        Array1::from_elem(x.nrows(), self.default_label.clone())
    }
}

impl<V, L, D, T> Fit<ArrayBase<D, Ix2>, T, RulesError> for RuleSetValidParams<V, L>
where
    V: Clone + Eq + Hash + Debug,
    L: Label + Debug,
    D: Data<Elem = V>,
    T: AsSingleTargets<Elem = L>,
{
    type Object = RuleSet<V, L>;

    /// Learn a rule set by sequential covering on the dataset consisting of a matrix of
    /// categorical features `x` and an array of decision labels `y`.
    ///
    /// Single-condition rules are tried first, row by row in ascending order and for each row
    /// feature by feature in column order. Afterwards pairs of conditions `(i, j)` with `i < j`
    /// are tried in lexicographic order, again starting from the rows no accepted rule covers.
    /// Learning stops when `max_rules` rules were accepted or the candidates are exhausted.
    fn fit(&self, dataset: &DatasetBase<ArrayBase<D, Ix2>, T>) -> Result<Self::Object> {
        let records = dataset.records();
        let targets = dataset.as_single_targets();

        if records.nrows() != targets.len() {
            return Err(RulesError::MismatchedShapes {
                records: records.nrows(),
                targets: targets.len(),
            });
        }
        if records.nrows() > 0 && records.ncols() == 0 {
            return Err(RulesError::NoFeatures);
        }

        let feature_names = dataset.feature_names();
        let feature_names = (0..records.ncols())
            .map(|idx| {
                feature_names
                    .get(idx)
                    .cloned()
                    .unwrap_or_else(|| format!("feature-{}", idx))
            })
            .collect();

        let mut learner = Learner {
            records,
            targets,
            feature_names,
            max_rules: self.max_rules(),
            rules: Vec::new(),
            seen: HashSet::new(),
            remainder: Remainder::all(records.nrows()),
        };

        let full = learner.single_conditions();
        debug!(
            "single conditions yield {} rules, {} observations unexplained",
            learner.rules.len(),
            learner.remainder.nsamples
        );
        if !full && self.max_order() >= 2 {
            learner.paired_conditions();
            debug!(
                "paired conditions raise the total to {} rules, {} observations unexplained",
                learner.rules.len(),
                learner.remainder.nsamples
            );
        }

        Ok(RuleSet {
            rules: learner.rules,
            default_label: self.default_label().clone(),
            num_features: records.ncols(),
        })
    }
}
