// linfa-rules/tests/properties.rs

use std::collections::HashSet;

use linfa::prelude::*;
use linfa_rules::{evaluate, RuleSet};
use ndarray::{Array1, Array2};
use proptest::collection::vec;
use proptest::prelude::*;

/// Small categorical datasets with labels in `1..4`, so that `0` is only ever the default label
fn dataset() -> impl Strategy<Value = (Array2<u8>, Array1<usize>)> {
    (1usize..5, 0usize..25).prop_flat_map(|(nfeatures, nsamples)| {
        (
            vec(0u8..3, nfeatures * nsamples),
            vec(1usize..4, nsamples),
        )
            .prop_map(move |(values, labels)| {
                let records = Array2::from_shape_vec((nsamples, nfeatures), values).unwrap();
                (records, Array1::from(labels))
            })
    })
}

fn learn(records: &Array2<u8>, targets: &Array1<usize>, max_rules: usize) -> RuleSet<u8, usize> {
    let dataset = Dataset::new(records.clone(), targets.clone());

    RuleSet::params()
        .max_rules(max_rules)
        .fit(&dataset)
        .unwrap()
}

proptest! {
    #[test]
    fn rules_are_pure_on_full_dataset((records, targets) in dataset(), max_rules in 1usize..10) {
        let model = learn(&records, &targets, max_rules);

        prop_assert!(model.len() <= max_rules);
        for rule in &model {
            prop_assert!(rule.order() >= 1 && rule.order() <= 2);

            let covered = evaluate(&records, &targets, rule.conditions());
            prop_assert_eq!(covered.len(), rule.coverage());
            prop_assert!(covered.iter().all(|&idx| targets[idx] == *rule.prediction()));
        }
    }

    #[test]
    fn condition_sets_are_distinct((records, targets) in dataset(), max_rules in 1usize..10) {
        let model = learn(&records, &targets, max_rules);

        let keys = model
            .iter()
            .map(|rule| {
                let mut key = rule
                    .conditions()
                    .iter()
                    .map(|cond| (cond.feature_idx(), *cond.value()))
                    .collect::<Vec<_>>();
                key.sort_unstable();
                key
            })
            .collect::<HashSet<_>>();

        prop_assert_eq!(keys.len(), model.len());
    }

    #[test]
    fn prediction_is_total_and_first_match((records, targets) in dataset(), max_rules in 1usize..10) {
        let model = learn(&records, &targets, max_rules);
        let preds = model.predict(&records);

        prop_assert_eq!(preds.len(), records.nrows());
        for (row, pred) in records.rows().into_iter().zip(preds.iter()) {
            let expected = model
                .iter()
                .find(|rule| rule.matches(&row))
                .map(|rule| *rule.prediction())
                .unwrap_or(0);
            prop_assert_eq!(*pred, expected);
        }
    }

    #[test]
    fn matched_training_rows_are_classified_correctly((records, targets) in dataset(), max_rules in 1usize..10) {
        let model = learn(&records, &targets, max_rules);
        let preds = model.predict(&records);

        for (pred, target) in preds.iter().zip(targets.iter()) {
            prop_assert!(*pred == *target || *pred == 0);
        }
    }

    #[test]
    fn learning_is_deterministic((records, targets) in dataset(), max_rules in 1usize..10) {
        let first = learn(&records, &targets, max_rules);
        let second = learn(&records, &targets, max_rules);

        prop_assert_eq!(first, second);
    }
}

#[test]
fn empty_rule_set_predicts_default() {
    let records = Array2::<u8>::zeros((0, 2));
    let model = learn(&records, &Array1::from(vec![]), 5);

    let examples = ndarray::array![[0u8, 1], [2, 2], [1, 0]];
    assert_eq!(model.predict(&examples), Array1::from(vec![0usize; 3]));
}
