use ndarray::{ArrayBase, Axis, Data, Ix1, Ix2};

use super::Condition;

/// Rows of `records` which satisfy every condition, if they agree on a single decision label
///
/// The records are restricted condition by condition. When the remaining observations all share
/// one label their indices are returned in ascending order. An empty vector signals that the
/// conjunction should be rejected: either no observation satisfies it or the satisfying
/// observations carry more than one label.
///
/// An empty list of conditions restricts nothing, so the result is either every row or none.
///
/// ### Panics
///
/// If a condition refers to a column outside of `records` or if `targets` has fewer entries than
/// `records` has rows.
pub fn evaluate<V: PartialEq, L: PartialEq>(
    records: &ArrayBase<impl Data<Elem = V>, Ix2>,
    targets: &ArrayBase<impl Data<Elem = L>, Ix1>,
    conditions: &[Condition<V>],
) -> Vec<usize> {
    let mut covered: Vec<usize> = (0..records.nrows()).collect();
    for cond in conditions {
        covered.retain(|&idx| cond.matches(&records.index_axis(Axis(0), idx)));
    }

    let pure = match covered.split_first() {
        Some((first, rest)) => rest.iter().all(|&idx| targets[idx] == targets[*first]),
        None => false,
    };

    if pure {
        covered
    } else {
        Vec::new()
    }
}
