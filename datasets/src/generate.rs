//! Utility functions for randomly generating categorical datasets

use linfa::Dataset;
use ndarray::{Array1, Array2, Ix1};
use rand::Rng;

/// Generates `nsamples` observations with random categorical features
///
/// Feature `j` takes values in `0..cardinalities[j]`. The label of an observation is a function
/// of its first two features, `(x_0 * cardinalities[1] + x_1) % nclasses`, so the labels are
/// explained exactly by rules of order two. With a single feature the label is `x_0 % nclasses`.
///
/// # Panics
///
/// If `cardinalities` is empty or contains a zero, or if `nclasses` is zero.
pub fn categorical(
    nsamples: usize,
    cardinalities: &[usize],
    nclasses: usize,
    rng: &mut impl Rng,
) -> Dataset<usize, usize, Ix1> {
    assert!(!cardinalities.is_empty(), "at least one feature is required");
    assert!(nclasses > 0, "at least one class is required");

    let records = random_records(nsamples, cardinalities, rng);
    let targets = records
        .rows()
        .into_iter()
        .map(|row| match cardinalities.get(1) {
            Some(card) => (row[0] * card + row[1]) % nclasses,
            None => row[0] % nclasses,
        })
        .collect::<Array1<_>>();

    Dataset::new(records, targets)
}

/// Generates `nsamples` observations with random categorical features and uniformly drawn
/// labels in `0..nclasses`
///
/// # Panics
///
/// If `cardinalities` contains a zero or if `nclasses` is zero.
pub fn random_categorical(
    nsamples: usize,
    cardinalities: &[usize],
    nclasses: usize,
    rng: &mut impl Rng,
) -> Dataset<usize, usize, Ix1> {
    let records = random_records(nsamples, cardinalities, rng);
    let targets = (0..nsamples)
        .map(|_| rng.gen_range(0..nclasses))
        .collect::<Array1<_>>();

    Dataset::new(records, targets)
}

fn random_records(nsamples: usize, cardinalities: &[usize], rng: &mut impl Rng) -> Array2<usize> {
    Array2::from_shape_fn((nsamples, cardinalities.len()), |(_, j)| {
        rng.gen_range(0..cardinalities[j])
    })
}
