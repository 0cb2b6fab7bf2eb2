use approx::assert_relative_eq;

use super::{BinCount, Histogram, HistogramError};
use crate::Dataset;

fn histogram(values: &[f64], bins: usize) -> Histogram {
    let dataset = Dataset::from(values.to_vec());
    Histogram::compute(&dataset, BinCount::new(bins).unwrap()).expect("should bin")
}

/// A deterministic, uneven spread of values for property checks.
fn scattered(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = f64::from(u32::try_from(i).unwrap());
            (t * 0.618_033_988_7).fract() * 50.0 - 20.0 + (t * 0.1).sin()
        })
        .collect()
}

#[test]
fn default_bin_count_is_1024() {
    assert_eq!(BinCount::default().get(), 1024);
    assert_eq!(BinCount::DEFAULT, BinCount::new(1024).unwrap());
}

#[test]
fn rejects_zero_bins() {
    assert_eq!(BinCount::new(0), Err(HistogramError::ZeroBins));
}

#[test]
fn empty_dataset_is_an_error() {
    let dataset = Dataset::from(Vec::new());
    let err = Histogram::compute(&dataset, BinCount::DEFAULT).unwrap_err();
    assert_eq!(err, HistogramError::Empty);
}

#[test]
fn non_finite_values_are_an_error() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let dataset = Dataset::from(vec![1.0, bad, 3.0]);
        let err = Histogram::compute(&dataset, BinCount::DEFAULT).unwrap_err();
        assert!(matches!(err, HistogramError::NonFiniteRange { .. }));
    }
}

#[test]
fn one_to_four_over_1024_bins() {
    let hist = histogram(&[1.0, 2.0, 3.0, 4.0], 1024);

    assert_eq!(hist.bins(), 1024);
    assert_eq!(hist.edges().len(), 1025);
    assert_eq!(hist.right_edges().len(), 1024);

    let edges = hist.edges();
    assert_relative_eq!(edges[0], 1.0);
    assert_relative_eq!(edges[1024], 4.0);
    assert_relative_eq!(edges[1] - edges[0], 3.0 / 1024.0, epsilon = 1e-12);
    assert_relative_eq!(edges[1024] - edges[1023], 3.0 / 1024.0, epsilon = 1e-12);

    let counts = hist.counts();
    assert_eq!(counts[0], 1);
    assert_eq!(counts[341], 1);
    assert_eq!(counts[682], 1);
    assert_eq!(counts[1023], 1);
    assert_eq!(hist.total(), 4);
}

#[test]
fn maximum_lands_in_last_bin() {
    let hist = histogram(&[0.0, 10.0], 4);
    assert_eq!(hist.counts().to_vec(), [1, 0, 0, 1]);
}

#[test]
fn values_on_interior_edges_go_to_the_upper_bin() {
    let hist = histogram(&[0.0, 1.0, 2.0, 3.0, 4.0], 4);
    assert_eq!(hist.edges().to_vec(), [0.0, 1.0, 2.0, 3.0, 4.0]);
    assert_eq!(hist.counts().to_vec(), [1, 1, 1, 2]);
}

#[test]
fn identical_values_fill_the_middle_bin() {
    let hist = histogram(&[2.5, 2.5, 2.5], 1024);

    let edges = hist.edges();
    assert_relative_eq!(edges[0], 2.0);
    assert_relative_eq!(edges[1024], 3.0);
    assert_eq!(hist.counts()[512], 3);
    assert_eq!(hist.total(), 3);
}

#[test]
fn single_value_does_not_panic() {
    let hist = histogram(&[-7.0], 1024);
    assert_eq!(hist.total(), 1);
}

#[test]
fn counts_sum_to_dataset_length() {
    for n in [1, 2, 17, 1000, 5000] {
        let hist = histogram(&scattered(n), 1024);
        assert_eq!(hist.total(), u64::try_from(n).unwrap(), "n = {n}");
    }
}

#[test]
fn edges_are_strictly_increasing_and_span_the_range() {
    let values = scattered(2500);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let hist = histogram(&values, 1024);
    let edges = hist.edges();

    assert_eq!(edges[0], min);
    assert_eq!(edges[1024], max);
    assert!(edges.windows(2).into_iter().all(|w| w[0] < w[1]));
}

#[test]
fn every_value_falls_within_its_bin() {
    let values = scattered(3000);
    let hist = histogram(&values, 1024);
    let edges = hist.edges();

    let mut expected = vec![0_u64; 1024];
    for &x in &values {
        let bin = (0..1024)
            .find(|&i| edges[i] <= x && (x < edges[i + 1] || i == 1023))
            .expect("value within range");
        expected[bin] += 1;
    }

    assert_eq!(hist.counts().to_vec(), expected);
}

#[test]
fn points_pair_right_edges_with_counts() {
    let hist = histogram(&[0.0, 1.0, 1.5, 4.0], 4);
    assert_eq!(
        hist.points(),
        [[1.0, 1.0], [2.0, 2.0], [3.0, 0.0], [4.0, 1.0]]
    );
}

#[test]
fn range_wider_than_f64_max_still_bins() {
    let hist = histogram(&[-1e308, 0.0, 1e308], 1024);
    let edges = hist.edges();

    assert_eq!(edges[0], -1e308);
    assert_eq!(edges[512], 0.0);
    assert_eq!(edges[1024], 1e308);
    assert!(edges.iter().all(|e| e.is_finite()));
    assert!(edges.windows(2).into_iter().all(|w| w[0] < w[1]));

    let counts = hist.counts();
    assert_eq!(counts[0], 1);
    assert_eq!(counts[512], 1);
    assert_eq!(counts[1023], 1);
    assert_eq!(hist.total(), 3);
}
