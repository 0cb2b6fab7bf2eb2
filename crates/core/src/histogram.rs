mod bin_count;
mod error;

#[cfg(test)]
mod tests;

use ndarray::{Array1, ArrayView1, s};
use tracing::debug;

use crate::Dataset;

pub use bin_count::BinCount;
pub use error::HistogramError;

/// Equal-width bin counts over the full range of a dataset.
///
/// Holds `n` counts and `n + 1` edges. Bin `i` covers
/// `edges[i] <= x < edges[i + 1]`, except the last bin which also includes
/// its right edge, so the dataset maximum is always counted.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    counts: Array1<u64>,
    edges: Array1<f64>,
}

impl Histogram {
    /// Bins every value of `dataset` into `bins` equal-width bins spanning
    /// `[min, max]`.
    ///
    /// When all values are equal the range is widened to
    /// `[value - 0.5, value + 0.5]`, which puts every value in the middle bin.
    ///
    /// # Errors
    ///
    /// Returns [`HistogramError::Empty`] for an empty dataset and
    /// [`HistogramError::NonFiniteRange`] if the dataset contains NaN or an
    /// infinity.
    pub fn compute(dataset: &Dataset, bins: BinCount) -> Result<Self, HistogramError> {
        let (min, max) = dataset.range().ok_or(HistogramError::Empty)?;
        if !(min.is_finite() && max.is_finite()) {
            return Err(HistogramError::NonFiniteRange { min, max });
        }

        let (first, last) = if min == max {
            (min - 0.5, max + 0.5)
        } else {
            (min, max)
        };

        let n = bins.get();
        let edges = edges(first, last, n);
        let mut counts = Array1::<u64>::zeros(n);

        // Halved so the span stays finite for ranges wider than `f64::MAX`.
        let half_first = first * 0.5;
        #[allow(clippy::cast_precision_loss)]
        let norm = n as f64 / (last * 0.5 - half_first);

        for &x in dataset.values() {
            let estimate = (x * 0.5 - half_first) * norm;
            counts[bin_index(x, estimate, &edges)] += 1;
        }

        debug!(bins = n, first, last, values = dataset.len(), "computed histogram");
        Ok(Self { counts, edges })
    }

    /// Returns the number of values in each bin.
    #[must_use]
    pub fn counts(&self) -> ArrayView1<'_, u64> {
        self.counts.view()
    }

    /// Returns all `n + 1` bin boundaries in increasing order.
    #[must_use]
    pub fn edges(&self) -> ArrayView1<'_, f64> {
        self.edges.view()
    }

    /// Returns the upper boundary of each bin.
    #[must_use]
    pub fn right_edges(&self) -> ArrayView1<'_, f64> {
        self.edges.slice(s![1..])
    }

    /// Returns the number of bins.
    #[must_use]
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Returns the total number of values counted.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.sum()
    }

    /// Returns `(right edge, count)` pairs in bin order, ready for plotting.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.right_edges()
            .iter()
            .zip(&self.counts)
            .map(|(&x, &count)| [x, count as f64])
            .collect()
    }
}

/// Returns `n + 1` evenly spaced edges with the last pinned to `last`.
///
/// Each edge interpolates between the ends, so no intermediate value exceeds
/// the larger of `|first|` and `|last|`.
#[allow(clippy::cast_precision_loss)]
fn edges(first: f64, last: f64, n: usize) -> Array1<f64> {
    let mut edges = Array1::from_shape_fn(n + 1, |i| {
        let t = i as f64 / n as f64;
        first * (1.0 - t) + last * t
    });
    edges[n] = last;
    edges
}

/// Finds the bin holding `x`, which must lie within `[edges[0], edges[n]]`.
///
/// `estimate` is `x` scaled to bin units. Rounding can put it a bin off, so
/// it is corrected against the edges themselves.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bin_index(x: f64, estimate: f64, edges: &Array1<f64>) -> usize {
    let last_bin = edges.len() - 2;
    let mut index = (estimate.max(0.0) as usize).min(last_bin);

    while index > 0 && x < edges[index] {
        index -= 1;
    }
    while index < last_bin && x >= edges[index + 1] {
        index += 1;
    }
    index
}
