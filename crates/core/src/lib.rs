//! Data loading and histogram binning for linehist.
//!
//! - [`Dataset`] — a one-dimensional column of `f64` values read from text
//! - [`Histogram`] — equal-width bin counts and edges over a dataset's range
//! - [`BinCount`] — a validated number of bins, [`BinCount::DEFAULT`] is 1024

mod dataset;
mod histogram;

pub use dataset::{Dataset, LoadError};
pub use histogram::{BinCount, Histogram, HistogramError};
