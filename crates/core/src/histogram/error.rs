/// Errors that can occur when computing a [`Histogram`](super::Histogram).
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq)]
pub enum HistogramError {
    #[error("cannot compute a histogram of an empty dataset")]
    Empty,

    #[error("bin count must be at least 1")]
    ZeroBins,

    #[error("autodetected range of [{min}, {max}] is not finite")]
    NonFiniteRange { min: f64, max: f64 },
}
