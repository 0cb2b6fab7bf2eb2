use super::HistogramError;

/// The number of equal-width bins in a histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BinCount(usize);

impl BinCount {
    /// The bin count used for every plotted histogram.
    pub const DEFAULT: Self = Self(1024);

    /// Creates a validated bin count.
    ///
    /// # Errors
    ///
    /// Returns [`HistogramError::ZeroBins`] if `bins` is zero.
    pub fn new(bins: usize) -> Result<Self, HistogramError> {
        if bins == 0 {
            return Err(HistogramError::ZeroBins);
        }
        Ok(Self(bins))
    }

    /// Returns the number of bins.
    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for BinCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}
