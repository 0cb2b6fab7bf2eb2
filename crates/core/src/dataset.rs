mod error;

use std::path::Path;

use ndarray::{Array1, ArrayView1};
use tracing::debug;

pub use error::LoadError;

/// Marks the start of a comment that runs to the end of the line.
const COMMENT: char = '#';

/// An ordered, immutable column of `f64` values.
///
/// Values keep the order they had in the source text. Any amount of ASCII
/// whitespace separates values, so one value per line and several values per
/// line both load the same way.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    values: Array1<f64>,
}

impl Dataset {
    /// Reads and parses a whole text file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be read, or
    /// [`LoadError::Parse`] for the first token that is not a valid `f64`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = Self::parse(&text, path)?;
        debug!(path = %path.display(), len = dataset.len(), "loaded dataset");
        Ok(dataset)
    }

    /// Parses whitespace-separated values from `text`.
    ///
    /// `path` only labels parse errors. Text after `#` on a line is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Parse`] for the first token that is not a valid `f64`.
    pub fn parse(text: &str, path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let mut values = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let data = line.split(COMMENT).next().unwrap_or_default();
            for token in data.split_ascii_whitespace() {
                let value = token.parse::<f64>().map_err(|source| LoadError::Parse {
                    path: path.as_ref().to_path_buf(),
                    line: index + 1,
                    token: token.to_owned(),
                    source,
                })?;
                values.push(value);
            }
        }

        Ok(Self::from(values))
    }

    /// Returns a view of the values in load order.
    #[must_use]
    pub fn values(&self) -> ArrayView1<'_, f64> {
        self.values.view()
    }

    /// Returns the number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the dataset holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the smallest and largest value, or `None` if empty.
    ///
    /// A NaN anywhere in the dataset makes both bounds NaN.
    #[must_use]
    pub fn range(&self) -> Option<(f64, f64)> {
        let first = *self.values.first()?;
        let bounds = self.values.fold((first, first), |(lo, hi), &v| {
            if v.is_nan() || lo.is_nan() {
                (f64::NAN, f64::NAN)
            } else {
                (lo.min(v), hi.max(v))
            }
        });
        Some(bounds)
    }
}

impl From<Vec<f64>> for Dataset {
    fn from(values: Vec<f64>) -> Self {
        Self {
            values: Array1::from(values),
        }
    }
}
