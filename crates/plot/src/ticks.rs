/// Approximate number of ticks drawn along an axis.
pub(crate) const TICKS: usize = 10;

/// Closed interval shown along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct AxisRange {
    pub start: f64,
    pub end: f64,
}

impl AxisRange {
    /// Fits an axis to the given values, widening a zero-width range by 0.5
    /// on each side. Without any values the axis is `[0, 1]`.
    pub fn fit(values: impl Iterator<Item = f64>) -> Self {
        let bounds = values.fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        });

        match bounds {
            None => Self { start: 0.0, end: 1.0 },
            Some((lo, hi)) if lo == hi => Self {
                start: lo - 0.5,
                end: hi + 0.5,
            },
            Some((lo, hi)) => Self { start: lo, end: hi },
        }
    }

    /// Fits an axis starting at zero with 5% headroom above the largest value.
    pub fn from_zero(values: impl Iterator<Item = f64>) -> Self {
        let top = values.fold(0.0_f64, f64::max);
        Self {
            start: 0.0,
            end: if top > 0.0 { top * 1.05 } else { 1.0 },
        }
    }

    /// Number of decimals needed to tell neighbouring ticks apart.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn decimals(&self) -> usize {
        #[allow(clippy::cast_precision_loss)]
        let step = (self.end - self.start) / TICKS as f64;
        if !(step.is_finite() && step > 0.0) {
            return 0;
        }
        (-step.log10().floor()).clamp(0.0, 9.0) as usize
    }

    /// Formats a tick value with [`decimals`](Self::decimals) places.
    pub fn format(&self, value: f64) -> String {
        let label = format!("{value:.*}", self.decimals());
        let is_zero = label
            .trim_start_matches('-')
            .chars()
            .all(|c| c == '0' || c == '.');
        if is_zero {
            label.trim_start_matches('-').to_owned()
        } else {
            label
        }
    }

    /// Character count of the widest label this axis can produce.
    pub fn widest_label(&self) -> usize {
        self.format(self.start)
            .chars()
            .count()
            .max(self.format(self.end).chars().count())
    }
}
