use crate::{FigureConfig, Layout, ticks::AxisRange};

/// A single line series with its presentation settings.
///
/// Points are drawn in the order given, joined by straight segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    config: FigureConfig,
    points: Vec<[f64; 2]>,
    layout: Layout,
}

impl Figure {
    /// Creates a line plot through `points`, laid out loosely.
    #[must_use]
    pub fn line(points: impl Into<Vec<[f64; 2]>>, config: FigureConfig) -> Self {
        let layout = Layout::loose(&config);
        Self {
            config,
            points: points.into(),
            layout,
        }
    }

    /// Returns the plotted `[x, y]` points.
    #[must_use]
    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    /// Returns the presentation settings.
    #[must_use]
    pub fn config(&self) -> &FigureConfig {
        &self.config
    }

    /// Returns the current margins and label areas.
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Shrinks the margins to just fit the tick labels and axis labels.
    pub fn tight_layout(&mut self) {
        self.layout = Layout::tight(&self.config, self.x_range(), self.y_range());
    }

    pub(crate) fn x_range(&self) -> AxisRange {
        AxisRange::fit(self.points.iter().map(|p| p[0]))
    }

    pub(crate) fn y_range(&self) -> AxisRange {
        AxisRange::from_zero(self.points.iter().map(|p| p[1]))
    }
}
