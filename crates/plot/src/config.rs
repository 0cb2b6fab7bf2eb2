/// Presentation settings for a [`Figure`](crate::Figure).
///
/// Construct with [`FigureConfig::new`] and chain builder methods as needed.
/// Defaults match a fresh single-axes figure: 6.4 × 4.8 inches, no title and
/// no axis labels.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureConfig {
    pub(crate) title: Option<String>,
    pub(crate) x_label: Option<String>,
    pub(crate) y_label: Option<String>,
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) font_size: f64,
}

impl FigureConfig {
    /// Window title used when no title is set.
    pub const WINDOW_TITLE: &'static str = "Figure 1";

    /// Creates a config with default size and no labels.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            x_label: None,
            y_label: None,
            width: 460.8,
            height: 345.6,
            font_size: 10.0,
        }
    }

    /// Sets the title shown above the axes and in the window's title bar.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the x-axis label.
    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    /// Sets the y-axis label.
    #[must_use]
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    /// Sets the page size in points (1pt = 1/72").
    ///
    /// Non-finite or non-positive values keep the current size.
    #[must_use]
    pub fn size(mut self, width: f64, height: f64) -> Self {
        if width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0 {
            self.width = width;
            self.height = height;
        }
        self
    }

    /// Sets the font size in points for tick labels, axis labels and title.
    #[must_use]
    pub fn font_size(mut self, size: f64) -> Self {
        if size.is_finite() && size > 0.0 {
            self.font_size = size;
        }
        self
    }

    pub(crate) fn window_title(&self) -> &str {
        self.title.as_deref().unwrap_or(Self::WINDOW_TITLE)
    }
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self::new()
    }
}
