use crate::{FigureConfig, ticks::AxisRange};

/// Average glyph width as a fraction of the font size.
const CHAR_WIDTH: f64 = 0.6;

/// Line height as a fraction of the font size.
const LINE_HEIGHT: f64 = 1.2;

/// Padding around the figure edge after tightening, in font sizes.
const PAD: f64 = 1.08;

/// Length of a major tick mark in points.
const TICK_LENGTH: f64 = 3.5;

/// Space around the plotting area of a figure, in points.
///
/// The margins sit at the page edge. The label areas sit between the margins
/// and the axes and hold tick labels plus the optional axis label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
    pub x_label_area: f64,
    pub y_label_area: f64,
}

impl Layout {
    /// The layout of a fresh figure: axes inset by fixed page fractions.
    #[must_use]
    pub fn loose(config: &FigureConfig) -> Self {
        Self {
            top: 0.12 * config.height,
            right: 0.1 * config.width,
            bottom: 0.0,
            left: 0.0,
            x_label_area: 0.11 * config.height,
            y_label_area: 0.125 * config.width,
        }
    }

    /// Shrinks every margin to just fit the tick labels and axis labels.
    pub(crate) fn tight(config: &FigureConfig, x: AxisRange, y: AxisRange) -> Self {
        let font = config.font_size;
        let pad = PAD * font;
        let gap = 0.35 * font;
        let line = LINE_HEIGHT * font;
        let char_width = CHAR_WIDTH * font;

        #[allow(clippy::cast_precision_loss)]
        let y_ticks = y.widest_label() as f64 * char_width;
        #[allow(clippy::cast_precision_loss)]
        let x_overhang = x.widest_label() as f64 * char_width / 2.0;

        let x_desc = if config.x_label.is_some() { line + gap } else { 0.0 };
        let y_desc = if config.y_label.is_some() { line + gap } else { 0.0 };

        Self {
            top: pad,
            right: pad + x_overhang,
            bottom: pad,
            left: pad,
            x_label_area: TICK_LENGTH + gap + line + x_desc,
            y_label_area: TICK_LENGTH + gap + y_ticks + y_desc,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn ranges() -> (AxisRange, AxisRange) {
        (
            AxisRange { start: 1.0, end: 4.0 },
            AxisRange { start: 0.0, end: 1050.0 },
        )
    }

    #[test]
    fn loose_layout_uses_page_fractions() {
        let layout = Layout::loose(&FigureConfig::new().size(400.0, 300.0));
        assert_relative_eq!(layout.top, 36.0);
        assert_relative_eq!(layout.right, 40.0);
        assert_relative_eq!(layout.x_label_area, 33.0);
        assert_relative_eq!(layout.y_label_area, 50.0);
    }

    #[test]
    fn tight_layout_is_smaller_than_loose() {
        let config = FigureConfig::new();
        let (x, y) = ranges();
        let loose = Layout::loose(&config);
        let tight = Layout::tight(&config, x, y);

        assert!(tight.top < loose.top);
        assert!(tight.right < loose.right);
        assert!(tight.x_label_area + tight.bottom < loose.x_label_area + loose.bottom + 1e-9);
        assert!(tight.y_label_area + tight.left < loose.y_label_area + loose.left);
    }

    #[test]
    fn tight_layout_makes_room_for_axis_labels() {
        let (x, y) = ranges();
        let bare = Layout::tight(&FigureConfig::new(), x, y);
        let labelled = Layout::tight(&FigureConfig::new().x_label("value").y_label("count"), x, y);

        assert!(labelled.x_label_area > bare.x_label_area);
        assert!(labelled.y_label_area > bare.y_label_area);
    }

    #[test]
    fn wider_tick_labels_widen_the_y_area() {
        let config = FigureConfig::new();
        let x = AxisRange { start: 0.0, end: 1.0 };
        let narrow = Layout::tight(&config, x, AxisRange { start: 0.0, end: 50.0 });
        let wide = Layout::tight(&config, x, AxisRange { start: 0.0, end: 500_000.0 });

        assert!(wide.y_label_area > narrow.y_label_area);
    }
}
