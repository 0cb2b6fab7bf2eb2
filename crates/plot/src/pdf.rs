//! Vector export of a [`Figure`]: drawn to SVG with plotters, then converted
//! to a single-page PDF.

use std::{error::Error, path::Path};

use plotters::prelude::*;
use svg2pdf::usvg;
use tracing::debug;

use crate::{Figure, PlotError, ticks::TICKS};

const FONT_FAMILY: &str = "sans-serif";

const LINE_COLOR: RGBColor = RGBColor(0x1f, 0x77, 0xb4);

impl Figure {
    /// Renders the figure as an SVG document sized in points.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::Render`] if plotters fails to draw the chart.
    pub fn to_svg(&self) -> Result<String, PlotError> {
        let mut svg = String::new();
        self.draw(&mut svg)
            .map_err(|e| PlotError::Render(e.to_string()))?;
        Ok(svg)
    }

    /// Renders the figure as PDF bytes.
    ///
    /// The output depends only on the figure, so rendering the same figure
    /// twice yields identical bytes.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::Render`] if drawing fails or [`PlotError::Pdf`] if
    /// the SVG cannot be converted.
    pub fn to_pdf(&self) -> Result<Vec<u8>, PlotError> {
        svg_to_pdf(&self.to_svg()?)
    }

    /// Writes the figure to `path` as PDF, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::Io`] if the file cannot be written, or any error
    /// from [`to_pdf`](Self::to_pdf).
    pub fn save_pdf(&self, path: impl AsRef<Path>) -> Result<(), PlotError> {
        let path = path.as_ref();
        let bytes = self.to_pdf()?;
        std::fs::write(path, &bytes)?;
        debug!(path = %path.display(), bytes = bytes.len(), "saved figure");
        Ok(())
    }

    fn draw(&self, svg: &mut String) -> Result<(), Box<dyn Error>> {
        let config = self.config();
        let layout = self.layout();
        let (x, y) = (self.x_range(), self.y_range());

        let root =
            SVGBackend::with_string(svg, (points(config.width), points(config.height)))
                .into_drawing_area();
        root.fill(&WHITE)?;

        let mut builder = ChartBuilder::on(&root);
        builder
            .margin_top(points(layout.top))
            .margin_right(points(layout.right))
            .margin_bottom(points(layout.bottom))
            .margin_left(points(layout.left))
            .x_label_area_size(points(layout.x_label_area))
            .y_label_area_size(points(layout.y_label_area));
        if let Some(title) = &config.title {
            builder.caption(title, (FONT_FAMILY, config.font_size * 1.2));
        }
        let mut chart = builder.build_cartesian_2d(x.start..x.end, y.start..y.end)?;

        let x_format = |v: &f64| x.format(*v);
        let y_format = |v: &f64| y.format(*v);
        let mut mesh = chart.configure_mesh();
        mesh.disable_mesh()
            .x_labels(TICKS)
            .y_labels(TICKS)
            .x_label_formatter(&x_format)
            .y_label_formatter(&y_format)
            .label_style((FONT_FAMILY, config.font_size));
        if let Some(label) = &config.x_label {
            mesh.x_desc(label.as_str());
        }
        if let Some(label) = &config.y_label {
            mesh.y_desc(label.as_str());
        }
        mesh.draw()?;

        chart.draw_series(LineSeries::new(
            self.points().iter().map(|p| (p[0], p[1])),
            LINE_COLOR.stroke_width(1),
        ))?;

        root.present()?;
        Ok(())
    }
}

/// Rounds a length in points to whole SVG units.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn points(length: f64) -> u32 {
    length.max(0.0).round() as u32
}

/// Converts an SVG document to PDF bytes, one SVG unit per point.
fn svg_to_pdf(svg: &str) -> Result<Vec<u8>, PlotError> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options).map_err(|e| PlotError::Pdf(e.to_string()))?;

    svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    )
    .map_err(|e| PlotError::Pdf(e.to_string()))
}
