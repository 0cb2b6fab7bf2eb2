//! Interactive display of a [`Figure`] in a native egui window.

use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};
use tracing::debug;

use crate::{Figure, PlotError};

/// Matches the default line colour of the PDF output.
const LINE_COLOR: egui::Color32 = egui::Color32::from_rgb(0x1f, 0x77, 0xb4);

impl Figure {
    /// Opens a blocking egui window displaying the figure.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::Window`] if the native window cannot be created.
    pub fn show(&self) -> Result<(), PlotError> {
        let config = self.config();
        let viewport = egui::ViewportBuilder::default()
            .with_title(config.window_title())
            .with_inner_size([pixels(config.width), pixels(config.height)]);
        let options = eframe::NativeOptions {
            viewport,
            ..Default::default()
        };

        let app = PlotApp {
            points: self.points().to_vec(),
            title: config.title.clone(),
            x_label: config.x_label.clone(),
            y_label: config.y_label.clone(),
        };

        debug!(points = app.points.len(), "opening plot window");
        eframe::run_native(
            config.window_title(),
            options,
            Box::new(|_cc| Ok(Box::new(app))),
        )?;
        debug!("plot window closed");

        Ok(())
    }
}

/// Converts points to logical pixels at 96 dpi.
#[allow(clippy::cast_possible_truncation)]
fn pixels(points: f64) -> f32 {
    (points * 96.0 / 72.0) as f32
}

/// The egui [`eframe::App`] that renders a figure's line series.
struct PlotApp {
    points: Vec<[f64; 2]>,
    title: Option<String>,
    x_label: Option<String>,
    y_label: Option<String>,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(title) = &self.title {
                ui.vertical_centered(|ui| {
                    ui.heading(title);
                });
            }

            let mut plot = Plot::new("figure");
            if let Some(label) = &self.x_label {
                plot = plot.x_axis_label(label.as_str());
            }
            if let Some(label) = &self.y_label {
                plot = plot.y_axis_label(label.as_str());
            }

            plot.show(ui, |plot_ui| {
                let points: PlotPoints = self.points.iter().copied().collect();
                plot_ui.line(Line::new(points).color(LINE_COLOR));
            });
        });
    }
}
