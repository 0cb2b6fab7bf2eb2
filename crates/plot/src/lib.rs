//! Line-plot figures for linehist.
//!
//! A [`Figure`] holds one line series plus its presentation settings. It can
//! be shown in a blocking egui window with [`Figure::show`] and written to a
//! single-page PDF with [`Figure::save_pdf`].
//!
//! # Example
//!
//! ```ignore
//! let mut figure = Figure::line(points, FigureConfig::new());
//! figure.show()?;
//! figure.tight_layout();
//! figure.save_pdf("out.pdf")?;
//! ```

mod config;
mod error;
mod figure;
mod layout;
mod pdf;
mod ticks;
mod window;

pub use config::FigureConfig;
pub use error::PlotError;
pub use figure::Figure;
pub use layout::Layout;
