//! Plot a 1024-bin histogram of a column of numbers.
//!
//! # Usage
//!
//! ```text
//! linehist <text file with data>
//! ```
//!
//! Shows the histogram as a line plot in a window, then saves it to
//! `out.pdf` in the current directory once the window is closed.

mod args;

use std::{error::Error, ffi::OsString, path::Path};

use linehist_core::{BinCount, Dataset, Histogram};
use linehist_plot::{Figure, FigureConfig};
use tracing::{Level, debug, error};

use args::Cli;

/// The figure is always written here, relative to the working directory.
const OUTPUT_PATH: &str = "out.pdf";

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<OsString> = std::env::args_os().collect();

    let Some(cli) = Cli::from_args(&args) else {
        println!("{}", args::usage(&args));
        return Ok(());
    };

    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(&cli.data) {
        error!("{err}");
        return Err(err);
    }

    println!("hello");
    Ok(())
}

/// Loads, bins, shows and saves, stopping at the first failure.
fn run(data: &Path) -> Result<(), Box<dyn Error>> {
    let dataset = Dataset::from_path(data)?;
    let histogram = Histogram::compute(&dataset, BinCount::DEFAULT)?;
    debug!(bins = histogram.bins(), total = histogram.total(), "binned dataset");

    let mut figure = Figure::line(histogram.points(), FigureConfig::new());
    figure.show()?;

    figure.tight_layout();
    figure.save_pdf(OUTPUT_PATH)?;

    Ok(())
}
