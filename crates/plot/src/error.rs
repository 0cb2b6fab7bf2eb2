/// Errors that can occur while showing or saving a figure.
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    #[error("failed to open plot window: {0}")]
    Window(#[from] eframe::Error),

    #[error("failed to draw figure: {0}")]
    Render(String),

    #[error("PDF conversion error: {0}")]
    Pdf(String),

    #[error("failed to write figure: {0}")]
    Io(#[from] std::io::Error),
}
