//! Histogram rendering and the native file picker.

pub mod histogram;
pub mod png;
pub mod text;
pub mod window;

use std::path::PathBuf;

use anyhow::Result;

use crate::config::{HistogramConfig, RendererKind};
use crate::data::NumericSequence;

pub use self::histogram::Histogram;
pub use self::png::ImageRenderer;
pub use self::text::TextRenderer;
pub use self::window::WindowRenderer;

/// Vertical reference lines drawn over the bars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Markers {
    pub mean: f64,
    pub median: f64,
}

/// Draws a histogram of a sequence. Fire-and-forget from the session's
/// point of view: an error is reported, never acted upon.
pub trait HistogramRenderer {
    fn render(&mut self, seq: &NumericSequence, bins: usize, markers: Markers) -> Result<()>;
}

/// Build the renderer selected in the configuration.
pub fn renderer_from_config(config: &HistogramConfig) -> Box<dyn HistogramRenderer> {
    match config.renderer {
        RendererKind::Window => Box::new(WindowRenderer::new(config.width)),
        RendererKind::Text => Box::new(TextRenderer::stdout(config.width)),
        RendererKind::Image => Box::new(ImageRenderer::new(&config.output)),
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn pick_data_file() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Open numeric data")
        .add_filter("Supported files", &["txt", "csv", "json", "parquet", "pq"])
        .add_filter("Text", &["txt", "csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file()
}
