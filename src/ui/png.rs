use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use eframe::egui::Color32;
use image::{Rgb, RgbImage};

use super::{Histogram, HistogramRenderer, Markers};
use crate::color::{BinShading, MEAN_COLOR, MEDIAN_COLOR};
use crate::data::NumericSequence;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 500;
const MARGIN: u32 = 40;
const DASH: u32 = 8;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const EDGE: Rgb<u8> = Rgb([0, 0, 0]);
const AXIS: Rgb<u8> = Rgb([90, 90, 90]);

// ---------------------------------------------------------------------------
// PNG export
// ---------------------------------------------------------------------------

/// Writes each histogram to a PNG file, overwriting the previous one.
pub struct ImageRenderer {
    path: PathBuf,
}

impl ImageRenderer {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistogramRenderer for ImageRenderer {
    fn render(&mut self, seq: &NumericSequence, bins: usize, markers: Markers) -> Result<()> {
        let hist = Histogram::new(seq.values(), bins);
        let img = draw(&hist, markers);
        img.save(&self.path)
            .with_context(|| format!("writing {}", self.path.display()))?;
        log::info!("Histogram written to {}", self.path.display());
        Ok(())
    }
}

fn rgb(c: Color32) -> Rgb<u8> {
    Rgb([c.r(), c.g(), c.b()])
}

/// Rasterize bars and marker lines onto a white canvas.
pub(crate) fn draw(hist: &Histogram, markers: Markers) -> RgbImage {
    let mut img = RgbImage::from_pixel(WIDTH, HEIGHT, BACKGROUND);
    let plot_w = WIDTH - 2 * MARGIN;
    let plot_h = HEIGHT - 2 * MARGIN;
    let baseline = HEIGHT - MARGIN;

    let x_of = |v: f64| MARGIN as f64 + hist.fraction(v) * plot_w as f64;

    let max = hist.max_count().max(1);
    let shading = BinShading::new(&hist.counts);

    for (&count, edge) in hist.counts.iter().zip(hist.edges.windows(2)) {
        if count == 0 {
            continue;
        }
        let x0 = x_of(edge[0]).round() as u32;
        let x1 = (x_of(edge[1]).round() as u32).max(x0 + 1);
        let bar_h = (count as u64 * plot_h as u64 / max as u64) as u32;
        let top = baseline - bar_h;
        let fill = rgb(shading.color_for(count));

        for x in x0..x1 {
            for y in top..baseline {
                let on_edge = x == x0 || x == x1 - 1 || y == top;
                img.put_pixel(x, y, if on_edge { EDGE } else { fill });
            }
        }
    }

    for x in MARGIN..WIDTH - MARGIN {
        img.put_pixel(x, baseline, AXIS);
    }

    for (value, color) in [(markers.mean, MEAN_COLOR), (markers.median, MEDIAN_COLOR)] {
        if !value.is_finite() {
            continue;
        }
        let x = x_of(value).round();
        if x < 0.0 || x >= WIDTH as f64 {
            continue;
        }
        let x = x as u32;
        for y in MARGIN..baseline {
            if (y / DASH) % 2 == 0 {
                for dx in 0..2 {
                    if x + dx < WIDTH {
                        img.put_pixel(x + dx, y, rgb(color));
                    }
                }
            }
        }
    }

    img
}
