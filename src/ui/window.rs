use std::io::Stdout;

use anyhow::{anyhow, Result};
use eframe::egui::{self, Stroke, Ui};
use egui_plot::{Bar, BarChart, Legend, LineStyle, Plot, VLine};

use super::{Histogram, HistogramRenderer, Markers, TextRenderer};
use crate::color::{BinShading, MEAN_COLOR, MEDIAN_COLOR};
use crate::data::NumericSequence;

const TITLE: &str = "Histogram with Mean & Median";

// ---------------------------------------------------------------------------
// Native window renderer
// ---------------------------------------------------------------------------

/// Shows each histogram in a native window and blocks until it is closed.
///
/// When no window can be opened (headless session, no display server) the
/// renderer switches to console output for the rest of the session.
pub struct WindowRenderer {
    fallback: TextRenderer<Stdout>,
    headless: bool,
}

impl WindowRenderer {
    pub fn new(fallback_width: usize) -> Self {
        Self {
            fallback: TextRenderer::stdout(fallback_width),
            headless: false,
        }
    }

    fn show(hist: Histogram, markers: Markers) -> Result<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([900.0, 600.0])
                .with_min_inner_size([400.0, 300.0]),
            ..Default::default()
        };

        let app = HistogramWindow { hist, markers };
        eframe::run_native(TITLE, options, Box::new(|_cc| Ok(Box::new(app))))
            .map_err(|e| anyhow!("opening histogram window: {e}"))
    }
}

impl HistogramRenderer for WindowRenderer {
    fn render(&mut self, seq: &NumericSequence, bins: usize, markers: Markers) -> Result<()> {
        if !self.headless {
            let hist = Histogram::new(seq.values(), bins);
            match Self::show(hist, markers) {
                Ok(()) => return Ok(()),
                Err(e) => {
                    log::warn!("{e:#}; falling back to console histograms");
                    self.headless = true;
                }
            }
        }
        self.fallback.render(seq, bins, markers)
    }
}

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

struct HistogramWindow {
    hist: Histogram,
    markers: Markers,
}

impl eframe::App for HistogramWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui: &mut Ui| {
                ui.heading(TITLE);
            });
            histogram_plot(ui, &self.hist, self.markers);
        });
    }
}

/// Bars shaded by frequency, dashed mean (red) and median (blue) lines.
fn histogram_plot(ui: &mut Ui, hist: &Histogram, markers: Markers) {
    let shading = BinShading::new(&hist.counts);
    let width = hist.bin_width();

    let bars: Vec<Bar> = hist
        .centers()
        .zip(hist.counts.iter())
        .map(|(center, &count)| {
            Bar::new(center, count as f64)
                .width(width)
                .fill(shading.color_for(count))
                .stroke(Stroke::new(1.0, egui::Color32::BLACK))
        })
        .collect();

    Plot::new("histogram_plot")
        .legend(Legend::default())
        .x_axis_label("Value")
        .y_axis_label("Frequency")
        .show_grid(true)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Frequency"));

            for (label, value, color) in [
                ("Mean", markers.mean, MEAN_COLOR),
                ("Median", markers.median, MEDIAN_COLOR),
            ] {
                if !value.is_finite() {
                    continue;
                }
                plot_ui.vline(
                    VLine::new(value)
                        .name(format!("{label} = {value:.2}"))
                        .color(color)
                        .width(2.0)
                        .style(LineStyle::dashed_dense()),
                );
            }
        });
}
