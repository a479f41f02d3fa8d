use std::io::{self, Write};

use anyhow::{Context, Result};

use super::{Histogram, HistogramRenderer, Markers};
use crate::data::NumericSequence;

// ---------------------------------------------------------------------------
// Console histogram
// ---------------------------------------------------------------------------

/// Horizontal bar chart written to any `Write`, one line per bin.
pub struct TextRenderer<W> {
    out: W,
    width: usize,
}

impl TextRenderer<io::Stdout> {
    pub fn stdout(width: usize) -> Self {
        Self::new(io::stdout(), width)
    }
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, width: usize) -> Self {
        Self {
            out,
            width: width.max(1),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, hist: &Histogram, markers: Markers) -> io::Result<()> {
        let max = hist.max_count();
        let mean_bin = hist.bin_of(markers.mean);
        let median_bin = hist.bin_of(markers.median);
        let label_width = hist
            .edges
            .iter()
            .map(|e| format!("{e:.2}").len())
            .max()
            .unwrap_or(0);

        writeln!(self.out, "Histogram with Mean & Median")?;
        for (i, (&count, edge)) in hist.counts.iter().zip(hist.edges.windows(2)).enumerate() {
            let len = if max == 0 { 0 } else { count * self.width / max };
            let mut tags = Vec::new();
            if mean_bin == Some(i) {
                tags.push("mean");
            }
            if median_bin == Some(i) {
                tags.push("median");
            }
            let tag = if tags.is_empty() {
                String::new()
            } else {
                format!("  <- {}", tags.join(", "))
            };
            writeln!(
                self.out,
                "[{:>lw$.2}, {:>lw$.2}) {:>5} {}{tag}",
                edge[0],
                edge[1],
                count,
                "#".repeat(len),
                lw = label_width,
            )?;
        }
        writeln!(
            self.out,
            "Mean = {:.2}, Median = {:.2}",
            markers.mean, markers.median
        )?;
        if hist.skipped > 0 {
            writeln!(self.out, "({} non-finite value(s) not plotted)", hist.skipped)?;
        }
        self.out.flush()
    }
}

impl<W: Write> HistogramRenderer for TextRenderer<W> {
    fn render(&mut self, seq: &NumericSequence, bins: usize, markers: Markers) -> Result<()> {
        let hist = Histogram::new(seq.values(), bins);
        self.draw(&hist, markers).context("writing text histogram")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::validate_sequence;

    #[test]
    fn test_one_line_per_bin() {
        let seq = validate_sequence(vec![1.0, 2.0, 2.0, 3.0]).unwrap();
        let mut r = TextRenderer::new(Vec::new(), 10);
        r.render(&seq, 4, Markers { mean: 2.0, median: 2.0 }).unwrap();
        let text = String::from_utf8(r.into_inner()).unwrap();

        let bars: Vec<&str> = text.lines().filter(|l| l.starts_with('[')).collect();
        assert_eq!(bars.len(), 4);
        assert!(text.contains("<- mean, median"));
        assert!(text.contains("##########"));
    }

    #[test]
    fn test_reports_skipped_values() {
        let seq = validate_sequence(vec![1.0, f64::NAN]).unwrap();
        let mut r = TextRenderer::new(Vec::new(), 10);
        r.render(&seq, 2, Markers { mean: f64::NAN, median: f64::NAN }).unwrap();
        let text = String::from_utf8(r.into_inner()).unwrap();
        assert!(text.contains("1 non-finite value(s) not plotted"));
    }
}
