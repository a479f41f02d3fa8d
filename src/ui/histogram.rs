/// Equal-width binning shared by all renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// `counts.len() + 1` bin edges, ascending.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
    /// Values left out because they are NaN or infinite.
    pub skipped: usize,
}

impl Histogram {
    /// Bin the finite values of `values` into `bins` equal-width bins over
    /// `[min, max]`. The last bin is closed on the right. A single distinct
    /// value gets the range `[v - 0.5, v + 0.5]`; a `bins` of 0 is taken as 1.
    pub fn new(values: &[f64], bins: usize) -> Self {
        let bins = bins.max(1);
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        let skipped = values.len() - finite.len();

        let (mut lo, mut hi) = finite
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if finite.is_empty() {
            lo = 0.0;
            hi = 1.0;
        } else if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        // Convex combinations keep every edge finite even when `hi - lo`
        // overflows.
        let edges: Vec<f64> = (0..=bins)
            .map(|i| {
                let t = i as f64 / bins as f64;
                if i == bins {
                    hi
                } else {
                    lo * (1.0 - t) + hi * t
                }
            })
            .collect();

        let mut hist = Histogram {
            edges,
            counts: vec![0usize; bins],
            skipped,
        };
        for v in finite {
            let idx = hist.index_of(v);
            hist.counts[idx] += 1;
        }
        hist
    }

    /// Position of `x` across the binned range, 0.0 at the first edge and 1.0
    /// at the last. Computed on halved values so the span cannot overflow.
    pub fn fraction(&self, x: f64) -> f64 {
        let lo = self.edges[0] / 2.0;
        let hi = self.edges[self.edges.len() - 1] / 2.0;
        (x / 2.0 - lo) / (hi - lo)
    }

    fn index_of(&self, x: f64) -> usize {
        let bins = self.counts.len();
        ((self.fraction(x) * bins as f64) as usize).min(bins - 1)
    }

    pub fn bin_width(&self) -> f64 {
        self.edges[1] - self.edges[0]
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Bin index holding `x`, if `x` lies inside the binned range.
    pub fn bin_of(&self, x: f64) -> Option<usize> {
        let lo = *self.edges.first()?;
        let hi = *self.edges.last()?;
        if !(lo..=hi).contains(&x) {
            return None;
        }
        Some(self.index_of(x))
    }

    /// Centre of each bin, for bar placement.
    pub fn centers(&self) -> impl Iterator<Item = f64> + '_ {
        self.edges.windows(2).map(|w| w[0] / 2.0 + w[1] / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_bins() {
        let h = Histogram::new(&[1.0, 2.0, 3.0, 4.0], 2);
        assert_eq!(h.counts, vec![2, 2]);
        assert_eq!(h.edges, vec![1.0, 2.5, 4.0]);
    }

    #[test]
    fn test_max_lands_in_last_bin() {
        let h = Histogram::new(&[0.0, 10.0], 5);
        assert_eq!(h.counts, vec![1, 0, 0, 0, 1]);
    }

    #[test]
    fn test_degenerate_range() {
        let h = Histogram::new(&[3.0, 3.0, 3.0], 4);
        assert_eq!(h.edges.first(), Some(&2.5));
        assert_eq!(h.edges.last(), Some(&3.5));
        assert_eq!(h.counts.iter().sum::<usize>(), 3);
    }

    #[test]
    fn test_non_finite_skipped() {
        let h = Histogram::new(&[1.0, f64::NAN, f64::INFINITY, 2.0], 20);
        assert_eq!(h.skipped, 2);
        assert_eq!(h.counts.iter().sum::<usize>(), 2);
        assert_eq!(h.counts.len(), 20);
    }

    #[test]
    fn test_zero_bins_means_one() {
        let h = Histogram::new(&[1.0, 2.0], 0);
        assert_eq!(h.counts, vec![2]);
    }

    #[test]
    fn test_span_beyond_f64_max() {
        let h = Histogram::new(&[-1e308, 0.0, 1e308], 4);
        assert!(h.edges.iter().all(|e| e.is_finite()));
        assert_eq!(h.edges.first(), Some(&-1e308));
        assert_eq!(h.edges.last(), Some(&1e308));
        assert_eq!(h.counts, vec![1, 0, 1, 1]);
        assert!(h.bin_width().is_finite());
        assert_eq!(h.bin_of(0.0), Some(2));
        assert_eq!(h.fraction(1e308), 1.0);
    }

    #[test]
    fn test_bin_of() {
        let h = Histogram::new(&[0.0, 10.0], 10);
        assert_eq!(h.bin_of(0.0), Some(0));
        assert_eq!(h.bin_of(4.5), Some(4));
        assert_eq!(h.bin_of(10.0), Some(9));
        assert_eq!(h.bin_of(11.0), None);
        assert_eq!(h.bin_of(f64::NAN), None);
    }
}
