//! Summary statistics for a validated sequence.

use std::fmt;

use crate::data::NumericSequence;

/// Mean, median and population standard deviation of one sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub median: f64,
    pub stddev: f64,
}

/// Summarize a sequence.
///
/// NaN anywhere in the input propagates to all three statistics, and an
/// empty sequence yields NaN for all three.
pub fn summarize(seq: &NumericSequence) -> Summary {
    let data = seq.values();
    Summary {
        mean: mean(data),
        median: median(data),
        stddev: std_dev(data),
    }
}

pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Middle value, or the average of the two middle values for even lengths.
pub fn median(data: &[f64]) -> f64 {
    if data.is_empty() || data.iter().any(|x| x.is_nan()) {
        return f64::NAN;
    }
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Population standard deviation (divides by N).
pub fn std_dev(data: &[f64]) -> f64 {
    let m = mean(data);
    if m.is_nan() {
        return f64::NAN;
    }
    let var = data.iter().map(|x| (x - m).powi(2)).sum::<f64>() / data.len() as f64;
    var.sqrt()
}

/// Display adapter printing a [`Summary`] with a fixed number of decimals.
pub struct SummaryReport<'a> {
    pub summary: &'a Summary,
    pub precision: usize,
}

impl Summary {
    pub fn report(&self, precision: usize) -> SummaryReport<'_> {
        SummaryReport {
            summary: self,
            precision,
        }
    }
}

impl fmt::Display for SummaryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.precision;
        writeln!(f, "=== Summary Statistics ===")?;
        writeln!(f, "Mean:   {:.p$}", self.summary.mean)?;
        writeln!(f, "Median: {:.p$}", self.summary.median)?;
        writeln!(f, "Std:    {:.p$}", self.summary.stddev)?;
        write!(f, "==========================")
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.report(4), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::validate_sequence;

    fn seq(values: &[f64]) -> NumericSequence {
        validate_sequence(values.to_vec()).unwrap()
    }

    #[test]
    fn test_textbook_example() {
        let s = summarize(&seq(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]));
        assert_eq!(s.mean, 5.0);
        assert_eq!(s.median, 4.5);
        assert!((s.stddev - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_odd_length_median_unsorted() {
        assert_eq!(median(&[9.0, 1.0, 5.0]), 5.0);
    }

    #[test]
    fn test_single_value() {
        let s = summarize(&seq(&[7.0]));
        assert_eq!(s, Summary { mean: 7.0, median: 7.0, stddev: 0.0 });
    }

    #[test]
    fn test_nan_propagates() {
        let s = summarize(&seq(&[1.0, f64::NAN, 3.0]));
        assert!(s.mean.is_nan());
        assert!(s.median.is_nan());
        assert!(s.stddev.is_nan());
    }

    #[test]
    fn test_empty_is_nan() {
        let s = summarize(&NumericSequence::default());
        assert!(s.mean.is_nan() && s.median.is_nan() && s.stddev.is_nan());
    }

    #[test]
    fn test_report_precision() {
        let s = Summary { mean: 20.0, median: 20.0, stddev: 8.164_965_809 };
        let text = s.report(2).to_string();
        assert!(text.contains("Mean:   20.00"));
        assert!(text.contains("Std:    8.16"));
        assert!(s.to_string().contains("Std:    8.1650"));
    }
}
