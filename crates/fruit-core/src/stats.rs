//! # Statistics
//!
//! Summary statistics over a single snapshot column.
//!
//! ## What Lives Here
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  mean          sum / n, None when n = 0                                │
//! │  value_counts  frequency per distinct label, most frequent first       │
//! │  histogram     equal-width bins, "auto" bin count                      │
//! │  density       Gaussian kernel density, Scott's bandwidth              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Bin Count
//! The "auto" rule takes the narrower of the Sturges and Freedman-Diaconis
//! bin widths. Sturges behaves well on small samples, Freedman-Diaconis on
//! large or skewed ones. When the interquartile range is zero only Sturges
//! applies. A tight cluster with one far outlier makes the Freedman-Diaconis
//! width tiny, so any count above [`MAX_BINS`] falls back to Sturges.

use std::collections::HashMap;

// =============================================================================
// Central Tendency
// =============================================================================

/// Arithmetic mean. `None` for an empty slice.
///
/// ## Example
/// ```rust
/// use fruit_core::stats::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 4.0]), Some(7.0 / 3.0));
/// assert_eq!(mean(&[]), None);
/// ```
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Sample standard deviation (n - 1 denominator). `None` below two values.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Some(var.sqrt())
}

/// Percentile with linear interpolation between closest ranks.
///
/// `sorted` must be ascending and non-empty; `q` is in `[0, 100]`.
pub fn percentile(sorted: &[f64], q: f64) -> f64 {
    let rank = (q / 100.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let frac = rank - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * frac
}

// =============================================================================
// Value Counts
// =============================================================================

/// Frequency of each distinct label, most frequent first.
///
/// Ties keep the order in which the labels first appear.
pub fn value_counts(labels: &[String]) -> Vec<(String, usize)> {
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for label in labels {
        match index.get(label.as_str()) {
            Some(&slot) => order[slot].1 += 1,
            None => {
                index.insert(label.as_str(), order.len());
                order.push((label.clone(), 1));
            }
        }
    }

    // sort_by is stable, so equal counts stay in first-seen order
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order
}

// =============================================================================
// Histogram
// =============================================================================

/// One equal-width histogram bin. The last bin includes its right edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Equal-width bins covering the data range.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub bins: Vec<Bin>,
}

impl Histogram {
    pub fn bin_width(&self) -> f64 {
        self.bins.first().map(|b| b.end - b.start).unwrap_or(0.0)
    }

    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    pub fn range(&self) -> (f64, f64) {
        match (self.bins.first(), self.bins.last()) {
            (Some(first), Some(last)) => (first.start, last.end),
            _ => (0.0, 0.0),
        }
    }
}

/// Upper bound on the number of histogram bins.
pub const MAX_BINS: usize = 1000;

/// Number of bins chosen by the "auto" rule, never more than [`MAX_BINS`].
pub fn auto_bin_count(values: &[f64]) -> usize {
    let n = values.len();
    if n == 0 {
        return 0;
    }

    let (min, max) = min_max(values);
    let span = max - min;
    if span == 0.0 || !span.is_finite() {
        return 1;
    }

    let sturges = ((n as f64).log2() + 1.0).ceil();

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let iqr = percentile(&sorted, 75.0) - percentile(&sorted, 25.0);
    let fd_width = 2.0 * iqr * (n as f64).powf(-1.0 / 3.0);
    let fd = span / fd_width;

    let bins = if fd_width > 0.0 && fd.is_finite() && fd <= MAX_BINS as f64 {
        fd.ceil().max(sturges)
    } else {
        sturges
    };

    (bins as usize).clamp(1, MAX_BINS)
}

/// Builds a histogram with [`auto_bin_count`] bins. `None` for no data.
///
/// When every value is equal the single bin spans `value ± 0.5`.
pub fn histogram(values: &[f64]) -> Option<Histogram> {
    if values.is_empty() {
        return None;
    }

    let (mut min, mut max) = min_max(values);
    if max == min {
        min -= 0.5;
        max += 0.5;
    }

    let count = auto_bin_count(values);
    let width = (max - min) / count as f64;

    let mut bins: Vec<Bin> = (0..count)
        .map(|i| Bin {
            start: min + width * i as f64,
            end: if i + 1 == count {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();

    for &v in values {
        let slot = (((v - min) / width).floor() as usize).min(count - 1);
        bins[slot].count += 1;
    }

    Some(Histogram { bins })
}

// =============================================================================
// Kernel Density
// =============================================================================

/// Scott's rule bandwidth: `std * n^(-1/5)`. `None` when undefined.
pub fn scott_bandwidth(values: &[f64]) -> Option<f64> {
    let std = sample_std_dev(values)?;
    if std <= 0.0 {
        return None;
    }
    Some(std * (values.len() as f64).powf(-0.2))
}

/// Gaussian kernel density evaluated at `points` evenly spaced positions
/// over `[from, to]`.
///
/// Returns an empty curve when the bandwidth is undefined (fewer than two
/// values, or no spread).
pub fn gaussian_kde(values: &[f64], from: f64, to: f64, points: usize) -> Vec<(f64, f64)> {
    let Some(h) = scott_bandwidth(values) else {
        return Vec::new();
    };
    if points < 2 {
        return Vec::new();
    }

    let norm = 1.0 / (values.len() as f64 * h * (2.0 * std::f64::consts::PI).sqrt());
    let step = (to - from) / (points - 1) as f64;

    (0..points)
        .map(|i| {
            let x = from + step * i as f64;
            let sum: f64 = values
                .iter()
                .map(|xi| (-0.5 * ((x - xi) / h).powi(2)).exp())
                .sum();
            (x, sum * norm)
        })
        .collect()
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_mean_matches_sum_over_n() {
        let values = [12000.0, 8000.0, 15000.0];
        let m = mean(&values).unwrap();
        assert_eq!(round_to(m, 2), 11666.67);
        assert_eq!(format!("{m:.2}"), "11666.67");
    }

    #[test]
    fn test_mean_of_nothing_is_none() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_value_counts_order() {
        let counts = value_counts(&labels(&["Citrus", "Tropical", "Berry", "Tropical", "Berry", "Pome"]));
        assert_eq!(
            counts,
            vec![
                ("Tropical".to_string(), 2),
                ("Berry".to_string(), 2),
                ("Citrus".to_string(), 1),
                ("Pome".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_percentile_interpolates() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(percentile(&sorted, 0.0), 1.0);
        assert_eq!(percentile(&sorted, 50.0), 2.5);
        assert_eq!(percentile(&sorted, 100.0), 4.0);
        assert_eq!(percentile(&sorted, 25.0), 1.75);
    }

    #[test]
    fn test_histogram_counts_every_value() {
        let values: Vec<f64> = (1..=20).map(f64::from).collect();
        let hist = histogram(&values).unwrap();
        assert_eq!(hist.total(), 20);
        assert_eq!(hist.range(), (1.0, 20.0));
        // Sturges: 19 / (log2(20) + 1) ≈ 3.59, FD: 2 * 9.5 * 20^(-1/3) ≈ 7.0
        assert_eq!(hist.bins.len(), 6);
    }

    #[test]
    fn test_histogram_max_lands_in_last_bin() {
        let hist = histogram(&[0.0, 10.0]).unwrap();
        assert_eq!(hist.bins.last().map(|b| b.count), Some(1));
        assert_eq!(hist.bins.first().map(|b| b.count), Some(1));
    }

    #[test]
    fn test_histogram_constant_column() {
        let hist = histogram(&[5.0, 5.0, 5.0]).unwrap();
        assert_eq!(hist.bins.len(), 1);
        assert_eq!(hist.bins[0].start, 4.5);
        assert_eq!(hist.bins[0].end, 5.5);
        assert_eq!(hist.bins[0].count, 3);
    }

    #[test]
    fn test_outlier_falls_back_to_sturges() {
        let values = [0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 2_147_483_647.0];
        // log2(7) + 1 ≈ 3.81
        assert_eq!(auto_bin_count(&values), 4);

        let hist = histogram(&values).unwrap();
        assert_eq!(hist.bins.len(), 4);
        assert_eq!(hist.total(), 7);
        assert_eq!(hist.bins[0].count, 6);
        assert_eq!(hist.bins[3].count, 1);
    }

    #[test]
    fn test_bin_count_is_bounded() {
        let mut values = vec![0.0; 500];
        values.extend((0..500).map(|i| 1.0 + i as f64 * 1e-9));
        values.push(1e12);
        assert!(auto_bin_count(&values) <= MAX_BINS);
        assert_eq!(auto_bin_count(&[0.0, f64::MAX, -f64::MAX]), 1);
    }

    #[test]
    fn test_histogram_empty() {
        assert!(histogram(&[]).is_none());
        assert_eq!(auto_bin_count(&[]), 0);
    }

    #[test]
    fn test_kde_integrates_to_about_one() {
        let values = [1.0, 2.0, 2.5, 3.0, 7.0];
        let curve = gaussian_kde(&values, -20.0, 30.0, 2001);
        let step = 50.0 / 2000.0;
        let area: f64 = curve.iter().map(|(_, y)| y * step).sum();
        assert!((area - 1.0).abs() < 1e-3, "area = {area}");
    }

    #[test]
    fn test_kde_undefined_without_spread() {
        assert!(gaussian_kde(&[3.0], 0.0, 5.0, 10).is_empty());
        assert!(gaussian_kde(&[3.0, 3.0], 0.0, 5.0, 10).is_empty());
    }
}
