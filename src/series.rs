//! Series Generator
//!
//! Turns the catalog's growth functions into chartable data:
//! - full per-`n` series for the growth curve
//! - fixed-sample rows for the bar comparison
//! - per-`n` breakdown with growth factors for a single class

use std::collections::BTreeMap;

use crate::catalog::Complexity;

/// Hard upper bound on the input-size range.
pub const MAX_N_LIMIT: u32 = 100;

/// The mathematical breakdown stops here regardless of `max_n`.
pub const BREAKDOWN_LIMIT: u32 = 15;

/// Fixed comparison samples; the clamped `max_n` is appended as a fifth.
pub const COMPARISON_SAMPLES: [u32; 4] = [5, 10, 20, 50];

/// One evaluated point: every catalog function at a single `n`.
#[derive(Debug, Clone)]
pub struct SeriesPoint {
    pub n: u32,
    pub values: BTreeMap<Complexity, f64>,
}

/// One row of the comparison table: visible classes at a sample size.
#[derive(Debug, Clone)]
pub struct ComparisonRow {
    pub label: String,
    pub n: u32,
    pub values: Vec<(Complexity, f64)>,
}

/// One row of the mathematical breakdown.
#[derive(Debug, Clone)]
pub struct BreakdownRow {
    pub n: u32,
    pub value: f64,
    /// Ratio to the previous row's value. `None` on the baseline row.
    pub growth_factor: Option<f64>,
}

/// Clamp a requested range endpoint into `[1, 100]`.
pub fn clamp_max_n(max_n: u32) -> u32 {
    max_n.clamp(1, MAX_N_LIMIT)
}

/// Non-finite evaluations are coerced to 0 to keep charting stable.
fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Evaluate every catalog function for `n = 1..=clamp(max_n)`.
pub fn generate_series(max_n: u32) -> Vec<SeriesPoint> {
    let max_n = clamp_max_n(max_n);
    (1..=max_n)
        .map(|n| {
            let values = Complexity::ALL
                .iter()
                .map(|&class| (class, sanitize(class.eval(n))))
                .collect();
            SeriesPoint { n, values }
        })
        .collect()
}

/// Evaluate the visible classes at the fixed sample set.
///
/// The base samples are used as-is even when they exceed `max_n`; the
/// fifth sample is the clamped `max_n` and may duplicate an earlier row.
pub fn comparison_rows(max_n: u32, visible: &[Complexity]) -> Vec<ComparisonRow> {
    let mut samples: Vec<u32> = COMPARISON_SAMPLES.to_vec();
    samples.push(clamp_max_n(max_n));

    samples
        .into_iter()
        .map(|n| ComparisonRow {
            label: format!("n={}", n),
            n,
            values: visible
                .iter()
                .map(|&class| (class, sanitize(class.eval(n))))
                .collect(),
        })
        .collect()
}

/// Per-`n` values and growth factors for a single class, for
/// `n = 1..=min(clamp(max_n), 15)`. The first row is the baseline.
pub fn breakdown(class: Complexity, max_n: u32) -> Vec<BreakdownRow> {
    let upper = clamp_max_n(max_n).min(BREAKDOWN_LIMIT);
    let mut rows = Vec::with_capacity(upper as usize);
    let mut prev: Option<f64> = None;

    for n in 1..=upper {
        let value = sanitize(class.eval(n));
        rows.push(BreakdownRow {
            n,
            value,
            growth_factor: prev.map(|p| value / p),
        });
        prev = Some(value);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_clamped_and_finite() {
        let series = generate_series(500);
        assert_eq!(series.len(), 100);
        assert_eq!(series.first().unwrap().n, 1);
        assert_eq!(series.last().unwrap().n, 100);

        for point in &series {
            assert_eq!(point.values.len(), Complexity::ALL.len());
            for (&class, &value) in &point.values {
                assert!(value.is_finite(), "{} at n={}", class.name(), point.n);
                assert!(value >= 0.0, "{} at n={}", class.name(), point.n);
            }
        }
    }

    #[test]
    fn test_series_lower_clamp() {
        let series = generate_series(0);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].n, 1);
    }

    #[test]
    fn test_comparison_sample_labels() {
        let rows = comparison_rows(20, &[Complexity::Linear]);
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["n=5", "n=10", "n=20", "n=50", "n=20"]);
    }

    #[test]
    fn test_comparison_only_visible() {
        let visible = [Complexity::Constant, Complexity::Quadratic];
        let rows = comparison_rows(120, &visible);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[4].n, 100);
        for row in &rows {
            assert_eq!(row.values.len(), 2);
            assert_eq!(row.values[0].0, Complexity::Constant);
            assert_eq!(row.values[1].0, Complexity::Quadratic);
            assert_eq!(row.values[1].1, (row.n as f64) * (row.n as f64));
        }
    }

    #[test]
    fn test_breakdown_quadratic_growth_factor() {
        let rows = breakdown(Complexity::Quadratic, 10);
        assert_eq!(rows.len(), 10);
        assert!(rows[0].growth_factor.is_none());
        assert_eq!(rows[1].growth_factor, Some(4.0)); // 4 / 1
        assert_eq!(rows[2].growth_factor, Some(2.25)); // 9 / 4
    }

    #[test]
    fn test_breakdown_capped_at_fifteen() {
        let rows = breakdown(Complexity::Linear, 80);
        assert_eq!(rows.len(), 15);
        assert_eq!(rows.last().unwrap().n, 15);
    }

    #[test]
    fn test_breakdown_log_baseline_ratio_not_coerced() {
        // log2(1) == 0, so the n=2 ratio divides by zero; the breakdown
        // reports it as-is and the view layer renders it as a dash.
        let rows = breakdown(Complexity::Logarithmic, 5);
        assert_eq!(rows[0].value, 0.0);
        assert!(rows[1].growth_factor.unwrap().is_infinite());
    }
}
