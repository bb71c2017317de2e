//! # Chart Specifications
//!
//! Turns one snapshot column into a renderer-independent chart.
//!
//! ## Branch Selection
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Selected column                                                       │
//! │       │                                                                 │
//! │       ├── Text     ──► value_counts ──► ChartSpec::Bar                 │
//! │       │                                                                 │
//! │       └── Integer  ──► histogram + density ──► ChartSpec::Histogram    │
//! │           Float                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The density curve is scaled from probability density to expected bin
//! counts (`density * n * bin_width`) so it overlays the bars directly.

use crate::error::{CoreError, CoreResult};
use crate::snapshot::TableSnapshot;
use crate::stats::{self, Histogram};

/// Number of points sampled along the density curve.
pub const DENSITY_POINTS: usize = 200;

/// Categorical bar chart: one bar per distinct value.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartSpec {
    pub title: String,
    pub column: String,
    /// (label, frequency), most frequent first.
    pub bars: Vec<(String, usize)>,
}

/// Numeric histogram with an overlaid density curve.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSpec {
    pub title: String,
    pub column: String,
    pub histogram: Histogram,
    /// (x, expected count). Empty when the density is undefined.
    pub density: Vec<(f64, f64)>,
}

/// A chart ready to hand to a renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    Bar(BarChartSpec),
    Histogram(HistogramSpec),
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::Bar(spec) => &spec.title,
            ChartSpec::Histogram(spec) => &spec.title,
        }
    }

    pub fn column(&self) -> &str {
        match self {
            ChartSpec::Bar(spec) => &spec.column,
            ChartSpec::Histogram(spec) => &spec.column,
        }
    }

    pub fn is_categorical(&self) -> bool {
        matches!(self, ChartSpec::Bar(_))
    }
}

/// Chart title for a column.
pub fn chart_title(column: &str) -> String {
    format!("Distribution of {column}")
}

/// Builds the chart for column `index` of `snapshot`.
///
/// ## Errors
/// - [`CoreError::ColumnOutOfRange`] when `index` is not a column
/// - [`CoreError::NoData`] when the column has no non-null values
pub fn build_chart(snapshot: &TableSnapshot, index: usize) -> CoreResult<ChartSpec> {
    let column = snapshot
        .columns()
        .get(index)
        .ok_or(CoreError::ColumnOutOfRange {
            index,
            count: snapshot.columns().len(),
        })?;

    let no_data = || CoreError::NoData {
        column: column.name.clone(),
    };

    if !column.column_type.is_numeric() {
        let labels = snapshot.labels(index);
        if labels.is_empty() {
            return Err(no_data());
        }
        return Ok(ChartSpec::Bar(BarChartSpec {
            title: chart_title(&column.name),
            column: column.name.clone(),
            bars: stats::value_counts(&labels),
        }));
    }

    let values = snapshot.numeric_values(index);
    let histogram = stats::histogram(&values).ok_or_else(no_data)?;

    let (from, to) = histogram.range();
    let scale = values.len() as f64 * histogram.bin_width();
    let density = stats::gaussian_kde(&values, from, to, DENSITY_POINTS)
        .into_iter()
        .map(|(x, y)| (x, y * scale))
        .collect();

    Ok(ChartSpec::Histogram(HistogramSpec {
        title: chart_title(&column.name),
        column: column.name.clone(),
        histogram,
        density,
    }))
}

// =============================================================================
// Unit Tests
// =============================================================================
