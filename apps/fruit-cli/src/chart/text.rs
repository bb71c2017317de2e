//! Plain-text chart output for pipes and dumb terminals.

use std::io::{self, Write};

use fruit_core::chart::{BarChartSpec, HistogramSpec};
use fruit_core::ChartSpec;

/// Widest bar, in characters.
const BAR_WIDTH: usize = 40;

/// Prints charts inline as horizontal bars.
#[derive(Debug, Default)]
pub struct TextChartRenderer;

impl super::ChartRenderer for TextChartRenderer {
    fn render(&mut self, chart: &ChartSpec, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", chart.title())?;
        writeln!(out, "{}", "─".repeat(chart.title().chars().count()))?;

        match chart {
            ChartSpec::Bar(spec) => write_bars(out, spec),
            ChartSpec::Histogram(spec) => write_histogram(out, spec),
        }
    }
}

fn bar(count: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let len = (count * BAR_WIDTH).div_ceil(max);
    "█".repeat(len)
}

fn write_bars(out: &mut dyn Write, spec: &BarChartSpec) -> io::Result<()> {
    let max = spec.bars.iter().map(|(_, n)| *n).max().unwrap_or(0);
    let label_width = spec
        .bars
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    for (label, count) in &spec.bars {
        writeln!(out, "{label:<label_width$} │{} {count}", bar(*count, max))?;
    }
    Ok(())
}

fn write_histogram(out: &mut dyn Write, spec: &HistogramSpec) -> io::Result<()> {
    let max = spec.histogram.max_count();
    let last = spec.histogram.bins.len().saturating_sub(1);
    let ranges: Vec<String> = spec
        .histogram
        .bins
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let close = if i == last { ']' } else { ')' };
            format!("[{}, {}{close}", trim_float(b.start), trim_float(b.end))
        })
        .collect();
    let label_width = ranges.iter().map(|r| r.chars().count()).max().unwrap_or(0);

    for (range, bin) in ranges.iter().zip(&spec.histogram.bins) {
        writeln!(out, "{range:<label_width$} │{} {}", bar(bin.count, max), bin.count)?;
    }

    if let Some(peak) = spec
        .density
        .iter()
        .copied()
        .max_by(|a, b| a.1.total_cmp(&b.1))
    {
        writeln!(out, "density peak near {}", trim_float(peak.0))?;
    }
    Ok(())
}

/// Two decimals, with trailing zeros dropped.
fn trim_float(value: f64) -> String {
    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
