//! Full-screen chart viewer.
//!
//! Switches the terminal to raw mode on the alternate screen, draws the chart
//! with ratatui and waits for `q`, `Esc` or `Enter`. The terminal is restored
//! on every exit path, including draw errors.
//!
//! Categorical charts are drawn as horizontal bars so long labels stay
//! readable. Histograms are drawn as a bin outline with the density curve
//! on the same axes.

use std::io::{self, Write};

use crossterm::cursor;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use fruit_core::chart::{BarChartSpec, HistogramSpec};
use fruit_core::stats::Histogram;
use fruit_core::ChartSpec;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Chart, Dataset, GraphType, Paragraph,
};
use ratatui::{Frame, Terminal};
use tracing::debug;

use super::ChartRenderer;

const HINT: &str = "q / Esc / Enter: back to menu";

/// Modal ratatui chart viewer.
#[derive(Debug, Default)]
pub struct TerminalChartRenderer;

impl ChartRenderer for TerminalChartRenderer {
    fn render(&mut self, chart: &ChartSpec, out: &mut dyn Write) -> io::Result<()> {
        out.flush()?;
        debug!(title = %chart.title(), "Opening chart viewer");

        enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }

        let shown = show(chart);
        let restored = restore();
        shown.and(restored)
    }
}

fn show(chart: &ChartSpec) -> io::Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.hide_cursor()?;

    loop {
        terminal.draw(|frame| draw(frame, chart))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press
                && matches!(
                    key.code,
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc | KeyCode::Enter
                )
            {
                return Ok(());
            }
        }
    }
}

fn restore() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    raw.and(screen)
}

// =============================================================================
// Drawing
// =============================================================================

fn draw(frame: &mut Frame, chart: &ChartSpec) {
    let [body, footer] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(frame.area());

    match chart {
        ChartSpec::Bar(spec) => draw_bars(frame, body, spec),
        ChartSpec::Histogram(spec) => draw_histogram(frame, body, spec),
    }

    frame.render_widget(
        Paragraph::new(HINT).style(Style::default().fg(Color::DarkGray)),
        footer,
    );
}

fn draw_bars(frame: &mut Frame, area: Rect, spec: &BarChartSpec) {
    let bars: Vec<Bar> = spec
        .bars
        .iter()
        .map(|(label, count)| {
            Bar::default()
                .label(Line::from(label.clone()))
                .value(*count as u64)
                .text_value(count.to_string())
        })
        .collect();

    let chart = BarChart::default()
        .block(Block::bordered().title(spec.title.as_str()))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

fn draw_histogram(frame: &mut Frame, area: Rect, spec: &HistogramSpec) {
    let outline = outline(&spec.histogram);
    let (x_min, x_max) = spec.histogram.range();
    let peak = spec
        .density
        .iter()
        .map(|(_, y)| *y)
        .fold(spec.histogram.max_count() as f64, f64::max);
    let y_max = (peak * 1.1).max(1.0);

    let mut datasets = vec![Dataset::default()
        .name("count")
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&outline)];

    if !spec.density.is_empty() {
        datasets.push(
            Dataset::default()
                .name("density")
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Yellow))
                .data(&spec.density),
        );
    }

    let chart = Chart::new(datasets)
        .block(Block::bordered().title(spec.title.as_str()))
        .x_axis(
            Axis::default()
                .title(spec.column.as_str())
                .bounds([x_min, x_max])
                .labels(ticks(x_min, x_max)),
        )
        .y_axis(
            Axis::default()
                .title("Count")
                .bounds([0.0, y_max])
                .labels(ticks(0.0, y_max)),
        );

    frame.render_widget(chart, area);
}

/// Step outline of the bins: up each left edge, across, down each right edge.
fn outline(histogram: &Histogram) -> Vec<(f64, f64)> {
    histogram
        .bins
        .iter()
        .flat_map(|b| {
            let height = b.count as f64;
            [
                (b.start, 0.0),
                (b.start, height),
                (b.end, height),
                (b.end, 0.0),
            ]
        })
        .collect()
}

fn ticks(min: f64, max: f64) -> Vec<Span<'static>> {
    [min, (min + max) / 2.0, max]
        .iter()
        .map(|v| Span::raw(format!("{v:.0}")))
        .collect()
}
