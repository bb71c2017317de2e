//! # Chart Rendering
//!
//! Displays a [`ChartSpec`] built by the Visualizer.
//!
//! ## Renderers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ChartSpec ──► ChartRenderer (trait)                                   │
//! │                 │                                                       │
//! │                 ├──► TerminalChartRenderer  full-screen ratatui viewer │
//! │                 │                           blocks until dismissed     │
//! │                 │                                                       │
//! │                 └──► TextChartRenderer      bars drawn with block      │
//! │                                             characters on stdout       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod terminal;
mod text;

use std::io::{self, Write};

use fruit_core::ChartSpec;

pub use terminal::TerminalChartRenderer;
pub use text::TextChartRenderer;

/// Displays charts.
///
/// `render` returns only after the chart has been shown; the menu does not
/// continue while a chart is open.
pub trait ChartRenderer {
    /// Shows `chart`. Renderers that draw inline write to `out`.
    fn render(&mut self, chart: &ChartSpec, out: &mut dyn Write) -> io::Result<()>;
}
