//! # fruit-cli: Interactive Menu Client
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr)
//! 2. Load configuration from the environment
//! 3. Connect to MySQL and verify the connection (fatal on failure)
//! 4. Run the menu loop with the fruit repository injected
//! 5. Close the pool, whatever path ended the loop
//!
//! ## Module Organization
//! - [`config`] - Environment configuration
//! - [`menu`] - Menu state machine
//! - [`actions`] - The five working menu options
//! - [`display`] - Table printing
//! - [`chart`] - Chart renderers
//! - [`prompt`] - Line-based console I/O
//! - [`error`] - Action error type

pub mod actions;
pub mod chart;
pub mod config;
pub mod display;
pub mod error;
pub mod menu;
pub mod prompt;

use std::io::{self, IsTerminal};

use fruit_db::Database;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::chart::{ChartRenderer, TerminalChartRenderer, TextChartRenderer};
use crate::config::{ChartMode, CliConfig, DEFAULT_LOG_FILTER};
use crate::prompt::Console;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=fruit_db=trace` - Trace the database layer only
/// - Default: [`DEFAULT_LOG_FILTER`]
///
/// Logs go to stderr so they never interleave with the menu.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Picks the chart renderer for `mode`.
pub fn chart_renderer(mode: ChartMode) -> Box<dyn ChartRenderer> {
    let full_screen = match mode {
        ChartMode::Terminal => true,
        ChartMode::Text => false,
        ChartMode::Auto => io::stdout().is_terminal() && io::stdin().is_terminal(),
    };
    debug!(?mode, full_screen, "Chart renderer selected");

    if full_screen {
        Box::new(TerminalChartRenderer)
    } else {
        Box::new(TextChartRenderer)
    }
}

/// Runs the interactive session on stdin/stdout against `db`.
///
/// The caller owns `db` and closes it afterwards.
pub async fn run_session(db: &Database, config: &CliConfig) -> io::Result<()> {
    let store = db.fruits();
    let mut renderer = chart_renderer(config.chart);
    let mut console = Console::new(io::stdin().lock(), io::stdout());

    menu::run(&store, &mut console, renderer.as_mut()).await
}
