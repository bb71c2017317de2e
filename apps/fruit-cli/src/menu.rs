//! # Main Menu
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │        ┌──────────────┐  1..5   ┌──────────────┐                        │
//! │   ───► │   MainMenu   │ ──────► │   Running    │                        │
//! │        │              │ ◄────── │  (action)    │                        │
//! │        └──────┬───────┘  done / └──────────────┘                        │
//! │          ▲    │          error                                          │
//! │  invalid │    │ 6 or EOF                                                │
//! │          └────┤                                                         │
//! │               ▼                                                         │
//! │        ┌──────────────┐                                                 │
//! │        │    Exited    │                                                 │
//! │        └──────────────┘                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Action errors are printed and the menu is shown again. Only end of input
//! and a broken stdout leave the loop early.

use std::io::{self, BufRead, Write};

use fruit_db::FruitStore;
use tracing::{debug, info, warn};

use crate::actions::{insert::insert, list::list, mean::mean, search::search, visualize::visualize};
use crate::chart::ChartRenderer;
use crate::error::ActionError;
use crate::prompt::Console;

/// One of the six menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    List,
    Insert,
    Mean,
    Visualize,
    Search,
    Exit,
}

impl MenuChoice {
    /// Options in menu order.
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::List,
        MenuChoice::Insert,
        MenuChoice::Mean,
        MenuChoice::Visualize,
        MenuChoice::Search,
        MenuChoice::Exit,
    ];

    /// Parses the option number typed at the prompt.
    pub fn parse(input: &str) -> Option<Self> {
        let number: usize = input.trim().parse().ok()?;
        Self::ALL.get(number.checked_sub(1)?).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::List => "Show fruit data",
            MenuChoice::Insert => "Add a new fruit",
            MenuChoice::Mean => "Mean of a numeric column",
            MenuChoice::Visualize => "Visualize a column",
            MenuChoice::Search => "Search fruits by name",
            MenuChoice::Exit => "Exit",
        }
    }
}

fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== MAIN MENU ===")?;
    for (position, choice) in MenuChoice::ALL.iter().enumerate() {
        writeln!(out, "{}. {}", position + 1, choice.label())?;
    }
    Ok(())
}

/// Runs the menu until the user exits or input ends.
pub async fn run<S, R, W>(
    store: &S,
    console: &mut Console<R, W>,
    renderer: &mut dyn ChartRenderer,
) -> io::Result<()>
where
    S: FruitStore,
    R: BufRead,
    W: Write,
{
    let prompt = format!("Enter your choice (1-{}): ", MenuChoice::ALL.len());

    loop {
        print_menu(console.output())?;

        let Some(line) = console.prompt(&prompt)? else {
            writeln!(console.output())?;
            info!("Input closed, leaving menu");
            break;
        };

        let Some(choice) = MenuChoice::parse(&line) else {
            writeln!(
                console.output(),
                "Invalid choice. Please enter 1-{}.",
                MenuChoice::ALL.len()
            )?;
            continue;
        };
        debug!(?choice, "Menu selection");

        let result = match choice {
            MenuChoice::List => list(store, console.output()).await.map(drop),
            MenuChoice::Insert => insert(store, console).await.map(drop),
            MenuChoice::Mean => mean(store, console).await.map(drop),
            MenuChoice::Visualize => visualize(store, console, renderer).await,
            MenuChoice::Search => search(store, console).await.map(drop),
            MenuChoice::Exit => {
                writeln!(console.output(), "Thank you, goodbye.")?;
                break;
            }
        };

        match result {
            Ok(()) => {}
            Err(e) if e.is_recoverable() => {
                warn!(?choice, error = %e, "Menu action failed");
                writeln!(console.output(), "Error: {e}")?;
            }
            Err(ActionError::Io(e)) => return Err(e),
            Err(_) => {
                info!("Input closed during an action, leaving menu");
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::{console, output, MemoryStore};
    use crate::chart::testing::RecordingRenderer;

    async fn run_script(store: &MemoryStore, script: &str) -> (String, RecordingRenderer) {
        let mut renderer = RecordingRenderer::default();
        let mut console = console(script);
        run(store, &mut console, &mut renderer).await.unwrap();
        (output(console), renderer)
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::List));
        assert_eq!(MenuChoice::parse(" 6 "), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("7"), None);
        assert_eq!(MenuChoice::parse("list"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[tokio::test]
    async fn test_exit_stops_prompting() {
        let store = MemoryStore::sample();
        let (text, _) = run_script(&store, "6\n1\n").await;

        assert_eq!(text.matches("Enter your choice").count(), 1);
        assert!(text.contains("Thank you, goodbye."));
        assert!(!text.contains("rows in set"));
    }

    #[tokio::test]
    async fn test_invalid_choice_loops() {
        let store = MemoryStore::sample();
        let (text, _) = run_script(&store, "9\nabc\n6\n").await;

        assert_eq!(text.matches("Invalid choice. Please enter 1-6.").count(), 2);
        assert_eq!(text.matches("Enter your choice").count(), 3);
    }

    #[tokio::test]
    async fn test_end_of_input_exits() {
        let store = MemoryStore::sample();
        let (text, _) = run_script(&store, "").await;

        assert_eq!(text.matches("=== MAIN MENU ===").count(), 1);
        assert!(!text.contains("Thank you"));
    }

    #[tokio::test]
    async fn test_insert_then_list() {
        let store = MemoryStore::sample();
        let (text, _) = run_script(&store, "2\nMango\nTropical\n15000\n50\n1\n6\n").await;

        assert!(text.contains("New fruit ID: 4"));
        assert!(text.contains("Mango"));
        assert!(text.contains("4 rows in set"));
    }

    #[tokio::test]
    async fn test_action_error_returns_to_menu() {
        let store = MemoryStore::sample();
        let (text, _) = run_script(&store, "2\nMango\nTropical\nabc\n50\n3\n9\n6\n").await;

        assert!(text.contains("Error: price and stock must be numbers"));
        assert!(text.contains("Error: invalid choice"));
        assert!(text.contains("Thank you, goodbye."));
        assert_eq!(store.fruits().len(), 3);
    }

    #[tokio::test]
    async fn test_database_error_returns_to_menu() {
        let store = MemoryStore::sample();
        store.fail_queries();
        let (text, _) = run_script(&store, "1\n6\n").await;

        assert!(text.contains("Error: Database error:"));
        assert!(text.contains("Thank you, goodbye."));
    }

    #[tokio::test]
    async fn test_visualize_and_search_from_menu() {
        let store = MemoryStore::sample();
        let (text, renderer) = run_script(&store, "4\n2\n5\nppl\n5\nkiwi\n6\n").await;

        assert_eq!(renderer.charts.len(), 1);
        assert!(renderer.charts[0].is_categorical());
        assert!(text.contains("2 rows in set"));
        assert!(text.contains("Fruit 'kiwi' not found"));
    }

    #[tokio::test]
    async fn test_input_closed_mid_action_exits() {
        let store = MemoryStore::sample();
        let (text, _) = run_script(&store, "2\nMango\n").await;

        assert_eq!(text.matches("=== MAIN MENU ===").count(), 1);
        assert_eq!(store.fruits().len(), 3);
    }
}
