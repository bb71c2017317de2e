//! Option 4: chart the distribution of a chosen column.
//!
//! Every column except the identifier is offered. Text columns become a bar
//! chart of value counts; numeric columns become a histogram with a density
//! curve. The renderer blocks until the chart is dismissed.

use std::io::{BufRead, Write};

use fruit_core::chart::build_chart;
use fruit_core::validation::parse_choice;
use fruit_core::{ChartSpec, CoreError};
use fruit_db::FruitStore;
use tracing::debug;

use super::print_column_choices;
use crate::chart::ChartRenderer;
use crate::error::{ActionError, ActionResult};
use crate::prompt::Console;

/// Lists chartable columns, reads a 1-based choice and shows the chart.
pub async fn visualize<S, R, W>(
    store: &S,
    console: &mut Console<R, W>,
    renderer: &mut dyn ChartRenderer,
) -> ActionResult<()>
where
    S: FruitStore,
    R: BufRead,
    W: Write,
{
    let snapshot = store.fetch_all().await?;
    let choices = snapshot.chartable_columns();
    if choices.is_empty() {
        return Err(CoreError::NoChartableColumns.into());
    }

    print_column_choices(console.output(), "Columns available:", &snapshot, &choices)?;

    let input = console.ask("Choose a column to visualize (enter a number): ")?;
    let index = choices[parse_choice(&input, choices.len())?];

    let chart = build_chart(&snapshot, index)?;
    debug!(column = %chart.column(), categorical = chart.is_categorical(), "Chart built");

    let out = console.output();
    writeln!(out)?;
    writeln!(out, "{}", describe(&chart))?;

    renderer.render(&chart, out).map_err(ActionError::Render)
}

fn describe(chart: &ChartSpec) -> String {
    match chart {
        ChartSpec::Bar(_) => format!("Category distribution in column '{}'", chart.column()),
        ChartSpec::Histogram(_) => format!("Value distribution in column '{}'", chart.column()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::{console, output, MemoryStore};
    use crate::chart::testing::RecordingRenderer;
    use fruit_core::ValidationError;
    use std::io;

    #[tokio::test]
    async fn test_text_column_takes_bar_path() {
        let store = MemoryStore::sample();
        let mut renderer = RecordingRenderer::default();
        // choices: 1. name, 2. category, 3. price, 4. stock
        let mut console = console("2\n");

        visualize(&store, &mut console, &mut renderer).await.unwrap();

        assert_eq!(renderer.charts.len(), 1);
        let ChartSpec::Bar(spec) = &renderer.charts[0] else {
            panic!("expected a bar chart");
        };
        assert_eq!(spec.title, "Distribution of category");
        assert_eq!(
            spec.bars,
            vec![("Tropical".to_string(), 2), ("Pome".to_string(), 1)]
        );

        let text = output(console);
        assert!(text.contains("1. name"));
        assert!(!text.contains(". id"));
        assert!(text.contains("Category distribution in column 'category'"));
    }

    #[tokio::test]
    async fn test_numeric_column_takes_histogram_path() {
        let store = MemoryStore::sample();
        let mut renderer = RecordingRenderer::default();
        let mut console = console("3\n");

        visualize(&store, &mut console, &mut renderer).await.unwrap();

        let ChartSpec::Histogram(spec) = &renderer.charts[0] else {
            panic!("expected a histogram");
        };
        assert_eq!(spec.column, "price");
        assert_eq!(spec.histogram.total(), 3);
        assert!(!spec.density.is_empty());
        assert!(output(console).contains("Value distribution in column 'price'"));
    }

    #[tokio::test]
    async fn test_invalid_index_opens_no_chart() {
        let store = MemoryStore::sample();

        for script in ["0\n", "5\n", "x\n"] {
            let mut renderer = RecordingRenderer::default();
            let mut console = console(script);

            let err = visualize(&store, &mut console, &mut renderer)
                .await
                .unwrap_err();

            assert!(matches!(
                err,
                ActionError::Validation(ValidationError::InvalidChoice { .. })
            ));
            assert!(renderer.charts.is_empty());
        }
    }

    #[tokio::test]
    async fn test_empty_table_opens_no_chart() {
        let store = MemoryStore::default();
        let mut renderer = RecordingRenderer::default();
        let mut console = console("1\n");

        let err = visualize(&store, &mut console, &mut renderer)
            .await
            .unwrap_err();

        assert!(matches!(err, ActionError::Core(CoreError::NoData { .. })));
        assert!(renderer.charts.is_empty());
    }

    #[tokio::test]
    async fn test_renderer_failure_is_reported() {
        struct Broken;
        impl ChartRenderer for Broken {
            fn render(&mut self, _: &ChartSpec, _: &mut dyn Write) -> io::Result<()> {
                Err(io::Error::new(io::ErrorKind::Other, "no terminal"))
            }
        }

        let store = MemoryStore::sample();
        let mut console = console("1\n");

        let err = visualize(&store, &mut console, &mut Broken).await.unwrap_err();
        assert!(matches!(err, ActionError::Render(_)));
        assert!(err.is_recoverable());
    }
}
