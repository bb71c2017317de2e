//! CLI configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Connection settings are documented on [`DbConfig`]; this module
//! adds the few knobs that only matter to the interactive client.
//!
//! | Variable      | Default | Values                        |
//! |---------------|---------|-------------------------------|
//! | `FRUIT_CHART` | `auto`  | `auto`, `terminal`, `text`    |
//! | `RUST_LOG`    | see [`DEFAULT_LOG_FILTER`]              |

use std::env;

use fruit_db::{ConfigError, DbConfig};

pub const ENV_CHART: &str = "FRUIT_CHART";

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn,fruit_cli=info,fruit_db=info,sqlx=warn";

/// How the Visualizer displays charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartMode {
    /// Full-screen viewer when stdout is a terminal, text otherwise.
    #[default]
    Auto,
    /// Always open the full-screen viewer.
    Terminal,
    /// Always print the chart as text.
    Text,
}

impl ChartMode {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(ChartMode::Auto),
            "terminal" | "tui" => Some(ChartMode::Terminal),
            "text" | "plain" => Some(ChartMode::Text),
            _ => None,
        }
    }
}

/// Everything the client reads at startup.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Connection settings.
    pub database: DbConfig,

    /// Chart display mode.
    pub chart: ChartMode,
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = DbConfig::from_lookup(&lookup)?;

        let chart = match lookup(ENV_CHART) {
            Some(value) => ChartMode::parse(&value).ok_or(ConfigError::InvalidValue {
                key: ENV_CHART.to_string(),
                value,
            })?,
            None => ChartMode::default(),
        };

        Ok(CliConfig { database, chart })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fruit_db::config::ENV_USER;

    #[test]
    fn test_chart_mode_defaults_to_auto() {
        let config = CliConfig::from_lookup(|key| (key == ENV_USER).then(|| "root".to_string()))
            .unwrap();
        assert_eq!(config.chart, ChartMode::Auto);
        assert_eq!(config.database.username, "root");
    }

    #[test]
    fn test_chart_mode_override() {
        let config = CliConfig::from_lookup(|key| match key {
            ENV_USER => Some("root".to_string()),
            ENV_CHART => Some("Text".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.chart, ChartMode::Text);
    }

    #[test]
    fn test_invalid_chart_mode() {
        let err = CliConfig::from_lookup(|key| match key {
            ENV_USER => Some("root".to_string()),
            ENV_CHART => Some("svg".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: ENV_CHART.to_string(),
                value: "svg".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_user_is_reported() {
        assert!(matches!(
            CliConfig::from_lookup(|_| None),
            Err(ConfigError::MissingRequired(_))
        ));
    }
}
