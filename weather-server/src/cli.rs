use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inquire::{CustomType, CustomUserError, Text, validator::Validation};
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use std::path::PathBuf;

use weather_core::{AlertService, Config};

use crate::server::WeatherServer;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-alerts", version, about = "NWS weather alerts as an MCP tool")]
pub struct Cli {
    /// Use this config file instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the `get_alerts` tool over stdio (default).
    Serve,

    /// Print active alerts for a state and exit.
    Alerts {
        /// Two-letter state code, e.g. "CA" or "NY".
        state: String,
    },

    /// Interactively edit the configuration file.
    Configure,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let command = self.command.unwrap_or(Command::Serve);

        match command {
            Command::Serve => {
                let config = load_config(self.config.as_deref())?;
                serve(config).await
            }
            Command::Alerts { state } => {
                let config = load_config(self.config.as_deref())?;
                let text = AlertService::from_config(config).get_alerts(&state).await;
                println!("{text}");
                Ok(())
            }
            Command::Configure => configure(self.config),
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn serve(config: Config) -> Result<()> {
    tracing::info!(api_base = %config.api_base, "Starting weather MCP server (stdio)");

    let server = WeatherServer::new(AlertService::from_config(config));
    let service = server.serve(stdio()).await.context("Failed to start MCP service")?;
    service.waiting().await.context("MCP service terminated abnormally")?;

    tracing::info!("Weather MCP server stopped");
    Ok(())
}

fn configure(path: Option<PathBuf>) -> Result<()> {
    let mut config = load_config(path.as_deref())?;

    config.api_base = Text::new("NWS API base URL:")
        .with_default(&config.api_base)
        .prompt()
        .context("Failed to read API base URL")?;

    config.user_agent = Text::new("User-Agent header:")
        .with_default(&config.user_agent)
        .prompt()
        .context("Failed to read User-Agent")?;

    config.accept = Text::new("Accept header:")
        .with_default(&config.accept)
        .prompt()
        .context("Failed to read Accept header")?;

    config.timeout_secs = CustomType::<u64>::new("Request timeout (seconds):")
        .with_default(config.timeout_secs)
        .with_error_message("Please enter a whole number of seconds")
        .with_validator(|secs: &u64| -> Result<Validation, CustomUserError> {
            Ok(if *secs == 0 {
                Validation::Invalid("Timeout must be at least one second".into())
            } else {
                Validation::Valid
            })
        })
        .prompt()
        .context("Failed to read timeout")?;

    let saved_to = match path {
        Some(path) => {
            config.save_to(&path)?;
            path
        }
        None => config.save()?,
    };

    println!("Configuration saved to {}", saved_to.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["weather-alerts"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn alerts_takes_state() {
        let cli = Cli::try_parse_from(["weather-alerts", "alerts", "CA", "--verbose"]).unwrap();
        match cli.command {
            Some(Command::Alerts { state }) => assert_eq!(state, "CA"),
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(cli.verbose);
    }

    #[test]
    fn global_config_flag() {
        let cli =
            Cli::try_parse_from(["weather-alerts", "serve", "--config", "/tmp/alerts.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/alerts.toml")));
        assert!(matches!(cli.command, Some(Command::Serve)));
    }

    #[test]
    fn alerts_requires_state() {
        assert!(Cli::try_parse_from(["weather-alerts", "alerts"]).is_err());
    }
}
