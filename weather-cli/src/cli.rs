use std::path::PathBuf;

use anyhow::Context;
use cityweather_core::{Config, encode_pretty, load_weather, present, source_from_config};
use clap::{Args, Parser, Subcommand};

use crate::{render, tui};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "Weather screen for one city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the weather screen as text cards.
    Show {
        #[command(flatten)]
        source: SourceArgs,

        /// Print the decoded payload as JSON instead of cards.
        #[arg(long)]
        json: bool,
    },

    /// Open the interactive, scrollable weather screen.
    Tui {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Store the default city and endpoint.
    Configure {
        /// City code, e.g. "101010100" for Beijing. Prompted for when absent.
        city_code: Option<String>,

        /// Base URL the city code is appended to.
        #[arg(long)]
        base_url: Option<String>,

        /// Connect timeout in seconds.
        #[arg(long)]
        timeout: Option<u64>,

        /// Longest pause between response reads, in seconds.
        #[arg(long)]
        read_timeout: Option<u64>,
    },
}

#[derive(Debug, Args)]
pub struct SourceArgs {
    /// City code overriding the configured one.
    #[arg(long)]
    pub city: Option<String>,

    /// Read the payload from a saved JSON file instead of the network.
    #[arg(long, conflicts_with = "city")]
    pub file: Option<PathBuf>,
}

impl SourceArgs {
    async fn load(self) -> anyhow::Result<cityweather_core::WeatherResponse> {
        let config = Config::load()?.with_overrides(self.city, None);
        let source = source_from_config(&config, self.file)?;
        load_weather(source.as_ref()).await
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Show { source, json } => {
                let response = source.load().await?;
                if json {
                    let text =
                        encode_pretty(&response).context("Failed to encode weather as JSON")?;
                    println!("{text}");
                } else {
                    let items = present(&response);
                    log::debug!("presenting {} items", items.len());
                    print!("{}", render::to_text(&items));
                }
            }
            Command::Tui { source } => {
                let response = source.load().await?;
                let items = present(&response);
                tui::run(&items)?;
            }
            Command::Configure { city_code, base_url, timeout, read_timeout } => {
                let mut config = Config::load()?;

                let city_code = match city_code {
                    Some(code) => code,
                    None => inquire::Text::new("City code:")
                        .with_default(&config.city_code)
                        .with_help_message("e.g. 101010100 for Beijing, 101020100 for Shanghai")
                        .prompt()
                        .context("City code prompt was cancelled")?,
                };

                let city_code = city_code.trim().to_string();
                anyhow::ensure!(!city_code.is_empty(), "City code must not be empty");

                config = config.with_overrides(Some(city_code), base_url);
                if let Some(secs) = timeout {
                    config.connect_timeout_secs = secs;
                }
                if let Some(secs) = read_timeout {
                    config.read_timeout_secs = secs;
                }

                let path = config.save()?;
                println!("Saved configuration to {}", path.display());
                println!("Weather will be fetched from {}", config.city_url());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn show_accepts_file() {
        let cli = Cli::try_parse_from(["cityweather", "show", "--file", "beijing.json", "--json"])
            .expect("arguments should parse");

        let Command::Show { source, json } = cli.command else {
            panic!("expected show command");
        };
        assert!(json);
        assert_eq!(source.file, Some(PathBuf::from("beijing.json")));
        assert_eq!(source.city, None);
    }

    #[test]
    fn city_and_file_conflict() {
        let res = Cli::try_parse_from([
            "cityweather",
            "tui",
            "--city",
            "101010100",
            "--file",
            "x.json",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn configure_code_is_optional() {
        let cli = Cli::try_parse_from([
            "cityweather",
            "configure",
            "--timeout",
            "3",
            "--read-timeout",
            "20",
        ])
        .unwrap();
        let Command::Configure { city_code, timeout, read_timeout, .. } = cli.command else {
            panic!("expected configure command");
        };
        assert_eq!(city_code, None);
        assert_eq!(timeout, Some(3));
        assert_eq!(read_timeout, Some(20));
    }
}
