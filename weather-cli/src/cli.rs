use anyhow::anyhow;
use clap::Parser;
use std::ffi::OsStr;
use inquire::{Password, PasswordDisplayMode};
use tracing::debug;
use weather_core::{
    ApiKey, Config, WeatherClient,
    config::{API_KEY_ENV, CONFIG_FILE_NAME},
    weather_report,
};

pub const USAGE: &str = "\
Weather App - Terminal weather information powered by OpenWeather API

Usage:
  weather <city_name>
  weather <city_name,country_code>
  weather --configure

Examples:
  weather \"San Francisco\"
  weather \"London,UK\"
  weather Tokyo
  weather New York

Options:
  --help, -h       Show this help message
  --configure      Store your API key in ~/.weather_config
  --version, -V    Show version

Configuration:
  Set your OpenWeather API key using one of these methods:
  1. Environment variable: export OPENWEATHER_API_KEY=your_api_key
  2. Config file: echo \"your_api_key\" > ~/.weather_config

Get your free API key at: https://openweathermap.org/api
";

/// Top-level CLI struct.
///
/// Help is handled by hand so that `-h` anywhere, or no city at all, prints [`USAGE`].
#[derive(Debug, Parser)]
#[command(
    name = "weather",
    version,
    about = "Weather CLI",
    disable_help_flag = true,
    args_override_self = true
)]
pub struct Cli {
    /// Show usage.
    #[arg(short, long)]
    pub help: bool,

    /// Prompt for an OpenWeather API key and store it.
    #[arg(long)]
    pub configure: bool,

    /// City name, optionally followed by ",<country code>". Words are joined with spaces.
    pub city: Vec<String>,
}

impl Cli {
    /// City words joined by single spaces, `None` when nothing was given.
    pub fn city(&self) -> Option<String> {
        if self.city.is_empty() { None } else { Some(self.city.join(" ")) }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        if self.help {
            print!("{USAGE}");
            return Ok(());
        }

        if self.configure {
            return configure();
        }

        let Some(city) = self.city() else {
            print!("{USAGE}");
            return Ok(());
        };

        let config = Config::load();
        let api_key = match config.api_key() {
            Ok(key) => key.clone(),
            Err(err) => {
                println!("Error: {err}");
                println!(
                    "Please set {API_KEY_ENV} environment variable or create a {CONFIG_FILE_NAME} file"
                );
                return Ok(());
            }
        };

        debug!(source = ?config.key_source(), "resolved API key");

        let client = WeatherClient::new(api_key);
        println!("{}", weather_report(&client, &city).await);

        Ok(())
    }
}

/// `-h` or `--help` anywhere in the raw arguments, even after `--` or next to
/// arguments clap would reject.
pub fn wants_help<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    args.into_iter().any(|arg| {
        let arg = arg.as_ref();
        arg == "-h" || arg == "--help"
    })
}

/// First line of clap's rendered error, without its `error: ` prefix.
pub fn parse_failure(err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    let first = rendered.lines().next().unwrap_or_default();

    first.strip_prefix("error: ").unwrap_or(first).to_string()
}

fn configure() -> anyhow::Result<()> {
    let raw = Password::new("OpenWeather API key:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .with_help_message("Get a free key at https://openweathermap.org/api")
        .prompt()?;

    let key = ApiKey::parse(&raw).ok_or_else(|| anyhow!("API key must not be empty"))?;
    let path = Config::save_api_key(&key)?;

    println!("Saved API key to {}", path.display());
    Ok(())
}
