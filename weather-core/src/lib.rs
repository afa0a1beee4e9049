//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - API key resolution (environment, then `~/.weather_config`)
//! - The OpenWeather current-weather client and its error taxonomy
//! - The fixed-layout terminal report
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod report;

pub use client::{HttpReply, HttpTransport, ReqwestTransport, WeatherClient};
pub use config::{Config, KeySource};
pub use error::WeatherError;
pub use format::WeatherFormatter;
pub use model::{ApiKey, Units, WeatherQuery, WeatherResponse};
pub use report::weather_report;
