//! Core library for the `shipping-weather` CLI.
//!
//! This crate defines:
//! - The alarm config store and API key loader
//! - An abstraction over forecast providers, with an OpenWeather implementation
//! - Aggregation of 3-hour samples into daily high/low summaries
//!
//! It is used by `shipping-weather`, but holds no terminal or prompt logic.

pub mod aggregate;
pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod model;
pub mod provider;

pub use client::fetch_forecasts;
pub use config::ConfigStore;
pub use credentials::{default_api_key_path, load_api_key};
pub use error::{Error, Result};
pub use model::{
    AlarmThresholds, CityForecast, DailySummary, ForecastBatch, ForecastSample, RejectReason,
    Rejection, TempRange,
};
pub use provider::{CityReport, ForecastProvider, OpenWeatherProvider, ProviderReply};
