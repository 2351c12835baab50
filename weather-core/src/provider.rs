use std::fmt::Debug;

use async_trait::async_trait;

use crate::{error::Result, model::ForecastSample};

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// City name and raw samples for a postal code the API recognised.
#[derive(Debug, Clone, PartialEq)]
pub struct CityReport {
    pub city_name: String,
    pub samples: Vec<ForecastSample>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProviderReply {
    Found(CityReport),
    /// Any non-200 answer; the postal code is treated as invalid.
    NotFound { status: u16 },
}

/// Source of 3-hour forecast samples for a single postal code.
///
/// Transport failures and undecodable bodies are errors; a rejected postal
/// code is a normal [`ProviderReply::NotFound`].
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn fetch_city(&self, postal_code: &str) -> Result<ProviderReply>;
}
