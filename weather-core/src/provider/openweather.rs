use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{
    error::{Error, Result},
    model::ForecastSample,
};

use super::{CityReport, ForecastProvider, ProviderReply};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
pub const DEFAULT_COUNTRY: &str = "us";

const DT_TXT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// OpenWeather 5 day / 3 hour forecast, queried by postal code.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    country_code: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, country_code: String) -> Self {
        Self {
            api_key,
            country_code,
            base_url: DEFAULT_BASE_URL.to_string(),
            http: Client::new(),
        }
    }

    /// Point the provider at another host, e.g. a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    #[instrument(skip(self), fields(country = %self.country_code))]
    async fn fetch_forecast(&self, postal_code: &str) -> Result<ProviderReply> {
        let url = format!("{}/forecast", self.base_url);
        let zip = format!("{postal_code},{}", self.country_code);

        debug!("requesting forecast");
        let res = self
            .http
            .get(&url)
            .query(&[
                ("zip", zip.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "imperial"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        debug!(%status, bytes = body.len(), "forecast response received");

        if status != StatusCode::OK {
            debug!(body = %truncate_body(&body), "forecast request rejected");
            return Ok(ProviderReply::NotFound { status: status.as_u16() });
        }

        let parsed: OwForecastResponse = serde_json::from_str(&body).map_err(|e| {
            Error::InvalidResponse(format!("could not decode forecast JSON: {e}"))
        })?;

        let samples = parsed
            .list
            .into_iter()
            .map(OwForecastEntry::into_sample)
            .collect::<Result<Vec<_>>>()?;

        Ok(ProviderReply::Found(CityReport { city_name: parsed.city.name, samples }))
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwCity {
    name: String,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt_txt: String,
    main: OwMain,
}

impl OwForecastEntry {
    fn into_sample(self) -> Result<ForecastSample> {
        let timestamp = NaiveDateTime::parse_from_str(&self.dt_txt, DT_TXT_FORMAT).map_err(|e| {
            Error::InvalidResponse(format!("bad dt_txt '{}': {e}", self.dt_txt))
        })?;

        Ok(ForecastSample { timestamp, temperature: self.main.temp })
    }
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    city: OwCity,
    #[serde(default)]
    list: Vec<OwForecastEntry>,
}

#[async_trait]
impl ForecastProvider for OpenWeatherProvider {
    async fn fetch_city(&self, postal_code: &str) -> Result<ProviderReply> {
        self.fetch_forecast(postal_code).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
