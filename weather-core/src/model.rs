use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Temperatures at or beyond which a forecast value is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmThresholds {
    pub low: i32,
    pub high: i32,
}

impl Default for AlarmThresholds {
    fn default() -> Self {
        Self { low: 32, high: 90 }
    }
}

/// One 3-hour reading from the forecast API.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSample {
    pub timestamp: NaiveDateTime,
    pub temperature: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub high: f64,
    pub low: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TempRange {
    pub high: f64,
    pub low: f64,
}

/// Aggregated forecast for one postal code.
#[derive(Debug, Clone, PartialEq)]
pub struct CityForecast {
    pub postal_code: String,
    pub city_name: String,
    pub overall: TempRange,
    /// In the order the dates first appear in the API response.
    pub days: Vec<DailySummary>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The API answered with something other than 200.
    InvalidPostalCode { status: u16 },
    /// The API answered 200 but listed no samples.
    NoForecastData,
}

/// A postal code that produced no table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub postal_code: String,
    pub reason: RejectReason,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            RejectReason::InvalidPostalCode { .. } => {
                write!(f, "{} is not a valid Zip Code.", self.postal_code)
            }
            RejectReason::NoForecastData => {
                write!(f, "{} returned no forecast data.", self.postal_code)
            }
        }
    }
}

/// Result of looking up a batch of postal codes, in request order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastBatch {
    pub cities: Vec<CityForecast>,
    pub rejected: Vec<Rejection>,
}
