use tracing::{instrument, warn};

use crate::{
    aggregate::summarize,
    error::Result,
    model::{CityForecast, ForecastBatch, RejectReason, Rejection},
    provider::{ForecastProvider, ProviderReply},
};

/// Look up each postal code in turn and aggregate the ones that resolve.
///
/// Rejected postal codes are collected and the batch carries on; any other
/// error aborts the whole batch.
#[instrument(skip(provider))]
pub async fn fetch_forecasts(
    provider: &dyn ForecastProvider,
    postal_codes: &[String],
) -> Result<ForecastBatch> {
    let mut batch = ForecastBatch::default();

    for postal_code in postal_codes {
        let reason = match provider.fetch_city(postal_code).await? {
            ProviderReply::NotFound { status } => RejectReason::InvalidPostalCode { status },
            ProviderReply::Found(report) => {
                let summary = summarize(&report.samples);
                match summary.overall {
                    Some(overall) => {
                        batch.cities.push(CityForecast {
                            postal_code: postal_code.clone(),
                            city_name: report.city_name,
                            overall,
                            days: summary.days,
                        });
                        continue;
                    }
                    None => RejectReason::NoForecastData,
                }
            }
        };

        warn!(%postal_code, ?reason, "postal code skipped");
        batch.rejected.push(Rejection { postal_code: postal_code.clone(), reason });
    }

    Ok(batch)
}
