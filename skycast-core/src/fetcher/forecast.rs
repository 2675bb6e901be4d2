use std::collections::BTreeSet;
use std::fmt;

use async_trait::async_trait;
use chrono::{FixedOffset, Local, Offset, TimeZone, Timelike};

use crate::client::{ForecastEntry, ProviderClient};
use crate::error::FetchError;
use crate::fetcher::Fetcher;
use crate::model::{CityForecast, FetchOutcome, ForecastDay};

/// Representative samples are taken from this local-hour window.
const NOON_WINDOW: std::ops::RangeInclusive<u32> = 11..=13;

const MAX_DAYS: usize = 5;

/// Forecast pipeline: one GET against `/forecast` (3-hour slots spanning
/// five days), then per-day sampling near local noon.
#[derive(Debug, Clone)]
pub struct ForecastFetcher {
    client: ProviderClient,
    offset: FixedOffset,
}

impl ForecastFetcher {
    /// Date and hour math uses the executing client's current UTC offset.
    pub fn new(client: ProviderClient) -> Self {
        Self::with_offset(client, Local::now().offset().fix())
    }

    /// Explicit offset, for tests and embedders rendering for a zone other
    /// than the process's own.
    pub fn with_offset(client: ProviderClient, offset: FixedOffset) -> Self {
        Self { client, offset }
    }

    async fn fetch_inner(&self, city_query: &str) -> Result<CityForecast, FetchError> {
        let payload = self.client.forecast(city_query).await?;
        let days = select_daily_samples(&payload.list, &self.offset)?;

        Ok(CityForecast {
            city: payload.city.name,
            days,
        })
    }
}

#[async_trait]
impl Fetcher for ForecastFetcher {
    type Output = CityForecast;

    async fn fetch(&self, city_query: &str) -> FetchOutcome<CityForecast> {
        self.fetch_inner(city_query).await.into()
    }
}

/// Pick one representative slot per calendar day.
///
/// Walks the list in provider order (chronological); the first entry per
/// date whose local hour falls in [11, 13] stands in for that day. Days
/// with no slot in the window are omitted rather than substituted, so the
/// result may hold fewer than [`MAX_DAYS`] entries.
fn select_daily_samples<Tz>(
    entries: &[ForecastEntry],
    tz: &Tz,
) -> Result<Vec<ForecastDay>, FetchError>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut days = Vec::new();
    let mut seen = BTreeSet::new();

    for entry in entries {
        if days.len() >= MAX_DAYS {
            break;
        }

        let Some(local) = tz.timestamp_opt(entry.dt, 0).single() else {
            continue;
        };

        if !NOON_WINDOW.contains(&local.hour()) {
            continue;
        }

        let date = local.date_naive();
        if seen.contains(&date) {
            continue;
        }

        let weather = entry.weather.first().ok_or_else(|| {
            FetchError::MalformedPayload(format!(
                "no weather entry for forecast slot at {}",
                entry.dt
            ))
        })?;

        seen.insert(date);
        days.push(ForecastDay {
            date: local.format("%a, %b %-d").to_string(),
            temperature_c: entry.main.temp.round() as i32,
            condition: weather.description.clone(),
            icon_code: weather.icon.clone(),
        });
    }

    Ok(days)
}
