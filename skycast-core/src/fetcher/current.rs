use async_trait::async_trait;

use crate::client::{CurrentPayload, ProviderClient};
use crate::error::FetchError;
use crate::fetcher::Fetcher;
use crate::model::{CurrentConditions, FetchOutcome};

/// Current-conditions pipeline: one GET against `/weather`, then
/// normalization into [`CurrentConditions`]. Stateless; no caching, no
/// retry.
#[derive(Debug, Clone)]
pub struct CurrentWeatherFetcher {
    client: ProviderClient,
}

impl CurrentWeatherFetcher {
    pub fn new(client: ProviderClient) -> Self {
        Self { client }
    }

    async fn fetch_inner(&self, city_query: &str) -> Result<CurrentConditions, FetchError> {
        let payload = self.client.current(city_query).await?;
        normalize(payload)
    }
}

#[async_trait]
impl Fetcher for CurrentWeatherFetcher {
    type Output = CurrentConditions;

    async fn fetch(&self, city_query: &str) -> FetchOutcome<CurrentConditions> {
        self.fetch_inner(city_query).await.into()
    }
}

/// The record is built from the first weather entry; an empty `weather`
/// array is a malformed payload, not a defaulted condition.
fn normalize(payload: CurrentPayload) -> Result<CurrentConditions, FetchError> {
    let weather = payload.weather.into_iter().next().ok_or_else(|| {
        FetchError::MalformedPayload("current conditions carry no weather entry".to_string())
    })?;

    Ok(CurrentConditions {
        city: payload.name,
        temperature_c: payload.main.temp,
        condition: weather.description,
        humidity_pct: payload.main.humidity,
        wind_speed_mps: payload.wind.speed,
        icon_code: weather.icon,
    })
}
