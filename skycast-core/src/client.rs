//! HTTP client for the OpenWeatherMap endpoints.
//!
//! Both fetch pipelines go through [`ProviderClient`]; it owns the reqwest
//! client, the API key and the base URL, and maps transport, status and
//! parse problems into the [`FetchError`] taxonomy. Raw payload types live
//! here too: they mirror the provider JSON and never leave this crate.

use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::FetchError;

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

#[derive(Debug, Clone)]
pub struct ProviderClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl ProviderClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the client at a different base URL, e.g. a mock server in
    /// tests or a proxy configured in `config.toml`.
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_key,
            base_url: base_url.into(),
        }
    }

    pub(crate) async fn current(&self, city_query: &str) -> Result<CurrentPayload, FetchError> {
        let fallback = format!("Could not find weather for \"{city_query}\".");
        self.get_json("weather", city_query, fallback).await
    }

    pub(crate) async fn forecast(&self, city_query: &str) -> Result<ForecastPayload, FetchError> {
        let fallback = format!("Could not find forecast for \"{city_query}\".");
        self.get_json("forecast", city_query, fallback).await
    }

    /// One GET against `{base}/{endpoint}?q={city}&units=metric&appid={key}`.
    /// The city query is passed through verbatim; trimming is the caller's
    /// responsibility.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        city_query: &str,
        not_found: String,
    ) -> Result<T, FetchError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city_query),
                ("units", "metric"),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(FetchError::Network)?;

        let status = res.status();
        let body = res.text().await.map_err(FetchError::Network)?;

        debug!(endpoint, %status, bytes = body.len(), "provider responded");

        if !status.is_success() {
            let message = provider_message(&body).unwrap_or(not_found);
            return Err(FetchError::HttpStatus { status, message });
        }

        serde_json::from_str(&body).map_err(|e| FetchError::MalformedPayload(e.to_string()))
    }
}

/// Error bodies look like `{"cod":"404","message":"city not found"}`; pull
/// the message out when it is there.
fn provider_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(str::to_owned)
}

#[derive(Debug, Deserialize)]
pub(crate) struct PayloadMain {
    pub temp: f64,
    pub humidity: u8,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PayloadWeather {
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PayloadWind {
    pub speed: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentPayload {
    pub name: String,
    pub main: PayloadMain,
    pub weather: Vec<PayloadWeather>,
    pub wind: PayloadWind,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PayloadCity {
    pub name: String,
}

/// One 3-hour slot of the forecast list.
#[derive(Debug, Deserialize)]
pub(crate) struct ForecastEntry {
    /// Unix timestamp, UTC.
    pub dt: i64,
    pub main: PayloadMain,
    pub weather: Vec<PayloadWeather>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastPayload {
    pub city: PayloadCity,
    pub list: Vec<ForecastEntry>,
}
