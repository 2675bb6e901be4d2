use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// Normalized current conditions for one city.
///
/// Produced fresh per request; the `city` field carries the provider's
/// canonicalized spelling, not necessarily the casing the user typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub city: String,
    pub temperature_c: f64,
    pub condition: String,
    /// Relative humidity, 0-100.
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub icon_code: String,
}

impl CurrentConditions {
    /// Temperature as shown to the user: one decimal place.
    pub fn temperature_display(&self) -> String {
        format!("{:.1}", self.temperature_c)
    }
}

/// One day of the forecast, represented by the sample nearest local noon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Short human label, e.g. "Mon, Nov 12".
    pub date: String,
    /// Rounded to the nearest whole degree for display.
    pub temperature_c: i32,
    pub condition: String,
    pub icon_code: String,
}

/// A city's forecast: at most five days, chronological, one entry per
/// calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityForecast {
    pub city: String,
    pub days: Vec<ForecastDay>,
}

/// Tagged result of a fetch. A success always carries a fully populated
/// record; a failure carries only the human-readable reason.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Success(T),
    Failure(String),
}

impl<T> FetchOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            FetchOutcome::Success(value) => Some(value),
            FetchOutcome::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            FetchOutcome::Success(_) => None,
            FetchOutcome::Failure(reason) => Some(reason),
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match self {
            FetchOutcome::Success(value) => Ok(value),
            FetchOutcome::Failure(reason) => Err(reason),
        }
    }
}

impl<T> From<Result<T, FetchError>> for FetchOutcome<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => FetchOutcome::Success(value),
            Err(err) => FetchOutcome::Failure(err.to_string()),
        }
    }
}
