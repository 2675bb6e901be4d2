//! Core library for the `skycast` weather viewer.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The provider HTTP client and raw payload types
//! - The two fetch pipelines (current conditions, 5-day forecast)
//! - Shared domain models and the tagged fetch outcome
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod model;
pub mod sequence;

pub use client::ProviderClient;
pub use config::Config;
pub use error::FetchError;
pub use fetcher::{CurrentWeatherFetcher, Fetcher, ForecastFetcher, fetchers_from_config};
pub use model::{CityForecast, CurrentConditions, FetchOutcome, ForecastDay};
pub use sequence::{FetchGeneration, FetchSequence};
