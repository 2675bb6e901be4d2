use std::fmt::Debug;

use async_trait::async_trait;

use crate::{Config, client::ProviderClient, model::FetchOutcome};

pub mod current;
pub mod forecast;

pub use current::CurrentWeatherFetcher;
pub use forecast::ForecastFetcher;

/// Common contract of the two fetch pipelines: a city query in, a tagged
/// outcome out. Implementations never panic and never return an `Err`-like
/// value other than `FetchOutcome::Failure`.
#[async_trait]
pub trait Fetcher: Send + Sync + Debug {
    type Output;

    async fn fetch(&self, city_query: &str) -> FetchOutcome<Self::Output>;
}

/// Construct the shared provider client from config.
pub fn client_from_config(config: &Config) -> anyhow::Result<ProviderClient> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured.\n\
             Hint: run `skycast configure` and enter your OpenWeatherMap API key."
        )
    })?;

    let client = match config.base_url() {
        Some(base) => ProviderClient::with_base_url(api_key.to_owned(), base),
        None => ProviderClient::new(api_key.to_owned()),
    };

    Ok(client)
}

/// Construct both fetchers over one shared client.
pub fn fetchers_from_config(
    config: &Config,
) -> anyhow::Result<(CurrentWeatherFetcher, ForecastFetcher)> {
    let client = client_from_config(config)?;

    Ok((
        CurrentWeatherFetcher::new(client.clone()),
        ForecastFetcher::new(client),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_from_config_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = client_from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("No API key configured"));
        assert!(err.to_string().contains("Hint: run `skycast configure`"));
    }

    #[test]
    fn fetchers_from_config_works_when_key_is_set() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());

        assert!(fetchers_from_config(&cfg).is_ok());
    }
}
