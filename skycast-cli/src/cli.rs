use anyhow::Result;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use skycast_core::{
    CityForecast, Config, CurrentConditions, FetchOutcome, FetchSequence, Fetcher,
    fetchers_from_config,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "City weather and 5-day forecast")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key and a default city.
    Configure,

    /// Show current conditions for a city.
    Current {
        /// City name; defaults to the configured default city.
        city: Option<String>,
    },

    /// Show the 5-day forecast for a city.
    Forecast {
        /// City name; defaults to the configured default city.
        city: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = Config::load()?;

        match self.command {
            Some(Command::Configure) => configure(config),
            Some(Command::Current { city }) => {
                let (current, _) = fetchers_from_config(&config)?;
                let city = resolve_city(city, &config);

                println!("Fetching weather for {city}...");
                render_current(current.fetch(&city).await);
                Ok(())
            }
            Some(Command::Forecast { city }) => {
                let (_, forecast) = fetchers_from_config(&config)?;
                let city = resolve_city(city, &config);

                println!("Fetching forecast for {city}...");
                render_forecast(forecast.fetch(&city).await);
                Ok(())
            }
            None => interactive(&config).await,
        }
    }
}

/// Interactive mode: fetch the default city first, then loop on a city
/// prompt until the user submits an empty line or cancels.
async fn interactive(config: &Config) -> Result<()> {
    let (current, forecast) = fetchers_from_config(config)?;
    let sequence = FetchSequence::new();

    let mut city = config.default_city().to_string();

    loop {
        let generation = sequence.begin();
        println!("Fetching weather for {city}...");

        let (conditions, daily) = tokio::join!(current.fetch(&city), forecast.fetch(&city));

        // Outcomes of superseded submissions are dropped, not rendered.
        if sequence.is_current(generation) {
            render_current(conditions);
            render_forecast(daily);
        }

        let input = Text::new("City:")
            .with_help_message("enter a city name, leave empty to quit")
            .prompt_skippable()?;

        match input.as_deref().map(str::trim) {
            Some(next) if !next.is_empty() => city = next.to_string(),
            _ => break,
        }
    }

    Ok(())
}

fn configure(mut config: Config) -> Result<()> {
    let api_key = Password::new("OpenWeatherMap API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;
    config.set_api_key(api_key.trim().to_string());

    let city = Text::new("Default city:")
        .with_default(config.default_city())
        .prompt()?;
    if !city.trim().is_empty() {
        config.set_default_city(city.trim().to_string());
    }

    config.save()?;
    println!(
        "Saved configuration to {}",
        Config::config_file_path()?.display()
    );

    Ok(())
}

/// The fetchers pass queries through verbatim, so trimming happens here.
fn resolve_city(arg: Option<String>, config: &Config) -> String {
    arg.map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| config.default_city().to_string())
}

fn render_current(outcome: FetchOutcome<CurrentConditions>) {
    match outcome {
        FetchOutcome::Success(conditions) => {
            println!();
            println!("{}: {}", conditions.city, conditions.condition);
            println!(
                "  {}°C   humidity {}%   wind {:.1} m/s",
                conditions.temperature_display(),
                conditions.humidity_pct,
                conditions.wind_speed_mps
            );
            println!();
        }
        FetchOutcome::Failure(reason) => eprintln!("Error: {reason}"),
    }
}

fn render_forecast(outcome: FetchOutcome<CityForecast>) {
    match outcome {
        FetchOutcome::Success(forecast) => {
            println!("5-day forecast for {}:", forecast.city);
            if forecast.days.is_empty() {
                println!("  no noon samples in the provider data");
            }
            for day in &forecast.days {
                println!(
                    "  {:<12} {:>4}°C  {}",
                    day.date, day.temperature_c, day.condition
                );
            }
            println!();
        }
        FetchOutcome::Failure(reason) => eprintln!("Error: {reason}"),
    }
}
