// src/bin/weather.rs

use anyhow::{Context, Result};
use clap::Parser;
use headless::{
    logging,
    weather::{build_location, print_forecast, WeatherClient, WeatherConfig},
};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Print the hourly weather forecast for the next 24 hours",
    long_about = "Print the hourly weather forecast for the next 24 hours.\n\n\
                  Needs API_KEY (weatherapi.com) in the environment or in a .env file."
)]
struct Args {
    /// Location to look up, e.g. `weather San Francisco`
    location: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init("warn");
    let args = Args::parse();

    let config = WeatherConfig::from_env().context("loading weather configuration")?;
    let location = build_location(&args.location)?;

    let client = WeatherClient::new(config);
    let forecast = client
        .forecast(&location)
        .await
        .with_context(|| format!("fetching forecast for {location:?}"))?;

    print_forecast(&forecast)?;
    Ok(())
}
