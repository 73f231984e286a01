// src/weather/mod.rs
//! Hourly forecast lookup against weatherapi.com.

pub mod client;
pub mod config;
pub mod format;
pub mod model;

pub use client::WeatherClient;
pub use config::WeatherConfig;
pub use format::{print_forecast, render_forecast};
pub use model::Forecast;

use crate::error::WeatherError;

/// Join the command-line words into a single location query.
pub fn build_location<I, S>(words: I) -> Result<String, WeatherError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let location = words
        .into_iter()
        .map(|w| w.as_ref().trim().to_string())
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if location.is_empty() {
        return Err(WeatherError::MissingLocation);
    }
    Ok(location)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_words_with_single_spaces() {
        assert_eq!(
            build_location(["San", "Francisco", "CA"]).unwrap(),
            "San Francisco CA"
        );
    }

    #[test]
    fn no_words_is_missing_location() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            build_location(empty),
            Err(WeatherError::MissingLocation)
        ));
        assert!(matches!(
            build_location(["  "]),
            Err(WeatherError::MissingLocation)
        ));
    }
}
