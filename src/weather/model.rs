use serde::Deserialize;

use crate::error::WeatherError;

/// The slice of the forecast.json response this tool reads.
#[derive(Debug, Clone, Deserialize)]
pub struct Forecast {
    pub forecast: ForecastBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastBody {
    #[serde(default)]
    pub forecastday: Vec<ForecastDay>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastDay {
    #[serde(default)]
    pub hour: Vec<Hour>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hour {
    pub condition: Condition,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    pub text: String,
}

impl Forecast {
    /// Condition text for each hour of the first forecast day, in order.
    pub fn hourly_conditions(&self) -> Result<Vec<&str>, WeatherError> {
        let day = self
            .forecast
            .forecastday
            .first()
            .ok_or(WeatherError::NoData)?;
        Ok(day.hour.iter().map(|h| h.condition.text.as_str()).collect())
    }
}
