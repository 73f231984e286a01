use super::model::Forecast;
use crate::error::WeatherError;

pub const BANNER: &str = "Weather status for the next 24 hours:";

/// Console lines for a list of hourly conditions, first entry being the current hour.
pub fn render_forecast(conditions: &[&str]) -> Vec<String> {
    let mut lines = Vec::with_capacity(conditions.len() + 2);
    lines.push(BANNER.to_string());
    lines.push("-".repeat(BANNER.len()));
    for (offset, text) in conditions.iter().enumerate() {
        if offset == 0 {
            lines.push(format!("Now: {text}"));
        } else {
            lines.push(format!("In {offset} hours: {text}"));
        }
    }
    lines
}

pub fn print_forecast(forecast: &Forecast) -> Result<(), WeatherError> {
    let conditions = forecast.hourly_conditions()?;
    for line in render_forecast(&conditions) {
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_hour_is_now() {
        let lines = render_forecast(&["Clear", "Cloudy", "Light rain"]);
        assert_eq!(
            lines,
            vec![
                "Weather status for the next 24 hours:",
                "-------------------------------------",
                "Now: Clear",
                "In 1 hours: Cloudy",
                "In 2 hours: Light rain",
            ]
        );
    }

    #[test]
    fn no_hours_prints_only_banner() {
        assert_eq!(render_forecast(&[]).len(), 2);
    }
}
