// src/weather/client.rs

use reqwest::Client;
use tracing::{debug, instrument};

use super::{config::WeatherConfig, model::Forecast};
use crate::error::WeatherError;

/// One-shot client for the forecast endpoint.
pub struct WeatherClient {
    http: Client,
    config: WeatherConfig,
}

impl WeatherClient {
    pub fn new(config: WeatherConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// GET a one-day forecast for `location`. Any non-2xx status is an error.
    #[instrument(level = "info", skip(self))]
    pub async fn forecast(&self, location: &str) -> Result<Forecast, WeatherError> {
        let resp = self
            .http
            .get(self.config.endpoint().clone())
            .query(&[
                ("key", self.config.api_key()),
                ("q", location),
                ("days", "1"),
            ])
            .send()
            .await?
            .error_for_status()?;
        debug!(status = %resp.status(), "forecast response");

        Ok(resp.json::<Forecast>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> WeatherClient {
        let endpoint = format!("{}/v1/forecast.json", server.uri());
        WeatherClient::new(WeatherConfig::new("secret-key", &endpoint).unwrap())
    }

    #[tokio::test]
    async fn sends_key_location_and_one_day() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast.json"))
            .and(query_param("key", "secret-key"))
            .and(query_param("q", "New York"))
            .and(query_param("days", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"forecast":{"forecastday":[{"hour":[{"condition":{"text":"Sunny"}}]}]}}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let forecast = client_for(&server).forecast("New York").await.unwrap();
        assert_eq!(forecast.hourly_conditions().unwrap(), vec!["Sunny"]);
    }

    #[tokio::test]
    async fn error_status_is_surfaced_without_the_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast.json"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = client_for(&server).forecast("Nowhere").await.unwrap_err();
        match &err {
            WeatherError::Http(e) => {
                assert_eq!(e.status(), Some(reqwest::StatusCode::UNAUTHORIZED))
            }
            other => panic!("expected Http error, got {other:?}"),
        }
        assert!(!err.to_string().contains("secret-key"));
    }

    #[tokio::test]
    async fn malformed_body_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).forecast("Paris").await.unwrap_err();
        assert!(matches!(err, WeatherError::Http(_)));
    }
}
