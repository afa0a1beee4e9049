use tracing::debug;

use crate::{WeatherError, WeatherQuery, WeatherResponse, model::ApiKey};

mod payload;
mod transport;

pub use transport::{HttpReply, HttpTransport, ReqwestTransport};

pub const API_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Client for the OpenWeather current-weather endpoint.
#[derive(Debug, Clone)]
pub struct WeatherClient<T = ReqwestTransport> {
    api_key: ApiKey,
    transport: T,
}

impl WeatherClient<ReqwestTransport> {
    pub fn new(api_key: ApiKey) -> Self {
        Self::with_transport(api_key, ReqwestTransport::new())
    }
}

impl<T: HttpTransport> WeatherClient<T> {
    pub fn with_transport(api_key: ApiKey, transport: T) -> Self {
        Self { api_key, transport }
    }

    /// Fetch and validate current conditions for `city`.
    ///
    /// Performs exactly one request. Transport failures of any kind become
    /// [`WeatherError::Network`].
    pub async fn fetch(&self, city: &str) -> Result<WeatherResponse, WeatherError> {
        let query = WeatherQuery::new(city, self.api_key.clone());
        debug!(city = %query.city, units = query.units.as_str(), "requesting current weather");

        let reply = self.transport.get(API_BASE_URL, &query.params()).await.map_err(|err| {
            debug!("transport failure: {err:#}");
            WeatherError::Network
        })?;

        debug!(status = reply.status, "OpenWeather responded");

        if let Some(err) = WeatherError::from_status(reply.status, &query.city) {
            return Err(err);
        }

        payload::parse_current(&reply.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use std::sync::Mutex;

    const LONDON: &str = r#"{"name":"London","sys":{"country":"GB"},"main":{"temp":15.5,"feels_like":14.2,"humidity":72,"pressure":1013},"weather":[{"main":"Clouds","description":"overcast clouds"}],"wind":{"speed":4.5,"deg":230}}"#;

    #[derive(Debug)]
    struct StubTransport {
        reply: Option<HttpReply>,
        calls: Mutex<Vec<(String, Vec<(String, String)>)>>,
    }

    impl StubTransport {
        fn replying(status: u16, body: &str) -> Self {
            Self {
                reply: Some(HttpReply { status, body: body.to_string() }),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self { reply: None, calls: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait]
    impl HttpTransport for StubTransport {
        async fn get(&self, url: &str, query: &[(&str, &str)]) -> anyhow::Result<HttpReply> {
            let query = query.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
            self.calls.lock().unwrap().push((url.to_string(), query));

            self.reply.clone().ok_or_else(|| anyhow!("dns error: failed to lookup address"))
        }
    }

    fn client(transport: StubTransport) -> WeatherClient<StubTransport> {
        WeatherClient::with_transport(ApiKey::parse("TEST_KEY").unwrap(), transport)
    }

    #[tokio::test]
    async fn sends_one_request_with_metric_units() {
        let client = client(StubTransport::replying(200, LONDON));

        client.fetch("San Francisco").await.unwrap();

        let calls = client.transport.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (url, query) = &calls[0];
        assert_eq!(url, API_BASE_URL);
        assert_eq!(
            query,
            &vec![
                ("q".to_string(), "San Francisco".to_string()),
                ("appid".to_string(), "TEST_KEY".to_string()),
                ("units".to_string(), "metric".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn ok_status_parses_body() {
        let data = client(StubTransport::replying(200, LONDON)).fetch("London").await.unwrap();

        assert_eq!(data.name, "London");
        assert_eq!(data.wind_direction_deg, Some(230));
    }

    #[tokio::test]
    async fn not_found_carries_city_as_given() {
        let err = client(StubTransport::replying(404, r#"{"cod":"404"}"#))
            .fetch("InvalidCity")
            .await
            .unwrap_err();

        assert!(matches!(err, WeatherError::CityNotFound(ref city) if city == "InvalidCity"));
    }

    #[tokio::test]
    async fn status_codes_map_to_errors() {
        let cases = [
            (401, "Invalid API key. Please check your OpenWeather API key."),
            (429, "API rate limit exceeded. Please try again later."),
            (500, "Failed to fetch weather data. HTTP Error: 500"),
            (503, "Failed to fetch weather data. HTTP Error: 503"),
        ];

        for (status, message) in cases {
            let err = client(StubTransport::replying(status, "")).fetch("London").await.unwrap_err();
            assert_eq!(err.to_string(), message);
        }
    }

    #[tokio::test]
    async fn transport_failure_is_network_error() {
        let err = client(StubTransport::failing()).fetch("London").await.unwrap_err();

        assert!(matches!(err, WeatherError::Network));
        assert_eq!(err.to_string(), "Network error. Please check your internet connection.");
    }

    #[tokio::test]
    async fn ok_status_with_bad_body_is_malformed() {
        let err = client(StubTransport::replying(200, r#"{"name":"London"}"#))
            .fetch("London")
            .await
            .unwrap_err();

        assert!(matches!(err, WeatherError::MalformedResponse(_)));
    }
}
