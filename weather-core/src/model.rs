use std::fmt;

/// OpenWeather API key. `Debug` is redacted so the key never reaches the logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Trim the raw value; blank input is not a key.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    /// Celsius and meters per second.
    #[default]
    Metric,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
        }
    }
}

/// One lookup against the current-weather endpoint.
#[derive(Debug, Clone)]
pub struct WeatherQuery {
    pub city: String,
    pub api_key: ApiKey,
    pub units: Units,
}

impl WeatherQuery {
    pub fn new(city: impl Into<String>, api_key: ApiKey) -> Self {
        Self { city: city.into(), api_key, units: Units::Metric }
    }

    /// Query string pairs in the order OpenWeather documents them.
    pub fn params(&self) -> [(&str, &str); 3] {
        [
            ("q", self.city.as_str()),
            ("appid", self.api_key.as_str()),
            ("units", self.units.as_str()),
        ]
    }
}

/// Current conditions for one location, already validated.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherResponse {
    pub name: String,
    pub country: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub pressure_hpa: u32,
    /// Primary category, e.g. "Clouds".
    pub condition_main: String,
    pub condition_description: String,
    pub wind_speed_ms: f64,
    pub wind_direction_deg: Option<u16>,
}
