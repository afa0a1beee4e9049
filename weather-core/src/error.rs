use thiserror::Error;

/// Everything that can go wrong between reading the API key and having a
/// parsed [`WeatherResponse`](crate::WeatherResponse) in hand.
///
/// The `Display` output of each variant is the exact message shown to the user.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("City '{0}' not found. Please check the city name and try again.")]
    CityNotFound(String),

    #[error("Invalid API key. Please check your OpenWeather API key.")]
    InvalidApiKey,

    #[error("API rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Failed to fetch weather data. HTTP Error: {0}")]
    Http(u16),

    /// Any transport failure: DNS, refused connection, timeout, truncated body.
    #[error("Network error. Please check your internet connection.")]
    Network,

    #[error("OpenWeather API key not found!")]
    MissingApiKey,

    #[error("Malformed weather data from OpenWeather: {0}")]
    MalformedResponse(String),
}

impl WeatherError {
    /// Map a non-success HTTP status to its error.
    ///
    /// Returns `None` for 200, which is the only status carrying a usable body.
    pub fn from_status(status: u16, city: &str) -> Option<Self> {
        match status {
            200 => None,
            404 => Some(Self::CityNotFound(city.to_string())),
            401 => Some(Self::InvalidApiKey),
            429 => Some(Self::RateLimited),
            other => Some(Self::Http(other)),
        }
    }
}
