use crate::{HttpTransport, WeatherClient, WeatherFormatter};

/// Fetch `city` and render it, or render the failure as `Error: <message>`.
///
/// This is where every [`WeatherError`](crate::WeatherError) from the fetch is
/// recovered; the caller only has to print the result.
pub async fn weather_report<T: HttpTransport>(client: &WeatherClient<T>, city: &str) -> String {
    match client.fetch(city).await {
        Ok(data) => WeatherFormatter::new(&data).render(),
        Err(err) => format!("Error: {err}"),
    }
}
