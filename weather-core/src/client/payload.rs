//! Raw OpenWeather JSON shape and its validation into [`WeatherResponse`].
//!
//! Every field is optional on the wire so that a missing one is reported by
//! its dotted path instead of a generic serde message.

use serde::Deserialize;

use crate::{WeatherError, WeatherResponse};

#[derive(Debug, Deserialize)]
struct OwSys {
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: Option<f64>,
    feels_like: Option<f64>,
    humidity: Option<u8>,
    pressure: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: Option<f64>,
    deg: Option<u16>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: Option<String>,
    sys: Option<OwSys>,
    main: Option<OwMain>,
    #[serde(default)]
    weather: Vec<OwWeather>,
    wind: Option<OwWind>,
}

fn required<T>(value: Option<T>, path: &str) -> Result<T, WeatherError> {
    value.ok_or_else(|| WeatherError::MalformedResponse(format!("missing field `{path}`")))
}

pub(crate) fn parse_current(body: &str) -> Result<WeatherResponse, WeatherError> {
    let raw: OwCurrentResponse = serde_json::from_str(body)
        .map_err(|err| WeatherError::MalformedResponse(format!("invalid JSON: {err}")))?;

    let sys = required(raw.sys, "sys")?;
    let main = required(raw.main, "main")?;
    let weather = required(raw.weather.into_iter().next(), "weather[0]")?;
    let wind = required(raw.wind, "wind")?;

    Ok(WeatherResponse {
        name: required(raw.name, "name")?,
        country: required(sys.country, "sys.country")?,
        temperature_c: required(main.temp, "main.temp")?,
        feels_like_c: required(main.feels_like, "main.feels_like")?,
        humidity_pct: required(main.humidity, "main.humidity")?,
        pressure_hpa: required(main.pressure, "main.pressure")?,
        condition_main: required(weather.main, "weather[0].main")?,
        condition_description: required(weather.description, "weather[0].description")?,
        wind_speed_ms: required(wind.speed, "wind.speed")?,
        wind_direction_deg: wind.deg,
    })
}
