//! Fixed-layout terminal report for a [`WeatherResponse`].

use crate::WeatherResponse;

const BANNER_WIDTH: usize = 50;

const MS_TO_MPH: f64 = 2.237;

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Renders the multi-line report. Holds a borrow, does no I/O.
#[derive(Debug, Clone, Copy)]
pub struct WeatherFormatter<'a> {
    data: &'a WeatherResponse,
}

impl<'a> WeatherFormatter<'a> {
    pub fn new(data: &'a WeatherResponse) -> Self {
        Self { data }
    }

    /// The full report, starting with a blank line and ending with the closing banner.
    pub fn render(&self) -> String {
        let banner = "=".repeat(BANNER_WIDTH);

        [
            String::new(),
            banner.clone(),
            self.format_location(),
            banner.clone(),
            String::new(),
            self.format_temperature(),
            self.format_description(),
            self.format_feels_like(),
            String::new(),
            self.format_details(),
            self.format_wind(),
            banner,
        ]
        .join("\n")
    }

    pub fn format_location(&self) -> String {
        format!("📍 {}, {}", self.data.name, self.data.country)
    }

    pub fn format_temperature(&self) -> String {
        format!("🌡\u{fe0f}  Temperature: {}", format_temperature(self.data.temperature_c))
    }

    pub fn format_description(&self) -> String {
        format!(
            "{} Weather: {}",
            weather_icon(&self.data.condition_main),
            capitalize(&self.data.condition_description)
        )
    }

    pub fn format_feels_like(&self) -> String {
        format!("🤔 Feels like: {}", format_temperature(self.data.feels_like_c))
    }

    pub fn format_details(&self) -> String {
        format!(
            "💧 Humidity: {}% | 🔵 Pressure: {} hPa",
            self.data.humidity_pct, self.data.pressure_hpa
        )
    }

    /// The direction slot is always preceded by a space, even when empty.
    pub fn format_wind(&self) -> String {
        let speed_ms = self.data.wind_speed_ms;
        let speed_mph = round1(speed_ms * MS_TO_MPH);

        format!(
            "💨 Wind: {speed_ms} m/s ({speed_mph:.1} mph) {}",
            wind_direction(self.data.wind_direction_deg)
        )
    }
}

/// `"<C>°C (<F>°F)"`, with Fahrenheit derived from the already rounded Celsius.
pub fn format_temperature(celsius: f64) -> String {
    let c = round1(celsius);
    let f = round1(c * 9.0 / 5.0 + 32.0);

    format!("{c:.1}°C ({f:.1}°F)")
}

/// Icon for an OpenWeather condition group, with its trailing space.
pub fn weather_icon(condition: &str) -> &'static str {
    match condition.to_lowercase().as_str() {
        "clear" => "\u{2600}\u{fe0f} ",
        "clouds" => "\u{2601}\u{fe0f} ",
        "rain" => "\u{1f327}\u{fe0f} ",
        "drizzle" => "\u{1f326}\u{fe0f} ",
        "thunderstorm" => "\u{26c8}\u{fe0f} ",
        "snow" => "\u{2744}\u{fe0f} ",
        "mist" | "fog" => "\u{1f32b}\u{fe0f} ",
        _ => "\u{1f324}\u{fe0f} ",
    }
}

/// `"from <point>"` on a 16-point compass, or `""` without a bearing.
///
/// The index is `round((deg + 11.25) / 22.5) mod 16` with ties rounded away
/// from zero, so 0° and 360° both land on NNE.
pub fn wind_direction(degrees: Option<u16>) -> String {
    let Some(degrees) = degrees else {
        return String::new();
    };

    let index = ((f64::from(degrees) + 11.25) / 22.5).round() as usize % COMPASS_POINTS.len();

    format!("from {}", COMPASS_POINTS[index])
}

/// One decimal place, ties away from zero.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Upper-case the first character, leave the rest alone.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
