use super::TemperatureUnit;

const MPH_PER_KMH: f64 = 0.621371;
const METERS_PER_MILE: f64 = 1609.34;
const IN_HG_PER_PASCAL: f64 = 0.0002953;

/// Ties round toward positive infinity, so -2.5 becomes -2 and 2.5 becomes 3.
#[must_use]
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

pub(crate) fn to_fahrenheit(celsius: f64) -> f64 {
    round_half_up(celsius * 9.0 / 5.0 + 32.0)
}

pub(crate) fn to_celsius(fahrenheit: f64) -> f64 {
    round_half_up((fahrenheit - 32.0) * 5.0 / 9.0)
}

#[must_use]
pub fn celsius_to_fahrenheit(celsius: Option<f64>) -> Option<f64> {
    celsius.map(to_fahrenheit)
}

#[must_use]
pub fn fahrenheit_to_celsius(fahrenheit: Option<f64>) -> Option<f64> {
    fahrenheit.map(to_celsius)
}

/// Unrounded; callers round at display time.
#[must_use]
pub fn kmh_to_mph(kmh: Option<f64>) -> Option<f64> {
    kmh.map(|v| v * MPH_PER_KMH)
}

#[must_use]
pub fn meters_to_miles(meters: Option<f64>) -> Option<f64> {
    meters.map(|v| v / METERS_PER_MILE)
}

#[must_use]
pub fn pascals_to_in_hg(pascals: Option<f64>) -> Option<f64> {
    pascals.map(|v| v * IN_HG_PER_PASCAL)
}

/// Observation temperatures are Celsius; Celsius display still rounds.
#[must_use]
pub fn display_from_celsius(celsius: Option<f64>, unit: TemperatureUnit) -> Option<f64> {
    match unit {
        TemperatureUnit::Fahrenheit => celsius_to_fahrenheit(celsius),
        TemperatureUnit::Celsius => celsius.map(round_half_up),
    }
}

/// Forecast temperatures are Fahrenheit.
#[must_use]
pub fn display_from_fahrenheit(fahrenheit: Option<f64>, unit: TemperatureUnit) -> Option<f64> {
    match unit {
        TemperatureUnit::Fahrenheit => fahrenheit,
        TemperatureUnit::Celsius => fahrenheit_to_celsius(fahrenheit),
    }
}

#[must_use]
pub fn format_temperature(value: Option<f64>, unit: TemperatureUnit) -> String {
    match value {
        Some(v) => format!("{}°{unit}", round_half_up(v) as i64),
        None => format!("--°{unit}"),
    }
}
