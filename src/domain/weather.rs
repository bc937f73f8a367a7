use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

mod compass;
mod conditions;
mod conversions;

pub use compass::{COMPASS_POINTS, degrees_to_compass};
pub use conditions::{WeatherCategory, condition_for_forecast, condition_icon};
pub use conversions::{
    celsius_to_fahrenheit, display_from_celsius, display_from_fahrenheit, fahrenheit_to_celsius,
    format_temperature, kmh_to_mph, meters_to_miles, pascals_to_in_hg,
};
pub(crate) use conversions::{round_half_up, to_celsius};

/// Display unit for temperatures. weather.gov forecasts arrive in Fahrenheit,
/// observations in Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[default]
    #[serde(rename = "F")]
    Fahrenheit,
    #[serde(rename = "C")]
    Celsius,
}

impl TemperatureUnit {
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Fahrenheit => "F",
            Self::Celsius => "C",
        }
    }
}

impl std::fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A value with its WMO unit code. `value` is `None` when the station did not
/// report it, which is not the same as zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    #[serde(default)]
    pub unit_code: String,
    pub value: Option<f64>,
}

impl Measurement {
    #[must_use]
    pub fn percent(value: Option<f64>) -> Self {
        Self {
            unit_code: "wmoUnit:percent".to_string(),
            value,
        }
    }
}

/// One time-bounded segment of a 7-day or hourly forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    pub number: u32,
    #[serde(default)]
    pub name: String,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
    pub is_daytime: bool,
    pub temperature: f64,
    #[serde(default)]
    pub temperature_unit: TemperatureUnit,
    #[serde(default)]
    pub temperature_trend: Option<String>,
    #[serde(default)]
    pub probability_of_precipitation: Measurement,
    #[serde(default)]
    pub wind_speed: String,
    #[serde(default)]
    pub wind_direction: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub short_forecast: String,
    #[serde(default)]
    pub detailed_forecast: String,
}

impl ForecastPeriod {
    /// Calendar date in the offset the upstream localized the period to.
    #[must_use]
    pub fn local_date(&self) -> NaiveDate {
        self.start_time.date_naive()
    }

    #[must_use]
    pub fn precip_chance(&self) -> Option<f64> {
        self.probability_of_precipitation.value
    }
}

/// The subset of a `/points/{lat},{lon}` lookup the rest of the app needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointData {
    pub forecast_url: String,
    pub forecast_hourly_url: String,
    pub stations_url: String,
    pub city: String,
    pub state: String,
    pub time_zone: String,
}

impl PointData {
    #[must_use]
    pub fn place_name(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}

/// Latest station observation in the raw units the API reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    pub station_name: String,
    pub timestamp: String,
    pub description: String,
    pub icon: String,
    pub temperature_c: Option<f64>,
    pub dewpoint_c: Option<f64>,
    pub wind_direction_deg: Option<f64>,
    pub wind_speed_kmh: Option<f64>,
    pub wind_gust_kmh: Option<f64>,
    pub humidity: Option<f64>,
    pub visibility_m: Option<f64>,
    pub pressure_pa: Option<f64>,
    pub wind_chill_c: Option<f64>,
    pub heat_index_c: Option<f64>,
}

/// A geocoded place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub display_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    #[must_use]
    pub fn from_coords(lat: f64, lon: f64) -> Self {
        Self {
            display_name: format!("{lat:.4}, {lon:.4}"),
            latitude: lat,
            longitude: lon,
        }
    }
}

#[derive(Debug, Clone)]
pub enum GeocodeResolution {
    Selected(Location),
    NotFound(String),
}
