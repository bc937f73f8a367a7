use chrono::{DateTime, Duration, FixedOffset};

use crate::domain::{
    forecast::DayForecast,
    weather::{CurrentConditions, ForecastPeriod, Measurement, PointData, TemperatureUnit},
};

pub(crate) fn parse_time(value: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(value).expect("valid time fixture")
}

/// A forecast period with sunny defaults; override fields with struct update syntax.
pub(crate) fn period(name: &str, start: &str, is_daytime: bool, temperature: f64) -> ForecastPeriod {
    let start_time = parse_time(start);
    ForecastPeriod {
        number: 1,
        name: name.to_string(),
        start_time,
        end_time: start_time + Duration::hours(12),
        is_daytime,
        temperature,
        temperature_unit: TemperatureUnit::Fahrenheit,
        temperature_trend: None,
        probability_of_precipitation: Measurement::percent(None),
        wind_speed: "10 mph".to_string(),
        wind_direction: "NW".to_string(),
        icon: "https://api.weather.gov/icons/land/day/skc".to_string(),
        short_forecast: "Sunny".to_string(),
        detailed_forecast: String::new(),
    }
}

pub(crate) fn with_precip(mut period: ForecastPeriod, value: Option<f64>) -> ForecastPeriod {
    period.probability_of_precipitation = Measurement::percent(value);
    period
}

pub(crate) fn day(name: &str, high: Option<f64>, low: Option<f64>) -> DayForecast {
    DayForecast {
        day_name: name.to_string(),
        date: chrono::NaiveDate::from_ymd_opt(2026, 2, 23).expect("valid date fixture"),
        high_temp: high,
        low_temp: low,
        short_forecast: String::new(),
        precip_chance: None,
    }
}

pub(crate) fn sample_point() -> PointData {
    PointData {
        forecast_url: "https://api.weather.gov/gridpoints/OKX/33,37/forecast".to_string(),
        forecast_hourly_url: "https://api.weather.gov/gridpoints/OKX/33,37/forecast/hourly"
            .to_string(),
        stations_url: "https://api.weather.gov/gridpoints/OKX/33,37/stations".to_string(),
        city: "New York".to_string(),
        state: "NY".to_string(),
        time_zone: "America/New_York".to_string(),
    }
}

pub(crate) fn sample_conditions() -> CurrentConditions {
    CurrentConditions {
        station_name: "New York City, Central Park".to_string(),
        timestamp: "2026-02-23T14:51:00+00:00".to_string(),
        description: "Partly Cloudy".to_string(),
        icon: String::new(),
        temperature_c: Some(5.0),
        dewpoint_c: Some(-3.0),
        wind_direction_deg: Some(310.0),
        wind_speed_kmh: Some(16.0),
        wind_gust_kmh: None,
        humidity: Some(55.4),
        visibility_m: Some(16_093.4),
        pressure_pa: Some(101_320.0),
        wind_chill_c: Some(1.0),
        heat_index_c: None,
    }
}
