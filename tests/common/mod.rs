#![allow(dead_code)]

use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, path_regex},
};

pub const STATION_ID: &str = "KNYC";

pub fn period_json(
    name: &str,
    start: &str,
    is_daytime: bool,
    temperature: f64,
    precip: Option<f64>,
    short_forecast: &str,
) -> Value {
    json!({
        "number": 1,
        "name": name,
        "startTime": start,
        "endTime": start,
        "isDaytime": is_daytime,
        "temperature": temperature,
        "temperatureUnit": "F",
        "temperatureTrend": null,
        "probabilityOfPrecipitation": { "unitCode": "wmoUnit:percent", "value": precip },
        "windSpeed": "10 mph",
        "windDirection": "NW",
        "icon": "https://api.weather.gov/icons/land/day/few",
        "shortForecast": short_forecast,
        "detailedForecast": ""
    })
}

pub fn forecast_periods() -> Vec<Value> {
    vec![
        period_json(
            "This Afternoon",
            "2026-02-23T14:00:00-05:00",
            true,
            41.0,
            Some(10.0),
            "Partly Sunny",
        ),
        period_json(
            "Tonight",
            "2026-02-23T18:00:00-05:00",
            false,
            30.0,
            Some(20.0),
            "Chance Rain Showers",
        ),
        period_json(
            "Tuesday",
            "2026-02-24T06:00:00-05:00",
            true,
            48.0,
            None,
            "Sunny",
        ),
        period_json(
            "Tuesday Night",
            "2026-02-24T18:00:00-05:00",
            false,
            35.0,
            None,
            "Mostly Clear",
        ),
        period_json(
            "Wednesday",
            "2026-02-25T06:00:00-05:00",
            true,
            52.0,
            Some(60.0),
            "Rain",
        ),
    ]
}

pub fn hourly_periods() -> Vec<Value> {
    vec![
        period_json("", "2026-02-23T14:00:00-05:00", true, 41.0, Some(10.0), "Partly Sunny"),
        period_json("", "2026-02-23T15:00:00-05:00", true, 40.0, Some(20.0), "Partly Sunny"),
        period_json("", "2026-02-23T16:00:00-05:00", true, 39.0, None, "Mostly Cloudy"),
    ]
}

pub fn points_body(base: &str) -> Value {
    json!({
        "properties": {
            "forecast": format!("{base}/gridpoints/OKX/33,37/forecast"),
            "forecastHourly": format!("{base}/gridpoints/OKX/33,37/forecast/hourly"),
            "observationStations": format!("{base}/gridpoints/OKX/33,37/stations"),
            "timeZone": "America/New_York",
            "relativeLocation": {
                "properties": { "city": "New York", "state": "NY" }
            }
        }
    })
}

fn measurement(unit: &str, value: Option<f64>) -> Value {
    json!({ "unitCode": unit, "value": value, "qualityControl": "V" })
}

pub fn observation_body() -> Value {
    json!({
        "properties": {
            "stationName": "New York City, Central Park",
            "timestamp": "2026-02-23T14:51:00+00:00",
            "textDescription": "Partly Cloudy",
            "icon": "https://api.weather.gov/icons/land/day/sct",
            "temperature": measurement("wmoUnit:degC", Some(5.0)),
            "dewpoint": measurement("wmoUnit:degC", Some(-3.0)),
            "windDirection": measurement("wmoUnit:degree_(angle)", Some(310.0)),
            "windSpeed": measurement("wmoUnit:km_h-1", Some(16.0)),
            "windGust": measurement("wmoUnit:km_h-1", None),
            "barometricPressure": measurement("wmoUnit:Pa", Some(101_320.0)),
            "visibility": measurement("wmoUnit:m", Some(16_093.4)),
            "relativeHumidity": measurement("wmoUnit:percent", Some(55.4)),
            "windChill": measurement("wmoUnit:degC", Some(1.0)),
            "heatIndex": measurement("wmoUnit:degC", None)
        }
    })
}

pub fn stations_body(ids: &[&str]) -> Value {
    let features = ids
        .iter()
        .map(|id| json!({ "properties": { "stationIdentifier": id } }))
        .collect::<Vec<_>>();
    json!({ "features": features })
}

/// Mounts a full weather.gov happy path for one grid point.
pub async fn mount_nws(server: &MockServer) {
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path_regex(r"^/points/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(points_body(&base)))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/gridpoints/OKX/33,37/forecast"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "properties": { "periods": forecast_periods() } })),
        )
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/gridpoints/OKX/33,37/forecast/hourly"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "properties": { "periods": hourly_periods() } })),
        )
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/gridpoints/OKX/33,37/stations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stations_body(&[STATION_ID])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/stations/{STATION_ID}/observations/latest")))
        .respond_with(ResponseTemplate::new(200).set_body_json(observation_body()))
        .mount(server)
        .await;
}

pub fn nominatim_body(entries: &[(&str, &str, &str)]) -> Value {
    Value::Array(
        entries
            .iter()
            .map(|(name, lat, lon)| json!({ "display_name": name, "lat": lat, "lon": lon }))
            .collect(),
    )
}
