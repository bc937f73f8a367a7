use std::num::NonZeroUsize;

use anyhow::{Context, Result, anyhow};
use lru::LruCache;
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};
use tracing::debug;

use crate::domain::{
    coords::Coordinates,
    weather::{CurrentConditions, ForecastPeriod, Measurement, PointData},
};

const NWS_URL: &str = "https://api.weather.gov";
pub const USER_AGENT: &str = "petrichor/1.0";
const POINT_CACHE_SIZE: usize = 32;

/// weather.gov client. Point lookups are cached by rounded coordinate since a
/// grid assignment does not change between requests.
#[derive(Debug)]
pub struct NwsClient {
    client: Client,
    base_url: String,
    points: LruCache<String, PointData>,
}

impl NwsClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(NWS_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .context("building weather.gov http client failed")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            points: LruCache::new(
                NonZeroUsize::new(POINT_CACHE_SIZE).unwrap_or(NonZeroUsize::MIN),
            ),
        })
    }

    pub async fn point_data(&mut self, lat: f64, lon: f64) -> Result<PointData> {
        let Coordinates { lat, lon } = Coordinates { lat, lon }.rounded();
        let key = format!("point-{lat},{lon}");

        if let Some(point) = self.points.get(&key) {
            debug!(%key, "point cache hit");
            return Ok(point.clone());
        }

        let url = format!("{}/points/{lat},{lon}", self.base_url);
        let payload: PointsResponse = self.get_json(&url).await?;
        let p = payload.properties;
        let point = PointData {
            forecast_url: p.forecast,
            forecast_hourly_url: p.forecast_hourly,
            stations_url: p.observation_stations,
            city: p.relative_location.properties.city,
            state: p.relative_location.properties.state,
            time_zone: p.time_zone,
        };

        self.points.put(key, point.clone());
        Ok(point)
    }

    pub async fn forecast(&self, forecast_url: &str) -> Result<Vec<ForecastPeriod>> {
        let payload: ForecastResponse = self.get_json(forecast_url).await?;
        Ok(payload.properties.periods)
    }

    pub async fn hourly_forecast(&self, forecast_hourly_url: &str) -> Result<Vec<ForecastPeriod>> {
        let payload: ForecastResponse = self.get_json(forecast_hourly_url).await?;
        Ok(payload.properties.periods)
    }

    /// Latest observation from the first station serving the grid point.
    pub async fn current_conditions(&self, stations_url: &str) -> Result<CurrentConditions> {
        let stations: StationsResponse = self.get_json(stations_url).await?;
        let station_id = stations
            .features
            .into_iter()
            .next()
            .map(|feature| feature.properties.station_identifier)
            .ok_or_else(|| anyhow!("No observation stations found"))?;

        let url = format!(
            "{}/stations/{station_id}/observations/latest",
            self.base_url
        );
        let payload: ObservationResponse = self.get_json(&url).await?;
        let p = payload.properties;

        Ok(CurrentConditions {
            station_name: p.station_name.unwrap_or(station_id),
            timestamp: p.timestamp,
            description: p.text_description.unwrap_or_default(),
            icon: p.icon.unwrap_or_default(),
            temperature_c: p.temperature.value,
            dewpoint_c: p.dewpoint.value,
            wind_direction_deg: p.wind_direction.value,
            wind_speed_kmh: p.wind_speed.value,
            wind_gust_kmh: p.wind_gust.value,
            humidity: p.relative_humidity.value,
            visibility_m: p.visibility.value,
            pressure_pa: p.barometric_pressure.value,
            wind_chill_c: p.wind_chill.value,
            heat_index_c: p.heat_index.value,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(%url, "weather.gov request");
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/geo+json")
            .send()
            .await
            .with_context(|| format!("weather.gov request failed: {url}"))?
            .error_for_status()
            .with_context(|| format!("weather.gov returned non-success status: {url}"))?;

        response
            .json()
            .await
            .with_context(|| format!("failed to parse weather.gov payload: {url}"))
    }
}

#[derive(Debug, Deserialize)]
struct PointsResponse {
    properties: PointProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PointProperties {
    forecast: String,
    forecast_hourly: String,
    observation_stations: String,
    relative_location: RelativeLocation,
    time_zone: String,
}

#[derive(Debug, Deserialize)]
struct RelativeLocation {
    properties: RelativeLocationProperties,
}

#[derive(Debug, Deserialize)]
struct RelativeLocationProperties {
    city: String,
    state: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
struct ForecastProperties {
    periods: Vec<ForecastPeriod>,
}

#[derive(Debug, Deserialize)]
struct StationsResponse {
    features: Vec<StationFeature>,
}

#[derive(Debug, Deserialize)]
struct StationFeature {
    properties: StationProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StationProperties {
    station_identifier: String,
}

#[derive(Debug, Deserialize)]
struct ObservationResponse {
    properties: ObservationProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ObservationProperties {
    station_name: Option<String>,
    timestamp: String,
    text_description: Option<String>,
    icon: Option<String>,
    #[serde(default)]
    temperature: Measurement,
    #[serde(default)]
    dewpoint: Measurement,
    #[serde(default)]
    wind_direction: Measurement,
    #[serde(default)]
    wind_speed: Measurement,
    #[serde(default)]
    wind_gust: Measurement,
    #[serde(default)]
    barometric_pressure: Measurement,
    #[serde(default)]
    visibility: Measurement,
    #[serde(default)]
    relative_humidity: Measurement,
    #[serde(default)]
    wind_chill: Measurement,
    #[serde(default)]
    heat_index: Measurement,
}
