use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::nws::USER_AGENT;
use crate::domain::{
    coords::parse_coordinates,
    weather::{GeocodeResolution, Location},
};

const GEOCODE_URL: &str = "https://nominatim.openstreetmap.org/search";
const MIN_QUERY_LEN: usize = 2;

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    base_url: String,
}

impl GeocodeClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(GEOCODE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: Client::builder()
                .user_agent(USER_AGENT)
                .timeout(std::time::Duration::from_secs(8))
                .build()
                .context("building geocoding http client failed")?,
            base_url: base_url.into(),
        })
    }

    /// Up to five US matches. Queries shorter than two characters are not sent.
    pub async fn search(&self, query: &str) -> Result<Vec<Location>> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            return Ok(Vec::new());
        }

        debug!(%query, "geocoding request");
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", query),
                ("format", "json"),
                ("limit", "5"),
                ("countrycodes", "us"),
            ])
            .send()
            .await
            .context("geocoding request failed")?
            .error_for_status()
            .context("geocoding request returned non-success status")?;

        let payload: Vec<NominatimResult> = response
            .json()
            .await
            .context("failed to decode geocoding response")?;

        Ok(payload.into_iter().filter_map(to_location).collect())
    }

    pub async fn resolve(&self, query: &str) -> Result<GeocodeResolution> {
        let mut matches = self.search(query).await?;
        if matches.is_empty() {
            return Ok(GeocodeResolution::NotFound(query.trim().to_string()));
        }
        Ok(GeocodeResolution::Selected(matches.remove(0)))
    }
}

#[derive(Debug, Deserialize)]
struct NominatimResult {
    lat: String,
    lon: String,
    display_name: String,
}

fn to_location(entry: NominatimResult) -> Option<Location> {
    let Some(coords) = parse_coordinates(&entry.lat, &entry.lon) else {
        debug!(lat = %entry.lat, lon = %entry.lon, "dropping geocode result with bad coordinates");
        return None;
    };

    Some(Location {
        display_name: entry.display_name,
        latitude: coords.lat,
        longitude: coords.lon,
    })
}
