pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod ui;

#[cfg(test)]
mod test_support;

use std::io;

use anyhow::{Context, Result, bail};
use app::settings::{RuntimeSettings, load_runtime_settings, save_runtime_settings};
use cli::Cli;
use data::{geocode::GeocodeClient, nws::NwsClient};
use domain::{
    coords::is_valid_coordinate,
    report::WeatherReport,
    weather::{GeocodeResolution, Location},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub async fn run(cli: Cli) -> Result<()> {
    init_tracing();

    let (settings, path) = load_runtime_settings(&cli, true);
    if cli.remember {
        match path.as_deref() {
            Some(path) => save_runtime_settings(path, &settings)?,
            None => bail!("no settings location available (HOME is not set)"),
        }
    }

    let mut nws = NwsClient::with_base_url(&cli.nws_url)?;
    let report = fetch_report(&cli, &settings, &mut nws).await?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serializing report failed")?
        );
    } else {
        print!("{}", ui::render(&report, &settings));
    }
    Ok(())
}

/// Resolves the requested location and builds its report from live API data.
/// Point lookups are cached on `nws`, so reusing one client across reports
/// skips the `/points` request for a location it has already seen.
pub async fn fetch_report(
    cli: &Cli,
    settings: &RuntimeSettings,
    nws: &mut NwsClient,
) -> Result<WeatherReport> {
    let location = resolve_location(cli).await?;
    info!(
        place = %location.display_name,
        lat = location.latitude,
        lon = location.longitude,
        "resolved location"
    );

    let point = nws
        .point_data(location.latitude, location.longitude)
        .await?;

    let (forecast, hourly, current) = futures::try_join!(
        nws.forecast(&point.forecast_url),
        nws.hourly_forecast(&point.forecast_hourly_url),
        nws.current_conditions(&point.stations_url),
    )?;

    Ok(WeatherReport::build(
        point.place_name(),
        point,
        current,
        &forecast,
        &hourly,
        usize::from(settings.hourly_hours),
    ))
}

async fn resolve_location(cli: &Cli) -> Result<Location> {
    if let (Some(lat), Some(lon)) = (cli.lat, cli.lon) {
        if !is_valid_coordinate(lat, lon) {
            bail!("invalid coordinates: {lat}, {lon}");
        }
        return Ok(Location::from_coords(lat, lon));
    }

    let Some(place) = cli.place.as_deref() else {
        bail!("give a place name or --lat/--lon");
    };

    match GeocodeClient::with_base_url(&cli.geocode_url)?
        .resolve(place)
        .await?
    {
        GeocodeResolution::Selected(location) => Ok(location),
        GeocodeResolution::NotFound(query) => bail!("no US location found for '{query}'"),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
