#![allow(clippy::missing_errors_doc)]

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::domain::weather::TemperatureUnit;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum UnitsArg {
    #[value(name = "f", alias = "fahrenheit")]
    Fahrenheit,
    #[value(name = "c", alias = "celsius")]
    Celsius,
}

impl From<UnitsArg> for TemperatureUnit {
    fn from(value: UnitsArg) -> Self {
        match value {
            UnitsArg::Fahrenheit => Self::Fahrenheit,
            UnitsArg::Celsius => Self::Celsius,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconMode {
    Unicode,
    Ascii,
    Emoji,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Parser, Clone)]
#[command(
    name = "petrichor",
    version,
    about = "US weather conditions and forecasts from weather.gov"
)]
pub struct Cli {
    /// Place or address to look up (US only)
    pub place: Option<String>,

    /// Latitude, instead of a place name
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude, instead of a place name
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Display units (defaults to the saved preference, else Fahrenheit)
    #[arg(long, value_enum)]
    pub units: Option<UnitsArg>,

    /// Hours shown in the hourly strip (1..156)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..=156))]
    pub hours: Option<u16>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Save --units and --hours as the new defaults
    #[arg(long)]
    pub remember: bool,

    /// Force ASCII icons
    #[arg(long, conflicts_with = "emoji_icons")]
    pub ascii_icons: bool,

    /// Force emoji icons
    #[arg(long)]
    pub emoji_icons: bool,

    /// weather.gov API base URL
    #[arg(long, default_value = "https://api.weather.gov")]
    pub nws_url: String,

    /// Nominatim search endpoint
    #[arg(long, default_value = "https://nominatim.openstreetmap.org/search")]
    pub geocode_url: String,
}
