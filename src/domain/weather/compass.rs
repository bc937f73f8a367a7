use super::conversions::round_half_up;

pub const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

const SECTOR_DEGREES: f64 = 22.5;

/// Maps a bearing onto the 16-point compass. Sectors are centered on each
/// point, so 350° and 10° both read as "N".
#[must_use]
pub fn degrees_to_compass(degrees: Option<f64>) -> Option<&'static str> {
    let sector = round_half_up(degrees? / SECTOR_DEGREES) as i64;
    let index = sector.rem_euclid(COMPASS_POINTS.len() as i64) as usize;
    Some(COMPASS_POINTS[index])
}
