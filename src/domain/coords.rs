use serde::Serialize;

use super::weather::round_half_up;

/// A validated latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    /// Both components rounded to four places.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self {
            lat: round_coordinate(self.lat),
            lon: round_coordinate(self.lon),
        }
    }
}

/// Rounds to four decimal places (about 11 m), keeping point lookups and
/// their cache keys stable.
#[must_use]
pub fn round_coordinate(coord: f64) -> f64 {
    round_half_up(coord * 10_000.0) / 10_000.0
}

#[must_use]
pub fn is_valid_coordinate(lat: f64, lon: f64) -> bool {
    if lat.is_nan() || lon.is_nan() {
        return false;
    }
    (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)
}

/// Parses a lat/lon pair from user input; `None` when either side is not a
/// number or falls outside the globe.
#[must_use]
pub fn parse_coordinates(lat: &str, lon: &str) -> Option<Coordinates> {
    let lat = lat.trim().parse::<f64>().ok()?;
    let lon = lon.trim().parse::<f64>().ok()?;
    is_valid_coordinate(lat, lon).then_some(Coordinates { lat, lon })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_four_places() {
        assert_eq!(round_coordinate(40.748817), 40.7488);
        assert_eq!(round_coordinate(-73.985664), -73.9857);
        assert_eq!(round_coordinate(12.0), 12.0);
    }

    #[test]
    fn negative_ties_round_toward_positive() {
        assert_eq!(round_coordinate(-73.98575), -73.9857);
        assert_eq!(round_coordinate(-87.62985), -87.6298);
        assert_eq!(round_coordinate(40.74885), 40.7489);
    }

    #[test]
    fn rounding_is_stable() {
        let once = round_coordinate(40.748817);
        assert_eq!(round_coordinate(once), once);
    }

    #[test]
    fn validates_ranges() {
        assert!(is_valid_coordinate(40.7484, -73.9856));
        assert!(is_valid_coordinate(90.0, 180.0));
        assert!(is_valid_coordinate(-90.0, -180.0));
        assert!(!is_valid_coordinate(91.0, -73.0));
        assert!(!is_valid_coordinate(40.0, -180.5));
    }

    #[test]
    fn nan_is_invalid() {
        assert!(!is_valid_coordinate(f64::NAN, -73.0));
        assert!(!is_valid_coordinate(40.0, f64::NAN));
    }

    #[test]
    fn parses_query_values() {
        assert_eq!(
            parse_coordinates(" 40.7484", "-73.9856 "),
            Some(Coordinates {
                lat: 40.7484,
                lon: -73.9856
            })
        );
        assert_eq!(parse_coordinates("", "-73.9856"), None);
        assert_eq!(parse_coordinates("north", "-73.9856"), None);
        assert_eq!(parse_coordinates("91", "-73"), None);
        assert_eq!(parse_coordinates("NaN", "-73"), None);
    }

    #[test]
    fn rounded_pair_rounds_both_sides() {
        let c = Coordinates {
            lat: 40.748817,
            lon: -73.985664,
        };
        assert_eq!(
            c.rounded(),
            Coordinates {
                lat: 40.7488,
                lon: -73.9857
            }
        );
    }
}
