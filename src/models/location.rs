//! Coordinate and resolved-location models

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lng: f64,
}

impl Coordinates {
    /// Create a new coordinate pair
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Format as a "lat, lng" string with four decimals
    #[must_use]
    pub fn format(&self) -> String {
        format!("{:.4}, {:.4}", self.lat, self.lng)
    }
}

/// City/state pair returned by the reverse-geocoding endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CityState {
    pub city: String,
    pub state: String,
}

/// A visitor position resolved to a city, state and nearest tour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub state: String,
    /// District name of the nearest tour
    pub tour: String,
    /// Distance to the nearest tour's center in kilometers, two decimals
    pub distance: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_format() {
        let vienna = Coordinates::new(48.2082, 16.3738);
        assert_eq!(vienna.format(), "48.2082, 16.3738");
    }

    #[test]
    fn test_city_state_wire_shape() {
        let parsed: CityState =
            serde_json::from_str(r#"{"city":"Vienna","state":"Vienna"}"#).unwrap();
        assert_eq!(parsed.city, "Vienna");
        assert_eq!(parsed.state, "Vienna");
    }
}
