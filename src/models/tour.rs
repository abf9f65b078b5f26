//! Tour district and stop models, matching the `tour.json` wire format

use serde::{Deserialize, Serialize};

use super::Coordinates;

/// A named touring route composed of multiple stop locations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tour {
    /// Catalog-unique identifier
    pub id: u32,
    /// District label identifying the route
    pub district: String,
    pub stop_count: u32,
    pub walking_distance_km: f64,
    pub walking_time_minutes: u32,
    /// Center of the tour, used for nearest-tour selection
    pub center_coords: Coordinates,
    /// Stops in walking order
    pub locations: Vec<TourStop>,
}

/// A single stop on a tour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TourStop {
    pub id: u32,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub occupant: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub biography: String,
    /// Media URLs for the stop (photos, documents)
    #[serde(default)]
    pub media: Vec<String>,
    pub coords: Coordinates,
}

/// A tour paired with its computed distance to the visitor in kilometers.
#[derive(Debug, Clone, PartialEq)]
pub struct TourDistance {
    pub tour: Tour,
    pub distance: f64,
}
