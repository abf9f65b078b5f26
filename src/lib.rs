//! Tourguide - location-aware museum tour guide service
//!
//! This library provides the server side of the tour guide app (reverse
//! geocoding proxy, map SDK configuration, static tour catalog) and the
//! client-side resolution flow that turns a visitor's coordinates into a
//! city, state and nearest tour district.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod geo;
pub mod geocode;
pub mod locator;
pub mod maps;
pub mod models;
pub mod web;

// Re-export core types for public API
pub use config::Config;
pub use error::{GeocodeError, PositionError, ResolveError};
pub use geocode::{GoogleGeocoder, ReverseGeocoder};
pub use locator::{PositionSource, TourApiClient, locate_user};
pub use models::{CityState, Coordinates, Tour, TourDistance, TourStop, UserLocation};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
