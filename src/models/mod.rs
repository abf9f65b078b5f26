//! Data models for the tour guide service
//!
//! - Location: coordinates and resolved visitor locations
//! - Tour: tour districts, stops and distance-annotated tours

pub mod location;
pub mod tour;

// Re-export all public types for convenient access
pub use location::{CityState, Coordinates, UserLocation};
pub use tour::{Tour, TourDistance, TourStop};
