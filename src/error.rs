//! Error types for the tour guide service

use thiserror::Error;

/// Failures of the reverse-geocoding endpoint and its provider client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeocodeError {
    /// A required request parameter was absent
    #[error("Latitude and longitude are required.")]
    MissingParameters,

    /// A request parameter did not parse as a coordinate
    #[error("Invalid latitude or longitude.")]
    InvalidCoordinate,

    /// The outbound provider call failed or returned a malformed payload
    #[error("Failed to fetch location data from the geocoding provider: {0}")]
    ProviderUnavailable(String),

    /// The provider returned no results for the coordinates
    #[error("No results found for the given coordinates.")]
    NoResults,

    /// The provider response lacked a required address component
    #[error("{0} not found in the location data.")]
    ComponentNotFound(&'static str),
}

impl From<reqwest::Error> for GeocodeError {
    fn from(err: reqwest::Error) -> Self {
        Self::ProviderUnavailable(err.to_string())
    }
}

/// Device position acquisition failures, mirroring the platform taxonomy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("Geolocation is not supported on this platform.")]
    Unsupported,

    #[error("Permission to read the device position was denied.")]
    PermissionDenied,

    #[error("The device position is unavailable.")]
    PositionUnavailable,

    #[error("Timed out waiting for the device position.")]
    Timeout,
}

/// The one error shape the resolution flow surfaces to its caller.
///
/// Each variant names the step that failed and carries the underlying
/// cause's message, so diagnostics survive without flattening everything
/// into a single string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Acquiring the device position failed
    #[error("Failed to locate user: {0}")]
    Location(#[from] PositionError),

    /// The reverse-geocoding endpoint failed or returned garbage
    #[error("Failed to locate user: {0}")]
    Geocode(String),

    /// The tour catalog could not be fetched
    #[error("Failed to locate user: failed to fetch tours: {0}")]
    CatalogFetch(String),

    /// The tour catalog held no tours to choose from
    #[error("Failed to locate user: the tour catalog is empty")]
    EmptyCatalog,
}
