//! Client-side location resolution
//!
//! Turns the visitor's device position into a resolved city/state plus
//! the nearest tour district by great-circle distance.

use async_trait::async_trait;
use tracing::debug;

use crate::error::{PositionError, ResolveError};
use crate::geo;
use crate::models::{CityState, Coordinates, Tour, TourDistance, UserLocation};

/// Source of the visitor's current position.
///
/// The device geolocation capability sits behind this trait so the
/// resolution flow can be driven (and tested) with any position source.
#[async_trait]
pub trait PositionSource: Send + Sync {
    /// One-shot query for the current position; no continuous tracking.
    async fn current_position(&self) -> Result<Coordinates, PositionError>;
}

/// A fixed position, for tests and manual overrides.
pub struct FixedPosition(pub Coordinates);

#[async_trait]
impl PositionSource for FixedPosition {
    async fn current_position(&self) -> Result<Coordinates, PositionError> {
        Ok(self.0)
    }
}

/// HTTP client for the tour guide API surface.
pub struct TourApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl TourApiClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Ask the server to reverse-geocode a coordinate pair.
    pub async fn geolocate(&self, coords: Coordinates) -> Result<CityState, ResolveError> {
        let url = format!(
            "{}/api/geolocate?lat={}&lng={}",
            self.base_url, coords.lat, coords.lng
        );
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ResolveError::Geocode(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ResolveError::Geocode(format!("status {status}: {body}")));
        }

        response
            .json()
            .await
            .map_err(|e| ResolveError::Geocode(e.to_string()))
    }

    /// Fetch the static tour catalog.
    pub async fn fetch_tours(&self) -> Result<Vec<Tour>, ResolveError> {
        let url = format!("{}/tour.json", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ResolveError::CatalogFetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ResolveError::CatalogFetch(format!(
                "status {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| ResolveError::CatalogFetch(e.to_string()))
    }
}

/// Pair every tour with its distance to the visitor.
fn tour_distances(visitor: Coordinates, tours: Vec<Tour>) -> Vec<TourDistance> {
    tours
        .into_iter()
        .map(|tour| {
            let distance = geo::distance_km(visitor, tour.center_coords);
            TourDistance { tour, distance }
        })
        .collect()
}

/// Select the minimum-distance tour.
///
/// Ties keep the earliest catalog entry (strict `<` in a left-to-right
/// scan). An empty catalog is rejected before any reduction.
pub fn nearest_tour(visitor: Coordinates, tours: Vec<Tour>) -> Result<TourDistance, ResolveError> {
    let mut candidates = tour_distances(visitor, tours).into_iter();
    let first = candidates.next().ok_or(ResolveError::EmptyCatalog)?;

    Ok(candidates.fold(first, |prev, current| {
        if current.distance < prev.distance {
            current
        } else {
            prev
        }
    }))
}

/// Resolve the visitor's position to a city, state and nearest tour.
///
/// Every step may fail independently; the caller always sees one
/// [`ResolveError`] naming the step and carrying the cause.
pub async fn locate_user(
    source: &dyn PositionSource,
    client: &TourApiClient,
) -> Result<UserLocation, ResolveError> {
    let coords = source.current_position().await?;
    debug!("Visitor position: {}", coords.format());

    let city_state = client.geolocate(coords).await?;
    let tours = client.fetch_tours().await?;
    let closest = nearest_tour(coords, tours)?;

    debug!(
        "Nearest tour: {} at {:.2} km",
        closest.tour.district, closest.distance
    );

    Ok(UserLocation {
        latitude: coords.lat,
        longitude: coords.lng,
        city: city_state.city,
        state: city_state.state,
        tour: closest.tour.district,
        distance: format!("{:.2}", closest.distance),
    })
}
