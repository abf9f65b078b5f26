//! HTTP API surface: reverse geocoding proxy and map SDK configuration
//!
//! Error policy: parameter problems come back as 400 with the specific
//! message; anything that goes wrong past validation is logged with
//! detail server-side and surfaced as a generic 500.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::GeocodeError;
use crate::geocode::ReverseGeocoder;
use crate::maps;
use crate::models::CityState;

/// Shared state for the API handlers.
#[derive(Clone)]
pub struct AppState {
    pub geocoder: Arc<dyn ReverseGeocoder>,
    pub maps_api_key: String,
}

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
    code: u16,
}

struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.1,
            code: self.0.as_u16(),
        };
        (self.0, Json(body)).into_response()
    }
}

fn bad_request(err: &GeocodeError) -> ApiError {
    ApiError(StatusCode::BAD_REQUEST, err.to_string())
}

fn internal_error() -> ApiError {
    ApiError(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal Server Error".to_string(),
    )
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/geolocate", get(geolocate))
        .route("/maps", get(maps_script))
        .with_state(state)
}

#[derive(Deserialize)]
struct GeolocateQuery {
    lat: Option<String>,
    lng: Option<String>,
}

// ─── GET /api/geolocate ──────────────────────────────────────────

/// Validate the query before any outbound call. Empty counts as missing.
fn parse_coordinates(params: &GeolocateQuery) -> Result<(f64, f64), GeocodeError> {
    let lat = params
        .lat
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or(GeocodeError::MissingParameters)?;
    let lng = params
        .lng
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or(GeocodeError::MissingParameters)?;

    let latitude = lat.parse().map_err(|_| GeocodeError::InvalidCoordinate)?;
    let longitude = lng.parse().map_err(|_| GeocodeError::InvalidCoordinate)?;
    Ok((latitude, longitude))
}

async fn geolocate(
    State(state): State<AppState>,
    Query(params): Query<GeolocateQuery>,
) -> Result<Json<CityState>, ApiError> {
    let (latitude, longitude) = parse_coordinates(&params).map_err(|e| bad_request(&e))?;

    match state.geocoder.reverse_geocode(latitude, longitude).await {
        Ok(city_state) => {
            debug!(
                "Geolocated {:.4}, {:.4} to {}, {}",
                latitude, longitude, city_state.city, city_state.state
            );
            Ok(Json(city_state))
        }
        Err(err) => {
            // Detail stays in the server log; the client gets a generic failure
            error!(
                "Reverse geocoding failed for {:.4}, {:.4}: {}",
                latitude, longitude, err
            );
            Err(internal_error())
        }
    }
}

// ─── GET /api/maps ───────────────────────────────────────────────

#[derive(Serialize)]
struct MapsResponse {
    #[serde(rename = "scriptUrl")]
    script_url: String,
}

async fn maps_script(State(state): State<AppState>) -> Json<MapsResponse> {
    Json(MapsResponse {
        script_url: maps::script_url(&state.maps_api_key),
    })
}
