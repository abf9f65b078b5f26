//! Reverse-geocoding provider client
//!
//! Talks to the Google Maps Geocoding API and extracts the locality and
//! first-level administrative area out of the response. The trait keeps
//! the HTTP handlers testable without a live provider.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::GeocodeError;
use crate::models::CityState;

const LOCALITY: &str = "locality";
const ADMIN_AREA: &str = "administrative_area_level_1";

/// Reverse-geocoding backend, injectable for testing.
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    /// Resolve a coordinate pair to a city and state.
    async fn reverse_geocode(&self, lat: f64, lng: f64) -> Result<CityState, GeocodeError>;
}

/// Client for the Google Maps Geocoding API.
pub struct GoogleGeocoder {
    client: reqwest::Client,
    api_key: String,
}

impl GoogleGeocoder {
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl ReverseGeocoder for GoogleGeocoder {
    async fn reverse_geocode(&self, lat: f64, lng: f64) -> Result<CityState, GeocodeError> {
        let url = format!(
            "https://maps.googleapis.com/maps/api/geocode/json?latlng={lat},{lng}&key={}",
            self.api_key
        );
        debug!("Reverse geocoding {:.4}, {:.4}", lat, lng);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(GeocodeError::ProviderUnavailable(format!(
                "provider returned status {}",
                response.status()
            )));
        }

        let body: GeocodeResponse = response.json().await.map_err(|e| {
            GeocodeError::ProviderUnavailable(format!("malformed provider payload: {e}"))
        })?;

        extract_city_state(&body)
    }
}

/// Pick the city and state out of a provider response.
///
/// Scans the first result's address components for the first one tagged
/// `locality` and the first tagged `administrative_area_level_1`.
fn extract_city_state(response: &GeocodeResponse) -> Result<CityState, GeocodeError> {
    if response.status != "OK" || response.results.is_empty() {
        return Err(GeocodeError::NoResults);
    }

    let components = &response.results[0].address_components;
    let city = find_component(components, LOCALITY).ok_or(GeocodeError::ComponentNotFound("City"))?;
    let state =
        find_component(components, ADMIN_AREA).ok_or(GeocodeError::ComponentNotFound("State"))?;

    Ok(CityState {
        city: city.long_name.clone(),
        state: state.long_name.clone(),
    })
}

fn find_component<'a>(
    components: &'a [AddressComponent],
    kind: &str,
) -> Option<&'a AddressComponent> {
    components.iter().find(|c| c.types.iter().any(|t| t == kind))
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    address_components: Vec<AddressComponent>,
}

#[derive(Debug, Deserialize)]
struct AddressComponent {
    long_name: String,
    types: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_response(components: &str) -> GeocodeResponse {
        let raw = format!(
            r#"{{
                "status": "OK",
                "results": [{{ "address_components": [{components}] }}]
            }}"#
        );
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn test_extracts_city_and_state_long_names() {
        let response = sample_response(
            r#"{ "long_name": "Stephansplatz", "types": ["route"] },
               { "long_name": "Vienna", "types": ["locality", "political"] },
               { "long_name": "Wien", "types": ["administrative_area_level_1", "political"] },
               { "long_name": "Austria", "types": ["country", "political"] }"#,
        );

        let city_state = extract_city_state(&response).unwrap();
        assert_eq!(city_state.city, "Vienna");
        assert_eq!(city_state.state, "Wien");
    }

    #[test]
    fn test_first_matching_component_wins() {
        let response = sample_response(
            r#"{ "long_name": "First", "types": ["locality"] },
               { "long_name": "Second", "types": ["locality"] },
               { "long_name": "State", "types": ["administrative_area_level_1"] }"#,
        );

        let city_state = extract_city_state(&response).unwrap();
        assert_eq!(city_state.city, "First");
    }

    #[test]
    fn test_missing_locality_is_component_not_found() {
        let response = sample_response(
            r#"{ "long_name": "Wien", "types": ["administrative_area_level_1"] }"#,
        );

        let err = extract_city_state(&response).unwrap_err();
        assert_eq!(err, GeocodeError::ComponentNotFound("City"));
    }

    #[test]
    fn test_missing_admin_area_is_component_not_found() {
        let response = sample_response(r#"{ "long_name": "Vienna", "types": ["locality"] }"#);

        let err = extract_city_state(&response).unwrap_err();
        assert_eq!(err, GeocodeError::ComponentNotFound("State"));
    }

    #[test]
    fn test_zero_results_is_no_results() {
        let response: GeocodeResponse =
            serde_json::from_str(r#"{ "status": "ZERO_RESULTS", "results": [] }"#).unwrap();

        let err = extract_city_state(&response).unwrap_err();
        assert_eq!(err, GeocodeError::NoResults);
    }

    #[test]
    fn test_non_ok_status_is_no_results() {
        let response: GeocodeResponse =
            serde_json::from_str(r#"{ "status": "REQUEST_DENIED" }"#).unwrap();

        assert_eq!(extract_city_state(&response).unwrap_err(), GeocodeError::NoResults);
    }
}
