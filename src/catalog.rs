//! Server-side tour catalog loading and validation

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::models::Tour;

/// Load and validate the tour catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<Vec<Tour>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read tour catalog {}", path.display()))?;
    let tours: Vec<Tour> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse tour catalog {}", path.display()))?;
    validate_unique_ids(&tours)?;
    Ok(tours)
}

/// Tour identifiers must be unique within the catalog.
pub fn validate_unique_ids(tours: &[Tour]) -> Result<()> {
    let mut seen = HashSet::new();
    for tour in tours {
        if !seen.insert(tour.id) {
            bail!("Duplicate tour id {} in catalog", tour.id);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;

    fn tour(id: u32) -> Tour {
        Tour {
            id,
            district: format!("District {id}"),
            stop_count: 0,
            walking_distance_km: 0.0,
            walking_time_minutes: 0,
            center_coords: Coordinates::new(48.2, 16.37),
            locations: Vec::new(),
        }
    }

    #[test]
    fn test_unique_ids_pass() {
        assert!(validate_unique_ids(&[tour(1), tour(2), tour(3)]).is_ok());
    }

    #[test]
    fn test_duplicate_ids_fail() {
        let err = validate_unique_ids(&[tour(1), tour(2), tour(1)]).unwrap_err();
        assert!(err.to_string().contains("Duplicate tour id 1"));
    }

    #[test]
    fn test_bundled_catalog_parses() {
        let tours = load_catalog(Path::new("static/tour.json")).unwrap();
        assert!(!tours.is_empty());
        for tour in &tours {
            assert_eq!(tour.stop_count as usize, tour.locations.len());
        }
    }
}
