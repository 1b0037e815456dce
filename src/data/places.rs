//! Places-search response ingestion
//!
//! The search collaborator delivers one response batch after a
//! location+radius query; this module models that payload and converts it
//! into point-of-interest records. Issuing the network call, retries and
//! caching stay upstream.

use crate::core::poi::PointOfInterest;
use serde::Deserialize;

/// One batch of place results, replacing any prior batch
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlacesResponse {
    #[serde(default)]
    pub results: Vec<PlaceResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceResult {
    pub name: Option<String>,
    pub vicinity: Option<String>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u32>,
    pub geometry: Option<PlaceGeometry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceGeometry {
    pub location: Option<PlaceLocation>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PlaceLocation {
    pub lat: f64,
    pub lng: f64,
}

impl PlacesResponse {
    pub fn from_json(payload: &str) -> crate::Result<Self> {
        serde_json::from_str(payload).map_err(Into::into)
    }

    /// Converts the batch into point-of-interest records with index-derived
    /// ids. Results without a usable coordinate are skipped; the rest of the
    /// batch still goes through.
    pub fn into_points(self) -> Vec<PointOfInterest> {
        let mut points = Vec::with_capacity(self.results.len());
        for result in self.results {
            let name = result.name.unwrap_or_default();
            let Some(location) = result.geometry.and_then(|g| g.location) else {
                log::warn!("skipping place '{name}': no coordinate in response");
                continue;
            };
            let coordinate = match crate::core::geo::LatLng::try_new(location.lat, location.lng) {
                Ok(coordinate) => coordinate,
                Err(err) => {
                    log::warn!("skipping place '{name}': {err}");
                    continue;
                }
            };

            let point = PointOfInterest::new(
                points.len(),
                coordinate,
                name,
                result.vicinity.unwrap_or_default(),
            )
            .with_rating(
                result.rating.unwrap_or(0.0),
                result.user_ratings_total.unwrap_or(0),
            );
            points.push(point);
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "results": [
            {
                "name": "Central Station Toilet",
                "vicinity": "12 George St",
                "rating": 4.1,
                "user_ratings_total": 37,
                "geometry": { "location": { "lat": -33.8675, "lng": 151.2070 } }
            },
            {
                "name": "No Location",
                "vicinity": "unknown",
                "geometry": {}
            },
            {
                "name": "Park Restroom",
                "vicinity": "Hyde Park",
                "rating": 3.6,
                "user_ratings_total": 12,
                "geometry": { "location": { "lat": -33.8731, "lng": 151.2110 } }
            }
        ]
    }"#;

    #[test]
    fn test_parse_and_convert_batch() {
        let response = PlacesResponse::from_json(PAYLOAD).unwrap();
        let points = response.into_points();

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].id, 0);
        assert_eq!(points[0].title, "Central Station Toilet");
        assert_eq!(points[0].address, "12 George St");
        assert_eq!(points[0].rating, 4.1);
        assert_eq!(points[0].review_count, 37);
        assert_eq!(points[1].id, 1);
        assert_eq!(points[1].title, "Park Restroom");
    }

    #[test]
    fn test_missing_coordinate_does_not_abort_batch() {
        let response = PlacesResponse::from_json(PAYLOAD).unwrap();
        assert_eq!(response.results.len(), 3);
        assert_eq!(response.into_points().len(), 2);
    }

    #[test]
    fn test_out_of_range_coordinate_skipped() {
        let payload = r#"{
            "results": [
                { "name": "bad", "geometry": { "location": { "lat": 99.0, "lng": 500.0 } } },
                { "name": "good", "geometry": { "location": { "lat": 1.0, "lng": 2.0 } } }
            ]
        }"#;
        let points = PlacesResponse::from_json(payload).unwrap().into_points();

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].title, "good");
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            PlacesResponse::from_json("{ not json"),
            Err(crate::TrayMapError::Serialization(_))
        ));
    }

    #[test]
    fn test_empty_response_yields_no_points() {
        let response = PlacesResponse::from_json("{}").unwrap();
        assert!(response.into_points().is_empty());
    }
}
