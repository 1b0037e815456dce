use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// A single point of interest shown both as a map marker and as a tray card.
///
/// Immutable once constructed; the id is index-derived and only meaningful
/// within the generation of the `PointSet` that assigned it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub id: usize,
    pub coordinate: LatLng,
    pub title: String,
    pub address: String,
    pub rating: f64,
    pub review_count: u32,
    pub image_ref: Option<String>,
}

impl PointOfInterest {
    pub fn new(id: usize, coordinate: LatLng, title: String, address: String) -> Self {
        Self {
            id,
            coordinate,
            title,
            address,
            rating: 0.0,
            review_count: 0,
            image_ref: None,
        }
    }

    pub fn with_rating(mut self, rating: f64, review_count: u32) -> Self {
        self.rating = rating;
        self.review_count = review_count;
        self
    }

    pub fn with_image_ref(mut self, image_ref: String) -> Self {
        self.image_ref = Some(image_ref);
        self
    }
}

/// The ordered collection of points of interest for the current screen
/// session.
///
/// Replaced wholesale when a fresh search response arrives; indices are only
/// meaningful relative to one `replace_all` call, tracked by the generation
/// counter.
#[derive(Debug, Clone, Default)]
pub struct PointSet {
    points: Vec<PointOfInterest>,
    generation: u64,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Generation of the current data; bumped on every `replace_all`
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn point(&self, index: usize) -> Option<&PointOfInterest> {
        self.points.get(index)
    }

    pub fn try_point(&self, index: usize) -> crate::Result<&PointOfInterest> {
        self.points
            .get(index)
            .ok_or(crate::TrayMapError::IndexOutOfRange {
                index,
                len: self.points.len(),
            })
    }

    pub fn last_index(&self) -> Option<usize> {
        self.points.len().checked_sub(1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointOfInterest> {
        self.points.iter()
    }

    /// Atomically swaps the entire collection and bumps the generation.
    ///
    /// Records with an invalid coordinate are excluded individually; ids are
    /// reassigned from the surviving positions. Returns the number of points
    /// kept.
    pub fn replace_all(&mut self, points: impl IntoIterator<Item = PointOfInterest>) -> usize {
        let mut next = Vec::new();
        for mut point in points {
            if !point.coordinate.is_valid() {
                log::warn!(
                    "skipping point '{}' with invalid coordinate ({}, {})",
                    point.title,
                    point.coordinate.lat,
                    point.coordinate.lng
                );
                continue;
            }
            point.id = next.len();
            next.push(point);
        }

        self.points = next;
        self.generation = self.generation.wrapping_add(1);
        log::debug!(
            "point set replaced: {} points, generation {}",
            self.points.len(),
            self.generation
        );
        self.points.len()
    }
}
