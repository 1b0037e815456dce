pub mod places;

pub use places::{PlaceResult, PlacesResponse};
