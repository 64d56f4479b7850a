//! Places search: destination text search and nearby suggested locations.
//!
//! The trip form treats this API as opaque — it forwards a center point, a
//! radius, and a category, and renders whatever comes back.

mod client;
mod error;

pub use client::{MAX_SUGGESTIONS, PlacesClient, SEARCH_RADIUS_METERS, TOURIST_ATTRACTION};
pub use error::PlacesError;
