//! TUI screen implementations.

pub mod help;
pub mod poi_review;
pub mod sign_in;
pub mod submitted;
pub mod trip_details;

pub use help::{HelpState, draw_help};
pub use poi_review::{PoiReviewState, draw_poi_review};
pub use sign_in::{draw_sign_in, handle_sign_in_key};
pub use submitted::draw_submitted;
pub use trip_details::{TripDetailsState, draw_trip_details};
