mod trip;
mod validation;

pub use trip::{
    FIELD_DAY_OF_TRAVEL, FIELD_DESTINATION, FIELD_POI_LIST, FIELD_TRIP_NAME, LatLng, PlaceRef,
    PoiEntry, TripDraft, ValidityFlags,
};
pub use validation::{
    ValidationError, parse_travel_date, validate_travel_date, validate_trip_name,
};
