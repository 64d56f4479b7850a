use chrono::NaiveDate;

use super::validation::{validate_travel_date, validate_trip_name};

/// Form field name for the trip name, as the planner servlet expects it.
pub const FIELD_TRIP_NAME: &str = "inputTripName";
/// Form field name for the destination place identifier.
pub const FIELD_DESTINATION: &str = "inputDestination";
/// Form field name for the travel date.
pub const FIELD_DAY_OF_TRAVEL: &str = "inputDayOfTravel";
/// Form field name for each point of interest; repeated once per entry.
pub const FIELD_POI_LIST: &str = "poiList";

/// A latitude/longitude pair.
///
/// Forwarded to the places API as a search center; never interpreted here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// An opaque place reference: provider identifier plus display metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceRef {
    /// Provider-assigned identifier, forwarded verbatim on submission.
    pub id: String,
    /// Display name of the place.
    pub name: String,
    /// General address or neighborhood, when the provider supplies one.
    pub vicinity: Option<String>,
    pub location: LatLng,
}

impl PlaceRef {
    /// Display label: the name, with the vicinity appended when present
    /// (`"Pier 39, San Francisco"`).
    pub fn display_label(&self) -> String {
        match &self.vicinity {
            Some(vicinity) => format!("{}, {}", self.name, vicinity),
            None => self.name.clone(),
        }
    }
}

/// A single point-of-interest entry in the trip draft.
#[derive(Debug, Clone, PartialEq)]
pub struct PoiEntry {
    /// Label shown in the list and posted to the server.
    pub label: String,
    /// The place this entry came from, when accepted from a suggestion.
    pub source: Option<PlaceRef>,
}

/// Field validity, derived on demand from current form contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidityFlags {
    pub name: bool,
    pub destination: bool,
    pub date: bool,
    pub has_pois: bool,
}

impl ValidityFlags {
    /// Derives validity from the current field contents.
    ///
    /// The destination counts as valid only when a place has been confirmed
    /// from a search result; freehand text never does.
    pub fn compute(
        name: &str,
        destination: Option<&PlaceRef>,
        date: &str,
        poi_count: usize,
    ) -> Self {
        Self {
            name: validate_trip_name(name).is_ok(),
            destination: destination.is_some(),
            date: validate_travel_date(date).is_ok(),
            has_pois: poi_count > 0,
        }
    }

    /// `true` if the form may advance to the POI stage: name, destination,
    /// and date each valid, independent of POI count.
    pub fn advance_ready(self) -> bool {
        self.name && self.destination && self.date
    }

    /// `true` if the trip may be submitted: advance-ready plus at least one
    /// point of interest.
    pub fn submit_ready(self) -> bool {
        self.advance_ready() && self.has_pois
    }
}

/// The in-progress trip: stage-1 fields fixed when the form advances, plus
/// the user-editable POI list.
///
/// Lives only for the current form cycle; the submission POST is the only
/// durable write.
#[derive(Debug, Clone, PartialEq)]
pub struct TripDraft {
    pub name: String,
    pub destination: PlaceRef,
    pub travel_date: NaiveDate,
    pois: Vec<PoiEntry>,
}

impl TripDraft {
    /// Creates a draft with an empty POI list.
    pub fn new(name: String, destination: PlaceRef, travel_date: NaiveDate) -> Self {
        Self::with_pois(name, destination, travel_date, Vec::new())
    }

    /// Creates a draft carrying over an existing POI list.
    ///
    /// Used when the form re-advances after a trip back to stage 1: edits to
    /// the stage-1 fields must not clear already-added POIs.
    pub fn with_pois(
        name: String,
        destination: PlaceRef,
        travel_date: NaiveDate,
        pois: Vec<PoiEntry>,
    ) -> Self {
        Self {
            name,
            destination,
            travel_date,
            pois,
        }
    }

    /// Returns the POI entries in display order.
    pub fn pois(&self) -> &[PoiEntry] {
        &self.pois
    }

    /// Consumes the draft, returning the POI list.
    pub fn into_pois(self) -> Vec<PoiEntry> {
        self.pois
    }

    /// Appends a point of interest. A blank label is rejected as a no-op.
    ///
    /// Returns `true` if the entry was added.
    pub fn add_poi(&mut self, label: &str, source: Option<PlaceRef>) -> bool {
        if label.trim().is_empty() {
            return false;
        }
        self.pois.push(PoiEntry {
            label: label.to_string(),
            source,
        });
        true
    }

    /// Removes the entry at the given display position.
    pub fn remove_poi(&mut self, index: usize) -> Option<PoiEntry> {
        if index < self.pois.len() {
            Some(self.pois.remove(index))
        } else {
            None
        }
    }

    /// Current validity, with the stage-1 fields valid by construction.
    pub fn validity(&self) -> ValidityFlags {
        ValidityFlags {
            name: true,
            destination: true,
            date: true,
            has_pois: !self.pois.is_empty(),
        }
    }

    /// `true` if the draft may be submitted.
    pub fn submit_ready(&self) -> bool {
        self.validity().submit_ready()
    }

    /// Builds the submission payload: one pair per stage-1 field, then one
    /// `poiList` pair per entry in current display order.
    ///
    /// Runs synchronously at submit time so the POST body reflects the list
    /// exactly as the user last arranged it.
    pub fn serialize_for_submit(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            (FIELD_TRIP_NAME.to_string(), self.name.clone()),
            (FIELD_DESTINATION.to_string(), self.destination.id.clone()),
            (
                FIELD_DAY_OF_TRAVEL.to_string(),
                self.travel_date.format("%Y-%m-%d").to_string(),
            ),
        ];
        for poi in &self.pois {
            fields.push((FIELD_POI_LIST.to_string(), poi.label.clone()));
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_place(id: &str, name: &str) -> PlaceRef {
        PlaceRef {
            id: id.to_string(),
            name: name.to_string(),
            vicinity: Some("San Francisco".to_string()),
            location: LatLng {
                lat: 37.7749,
                lng: -122.4194,
            },
        }
    }

    fn make_draft() -> TripDraft {
        TripDraft::new(
            "Bay Area Weekend".to_string(),
            make_place("sf-001", "San Francisco"),
            NaiveDate::from_ymd_opt(2026, 8, 14).unwrap(),
        )
    }

    mod validity {
        use super::*;

        #[test]
        fn all_fields_valid_is_advance_ready() {
            let place = make_place("sf-001", "San Francisco");
            let flags = ValidityFlags::compute("Trip", Some(&place), "2026-08-14", 0);
            assert!(flags.advance_ready());
            assert!(!flags.submit_ready());
        }

        #[test]
        fn empty_name_blocks_advance() {
            let place = make_place("sf-001", "San Francisco");
            let flags = ValidityFlags::compute("", Some(&place), "2026-08-14", 0);
            assert!(!flags.name);
            assert!(!flags.advance_ready());
        }

        #[test]
        fn unconfirmed_destination_blocks_advance() {
            let flags = ValidityFlags::compute("Trip", None, "2026-08-14", 0);
            assert!(!flags.destination);
            assert!(!flags.advance_ready());
        }

        #[test]
        fn invalid_date_blocks_advance() {
            let place = make_place("sf-001", "San Francisco");
            let flags = ValidityFlags::compute("Trip", Some(&place), "next friday", 0);
            assert!(!flags.date);
            assert!(!flags.advance_ready());
        }

        #[test]
        fn each_field_gates_advance_independently() {
            let place = make_place("sf-001", "San Francisco");
            let cases = [
                ("", Some(&place), "2026-08-14"),
                ("Trip", None, "2026-08-14"),
                ("Trip", Some(&place), ""),
            ];
            for (name, destination, date) in cases {
                let flags = ValidityFlags::compute(name, destination, date, 5);
                assert!(
                    !flags.advance_ready(),
                    "({name:?}, {:?}, {date:?}) should not be advance-ready",
                    destination.map(|p| &p.name)
                );
                assert!(!flags.submit_ready());
            }
        }

        #[test]
        fn submit_requires_a_poi() {
            let place = make_place("sf-001", "San Francisco");
            let without = ValidityFlags::compute("Trip", Some(&place), "2026-08-14", 0);
            let with = ValidityFlags::compute("Trip", Some(&place), "2026-08-14", 1);
            assert!(!without.submit_ready());
            assert!(with.submit_ready());
        }

        #[test]
        fn pois_alone_never_enable_submit() {
            let flags = ValidityFlags::compute("", None, "", 3);
            assert!(flags.has_pois);
            assert!(!flags.submit_ready());
        }
    }

    mod poi_list {
        use super::*;

        #[test]
        fn add_appends_in_order() {
            let mut draft = make_draft();
            assert!(draft.add_poi("Pier 39", None));
            assert!(draft.add_poi("Golden Gate Park", None));
            let labels: Vec<&str> = draft.pois().iter().map(|p| p.label.as_str()).collect();
            assert_eq!(labels, vec!["Pier 39", "Golden Gate Park"]);
        }

        #[test]
        fn blank_label_is_rejected() {
            let mut draft = make_draft();
            assert!(!draft.add_poi("", None));
            assert!(!draft.add_poi("   ", None));
            assert!(draft.pois().is_empty());
        }

        #[test]
        fn add_then_remove_restores_prior_state() {
            let mut draft = make_draft();
            draft.add_poi("Pier 39", None);
            let before_len = draft.pois().len();
            let before_ready = draft.submit_ready();

            draft.add_poi("Golden Gate Park", None);
            draft.remove_poi(1);

            assert_eq!(draft.pois().len(), before_len);
            assert_eq!(draft.submit_ready(), before_ready);
        }

        #[test]
        fn add_then_remove_only_poi_disables_submit() {
            let mut draft = make_draft();
            assert!(!draft.submit_ready());
            draft.add_poi("Pier 39", None);
            assert!(draft.submit_ready());
            draft.remove_poi(0);
            assert!(!draft.submit_ready());
        }

        #[test]
        fn remove_returns_the_entry() {
            let mut draft = make_draft();
            draft.add_poi("Pier 39", None);
            let removed = draft.remove_poi(0).unwrap();
            assert_eq!(removed.label, "Pier 39");
        }

        #[test]
        fn remove_out_of_bounds_is_noop() {
            let mut draft = make_draft();
            draft.add_poi("Pier 39", None);
            assert_eq!(draft.remove_poi(5), None);
            assert_eq!(draft.pois().len(), 1);
        }

        #[test]
        fn source_place_is_kept() {
            let mut draft = make_draft();
            let place = make_place("pier-39", "Pier 39");
            draft.add_poi("Pier 39, San Francisco", Some(place.clone()));
            assert_eq!(draft.pois()[0].source, Some(place));
        }

        #[test]
        fn with_pois_carries_existing_entries() {
            let mut draft = make_draft();
            draft.add_poi("Pier 39", None);
            let pois = draft.clone().into_pois();

            let rebuilt = TripDraft::with_pois(
                "Renamed Trip".to_string(),
                make_place("oak-001", "Oakland"),
                NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
                pois,
            );
            assert_eq!(rebuilt.pois().len(), 1);
            assert!(rebuilt.submit_ready());
        }
    }

    mod serialization {
        use super::*;

        #[test]
        fn stage_one_fields_come_first() {
            let draft = make_draft();
            let fields = draft.serialize_for_submit();
            assert_eq!(
                fields,
                vec![
                    ("inputTripName".to_string(), "Bay Area Weekend".to_string()),
                    ("inputDestination".to_string(), "sf-001".to_string()),
                    ("inputDayOfTravel".to_string(), "2026-08-14".to_string()),
                ]
            );
        }

        #[test]
        fn one_poi_field_per_entry_in_display_order() {
            let mut draft = make_draft();
            draft.add_poi("Pier 39", None);
            draft.add_poi("Golden Gate Park", None);

            let fields = draft.serialize_for_submit();
            let pois: Vec<&str> = fields
                .iter()
                .filter(|(k, _)| k == FIELD_POI_LIST)
                .map(|(_, v)| v.as_str())
                .collect();
            assert_eq!(pois, vec!["Pier 39", "Golden Gate Park"]);
        }

        #[test]
        fn removal_before_submit_drops_the_field() {
            let mut draft = make_draft();
            draft.add_poi("Pier 39", None);
            draft.add_poi("Golden Gate Park", None);
            draft.remove_poi(0);

            let fields = draft.serialize_for_submit();
            let pois: Vec<&str> = fields
                .iter()
                .filter(|(k, _)| k == FIELD_POI_LIST)
                .map(|(_, v)| v.as_str())
                .collect();
            assert_eq!(pois, vec!["Golden Gate Park"]);
        }
    }

    mod place_ref {
        use super::*;

        #[test]
        fn display_label_includes_vicinity() {
            let place = make_place("pier-39", "Pier 39");
            assert_eq!(place.display_label(), "Pier 39, San Francisco");
        }

        #[test]
        fn display_label_without_vicinity_is_name() {
            let mut place = make_place("pier-39", "Pier 39");
            place.vicinity = None;
            assert_eq!(place.display_label(), "Pier 39");
        }
    }
}
