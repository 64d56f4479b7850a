use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use super::error::PlacesError;
use crate::model::{LatLng, PlaceRef};

/// Fixed nearby-search radius around the chosen destination, in meters.
pub const SEARCH_RADIUS_METERS: u32 = 50_000;

/// Place category used for suggested locations.
pub const TOURIST_ATTRACTION: &str = "tourist_attraction";

/// Maximum number of suggestion cards rendered from one nearby search.
pub const MAX_SUGGESTIONS: usize = 20;

const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

/// Wire shape of a places search response.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    status: String,
    #[serde(default)]
    results: Vec<PlaceResult>,
}

#[derive(Debug, Deserialize)]
struct PlaceResult {
    place_id: String,
    name: String,
    /// Nearby-search responses carry `vicinity`; text-search responses carry
    /// `formatted_address` instead.
    vicinity: Option<String>,
    formatted_address: Option<String>,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Location,
}

#[derive(Debug, Deserialize)]
struct Location {
    lat: f64,
    lng: f64,
}

impl PlaceResult {
    fn into_place_ref(self) -> PlaceRef {
        PlaceRef {
            id: self.place_id,
            name: self.name,
            vicinity: self.vicinity.or(self.formatted_address),
            location: LatLng {
                lat: self.geometry.location.lat,
                lng: self.geometry.location.lng,
            },
        }
    }
}

/// Maps a search response into place references.
///
/// `ZERO_RESULTS` is a successful empty answer, not an error.
fn places_from_response(response: SearchResponse) -> Result<Vec<PlaceRef>, PlacesError> {
    match response.status.as_str() {
        STATUS_OK => Ok(response
            .results
            .into_iter()
            .map(PlaceResult::into_place_ref)
            .collect()),
        STATUS_ZERO_RESULTS => Ok(Vec::new()),
        other => Err(PlacesError::Provider(other.to_string())),
    }
}

/// Client for the places search API.
///
/// Two operations back the trip form: text search confirms a destination
/// from freehand input, nearby search produces suggested locations around
/// the confirmed destination.
pub struct PlacesClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl PlacesClient {
    /// Creates a client for the given API base URL and key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, PlacesError> {
        let http = Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    async fn search(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<PlaceRef>, PlacesError> {
        let url = format!("{}/{endpoint}/json", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let body: SearchResponse = response.json().await?;
        places_from_response(body)
    }

    /// Searches places matching a freehand query, for destination
    /// confirmation.
    pub async fn search_text(&self, query: &str) -> Result<Vec<PlaceRef>, PlacesError> {
        self.search("textsearch", &[("query", query.to_string())])
            .await
    }

    /// Searches places of the given category around a center point.
    pub async fn nearby_search(
        &self,
        center: LatLng,
        radius_meters: u32,
        category: &str,
    ) -> Result<Vec<PlaceRef>, PlacesError> {
        self.search(
            "nearbysearch",
            &[
                ("location", format!("{},{}", center.lat, center.lng)),
                ("radius", radius_meters.to_string()),
                ("type", category.to_string()),
            ],
        )
        .await
    }
}
