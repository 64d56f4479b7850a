//! Background network jobs and their completion events.
//!
//! The event loop stays synchronous: screens return [`Action`]s, the `App`
//! turns guarded ones into [`Job`]s, and the [`JobRunner`] spawns each job
//! on the tokio runtime. Completions come back over an `mpsc` channel the
//! loop drains between frames, so a slow or failed fetch never blocks input.
//!
//! [`Action`]: super::action::Action

use std::sync::Arc;
use std::sync::mpsc::Sender;

use tokio::runtime::Handle;

use crate::api::{ApiError, AuthStatus, PlannerClient};
use crate::model::{LatLng, PlaceRef};
use crate::places::{PlacesClient, PlacesError, SEARCH_RADIUS_METERS, TOURIST_ATTRACTION};

/// A network side effect for the event loop to dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Job {
    /// Fetch the current sign-in state.
    CheckAuth,
    /// Search destination candidates for freehand input.
    SearchDestination(String),
    /// Fetch suggested locations around the confirmed destination.
    FetchSuggestions(LatLng),
    /// POST the serialized trip to the planner.
    SubmitTrip(Vec<(String, String)>),
}

/// Completion of a dispatched [`Job`], delivered over the app channel.
#[derive(Debug)]
pub enum Fetched {
    Auth(Result<AuthStatus, ApiError>),
    DestinationCandidates(Result<Vec<PlaceRef>, PlacesError>),
    Suggestions(Result<Vec<PlaceRef>, PlacesError>),
    SubmitOutcome(Result<(), ApiError>),
}

/// Runs jobs on the tokio runtime and reports completions over a channel.
pub struct JobRunner {
    handle: Handle,
    tx: Sender<Fetched>,
    planner: Arc<PlannerClient>,
    places: Arc<PlacesClient>,
}

impl JobRunner {
    /// Creates a runner that spawns onto `handle` and reports via `tx`.
    pub fn new(
        handle: Handle,
        tx: Sender<Fetched>,
        planner: Arc<PlannerClient>,
        places: Arc<PlacesClient>,
    ) -> Self {
        Self {
            handle,
            tx,
            planner,
            places,
        }
    }

    /// Spawns the job; its completion arrives on the channel.
    ///
    /// Send failures are ignored: a closed receiver means the app is
    /// shutting down and the completion has nowhere to go.
    pub fn dispatch(&self, job: Job) {
        let tx = self.tx.clone();
        match job {
            Job::CheckAuth => {
                let planner = Arc::clone(&self.planner);
                self.handle.spawn(async move {
                    let _ = tx.send(Fetched::Auth(planner.auth_status().await));
                });
            }
            Job::SearchDestination(query) => {
                let places = Arc::clone(&self.places);
                self.handle.spawn(async move {
                    let _ = tx.send(Fetched::DestinationCandidates(
                        places.search_text(&query).await,
                    ));
                });
            }
            Job::FetchSuggestions(center) => {
                let places = Arc::clone(&self.places);
                self.handle.spawn(async move {
                    let _ = tx.send(Fetched::Suggestions(
                        places
                            .nearby_search(center, SEARCH_RADIUS_METERS, TOURIST_ATTRACTION)
                            .await,
                    ));
                });
            }
            Job::SubmitTrip(fields) => {
                let planner = Arc::clone(&self.planner);
                self.handle.spawn(async move {
                    let _ = tx.send(Fetched::SubmitOutcome(planner.submit_trip(&fields).await));
                });
            }
        }
    }
}
