use std::sync::mpsc::Receiver;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};

use crate::api::AuthStatus;
use crate::config::AppConfig;
use crate::model::TripDraft;
use crate::tui::action::Action;
use crate::tui::jobs::{Fetched, Job, JobRunner};
use crate::tui::screens::{
    HelpState, PoiReviewState, TripDetailsState, draw_help, draw_poi_review, draw_sign_in,
    draw_submitted, draw_trip_details, handle_sign_in_key,
};
use crate::tui::widgets::{StatusBarContext, draw_status_bar};

use super::error::AppError;

/// How long one event-loop tick waits for input before draining completions.
const TICK: Duration = Duration::from_millis(100);

/// All screens the app can navigate between.
///
/// `TripDetails` and `PoiReview` are the two stages of the trip form; the
/// rest gate it (`SignIn`), end it (`Submitted`), or overlay it (`Help`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Sign-in gate; shown until the planner reports a session.
    SignIn,
    /// Stage 1: trip name, destination, travel date.
    TripDetails,
    /// Stage 2: POI list, add-POI input, suggested locations.
    PoiReview,
    /// Terminal state after a successful submission.
    Submitted,
    /// Keybinding reference overlay.
    Help,
}

/// Top-level application state.
///
/// Owns the stage transitions of the trip form and re-checks every guard
/// itself: a screen's disabled affordance is rendering, not enforcement.
pub struct App {
    screen: Screen,
    auth: Option<AuthStatus>,
    auth_error: Option<String>,
    details: TripDetailsState,
    review: PoiReviewState,
    help: HelpState,
    /// Present from the first successful advance until process exit.
    draft: Option<TripDraft>,
    config: AppConfig,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` starting on the [`Screen::SignIn`] screen.
    pub fn new(config: AppConfig) -> Self {
        Self {
            screen: Screen::SignIn,
            auth: None,
            auth_error: None,
            details: TripDetailsState::new(),
            review: PoiReviewState::new(),
            help: HelpState::new(),
            draft: None,
            config,
            should_quit: false,
        }
    }

    /// Main event loop: draw → drain completions → read input → dispatch.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        runner: &JobRunner,
        completions: &Receiver<Fetched>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            while let Ok(fetched) = completions.try_recv() {
                self.on_fetched(fetched);
            }
            if event::poll(TICK)? {
                if let Event::Key(key) = event::read()? {
                    if let Some(job) = self.handle_key(key) {
                        runner.dispatch(job);
                    }
                }
            }
        }
        Ok(())
    }

    /// Handles a key event, returning a network job to dispatch, if any.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Job> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        // The submitted screen is terminal: any key quits.
        if self.screen == Screen::Submitted {
            self.should_quit = true;
            return None;
        }

        if key.code == KeyCode::F(1) && self.screen != Screen::Help {
            self.help.set_origin(self.screen);
            self.screen = Screen::Help;
            return None;
        }

        let action = match self.screen {
            Screen::SignIn => handle_sign_in_key(key),
            Screen::TripDetails => self.details.handle_key(key),
            Screen::PoiReview => {
                let poi_count = self.draft.as_ref().map_or(0, |d| d.pois().len());
                self.review.handle_key(key, poi_count)
            }
            Screen::Help => self.help.handle_key(key),
            Screen::Submitted => Action::None,
        };
        self.apply(action)
    }

    /// Applies an action from a screen, returning a job to dispatch, if any.
    fn apply(&mut self, action: Action) -> Option<Job> {
        match action {
            Action::None => None,
            Action::RecheckAuth => Some(Job::CheckAuth),
            Action::LookupDestination(query) => {
                if query.trim().is_empty() {
                    None
                } else {
                    Some(Job::SearchDestination(query))
                }
            }
            Action::AdvanceStage => self.advance_stage(),
            Action::BackToDetails => {
                self.screen = Screen::TripDetails;
                None
            }
            Action::AddPoi(label) => {
                if let Some(draft) = self.draft.as_mut()
                    && draft.add_poi(&label, None)
                {
                    self.review.clear_poi_input();
                }
                None
            }
            Action::RemovePoi(index) => {
                if let Some(draft) = self.draft.as_mut() {
                    draft.remove_poi(index);
                    let count = draft.pois().len();
                    self.review.clamp_poi_selection(count);
                }
                None
            }
            Action::AcceptSuggestion(index) => {
                if let Some(place) = self.review.take_suggestion(index)
                    && let Some(draft) = self.draft.as_mut()
                {
                    let label = place.display_label();
                    draft.add_poi(&label, Some(place));
                }
                None
            }
            Action::Submit => self.submit(),
            Action::CloseHelp => {
                self.screen = self.help.origin();
                None
            }
            Action::Quit => {
                self.should_quit = true;
                None
            }
        }
    }

    /// Advances the form to the POI stage.
    ///
    /// The guard is re-checked here even though the details screen renders
    /// the advance affordance inert when invalid. Invalid stage-1 fields
    /// leave everything untouched: no stage change, no freeze, no fetch.
    fn advance_stage(&mut self) -> Option<Job> {
        if !self.details.validity().advance_ready() {
            return None;
        }
        let (name, destination, travel_date) = self.details.confirmed_fields()?;
        let center = destination.location;

        // Re-advancing after a trip back must keep already-added POIs.
        let pois = self.draft.take().map(TripDraft::into_pois).unwrap_or_default();
        self.draft = Some(TripDraft::with_pois(name, destination, travel_date, pois));

        self.review.begin_loading_suggestions();
        self.review.clear_general_error();
        self.screen = Screen::PoiReview;
        Some(Job::FetchSuggestions(center))
    }

    /// Serializes and submits the draft.
    ///
    /// Re-checks submit readiness and refuses while a POST is in flight.
    fn submit(&mut self) -> Option<Job> {
        let draft = self.draft.as_ref()?;
        if self.review.submitting() || !draft.submit_ready() {
            return None;
        }
        self.review.set_submitting(true);
        Some(Job::SubmitTrip(draft.serialize_for_submit()))
    }

    /// Applies a completed background job.
    ///
    /// Completions are applied regardless of the current screen; a stale
    /// suggestion response landing after back/forward still replaces the
    /// panel, matching the source behavior.
    pub fn on_fetched(&mut self, fetched: Fetched) {
        match fetched {
            Fetched::Auth(Ok(status)) => {
                let logged_in = status.logged_in;
                self.auth = Some(status);
                self.auth_error = None;
                if logged_in {
                    if self.screen == Screen::SignIn {
                        self.screen = Screen::TripDetails;
                    }
                } else {
                    self.screen = Screen::SignIn;
                }
            }
            Fetched::Auth(Err(err)) => {
                self.auth_error = Some(err.to_string());
            }
            Fetched::DestinationCandidates(Ok(places)) => {
                self.details.set_candidates(places);
            }
            Fetched::DestinationCandidates(Err(err)) => {
                tracing::warn!("destination search failed: {err}");
            }
            Fetched::Suggestions(result) => {
                self.review
                    .apply_suggestions(result, self.config.suggestion_errors);
            }
            Fetched::SubmitOutcome(Ok(())) => {
                self.screen = Screen::Submitted;
            }
            Fetched::SubmitOutcome(Err(err)) => {
                self.review.set_submitting(false);
                self.review.set_general_error(err.to_string());
            }
        }
    }

    /// Renders the current screen plus the status bar.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [body, status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

        match self.screen {
            Screen::SignIn => {
                draw_sign_in(self.auth.as_ref(), self.auth_error.as_deref(), frame, body);
            }
            Screen::TripDetails => draw_trip_details(&self.details, frame, body),
            Screen::PoiReview => {
                if let Some(draft) = self.draft.as_ref() {
                    draw_poi_review(&self.review, draft, frame, body);
                }
            }
            Screen::Submitted => {
                let name = self.draft.as_ref().map_or("Your trip", |d| d.name.as_str());
                draw_submitted(name, frame, body);
            }
            Screen::Help => draw_help(frame, body),
        }

        draw_status_bar(&self.status_context(), frame, status);
    }

    fn status_context(&self) -> StatusBarContext {
        StatusBarContext {
            email: self
                .auth
                .as_ref()
                .and_then(|a| a.email.clone())
                .unwrap_or_default(),
            trip_summary: self.draft.as_ref().map(|d| {
                format!(
                    "{} \u{2192} {} on {}",
                    d.name,
                    d.destination.name,
                    d.travel_date.format("%Y-%m-%d")
                )
            }),
            poi_count: self.draft.as_ref().map(|d| d.pois().len()),
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the trip draft, present once the form has advanced.
    pub fn draft(&self) -> Option<&TripDraft> {
        self.draft.as_ref()
    }
}
