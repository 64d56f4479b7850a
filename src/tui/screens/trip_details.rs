//! Trip details screen — stage 1 of the trip form: name, destination, date.
//!
//! The destination field carries a confirmation marker, not just text: it
//! becomes valid only when the user picks a candidate from a place search,
//! and any subsequent edit clears the confirmation. Freehand text never
//! validates the field.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::model::{
    PlaceRef, ValidityFlags, parse_travel_date, validate_travel_date, validate_trip_name,
};
use crate::tui::action::Action;
use crate::tui::widgets::form::{Form, FormField, draw_form};

/// Field index for the trip name.
const TRIP_NAME: usize = 0;
/// Field index for the destination.
const DESTINATION: usize = 1;
/// Field index for the travel date.
const TRAVEL_DATE: usize = 2;

/// An open destination-candidate dropdown.
#[derive(Debug, Clone)]
struct CandidateList {
    places: Vec<PlaceRef>,
    selected: usize,
}

/// State for the trip details screen.
#[derive(Debug, Clone)]
pub struct TripDetailsState {
    form: Form,
    /// Destination confirmed from a search candidate; cleared on any edit.
    confirmed_destination: Option<PlaceRef>,
    candidates: Option<CandidateList>,
}

impl Default for TripDetailsState {
    fn default() -> Self {
        Self::new()
    }
}

impl TripDetailsState {
    /// Creates the stage-1 form with empty fields.
    pub fn new() -> Self {
        Self {
            form: Form::new(vec![
                FormField::new("Trip Name", true),
                FormField::new("Destination", true),
                FormField::new("Travel Date (YYYY-MM-DD)", true),
            ]),
            confirmed_destination: None,
            candidates: None,
        }
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if self.candidates.is_some() {
            return self.handle_dropdown_key(key);
        }

        match key.code {
            KeyCode::Tab => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Char(ch) => {
                self.form.insert_char(ch);
                self.on_field_changed();
                Action::None
            }
            KeyCode::Backspace => {
                self.form.delete_char();
                self.on_field_changed();
                Action::None
            }
            KeyCode::Enter => {
                if self.form.focus() == DESTINATION && self.confirmed_destination.is_none() {
                    Action::LookupDestination(self.form.value(DESTINATION).to_string())
                } else {
                    Action::AdvanceStage
                }
            }
            KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    /// Key handling while the candidate dropdown is open.
    fn handle_dropdown_key(&mut self, key: KeyEvent) -> Action {
        let Some(candidates) = &mut self.candidates else {
            return Action::None;
        };
        match key.code {
            KeyCode::Up => {
                candidates.selected = candidates.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                candidates.selected = (candidates.selected + 1).min(candidates.places.len() - 1);
            }
            KeyCode::Enter => {
                let place = candidates.places[candidates.selected].clone();
                self.form.set_value(DESTINATION, place.display_label());
                self.confirmed_destination = Some(place);
                self.candidates = None;
                self.refresh_validity();
            }
            KeyCode::Esc => {
                self.candidates = None;
            }
            _ => {}
        }
        Action::None
    }

    /// Re-derives field validity after an edit.
    ///
    /// An edit to the destination field invalidates a previously confirmed
    /// place; the name and date markers follow their validators directly.
    fn on_field_changed(&mut self) {
        if self.form.focus() == DESTINATION {
            self.confirmed_destination = None;
        }
        self.refresh_validity();
    }

    fn refresh_validity(&mut self) {
        self.form
            .set_valid(TRIP_NAME, validate_trip_name(self.form.value(TRIP_NAME)).is_ok());
        self.form
            .set_valid(DESTINATION, self.confirmed_destination.is_some());
        self.form.set_valid(
            TRAVEL_DATE,
            validate_travel_date(self.form.value(TRAVEL_DATE)).is_ok(),
        );
    }

    /// Current validity of the three stage-1 fields.
    pub fn validity(&self) -> ValidityFlags {
        ValidityFlags::compute(
            self.form.value(TRIP_NAME),
            self.confirmed_destination.as_ref(),
            self.form.value(TRAVEL_DATE),
            0,
        )
    }

    /// Returns the validated stage-1 fields, or `None` if any is invalid.
    pub fn confirmed_fields(&self) -> Option<(String, PlaceRef, NaiveDate)> {
        let destination = self.confirmed_destination.clone()?;
        let travel_date = parse_travel_date(self.form.value(TRAVEL_DATE)).ok()?;
        let name = self.form.value(TRIP_NAME).to_string();
        validate_trip_name(&name).ok()?;
        Some((name, destination, travel_date))
    }

    /// Opens the candidate dropdown with search results.
    ///
    /// An empty result set leaves the dropdown closed; there is nothing to
    /// pick and the field simply stays unconfirmed.
    pub fn set_candidates(&mut self, places: Vec<PlaceRef>) {
        if places.is_empty() {
            return;
        }
        self.candidates = Some(CandidateList {
            places,
            selected: 0,
        });
    }

    /// Returns `true` while the candidate dropdown is open.
    pub fn dropdown_open(&self) -> bool {
        self.candidates.is_some()
    }

    /// Returns the confirmed destination, if any.
    pub fn confirmed_destination(&self) -> Option<&PlaceRef> {
        self.confirmed_destination.as_ref()
    }

    /// Returns a reference to the form for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }
}

/// Renders the trip details screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_trip_details(state: &TripDetailsState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Start a Trip ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [form_area, dropdown_area, _spacer, next_area, footer_area] = Layout::vertical([
        Constraint::Length(9),
        Constraint::Length(8),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_form(state.form(), frame, form_area);

    if let Some(candidates) = &state.candidates {
        let items: Vec<ListItem> = candidates
            .places
            .iter()
            .enumerate()
            .map(|(i, place)| {
                let style = if i == candidates.selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::styled(place.display_label(), style))
            })
            .collect();
        let list = List::new(items).block(
            Block::default()
                .title(" Pick a destination ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        frame.render_widget(list, dropdown_area);
    }

    let next_style = if state.validity().advance_ready() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(Paragraph::new(Line::styled("[ Next ]", next_style)), next_area);

    let footer = Paragraph::new(Line::from(
        "Tab: next field  Enter: search/pick/next  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
