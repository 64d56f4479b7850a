//! POI review screen — stage 2 of the trip form: the point-of-interest
//! list, the add-POI input, and the suggested-location panel.
//!
//! Stage-1 values are frozen while this screen is active; they render as a
//! read-only summary header. Going back re-opens them without touching the
//! POI list.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::config::SuggestionErrorPolicy;
use crate::model::{PlaceRef, TripDraft};
use crate::places::{MAX_SUGGESTIONS, PlacesError};
use crate::tui::action::Action;

/// Which pane holds the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Input,
    Pois,
    Suggestions,
}

/// State for the POI review screen.
#[derive(Debug, Clone)]
pub struct PoiReviewState {
    poi_input: String,
    focus: Focus,
    poi_selected: usize,
    /// Remaining suggestion cards; accepting one removes it.
    suggestions: Vec<PlaceRef>,
    suggestion_selected: usize,
    loading_suggestions: bool,
    /// One-line panel notice, used only under the `surface` policy.
    suggestion_notice: Option<String>,
    submitting: bool,
    general_error: Option<String>,
}

impl Default for PoiReviewState {
    fn default() -> Self {
        Self::new()
    }
}

impl PoiReviewState {
    /// Creates the POI stage state with an empty input and no cards.
    pub fn new() -> Self {
        Self {
            poi_input: String::new(),
            focus: Focus::Input,
            poi_selected: 0,
            suggestions: Vec::new(),
            suggestion_selected: 0,
            loading_suggestions: false,
            suggestion_notice: None,
            submitting: false,
            general_error: None,
        }
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    ///
    /// `poi_count` is the current draft list length, used to bound cursor
    /// movement in the POI pane.
    pub fn handle_key(&mut self, key: KeyEvent, poi_count: usize) -> Action {
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('s') {
            return Action::Submit;
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Input => Focus::Pois,
                    Focus::Pois => Focus::Suggestions,
                    Focus::Suggestions => Focus::Input,
                };
                Action::None
            }
            KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Input => Focus::Suggestions,
                    Focus::Pois => Focus::Input,
                    Focus::Suggestions => Focus::Pois,
                };
                Action::None
            }
            KeyCode::Esc => Action::BackToDetails,
            _ => match self.focus {
                Focus::Input => self.handle_input_key(key),
                Focus::Pois => self.handle_poi_list_key(key, poi_count),
                Focus::Suggestions => self.handle_suggestions_key(key),
            },
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(ch) => {
                self.poi_input.push(ch);
                Action::None
            }
            KeyCode::Backspace => {
                self.poi_input.pop();
                Action::None
            }
            KeyCode::Enter => Action::AddPoi(self.poi_input.clone()),
            _ => Action::None,
        }
    }

    fn handle_poi_list_key(&mut self, key: KeyEvent, poi_count: usize) -> Action {
        match key.code {
            KeyCode::Up => {
                self.poi_selected = self.poi_selected.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                if poi_count > 0 {
                    self.poi_selected = (self.poi_selected + 1).min(poi_count - 1);
                }
                Action::None
            }
            KeyCode::Delete | KeyCode::Char('d') => {
                if poi_count > 0 {
                    Action::RemovePoi(self.poi_selected)
                } else {
                    Action::None
                }
            }
            _ => Action::None,
        }
    }

    fn handle_suggestions_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.suggestion_selected = self.suggestion_selected.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                if !self.suggestions.is_empty() {
                    self.suggestion_selected =
                        (self.suggestion_selected + 1).min(self.suggestions.len() - 1);
                }
                Action::None
            }
            KeyCode::Enter => {
                if self.suggestions.is_empty() {
                    Action::None
                } else {
                    Action::AcceptSuggestion(self.suggestion_selected)
                }
            }
            _ => Action::None,
        }
    }

    /// Clears the add-POI input after a successful add.
    pub fn clear_poi_input(&mut self) {
        self.poi_input.clear();
    }

    /// Returns the current add-POI input text.
    pub fn poi_input(&self) -> &str {
        &self.poi_input
    }

    /// Marks the suggestion panel as loading and clears stale cards.
    ///
    /// Called when the form advances and a new nearby search is dispatched.
    pub fn begin_loading_suggestions(&mut self) {
        self.loading_suggestions = true;
        self.suggestions.clear();
        self.suggestion_selected = 0;
        self.suggestion_notice = None;
    }

    /// Applies a completed suggestion fetch.
    ///
    /// Success replaces the cards (capped at [`MAX_SUGGESTIONS`]). Failure
    /// renders nothing by default; the `log` and `surface` policies add a
    /// diagnostic or a panel notice. POI list state is never touched here.
    pub fn apply_suggestions(
        &mut self,
        result: Result<Vec<PlaceRef>, PlacesError>,
        policy: SuggestionErrorPolicy,
    ) {
        self.loading_suggestions = false;
        self.suggestion_selected = 0;
        match result {
            Ok(mut places) => {
                places.truncate(MAX_SUGGESTIONS);
                self.suggestions = places;
            }
            Err(err) => {
                self.suggestions.clear();
                match policy {
                    SuggestionErrorPolicy::Silent => {}
                    SuggestionErrorPolicy::Log => {
                        tracing::warn!("suggested-location fetch failed: {err}");
                    }
                    SuggestionErrorPolicy::Surface => {
                        self.suggestion_notice =
                            Some("Suggestions are unavailable right now".to_string());
                    }
                }
            }
        }
    }

    /// Removes and returns the suggestion card at `index` (accept-once).
    pub fn take_suggestion(&mut self, index: usize) -> Option<PlaceRef> {
        if index >= self.suggestions.len() {
            return None;
        }
        let place = self.suggestions.remove(index);
        if self.suggestion_selected >= self.suggestions.len() {
            self.suggestion_selected = self.suggestions.len().saturating_sub(1);
        }
        Some(place)
    }

    /// Keeps the POI cursor within the list after a removal.
    pub fn clamp_poi_selection(&mut self, poi_count: usize) {
        if self.poi_selected >= poi_count {
            self.poi_selected = poi_count.saturating_sub(1);
        }
    }

    /// Returns the remaining suggestion cards.
    pub fn suggestions(&self) -> &[PlaceRef] {
        &self.suggestions
    }

    /// Returns `true` while a submission is in flight.
    pub fn submitting(&self) -> bool {
        self.submitting
    }

    /// Sets the in-flight submission flag.
    pub fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    /// Sets the general error line (submit failures).
    pub fn set_general_error(&mut self, msg: String) {
        self.general_error = Some(msg);
    }

    /// Clears the general error line, e.g. when the stage is re-entered.
    pub fn clear_general_error(&mut self) {
        self.general_error = None;
    }

    /// Returns the general error message, if any.
    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    /// Returns the suggestion panel notice, if any.
    pub fn suggestion_notice(&self) -> Option<&str> {
        self.suggestion_notice.as_deref()
    }
}

/// Renders the POI review screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_poi_review(state: &PoiReviewState, draft: &TripDraft, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Points of Interest ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [header_area, body_area, error_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    // Frozen stage-1 summary; editable again only after Esc (back).
    let header = Paragraph::new(Line::from(format!(
        "{} \u{2192} {} on {}",
        draft.name,
        draft.destination.name,
        draft.travel_date.format("%Y-%m-%d"),
    )))
    .style(Style::default().fg(Color::Cyan));
    frame.render_widget(header, header_area);

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(body_area);

    draw_poi_pane(state, draft, frame, left);
    draw_suggestion_pane(state, frame, right);

    if let Some(err) = state.general_error() {
        let error = Paragraph::new(Line::from(Span::styled(
            err,
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(error, error_area);
    }

    let submit_ready = draft.submit_ready() && !state.submitting();
    let submit_hint = if state.submitting() {
        Span::styled("submitting...", Style::default().fg(Color::Yellow))
    } else if submit_ready {
        Span::styled("Ctrl+S: submit", Style::default().fg(Color::Green))
    } else {
        Span::styled("Ctrl+S: submit", Style::default().fg(Color::DarkGray))
    };
    let footer = Line::from(vec![
        Span::styled(
            "Tab: pane  Enter: add/accept  d: remove  Esc: back  ",
            Style::default().fg(Color::DarkGray),
        ),
        submit_hint,
    ]);
    frame.render_widget(Paragraph::new(footer), footer_area);
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn draw_poi_pane(state: &PoiReviewState, draft: &TripDraft, frame: &mut Frame, area: Rect) {
    let [input_area, list_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    let input_focused = state.focus == Focus::Input;
    let input_block = Block::default()
        .title("Add POI")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if input_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        }));
    let mut spans = vec![Span::raw(state.poi_input())];
    if input_focused {
        spans.push(Span::styled(
            "\u{2588}",
            Style::default().add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).block(input_block), input_area);

    let list_focused = state.focus == Focus::Pois;
    let items: Vec<ListItem> = draft
        .pois()
        .iter()
        .enumerate()
        .map(|(i, poi)| {
            let style = if list_focused && i == state.poi_selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::styled(poi.label.clone(), style))
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .title(format!("POIs ({})", draft.pois().len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if list_focused {
                Color::Yellow
            } else {
                Color::DarkGray
            })),
    );
    frame.render_widget(list, list_area);
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn draw_suggestion_pane(state: &PoiReviewState, frame: &mut Frame, area: Rect) {
    let focused = state.focus == Focus::Suggestions;
    let block = Block::default()
        .title("Suggested nearby")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused {
            Color::Yellow
        } else {
            Color::DarkGray
        }));

    if state.loading_suggestions {
        frame.render_widget(
            Paragraph::new("Searching nearby attractions...").block(block),
            area,
        );
        return;
    }

    if let Some(notice) = state.suggestion_notice() {
        frame.render_widget(
            Paragraph::new(Line::styled(notice, Style::default().fg(Color::Red))).block(block),
            area,
        );
        return;
    }

    // Failed or empty fetch with no notice: an empty panel, nothing else.
    let items: Vec<ListItem> = state
        .suggestions()
        .iter()
        .enumerate()
        .map(|(i, place)| {
            let style = if focused && i == state.suggestion_selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::styled(place.display_label(), style))
        })
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}
