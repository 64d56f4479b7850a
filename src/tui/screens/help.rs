//! Help screen — keybinding reference.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::action::Action;
use crate::tui::app::Screen;

static SIGN_IN_KEYS: &[(&str, &str)] = &[
    ("r", "re-check sign-in"),
    ("q / Esc", "quit"),
    ("F1", "help"),
];

static TRIP_DETAILS_KEYS: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "next / prev field"),
    ("Enter", "search destination / pick candidate / next stage"),
    ("↑/↓", "move in the candidate list"),
    ("Esc", "close candidates; otherwise quit"),
    ("F1", "help"),
];

static POI_REVIEW_KEYS: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "next / prev pane"),
    ("Enter", "add typed POI / accept suggestion"),
    ("↑/↓", "move in the focused list"),
    ("d / Del", "remove selected POI"),
    ("Ctrl+S", "submit trip"),
    ("Esc", "back to trip details"),
    ("F1", "help"),
];

/// State for the help screen.
#[derive(Debug, Clone)]
pub struct HelpState {
    /// Screen to return to when help closes.
    origin: Screen,
}

impl Default for HelpState {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpState {
    /// Creates a new help state returning to [`Screen::SignIn`].
    pub fn new() -> Self {
        Self {
            origin: Screen::SignIn,
        }
    }

    /// Records the screen help was opened from.
    pub fn set_origin(&mut self, origin: Screen) {
        self.origin = origin;
    }

    /// Returns the screen help was opened from.
    pub fn origin(&self) -> Screen {
        self.origin
    }

    /// Handles a key event: any close key returns to the origin screen.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::F(1) => Action::CloseHelp,
            _ => Action::None,
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn key_lines(title: &str, keys: &[(&str, &str)]) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    for (key, what) in keys {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<18}"), Style::default().fg(Color::Yellow)),
            Span::raw((*what).to_string()),
        ]));
    }
    lines.push(Line::from(""));
    lines
}

/// Renders the help screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_help(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = Vec::new();
    lines.extend(key_lines("Sign In", SIGN_IN_KEYS));
    lines.extend(key_lines("Trip Details", TRIP_DETAILS_KEYS));
    lines.extend(key_lines("Points of Interest", POI_REVIEW_KEYS));
    lines.push(Line::styled(
        "q / Esc: back",
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn origin_defaults_to_sign_in() {
        let state = HelpState::new();
        assert_eq!(state.origin(), Screen::SignIn);
    }

    #[test]
    fn set_origin_is_remembered() {
        let mut state = HelpState::new();
        state.set_origin(Screen::PoiReview);
        assert_eq!(state.origin(), Screen::PoiReview);
    }

    #[test]
    fn q_closes_help() {
        let mut state = HelpState::new();
        assert_eq!(state.handle_key(press(KeyCode::Char('q'))), Action::CloseHelp);
    }

    #[test]
    fn esc_closes_help() {
        let mut state = HelpState::new();
        assert_eq!(state.handle_key(press(KeyCode::Esc)), Action::CloseHelp);
    }

    #[test]
    fn f1_closes_help() {
        let mut state = HelpState::new();
        assert_eq!(state.handle_key(press(KeyCode::F(1))), Action::CloseHelp);
    }

    #[test]
    fn other_keys_ignored() {
        let mut state = HelpState::new();
        assert_eq!(state.handle_key(press(KeyCode::Char('x'))), Action::None);
    }

    #[test]
    fn renders_all_sections() {
        let backend = TestBackend::new(70, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw_help(frame, frame.area()))
            .unwrap();
        let buf = terminal.backend().buffer();
        let mut output = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                output.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            output.push('\n');
        }
        assert!(output.contains("Sign In"));
        assert!(output.contains("Trip Details"));
        assert!(output.contains("Points of Interest"));
        assert!(output.contains("Ctrl+S"));
    }
}
