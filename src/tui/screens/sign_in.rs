//! Sign-in gate screen — shown until the planner reports a signed-in session.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::api::AuthStatus;
use crate::tui::action::Action;

/// Handles a key event on the sign-in screen.
///
/// The screen is stateless: `r` re-checks the session, `q`/Esc quits.
pub fn handle_sign_in_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('r') => Action::RecheckAuth,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}

/// Renders the sign-in screen.
///
/// Shows the login URL from the last auth response (sign-in happens in a
/// browser; this client only gates on the session), or a short notice when
/// the auth check itself failed.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_sign_in(
    auth: Option<&AuthStatus>,
    auth_error: Option<&str>,
    frame: &mut Frame,
    area: Rect,
) {
    let block = Block::default()
        .title(" Sign In ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = vec![
        Line::from(""),
        Line::from("Sign in to start planning a trip."),
        Line::from(""),
    ];

    if let Some(error) = auth_error {
        lines.push(Line::styled(
            format!("Could not reach the planner: {error}"),
            Style::default().fg(Color::Red),
        ));
    } else if let Some(url) = auth.and_then(|a| a.login_url.as_deref()) {
        lines.push(Line::from(format!("Open this URL in a browser: {url}")));
    } else {
        lines.push(Line::from("Checking session..."));
    }

    lines.push(Line::from(""));
    lines.push(Line::styled(
        "r: re-check  q: quit",
        Style::default().fg(Color::DarkGray),
    ));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);

    let [centered] = Layout::vertical([Constraint::Min(0)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(paragraph, centered);
}
