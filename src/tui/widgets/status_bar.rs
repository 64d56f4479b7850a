//! Status bar widget — persistent one-line session and trip context.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Data passed to the status bar widget; decoupled from the draft and auth
/// types so the bar can render partial context.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// Signed-in account email; empty until the auth check succeeds.
    pub email: String,
    /// Frozen stage-1 summary (`"Bay Area Weekend → San Francisco on 2026-08-14"`),
    /// present once the form has advanced.
    pub trip_summary: Option<String>,
    /// Current POI count, present once the form has advanced.
    pub poi_count: Option<usize>,
}

/// Renders a one-line status bar with the signed-in session and, once the
/// form has advanced, the frozen trip summary and POI count.
///
/// Renders nothing if `ctx.email` is empty (not signed in yet).
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    if ctx.email.is_empty() {
        return;
    }

    let cyan = Style::default().fg(Color::Cyan);
    let green = Style::default().fg(Color::Green);

    let mut spans: Vec<Span> = vec![Span::styled(ctx.email.clone(), cyan)];

    if let Some(summary) = &ctx.trip_summary {
        spans.push(Span::styled("  ", cyan));
        spans.push(Span::styled(summary.clone(), cyan));
    }

    if let Some(count) = ctx.poi_count {
        spans.push(Span::styled("  ", cyan));
        let label = if count == 1 { "POI" } else { "POIs" };
        spans.push(Span::styled(format!("{count} {label}"), green));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn render(ctx: &StatusBarContext, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw_status_bar(ctx, frame, frame.area()))
            .unwrap();
        let buf = terminal.backend().buffer();
        let mut s = String::new();
        for x in 0..buf.area.width {
            s.push(buf[(x, 0)].symbol().chars().next().unwrap_or(' '));
        }
        s
    }

    #[test]
    fn empty_email_renders_nothing() {
        let output = render(&StatusBarContext::default(), 40);
        assert_eq!(output.trim(), "");
    }

    #[test]
    fn email_alone() {
        let ctx = StatusBarContext {
            email: "traveler@example.com".to_string(),
            ..Default::default()
        };
        let output = render(&ctx, 40);
        assert!(output.contains("traveler@example.com"));
    }

    #[test]
    fn trip_summary_shown_when_present() {
        let ctx = StatusBarContext {
            email: "traveler@example.com".to_string(),
            trip_summary: Some("Weekend → San Francisco on 2026-08-14".to_string()),
            poi_count: None,
        };
        let output = render(&ctx, 80);
        assert!(output.contains("San Francisco"));
    }

    #[test]
    fn poi_count_singular() {
        let ctx = StatusBarContext {
            email: "t@example.com".to_string(),
            trip_summary: None,
            poi_count: Some(1),
        };
        let output = render(&ctx, 40);
        assert!(output.contains("1 POI"));
        assert!(!output.contains("1 POIs"));
    }

    #[test]
    fn poi_count_plural() {
        let ctx = StatusBarContext {
            email: "t@example.com".to_string(),
            trip_summary: None,
            poi_count: Some(3),
        };
        let output = render(&ctx, 40);
        assert!(output.contains("3 POIs"));
    }

    #[test]
    fn zero_pois_still_shown() {
        let ctx = StatusBarContext {
            email: "t@example.com".to_string(),
            trip_summary: None,
            poi_count: Some(0),
        };
        let output = render(&ctx, 40);
        assert!(output.contains("0 POIs"));
    }
}
