//! Submitted screen — terminal state after a successful trip POST.
//!
//! The planner computes the itinerary server-side; this client's job ends
//! here, the way the original form navigated away on submit.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Renders the post-submission screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_submitted(trip_name: &str, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Trip Submitted ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let lines = vec![
        Line::from(""),
        Line::from(format!("\"{trip_name}\" is on its way to the planner.")),
        Line::from("The itinerary will appear in your trips once computed."),
        Line::from(""),
        Line::styled("Press any key to quit", Style::default().fg(Color::DarkGray)),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);

    let [centered] = Layout::vertical([Constraint::Min(0)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(paragraph, centered);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    #[test]
    fn renders_trip_name_and_hint() {
        let backend = TestBackend::new(70, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw_submitted("Bay Area Weekend", frame, frame.area()))
            .unwrap();
        let buf = terminal.backend().buffer();
        let mut output = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                output.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            output.push('\n');
        }
        assert!(output.contains("Trip Submitted"));
        assert!(output.contains("Bay Area Weekend"));
        assert!(output.contains("Press any key to quit"));
    }
}
