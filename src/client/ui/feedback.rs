//! Evaluation feedback panel.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::client::view::FeedbackView;

/// Render the feedback for the last submission.
pub fn render(frame: &mut Frame, area: Rect, feedback: &FeedbackView) {
    let heading_color = if feedback.is_correct {
        Color::Green
    } else {
        Color::Red
    };

    let mut lines = vec![
        Line::from(Span::styled(
            feedback.heading,
            Style::default().fg(heading_color).bold(),
        )),
        Line::from(feedback.feedback.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            feedback.detailed_explanation.as_str(),
            Style::default().fg(Color::Gray),
        )),
    ];

    if !feedback.resources.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Resources",
            Style::default().fg(Color::Cyan).bold(),
        )));
        lines.extend(feedback.resources.iter().map(|resource| {
            Line::from(vec![
                Span::styled(" - ", Style::default().fg(Color::DarkGray)),
                Span::styled(resource.title.as_str(), Style::default().fg(Color::White).bold()),
                Span::styled(": ", Style::default().fg(Color::DarkGray)),
                Span::styled(resource.description.as_str(), Style::default().fg(Color::Gray)),
            ])
        }));
    }

    if !feedback.explanation.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Explanation",
            Style::default().fg(Color::Cyan).bold(),
        )));
        lines.push(Line::from(feedback.explanation.as_str()));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(heading_color))
            .title(" Feedback ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );

    frame.render_widget(widget, area);
}
