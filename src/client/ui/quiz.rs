//! Question and options panel.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::client::messages;
use crate::client::state::Focus;
use crate::client::view::{InputKind, OptionControl, QuestionRegion, ViewModel};
use crate::models::SelectionMode;

use super::form::{field_block, render_text_field};

/// Render the question with its options, or the placeholder prompt.
pub fn render(frame: &mut Frame, area: Rect, view: &ViewModel) {
    let focused = view.form.focus == Focus::Options;

    let (text, mode, controls) = match &view.question {
        QuestionRegion::Placeholder(prompt) => {
            let waiting = Paragraph::new(*prompt)
                .alignment(Alignment::Center)
                .fg(Color::Yellow)
                .block(question_block(focused));
            frame.render_widget(waiting, area);
            return;
        }
        QuestionRegion::Options {
            text,
            mode,
            controls,
        } => (text, *mode, controls),
    };

    let mut lines = vec![Line::from(Span::styled(
        text.as_str(),
        Style::default().fg(Color::White).bold(),
    ))];
    if mode == SelectionMode::Multiple {
        lines.push(Line::from(Span::styled(
            format!("({})", messages::MULTIPLE_HINT),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));
    lines.extend(controls.iter().map(option_line));

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(question_block(focused));

    frame.render_widget(widget, area);
}

/// Render the free-text answer field.
pub fn render_additional_answer(frame: &mut Frame, area: Rect, view: &ViewModel) {
    render_text_field(
        frame,
        area,
        " Additional answer ",
        &view.form.additional_answer,
        view.form.focus == Focus::AdditionalAnswer,
    );
}

fn question_block(focused: bool) -> Block<'static> {
    field_block(" Question ", focused)
}

fn option_line(control: &OptionControl) -> Line<'_> {
    let marker = match (control.input, control.checked) {
        (InputKind::Radio, true) => "(•) ",
        (InputKind::Radio, false) => "( ) ",
        (InputKind::Checkbox, true) => "[x] ",
        (InputKind::Checkbox, false) => "[ ] ",
    };
    let prefix = if control.focused { "> " } else { "  " };

    let style = if control.focused {
        Style::default().fg(Color::Yellow).bold()
    } else if control.checked {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };

    Line::from(vec![
        Span::styled(prefix, style),
        Span::styled(marker, style),
        Span::styled(format!("{}. ", control.index + 1), Style::default().fg(Color::DarkGray)),
        Span::styled(control.label.as_str(), style),
    ])
}

