//! Main client UI renderer.

use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::client::app::Render;
use crate::client::messages;
use crate::client::view::{ErrorBanner, ViewModel};

use super::{feedback, form, quiz};

/// Renders every frame into a ratatui terminal.
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self { terminal }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

impl<B: Backend> Render for TerminalRenderer<B> {
    fn render(&mut self, view: &ViewModel) {
        if let Err(err) = self.terminal.draw(|frame| draw(frame, view)) {
            tracing::error!(error = %err, "failed to draw frame");
        }
    }
}

/// Draw the whole screen for `view`.
pub fn draw(frame: &mut Frame, view: &ViewModel) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let banner_height = if view.error.visible { 3 } else { 0 };
    let chunks = Layout::vertical([
        Constraint::Length(1),             // Title
        Constraint::Min(10),               // Body
        Constraint::Length(banner_height), // Error banner
        Constraint::Length(1),             // Controls
    ])
    .split(area);

    render_title(frame, chunks[0], view.loading);

    let body = Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[1]);
    form::render(frame, body[0], view);

    let main = if view.feedback.is_some() {
        Layout::vertical([
            Constraint::Min(7),         // Question and options
            Constraint::Length(4),      // Additional answer
            Constraint::Percentage(45), // Feedback
        ])
        .split(body[1])
    } else {
        Layout::vertical([
            Constraint::Min(7),
            Constraint::Length(4),
            Constraint::Length(0),
        ])
        .split(body[1])
    };

    quiz::render(frame, main[0], view);
    quiz::render_additional_answer(frame, main[1], view);
    if let Some(result) = &view.feedback {
        feedback::render(frame, main[2], result);
    }

    render_error(frame, chunks[2], &view.error);
    render_controls(frame, chunks[3]);
}

fn render_title(frame: &mut Frame, area: Rect, loading: bool) {
    let mut spans = vec![Span::styled(
        " SMARTQ ",
        Style::default().fg(Color::Cyan).bold(),
    )];
    if loading {
        spans.push(Span::styled(
            messages::LOADING,
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_error(frame: &mut Frame, area: Rect, error: &ErrorBanner) {
    if !error.visible {
        return;
    }

    let widget = Paragraph::new(error.message.as_str())
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::Red).bold())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );

    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new(
        "Tab focus  ·  Ctrl-G generate  ·  Space select  ·  Ctrl-S submit  ·  Ctrl-N next  ·  Esc quit",
    )
    .alignment(Alignment::Center)
    .fg(Color::DarkGray);

    frame.render_widget(widget, area);
}
