//! Generation form: topic, prompts and the action buttons.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::client::state::Focus;
use crate::client::view::ViewModel;

/// Render the form column.
pub fn render(frame: &mut Frame, area: Rect, view: &ViewModel) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Topic
        Constraint::Min(4),    // System prompt
        Constraint::Min(4),    // Knowledge base
        Constraint::Length(3), // Buttons
    ])
    .split(area);

    let form = &view.form;
    render_topic(frame, chunks[0], &form.topics, form.topic_index, form.focus == Focus::Topic);
    render_text_field(
        frame,
        chunks[1],
        " System prompt ",
        &form.system_prompt,
        form.focus == Focus::SystemPrompt,
    );
    render_text_field(
        frame,
        chunks[2],
        " Knowledge base ",
        &form.knowledge_base,
        form.focus == Focus::KnowledgeBase,
    );
    render_buttons(frame, chunks[3], view);
}

/// Bordered block whose border lights up when focused.
pub fn field_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused { Color::Yellow } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(title)
        .title_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1))
}

fn render_topic(frame: &mut Frame, area: Rect, topics: &[String], selected: usize, focused: bool) {
    let topic = topics.get(selected).map(String::as_str).unwrap_or("-");
    let line = Line::from(vec![
        Span::styled("< ", Style::default().fg(Color::DarkGray)),
        Span::styled(topic, Style::default().fg(Color::Yellow).bold()),
        Span::styled(" >", Style::default().fg(Color::DarkGray)),
    ]);

    let widget = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(field_block(" Topic ", focused));

    frame.render_widget(widget, area);
}

/// Multi-line text input with a trailing cursor when focused.
///
/// A focused field scrolls so its last rows, and the cursor, stay visible.
pub fn render_text_field(frame: &mut Frame, area: Rect, title: &str, text: &str, focused: bool) {
    let mut lines: Vec<Line> = text.split('\n').map(Line::from).collect();
    if focused {
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled("_", Style::default().fg(Color::Yellow)));
        }
    }

    let block = field_block(title, focused);
    let inner = block.inner(area);
    let scroll = if focused {
        tail_scroll(&lines, inner.width, inner.height)
    } else {
        0
    };

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(Color::White))
        .scroll((scroll, 0))
        .block(block);

    frame.render_widget(widget, area);
}

/// Rows to skip so the last wrapped row lands at the bottom of a `width` x `height` box.
pub fn tail_scroll(lines: &[Line], width: u16, height: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let width = usize::from(width);
    let rows: usize = lines
        .iter()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum();
    let overflow = rows.saturating_sub(usize::from(height));
    u16::try_from(overflow).unwrap_or(u16::MAX)
}

fn render_buttons(frame: &mut Frame, area: Rect, view: &ViewModel) {
    let chunks =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);

    render_button(frame, chunks[0], "Generate", view.generate_enabled);
    render_button(frame, chunks[1], "Submit", view.submit_enabled);
}

fn render_button(frame: &mut Frame, area: Rect, label: &str, enabled: bool) {
    let style = if enabled {
        Style::default().fg(Color::Green).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let widget = Paragraph::new(label).alignment(Alignment::Center).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(style),
    );

    frame.render_widget(widget, area);
}
