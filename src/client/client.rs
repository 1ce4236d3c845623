//! Interactive terminal client.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

use crate::QuizError;
use crate::api::{HttpBackend, QuizBackend};
use crate::config::ClientConfig;
use crate::terminal;

use super::app::{Action, QuizApp, Render};
use super::input::map_key;
use super::state::Form;
use super::ui::TerminalRenderer;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Run the quiz client against the configured backend.
pub async fn run(config: ClientConfig) -> Result<(), QuizError> {
    let backend = HttpBackend::new(&config.backend)?;
    tracing::info!(server = %backend.base_url(), "starting quiz client");

    let guard = terminal::init()?;
    let renderer = TerminalRenderer::new(terminal::open()?);
    let mut app = QuizApp::new(backend, renderer, Form::new(&config));

    let result = run_event_loop(&mut app).await;
    guard.restore()?;
    result
}

/// Read key events and run each resulting action to completion.
///
/// Keys pressed while a request is pending stay queued in the terminal and are
/// handled once the action finishes.
async fn run_event_loop<B, R>(app: &mut QuizApp<B, R>) -> Result<(), QuizError>
where
    B: QuizBackend,
    R: Render,
{
    app.render();

    loop {
        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => map_key(app.form().focus, key),
            Event::Resize(_, _) => Some(Action::Redraw),
            _ => None,
        };

        if let Some(action) = action {
            if app.dispatch(action).await {
                tracing::info!("quit requested");
                break;
            }
        }
    }

    Ok(())
}
