//! Quiz controller: owns the view state and runs the user actions.

use crate::api::QuizBackend;
use crate::models::{OptionKind, Selection};
use crate::protocol::{EvaluateRequest, non_blank};

use super::messages;
use super::state::{Form, StatePatch, ViewState};
use super::view::{ViewModel, project};

/// Draws a `ViewModel` somewhere.
pub trait Render {
    fn render(&mut self, view: &ViewModel);
}

/// A change on one option input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionChange {
    pub index: usize,
    pub kind: OptionKind,
    pub checked: bool,
}

/// User intents produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Generate,
    Submit,
    Next,
    Quit,
    FocusNext,
    FocusPrevious,
    TopicNext,
    TopicPrevious,
    CursorUp,
    CursorDown,
    ToggleOption,
    Input(char),
    Backspace,
    Redraw,
}

pub struct QuizApp<B, R> {
    backend: B,
    renderer: R,
    state: ViewState,
    form: Form,
}

impl<B: QuizBackend, R: Render> QuizApp<B, R> {
    pub fn new(backend: B, renderer: R, form: Form) -> Self {
        Self {
            backend,
            renderer,
            state: ViewState::default(),
            form,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn view(&self) -> ViewModel {
        project(&self.state, &self.form)
    }

    pub fn render(&mut self) {
        let view = self.view();
        self.renderer.render(&view);
    }

    /// Merge `patch` into the state, then redraw.
    pub fn update_state(&mut self, patch: StatePatch) {
        self.state.apply(patch);
        self.render();
    }

    /// Request a new question for the topic in the form.
    pub async fn generate(&mut self) {
        self.form.option_cursor = 0;
        self.update_state(
            StatePatch::new()
                .loading(true)
                .clear_error()
                .question(None)
                .selection(Selection::new())
                .feedback(None),
        );

        let request = self.form.generate_request();
        tracing::info!(topic = %request.topic, "generating question");

        match self.backend.generate(&request).await {
            Ok(question) => {
                tracing::info!(id = %question.id, options = question.options.len(), "question received");
                self.update_state(
                    StatePatch::new()
                        .question(Some(question))
                        .selection(Selection::new()),
                );
            }
            Err(err) => {
                tracing::error!(error = %err, "question generation failed");
                self.update_state(
                    StatePatch::new().error(messages::phase_error(messages::GENERATE_FAILED, &err)),
                );
            }
        }

        self.update_state(StatePatch::new().loading(false));
    }

    /// Apply a change event from an option input.
    pub fn select_option(&mut self, change: OptionChange) {
        let mut selection = self.state.selected_options.clone();
        match change.kind {
            OptionKind::Single => selection.select_only(change.index),
            OptionKind::Multiple if change.checked => selection.insert(change.index),
            OptionKind::Multiple => selection.remove(change.index),
        }
        self.update_state(StatePatch::new().selection(selection));
    }

    /// Send the current selection for evaluation.
    pub async fn submit(&mut self) {
        let request = self
            .state
            .current_question
            .as_ref()
            .filter(|_| !self.state.selected_options.is_empty())
            .map(|question| {
                EvaluateRequest::new(
                    question,
                    &self.state.selected_options,
                    non_blank(&self.form.additional_answer),
                )
            });
        let Some(request) = request else {
            self.update_state(StatePatch::new().error(messages::SELECT_AN_ANSWER));
            return;
        };

        self.update_state(StatePatch::new().loading(true).clear_error());
        tracing::info!(
            question_id = %request.question_id,
            selected = request.selected_options.len(),
            "submitting answer"
        );

        match self.backend.evaluate(&request).await {
            Ok(feedback) => {
                tracing::info!(correct = feedback.is_correct, "feedback received");
                self.update_state(StatePatch::new().feedback(Some(feedback)));
            }
            Err(err) => {
                tracing::error!(error = %err, "answer evaluation failed");
                self.update_state(
                    StatePatch::new().error(messages::phase_error(messages::EVALUATE_FAILED, &err)),
                );
            }
        }

        self.update_state(StatePatch::new().loading(false));
    }

    /// Return to the "ready to generate" screen.
    pub fn next(&mut self) {
        self.form.option_cursor = 0;
        self.form.additional_answer.clear();
        self.update_state(
            StatePatch::new()
                .question(None)
                .selection(Selection::new())
                .feedback(None)
                .clear_error(),
        );
    }

    /// Translate the option under the cursor into a change event.
    fn toggle_cursor_option(&mut self) {
        let index = self.form.option_cursor;
        let Some(option) = self
            .state
            .current_question
            .as_ref()
            .and_then(|question| question.option(index))
        else {
            return;
        };

        let checked = match option.kind {
            OptionKind::Single => true,
            OptionKind::Multiple => !self.state.selected_options.contains(index),
        };
        let kind = option.kind;
        self.select_option(OptionChange {
            index,
            kind,
            checked,
        });
    }

    fn option_count(&self) -> usize {
        self.state
            .current_question
            .as_ref()
            .map_or(0, |question| question.options.len())
    }

    fn edit_form(&mut self, edit: impl FnOnce(&mut Form)) {
        edit(&mut self.form);
        self.render();
    }

    /// Run one action to completion. Returns true if the app should exit.
    pub async fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::Generate => {
                if !self.state.is_loading {
                    self.generate().await;
                }
            }
            Action::Submit => {
                if !self.state.is_loading {
                    self.submit().await;
                }
            }
            Action::Next => self.next(),
            Action::ToggleOption => self.toggle_cursor_option(),
            Action::FocusNext => self.edit_form(|form| form.focus = form.focus.next()),
            Action::FocusPrevious => self.edit_form(|form| form.focus = form.focus.previous()),
            Action::TopicNext => self.edit_form(Form::next_topic),
            Action::TopicPrevious => self.edit_form(Form::previous_topic),
            Action::CursorUp => {
                let count = self.option_count();
                self.edit_form(|form| form.move_cursor_up(count));
            }
            Action::CursorDown => {
                let count = self.option_count();
                self.edit_form(|form| form.move_cursor_down(count));
            }
            Action::Input(c) => self.edit_form(|form| {
                if let Some(text) = form.focused_text_mut() {
                    text.push(c);
                }
            }),
            Action::Backspace => self.edit_form(|form| {
                if let Some(text) = form.focused_text_mut() {
                    text.pop();
                }
            }),
            Action::Redraw => self.render(),
        }

        false
    }
}
