//! Projection of client state into what the screen shows.
//!
//! `project` is pure: the same state always yields the same `ViewModel`, so
//! rendering twice without a state change draws the same frame.

use crate::models::{OptionKind, Question, Resource, SelectionMode};

use super::messages;
use super::state::{Focus, Form, ViewState};

/// Input widget used for an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Radio,
    Checkbox,
}

impl From<OptionKind> for InputKind {
    fn from(kind: OptionKind) -> Self {
        match kind {
            OptionKind::Single => InputKind::Radio,
            OptionKind::Multiple => InputKind::Checkbox,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionControl {
    pub index: usize,
    pub label: String,
    pub input: InputKind,
    pub checked: bool,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionRegion {
    Placeholder(&'static str),
    Options {
        text: String,
        mode: SelectionMode,
        controls: Vec<OptionControl>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBanner {
    pub visible: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackView {
    pub is_correct: bool,
    pub heading: &'static str,
    pub feedback: String,
    pub detailed_explanation: String,
    pub resources: Vec<Resource>,
    /// The question's own explanation.
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub topics: Vec<String>,
    pub topic_index: usize,
    pub system_prompt: String,
    pub knowledge_base: String,
    pub additional_answer: String,
    pub focus: Focus,
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub loading: bool,
    pub generate_enabled: bool,
    pub submit_enabled: bool,
    pub error: ErrorBanner,
    pub question: QuestionRegion,
    pub feedback: Option<FeedbackView>,
    pub form: FormView,
}

/// Submit is possible only with a loaded question, a selection and no request in flight.
pub fn submit_enabled(state: &ViewState) -> bool {
    !state.is_loading && state.current_question.is_some() && !state.selected_options.is_empty()
}

pub fn project(state: &ViewState, form: &Form) -> ViewModel {
    ViewModel {
        loading: state.is_loading,
        generate_enabled: !state.is_loading,
        submit_enabled: submit_enabled(state),
        error: ErrorBanner {
            visible: state.is_error,
            message: state.error_message.clone(),
        },
        question: project_question(state, form),
        feedback: project_feedback(state),
        form: FormView {
            topics: form.topics.clone(),
            topic_index: form.topic_index,
            system_prompt: form.system_prompt.clone(),
            knowledge_base: form.knowledge_base.clone(),
            additional_answer: form.additional_answer.clone(),
            focus: form.focus,
        },
    }
}

fn project_question(state: &ViewState, form: &Form) -> QuestionRegion {
    let Some(question) = &state.current_question else {
        return QuestionRegion::Placeholder(messages::PLACEHOLDER);
    };

    let controls = question
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| OptionControl {
            index,
            label: option.text.clone(),
            input: option.kind.into(),
            checked: state.selected_options.contains(index),
            focused: form.focus == Focus::Options && form.option_cursor == index,
        })
        .collect();

    QuestionRegion::Options {
        text: question.question.clone(),
        mode: question.selection_mode(),
        controls,
    }
}

fn project_feedback(state: &ViewState) -> Option<FeedbackView> {
    let feedback = state.feedback.as_ref()?;
    let explanation = state
        .current_question
        .as_ref()
        .map(|q: &Question| q.explanation.clone())
        .unwrap_or_default();

    Some(FeedbackView {
        is_correct: feedback.is_correct,
        heading: if feedback.is_correct {
            messages::CORRECT
        } else {
            messages::INCORRECT
        },
        feedback: feedback.feedback.clone(),
        detailed_explanation: feedback.detailed_explanation.clone(),
        resources: feedback.resources().to_vec(),
        explanation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Feedback, QuizOption, Selection};

    fn question() -> Question {
        Question {
            id: "q1".to_string(),
            question: "Default HTTPS port?".to_string(),
            options: vec![
                QuizOption {
                    text: "80".to_string(),
                    is_correct: false,
                    kind: OptionKind::Single,
                },
                QuizOption {
                    text: "443".to_string(),
                    is_correct: true,
                    kind: OptionKind::Single,
                },
            ],
            explanation: "HTTPS listens on 443.".to_string(),
        }
    }

    #[test]
    fn test_submit_enabled_rule() {
        let form = Form::default();
        for loading in [false, true] {
            for has_question in [false, true] {
                for has_selection in [false, true] {
                    let state = ViewState {
                        is_loading: loading,
                        current_question: has_question.then(question),
                        selected_options: if has_selection {
                            [1].into_iter().collect()
                        } else {
                            Selection::new()
                        },
                        ..ViewState::default()
                    };
                    let view = project(&state, &form);
                    assert_eq!(
                        view.submit_enabled,
                        !loading && has_question && has_selection
                    );
                    assert_eq!(view.generate_enabled, !loading);
                }
            }
        }
    }

    #[test]
    fn test_placeholder_without_question() {
        let view = project(&ViewState::default(), &Form::default());
        assert_eq!(view.question, QuestionRegion::Placeholder(messages::PLACEHOLDER));
        assert!(view.feedback.is_none());
        assert!(!view.error.visible);
    }

    #[test]
    fn test_controls_reflect_selection() {
        let state = ViewState {
            current_question: Some(question()),
            selected_options: [1].into_iter().collect(),
            ..ViewState::default()
        };
        let mut form = Form::default();
        form.focus = Focus::Options;

        let QuestionRegion::Options { controls, mode, .. } = project(&state, &form).question else {
            panic!("expected options");
        };
        assert_eq!(mode, SelectionMode::Single);
        assert_eq!(controls.len(), 2);
        assert!(!controls[0].checked);
        assert!(controls[0].focused);
        assert!(controls[1].checked);
        assert_eq!(controls[1].input, InputKind::Radio);
    }

    #[test]
    fn test_error_banner_driven_by_flag() {
        let state = ViewState {
            is_error: false,
            error_message: "stale".to_string(),
            ..ViewState::default()
        };
        assert!(!project(&state, &Form::default()).error.visible);
    }

    #[test]
    fn test_feedback_includes_question_explanation() {
        let state = ViewState {
            current_question: Some(question()),
            feedback: Some(Feedback {
                is_correct: true,
                feedback: "Well done".to_string(),
                detailed_explanation: "TLS over TCP 443".to_string(),
                additional_resources: None,
            }),
            ..ViewState::default()
        };
        let feedback = project(&state, &Form::default()).feedback.unwrap();
        assert_eq!(feedback.heading, messages::CORRECT);
        assert_eq!(feedback.explanation, "HTTPS listens on 443.");
        assert!(feedback.resources.is_empty());
    }

    #[test]
    fn test_projection_is_deterministic() {
        let state = ViewState {
            current_question: Some(question()),
            selected_options: [0].into_iter().collect(),
            ..ViewState::default()
        };
        let form = Form::default();
        assert_eq!(project(&state, &form), project(&state, &form));
    }
}
