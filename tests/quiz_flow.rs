//! End-to-end tests of the quiz actions against an in-memory backend.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;
use smartq::client::messages;
use smartq::client::{Action, Form, OptionChange, ViewModel};
use smartq::protocol::{EvaluateRequest, GenerateRequest};
use smartq::{
    ApiError, Feedback, OptionKind, Question, QuizApp, QuizBackend, QuizOption, Render, Resource,
};

#[derive(Default)]
struct FakeBackend {
    questions: Mutex<VecDeque<Result<Question, ApiError>>>,
    feedback: Mutex<VecDeque<Result<Feedback, ApiError>>>,
    generate_requests: Mutex<Vec<GenerateRequest>>,
    evaluate_requests: Mutex<Vec<EvaluateRequest>>,
}

impl FakeBackend {
    fn with_question(self, question: Result<Question, ApiError>) -> Self {
        self.questions.lock().unwrap().push_back(question);
        self
    }

    fn with_feedback(self, feedback: Result<Feedback, ApiError>) -> Self {
        self.feedback.lock().unwrap().push_back(feedback);
        self
    }

    fn generate_calls(&self) -> Vec<GenerateRequest> {
        self.generate_requests.lock().unwrap().clone()
    }

    fn evaluate_calls(&self) -> Vec<EvaluateRequest> {
        self.evaluate_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuizBackend for FakeBackend {
    async fn generate(&self, request: &GenerateRequest) -> Result<Question, ApiError> {
        self.generate_requests.lock().unwrap().push(request.clone());
        self.questions
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected generate call")
    }

    async fn evaluate(&self, request: &EvaluateRequest) -> Result<Feedback, ApiError> {
        self.evaluate_requests.lock().unwrap().push(request.clone());
        self.feedback
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected evaluate call")
    }
}

#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<ViewModel>,
}

impl Render for RecordingRenderer {
    fn render(&mut self, view: &ViewModel) {
        self.frames.push(view.clone());
    }
}

fn option(text: &str, is_correct: bool, kind: OptionKind) -> QuizOption {
    QuizOption {
        text: text.to_string(),
        is_correct,
        kind,
    }
}

fn radio_question() -> Question {
    Question {
        id: "q-net-1".to_string(),
        question: "Which port does DNS use by default?".to_string(),
        options: vec![
            option("25", false, OptionKind::Single),
            option("53", true, OptionKind::Single),
            option("80", false, OptionKind::Single),
        ],
        explanation: "DNS uses port 53 over UDP and TCP.".to_string(),
    }
}

fn checkbox_question() -> Question {
    Question {
        id: "q-net-2".to_string(),
        question: "Which are transport layer protocols?".to_string(),
        options: vec![
            option("TCP", true, OptionKind::Multiple),
            option("UDP", true, OptionKind::Multiple),
            option("ARP", false, OptionKind::Multiple),
        ],
        explanation: "ARP belongs to the link layer.".to_string(),
    }
}

fn correct_feedback() -> Feedback {
    Feedback {
        is_correct: true,
        feedback: "正解です！".to_string(),
        detailed_explanation: "DNS queries go to port 53.".to_string(),
        additional_resources: Some(vec![Resource {
            title: "RFC 1035".to_string(),
            description: "Domain names".to_string(),
        }]),
    }
}

fn app(backend: FakeBackend) -> QuizApp<FakeBackend, RecordingRenderer> {
    QuizApp::new(backend, RecordingRenderer::default(), Form::default())
}

fn llm_timeout() -> ApiError {
    ApiError::from_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"detail":"LLM timeout"}"#,
    )
}

#[tokio::test]
async fn generate_stores_question_and_resets_selection() {
    let backend = FakeBackend::default()
        .with_question(Ok(radio_question()))
        .with_feedback(Ok(correct_feedback()))
        .with_question(Ok(checkbox_question()));
    let mut app = app(backend);
    assert!(app.form_mut().set_topic("networking"));

    app.generate().await;
    app.select_option(OptionChange {
        index: 1,
        kind: OptionKind::Single,
        checked: true,
    });
    app.submit().await;
    assert!(app.state().feedback.is_some());

    let frames_before = app.renderer().frames.len();
    app.generate().await;

    let state = app.state();
    assert_eq!(state.current_question.as_ref().unwrap().id, "q-net-2");
    assert!(state.selected_options.is_empty());
    assert!(state.feedback.is_none());
    assert!(!state.is_loading);
    assert!(!state.is_error);

    let calls = app.backend().generate_calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].topic, "networking");

    // The first frame of the second generate shows the cleared, loading screen.
    let loading_frame = &app.renderer().frames[frames_before];
    assert!(loading_frame.loading);
    assert!(!loading_frame.generate_enabled);
    assert!(!loading_frame.submit_enabled);
    assert!(loading_frame.feedback.is_none());
}

#[tokio::test]
async fn generate_failure_surfaces_detail_and_clears_loading() {
    let mut app = app(FakeBackend::default().with_question(Err(llm_timeout())));

    app.generate().await;

    let state = app.state();
    assert!(state.is_error);
    assert!(state.error_message.contains("LLM timeout"));
    assert!(state.error_message.starts_with(messages::GENERATE_FAILED));
    assert!(!state.is_loading);
    assert!(state.current_question.is_none());

    let last = app.renderer().frames.last().unwrap();
    assert!(last.error.visible);
    assert!(last.generate_enabled);
}

#[tokio::test]
async fn submit_without_selection_never_calls_backend() {
    let mut app = app(FakeBackend::default().with_question(Ok(radio_question())));

    app.submit().await;
    assert!(app.state().is_error);
    assert!(app.state().error_message.contains(messages::SELECT_AN_ANSWER));

    app.generate().await;
    app.submit().await;

    assert!(app.backend().evaluate_calls().is_empty());
    assert!(app.state().is_error);
    assert!(app.state().error_message.contains(messages::SELECT_AN_ANSWER));
    assert!(!app.state().is_loading);
}

#[tokio::test]
async fn single_selection_replaces_previous_choice() {
    let mut app = app(FakeBackend::default().with_question(Ok(radio_question())));
    app.generate().await;

    for index in [0, 2, 1, 1] {
        app.select_option(OptionChange {
            index,
            kind: OptionKind::Single,
            checked: true,
        });
        assert_eq!(app.state().selected_options.as_slice(), &[index]);
    }
    assert!(app.renderer().frames.last().unwrap().submit_enabled);
}

#[tokio::test]
async fn multiple_selection_toggle_round_trips() {
    let mut app = app(FakeBackend::default().with_question(Ok(checkbox_question())));
    app.generate().await;

    app.select_option(OptionChange {
        index: 0,
        kind: OptionKind::Multiple,
        checked: true,
    });
    let before = app.state().selected_options.clone();

    app.select_option(OptionChange {
        index: 2,
        kind: OptionKind::Multiple,
        checked: true,
    });
    assert_eq!(app.state().selected_options.as_slice(), &[0, 2]);

    app.select_option(OptionChange {
        index: 2,
        kind: OptionKind::Multiple,
        checked: false,
    });
    assert_eq!(app.state().selected_options, before);
}

#[tokio::test]
async fn submit_sends_selection_and_stores_feedback() {
    let backend = FakeBackend::default()
        .with_question(Ok(checkbox_question()))
        .with_feedback(Ok(correct_feedback()));
    let mut app = app(backend);
    app.generate().await;

    for index in [1, 0] {
        app.select_option(OptionChange {
            index,
            kind: OptionKind::Multiple,
            checked: true,
        });
    }
    app.form_mut().additional_answer = "ARP resolves addresses".to_string();
    app.submit().await;

    let calls = app.backend().evaluate_calls();
    assert_eq!(calls.len(), 1);
    let request = &calls[0];
    assert_eq!(request.question_id, "q-net-2");
    assert_eq!(request.selected_options[0].text, "UDP");
    assert_eq!(request.selected_options[1].text, "TCP");
    assert_eq!(request.additional_answer.as_deref(), Some("ARP resolves addresses"));
    assert_eq!(request.options.len(), 3);

    assert!(!app.state().is_loading);
    let view = app.renderer().frames.last().unwrap();
    let feedback = view.feedback.as_ref().unwrap();
    assert_eq!(feedback.heading, messages::CORRECT);
    assert_eq!(feedback.resources.len(), 1);
    assert_eq!(feedback.explanation, "ARP belongs to the link layer.");
}

#[tokio::test]
async fn failed_submit_keeps_question_for_retry() {
    let backend = FakeBackend::default()
        .with_question(Ok(radio_question()))
        .with_feedback(Err(llm_timeout()))
        .with_feedback(Ok(correct_feedback()));
    let mut app = app(backend);
    app.generate().await;
    app.select_option(OptionChange {
        index: 1,
        kind: OptionKind::Single,
        checked: true,
    });

    app.submit().await;
    let state = app.state();
    assert!(state.is_error);
    assert!(state.error_message.starts_with(messages::EVALUATE_FAILED));
    assert!(state.error_message.contains("LLM timeout"));
    assert!(state.current_question.is_some());
    assert_eq!(state.selected_options.as_slice(), &[1]);
    assert!(!state.is_loading);

    app.submit().await;
    assert!(!app.state().is_error);
    assert!(app.state().feedback.is_some());
}

#[tokio::test]
async fn next_resets_everything_in_one_update() {
    let backend = FakeBackend::default()
        .with_question(Ok(radio_question()))
        .with_feedback(Ok(correct_feedback()));
    let mut app = app(backend);
    app.generate().await;
    app.select_option(OptionChange {
        index: 1,
        kind: OptionKind::Single,
        checked: true,
    });
    app.submit().await;
    assert!(app.state().feedback.is_some());

    let frames_before = app.renderer().frames.len();
    app.next();

    assert_eq!(app.renderer().frames.len(), frames_before + 1);
    let state = app.state();
    assert!(state.current_question.is_none());
    assert!(state.selected_options.is_empty());
    assert!(state.feedback.is_none());
    assert!(!state.is_error);
    assert!(app.backend().generate_calls().len() == 1);
}

#[tokio::test]
async fn keyboard_actions_drive_the_flow() {
    let backend = FakeBackend::default()
        .with_question(Ok(checkbox_question()))
        .with_feedback(Ok(correct_feedback()));
    let mut app = app(backend);

    assert!(!app.dispatch(Action::Generate).await);
    for _ in 0..3 {
        app.dispatch(Action::FocusNext).await;
    }
    app.dispatch(Action::ToggleOption).await;
    app.dispatch(Action::CursorDown).await;
    app.dispatch(Action::ToggleOption).await;
    app.dispatch(Action::ToggleOption).await;
    assert_eq!(app.state().selected_options.as_slice(), &[0]);

    app.dispatch(Action::Submit).await;
    assert!(app.state().feedback.is_some());

    app.dispatch(Action::Next).await;
    assert!(app.state().current_question.is_none());
    assert!(app.dispatch(Action::Quit).await);
}

#[tokio::test]
async fn rendering_unchanged_state_is_idempotent() {
    let mut app = app(FakeBackend::default().with_question(Ok(radio_question())));
    app.generate().await;

    app.render();
    app.render();

    let frames = &app.renderer().frames;
    let n = frames.len();
    assert_eq!(frames[n - 1], frames[n - 2]);
}
