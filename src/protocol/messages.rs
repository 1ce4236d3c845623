//! Request and response bodies exchanged with the quiz backend.
//!
//! All bodies are JSON over HTTP POST.

use serde::{Deserialize, Serialize};

use crate::models::{Question, QuizOption, Selection};

/// Path of the question generation endpoint.
pub const GENERATE_PATH: &str = "/api/generate";

/// Path of the answer evaluation endpoint.
pub const EVALUATE_PATH: &str = "/api/evaluate";

/// Default backend address.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub topic: String,
    pub system_prompt: String,
    pub knowledge_base: Option<String>,
}

/// A chosen option as reported to the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedOption {
    pub index: usize,
    pub text: String,
}

/// Body of `POST /api/evaluate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluateRequest {
    pub question_id: String,
    pub selected_options: Vec<SelectedOption>,
    pub additional_answer: Option<String>,
    pub question: String,
    pub options: Vec<QuizOption>,
}

impl EvaluateRequest {
    /// Build an evaluation request for `question` from the current selection.
    ///
    /// Indices outside the option list are dropped.
    pub fn new(question: &Question, selection: &Selection, additional_answer: Option<String>) -> Self {
        let selected_options = selection
            .iter()
            .filter_map(|index| {
                question.option(index).map(|option| SelectedOption {
                    index,
                    text: option.text.clone(),
                })
            })
            .collect();

        Self {
            question_id: question.id.clone(),
            selected_options,
            additional_answer,
            question: question.question.clone(),
            options: question.options.clone(),
        }
    }
}

/// Error payload returned with non-2xx responses.
///
/// `detail` is usually a string, but validation failures carry a list.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Human readable detail, if the payload carried one.
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Returns `None` for blank text so optional fields are sent as `null`.
pub fn non_blank(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
