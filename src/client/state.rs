//! Client state management.

use crate::config::ClientConfig;
use crate::models::{Feedback, Question, Selection};
use crate::protocol::{GenerateRequest, non_blank};

/// Everything the screen is derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub is_loading: bool,
    pub is_error: bool,
    pub error_message: String,
    pub current_question: Option<Question>,
    /// Only meaningful while `current_question` is set.
    pub selected_options: Selection,
    pub feedback: Option<Feedback>,
}

/// A partial update to `ViewState`. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct StatePatch {
    pub is_loading: Option<bool>,
    pub is_error: Option<bool>,
    pub error_message: Option<String>,
    pub current_question: Option<Option<Question>>,
    pub selected_options: Option<Selection>,
    pub feedback: Option<Option<Feedback>>,
}

impl StatePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.is_loading = Some(loading);
        self
    }

    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.is_error = Some(true);
        self.error_message = Some(message.into());
        self
    }

    pub fn clear_error(mut self) -> Self {
        self.is_error = Some(false);
        self
    }

    pub fn question(mut self, question: Option<Question>) -> Self {
        self.current_question = Some(question);
        self
    }

    pub fn selection(mut self, selection: Selection) -> Self {
        self.selected_options = Some(selection);
        self
    }

    pub fn feedback(mut self, feedback: Option<Feedback>) -> Self {
        self.feedback = Some(feedback);
        self
    }
}

impl ViewState {
    /// Merge every field present in `patch`.
    pub fn apply(&mut self, patch: StatePatch) {
        if let Some(loading) = patch.is_loading {
            self.is_loading = loading;
        }
        if let Some(is_error) = patch.is_error {
            self.is_error = is_error;
        }
        if let Some(message) = patch.error_message {
            self.error_message = message;
        }
        if let Some(question) = patch.current_question {
            self.current_question = question;
        }
        if let Some(selection) = patch.selected_options {
            self.selected_options = selection;
        }
        if let Some(feedback) = patch.feedback {
            self.feedback = feedback;
        }
    }
}

/// Which input currently receives keystrokes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Topic,
    SystemPrompt,
    KnowledgeBase,
    Options,
    AdditionalAnswer,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Topic,
        Focus::SystemPrompt,
        Focus::KnowledgeBase,
        Focus::Options,
        Focus::AdditionalAnswer,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|&f| f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Whether the focused input accepts free text.
    pub fn is_text(self) -> bool {
        matches!(
            self,
            Focus::SystemPrompt | Focus::KnowledgeBase | Focus::AdditionalAnswer
        )
    }
}

/// User-editable inputs surrounding the quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub topics: Vec<String>,
    pub topic_index: usize,
    pub system_prompt: String,
    pub knowledge_base: String,
    pub additional_answer: String,
    pub focus: Focus,
    /// Highlighted option while `Focus::Options` is active.
    pub option_cursor: usize,
}

impl Form {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            topics: config.topics.clone(),
            topic_index: 0,
            system_prompt: config.system_prompt.clone(),
            knowledge_base: config.knowledge_base.clone(),
            additional_answer: String::new(),
            focus: Focus::default(),
            option_cursor: 0,
        }
    }

    pub fn topic(&self) -> &str {
        self.topics
            .get(self.topic_index)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Select `topic` if it is one of the configured topics.
    pub fn set_topic(&mut self, topic: &str) -> bool {
        match self.topics.iter().position(|t| t == topic) {
            Some(index) => {
                self.topic_index = index;
                true
            }
            None => false,
        }
    }

    pub fn next_topic(&mut self) {
        if !self.topics.is_empty() {
            self.topic_index = (self.topic_index + 1) % self.topics.len();
        }
    }

    pub fn previous_topic(&mut self) {
        if !self.topics.is_empty() {
            self.topic_index = (self.topic_index + self.topics.len() - 1) % self.topics.len();
        }
    }

    /// The text buffer behind the focused input, if it is a text input.
    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::SystemPrompt => Some(&mut self.system_prompt),
            Focus::KnowledgeBase => Some(&mut self.knowledge_base),
            Focus::AdditionalAnswer => Some(&mut self.additional_answer),
            Focus::Topic | Focus::Options => None,
        }
    }

    pub fn move_cursor_down(&mut self, option_count: usize) {
        if option_count > 0 {
            self.option_cursor = (self.option_cursor + 1) % option_count;
        }
    }

    pub fn move_cursor_up(&mut self, option_count: usize) {
        if option_count > 0 {
            self.option_cursor = (self.option_cursor + option_count - 1) % option_count;
        }
    }

    pub fn generate_request(&self) -> GenerateRequest {
        GenerateRequest {
            topic: self.topic().to_string(),
            system_prompt: self.system_prompt.clone(),
            knowledge_base: non_blank(&self.knowledge_base),
        }
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}
