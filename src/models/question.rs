use serde::{Deserialize, Serialize};

/// How an individual option is answered.
///
/// Serialized as `"radio"` / `"checkbox"` to match the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionKind {
    /// Mutually exclusive with the other options.
    #[default]
    #[serde(rename = "radio")]
    Single,
    /// Toggled independently of the other options.
    #[serde(rename = "checkbox")]
    Multiple,
}

/// Selection cardinality of a whole question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Single,
    Multiple,
}

/// One answer option of a generated question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub text: String,
    /// Echoed back to the evaluation endpoint, never shown.
    #[serde(rename = "isCorrect", default)]
    pub is_correct: bool,
    #[serde(rename = "type", default)]
    pub kind: OptionKind,
}

/// A generated quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub question: String,
    pub options: Vec<QuizOption>,
    #[serde(default)]
    pub explanation: String,
}

impl Question {
    /// A question allows multiple selections as soon as any option is a checkbox.
    pub fn selection_mode(&self) -> SelectionMode {
        if self
            .options
            .iter()
            .any(|option| option.kind == OptionKind::Multiple)
        {
            SelectionMode::Multiple
        } else {
            SelectionMode::Single
        }
    }

    pub fn option(&self, index: usize) -> Option<&QuizOption> {
        self.options.get(index)
    }
}
