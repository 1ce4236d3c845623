use serde::{Deserialize, Serialize};

/// Evaluation result for a submitted answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub is_correct: bool,
    pub feedback: String,
    #[serde(default)]
    pub detailed_explanation: String,
    #[serde(default)]
    pub additional_resources: Option<Vec<Resource>>,
}

/// A further-reading suggestion attached to feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl Feedback {
    pub fn resources(&self) -> &[Resource] {
        self.additional_resources.as_deref().unwrap_or(&[])
    }
}
