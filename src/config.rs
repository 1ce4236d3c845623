//! Client configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::QuizError;
use crate::protocol::DEFAULT_SERVER_URL;

/// Topics offered when none are configured.
pub const DEFAULT_TOPICS: [&str; 5] = [
    "programming",
    "networking",
    "science",
    "history",
    "mathematics",
];

/// Initial system prompt text.
pub const DEFAULT_SYSTEM_PROMPT: &str = "初心者向けの問題を作成してください。";

/// Default directory for log files.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Where and how to reach the quiz backend.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    /// `None` waits for the backend indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVER_URL.to_string(),
            timeout: None,
        }
    }
}

/// Everything the interactive client needs at startup.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub backend: BackendConfig,
    pub topics: Vec<String>,
    pub system_prompt: String,
    pub knowledge_base: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            topics: DEFAULT_TOPICS.iter().map(|t| t.to_string()).collect(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            knowledge_base: String::new(),
        }
    }
}

impl ClientConfig {
    /// Replace the topic list. An empty list keeps the defaults.
    pub fn with_topics(mut self, topics: Vec<String>) -> Self {
        let topics: Vec<String> = topics
            .into_iter()
            .map(|topic| topic.trim().to_string())
            .filter(|topic| !topic.is_empty())
            .collect();
        if !topics.is_empty() {
            self.topics = topics;
        }
        self
    }

    /// Preload the knowledge base field from a file.
    pub fn with_knowledge_file(mut self, path: &Path) -> Result<Self, QuizError> {
        self.knowledge_base = fs::read_to_string(path).map_err(|source| QuizError::Knowledge {
            path: PathBuf::from(path),
            source,
        })?;
        Ok(self)
    }
}
