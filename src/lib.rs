//! # smartq
//!
//! A terminal front-end for an LLM-backed quiz service.
//!
//! The client asks the backend for a question on a topic, collects single or
//! multiple choice answers plus free text, sends them for evaluation and shows
//! the feedback.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use smartq::{ClientConfig, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let config = ClientConfig::default();
//!     smartq::run(config).await
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod logging;
pub mod models;
pub mod protocol;
pub mod terminal;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use api::{ApiError, HttpBackend, QuizBackend};
pub use client::{QuizApp, Render, run};
pub use config::{BackendConfig, ClientConfig};
pub use models::{Feedback, OptionKind, Question, QuizOption, Resource, Selection};

/// Error type for client startup and terminal handling.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to set up backend client: {0}")]
    Backend(#[from] ApiError),
    #[error("failed to read knowledge base {}: {source}", .path.display())]
    Knowledge {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
