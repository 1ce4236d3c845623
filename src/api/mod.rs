//! Quiz backend access.
//!
//! `QuizBackend` is the seam between the client and the remote generator/evaluator.

mod backend;
mod error;

pub use backend::{HttpBackend, QuizBackend};
pub use error::ApiError;
