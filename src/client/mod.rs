//! Quiz client module.
//!
//! Holds the view state, the four user actions and the terminal UI that
//! draws them.

mod app;
mod client;
mod input;
pub mod messages;
mod state;
mod ui;
mod view;

pub use app::{Action, OptionChange, QuizApp, Render};
pub use client::run;
pub use input::map_key;
pub use state::{Focus, Form, StatePatch, ViewState};
pub use ui::{TerminalRenderer, draw};
pub use view::{
    ErrorBanner, FeedbackView, FormView, InputKind, OptionControl, QuestionRegion, ViewModel,
    project, submit_enabled,
};
