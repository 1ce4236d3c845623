mod feedback;
mod question;
mod selection;

pub use feedback::{Feedback, Resource};
pub use question::{OptionKind, Question, QuizOption, SelectionMode};
pub use selection::Selection;
