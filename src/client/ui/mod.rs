mod feedback;
mod form;
mod quiz;
mod render;

pub use render::{TerminalRenderer, draw};
