pub mod json;
pub mod terminal;

pub use json::SearchBody;
pub use terminal::TerminalRenderer;
