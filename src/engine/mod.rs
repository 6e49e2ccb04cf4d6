pub mod autosave;
pub mod document;

pub use autosave::Autosave;
pub use document::{Document, EngineEvent};
