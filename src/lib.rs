//! taproot — a hierarchical research task tree engine.
//!
//! The forest of projects/tasks lives in an arena ([`model::Forest`]);
//! structural mutations go through [`ops`], persistence is a plain YAML
//! document ([`parse`], [`io`]), and [`engine::Document`] ties them
//! together with autosave-on-every-mutation and UI change events. The
//! visual tree widget, drag-and-drop capture, and editing forms are
//! expected to live elsewhere and call this crate.

pub mod cli;
pub mod engine;
pub mod io;
pub mod logging;
pub mod model;
pub mod ops;
pub mod parse;

pub use engine::{Autosave, Document, EngineEvent};
pub use io::{ConfigError, DocumentError, PersistenceError};
pub use model::{AppConfig, FieldEdit, Forest, Node, NodeId};
pub use ops::{check_forest, TreeError, Violation};
pub use parse::{parse_forest, serialize_forest, FormatError};
