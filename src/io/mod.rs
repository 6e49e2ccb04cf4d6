pub mod config_io;
pub mod document_io;

pub use config_io::{load_config, ConfigError};
pub use document_io::{load_forest, save_forest, DocumentError, PersistenceError};
