use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The default document filename, used when neither the CLI nor the config
/// names one.
pub const DEFAULT_DOCUMENT_FILE: &str = "project_tree.yaml";

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub document: DocumentConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentConfig {
    /// Path of the document to open when none is given on the command line
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Resolve the document path: explicit argument wins, then the config,
    /// then the built-in default filename in the current directory.
    pub fn resolve_document_path(&self, cli_path: Option<PathBuf>) -> PathBuf {
        cli_path
            .or_else(|| self.document.path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOCUMENT_FILE))
    }
}
