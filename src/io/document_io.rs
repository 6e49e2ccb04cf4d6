use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::forest::Forest;
use crate::parse::{parse_forest, serialize_forest, FormatError};

/// Error type for document writes. Non-fatal by contract: the in-memory
/// forest is never rolled back because a write failed.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: io::Error,
    },
    #[error("could not serialize document: {0}")]
    Serialize(#[from] serde_yaml::Error),
}

/// Error type for loading a document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Load the document at `path`. An absent file is an empty forest (first
/// launch); a malformed one is a `FormatError` and populates nothing.
pub fn load_forest(path: &Path) -> Result<Forest, DocumentError> {
    if !path.exists() {
        log::info!("no document at {}, starting empty", path.display());
        return Ok(Forest::new());
    }
    let text = fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let forest = parse_forest(&text)?;
    log::info!("loaded {} nodes from {}", forest.len(), path.display());
    Ok(forest)
}

/// Serialize and write the whole document, fully replacing prior contents.
pub fn save_forest(path: &Path, forest: &Forest) -> Result<(), PersistenceError> {
    let text = serialize_forest(forest)?;
    atomic_write(path, text.as_bytes()).map_err(|source| PersistenceError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Write via a temp file in the same directory plus an atomic rename, so a
/// crash mid-write never leaves a truncated document.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
