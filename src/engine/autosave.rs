use std::path::{Path, PathBuf};

use crate::io::document_io::{save_forest, PersistenceError};
use crate::model::forest::Forest;

/// Writes the whole document after every successful mutation.
///
/// Stateless pass-through: each commit serializes the forest it is handed
/// and fully replaces the file. A failed write is reported and logged but
/// never fatal — the forest stays as edited and the next commit retries
/// with whatever the state is by then.
#[derive(Debug)]
pub struct Autosave {
    path: PathBuf,
}

impl Autosave {
    pub fn new(path: impl Into<PathBuf>) -> Autosave {
        Autosave { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn commit(&self, forest: &Forest) -> Result<(), PersistenceError> {
        match save_forest(&self.path, forest) {
            Ok(()) => {
                log::debug!(
                    "autosaved {} nodes to {}",
                    forest.len(),
                    self.path.display()
                );
                Ok(())
            }
            Err(err) => {
                log::warn!("autosave to {} failed: {err}", self.path.display());
                Err(err)
            }
        }
    }
}
