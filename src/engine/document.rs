use std::path::{Path, PathBuf};

use crate::engine::autosave::Autosave;
use crate::io::document_io::{load_forest, DocumentError};
use crate::model::forest::Forest;
use crate::model::node::{FieldEdit, Node, NodeId};
use crate::ops::forest_ops::{self, TreeError};

/// Notification for the presentation layer, drained via `take_events`.
///
/// One change event per successful mutation (so the UI can re-render
/// incrementally) plus one save event per write attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// A new node exists at the given id
    NodeInserted(NodeId),
    /// Only this node's text fields changed
    NodeUpdated(NodeId),
    /// Nodes moved or vanished; re-render the tree
    StructureChanged,
    /// The autosave write landed
    SaveOk,
    /// The autosave write failed; edits are still in memory
    SaveFailed(String),
}

/// The single owner of a loaded forest.
///
/// Every mutation goes op → exactly one autosave commit → events. Reads
/// hand out snapshots and never touch the file. The UI never mutates the
/// forest directly — this facade is the entire engine surface it calls.
#[derive(Debug)]
pub struct Document {
    forest: Forest,
    autosave: Autosave,
    events: Vec<EngineEvent>,
    saves_attempted: u64,
}

impl Document {
    /// Open the document at `path`: absent file means an empty forest,
    /// malformed content is an error and nothing is populated.
    pub fn open(path: impl Into<PathBuf>) -> Result<Document, DocumentError> {
        let autosave = Autosave::new(path.into());
        let forest = load_forest(autosave.path())?;
        Ok(Document {
            forest,
            autosave,
            events: Vec::new(),
            saves_attempted: 0,
        })
    }

    /// An empty document that will save to `path`. Used when the caller
    /// wants to fall back to a blank tree after a failed `open`.
    pub fn empty(path: impl Into<PathBuf>) -> Document {
        Document {
            forest: Forest::new(),
            autosave: Autosave::new(path.into()),
            events: Vec::new(),
            saves_attempted: 0,
        }
    }

    pub fn path(&self) -> &Path {
        self.autosave.path()
    }

    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    /// Number of autosave write attempts so far (successes and failures).
    pub fn saves_attempted(&self) -> u64 {
        self.saves_attempted
    }

    /// Drain pending UI notifications, oldest first.
    pub fn take_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    // -- mutations -----------------------------------------------------

    pub fn add_root(&mut self, after: Option<NodeId>) -> Result<NodeId, TreeError> {
        let id = forest_ops::add_root(&mut self.forest, after)?;
        self.events.push(EngineEvent::NodeInserted(id));
        self.commit();
        Ok(id)
    }

    pub fn add_sibling(&mut self, of: NodeId) -> Result<NodeId, TreeError> {
        let id = forest_ops::add_sibling(&mut self.forest, of)?;
        self.events.push(EngineEvent::NodeInserted(id));
        self.commit();
        Ok(id)
    }

    pub fn add_child(&mut self, of: NodeId) -> Result<NodeId, TreeError> {
        let id = forest_ops::add_child(&mut self.forest, of)?;
        self.events.push(EngineEvent::NodeInserted(id));
        self.commit();
        Ok(id)
    }

    pub fn delete(&mut self, id: NodeId) -> Result<(), TreeError> {
        forest_ops::delete_node(&mut self.forest, id)?;
        self.events.push(EngineEvent::StructureChanged);
        self.commit();
        Ok(())
    }

    pub fn move_node(
        &mut self,
        id: NodeId,
        new_parent: Option<NodeId>,
        position: usize,
    ) -> Result<(), TreeError> {
        forest_ops::move_node(&mut self.forest, id, new_parent, position)?;
        self.events.push(EngineEvent::StructureChanged);
        self.commit();
        Ok(())
    }

    pub fn update(&mut self, id: NodeId, edit: FieldEdit) -> Result<(), TreeError> {
        forest_ops::update_fields(&mut self.forest, id, edit)?;
        self.events.push(EngineEvent::NodeUpdated(id));
        self.commit();
        Ok(())
    }

    // -- reads (never save, never notify) ------------------------------

    /// Snapshot of one node.
    pub fn node(&self, id: NodeId) -> Result<Node, TreeError> {
        self.forest
            .get(id)
            .cloned()
            .ok_or(TreeError::NotFound(id))
    }

    /// Snapshots of the children of `parent`, in display order; `None`
    /// means the roots.
    pub fn children(&self, parent: Option<NodeId>) -> Result<Vec<Node>, TreeError> {
        let ids = match parent {
            None => self.forest.roots(),
            Some(id) => self
                .forest
                .children_ids(Some(id))
                .ok_or(TreeError::NotFound(id))?,
        };
        Ok(ids
            .iter()
            .filter_map(|&child| self.forest.get(child).cloned())
            .collect())
    }

    // -- lifecycle ------------------------------------------------------

    /// Replace the in-memory forest with a freshly loaded one. On failure
    /// the current forest is left untouched.
    pub fn reload(&mut self) -> Result<(), DocumentError> {
        let fresh = load_forest(self.autosave.path())?;
        self.forest = fresh;
        self.events.push(EngineEvent::StructureChanged);
        Ok(())
    }

    /// One serialize-and-write attempt with the post-mutation state.
    /// Failures become events, never rollbacks.
    fn commit(&mut self) {
        self.saves_attempted += 1;
        match self.autosave.commit(&self.forest) {
            Ok(()) => self.events.push(EngineEvent::SaveOk),
            Err(err) => self.events.push(EngineEvent::SaveFailed(err.to_string())),
        }
    }
}
