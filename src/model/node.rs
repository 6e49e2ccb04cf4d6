use std::fmt;

use uuid::Uuid;

/// Opaque identity of a node, unique across the forest.
///
/// Assigned at creation, never reused or changed for the lifetime of the
/// session. Ids are not stable across save/load — the parser mints fresh
/// ones (see `parse::parse_forest`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(Uuid);

impl NodeId {
    pub fn new() -> NodeId {
        NodeId(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        NodeId::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Short form is plenty for logs and error messages
        let s = self.0.simple().to_string();
        write!(f, "{}", &s[..8])
    }
}

/// One research project or task.
///
/// Pure data holder: all text fields are opaque to the engine (no schema,
/// no status enum — a closed status set is a presentation-layer concern).
/// `children` order is the authoritative display order. `parent` is a weak
/// backref by identity; ownership flows strictly downward from the forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    /// Short display text
    pub title: String,
    /// Free-text status (e.g. "In-Progress"); never validated here
    pub status: String,
    /// Long-form description
    pub description: String,
    /// Long-form working notes
    pub notes: String,
    /// Containing node, or None for a root
    pub parent: Option<NodeId>,
    /// Ordered child ids — display order, no gaps, no duplicates
    pub children: Vec<NodeId>,
}

impl Node {
    /// Create an empty node with a fresh id and no parent.
    pub fn new() -> Node {
        Node {
            id: NodeId::new(),
            title: String::new(),
            status: String::new(),
            description: String::new(),
            notes: String::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::new()
    }
}

/// Partial update of a node's text fields. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldEdit {
    pub title: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
}

impl FieldEdit {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_empty_root() {
        let node = Node::new();
        assert!(node.is_root());
        assert!(node.title.is_empty());
        assert!(node.children.is_empty());
    }

    #[test]
    fn node_ids_are_unique() {
        let a = NodeId::new();
        let b = NodeId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn field_edit_builder_sets_only_named_fields() {
        let edit = FieldEdit::default().title("Survey").status("In-Progress");
        assert_eq!(edit.title.as_deref(), Some("Survey"));
        assert_eq!(edit.status.as_deref(), Some("In-Progress"));
        assert_eq!(edit.description, None);
        assert_eq!(edit.notes, None);
    }
}
