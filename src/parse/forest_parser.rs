use std::fmt;

use crate::model::forest::Forest;
use crate::model::node::{Node, NodeId};
use crate::parse::persisted::PersistedNode;

/// Where in the source text a parse failure happened (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

/// The document text does not describe a valid forest: a field of the
/// wrong shape, nesting that is not a tree, or corrupt source text.
///
/// Parsing is all-or-nothing — a `FormatError` means nothing was built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    pub message: String,
    /// Set when the underlying parser could point at the offending spot
    pub location: Option<Location>,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location {
            Some(loc) => write!(
                f,
                "malformed document (line {}, column {}): {}",
                loc.line, loc.column, self.message
            ),
            None => write!(f, "malformed document: {}", self.message),
        }
    }
}

impl std::error::Error for FormatError {}

impl From<serde_yaml::Error> for FormatError {
    fn from(err: serde_yaml::Error) -> Self {
        FormatError {
            message: err.to_string(),
            location: err.location().map(|loc| Location {
                line: loc.line(),
                column: loc.column(),
            }),
        }
    }
}

/// Parse a serialized document back into a `Forest`.
///
/// Fresh ids are assigned to every node (ids are only stable within a
/// session). Empty or all-null input is an empty forest, matching how the
/// engine treats an absent file. Field order and sibling order in the text
/// become children/root order exactly.
pub fn parse_forest(text: &str) -> Result<Forest, FormatError> {
    let doc: Option<Vec<PersistedNode>> = serde_yaml::from_str(text)?;

    let mut forest = Forest::new();
    for persisted in doc.unwrap_or_default() {
        let root = attach(&mut forest, persisted, None);
        forest.roots_mut().push(root);
    }
    Ok(forest)
}

/// Insert `persisted` (and, recursively, its children) into the arena
/// under `parent`, returning the fresh id.
fn attach(forest: &mut Forest, persisted: PersistedNode, parent: Option<NodeId>) -> NodeId {
    let mut node = Node::new();
    node.title = persisted.name;
    node.status = persisted.status;
    node.description = persisted.description;
    node.notes = persisted.notes;
    node.parent = parent;
    let id = node.id;
    forest.insert_node(node);

    for child in persisted.children {
        let child_id = attach(forest, child, Some(id));
        if let Some(children) = forest.children_mut(id) {
            children.push(child_id);
        }
    }
    id
}
