use crate::model::forest::Forest;
use crate::model::node::{FieldEdit, Node, NodeId};

/// Error type for structural operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("node not found: {0}")]
    NotFound(NodeId),
    #[error("cannot move {node} under {dest}: it would become its own ancestor")]
    Cycle { node: NodeId, dest: NodeId },
    #[error("position {position} out of range for sibling list of length {len}")]
    OutOfRange { position: usize, len: usize },
}

// ---------------------------------------------------------------------------
// Insertion
// ---------------------------------------------------------------------------

/// Add a new empty root. With `after` set, the new root goes immediately
/// after that root; otherwise it is appended. `after` must identify a
/// current root — an id living deeper in the forest is still `NotFound`.
pub fn add_root(forest: &mut Forest, after: Option<NodeId>) -> Result<NodeId, TreeError> {
    let index = match after {
        Some(after_id) => {
            let at = forest
                .roots()
                .iter()
                .position(|&r| r == after_id)
                .ok_or(TreeError::NotFound(after_id))?;
            at + 1
        }
        None => forest.roots().len(),
    };

    let node = Node::new();
    let id = node.id;
    forest.insert_node(node);
    sibling_list(forest, None)?.insert(index, id);
    Ok(id)
}

/// Add a new empty node right after `of` among its siblings (or in the
/// root sequence when `of` is a root).
pub fn add_sibling(forest: &mut Forest, of: NodeId) -> Result<NodeId, TreeError> {
    let parent = forest.get(of).ok_or(TreeError::NotFound(of))?.parent;
    let siblings = forest
        .children_ids(parent)
        .ok_or(TreeError::NotFound(of))?;
    let index = siblings
        .iter()
        .position(|&s| s == of)
        .ok_or(TreeError::NotFound(of))?
        + 1;

    let mut node = Node::new();
    node.parent = parent;
    let id = node.id;
    forest.insert_node(node);
    sibling_list(forest, parent)?.insert(index, id);
    Ok(id)
}

/// Add a new empty node as the last child of `of`.
pub fn add_child(forest: &mut Forest, of: NodeId) -> Result<NodeId, TreeError> {
    if !forest.contains(of) {
        return Err(TreeError::NotFound(of));
    }

    let mut node = Node::new();
    node.parent = Some(of);
    let id = node.id;
    forest.insert_node(node);
    sibling_list(forest, Some(of))?.push(id);
    Ok(id)
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

/// Remove `id` and its entire subtree (cascade — nothing is orphaned).
/// Irreversible in-process.
pub fn delete_node(forest: &mut Forest, id: NodeId) -> Result<(), TreeError> {
    let parent = forest.get(id).ok_or(TreeError::NotFound(id))?.parent;
    let doomed = forest.subtree_ids(id);

    sibling_list(forest, parent)?.retain(|&s| s != id);
    for stale in doomed {
        forest.remove_node(stale);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Move (reparent and reorder)
// ---------------------------------------------------------------------------

/// Relocate `id` with its whole subtree under `new_parent` (`None` = make
/// it a root) at the 0-based `position` in the destination sibling list.
///
/// `position` is interpreted against the destination list *after* the
/// source removal, so a same-parent move lands exactly where the caller
/// said. All validation happens before any mutation: on error the forest
/// is unchanged.
pub fn move_node(
    forest: &mut Forest,
    id: NodeId,
    new_parent: Option<NodeId>,
    position: usize,
) -> Result<(), TreeError> {
    let old_parent = forest.get(id).ok_or(TreeError::NotFound(id))?.parent;

    if let Some(dest) = new_parent {
        if !forest.contains(dest) {
            return Err(TreeError::NotFound(dest));
        }
        if dest == id || forest.is_ancestor(id, dest) {
            return Err(TreeError::Cycle { node: id, dest });
        }
    }

    // Destination length as the caller sees it: after the node has left
    // its current sibling list.
    let mut dest_len = forest
        .children_ids(new_parent)
        .ok_or_else(|| TreeError::NotFound(new_parent.unwrap_or(id)))?
        .len();
    if old_parent == new_parent {
        dest_len -= 1;
    }
    if position > dest_len {
        return Err(TreeError::OutOfRange {
            position,
            len: dest_len,
        });
    }

    sibling_list(forest, old_parent)?.retain(|&s| s != id);
    sibling_list(forest, new_parent)?.insert(position, id);
    if let Some(node) = forest.get_mut(id) {
        node.parent = new_parent;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Field updates
// ---------------------------------------------------------------------------

/// Apply a partial field edit to `id`. Unset fields are left alone; the
/// engine never inspects the text it stores.
pub fn update_fields(forest: &mut Forest, id: NodeId, edit: FieldEdit) -> Result<(), TreeError> {
    let node = forest.get_mut(id).ok_or(TreeError::NotFound(id))?;
    if let Some(title) = edit.title {
        node.title = title;
    }
    if let Some(status) = edit.status {
        node.status = status;
    }
    if let Some(description) = edit.description {
        node.description = description;
    }
    if let Some(notes) = edit.notes {
        node.notes = notes;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Mutable sibling list for `parent` (`None` = the root sequence), mapping
/// a vanished parent to `NotFound`. Callers have already validated the
/// parent; this keeps the ops panic-free even on a broken arena.
fn sibling_list<'a>(
    forest: &'a mut Forest,
    parent: Option<NodeId>,
) -> Result<&'a mut Vec<NodeId>, TreeError> {
    match parent {
        None => Ok(forest.roots_mut()),
        Some(id) => forest.children_mut(id).ok_or(TreeError::NotFound(id)),
    }
}
