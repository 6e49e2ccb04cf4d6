use indexmap::IndexMap;

use super::node::{Node, NodeId};

/// The whole document: an ordered sequence of root ids plus an arena
/// mapping every id (roots and descendants) to its node.
///
/// Children are stored as id lists, never as owning links, so structural
/// edits are index updates and the parent relation stays a strict forest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forest {
    nodes: IndexMap<NodeId, Node>,
    roots: Vec<NodeId>,
}

impl Forest {
    pub fn new() -> Forest {
        Forest::default()
    }

    /// Total node count, roots included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    /// Top-level ids in display order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Child ids of `parent` in display order; `None` means the root
    /// sequence. Returns `None` for an unknown parent id.
    pub fn children_ids(&self, parent: Option<NodeId>) -> Option<&[NodeId]> {
        match parent {
            None => Some(&self.roots),
            Some(id) => self.nodes.get(&id).map(|n| n.children.as_slice()),
        }
    }

    /// All ids in the arena, in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// True when `ancestor` lies on the parent chain of `id` (strict —
    /// a node is not its own ancestor). Bounded by tree depth.
    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = self.nodes.get(&id).and_then(|n| n.parent);
        while let Some(p) = current {
            if p == ancestor {
                return true;
            }
            current = self.nodes.get(&p).and_then(|n| n.parent);
        }
        false
    }

    /// Ids of `id` and every descendant, preorder.
    pub fn subtree_ids(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            out.push(current);
            if let Some(node) = self.nodes.get(&current) {
                // push reversed so preorder pops left-to-right
                for child in node.children.iter().rev() {
                    stack.push(*child);
                }
            }
        }
        out
    }

    // -- crate-internal structural access for ops and the parser --

    pub(crate) fn insert_node(&mut self, node: Node) {
        self.nodes.insert(node.id, node);
    }

    pub(crate) fn remove_node(&mut self, id: NodeId) -> Option<Node> {
        self.nodes.shift_remove(&id)
    }

    pub(crate) fn roots_mut(&mut self) -> &mut Vec<NodeId> {
        &mut self.roots
    }

    /// Mutable child list of `id`, or `None` for an unknown id.
    pub(crate) fn children_mut(&mut self, id: NodeId) -> Option<&mut Vec<NodeId>> {
        self.nodes.get_mut(&id).map(|n| &mut n.children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linked(parent: Option<NodeId>) -> Node {
        let mut node = Node::new();
        node.parent = parent;
        node
    }

    /// Hand-build a forest: root A with child B with child C.
    fn chain() -> (Forest, NodeId, NodeId, NodeId) {
        let mut forest = Forest::new();
        let mut a = Node::new();
        let a_id = a.id;
        let mut b = linked(Some(a_id));
        let b_id = b.id;
        let c = linked(Some(b_id));
        let c_id = c.id;
        b.children.push(c_id);
        a.children.push(b_id);
        forest.insert_node(a);
        forest.insert_node(b);
        forest.insert_node(c);
        forest.roots.push(a_id);
        (forest, a_id, b_id, c_id)
    }

    #[test]
    fn ancestor_walk_is_strict() {
        let (forest, a, b, c) = chain();
        assert!(forest.is_ancestor(a, c));
        assert!(forest.is_ancestor(b, c));
        assert!(!forest.is_ancestor(c, a));
        assert!(!forest.is_ancestor(c, c));
    }

    #[test]
    fn subtree_ids_preorder() {
        let (forest, a, b, c) = chain();
        assert_eq!(forest.subtree_ids(a), vec![a, b, c]);
        assert_eq!(forest.subtree_ids(b), vec![b, c]);
        assert_eq!(forest.subtree_ids(c), vec![c]);
    }

    #[test]
    fn children_ids_none_is_roots() {
        let (forest, a, b, _) = chain();
        assert_eq!(forest.children_ids(None), Some(&[a][..]));
        assert_eq!(forest.children_ids(Some(a)), Some(&[b][..]));
        assert_eq!(forest.children_ids(Some(NodeId::new())), None);
    }
}
