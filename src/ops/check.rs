use std::collections::{HashMap, HashSet};

use crate::model::forest::Forest;
use crate::model::node::NodeId;

/// A structural violation found by `check_forest`.
///
/// A well-formed forest never produces any of these; they exist so tests
/// (and cautious callers) can assert the invariants instead of trusting
/// the ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A children list (or the root sequence) references an id missing
    /// from the arena
    DanglingChild {
        parent: Option<NodeId>,
        child: NodeId,
    },
    /// The same id appears twice in one sibling list
    DuplicateSibling {
        parent: Option<NodeId>,
        child: NodeId,
    },
    /// A node's parent backref disagrees with the list it sits in
    ParentMismatch {
        node: NodeId,
        listed_under: Option<NodeId>,
    },
    /// A node appears in more than one sibling list
    MultiplyLinked { node: NodeId },
    /// A node is in the arena but in no sibling list at all
    Orphaned { node: NodeId },
    /// A node is its own ancestor
    Cycle { node: NodeId },
    /// A node cannot be reached from any root
    Unreachable { node: NodeId },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::DanglingChild { parent, child } => match parent {
                Some(p) => write!(f, "child {child} of {p} is not in the arena"),
                None => write!(f, "root {child} is not in the arena"),
            },
            Violation::DuplicateSibling { parent, child } => match parent {
                Some(p) => write!(f, "{child} listed twice under {p}"),
                None => write!(f, "{child} listed twice among roots"),
            },
            Violation::ParentMismatch { node, listed_under } => match listed_under {
                Some(p) => write!(f, "{node} is listed under {p} but points elsewhere"),
                None => write!(f, "{node} is a root but has a parent backref"),
            },
            Violation::MultiplyLinked { node } => {
                write!(f, "{node} appears in more than one sibling list")
            }
            Violation::Orphaned { node } => write!(f, "{node} is in no sibling list"),
            Violation::Cycle { node } => write!(f, "{node} is its own ancestor"),
            Violation::Unreachable { node } => {
                write!(f, "{node} is unreachable from the roots")
            }
        }
    }
}

/// Validate a forest's structural invariants and return every violation.
///
/// This is a read-only operation — it does not modify the forest.
///
/// Checks performed:
/// 1. Every id in the root sequence and every children list exists
/// 2. No sibling list contains duplicates
/// 3. Parent backrefs agree with the list each node sits in
/// 4. Every node sits in exactly one sibling list
/// 5. The parent relation is acyclic
/// 6. Every node is reachable from some root
pub fn check_forest(forest: &Forest) -> Vec<Violation> {
    let mut violations = Vec::new();

    // Where each node is listed, counting repeats across lists
    let mut listed_in: HashMap<NodeId, Vec<Option<NodeId>>> = HashMap::new();

    {
        let mut scan_list = |parent: Option<NodeId>, ids: &[NodeId]| {
            let mut seen = HashSet::new();
            for &child in ids {
                if !seen.insert(child) {
                    violations.push(Violation::DuplicateSibling { parent, child });
                    continue;
                }
                if !forest.contains(child) {
                    violations.push(Violation::DanglingChild { parent, child });
                    continue;
                }
                listed_in.entry(child).or_default().push(parent);
            }
        };

        scan_list(None, forest.roots());
        for node in forest.iter() {
            scan_list(Some(node.id), &node.children);
        }
    }

    for node in forest.iter() {
        match listed_in.get(&node.id) {
            None => violations.push(Violation::Orphaned { node: node.id }),
            Some(parents) => {
                if parents.len() > 1 {
                    violations.push(Violation::MultiplyLinked { node: node.id });
                } else if parents[0] != node.parent {
                    violations.push(Violation::ParentMismatch {
                        node: node.id,
                        listed_under: parents[0],
                    });
                }
            }
        }

        // Hop bound guards against a corrupted parent chain looping forever
        let mut hops = 0usize;
        let mut current = node.parent;
        while let Some(p) = current {
            if p == node.id || hops > forest.len() {
                violations.push(Violation::Cycle { node: node.id });
                break;
            }
            hops += 1;
            current = forest.get(p).and_then(|n| n.parent);
        }
    }

    // Reachability from the root sequence
    let mut reachable = HashSet::new();
    for &root in forest.roots() {
        for id in forest.subtree_ids(root) {
            reachable.insert(id);
        }
    }
    for id in forest.ids() {
        if !reachable.contains(&id) {
            violations.push(Violation::Unreachable { node: id });
        }
    }

    violations
}
