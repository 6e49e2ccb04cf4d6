use crate::model::forest::Forest;
use crate::model::node::NodeId;
use crate::parse::persisted::PersistedNode;

/// Serialize a forest to its YAML document text.
///
/// Nesting encodes the parent/children relation; sibling order in the text
/// is exactly the children/root order. The output fully replaces the prior
/// file contents on save, so this is the whole document every time.
pub fn serialize_forest(forest: &Forest) -> Result<String, serde_yaml::Error> {
    let doc: Vec<PersistedNode> = forest
        .roots()
        .iter()
        .map(|&root| persist(forest, root))
        .collect();
    serde_yaml::to_string(&doc)
}

fn persist(forest: &Forest, id: NodeId) -> PersistedNode {
    match forest.get(id) {
        Some(node) => PersistedNode {
            name: node.title.clone(),
            status: node.status.clone(),
            description: node.description.clone(),
            notes: node.notes.clone(),
            children: node
                .children
                .iter()
                .map(|&child| persist(forest, child))
                .collect(),
        },
        // Unreachable in a well-formed forest; emit an empty node rather
        // than lose the rest of the document
        None => PersistedNode::default(),
    }
}
