use serde::{Deserialize, Serialize};

/// On-disk shape of one node: a YAML mapping with the four text fields and
/// a nested `children` sequence. The whole document is a sequence of these
/// (the roots, in display order).
///
/// Every field is optional on read — a missing field is an empty string,
/// never an error. Unknown keys (notably the `id` the original desktop app
/// wrote) are accepted and ignored; ids are minted fresh at parse time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct PersistedNode {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<PersistedNode>,
}
