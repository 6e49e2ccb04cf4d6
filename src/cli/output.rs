use crate::model::forest::Forest;
use crate::model::node::NodeId;

/// Render the forest as an indented outline, one node per line with a
/// status marker. This is presentation only — the marker mapping knows
/// the statuses the desktop app writes, and anything else gets a neutral
/// box (the engine never constrains status text).
pub fn render_outline(forest: &Forest) -> String {
    let mut out = String::new();
    for &root in forest.roots() {
        render_node(forest, root, 0, &mut out);
    }
    out
}

fn render_node(forest: &Forest, id: NodeId, depth: usize, out: &mut String) {
    let Some(node) = forest.get(id) else {
        return;
    };
    let title = if node.title.is_empty() {
        "(untitled)"
    } else {
        &node.title
    };
    out.push_str(&"  ".repeat(depth));
    out.push_str(status_marker(&node.status));
    out.push(' ');
    out.push_str(title);
    out.push('\n');
    for &child in &node.children {
        render_node(forest, child, depth + 1, out);
    }
}

fn status_marker(status: &str) -> &'static str {
    match status {
        "Completed" => "[x]",
        "In-Progress" => "[>]",
        "Blocked" => "[-]",
        "Planning" => "[~]",
        "Locked" => "[#]",
        "Unlocked" => "[ ]",
        _ => "[ ]",
    }
}
