pub mod check;
pub mod forest_ops;

pub use check::{check_forest, Violation};
pub use forest_ops::{
    add_child, add_root, add_sibling, delete_node, move_node, update_fields, TreeError,
};
