pub mod config;
pub mod forest;
pub mod node;

pub use config::*;
pub use forest::*;
pub use node::*;
