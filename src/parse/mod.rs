pub mod forest_parser;
pub mod forest_serializer;
mod persisted;

pub use forest_parser::{parse_forest, FormatError, Location};
pub use forest_serializer::serialize_forest;
