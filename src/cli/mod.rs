pub mod commands;
pub mod output;

pub use commands::Cli;
pub use output::render_outline;
