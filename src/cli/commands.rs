use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "tap",
    about = concat!("taproot v", env!("CARGO_PKG_VERSION"), " - your research tree is plain text"),
    version
)]
pub struct Cli {
    /// Document to open (falls back to the config, then project_tree.yaml)
    pub path: Option<PathBuf>,

    /// Config file location
    #[arg(long, default_value = "taproot.toml")]
    pub config: PathBuf,

    /// Log level when RUST_LOG is unset (trace|debug|info|warn|error)
    #[arg(long)]
    pub log_level: Option<String>,
}
