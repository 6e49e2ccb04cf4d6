use clap::Parser;

use taproot::cli::{render_outline, Cli};
use taproot::engine::Document;
use taproot::io::load_config;
use taproot::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(&cli.config)?;
    let level = cli
        .log_level
        .unwrap_or_else(|| config.logging.level.clone());
    init_logging(&level)?;

    let path = config.resolve_document_path(cli.path);
    let document = Document::open(&path)?;

    print!("{}", render_outline(document.forest()));
    println!(
        "{} nodes, {} top-level projects — {}",
        document.forest().len(),
        document.forest().roots().len(),
        path.display()
    );
    Ok(())
}
