//! Render the math in an HTML page read from a file or stdin
//!
//! Usage: `cargo run --example render_page -- [page.html] [config.json]`
//!
//! Set `RUST_LOG=html_math_renderer=debug` to see substitution counts.

use std::io::Read;

use html_math_renderer::{DocumentTree, EngineConfig, MathHtmlEngine, RenderOptions};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);

    let html = match args.next() {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let config = match args.next() {
        Some(path) => EngineConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => EngineConfig::default(),
    };

    let engine = MathHtmlEngine::with_config(config)?;
    let options = RenderOptions::new().with("throwOnError", false);

    let page = DocumentTree::parse_document(&html);
    let rendered = engine.render_in_html(page, &options)?.to_html()?;
    println!("{}", rendered);

    Ok(())
}
