// Swatchbook - design token tables for style tooling
//
// Loads declarative token tables (content globs, font fallback stacks,
// color scales, plugin ids), validates them, and resolves dotted token
// paths like grey.500 to concrete values.
//
// Architecture:
// - table: parsing (native TOML, legacy JSON), validation, resolution
// - table::bundled: compiled-in sample tables, extracted on first run
// - cli: clap subcommands over the table operations

mod cli;
mod table;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    // RUST_LOG overrides the default filter. Diagnostics go to stderr so
    // command output stays pipeable.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "swatchbook=warn".into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    cli::handle_cli()
}
