// CLI module - command-line argument parsing and handlers
//
// Provides subcommands for working with token tables:
// - check: validate a table, reporting every problem in one pass
// - resolve: look up a dotted token path
// - list: list available tables and their sources
// - show: print a table in native TOML form
// - tables-dir: show the external tables directory path

use crate::table::{self, Table, ValidationError};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Swatchbook - design token table checker and resolver
#[derive(Parser)]
#[command(name = "swatchbook")]
#[command(version = VERSION)]
#[command(about = "Design token table checker and resolver", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a table, reporting every problem in one pass
    Check {
        /// Table name (external tables shadow bundled ones)
        name: Option<String>,

        /// Load an explicit file instead of a named table
        #[arg(long, conflicts_with = "name")]
        file: Option<PathBuf>,

        /// Check every available table
        #[arg(long, conflicts_with_all = ["name", "file"])]
        all: bool,
    },

    /// Resolve a token path (grey.500, sans) to its value
    Resolve {
        /// Token path: a font role, or palette.shade
        token: String,

        /// Table name (defaults to "default")
        name: Option<String>,

        /// Load an explicit file instead of a named table
        #[arg(long, conflicts_with = "name")]
        file: Option<PathBuf>,
    },

    /// List available tables and where they come from
    List,

    /// Print a table in native TOML form
    Show {
        /// Table name (defaults to "default")
        name: Option<String>,

        /// Load an explicit file instead of a named table
        #[arg(long, conflicts_with = "name")]
        file: Option<PathBuf>,
    },

    /// Print the external tables directory path
    TablesDir,
}

/// Parse arguments and run the chosen command
pub fn handle_cli() -> Result<()> {
    let cli = Cli::parse();

    // Filesystem work happens after parse() so --help and --version exit
    // without touching the tables directory
    table::ensure_tables_extracted();

    match cli.command {
        Commands::Check { name, file, all } => {
            if all {
                handle_check_all()
            } else {
                handle_check(name, file)
            }
        }
        Commands::Resolve { token, name, file } => handle_resolve(&token, name, file),
        Commands::List => {
            handle_list();
            Ok(())
        }
        Commands::Show { name, file } => handle_show(name, file),
        Commands::TablesDir => handle_tables_dir(),
    }
}

/// Load the table a command names: --file wins, then NAME, then "default"
fn load_target(name: Option<String>, file: Option<PathBuf>) -> Result<(String, Table)> {
    if let Some(path) = file {
        let table = Table::from_path(&path)
            .with_context(|| format!("failed to load {}", path.display()))?;
        return Ok((path.display().to_string(), table));
    }

    let name = name.unwrap_or_else(|| "default".to_string());
    let Some(source) = table::find_table(&name) else {
        bail!(
            "no table named {:?} (available: {})",
            name,
            table::list_available().join(", ")
        );
    };
    let table = source
        .load()
        .with_context(|| format!("failed to load table {:?}", name))?;
    Ok((name, table))
}

fn report_validation_errors(label: &str, errors: &[ValidationError]) {
    eprintln!("{}: {} problem(s) found", label, errors.len());
    for error in errors {
        eprintln!("  - {}", error);
    }
}

fn handle_check(name: Option<String>, file: Option<PathBuf>) -> Result<()> {
    let (label, table) = load_target(name, file)?;

    match table.validate() {
        Ok(()) => {
            println!(
                "{}: ok ({} palette(s), {} font role(s), {} content glob(s), {} plugin(s))",
                label,
                table.color_scales.len(),
                table.font_families.len(),
                table.content.len(),
                table.plugins.len()
            );
            Ok(())
        }
        Err(errors) => {
            report_validation_errors(&label, &errors);
            std::process::exit(1);
        }
    }
}

fn handle_check_all() -> Result<()> {
    let mut failed = 0usize;

    for (name, source) in table::list_tables() {
        match source.load() {
            Ok(table) => match table.validate() {
                Ok(()) => println!("{}: ok", name),
                Err(errors) => {
                    failed += 1;
                    println!("{}: {} problem(s)", name, errors.len());
                    for error in &errors {
                        println!("  - {}", error);
                    }
                }
            },
            Err(e) => {
                failed += 1;
                println!("{}: failed to load: {}", name, e);
            }
        }
    }

    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn handle_resolve(token: &str, name: Option<String>, file: Option<PathBuf>) -> Result<()> {
    let (label, table) = load_target(name, file)?;

    // Resolution against a broken table gives answers that lie; check first
    if let Err(errors) = table.validate() {
        report_validation_errors(&label, &errors);
        std::process::exit(1);
    }

    match table.resolve(token) {
        Some(value) => {
            if let Some(rgb) = value.rgb() {
                tracing::debug!("decoded {} as rgb({}, {}, {})", token, rgb.r, rgb.g, rgb.b);
            }
            println!("{}", value);
            Ok(())
        }
        None => {
            eprintln!("Error: no token {:?} in table {}", token, label);
            std::process::exit(1);
        }
    }
}

fn handle_list() {
    let tables = table::list_tables();
    if tables.is_empty() {
        println!("No tables available.");
        return;
    }

    for (name, source) in tables {
        println!("{:<12} {}", name, source.describe());
    }
}

fn handle_show(name: Option<String>, file: Option<PathBuf>) -> Result<()> {
    let (label, table) = load_target(name, file)?;

    // A duplicated shade key would be emitted twice and TOML refuses to
    // reload that; only validated tables serialize
    if let Err(errors) = table.validate() {
        report_validation_errors(&label, &errors);
        std::process::exit(1);
    }

    print!("{}", table.to_toml());
    Ok(())
}

fn handle_tables_dir() -> Result<()> {
    match table::tables_dir() {
        Some(dir) => {
            println!("{}", dir.display());
            Ok(())
        }
        None => bail!("could not determine the tables directory"),
    }
}
