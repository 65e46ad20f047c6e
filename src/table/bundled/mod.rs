//! Bundled token tables (compiled into binary, extracted on first run)
//!
//! These tables are written to ~/.config/swatchbook/tables/ on first run.
//! Users can then modify them freely; an extraction marker keeps later runs
//! from resurrecting deleted files.
//!
//! Each table lives in its own module file for easy editing.

mod default;
mod minimal;

pub use default::TABLE as DEFAULT;
pub use minimal::TABLE as MINIMAL;

/// Bundled table: name, extraction filename, and TOML content
#[derive(Debug)]
pub struct BundledTable {
    pub name: &'static str,
    pub filename: &'static str,
    pub content: &'static str,
}

/// All bundled tables
pub const BUNDLED_TABLES: &[BundledTable] = &[
    BundledTable {
        name: "default",
        filename: "default.toml",
        content: DEFAULT,
    },
    BundledTable {
        name: "minimal",
        filename: "minimal.toml",
        content: MINIMAL,
    },
];

/// Look up a bundled table by name
pub fn get(name: &str) -> Option<&'static BundledTable> {
    BUNDLED_TABLES.iter().find(|table| table.name == name)
}
