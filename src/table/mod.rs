// Token table system
//
// Architecture:
// - FileTable: raw document shape (TOML native, JSON legacy)
// - Table: resolved, read-only token table used by everything else
// - bundled: sample tables compiled in and extracted on first run
//
// Table loading priority:
// 1. External tables from ~/.config/swatchbook/tables/*.toml (then *.json)
// 2. Bundled tables (extracted on first run, compiled in)
//
// A table is immutable after load. Resolution never fails hard: unknown
// token paths are a lookup miss, not an error.

pub mod bundled;
mod color;
mod format;
mod serialization;
mod validate;

#[cfg(test)]
mod tests;

pub use color::Rgb;
pub use format::{FileTable, ParseError};
pub use validate::ValidationError;

use indexmap::IndexMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// One complete token table, immutable after load.
///
/// Field order tracks the authored document. Tables never merge; every
/// source yields a complete, independent table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Glob patterns an external scanner probes for token usage
    pub content: Vec<String>,
    /// Font role (sans, mono) to ordered fallback list, preferred first
    pub font_families: IndexMap<String, Vec<String>>,
    /// Palette name to color scale
    pub color_scales: IndexMap<String, ColorScale>,
    /// External extension identifiers, activated in order
    pub plugins: Vec<String>,
}

/// A palette's shades as authored: ordered (shade key, hex value) pairs.
///
/// Pairs rather than a map so duplicate keys loaded from JSON stay visible
/// to `validate`; lookups take the first match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorScale {
    pub entries: Vec<(String, String)>,
}

impl ColorScale {
    /// First value recorded for a shade key
    pub fn get(&self, shade: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == shade)
            .map(|(_, value)| value.as_str())
    }
}

/// A resolved token value borrowed from the table
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenValue<'a> {
    /// Hex color string, e.g. "#70615c"
    Color(&'a str),
    /// Ordered font fallback list, preferred family first
    FontStack(&'a [String]),
}

impl TokenValue<'_> {
    /// Decode a color token's channels. None for font stacks and for hex
    /// values that would not pass validation.
    pub fn rgb(&self) -> Option<Rgb> {
        match self {
            TokenValue::Color(hex) => Rgb::parse(hex),
            TokenValue::FontStack(_) => None,
        }
    }
}

impl fmt::Display for TokenValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Color(hex) => f.write_str(hex),
            TokenValue::FontStack(families) => f.write_str(&families.join(", ")),
        }
    }
}

impl Table {
    /// Parse a table from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ParseError> {
        Ok(Self::from_file(FileTable::from_toml_str(content)?))
    }

    /// Parse a table from JSON text (legacy format)
    pub fn from_json_str(content: &str) -> Result<Self, ParseError> {
        Ok(Self::from_file(FileTable::from_json_str(content)?))
    }

    /// Load a table from disk, picking the parser by extension
    pub fn from_path(path: &Path) -> Result<Self, ParseError> {
        Ok(Self::from_file(FileTable::from_path(path)?))
    }

    /// Flatten the raw document into the resolved table
    fn from_file(file: FileTable) -> Self {
        Self {
            content: file.content,
            font_families: file.theme.extend.font_family,
            color_scales: file.theme.extend.colors,
            plugins: file.plugins,
        }
    }

    /// Look up a dotted token path.
    ///
    /// A bare font role ("mono") is matched before the path is split at its
    /// first `.` into palette and shade, so a palette cannot shadow a role.
    /// Any miss is None, never a panic.
    pub fn resolve(&self, token_path: &str) -> Option<TokenValue<'_>> {
        if let Some(stack) = self.font_families.get(token_path) {
            return Some(TokenValue::FontStack(stack));
        }

        let (palette, shade) = token_path.split_once('.')?;
        let scale = self.color_scales.get(palette)?;
        scale.get(shade).map(TokenValue::Color)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Table sources (external directory + bundled set)
// ─────────────────────────────────────────────────────────────────────────────

/// Where a named table was found
#[derive(Debug)]
pub enum TableSource {
    /// A file in the external tables directory
    External(PathBuf),
    /// A table compiled into the binary
    Bundled(&'static bundled::BundledTable),
}

impl TableSource {
    /// Parse the table from this source
    pub fn load(&self) -> Result<Table, ParseError> {
        match self {
            TableSource::External(path) => Table::from_path(path),
            TableSource::Bundled(table) => Table::from_toml_str(table.content),
        }
    }

    /// Human-readable origin for listings
    pub fn describe(&self) -> String {
        match self {
            TableSource::External(path) => path.display().to_string(),
            TableSource::Bundled(_) => "bundled".to_string(),
        }
    }
}

/// External tables directory path.
///
/// SWATCHBOOK_TABLES_DIR overrides the default ~/.config/swatchbook/tables.
pub fn tables_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("SWATCHBOOK_TABLES_DIR") {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }
    dirs::home_dir().map(|h| h.join(".config").join("swatchbook").join("tables"))
}

/// Locate a table by name: external directory first, then bundled
pub fn find_table(name: &str) -> Option<TableSource> {
    if let Some(dir) = tables_dir() {
        for extension in ["toml", "json"] {
            let path = dir.join(format!("{}.{}", name, extension));
            if path.exists() {
                tracing::debug!("table {:?} found at {}", name, path.display());
                return Some(TableSource::External(path));
            }
        }
    }

    bundled::get(name).map(|table| {
        tracing::debug!("using bundled table {:?}", name);
        TableSource::Bundled(table)
    })
}

/// All available tables with their source.
///
/// External files shadow bundled tables of the same name, and a name is
/// listed once even when several sources carry it.
pub fn list_tables() -> Vec<(String, TableSource)> {
    let mut tables: Vec<(String, TableSource)> = Vec::new();

    if let Some(dir) = tables_dir() {
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
                    continue;
                };
                if extension != "toml" && extension != "json" {
                    continue;
                }
                let Some(stem) = path.file_stem() else {
                    continue;
                };
                let name = stem.to_string_lossy().to_string();
                if !tables.iter().any(|(existing, _)| *existing == name) {
                    tables.push((name, TableSource::External(path)));
                }
            }
        }
    }

    for table in bundled::BUNDLED_TABLES {
        if !tables.iter().any(|(existing, _)| existing == table.name) {
            tables.push((table.name.to_string(), TableSource::Bundled(table)));
        }
    }

    tables
}

/// Available table names, shadowed duplicates removed
pub fn list_available() -> Vec<String> {
    list_tables().into_iter().map(|(name, _)| name).collect()
}

/// Ensure the tables directory exists and extract bundled tables on first run
pub fn ensure_tables_extracted() {
    let Some(dir) = tables_dir() else {
        return;
    };

    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }

    // Marker file: re-extraction would resurrect tables the user deleted
    let marker = dir.join(".extracted_v1");
    if marker.exists() {
        return;
    }

    for table in bundled::BUNDLED_TABLES {
        let path = dir.join(table.filename);
        // Only write if file doesn't exist (don't overwrite user modifications)
        if !path.exists() && std::fs::write(&path, table.content).is_ok() {
            tracing::debug!("extracted bundled table to {}", path.display());
        }
    }

    let _ = std::fs::write(&marker, "1");
}
