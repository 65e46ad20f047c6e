// Table file format (TOML native, JSON legacy)
//
// The declarative shape mirrors the upstream artifact: top-level `content`
// and `plugins` arrays plus `theme.extend.fontFamily` and
// `theme.extend.colors` maps. Any of them may be absent. Unknown keys are
// ignored at every level, matching how the upstream tooling treats keys it
// does not consume.

use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::ColorScale;

/// Errors that stop a load immediately.
///
/// Invariant violations inside a structurally well-formed table are not
/// parse errors; `Table::validate` collects those instead.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported table format {} (expected .toml or .json)", .path.display())]
    UnsupportedFormat { path: PathBuf },
}

/// Raw deserialization target for a table document.
///
/// Field names follow the upstream artifact (camelCase `fontFamily`), so
/// the renames live here and nowhere else.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileTable {
    #[serde(default)]
    pub content: Vec<String>,
    #[serde(default)]
    pub theme: FileTheme,
    #[serde(default)]
    pub plugins: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileTheme {
    #[serde(default)]
    pub extend: FileExtend,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileExtend {
    #[serde(rename = "fontFamily", default)]
    pub font_family: IndexMap<String, Vec<String>>,
    #[serde(default)]
    pub colors: IndexMap<String, ColorScale>,
}

impl FileTable {
    /// Parse a table document from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ParseError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a table document from JSON text (legacy format)
    pub fn from_json_str(content: &str) -> Result<Self, ParseError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a table document from disk, picking the parser by extension
    pub fn from_path(path: &Path) -> Result<Self, ParseError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&read_source(path)?),
            Some("json") => Self::from_json_str(&read_source(path)?),
            _ => Err(ParseError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

fn read_source(path: &Path) -> Result<String, ParseError> {
    std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// Scales deserialize by hand instead of into a map so that duplicate shade
// keys survive parsing where the format allows them (JSON does; TOML
// rejects them in the parser). `Table::validate` reports the duplicates.
impl<'de> Deserialize<'de> for ColorScale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ScaleVisitor;

        impl<'de> Visitor<'de> for ScaleVisitor {
            type Value = ColorScale;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of shade keys to color strings")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((shade, value)) = access.next_entry::<String, String>()? {
                    entries.push((shade, value));
                }
                Ok(ColorScale { entries })
            }
        }

        deserializer.deserialize_map(ScaleVisitor)
    }
}
