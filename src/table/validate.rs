// Table invariant checks
//
// Every violation in the table is collected in a single pass so an author
// sees the whole picture at once instead of fixing errors one at a time.

use thiserror::Error;

use super::color::Rgb;
use super::Table;

/// One invariant violation found by `Table::validate`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Color value is not "#" followed by exactly six hex digits
    #[error("color {palette}.{shade} is {value:?}, expected \"#\" plus 6 hex digits")]
    InvalidColorFormat {
        palette: String,
        shade: String,
        value: String,
    },

    /// Shade key appears more than once within one palette
    #[error("palette {palette:?} defines shade {shade:?} more than once")]
    DuplicateShadeKey { palette: String, shade: String },

    /// Font role with no fallback entries
    #[error("font role {role:?} has an empty fallback list")]
    EmptyFontFallbackList { role: String },
}

impl Table {
    /// Check every table invariant.
    ///
    /// Returns all violations together; an empty-handed pass is Ok. A table
    /// that fails here still resolves (first match wins on duplicates), but
    /// tooling should refuse to ship it.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for (role, families) in &self.font_families {
            if families.is_empty() {
                errors.push(ValidationError::EmptyFontFallbackList { role: role.clone() });
            }
        }

        for (palette, scale) in &self.color_scales {
            let mut seen: Vec<&str> = Vec::with_capacity(scale.entries.len());
            for (shade, value) in &scale.entries {
                if Rgb::parse(value).is_none() {
                    errors.push(ValidationError::InvalidColorFormat {
                        palette: palette.clone(),
                        shade: shade.clone(),
                        value: value.clone(),
                    });
                }
                if seen.contains(&shade.as_str()) {
                    errors.push(ValidationError::DuplicateShadeKey {
                        palette: palette.clone(),
                        shade: shade.clone(),
                    });
                } else {
                    seen.push(shade);
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
