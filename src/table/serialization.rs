//! Table serialization to TOML
//!
//! Single source of truth for the native table file format. JSON is an
//! input-only compatibility format and is never written back.

use super::Table;

impl Table {
    /// Serialize to the native TOML form.
    ///
    /// Entry order is preserved, so a validated table serializes back to an
    /// equivalent document: `from_toml_str(t.to_toml()) == t`. Tables that
    /// fail validation are outside the contract: a duplicated shade key is
    /// emitted twice and the TOML parser rejects the result.
    pub fn to_toml(&self) -> String {
        let mut output = String::new();

        // Top-level values must precede any section header
        output.push_str(&format!("content = {:?}\n", self.content));
        output.push_str(&format!("plugins = {:?}\n", self.plugins));

        if !self.font_families.is_empty() {
            output.push_str("\n[theme.extend.fontFamily]\n");
            for (role, families) in &self.font_families {
                output.push_str(&format!("{} = {:?}\n", toml_key(role), families));
            }
        }

        for (palette, scale) in &self.color_scales {
            output.push_str(&format!("\n[theme.extend.colors.{}]\n", toml_key(palette)));
            for (shade, value) in &scale.entries {
                output.push_str(&format!("{} = {:?}\n", toml_key(shade), value));
            }
        }

        output
    }
}

/// Quote keys that are not bare TOML keys (bare: ASCII alphanumerics,
/// `-`, `_`)
fn toml_key(key: &str) -> String {
    let bare = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if bare {
        key.to_string()
    } else {
        format!("{:?}", key)
    }
}
