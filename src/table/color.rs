// Hex color handling
//
// Token color values use the strict 6-digit form: "#" followed by exactly
// six hex digits. Shorthand (#fff) and alpha (#rrggbbaa) forms are not
// valid token values.

/// Decoded color channels for a token value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse "#rrggbb" (case-insensitive). None for anything else.
    pub fn parse(value: &str) -> Option<Self> {
        let hex = value.strip_prefix('#')?;
        // The explicit digit check rejects signs and whitespace that
        // from_str_radix would otherwise tolerate
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }
}
