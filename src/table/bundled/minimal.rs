//! Minimal table - grey scale only, system monospace stack

pub const TABLE: &str = r##"# Minimal token table for swatchbook
# The grey scale without the syntax palettes; mono falls straight to
# the system monospace face

content = ["./templates/**/*.html"]
plugins = ["@tailwindcss/typography"]

[theme.extend.fontFamily]
sans = ["geist", "system-ui"]
mono = ["monospace"]

[theme.extend.colors.grey]
50 = "#f7f6f6"
100 = "#e6e2e1"
200 = "#cdc5c2"
300 = "#aca19c"
400 = "#8a7d77"
500 = "#70615c"
600 = "#584e49"
700 = "#48423d"
800 = "#3c3633"
900 = "#342f2d"
950 = "#1c1917"
"##;
