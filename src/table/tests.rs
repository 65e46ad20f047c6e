//! Token table tests
//!
//! Resolution and round-trip checks run against the bundled sample tables,
//! so the shipped data is covered by the same assertions as the code.

use super::*;

fn default_table() -> Table {
    Table::from_toml_str(bundled::DEFAULT).unwrap()
}

fn minimal_table() -> Table {
    Table::from_toml_str(bundled::MINIMAL).unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Bundled data
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_bundled_tables_parse_and_validate() {
    for table in bundled::BUNDLED_TABLES {
        let parsed = Table::from_toml_str(table.content)
            .unwrap_or_else(|e| panic!("bundled table {} must parse: {}", table.name, e));
        assert!(
            parsed.validate().is_ok(),
            "bundled table {} must validate clean: {:?}",
            table.name,
            parsed.validate()
        );
    }
}

#[test]
fn test_bundled_tables_roundtrip() {
    for table in bundled::BUNDLED_TABLES {
        let loaded = Table::from_toml_str(table.content).unwrap();
        let reloaded = Table::from_toml_str(&loaded.to_toml()).unwrap();
        assert_eq!(
            reloaded, loaded,
            "bundled table {} must survive serialize/load",
            table.name
        );
    }
}

#[test]
fn test_bundled_colors_are_strict_hex() {
    for table in [default_table(), minimal_table()] {
        for (palette, scale) in &table.color_scales {
            for (shade, value) in &scale.entries {
                assert!(
                    Rgb::parse(value).is_some(),
                    "{}.{} carries a malformed color {:?}",
                    palette,
                    shade,
                    value
                );
            }
        }
    }
}

#[test]
fn test_font_roles_resolve_to_their_fallback_lists() {
    for table in [default_table(), minimal_table()] {
        for (role, families) in &table.font_families {
            match table.resolve(role) {
                Some(TokenValue::FontStack(resolved)) => {
                    assert!(!resolved.is_empty(), "role {} must have fallbacks", role);
                    assert_eq!(resolved, families.as_slice());
                    assert_eq!(&resolved[0], &families[0], "preferred family comes first");
                }
                other => panic!("role {} resolved to {:?}", role, other),
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Resolution
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_resolve_color_tokens() {
    let table = default_table();
    assert_eq!(table.resolve("grey.500"), Some(TokenValue::Color("#70615c")));
    assert_eq!(table.resolve("grey.50"), Some(TokenValue::Color("#f7f6f6")));
    assert_eq!(
        table.resolve("one-half-dark.purple"),
        Some(TokenValue::Color("#c678dd"))
    );
    assert_eq!(
        table.resolve("one-half-light.base"),
        Some(TokenValue::Color("#383a42"))
    );
}

#[test]
fn test_resolve_font_tokens() {
    let table = default_table();
    assert_eq!(table.resolve("sans").unwrap().to_string(), "geist, system-ui");
    assert_eq!(
        table.resolve("mono").unwrap().to_string(),
        "geist-mono, ui-monospace"
    );

    let minimal = minimal_table();
    assert_eq!(minimal.resolve("mono").unwrap().to_string(), "monospace");
}

#[test]
fn test_resolve_misses_return_none() {
    let table = default_table();
    assert_eq!(table.resolve("unknown.token"), None);
    assert_eq!(table.resolve("grey"), None, "a bare palette name is not a token");
    assert_eq!(table.resolve("grey.475"), None);
    assert_eq!(table.resolve("grey.500.extra"), None);
    assert_eq!(table.resolve("serif"), None);
    assert_eq!(table.resolve(""), None);
    assert_eq!(table.resolve("."), None);
}

#[test]
fn test_font_role_wins_over_palette_split() {
    let table = Table::from_toml_str(
        r##"
[theme.extend.fontFamily]
sans = ["geist"]

[theme.extend.colors.sans]
500 = "#123abc"
"##,
    )
    .unwrap();

    // Bare path hits the role, dotted path reaches the palette
    assert!(matches!(
        table.resolve("sans"),
        Some(TokenValue::FontStack(_))
    ));
    assert_eq!(table.resolve("sans.500"), Some(TokenValue::Color("#123abc")));
}

#[test]
fn test_duplicate_shade_resolves_to_first() {
    // A table that fails validation still resolves deterministically
    let table = Table::from_json_str(
        r##"{ "theme": { "extend": { "colors": {
            "grey": { "500": "#70615c", "500": "#ffffff" }
        } } } }"##,
    )
    .unwrap();

    assert!(table.validate().is_err());
    assert_eq!(table.resolve("grey.500"), Some(TokenValue::Color("#70615c")));
}

#[test]
fn test_token_value_display_and_rgb() {
    assert_eq!(TokenValue::Color("#70615c").to_string(), "#70615c");
    assert_eq!(
        TokenValue::Color("#70615c").rgb(),
        Some(Rgb { r: 112, g: 97, b: 92 })
    );

    let families = vec!["geist".to_string(), "system-ui".to_string()];
    let stack = TokenValue::FontStack(&families);
    assert_eq!(stack.to_string(), "geist, system-ui");
    assert_eq!(stack.rgb(), None);
}

// ─────────────────────────────────────────────────────────────────────────────
// Sources
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_find_table_falls_back_to_bundled() {
    assert!(find_table("default").is_some());
    assert!(find_table("minimal").is_some());
    assert!(find_table("no-such-table").is_none());
}

#[test]
fn test_source_debug_formatting() {
    // Both variants must render, bundled tables included
    let bundled = TableSource::Bundled(bundled::get("default").unwrap());
    assert!(format!("{:?}", bundled).contains("\"default\""));

    let external = TableSource::External(PathBuf::from("grey.toml"));
    assert!(format!("{:?}", external).contains("grey.toml"));
}

#[test]
fn test_list_names_are_unique_and_include_bundled() {
    let names = list_available();
    assert!(names.iter().any(|n| n == "default"));
    assert!(names.iter().any(|n| n == "minimal"));

    let mut deduped = names.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), names.len(), "listing must not repeat names");
}

#[test]
fn test_external_tables_dir_override() {
    let dir = std::env::temp_dir().join(format!("swatchbook-test-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::env::set_var("SWATCHBOOK_TABLES_DIR", &dir);

    assert_eq!(tables_dir(), Some(dir.clone()));

    // First run extracts every bundled table plus the marker
    ensure_tables_extracted();
    assert!(dir.join("default.toml").exists());
    assert!(dir.join("minimal.toml").exists());
    assert!(dir.join(".extracted_v1").exists());

    // An extracted table loads to the same table as its bundled source
    let source = find_table("default").unwrap();
    assert!(matches!(source, TableSource::External(_)));
    assert_eq!(source.load().unwrap(), default_table());

    // User edits shadow the bundled content
    std::fs::write(
        dir.join("default.toml"),
        "content = [\"./src/**/*.rs\"]\nplugins = []\n",
    )
    .unwrap();
    let edited = find_table("default").unwrap().load().unwrap();
    assert_eq!(edited.content, vec!["./src/**/*.rs"]);

    // Deleted tables stay deleted on later runs
    std::fs::remove_file(dir.join("minimal.toml")).unwrap();
    ensure_tables_extracted();
    assert!(
        !dir.join("minimal.toml").exists(),
        "the marker must prevent re-extraction"
    );

    // The name still lists via the bundled set
    assert!(list_available().iter().any(|n| n == "minimal"));

    std::env::remove_var("SWATCHBOOK_TABLES_DIR");
    let _ = std::fs::remove_dir_all(&dir);
}
