//! Tests for types

use super::*;
use proptest::prelude::*;

#[test]
fn test_routes_config_default() {
    let config = RoutesConfig::default();
    assert_eq!(config.campaign_prefix, "/campaigns");
    assert_eq!(config.view_all, "/notifications");
}

#[test]
fn test_dropdown_config_default() {
    let config = DropdownConfig::default();
    assert_eq!(config.width, 56);
    assert_eq!(config.max_height, 20);
}

#[test]
fn test_parse_store_path() {
    let toml = r#"
[store]
path = "/var/lib/belltray/inbox.json"
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(
        config.store.path,
        Some(PathBuf::from("/var/lib/belltray/inbox.json"))
    );
}

#[test]
fn test_parse_routes() {
    let toml = r#"
[routes]
campaign_prefix = "/promo"
view_all = "/inbox"
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.routes.campaign_prefix, "/promo");
    assert_eq!(config.routes.view_all, "/inbox");
}

#[test]
fn test_partial_routes_section_fills_defaults() {
    let toml = r#"
[routes]
view_all = "/all"
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.routes.campaign_prefix, "/campaigns");
    assert_eq!(config.routes.view_all, "/all");
}

#[test]
fn test_empty_dropdown_section_uses_default() {
    let toml = r#"
[dropdown]
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.dropdown.width, 56);
    assert_eq!(config.dropdown.max_height, 20);
}

#[test]
fn test_invalid_width_type_is_rejected() {
    let toml = r#"
[dropdown]
width = "wide"
"#;
    let result: Result<Config, _> = toml::from_str(toml);
    assert!(result.is_err());
}

// Any combination of present/absent sections parses and falls back to defaults
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_missing_sections_use_defaults(
        include_store in prop::bool::ANY,
        include_routes in prop::bool::ANY,
        include_dropdown in prop::bool::ANY,
    ) {
        let mut toml_content = String::new();
        if include_store {
            toml_content.push_str("[store]\n");
        }
        if include_routes {
            toml_content.push_str("[routes]\n");
        }
        if include_dropdown {
            toml_content.push_str("[dropdown]\n");
        }

        let config: Result<Config, _> = toml::from_str(&toml_content);
        prop_assert!(config.is_ok(), "Failed to parse config with missing fields");

        let config = config.unwrap();
        prop_assert_eq!(config.store.path, None);
        prop_assert_eq!(config.routes.view_all, "/notifications");
        prop_assert_eq!(config.dropdown.width, 56);
    }
}
