//! Unit tests for schema module

#![allow(clippy::unwrap_used)]

use serde_json::json;

use crate::schema::{SchemaTarget, extract_property_info, generate_page, generate_property_table};

#[test]
fn target_names_round_trip() {
    for target in SchemaTarget::ALL {
        assert_eq!(SchemaTarget::from_name(target.name()), Some(target));
    }
    assert_eq!(SchemaTarget::from_name("modules"), None);
}

#[test]
fn settings_schema_has_both_sections() {
    let schema = SchemaTarget::Settings.schema().unwrap();
    let names: Vec<String> = extract_property_info(&schema)
        .into_iter()
        .map(|property| property.name)
        .collect();

    assert!(names.contains(&"general".to_string()));
    assert!(names.contains(&"output".to_string()));
}

#[test]
fn document_schema_lists_blade_arrays() {
    let json = SchemaTarget::Document.json().unwrap();

    assert!(json.contains("blade_arrays"));
    assert!(json.contains("BladeConfig"));
}

#[test]
fn nullable_type_is_joined() {
    let schema = json!({
        "properties": {
            "default_output": { "type": ["string", "null"] }
        }
    });

    let properties = extract_property_info(&schema);

    assert_eq!(properties[0].type_name, "string | null");
    assert_eq!(properties[0].description, "No description provided");
    assert_eq!(properties[0].default_value, "-");
}

#[test]
fn empty_property_list_renders_nothing() {
    assert_eq!(generate_property_table("General", "[general]", &[]), "");
}

#[test]
fn page_splits_referenced_sections() {
    let schema = json!({
        "properties": {
            "general": { "$ref": "#/$defs/GeneralSettings" },
            "name": { "type": "string", "description": "Name" }
        },
        "$defs": {
            "GeneralSettings": {
                "properties": {
                    "log_level": { "$ref": "#/$defs/LogLevel", "description": "Level" }
                }
            }
        }
    });

    let page = generate_page("Settings", &schema);

    assert!(page.starts_with("# Settings\n"));
    assert!(page.contains("## general\n**Path:** `[general]`"));
    assert!(page.contains("| `log_level` | `LogLevel` | Level | `-` |"));
    assert!(page.contains("| `name` | `string` | Name | `-` |"));
}
