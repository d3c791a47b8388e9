use serde_json::Value;

use super::{PropertyInfo, extract_property_info, properties::resolve_ref};

const TABLE_HEADER: &str =
    "| Property | Type | Description | Default |\n|----------|------|-------------|---------|";

/// Generates a markdown table documenting properties.
pub fn generate_property_table(
    section_title: &str,
    path: &str,
    properties: &[PropertyInfo],
) -> String {
    if properties.is_empty() {
        return String::new();
    }

    let property_rows = properties
        .iter()
        .map(|prop| {
            format!(
                "| `{}` | `{}` | {} | `{}` |",
                prop.name, prop.type_name, prop.description, prop.default_value
            )
        })
        .collect::<Vec<String>>()
        .join("\n");

    format!("## {section_title}\n**Path:** `{path}`\n\n{TABLE_HEADER}\n{property_rows}\n")
}

/// Generates a markdown page for a schema.
///
/// Top-level properties that reference an object definition get their own
/// section; everything else goes into one table at the top.
pub fn generate_page(title: &str, schema: &Value) -> String {
    let mut content = format!("# {title}\n\n");
    let mut top_level = Vec::new();
    let mut sections = Vec::new();

    for property in extract_property_info(schema) {
        let nested = schema
            .get("properties")
            .and_then(|props| props.get(&property.name))
            .and_then(|raw| resolve_ref(schema, raw))
            .map(extract_property_info)
            .filter(|nested| !nested.is_empty());

        match nested {
            Some(nested) => sections.push((property, nested)),
            None => top_level.push(property),
        }
    }

    if !top_level.is_empty() {
        content.push_str(&generate_property_table("Top level", "", &top_level));
        content.push('\n');
    }
    for (property, nested) in sections {
        let path = format!("[{}]", property.name);
        content.push_str(&generate_property_table(&property.name, &path, &nested));
        content.push('\n');
    }

    content
}
