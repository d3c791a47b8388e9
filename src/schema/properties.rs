//! Property extraction from JSON Schema documents.

use serde_json::{Map, Value};

/// One property of a JSON Schema object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyInfo {
    /// The name of the property as defined in the schema.
    pub name: String,
    /// The JSON Schema type, a `|`-joined list for nullable fields, or the
    /// referenced definition name.
    pub type_name: String,
    /// Human-readable description taken from the doc comment.
    pub description: String,
    /// String representation of the default value, or "-" if not specified.
    pub default_value: String,
}

/// Extracts property information from a JSON Schema object.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use proffie_config::schema::extract_property_info;
///
/// let schema = json!({
///     "properties": {
///         "write_header": {
///             "type": "boolean",
///             "description": "Emit the generated-by comment",
///             "default": true
///         }
///     }
/// });
///
/// let properties = extract_property_info(&schema);
/// assert_eq!(properties[0].name, "write_header");
/// assert_eq!(properties[0].type_name, "boolean");
/// assert_eq!(properties[0].default_value, "true");
/// ```
pub fn extract_property_info(schema: &Value) -> Vec<PropertyInfo> {
    schema
        .get("properties")
        .and_then(|props| props.as_object())
        .map(build_properties)
        .unwrap_or_default()
}

/// Definition referenced by `property`, if it is a `$ref` into `$defs`.
pub fn resolve_ref<'a>(root: &'a Value, property: &Value) -> Option<&'a Value> {
    let name = ref_name(property)?;
    root.get("$defs")?.get(name)
}

fn build_properties(props_obj: &Map<String, Value>) -> Vec<PropertyInfo> {
    props_obj
        .iter()
        .map(|(name, property)| PropertyInfo {
            name: name.clone(),
            type_name: get_type(property),
            description: get_description(property),
            default_value: get_default_value(property),
        })
        .collect()
}

fn ref_name(property: &Value) -> Option<&str> {
    property
        .get("$ref")
        .and_then(|reference| reference.as_str())
        .and_then(|reference| reference.rsplit('/').next())
}

fn get_type(property: &Value) -> String {
    match property.get("type") {
        Some(Value::String(type_of)) => type_of.clone(),
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(|type_of| type_of.as_str())
            .collect::<Vec<_>>()
            .join(" | "),
        _ => ref_name(property).unwrap_or("unknown").to_string(),
    }
}

fn get_description(property: &Value) -> String {
    property
        .get("description")
        .and_then(|desc| desc.as_str())
        .unwrap_or("No description provided")
        .replace('\n', " ")
}

fn get_default_value(property: &Value) -> String {
    property
        .get("default")
        .map(|def_val| match def_val {
            Value::String(s) => format!("\"{s}\""),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            _ => def_val.to_string(),
        })
        .unwrap_or("-".to_string())
}
