//! JSON Schema and markdown reference for the settings file and the
//! document TOML format.

mod markdown;
mod properties;

#[cfg(test)]
mod tests;

pub use markdown::{generate_page, generate_property_table};
pub use properties::{PropertyInfo, extract_property_info};

use serde_json::Value;

use crate::{Result, core::ProffieError, model::ConfigDocument, settings::Settings};

/// A TOML format with a published schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaTarget {
    /// `settings.toml`
    Settings,
    /// Documents read by `config build` and written by `config dump`.
    Document,
}

impl SchemaTarget {
    /// Every target.
    pub const ALL: [SchemaTarget; 2] = [SchemaTarget::Settings, SchemaTarget::Document];

    /// Name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            SchemaTarget::Settings => "settings",
            SchemaTarget::Document => "document",
        }
    }

    /// Target for a command-line name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|target| target.name() == name)
    }

    /// Title of the markdown page.
    pub fn title(self) -> &'static str {
        match self {
            SchemaTarget::Settings => "Settings",
            SchemaTarget::Document => "Config document",
        }
    }

    /// JSON Schema as a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ProffieError::Serialization`] if the schema cannot be converted.
    pub fn schema(self) -> Result<Value> {
        let schema = match self {
            SchemaTarget::Settings => schemars::schema_for!(Settings),
            SchemaTarget::Document => schemars::schema_for!(ConfigDocument),
        };
        serde_json::to_value(schema).map_err(|e| ProffieError::Serialization(e.to_string()))
    }

    /// Pretty-printed JSON Schema.
    ///
    /// # Errors
    ///
    /// Returns [`ProffieError::Serialization`] if the schema cannot be converted.
    pub fn json(self) -> Result<String> {
        serde_json::to_string_pretty(&self.schema()?)
            .map_err(|e| ProffieError::Serialization(e.to_string()))
    }

    /// Markdown reference page.
    ///
    /// # Errors
    ///
    /// Returns [`ProffieError::Serialization`] if the schema cannot be converted.
    pub fn markdown(self) -> Result<String> {
        Ok(generate_page(self.title(), &self.schema()?))
    }
}
