//! Two-way codec between [`ConfigDocument`] and the ProffieOS config header.
//!
//! [`encode`] refuses documents that fail [`check`]. [`decode`] is best-effort
//! on structure but strict on numbers, and never hands back a partial
//! document.

pub mod decoder;
pub mod encoder;
pub mod precheck;
pub mod styles;

use std::{fs, path::Path};

use tracing::{instrument, warn};

use crate::{Result, core::ProffieError, model::ConfigDocument};

pub use decoder::decode;
pub use encoder::{EncodeOptions, encode, encode_with};
pub use precheck::{Violation, check};
pub use styles::StyleStore;

/// A `#ifdef` block of the config header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Board, features and defines.
    Top,
    /// Prop include.
    Prop,
    /// Preset arrays and the blade table.
    Presets,
    /// Button declarations.
    Buttons,
    /// Named style bindings. Read, never written.
    Styles,
}

impl Section {
    /// Marker following `#ifdef`.
    pub fn marker(self) -> &'static str {
        match self {
            Section::Top => "CONFIG_TOP",
            Section::Prop => "CONFIG_PROP",
            Section::Presets => "CONFIG_PRESETS",
            Section::Buttons => "CONFIG_BUTTONS",
            Section::Styles => "CONFIG_STYLES",
        }
    }

    /// Section for a marker, if it is one this codec reads.
    pub fn from_marker(marker: &str) -> Option<Self> {
        [
            Section::Top,
            Section::Prop,
            Section::Presets,
            Section::Buttons,
            Section::Styles,
        ]
        .into_iter()
        .find(|section| section.marker() == marker)
    }
}

/// Encodes `document` and writes it to `path`.
///
/// # Errors
///
/// Returns [`ProffieError::Precondition`] if the document fails its checks
/// (nothing is written), or [`ProffieError::Io`] if the file cannot be written.
#[instrument(skip(document, options), fields(path = %path.display()))]
pub fn save(path: &Path, document: &ConfigDocument, options: &EncodeOptions) -> Result<()> {
    let text = encode_with(document, options)?;
    fs::write(path, text).map_err(|e| ProffieError::io(e, path))
}

/// Reads and decodes the config header at `path`.
///
/// # Errors
///
/// Returns [`ProffieError::Io`] if the file cannot be read, or
/// [`ProffieError::Parse`] if it holds a malformed number.
#[instrument(fields(path = %path.display()))]
pub fn load(path: &Path) -> Result<ConfigDocument> {
    let text = fs::read_to_string(path).map_err(|e| ProffieError::io(e, path))?;
    decode(&text)
}

impl ConfigDocument {
    /// Replaces this document with the one decoded from `text`.
    ///
    /// On failure the document is reset to its default state, so no half-read
    /// configuration survives.
    ///
    /// # Errors
    ///
    /// Returns the decode error.
    pub fn reload(&mut self, text: &str) -> Result<()> {
        match decode(text) {
            Ok(document) => {
                *self = document;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Decode failed, resetting document");
                *self = ConfigDocument::default();
                Err(e)
            }
        }
    }
}
