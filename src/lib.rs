//! proffie-config - Two-way codec for ProffieOS saber configuration headers.
//!
//! A config header is a C++ file with `#ifdef CONFIG_TOP`, `CONFIG_PROP`,
//! `CONFIG_PRESETS` and `CONFIG_BUTTONS` sections. This crate decodes such a
//! file into a [`model::ConfigDocument`], checks it, and encodes it back.
//!
//! # Quick Start
//!
//! ```rust
//! use proffie_config::codec::{decode, encode};
//!
//! let text = "#ifdef CONFIG_TOP\n#include \"proffieboard_v2_config.h\"\n#endif\n";
//! let document = decode(text)?;
//! println!("Board: {}", document.board);
//!
//! let header = encode(&document)?;
//! assert!(header.contains("CONFIG_PRESETS"));
//! # Ok::<(), proffie_config::ProffieError>(())
//! ```

/// Command-line interface.
pub mod cli;

/// Decoding, checking and encoding of config headers.
pub mod codec;

/// Core error types and result aliases.
pub mod core;

/// Config document model.
pub mod model;

/// JSON Schema and reference docs for the TOML formats.
pub mod schema;

/// Tool settings read from `settings.toml`.
pub mod settings;

/// Tracing subscriber setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use core::{ProffieError, Result};
