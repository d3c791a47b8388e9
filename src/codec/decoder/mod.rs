//! Reads a ProffieOS configuration header back into a [`ConfigDocument`].
//!
//! The format is C preprocessor input, not a data format, so the readers
//! recognise the shapes the encoder (and hand-written configs) produce and
//! skip everything else. Running out of input inside a section is not an
//! error; a number that does not parse is.

mod blades;
pub(crate) mod lexer;
mod presets;
mod top;

use std::str::FromStr;

use tracing::{debug, info, instrument, warn};

use crate::{Result, core::ProffieError, model::ConfigDocument};

use super::{Section, styles::StyleStore};
use lexer::{Lexer, Token, TokenKind};

/// Decodes a configuration header.
///
/// # Errors
///
/// Returns [`ProffieError::Parse`] when a count, pin index or other numeric
/// field holds something that is not a number. No partial document is
/// returned in that case.
#[instrument(skip_all, fields(bytes = text.len()))]
pub fn decode(text: &str) -> Result<ConfigDocument> {
    let mut decoder = Decoder::new(text);
    decoder.run()?;

    let document = decoder.document;
    info!(
        arrays = document.blade_arrays.len(),
        blades = document.num_blades(),
        "Decoded configuration"
    );
    Ok(document)
}

/// Where a reader stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    /// More of the current section follows.
    More,
    /// `#endif` was consumed.
    SectionEnd,
    /// Input ran out.
    Eof,
}

/// Result of looking for the next `{`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Seek<'a> {
    /// Found an opening brace.
    Open(Token<'a>),
    /// Hit `};` first.
    ArrayEnd,
    /// Hit `#endif` or the end of input first.
    Stopped(Scan),
}

pub(crate) struct Decoder<'a> {
    lexer: Lexer<'a>,
    document: ConfigDocument,
    /// `NUM_BLADES` from the top section; `None` until seen.
    num_blades: Option<usize>,
    styles: StyleStore,
}

impl<'a> Decoder<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lexer: Lexer::new(text),
            document: ConfigDocument::default(),
            num_blades: None,
            styles: StyleStore::new(),
        }
    }

    fn run(&mut self) -> Result<()> {
        while let Some(token) = self.lexer.next_significant() {
            if token.kind() != TokenKind::SectionBegin {
                continue;
            }
            let Some(name) = self.lexer.next_token() else {
                break;
            };

            let scan = match Section::from_marker(name.text) {
                Some(section) => {
                    debug!(section = section.marker(), line = self.lexer.line(), "Reading section");
                    match section {
                        Section::Top => self.read_top()?,
                        Section::Prop => self.read_prop(),
                        Section::Presets => self.read_presets()?,
                        Section::Styles => self.read_styles(),
                        Section::Buttons => self.read_buttons(),
                    }
                }
                None => {
                    debug!(section = name.text, "Ignoring unknown section");
                    Scan::More
                }
            };

            if scan == Scan::Eof {
                warn!("Input ended inside a section");
                break;
            }
        }
        Ok(())
    }

    fn read_prop(&mut self) -> Scan {
        loop {
            let Some(token) = self.lexer.next_significant() else {
                return Scan::Eof;
            };
            if token.kind() == TokenKind::SectionEnd {
                return Scan::SectionEnd;
            }
            for prop in crate::model::Prop::MATCH_ORDER {
                if prop.tag().is_some_and(|tag| token.text.contains(tag)) {
                    self.document.prop = prop;
                }
            }
        }
    }

    fn read_buttons(&mut self) -> Scan {
        let mut buttons = 0u8;
        let scan = loop {
            let Some(token) = self.lexer.next_significant() else {
                break Scan::Eof;
            };
            match token.kind() {
                TokenKind::SectionEnd => break Scan::SectionEnd,
                _ if token.text == "Button" => buttons = buttons.saturating_add(1),
                _ => {}
            }
        };

        if buttons > 0 {
            self.document.num_buttons = buttons.min(crate::model::MAX_BUTTONS);
        }
        scan
    }

    fn read_styles(&mut self) -> Scan {
        let scan = loop {
            let Some(token) = self.lexer.next_significant() else {
                break Scan::Eof;
            };
            match token.kind() {
                TokenKind::SectionEnd => break Scan::SectionEnd,
                _ if token.text == "using" => {
                    if let Some(scan) = self.read_style_binding() {
                        break scan;
                    }
                }
                _ => {}
            }
        };

        debug!(bindings = self.styles.len(), "Applying named styles");
        self.styles.apply(&mut self.document.blade_arrays);
        scan
    }

    /// Reads `name = expression;` after `using`.
    fn read_style_binding(&mut self) -> Option<Scan> {
        let Some(name) = self.lexer.next_significant() else {
            return Some(Scan::Eof);
        };
        let Some(first) = self.lexer.next_significant() else {
            return Some(Scan::Eof);
        };
        let first = match first.text {
            "=" => match self.lexer.next_token() {
                Some(token) => token,
                None => return Some(Scan::Eof),
            },
            _ => first,
        };

        let mut last = first;
        while !last.text.contains(';') {
            match self.lexer.next_token() {
                Some(token) => last = token,
                None => return Some(Scan::Eof),
            }
        }

        let raw = self.lexer.slice(first.start, last.end);
        let raw = raw.rfind(';').map_or(raw, |at| &raw[..at]);
        let expression: String = raw.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        let expression = expression.trim();
        let expression = expression
            .strip_prefix("StylePtr<")
            .and_then(|inner| inner.strip_suffix(">()"))
            .unwrap_or(expression);

        self.styles.bind(name.text, expression);
        None
    }

    /// Advances to the next token starting with `{`.
    fn seek_open(&mut self) -> Seek<'a> {
        loop {
            let Some(token) = self.lexer.next_significant() else {
                return Seek::Stopped(Scan::Eof);
            };
            if token.kind() == TokenKind::SectionEnd {
                return Seek::Stopped(Scan::SectionEnd);
            }
            if token.closes_array() {
                return Seek::ArrayEnd;
            }
            if token.text.starts_with('{') {
                return Seek::Open(token);
            }
        }
    }

    fn number<T: FromStr>(&self, text: &str, what: &str) -> Result<T> {
        text.trim().parse().map_err(|_| {
            ProffieError::parse(self.lexer.line(), format!("expected {what}, found '{text}'"))
        })
    }
}

#[cfg(test)]
mod tests;
