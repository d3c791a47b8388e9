use tracing::{debug, warn};

use crate::{
    Result,
    model::{ArrayValue, BladeArray, PresetConfig},
};

use super::{
    Decoder, Scan, Seek,
    lexer::{BLOCK_CLOSE, BLOCK_OPEN, TokenKind},
};

/// Styles that are a plain reference rather than a `...()` expression.
const BARE_STYLES: [&str; 2] = ["&style_charging", "&style_pov"];

impl Decoder<'_> {
    /// Reads `CONFIG_PRESETS`: any number of preset arrays and blade tables.
    pub(super) fn read_presets(&mut self) -> Result<Scan> {
        loop {
            let Some(token) = self.lexer.next_significant() else {
                return Ok(Scan::Eof);
            };

            let scan = match token.kind() {
                TokenKind::SectionEnd => return Ok(Scan::SectionEnd),
                _ => match token.text {
                    "Preset" => self.read_preset_array(),
                    "BladeConfig" => self.read_blade_table()?,
                    _ => Scan::More,
                },
            };
            if scan != Scan::More {
                return Ok(scan);
            }
        }
    }

    /// Reads `Preset name[] = { {...}, ... };`.
    fn read_preset_array(&mut self) -> Scan {
        let Some(name_token) = self.lexer.next_significant() else {
            return Scan::Eof;
        };
        let name = name_token.text.split('[').next().unwrap_or_default().to_string();

        let mut presets = Vec::new();
        let scan = match self.seek_open() {
            Seek::Open(_) => loop {
                match self.read_preset_block() {
                    Ok(Some((preset, ends_array))) => {
                        presets.push(preset);
                        if ends_array {
                            break Scan::More;
                        }
                    }
                    Ok(None) => break Scan::More,
                    Err(scan) => break scan,
                }
            },
            Seek::ArrayEnd => Scan::More,
            Seek::Stopped(scan) => scan,
        };

        debug!(array = %name, presets = presets.len(), "Read preset array");
        match self.document.array_mut(&name) {
            Some(array) => array.presets = presets,
            None => {
                let mut array = BladeArray::new(&name, ArrayValue::default());
                array.presets = presets;
                self.document.blade_arrays.push(array);
            }
        }
        scan
    }

    /// Reads one `{ ... }` preset and whether its closing token also ended
    /// the array. `Ok(None)` at the end of the array, `Err` when the section
    /// or input ends first.
    fn read_preset_block(&mut self) -> std::result::Result<Option<(PresetConfig, bool)>, Scan> {
        let open = match self.seek_open() {
            Seek::Open(open) => open,
            Seek::ArrayEnd => return Ok(None),
            Seek::Stopped(scan) => return Err(scan),
        };

        let mut last = open;
        while !last.text.contains('}') {
            let Some(token) = self.lexer.next_token() else {
                return Err(Scan::Eof);
            };
            if token.kind() == TokenKind::SectionEnd {
                return Err(Scan::SectionEnd);
            }
            last = token;
        }

        let close = last.start + last.text.find('}').unwrap_or_default();
        let body_start = (open.start + 1).min(close);
        let body = self.lexer.slice(body_start, close);
        Ok(Some((parse_preset(body, self.num_blades), last.closes_array())))
    }
}

/// Parses the inside of one preset block.
///
/// `expected` is the logical blade count; when unknown, styles are read until
/// the quoted display name.
pub(crate) fn parse_preset(body: &str, expected: Option<usize>) -> PresetConfig {
    let (directory, rest) = split_field(body);
    let (track, mut rest) = split_field(rest);

    let mut styles = Vec::new();
    let mut slot = 0;
    while expected.is_none_or(|expected| slot < expected) {
        let trimmed = rest.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('"') {
            break;
        }
        if let Some(after) = trimmed.strip_prefix(',') {
            rest = after;
            slot += 1;
            continue;
        }
        match take_style(trimmed) {
            Some((style, after)) => {
                styles.push(style.to_string());
                rest = after;
                slot += 1;
            }
            None => {
                warn!(text = trimmed, "Could not find the end of a style");
                break;
            }
        }
    }

    if expected.is_some_and(|expected| slot < expected) {
        warn!(
            expected = expected.unwrap_or_default(),
            found = slot,
            directory = %directory,
            "Preset has fewer style slots than blades"
        );
    }

    PresetConfig {
        directory,
        track,
        styles,
        name: quoted_name(rest),
    }
}

fn split_field(text: &str) -> (String, &str) {
    let (field, rest) = text.split_once(',').unwrap_or((text, ""));
    (field.trim().trim_matches('"').to_string(), rest)
}

/// Splits one style (with any leading block comments) off `text`, returning
/// the style and the text after its separating comma.
fn take_style(text: &str) -> Option<(&str, &str)> {
    let mut body_start = 0;
    while text[body_start..].trim_start().starts_with(BLOCK_OPEN) {
        let open = body_start + text[body_start..].find(BLOCK_OPEN)?;
        let close = open + text[open..].find(BLOCK_CLOSE)?;
        body_start = close + BLOCK_CLOSE.len();
    }

    let body = &text[body_start..];
    let lead = body.len() - body.trim_start().len();
    let body_trimmed = body.trim_start();

    let body_end = match BARE_STYLES
        .iter()
        .find(|bare| body_trimmed.starts_with(**bare))
    {
        Some(bare) => bare.len(),
        None => invocation_end(body_trimmed)?,
    };

    let end = body_start + lead + body_end;
    let after = text[end..].trim_start();
    let after = after.strip_prefix(',').unwrap_or(after);
    Some((text[..end].trim(), after))
}

/// End of the first `()` that is followed by a comma.
fn invocation_end(text: &str) -> Option<usize> {
    text.match_indices("()")
        .map(|(at, call)| at + call.len())
        .find(|&end| text[end..].trim_start().starts_with(','))
}

/// Last quoted string in `text`, which is the preset's display name.
fn quoted_name(text: &str) -> String {
    let quoted = text
        .rfind('"')
        .and_then(|end| text[..end].rfind('"').map(|start| &text[start + 1..end]));
    match quoted {
        Some(name) => name.to_string(),
        None => text.trim().trim_matches(',').trim().to_string(),
    }
}
