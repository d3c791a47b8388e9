//! Named style expressions and their substitution into presets.

use tracing::debug;

use crate::model::{BladeArray, PresetConfig};

use super::decoder::lexer::{BLOCK_CLOSE, BLOCK_OPEN};

/// Style names bound to their full expressions.
///
/// Bindings are collected while a `CONFIG_STYLES` section is decoded and then
/// written into presets that refer to them by name.
#[derive(Debug, Clone, Default)]
pub struct StyleStore {
    bindings: Vec<(String, String)>,
}

impl StyleStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `expression`, replacing an earlier binding of the same name.
    pub fn bind(&mut self, name: &str, expression: &str) {
        if name.is_empty() {
            return;
        }
        match self.bindings.iter_mut().find(|(bound, _)| bound == name) {
            Some((_, existing)) => *existing = expression.to_string(),
            None => self
                .bindings
                .push((name.to_string(), expression.to_string())),
        }
    }

    /// Expression bound to `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(bound, _)| bound == name)
            .map(|(_, expression)| expression.as_str())
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether nothing has been bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Substitutes every binding into the presets of every array.
    pub fn apply(&self, arrays: &mut [BladeArray]) {
        for array in arrays {
            self.apply_to_presets(&mut array.presets);
        }
    }

    /// Substitutes every binding into the given presets.
    pub fn apply_to_presets(&self, presets: &mut [PresetConfig]) {
        for preset in presets {
            for style in &mut preset.styles {
                for (name, expression) in &self.bindings {
                    let replaced = substitute(style, name, expression);
                    if replaced > 0 {
                        debug!(style = %name, replaced, preset = %preset.name, "Substituted style");
                    }
                }
            }
        }
    }
}

/// Replaces occurrences of `name` in `style` with `expression`, leaving those
/// that sit inside an unterminated block comment. Returns the replacement count.
///
/// Comment detection only compares the nearest `/*` and `*/` before the match.
pub fn substitute(style: &mut String, name: &str, expression: &str) -> usize {
    if name.is_empty() {
        return 0;
    }

    let mut replaced = 0;
    let mut from = 0;
    while let Some(offset) = style[from..].find(name) {
        let at = from + offset;
        if inside_comment(&style[..at]) {
            from = at + name.len();
            continue;
        }
        style.replace_range(at..at + name.len(), expression);
        from = at + expression.len();
        replaced += 1;
    }
    replaced
}

fn inside_comment(before: &str) -> bool {
    match (before.rfind(BLOCK_OPEN), before.rfind(BLOCK_CLOSE)) {
        (Some(open), Some(close)) => open > close,
        (Some(_), None) => true,
        (None, _) => false,
    }
}
