//! Whitespace-delimited tokenizer over an immutable input.
//!
//! Tokens borrow from the source and remember their byte span so callers can
//! slice the raw text between two tokens when whitespace has to be kept.

/// Opens a line comment.
pub(crate) const LINE_COMMENT: &str = "//";
/// Opens a block comment.
pub(crate) const BLOCK_OPEN: &str = "/*";
/// Closes a block comment.
pub(crate) const BLOCK_CLOSE: &str = "*/";
/// Pragma marker understood inside `CONFIG_TOP`.
pub(crate) const PRAGMA: &str = "//PROFFIECONFIG";
/// Starts a section.
pub(crate) const SECTION_BEGIN: &str = "#ifdef";
/// Ends a section.
pub(crate) const SECTION_END: &str = "#endif";

/// What a token means to the section readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    /// `//` on its own: the rest of the line is ignored.
    LineComment,
    /// Contains `/*`: tokens are ignored up to one containing `*/`.
    BlockComment,
    /// `//PROFFIECONFIG`
    Pragma,
    /// `#ifdef`
    SectionBegin,
    /// `#endif`
    SectionEnd,
    /// Anything else.
    Word,
}

/// A token and where it sits in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

impl<'a> Token<'a> {
    pub fn kind(&self) -> TokenKind {
        match self.text {
            PRAGMA => TokenKind::Pragma,
            SECTION_BEGIN => TokenKind::SectionBegin,
            SECTION_END => TokenKind::SectionEnd,
            text if text.starts_with(LINE_COMMENT) => TokenKind::LineComment,
            text if text.contains(BLOCK_OPEN) => TokenKind::BlockComment,
            _ => TokenKind::Word,
        }
    }

    /// `};` ends a preset array or the blade table.
    pub fn closes_array(&self) -> bool {
        self.text.contains("};")
    }
}

/// Forward-only cursor over the configuration text.
pub(crate) struct Lexer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// 1-based line number of the cursor, used in error messages.
    pub fn line(&self) -> usize {
        self.src[..self.pos].matches('\n').count() + 1
    }

    pub fn next_token(&mut self) -> Option<Token<'a>> {
        let rest = &self.src[self.pos..];
        let skipped = rest.len() - rest.trim_start().len();
        let start = self.pos + skipped;
        if start >= self.src.len() {
            self.pos = self.src.len();
            return None;
        }

        let len = self.src[start..]
            .find(char::is_whitespace)
            .unwrap_or(self.src.len() - start);
        let end = start + len;
        self.pos = end;

        Some(Token {
            text: &self.src[start..end],
            start,
            end,
        })
    }

    /// Consumes and returns the remainder of the current line.
    pub fn rest_of_line(&mut self) -> &'a str {
        let rest = &self.src[self.pos..];
        let len = rest.find('\n').unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    /// Skips a block comment whose opening token was `open`.
    pub fn skip_block_comment(&mut self, open: Token<'a>) {
        if open.text.contains(BLOCK_CLOSE) {
            return;
        }
        while let Some(token) = self.next_token() {
            if token.text.contains(BLOCK_CLOSE) {
                return;
            }
        }
    }

    /// Returns the next token that is not part of a comment.
    pub fn next_significant(&mut self) -> Option<Token<'a>> {
        loop {
            let token = self.next_token()?;
            match token.kind() {
                TokenKind::LineComment => {
                    self.rest_of_line();
                }
                TokenKind::BlockComment => self.skip_block_comment(token),
                _ => return Some(token),
            }
        }
    }

    /// Raw source between two byte offsets.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.src[start..end]
    }
}
