//! # Live Preview Session
//!
//! An editable xi-rope buffer that is re-tokenized after every edit. With
//! [`ParseOptions::live_preview`] on, lists typed directly under a line of
//! text come out as passthrough text until a blank line separates them;
//! [`PreviewSession::full_render`] parses the same buffer without that
//! shortcut.

use std::ops::Range;

use xi_rope::{Rope, delta::Builder};

use crate::{
    parsing::{options::ParseOptions, parse_document, token::Token},
    render,
};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PreviewError {
    #[error("Edit range {start}..{end} is outside the buffer (length {len})")]
    OutOfBounds { start: usize, end: usize, len: usize },
    #[error("Offset {0} is not on a character boundary")]
    NotCharBoundary(usize),
    #[error("Buffer is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

pub struct PreviewSession {
    buffer: Rope,
    options: ParseOptions,
    tokens: Vec<Token>,
    /// Incremented on each edit.
    version: u64,
}

impl PreviewSession {
    pub fn new(text: &str, options: ParseOptions) -> Self {
        let buffer = Rope::from(text);
        let tokens = parse_document(&buffer, &options).tokens;
        Self {
            buffer,
            options,
            tokens,
            version: 0,
        }
    }

    pub fn from_bytes(bytes: &[u8], options: ParseOptions) -> Result<Self, PreviewError> {
        let text = std::str::from_utf8(bytes)?;
        Ok(Self::new(text, options))
    }

    pub fn insert(&mut self, at: usize, text: &str) -> Result<(), PreviewError> {
        self.replace(at..at, text)
    }

    pub fn delete(&mut self, range: Range<usize>) -> Result<(), PreviewError> {
        self.replace(range, "")
    }

    /// Replaces `range` with `text` and re-tokenizes the buffer.
    pub fn replace(&mut self, range: Range<usize>, text: &str) -> Result<(), PreviewError> {
        self.check_range(&range)?;

        let mut builder = Builder::new(self.buffer.len());
        builder.replace(range, Rope::from(text));
        self.buffer = builder.build().apply(&self.buffer);

        self.version += 1;
        self.reparse();
        Ok(())
    }

    fn check_range(&self, range: &Range<usize>) -> Result<(), PreviewError> {
        let len = self.buffer.len();
        if range.start > range.end || range.end > len {
            return Err(PreviewError::OutOfBounds {
                start: range.start,
                end: range.end,
                len,
            });
        }
        for offset in [range.start, range.end] {
            if !self.buffer.is_codepoint_boundary(offset) {
                return Err(PreviewError::NotCharBoundary(offset));
            }
        }
        Ok(())
    }

    fn reparse(&mut self) {
        self.tokens = parse_document(&self.buffer, &self.options).tokens;
    }

    pub fn set_live_preview(&mut self, on: bool) {
        if self.options.live_preview != on {
            self.options.live_preview = on;
            self.reparse();
        }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn html(&self) -> String {
        render::to_html(&self.tokens)
    }

    /// Tokens for the current buffer with live preview off.
    pub fn full_render(&self) -> Vec<Token> {
        let options = ParseOptions {
            live_preview: false,
            ..self.options.clone()
        };
        parse_document(&self.buffer, &options).tokens
    }

    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Offset of the character before `offset`, if any.
    pub fn prev_char(&self, offset: usize) -> Option<usize> {
        self.buffer.prev_codepoint_offset(offset)
    }

    /// Offset of the character after `offset`, if any.
    pub fn next_char(&self, offset: usize) -> Option<usize> {
        self.buffer.next_codepoint_offset(offset)
    }
}
