use xi_rope::Rope;

use super::{
    options::ParseOptions,
    rope::lines_with_spans,
    token::{Nesting, Token, TokenKind},
    tokenizer::BlockTokenizer,
};

/// Tag for the construct enclosing the block currently being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentType {
    Root,
    List,
    Blockquote,
    Paragraph,
}

/// Mutable context threaded through every block rule.
///
/// The line table (`line_start`, `line_end`, `indent_shift`) carries one
/// sentinel entry past the last real line, positioned at `src.len()`, so
/// `line_start[end]` is always valid for an exclusive `end`.
///
/// Rules that recurse save the fields they override (`block_indent`,
/// `tight`, `parent_type`, per-line `indent_shift`) and restore them after
/// the nested [`BlockTokenizer::tokenize`] call returns.
pub struct BlockState<'a> {
    pub src: String,
    /// Byte offset of the first byte of each line.
    pub line_start: Vec<usize>,
    /// Byte offset just past each line's content, terminator excluded.
    pub line_end: Vec<usize>,
    /// Leading whitespace consumed on each line, in bytes from `line_start`.
    pub indent_shift: Vec<usize>,
    /// Number of real lines.
    pub line_max: usize,
    /// Minimum indentation a line needs to continue the enclosing block.
    pub block_indent: usize,
    pub tight: bool,
    pub parent_type: ParentType,
    /// Cursor: first line not yet consumed.
    pub line: usize,
    /// Structured vs degraded list output for the list currently open.
    pub render_list: bool,
    /// Current token nesting level.
    pub level: usize,
    pub tokens: Vec<Token>,
    /// Sub-block recursion depth.
    pub depth: usize,
    /// Number of list invocations currently on the stack.
    pub list_depth: usize,
    pub options: &'a ParseOptions,
    tokenizer: &'a BlockTokenizer,
}

impl<'a> BlockState<'a> {
    pub fn new(rope: &Rope, tokenizer: &'a BlockTokenizer, options: &'a ParseOptions) -> Self {
        let src = rope.slice_to_cow(..).into_owned();

        let mut line_start = Vec::new();
        let mut line_end = Vec::new();
        let mut indent_shift = Vec::new();
        for lr in lines_with_spans(rope) {
            line_start.push(lr.start);
            line_end.push(lr.content_end);
            indent_shift.push(leading_whitespace(&src[lr.start..lr.content_end]));
        }
        let line_max = line_start.len();

        line_start.push(src.len());
        line_end.push(src.len());
        indent_shift.push(0);

        Self {
            src,
            line_start,
            line_end,
            indent_shift,
            line_max,
            block_indent: 0,
            tight: false,
            parent_type: ParentType::Root,
            line: 0,
            render_list: true,
            level: 0,
            tokens: Vec::new(),
            depth: 0,
            list_depth: 0,
            options,
            tokenizer,
        }
    }

    /// The host tokenizer driving this parse.
    pub fn tokenizer(&self) -> &'a BlockTokenizer {
        self.tokenizer
    }

    /// Offset of the first non-indent byte of `line`.
    pub fn content_start(&self, line: usize) -> usize {
        self.line_start[line] + self.indent_shift[line]
    }

    /// True for blank lines and for anything past the last real line.
    pub fn is_empty(&self, line: usize) -> bool {
        line >= self.line_max || self.content_start(line) >= self.line_end[line]
    }

    /// True when `line` is indented far enough past `block_indent` to be an
    /// indented code block.
    pub fn is_code_indented(&self, line: usize) -> bool {
        self.indent_shift[line] >= self.block_indent + 4
    }

    pub fn skip_empty_lines(&self, mut from: usize) -> usize {
        while from < self.line_max && self.is_empty(from) {
            from += 1;
        }
        from
    }

    /// Skips spaces and tabs starting at `pos`.
    pub fn skip_spaces(&self, mut pos: usize) -> usize {
        let bytes = self.src.as_bytes();
        while pos < bytes.len() && matches!(bytes[pos], b' ' | b'\t') {
            pos += 1;
        }
        pos
    }

    /// Skips a run of `ch` starting at `pos`, never past `max`.
    pub fn skip_chars(&self, mut pos: usize, max: usize, ch: u8) -> usize {
        let bytes = self.src.as_bytes();
        while pos < max && bytes[pos] == ch {
            pos += 1;
        }
        pos
    }

    /// Byte at `pos`, if any.
    pub fn byte_at(&self, pos: usize) -> Option<u8> {
        self.src.as_bytes().get(pos).copied()
    }

    /// Source text of lines `[begin, end)`, with up to `indent` bytes of
    /// leading indentation removed from each line (never more than the
    /// line's `indent_shift`).
    ///
    /// Lines are joined with their original terminators; the last line keeps
    /// its terminator only when `keep_last_newline` is set.
    pub fn get_lines(
        &self,
        begin: usize,
        end: usize,
        indent: usize,
        keep_last_newline: bool,
    ) -> String {
        let end = end.min(self.line_max);
        let mut out = String::new();
        for line in begin..end {
            let first = self.line_start[line] + self.indent_shift[line].min(indent);
            let last = if line + 1 < end || keep_last_newline {
                self.terminator_end(line)
            } else {
                self.line_end[line]
            };
            if first < last {
                out.push_str(&self.src[first..last]);
            }
        }
        out
    }

    /// Offset just past the terminator of `line`. Independent of
    /// `line_start`, which containers may rebase.
    fn terminator_end(&self, line: usize) -> usize {
        let end = self.line_end[line];
        match self.src.as_bytes().get(end..) {
            Some([b'\r', b'\n', ..]) => end + 2,
            Some([b'\n', ..]) => end + 1,
            _ => end,
        }
    }

    /// Appends a token at the current level and adjusts the level for its
    /// nesting. Returns the new token for further setup.
    pub fn push(&mut self, kind: TokenKind, tag: &'static str, nesting: Nesting) -> &mut Token {
        if nesting == Nesting::Close {
            self.level = self.level.saturating_sub(1);
        }
        let mut token = Token::new(kind, tag, nesting);
        token.level = self.level;
        if nesting == Nesting::Open {
            self.level += 1;
        }
        let idx = self.tokens.len();
        self.tokens.push(token);
        &mut self.tokens[idx]
    }

    /// True when another container level would exceed `max_nesting`.
    pub fn nesting_exceeded(&self) -> bool {
        self.depth >= self.options.max_nesting
    }
}

fn leading_whitespace(line: &str) -> usize {
    line.bytes().take_while(|b| matches!(b, b' ' | b'\t')).count()
}
