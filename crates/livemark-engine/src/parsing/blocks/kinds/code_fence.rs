use crate::parsing::{
    ruler::{BlockRule, Chain},
    state::BlockState,
    token::{Nesting, TokenKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'`' => Some(FenceKind::Backticks),
            b'~' => Some(FenceKind::Tildes),
            _ => None,
        }
    }

    pub fn byte(self) -> u8 {
        match self {
            FenceKind::Backticks => b'`',
            FenceKind::Tildes => b'~',
        }
    }
}

/// Fenced code block: ```` ``` ```` or `~~~`, at least three long.
///
/// The closing fence must use the same character, be at least as long as
/// the opener and carry nothing but trailing whitespace. An unterminated
/// fence runs to the end of the range.
pub struct CodeFence;

impl CodeFence {
    pub const MIN_LEN: usize = 3;

    /// Recognizes an opening fence on `line`: (kind, fence length, info string).
    pub fn open(state: &BlockState<'_>, line: usize) -> Option<(FenceKind, usize, String)> {
        if state.is_code_indented(line) {
            return None;
        }
        let pos = state.content_start(line);
        let max = state.line_end[line];
        if pos + Self::MIN_LEN > max {
            return None;
        }
        let kind = FenceKind::from_byte(state.byte_at(pos)?)?;
        let after = state.skip_chars(pos, max, kind.byte());
        let len = after - pos;
        if len < Self::MIN_LEN {
            return None;
        }
        let info = &state.src[after..max];
        if kind == FenceKind::Backticks && info.contains('`') {
            return None;
        }
        Some((kind, len, info.trim().to_string()))
    }

    /// True when `line` closes a fence of `kind` opened with `len` characters.
    pub fn closes(state: &BlockState<'_>, line: usize, kind: FenceKind, len: usize) -> bool {
        if state.is_code_indented(line) {
            return false;
        }
        let pos = state.content_start(line);
        let max = state.line_end[line];
        if state.byte_at(pos) != Some(kind.byte()) || pos >= max {
            return false;
        }
        let after = state.skip_chars(pos, max, kind.byte());
        after - pos >= len && state.skip_spaces(after) >= max
    }
}

impl BlockRule for CodeFence {
    fn name(&self) -> &'static str {
        "fence"
    }

    fn terminates(&self) -> &'static [Chain] {
        &[Chain::Paragraph, Chain::List]
    }

    fn run(&self, state: &mut BlockState<'_>, start_line: usize, end_line: usize, silent: bool)
    -> bool {
        let Some((kind, len, info)) = Self::open(state, start_line) else {
            return false;
        };
        if silent {
            return true;
        }

        let mut next_line = start_line + 1;
        let mut have_end = false;
        while next_line < end_line {
            // A non-blank dedented line ends the enclosing container, and the fence with it.
            if !state.is_empty(next_line) && state.indent_shift[next_line] < state.block_indent {
                break;
            }
            if Self::closes(state, next_line, kind, len) {
                have_end = true;
                break;
            }
            next_line += 1;
        }

        let indent = state.indent_shift[start_line];
        let content = state.get_lines(start_line + 1, next_line, indent, true);
        let end = next_line + usize::from(have_end);
        state.line = end;

        let token = state.push(TokenKind::Fence, "code", Nesting::Leaf);
        token.info = info;
        token.content = content;
        token.markup = String::from(kind.byte() as char).repeat(len);
        token.line_map = Some((start_line, end));
        true
    }
}
