use log::debug;

use crate::parsing::{
    ruler::{BlockRule, Chain},
    state::{BlockState, ParentType},
    token::{Nesting, TokenKind},
};

/// Blockquote rule with its owned delimiter constant.
///
/// Every line of the quote must carry the `>` prefix; a blank line or a line
/// without it ends the quote (no lazy continuation). Nested quotes are
/// handled by recursion: each level strips one `>`.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: u8 = b'>';

    /// Offset just past the `>` prefix and one optional following space.
    fn strip_prefix(state: &BlockState<'_>, line: usize) -> Option<usize> {
        let pos = state.content_start(line);
        if pos >= state.line_end[line] || state.byte_at(pos) != Some(Self::PREFIX) {
            return None;
        }
        let pos = pos + 1;
        if state.byte_at(pos) == Some(b' ') && pos < state.line_end[line] {
            return Some(pos + 1);
        }
        Some(pos)
    }
}

impl BlockRule for BlockQuote {
    fn name(&self) -> &'static str {
        "blockquote"
    }

    fn terminates(&self) -> &'static [Chain] {
        &[Chain::Paragraph, Chain::List]
    }

    fn run(&self, state: &mut BlockState<'_>, start_line: usize, end_line: usize, silent: bool)
    -> bool {
        if state.is_code_indented(start_line) || Self::strip_prefix(state, start_line).is_none() {
            return false;
        }
        if state.nesting_exceeded() {
            debug!("blockquote at line {start_line} exceeds max nesting, not opening");
            return false;
        }
        if silent {
            return true;
        }

        // Rebase each quoted line past its prefix; restored below.
        let mut saved = Vec::new();
        let mut next_line = start_line;
        while next_line < end_line && !state.is_empty(next_line) {
            if state.indent_shift[next_line] < state.block_indent {
                break;
            }
            let Some(content) = Self::strip_prefix(state, next_line) else {
                break;
            };
            saved.push((state.line_start[next_line], state.indent_shift[next_line]));
            state.line_start[next_line] = content;
            state.indent_shift[next_line] = state.skip_spaces(content) - content;
            next_line += 1;
        }

        let old_parent = state.parent_type;
        let old_indent = state.block_indent;
        state.parent_type = ParentType::Blockquote;
        state.block_indent = 0;

        let open_idx = state.tokens.len();
        state.push(TokenKind::BlockquoteOpen, "blockquote", Nesting::Open).markup = ">".into();

        let tokenizer = state.tokenizer();
        tokenizer.tokenize(state, start_line, next_line, false);

        state.push(TokenKind::BlockquoteClose, "blockquote", Nesting::Close).markup = ">".into();
        state.tokens[open_idx].line_map = Some((start_line, next_line));

        state.parent_type = old_parent;
        state.block_indent = old_indent;
        for (offset, (start, shift)) in saved.into_iter().enumerate() {
            state.line_start[start_line + offset] = start;
            state.indent_shift[start_line + offset] = shift;
        }

        state.line = next_line;
        true
    }
}
