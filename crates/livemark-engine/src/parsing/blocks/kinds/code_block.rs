use crate::parsing::{
    ruler::BlockRule,
    state::BlockState,
    token::{Nesting, TokenKind},
};

/// Indented code block: lines indented four or more past `block_indent`.
///
/// Blank lines inside the block are kept; trailing blank lines are not.
pub struct CodeBlock;

impl CodeBlock {
    pub const INDENT: usize = 4;
}

impl BlockRule for CodeBlock {
    fn name(&self) -> &'static str {
        "code"
    }

    fn run(&self, state: &mut BlockState<'_>, start_line: usize, end_line: usize, silent: bool)
    -> bool {
        if !state.is_code_indented(start_line) {
            return false;
        }
        if silent {
            return true;
        }

        let mut next_line = start_line + 1;
        let mut last = next_line;
        while next_line < end_line {
            if state.is_empty(next_line) {
                next_line += 1;
                continue;
            }
            if state.is_code_indented(next_line) {
                next_line += 1;
                last = next_line;
                continue;
            }
            break;
        }

        state.line = last;
        let content = state.get_lines(start_line, last, Self::INDENT + state.block_indent, true);
        let token = state.push(TokenKind::CodeBlock, "code", Nesting::Leaf);
        token.content = content;
        token.line_map = Some((start_line, last));
        true
    }
}
