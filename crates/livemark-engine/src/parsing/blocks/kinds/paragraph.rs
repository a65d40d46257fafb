use crate::parsing::{
    ruler::{BlockRule, Chain},
    state::{BlockState, ParentType},
    token::{Nesting, TokenKind},
    tokenizer::is_terminated,
};

/// Paragraph rule (marker struct).
///
/// Paragraphs have no delimiters: they are the fallback leaf block and
/// always match. A paragraph runs until a blank line, the end of the range,
/// or a line some [`Chain::Paragraph`] terminator claims. Other lines,
/// including under-indented ones, continue it lazily.
pub struct Paragraph;

impl BlockRule for Paragraph {
    fn name(&self) -> &'static str {
        "paragraph"
    }

    fn run(&self, state: &mut BlockState<'_>, start_line: usize, end_line: usize, silent: bool)
    -> bool {
        if silent {
            return true;
        }

        let old_parent = state.parent_type;
        state.parent_type = ParentType::Paragraph;

        let mut next_line = start_line + 1;
        while next_line < end_line && !state.is_empty(next_line) {
            // Would be an indented code block elsewhere; here it's a continuation.
            if state.is_code_indented(next_line) {
                next_line += 1;
                continue;
            }
            if is_terminated(state, Chain::Paragraph, next_line, end_line) {
                break;
            }
            next_line += 1;
        }

        let content = state
            .get_lines(start_line, next_line, state.block_indent, false)
            .trim()
            .to_string();
        state.line = next_line;

        state.push(TokenKind::ParagraphOpen, "p", Nesting::Open).line_map =
            Some((start_line, next_line));
        let inline = state.push(TokenKind::Inline, "", Nesting::Leaf);
        inline.content = content;
        inline.line_map = Some((start_line, next_line));
        state.push(TokenKind::ParagraphClose, "p", Nesting::Close);

        state.parent_type = old_parent;
        true
    }
}
