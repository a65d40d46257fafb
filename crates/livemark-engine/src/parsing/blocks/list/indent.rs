use crate::parsing::state::BlockState;

/// Whitespace after a marker beyond this belongs to an indented code block
/// inside the item, not to the item's content indent.
pub const MAX_INDENT_AFTER_MARKER: usize = 4;

/// Indentation facts for one list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemIndent {
    /// Columns after the marker owned by the marker, in `1..=4`.
    pub indent_after_marker: usize,
    /// Offset of the first non-whitespace byte after the marker (or the line end).
    pub content_start: usize,
    /// Indent a continuation line needs to stay inside the item.
    pub indent: usize,
}

pub fn item_indent(state: &BlockState<'_>, line: usize, pos_after_marker: usize) -> ItemIndent {
    let content_start = state.skip_spaces(pos_after_marker);
    let mut indent_after_marker = if content_start >= state.line_end[line] {
        // "-   \n  foo": nothing after the marker.
        1
    } else {
        content_start - pos_after_marker
    };
    if indent_after_marker > MAX_INDENT_AFTER_MARKER {
        indent_after_marker = 1;
    }

    ItemIndent {
        indent_after_marker,
        content_start,
        indent: (pos_after_marker - state.line_start[line]) + indent_after_marker,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{options::ParseOptions, tokenizer::BlockTokenizer};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use xi_rope::Rope;

    fn indent_of(text: &str, pos_after_marker: usize) -> ItemIndent {
        let tokenizer = BlockTokenizer::new();
        let options = ParseOptions::default();
        let state = BlockState::new(&Rope::from(text), &tokenizer, &options);
        item_indent(&state, 0, pos_after_marker)
    }

    #[rstest]
    #[case("- a", 1, 1, 2)]
    #[case("-    a", 1, 4, 5)]
    #[case("-     a", 1, 1, 2)]
    #[case("-", 1, 1, 2)]
    #[case("-   ", 1, 1, 2)]
    #[case("  10. a", 5, 1, 6)]
    fn computes_item_indent(
        #[case] text: &str,
        #[case] pos_after_marker: usize,
        #[case] after: usize,
        #[case] indent: usize,
    ) {
        let got = indent_of(text, pos_after_marker);
        assert_eq!(got.indent_after_marker, after);
        assert_eq!(got.indent, indent);
    }

    #[test]
    fn clamped_indent_keeps_real_content_start() {
        let got = indent_of("-      code", 1);
        assert_eq!(got.indent_after_marker, 1);
        assert_eq!(got.content_start, 7);
    }
}
