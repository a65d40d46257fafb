use crate::parsing::{
    ruler::{BlockRule, Chain},
    state::BlockState,
    token::{Nesting, TokenKind},
};

/// ATX heading: one to six `#` followed by whitespace or end of line.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;
    const TAGS: [&'static str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

    /// Heading level of `line`, and the offset just past the opening hashes.
    fn open(state: &BlockState<'_>, line: usize) -> Option<(usize, usize)> {
        if state.is_code_indented(line) {
            return None;
        }
        let pos = state.content_start(line);
        let max = state.line_end[line];
        if state.byte_at(pos) != Some(Self::MARKER) || pos >= max {
            return None;
        }
        let after = state.skip_chars(pos, max, Self::MARKER);
        let level = after - pos;
        if level > Self::MAX_LEVEL {
            return None;
        }
        if after < max && !matches!(state.byte_at(after), Some(b' ' | b'\t')) {
            return None;
        }
        Some((level, after))
    }

    /// Strips an optional closing `#` sequence, which must be preceded by whitespace.
    fn strip_closing(text: &str) -> &str {
        let text = text.trim_end();
        let without = text.trim_end_matches(Self::MARKER as char);
        if without.is_empty() {
            return without;
        }
        if without.len() < text.len() && !without.ends_with([' ', '\t']) {
            return text;
        }
        without.trim_end()
    }
}

impl BlockRule for Heading {
    fn name(&self) -> &'static str {
        "heading"
    }

    fn terminates(&self) -> &'static [Chain] {
        &[Chain::Paragraph]
    }

    fn run(&self, state: &mut BlockState<'_>, start_line: usize, _end_line: usize, silent: bool)
    -> bool {
        let Some((level, after)) = Self::open(state, start_line) else {
            return false;
        };
        if silent {
            return true;
        }

        let content = Self::strip_closing(&state.src[after..state.line_end[start_line]])
            .trim()
            .to_string();
        let tag = Self::TAGS[level - 1];
        state.line = start_line + 1;

        let open = state.push(TokenKind::HeadingOpen, tag, Nesting::Open);
        open.markup = "#".repeat(level);
        open.line_map = Some((start_line, start_line + 1));
        let inline = state.push(TokenKind::Inline, "", Nesting::Leaf);
        inline.content = content;
        inline.line_map = Some((start_line, start_line + 1));
        state.push(TokenKind::HeadingClose, tag, Nesting::Close).markup = "#".repeat(level);
        true
    }
}
