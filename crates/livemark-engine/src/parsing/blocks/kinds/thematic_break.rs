use crate::parsing::{
    ruler::{BlockRule, Chain},
    state::BlockState,
    token::{Nesting, TokenKind},
};

/// Thematic break: three or more `*`, `-` or `_`, optionally space-separated.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [u8; 3] = [b'*', b'-', b'_'];
    pub const MIN_COUNT: usize = 3;

    fn scan(state: &BlockState<'_>, line: usize) -> Option<(u8, usize)> {
        if state.is_code_indented(line) {
            return None;
        }
        let pos = state.content_start(line);
        let max = state.line_end[line];
        let marker = state.byte_at(pos).filter(|b| Self::MARKERS.contains(b))?;
        if pos >= max {
            return None;
        }
        let mut count = 0;
        for &b in &state.src.as_bytes()[pos..max] {
            match b {
                b if b == marker => count += 1,
                b' ' | b'\t' => {}
                _ => return None,
            }
        }
        (count >= Self::MIN_COUNT).then_some((marker, count))
    }
}

impl BlockRule for ThematicBreak {
    fn name(&self) -> &'static str {
        "hr"
    }

    fn terminates(&self) -> &'static [Chain] {
        &[Chain::Paragraph, Chain::List]
    }

    fn run(&self, state: &mut BlockState<'_>, start_line: usize, _end_line: usize, silent: bool)
    -> bool {
        let Some((marker, count)) = Self::scan(state, start_line) else {
            return false;
        };
        if silent {
            return true;
        }

        state.line = start_line + 1;
        let token = state.push(TokenKind::Hr, "hr", Nesting::Leaf);
        token.markup = String::from(marker as char).repeat(count);
        token.line_map = Some((start_line, start_line + 1));
        true
    }
}
