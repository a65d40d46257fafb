//! The list block rule.
//!
//! A list is a run of items sharing a marker family. Each item's body is
//! parsed by re-entering the host tokenizer with the item's content indent
//! as the new `block_indent`, so nested lists, fences and quotes inside an
//! item come out of the ordinary rule set.
//!
//! Under live preview, the outermost list of a nest is emitted in one of
//! two shapes (see [`render_mode`]):
//!
//! - **structured**: `*_list_open`, `list_item_open`, the item's blocks,
//!   closes, with paragraph wrappers hidden when the list is tight;
//! - **degraded**: a single visible `inline` token holding the raw source
//!   from the line before the list through its last line, after every
//!   token emitted for the list (and the two before it) has been hidden.
//!
//! Nested lists inherit the outermost list's choice.

pub mod indent;
pub mod invalidate;
pub mod marker;
pub mod render_mode;
pub mod tight;

use log::debug;

use crate::parsing::{
    ruler::{BlockRule, Chain},
    state::{BlockState, ParentType},
    token::{Nesting, TokenKind},
    tokenizer::is_terminated,
};

use indent::{ItemIndent, item_indent};
use marker::MarkerKind;
use render_mode::RenderMode;

/// List rule (marker struct).
pub struct ListRule;

/// What the opening line of a list determines for the whole list.
#[derive(Debug, Clone, Copy)]
struct ListRegion {
    kind: MarkerKind,
    /// Marker character of the first item (`-`, `*`, `+`, `.` or `)`).
    marker: u8,
    /// First item's number, ordered lists only.
    start_value: Option<u32>,
}

impl ListRegion {
    fn open(state: &BlockState<'_>, line: usize, kind: MarkerKind, pos_after_marker: usize) -> Self {
        let start_value = match kind {
            MarkerKind::Ordered => marker::ordered_value(state, line, pos_after_marker),
            MarkerKind::Bullet => None,
        };
        Self {
            kind,
            marker: marker_byte(state, pos_after_marker),
            start_value,
        }
    }

    fn tokens(&self) -> (TokenKind, TokenKind, &'static str) {
        match self.kind {
            MarkerKind::Bullet => (TokenKind::BulletListOpen, TokenKind::BulletListClose, "ul"),
            MarkerKind::Ordered => (TokenKind::OrderedListOpen, TokenKind::OrderedListClose, "ol"),
        }
    }
}

fn marker_byte(state: &BlockState<'_>, pos_after_marker: usize) -> u8 {
    pos_after_marker
        .checked_sub(1)
        .and_then(|pos| state.byte_at(pos))
        .unwrap_or(b'-')
}

impl BlockRule for ListRule {
    fn name(&self) -> &'static str {
        "list"
    }

    fn terminates(&self) -> &'static [Chain] {
        &[Chain::Paragraph]
    }

    fn run(&self, state: &mut BlockState<'_>, start_line: usize, end_line: usize, silent: bool)
    -> bool {
        if state.is_code_indented(start_line) {
            return false;
        }
        let Some((kind, pos_after_marker)) = marker::scan_any(state, start_line) else {
            return false;
        };
        if state.nesting_exceeded() {
            debug!("list at line {start_line} exceeds max nesting, not opening");
            return false;
        }
        if silent {
            return true;
        }

        parse_list(state, start_line, end_line, kind, pos_after_marker);
        true
    }
}

fn parse_list(
    state: &mut BlockState<'_>,
    start_line: usize,
    end_line: usize,
    kind: MarkerKind,
    mut pos_after_marker: usize,
) {
    let outermost = state.list_depth == 0;
    if outermost {
        let mode = render_mode::select(state, start_line);
        if mode == RenderMode::Degraded {
            debug!("list at line {start_line} follows text, emitting it as passthrough");
        }
        state.render_list = mode == RenderMode::Structured;
    }
    let render = state.render_list;

    let region = ListRegion::open(state, start_line, kind, pos_after_marker);
    let (open_kind, close_kind, tag) = region.tokens();
    let list_idx = state.tokens.len();

    if render {
        let token = state.push(open_kind, tag, Nesting::Open);
        token.markup = char::from(region.marker).to_string();
        if let Some(start) = region.start_value.filter(|&n| n > 1) {
            token.set_attr("start", start.to_string());
        }
    }

    state.list_depth += 1;
    let tokenizer = state.tokenizer();
    let mut line = start_line;
    let mut tight = true;
    let mut prev_empty_end = false;

    loop {
        let ItemIndent {
            indent,
            content_start,
            ..
        } = item_indent(state, line, pos_after_marker);
        let item_markup = char::from(marker_byte(state, pos_after_marker)).to_string();

        let item_idx = state.tokens.len();
        if render {
            state.push(TokenKind::ListItemOpen, "li", Nesting::Open).markup = item_markup.clone();
        }

        let old_indent = state.block_indent;
        let old_tight = state.tight;
        let old_shift = state.indent_shift[line];
        let old_parent = state.parent_type;

        state.indent_shift[line] = content_start - state.line_start[line];
        state.block_indent = indent;
        state.tight = true;
        state.parent_type = ParentType::List;

        tokenizer.tokenize(state, line, end_line, true);

        // A blank line between items, or between blocks of one item, loosens the list.
        if !state.tight || prev_empty_end {
            tight = false;
        }
        prev_empty_end = state.line.saturating_sub(line) > 1 && state.is_empty(state.line - 1);

        state.block_indent = old_indent;
        state.tight = old_tight;
        state.indent_shift[line] = old_shift;
        state.parent_type = old_parent;

        if render {
            state.push(TokenKind::ListItemClose, "li", Nesting::Close).markup = item_markup;
            state.tokens[item_idx].line_map = Some((line, state.line));
        }

        line = state.line;
        if line >= end_line || state.is_empty(line) || state.indent_shift[line] < state.block_indent {
            break;
        }
        if is_terminated(state, Chain::List, line, end_line) {
            break;
        }

        // Marker-kind changes do not end the list.
        let rescanned = marker::scan(region.kind, state, line)
            .or_else(|| marker::scan(region.kind.other(), state, line));
        match rescanned {
            Some(pos) => pos_after_marker = pos,
            None => break,
        }

        if !render && state.is_empty(line - 1) {
            break;
        }
    }

    state.list_depth -= 1;

    if render {
        state.push(close_kind, tag, Nesting::Close).markup = char::from(region.marker).to_string();
        state.tokens[list_idx].line_map = Some((start_line, line));
        if tight {
            tight::mark_tight_paragraphs(&mut state.tokens, list_idx, state.level);
        }
    } else {
        invalidate::invalidate_from(&mut state.tokens, list_idx);
        let from = start_line.saturating_sub(1);
        let content = state.get_lines(from, line, state.block_indent, false);
        let token = state.push(TokenKind::Inline, "", Nesting::Leaf);
        token.content = content;
        token.line_map = Some((from, line));
    }

    state.line = line;
    if outermost {
        state.render_list = true;
    }
}
