use crate::parsing::token::{Token, TokenKind};

/// Hides the paragraph wrappers directly inside the items of a tight list.
///
/// `list_idx` is the index of the list's open token and `list_level` its
/// level. Only paragraphs at `list_level + 2` (children of a `list_item`)
/// are touched; the `inline` token between open and close stays visible.
pub fn mark_tight_paragraphs(tokens: &mut [Token], list_idx: usize, list_level: usize) {
    let level = list_level + 2;
    let end = tokens.len().saturating_sub(2);
    let mut i = list_idx + 2;
    while i < end {
        if tokens[i].level == level && tokens[i].kind == TokenKind::ParagraphOpen {
            tokens[i].hidden = true;
            tokens[i + 2].hidden = true;
            i += 2;
        }
        i += 1;
    }
}
