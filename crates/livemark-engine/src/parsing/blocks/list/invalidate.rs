use crate::parsing::token::Token;

/// Neutralizes already-emitted tokens that a degraded list re-collapses.
///
/// Everything from two tokens before `start_idx` to the end of the stream
/// is hidden and its content cleared. Tokens are never removed, so indices
/// held elsewhere stay valid.
pub fn invalidate_from(tokens: &mut [Token], start_idx: usize) {
    let from = start_idx.saturating_sub(2).min(tokens.len());
    for token in &mut tokens[from..] {
        token.hidden = true;
        token.content.clear();
    }
}
