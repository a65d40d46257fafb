use crate::parsing::state::BlockState;

/// Output shape chosen once for the outermost list of a nest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Full list/item/paragraph token tree.
    Structured,
    /// One passthrough `inline` token holding the raw source.
    Degraded,
}

/// A list is structured when it starts the document or follows a blank
/// line. Anything else, under live preview, is ambiguous mid-paragraph
/// context and degrades.
pub fn select(state: &BlockState<'_>, start_line: usize) -> RenderMode {
    if !state.options.live_preview || start_line == 0 || state.is_empty(start_line - 1) {
        RenderMode::Structured
    } else {
        RenderMode::Degraded
    }
}
