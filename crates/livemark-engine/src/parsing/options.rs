use serde::{Deserialize, Serialize};

/// Knobs for one parse pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Maximum sub-block recursion depth. Container rules (lists,
    /// blockquotes) refuse to open past it and the line falls through to
    /// the paragraph rule.
    pub max_nesting: usize,
    /// Allow lists that start right after non-blank content to collapse into
    /// a single passthrough token. Turn off for full renders.
    pub live_preview: bool,
}

impl ParseOptions {
    pub const DEFAULT_MAX_NESTING: usize = 32;

    /// Options for a full, non-preview render.
    pub fn full_render() -> Self {
        Self {
            live_preview: false,
            ..Self::default()
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_nesting: Self::DEFAULT_MAX_NESTING,
            live_preview: true,
        }
    }
}
