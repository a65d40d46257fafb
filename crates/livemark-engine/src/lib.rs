pub mod parsing;
pub mod preview;
pub mod render;

pub use parsing::{ParsedDoc, options::ParseOptions, parse_document, parse_str, token::Token};
pub use preview::{PreviewError, PreviewSession};
