pub mod block_quote;
pub mod code_block;
pub mod code_fence;
pub mod heading;
pub mod paragraph;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_block::CodeBlock;
pub use code_fence::{CodeFence, FenceKind};
pub use heading::Heading;
pub use paragraph::Paragraph;
pub use thematic_break::ThematicBreak;
