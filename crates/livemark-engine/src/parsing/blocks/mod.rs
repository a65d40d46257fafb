//! # Block Rules
//!
//! Every rule implements [`BlockRule`](crate::parsing::ruler::BlockRule) and
//! is registered with the [`BlockTokenizer`](crate::parsing::tokenizer::BlockTokenizer)
//! in priority order.
//!
//! ## Modules
//!
//! - **`kinds`**: the host leaf and container rules (paragraph, heading,
//!   thematic break, fenced and indented code, blockquote), each owning its
//!   delimiter constants
//! - **`list`**: the list rule: marker scanning, item indentation, the item
//!   loop, and the tight/degraded post-processing passes
//!
//! ## Key Invariants
//!
//! - A rule run with `silent = true` pushes no tokens and leaves every
//!   `BlockState` field as it found it
//! - Container rules restore whatever they rebase (`block_indent`,
//!   `indent_shift`, `line_start`) before returning
//! - Tokens are never removed from the stream, only hidden

pub mod kinds;
pub mod list;
