//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts a token stream to a stable `Snap` that
//!   serializes with `serde` and prints as an indented one-line-per-token dump
//! - **`invariants`**: Runtime checks for parser correctness (opens and closes
//!   balance at matching levels, line maps stay inside the document)
//!
//! The dump is also what `livemark-cli --tokens` prints.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
