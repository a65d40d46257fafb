pub mod lines;

pub use lines::{LineRef, lines_with_spans};
