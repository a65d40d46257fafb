use xi_rope::Rope;

/// A single physical line of the rope, as byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef {
    /// Offset of the first byte of the line.
    pub start: usize,
    /// Offset just past the line content; the terminator (`\n` or `\r\n`) is excluded.
    pub content_end: usize,
    /// Offset just past the terminator, i.e. where the next line starts.
    pub end: usize,
}

/// Returns an iterator over the lines of the rope with their byte offsets.
///
/// Uses `lines_raw` so terminators are still visible and offsets stay exact.
/// A trailing newline does not produce an extra empty line.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        offset += line.len();
        LineRef {
            start,
            content_end: start + line.trim_end_matches(['\r', '\n']).len(),
            end: offset,
        }
    })
}
