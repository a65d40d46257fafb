//! List marker recognition.
//!
//! Both scanners are pure: they read the line table and source and return
//! the offset just past the marker, or `None`.

use crate::parsing::state::BlockState;

/// The two marker families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Bullet,
    Ordered,
}

impl MarkerKind {
    pub fn other(self) -> Self {
        match self {
            MarkerKind::Bullet => MarkerKind::Ordered,
            MarkerKind::Ordered => MarkerKind::Bullet,
        }
    }
}

pub const BULLET_MARKERS: [u8; 3] = [b'*', b'-', b'+'];

/// Longest digit run accepted before an ordered marker's `.` or `)`.
pub const MAX_ORDERED_DIGITS: usize = 9;

fn is_space(b: Option<u8>) -> bool {
    matches!(b, Some(b' ' | b'\t'))
}

/// `*`, `-` or `+` followed by whitespace or the end of the line.
pub fn scan_bullet(state: &BlockState<'_>, line: usize) -> Option<usize> {
    let pos = state.content_start(line);
    let max = state.line_end[line];
    if pos >= max {
        return None;
    }
    let marker = state.byte_at(pos)?;
    if !BULLET_MARKERS.contains(&marker) {
        return None;
    }

    let pos = pos + 1;
    // "-5" or "*emph*" are not list markers.
    if pos < max && !is_space(state.byte_at(pos)) {
        return None;
    }
    Some(pos)
}

/// Digits followed by `.` or `)`, then whitespace or the end of the line.
pub fn scan_ordered(state: &BlockState<'_>, line: usize) -> Option<usize> {
    let start = state.content_start(line);
    let max = state.line_end[line];
    // Need at least a digit and a terminator.
    if start + 1 >= max {
        return None;
    }
    if !state.byte_at(start)?.is_ascii_digit() {
        return None;
    }

    let mut pos = start + 1;
    loop {
        if pos >= max {
            return None;
        }
        let ch = state.byte_at(pos)?;
        pos += 1;
        if ch.is_ascii_digit() {
            if pos - start > MAX_ORDERED_DIGITS {
                return None;
            }
            continue;
        }
        if ch == b'.' || ch == b')' {
            break;
        }
        return None;
    }

    if pos < max && !is_space(state.byte_at(pos)) {
        return None;
    }
    Some(pos)
}

pub fn scan(kind: MarkerKind, state: &BlockState<'_>, line: usize) -> Option<usize> {
    match kind {
        MarkerKind::Bullet => scan_bullet(state, line),
        MarkerKind::Ordered => scan_ordered(state, line),
    }
}

/// Tries the ordered scanner first, then the bullet one.
pub fn scan_any(state: &BlockState<'_>, line: usize) -> Option<(MarkerKind, usize)> {
    scan_ordered(state, line)
        .map(|pos| (MarkerKind::Ordered, pos))
        .or_else(|| scan_bullet(state, line).map(|pos| (MarkerKind::Bullet, pos)))
}

/// Numeric value of the ordered marker on `line` ending at `pos_after_marker`.
pub fn ordered_value(state: &BlockState<'_>, line: usize, pos_after_marker: usize) -> Option<u32> {
    let digits = state.src.get(state.content_start(line)..pos_after_marker.checked_sub(1)?)?;
    digits.parse().ok()
}
