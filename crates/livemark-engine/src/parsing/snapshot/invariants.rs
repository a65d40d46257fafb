use xi_rope::Rope;

use crate::parsing::{
    rope::lines_with_spans,
    token::{Nesting, Token},
};

/// Validates parser output invariants.
///
/// Asserts that:
/// - Every open token has a close with the same tag at the same level, hidden or not
/// - Each token's level equals the number of opens enclosing it
/// - Line maps are non-empty-or-equal ranges inside the document
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(rope: &Rope, tokens: &[Token]) {
    let line_count = lines_with_spans(rope).count();
    let mut open: Vec<(usize, &Token)> = Vec::new();

    for (i, t) in tokens.iter().enumerate() {
        if t.nesting == Nesting::Close {
            let (open_idx, opener) = open
                .pop()
                .unwrap_or_else(|| panic!("token {i} ({}) closes nothing", t.kind.as_str()));
            assert!(
                opener.tag == t.tag && opener.level == t.level,
                "token {i} ({}) does not match opener {open_idx} ({})",
                t.kind.as_str(),
                opener.kind.as_str()
            );
        }

        assert_eq!(
            t.level,
            open.len(),
            "token {i} ({}) has level {} inside {} open tokens",
            t.kind.as_str(),
            t.level,
            open.len()
        );

        if let Some((start, end)) = t.line_map {
            assert!(
                start <= end && end <= line_count,
                "token {i} ({}) line map {start}..{end} out of bounds (lines: {line_count})",
                t.kind.as_str()
            );
        }

        if t.nesting == Nesting::Open {
            open.push((i, t));
        }
    }

    if let Some((i, t)) = open.last() {
        panic!("token {i} ({}) is never closed", t.kind.as_str());
    }
}
