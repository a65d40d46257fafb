use std::fmt;

use serde::Serialize;

use crate::parsing::token::{Nesting, Token};

/// Snapshot of a token stream for testing with `insta`.
#[derive(Debug, Serialize)]
pub struct Snap {
    pub tokens: Vec<TokenSnap>,
}

/// Snapshot of a single token.
#[derive(Debug, Serialize)]
pub struct TokenSnap {
    /// Wire name (`bullet_list_open`, `inline`, ...).
    pub kind: &'static str,
    pub level: usize,
    pub line_map: Option<(usize, usize)>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<(String, String)>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content: String,
    pub hidden: bool,
}

/// Converts a token stream into a serializable snapshot.
pub fn normalize(tokens: &[Token]) -> Snap {
    let tokens = tokens
        .iter()
        .map(|t| TokenSnap {
            kind: t.kind.as_str(),
            level: t.level,
            line_map: t.line_map,
            attrs: t.attrs.clone(),
            // Only leaves carry text worth showing.
            content: match t.nesting {
                Nesting::Leaf => t.content.clone(),
                _ => String::new(),
            },
            hidden: t.hidden,
        })
        .collect();
    Snap { tokens }
}

/// One line per token, indented two spaces per level:
///
/// ```text
/// bullet_list_open [0, 1)
///   list_item_open [0, 1)
///     paragraph_open [0, 1) (hidden)
///       inline [0, 1) "a"
/// ```
impl fmt::Display for Snap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for t in &self.tokens {
            write!(f, "{:indent$}{}", "", t.kind, indent = t.level * 2)?;
            if let Some((start, end)) = t.line_map {
                write!(f, " [{start}, {end})")?;
            }
            for (name, value) in &t.attrs {
                write!(f, " {name}={value}")?;
            }
            if !t.content.is_empty() {
                write!(f, " {:?}", t.content)?;
            }
            if t.hidden {
                write!(f, " (hidden)")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
