use serde::Serialize;

/// The kind of a block token.
///
/// `as_str` yields the snake-case names used in dumps and snapshots
/// (`bullet_list_open`, `inline`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    BulletListOpen,
    BulletListClose,
    OrderedListOpen,
    OrderedListClose,
    ListItemOpen,
    ListItemClose,
    ParagraphOpen,
    ParagraphClose,
    HeadingOpen,
    HeadingClose,
    BlockquoteOpen,
    BlockquoteClose,
    Inline,
    Fence,
    CodeBlock,
    Hr,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::BulletListOpen => "bullet_list_open",
            TokenKind::BulletListClose => "bullet_list_close",
            TokenKind::OrderedListOpen => "ordered_list_open",
            TokenKind::OrderedListClose => "ordered_list_close",
            TokenKind::ListItemOpen => "list_item_open",
            TokenKind::ListItemClose => "list_item_close",
            TokenKind::ParagraphOpen => "paragraph_open",
            TokenKind::ParagraphClose => "paragraph_close",
            TokenKind::HeadingOpen => "heading_open",
            TokenKind::HeadingClose => "heading_close",
            TokenKind::BlockquoteOpen => "blockquote_open",
            TokenKind::BlockquoteClose => "blockquote_close",
            TokenKind::Inline => "inline",
            TokenKind::Fence => "fence",
            TokenKind::CodeBlock => "code_block",
            TokenKind::Hr => "hr",
        }
    }
}

/// How a token affects the implicit tree: `Open` (+1), `Close` (-1) or `Leaf` (0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Nesting {
    Open,
    Close,
    Leaf,
}

impl Nesting {
    #[must_use]
    pub fn delta(self) -> i8 {
        match self {
            Nesting::Open => 1,
            Nesting::Close => -1,
            Nesting::Leaf => 0,
        }
    }
}

/// One entry of the flat token arena.
///
/// Tokens never reference each other; parent/child structure is recovered
/// from `nesting` and `level`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// HTML tag name the renderer uses (`ul`, `li`, `p`, ...).
    pub tag: &'static str,
    pub nesting: Nesting,
    pub level: usize,
    /// Source lines `[start, end)` covered by this token.
    pub line_map: Option<(usize, usize)>,
    /// Marker text: list marker char, fence delimiter, heading hashes.
    pub markup: String,
    /// Fence info string.
    pub info: String,
    pub attrs: Vec<(String, String)>,
    pub hidden: bool,
    pub content: String,
    /// Inline children; left empty for the inline parser.
    pub children: Vec<Token>,
}

impl Token {
    pub fn new(kind: TokenKind, tag: &'static str, nesting: Nesting) -> Self {
        Self {
            kind,
            tag,
            nesting,
            level: 0,
            line_map: None,
            markup: String::new(),
            info: String::new(),
            attrs: Vec::new(),
            hidden: false,
            content: String::new(),
            children: Vec::new(),
        }
    }

    /// Looks up an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| k == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }
}
