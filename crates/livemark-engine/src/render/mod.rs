//! # HTML Rendering
//!
//! A small block renderer over the token stream. Hidden tokens render as
//! nothing, so tight lists come out as `<li>text</li>` and a degraded list
//! comes out as its raw source. Inline content is escaped but not parsed.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::parsing::token::{Nesting, Token, TokenKind};

pub fn to_html(tokens: &[Token]) -> String {
    let mut out = String::new();
    for (idx, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::Inline => {
                if !token.hidden {
                    out.push_str(&encode_text(&token.content));
                }
            }
            TokenKind::Fence => render_code(&mut out, token, Some(&token.info)),
            TokenKind::CodeBlock => render_code(&mut out, token, None),
            _ => render_tag(&mut out, tokens, idx),
        }
    }
    out
}

fn render_code(out: &mut String, token: &Token, info: Option<&str>) {
    if token.hidden {
        return;
    }
    out.push_str("<pre><code");
    if let Some(lang) = info.and_then(|i| i.split_whitespace().next()) {
        out.push_str(" class=\"language-");
        out.push_str(&encode_double_quoted_attribute(lang));
        out.push('"');
    }
    out.push('>');
    out.push_str(&encode_text(&token.content));
    out.push_str("</code></pre>\n");
}

fn render_tag(out: &mut String, tokens: &[Token], idx: usize) {
    let token = &tokens[idx];
    if token.hidden {
        return;
    }

    // Block opener right after a hidden token starts on its own line.
    if token.nesting != Nesting::Close && idx > 0 && tokens[idx - 1].hidden {
        out.push('\n');
    }

    out.push('<');
    if token.nesting == Nesting::Close {
        out.push('/');
    }
    out.push_str(token.tag);
    for (name, value) in &token.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&encode_double_quoted_attribute(value));
        out.push('"');
    }
    out.push('>');

    let need_lf = match (token.nesting, tokens.get(idx + 1)) {
        (Nesting::Open, Some(next)) => {
            !(next.kind == TokenKind::Inline
                || next.hidden
                || (next.nesting == Nesting::Close && next.tag == token.tag))
        }
        _ => true,
    };
    if need_lf {
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{options::ParseOptions, parse_str};
    use pretty_assertions::assert_eq;

    fn html(md: &str) -> String {
        to_html(&parse_str(md, &ParseOptions::default()).tokens)
    }

    #[test]
    fn tight_list() {
        assert_eq!(
            html("- a\n- b\n"),
            "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n"
        );
    }

    #[test]
    fn loose_list() {
        assert_eq!(
            html("- a\n\n- b\n"),
            "<ul>\n<li>\n<p>a</p>\n</li>\n<li>\n<p>b</p>\n</li>\n</ul>\n"
        );
    }

    #[test]
    fn ordered_list_with_start() {
        assert_eq!(
            html("3. x\n4. y\n"),
            "<ol start=\"3\">\n<li>x</li>\n<li>y</li>\n</ol>\n"
        );
    }

    #[test]
    fn nested_tight_list() {
        assert_eq!(
            html("- a\n  - b\n"),
            "<ul>\n<li>a\n<ul>\n<li>b</li>\n</ul>\n</li>\n</ul>\n"
        );
    }

    #[test]
    fn degraded_list_renders_raw_source() {
        assert_eq!(html("para\n- a\n"), "<p>para\n- a");
    }

    #[test]
    fn escapes_text_and_renders_leaves() {
        assert_eq!(
            html("# a < b\n\n```rust\nx && y\n```\n\n***\n"),
            "<h1>a &lt; b</h1>\n<pre><code class=\"language-rust\">x &amp;&amp; y\n</code></pre>\n<hr>\n"
        );
    }
}
