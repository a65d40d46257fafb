//! Behavioural tests for the list rule driven through the full tokenizer.
//!
//! Token streams are compared as the indented dump from
//! [`Snap`](crate::parsing::snapshot::Snap), with `insta` inline snapshots.


use pretty_assertions::assert_eq;
use rstest::rstest;
use xi_rope::Rope;

use crate::parsing::{
    options::ParseOptions,
    parse_document,
    snapshot,
    token::{Token, TokenKind},
};

fn parse_with(md: &str, options: &ParseOptions) -> Vec<Token> {
    let rope = Rope::from(md);
    let doc = parse_document(&rope, options);
    snapshot::invariants(&rope, &doc.tokens);
    doc.tokens
}

fn parse(md: &str) -> Vec<Token> {
    parse_with(md, &ParseOptions::default())
}

fn dump(tokens: &[Token]) -> String {
    snapshot::normalize(tokens).to_string().trim_end().to_string()
}

fn visible_kinds(tokens: &[Token]) -> Vec<&'static str> {
    tokens
        .iter()
        .filter(|t| !t.hidden)
        .map(|t| t.kind.as_str())
        .collect()
}

#[test]
fn tight_bullet_list_hides_paragraphs() {
    insta::assert_snapshot!(dump(&parse("- a\n- b\n- c\n")), @r#"
    bullet_list_open [0, 3)
      list_item_open [0, 1)
        paragraph_open [0, 1) (hidden)
          inline [0, 1) "a"
        paragraph_close (hidden)
      list_item_close
      list_item_open [1, 2)
        paragraph_open [1, 2) (hidden)
          inline [1, 2) "b"
        paragraph_close (hidden)
      list_item_close
      list_item_open [2, 3)
        paragraph_open [2, 3) (hidden)
          inline [2, 3) "c"
        paragraph_close (hidden)
      list_item_close
    bullet_list_close
    "#);
}

#[test]
fn loose_bullet_list_keeps_paragraphs() {
    insta::assert_snapshot!(dump(&parse("- a\n\n- b\n")), @r#"
    bullet_list_open [0, 3)
      list_item_open [0, 2)
        paragraph_open [0, 1)
          inline [0, 1) "a"
        paragraph_close
      list_item_close
      list_item_open [2, 3)
        paragraph_open [2, 3)
          inline [2, 3) "b"
        paragraph_close
      list_item_close
    bullet_list_close
    "#);
}

#[test]
fn blank_line_inside_an_item_loosens_the_list() {
    let tokens = parse("- a\n\n  b\n- c\n");
    assert!(
        tokens
            .iter()
            .filter(|t| t.kind == TokenKind::ParagraphOpen)
            .all(|t| !t.hidden)
    );
}

#[test]
fn trailing_blank_line_keeps_the_list_tight() {
    insta::assert_snapshot!(dump(&parse("- a\n\nb\n")), @r#"
    bullet_list_open [0, 2)
      list_item_open [0, 2)
        paragraph_open [0, 1) (hidden)
          inline [0, 1) "a"
        paragraph_close (hidden)
      list_item_close
    bullet_list_close
    paragraph_open [2, 3)
      inline [2, 3) "b"
    paragraph_close
    "#);
}

#[rstest]
#[case("3. x\n4. y\n", Some("3"))]
#[case("10) x\n", Some("10"))]
#[case("1. x\n2. y\n", None)]
#[case("0. x\n", None)]
fn ordered_start_attribute(#[case] md: &str, #[case] start: Option<&str>) {
    let tokens = parse(md);
    assert_eq!(tokens[0].kind, TokenKind::OrderedListOpen);
    assert_eq!(tokens[0].attr("start"), start);
}

#[test]
fn ordered_list_markup_is_the_delimiter() {
    let tokens = parse("1) x\n");
    assert_eq!(tokens[0].markup, ")");
    assert_eq!(tokens[1].markup, ")");
}

#[test]
fn ten_digit_marker_is_a_paragraph() {
    assert_eq!(
        visible_kinds(&parse("1234567890. x\n")),
        vec!["paragraph_open", "inline", "paragraph_close"]
    );
    assert_eq!(parse("123456789. x\n")[0].attr("start"), Some("123456789"));
}

#[test]
fn list_after_prose_degrades_to_passthrough() {
    let tokens = parse("para\n- a\n- b\n");
    insta::assert_snapshot!(dump(&tokens), @r#"
    paragraph_open [0, 1)
      inline [0, 1) (hidden)
    paragraph_close (hidden)
    paragraph_open [1, 2) (hidden)
      inline [1, 2) (hidden)
    paragraph_close (hidden)
    paragraph_open [2, 3) (hidden)
      inline [2, 3) (hidden)
    paragraph_close (hidden)
    inline [0, 3) "para\n- a\n- b"
    "#);

    let visible_inline: Vec<_> = tokens
        .iter()
        .filter(|t| !t.hidden && t.kind == TokenKind::Inline)
        .collect();
    assert_eq!(visible_inline.len(), 1);
    assert!(
        tokens
            .iter()
            .filter(|t| !t.hidden)
            .all(|t| !t.kind.as_str().contains("list"))
    );
}

#[test]
fn degraded_list_stops_at_blank_line() {
    insta::assert_snapshot!(dump(&parse("para\n- a\n\n- b\n")), @r#"
    paragraph_open [0, 1)
      inline [0, 1) (hidden)
    paragraph_close (hidden)
    paragraph_open [1, 2) (hidden)
      inline [1, 2) (hidden)
    paragraph_close (hidden)
    inline [0, 3) "para\n- a\n"
    bullet_list_open [3, 4)
      list_item_open [3, 4)
        paragraph_open [3, 4) (hidden)
          inline [3, 4) "b"
        paragraph_close (hidden)
      list_item_close
    bullet_list_close
    "#);
}

#[test]
fn full_render_never_degrades() {
    let tokens = parse_with("para\n- a\n", &ParseOptions::full_render());
    assert!(tokens.iter().all(|t| !t.hidden || t.level == 2));
    assert_eq!(
        visible_kinds(&tokens),
        vec![
            "paragraph_open",
            "inline",
            "paragraph_close",
            "bullet_list_open",
            "list_item_open",
            "inline",
            "list_item_close",
            "bullet_list_close",
        ]
    );
}

#[test]
fn list_after_blank_line_is_structured() {
    let tokens = parse("para\n\n- a\n");
    assert_eq!(tokens[3].kind, TokenKind::BulletListOpen);
    assert!(!tokens[3].hidden);
    assert!(!tokens[1].hidden);
}

#[test]
fn nested_list_inherits_structured_mode() {
    insta::assert_snapshot!(dump(&parse("- a\n  - b\n- c\n")), @r#"
    bullet_list_open [0, 3)
      list_item_open [0, 2)
        paragraph_open [0, 1) (hidden)
          inline [0, 1) "a"
        paragraph_close (hidden)
        bullet_list_open [1, 2)
          list_item_open [1, 2)
            paragraph_open [1, 2) (hidden)
              inline [1, 2) "b"
            paragraph_close (hidden)
          list_item_close
        bullet_list_close
      list_item_close
      list_item_open [2, 3)
        paragraph_open [2, 3) (hidden)
          inline [2, 3) "c"
        paragraph_close (hidden)
      list_item_close
    bullet_list_close
    "#);
}

#[test]
fn nested_list_in_degraded_list_emits_no_list_tokens() {
    let tokens = parse("para\n- a\n  - b\n");
    assert!(tokens.iter().all(|t| !t.kind.as_str().contains("list")));
    let last = tokens.last().map(|t| (t.kind, t.hidden, t.content.as_str()));
    assert_eq!(last, Some((TokenKind::Inline, false, "para\n- a\n  - b")));
    assert_eq!(tokens.iter().filter(|t| !t.hidden).count(), 2);
}

#[rstest]
#[case::heading("- a\n# h\n", "heading_open")]
#[case::fence("- a\n```\ncode\n```\n", "fence")]
#[case::thematic_break("- a\n***\n", "hr")]
#[case::blockquote("- a\n> q\n", "blockquote_open")]
fn dedented_block_ends_the_list(#[case] md: &str, #[case] next: &str) {
    let tokens = parse(md);
    let close = tokens
        .iter()
        .position(|t| t.kind == TokenKind::BulletListClose)
        .unwrap();
    assert_eq!(tokens[0].line_map, Some((0, 1)));
    assert_eq!(tokens[close + 1].kind.as_str(), next);
    assert_eq!(tokens[close + 1].line_map.map(|m| m.0), Some(1));
}

#[test]
fn fence_inside_item_stays_in_the_item() {
    insta::assert_snapshot!(dump(&parse("- a\n  ```\n  x\n  ```\n")), @r#"
    bullet_list_open [0, 4)
      list_item_open [0, 4)
        paragraph_open [0, 1) (hidden)
          inline [0, 1) "a"
        paragraph_close (hidden)
        fence [1, 4) "x\n"
      list_item_close
    bullet_list_close
    "#);
}

#[test]
fn lazy_line_continues_item_paragraph() {
    let tokens = parse("- a\nb\n");
    assert_eq!(tokens[3].content, "a\nb");
    assert_eq!(tokens[0].line_map, Some((0, 2)));
}

#[test]
fn wide_gap_after_marker_starts_code_block() {
    insta::assert_snapshot!(dump(&parse("-      code\n")), @r#"
    bullet_list_open [0, 1)
      list_item_open [0, 1)
        code_block [0, 1) " code\n"
      list_item_close
    bullet_list_close
    "#);
}

#[test]
fn empty_item() {
    assert_eq!(
        visible_kinds(&parse("-\n- b\n")),
        vec![
            "bullet_list_open",
            "list_item_open",
            "list_item_close",
            "list_item_open",
            "inline",
            "list_item_close",
            "bullet_list_close",
        ]
    );
}

#[test]
fn bullet_list_absorbs_ordered_item() {
    let tokens = parse("- a\n1. b\n");
    assert_eq!(tokens[0].kind, TokenKind::BulletListOpen);
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::BulletListClose));
    let items: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::ListItemOpen)
        .map(|t| t.markup.as_str())
        .collect();
    assert_eq!(items, vec!["-", "."]);
}

#[test]
fn ordered_list_absorbs_bullet_item() {
    let tokens = parse("1. a\n* b\n");
    assert_eq!(tokens[0].kind, TokenKind::OrderedListOpen);
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::OrderedListClose));
    let items: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::ListItemOpen)
        .map(|t| t.markup.as_str())
        .collect();
    assert_eq!(items, vec![".", "*"]);
}

#[test]
fn nesting_limit_fails_closed_to_paragraph() {
    let options = ParseOptions {
        max_nesting: 1,
        ..ParseOptions::default()
    };
    let tokens = parse_with("- a\n", &options);
    assert_eq!(
        visible_kinds(&tokens),
        vec!["paragraph_open", "inline", "paragraph_close"]
    );
    assert_eq!(tokens[1].content, "- a");
}

#[test]
fn deep_nesting_stops_at_limit() {
    let options = ParseOptions {
        max_nesting: 3,
        ..ParseOptions::default()
    };
    let tokens = parse_with("- - - - a\n", &options);
    let lists = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::BulletListOpen)
        .count();
    assert_eq!(lists, 2);
}

#[test]
fn blockquote_inside_item() {
    let tokens = parse("- > q\n");
    assert_eq!(
        visible_kinds(&tokens),
        vec![
            "bullet_list_open",
            "list_item_open",
            "blockquote_open",
            "paragraph_open",
            "inline",
            "paragraph_close",
            "blockquote_close",
            "list_item_close",
            "bullet_list_close",
        ]
    );
}

#[test]
fn list_inside_blockquote() {
    let tokens = parse("> - a\n> - b\n");
    assert_eq!(tokens[1].kind, TokenKind::BulletListOpen);
    let inlines: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Inline)
        .map(|t| t.content.as_str())
        .collect();
    assert_eq!(inlines, vec!["a", "b"]);
}

#[rstest]
#[case("")]
#[case("\n\n\n")]
fn empty_documents_produce_no_tokens(#[case] md: &str) {
    assert!(parse(md).is_empty());
}

#[test]
fn crlf_line_endings() {
    let tokens = parse("- a\r\n- b\r\n");
    assert_eq!(tokens[0].line_map, Some((0, 2)));
    assert_eq!(tokens[3].content, "a");
}
