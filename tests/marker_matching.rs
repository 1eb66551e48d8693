//! Matching properties of the span builder: whole-word, case-sensitive,
//! full-line extents, pure and idempotent.

mod common;

use resharper_marks::{build_marker_spans, Span, TaggerConfig, TextSnapshot};

fn build(text: &str) -> Vec<Span> {
    common::init_tracing();
    let snap = TextSnapshot::new(text);
    build_marker_spans(Some(&snap), &TaggerConfig::default().marker_phrases)
        .spans()
        .to_vec()
}

#[test]
fn marker_lines_become_full_line_extents() {
    let text = "\
// ReSharper disable UnusedMember.Global
class Foo {}
// ReSharper restore UnusedMember.Global
";
    let spans = build(text);
    let snap = TextSnapshot::new(text);
    assert_eq!(
        spans,
        vec![snap.line_extent(0).unwrap(), snap.line_extent(2).unwrap()]
    );
}

#[test]
fn lines_without_markers_are_not_marked() {
    let spans = build("class Foo {}\n// plain comment\nlet x = 1;\n");
    assert!(spans.is_empty());
}

#[test]
fn marker_in_line_middle_marks_whole_line() {
    let text = "let x = 1; // ReSharper disable once UnusedVariable\n";
    let spans = build(text);
    let snap = TextSnapshot::new(text);
    assert_eq!(spans, vec![snap.line_extent(0).unwrap()]);
}

#[test]
fn superstring_phrase_is_not_matched() {
    assert!(build("// ReSharper disabled Foo\n").is_empty());
    assert!(build("// ReSharper restored Foo\n").is_empty());
}

#[test]
fn wrong_case_is_not_matched() {
    assert!(build("// resharper disable Foo\n").is_empty());
    assert!(build("// RESHARPER DISABLE Foo\n").is_empty());
}

#[test]
fn marker_glued_to_word_character_is_not_matched() {
    assert!(build("id// ReSharper disable Foo\n").is_empty());
    assert!(build("_// ReSharper restore Foo\n").is_empty());
}

#[test]
fn marker_after_non_word_character_is_matched() {
    assert_eq!(build("}// ReSharper disable Foo\n").len(), 1);
    assert_eq!(build("\t// ReSharper restore Foo\n").len(), 1);
}

#[test]
fn marker_without_trailing_newline_is_matched() {
    let text = "code;\n// ReSharper restore All";
    let spans = build(text);
    assert_eq!(spans, vec![Span::new(6, 30)]);
}

#[test]
fn build_is_idempotent_and_ordered() {
    let text = "// ReSharper restore B\nx\n// ReSharper disable A\n";
    let first = build(text);
    let second = build(text);
    assert_eq!(first, second);
    // Sorted by start offset, regardless of phrase order
    assert!(first.windows(2).all(|w| w[0].start < w[1].start));
}

#[test]
fn disable_and_restore_on_same_line_produce_one_extent() {
    let spans = build("// ReSharper disable X // ReSharper restore X\n");
    assert_eq!(spans.len(), 1);
}
