//! Literal whole-word search over a snapshot
//!
//! The marker phrases are plain literals, so matching is an exhaustive
//! case-sensitive substring scan with a word-boundary check at both edges.
//! A match is accepted only when the characters immediately before and
//! after it are absent or non-word.

use crate::span::Span;
use crate::text::TextSnapshot;

/// Word characters for boundary purposes: alphanumerics and underscore.
/// `// ReSharper disabled` must not match the `disable` phrase, while a
/// marker at the start of a line or after punctuation must.
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Find every whole-word, case-sensitive occurrence of `phrase` in the
/// snapshot, as match spans in snapshot coordinates.
///
/// The phrase never contains a line break, so the scan walks the snapshot
/// line by line. An empty phrase matches nothing.
pub fn find_all(snapshot: &TextSnapshot, phrase: &str) -> Vec<Span> {
    if phrase.is_empty() {
        return Vec::new();
    }

    let phrase_chars = phrase.chars().count();
    let mut matches = Vec::new();

    for (line_idx, line) in snapshot.lines().enumerate() {
        let line_str = line.to_string();
        let mut start = 0;
        while let Some(pos) = line_str[start..].find(phrase) {
            let at = start + pos;
            if has_word_boundaries(&line_str, at, phrase.len()) {
                let line_start = snapshot.line_extent(line_idx).map(|e| e.start).unwrap_or(0);
                let col = line_str[..at].chars().count();
                matches.push(Span::new(
                    line_start + col,
                    line_start + col + phrase_chars,
                ));
            }
            start = at + phrase.len();
        }
    }

    matches
}

/// Check that the byte range `[at, at + len)` in `line` is not glued to a
/// word character on either side.
fn has_word_boundaries(line: &str, at: usize, len: usize) -> bool {
    let before_ok = line[..at].chars().next_back().map_or(true, |c| !is_word_char(c));
    let after_ok = line[at + len..].chars().next().map_or(true, |c| !is_word_char(c));
    before_ok && after_ok
}
