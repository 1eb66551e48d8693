//! Immutable, versioned text snapshots
//!
//! A `TextSnapshot` is a point-in-time view of the full buffer content,
//! backed by `ropey::Rope` so clones are cheap. Each snapshot records the
//! text change that produced it from its predecessor, forming a version
//! chain that span translation walks.

use std::sync::Arc;

use ropey::Rope;

use super::tracking::{track_span_through, SpanTrackingMode, TextChange};
use crate::span::{Span, SnapshotSpan};

#[derive(Debug)]
struct SnapshotInner {
    rope: Rope,
    version: u64,
    /// Change that produced this snapshot from `prev` (None for version 0)
    change: Option<TextChange>,
    prev: Option<Arc<SnapshotInner>>,
}

/// An immutable, versioned view of the full text content at one instant.
///
/// Snapshots are values: cloning shares the underlying rope and version
/// chain. Spans are always tied to exactly one snapshot version and must be
/// translated before being compared against a different snapshot.
#[derive(Debug, Clone)]
pub struct TextSnapshot {
    inner: Arc<SnapshotInner>,
}

impl TextSnapshot {
    /// Create the initial snapshot (version 0) from text
    pub fn new(text: &str) -> Self {
        Self {
            inner: Arc::new(SnapshotInner {
                rope: Rope::from_str(text),
                version: 0,
                change: None,
                prev: None,
            }),
        }
    }

    /// Snapshot version, incremented by each edit
    pub fn version(&self) -> u64 {
        self.inner.version
    }

    /// Total length in characters
    pub fn len_chars(&self) -> usize {
        self.inner.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Number of lines (ropey counts the empty line after a trailing newline)
    pub fn line_count(&self) -> usize {
        self.inner.rope.len_lines()
    }

    /// The span covering the whole snapshot
    pub fn full_span(&self) -> Span {
        Span::new(0, self.len_chars())
    }

    /// Line index containing the offset. Offsets past the end clamp to the
    /// last line.
    pub fn line_of_offset(&self, offset: usize) -> usize {
        let clamped = offset.min(self.len_chars());
        self.inner.rope.char_to_line(clamped)
    }

    /// Full extent of a line, start of line to line break (exclusive).
    /// Returns None for out-of-bounds line indices.
    pub fn line_extent(&self, line: usize) -> Option<Span> {
        let rope = &self.inner.rope;
        if line >= rope.len_lines() {
            return None;
        }
        let start = rope.line_to_char(line);
        let slice = rope.line(line);
        let mut len = slice.len_chars();
        // Exclude the line break from the extent
        if len > 0 && slice.char(len - 1) == '\n' {
            len -= 1;
            if len > 0 && slice.char(len - 1) == '\r' {
                len -= 1;
            }
        }
        Some(Span::new(start, start + len))
    }

    /// Extent of the line containing the offset
    pub fn line_extent_at(&self, offset: usize) -> Span {
        self.line_extent(self.line_of_offset(offset))
            .unwrap_or_else(|| Span::new(0, 0))
    }

    /// Text of a sub-range. Out-of-bounds offsets clamp to the snapshot.
    pub fn slice(&self, span: Span) -> String {
        let start = span.start.min(self.len_chars());
        let end = span.end.min(self.len_chars());
        if start >= end {
            return String::new();
        }
        self.inner.rope.slice(start..end).to_string()
    }

    /// Full content as String (may be expensive for large buffers)
    pub fn content(&self) -> String {
        self.inner.rope.to_string()
    }

    /// Iterate over lines as rope slices
    pub fn lines(&self) -> ropey::iter::Lines<'_> {
        self.inner.rope.lines()
    }

    pub(crate) fn byte_to_char(&self, byte: usize) -> usize {
        self.inner.rope.byte_to_char(byte)
    }

    /// Apply a replacement, producing the successor snapshot.
    pub(crate) fn with_edit(&self, old_span: Span, replacement: &str) -> TextSnapshot {
        let len = self.len_chars();
        let start = old_span.start.min(len);
        let end = old_span.end.min(len).max(start);

        let mut rope = self.inner.rope.clone();
        if start < end {
            rope.remove(start..end);
        }
        if !replacement.is_empty() {
            rope.insert(start, replacement);
        }

        let change = TextChange::new(Span::new(start, end), replacement.chars().count());
        Self {
            inner: Arc::new(SnapshotInner {
                rope,
                version: self.inner.version + 1,
                change: Some(change),
                prev: Some(Arc::clone(&self.inner)),
            }),
        }
    }

    /// Re-express a span from an older snapshot in this snapshot's
    /// coordinate space.
    ///
    /// Walks the version chain back to the span's version and applies the
    /// intervening changes in order. Returns None when the span's version is
    /// not an ancestor of this snapshot (the caller treats that as "no
    /// spans", not an error).
    pub fn translate_span(&self, span: SnapshotSpan, mode: SpanTrackingMode) -> Option<Span> {
        if span.version == self.inner.version {
            return Some(self.clamp(span.span));
        }
        if span.version > self.inner.version {
            return None;
        }

        // Collect changes newest-first, then replay oldest-first
        let mut changes = Vec::new();
        let mut cursor = &self.inner;
        loop {
            let change = cursor.change?;
            changes.push(change);
            let prev = cursor.prev.as_ref()?;
            if prev.version == span.version {
                break;
            }
            cursor = prev;
        }
        changes.reverse();

        Some(self.clamp(track_span_through(span.span, &changes, mode)))
    }

    fn clamp(&self, span: Span) -> Span {
        let len = self.len_chars();
        let start = span.start.min(len);
        Span::new(start, span.end.min(len).max(start))
    }
}
