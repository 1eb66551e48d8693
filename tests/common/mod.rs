//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::sync::Once;

use resharper_marks::{
    MarkerTagger, SnapshotSpan, TagSpan, TaggerConfig, TextBuffer, TextSnapshot,
};

static TRACING: Once = Once::new();

/// Initialize test logging once. Respects RUST_LOG for filtering.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .init();
    });
}

/// Buffer plus a tagger over its initial snapshot, already armed
pub fn armed_tagger(text: &str) -> (TextBuffer, MarkerTagger) {
    init_tracing();
    let buffer = TextBuffer::new(text);
    let mut tagger = MarkerTagger::new(Some(buffer.current()), TaggerConfig::default());
    tagger.focus_gained();
    (buffer, tagger)
}

/// Tagger over a fresh buffer, still unarmed
pub fn unarmed_tagger(text: &str) -> (TextBuffer, MarkerTagger) {
    init_tracing();
    let buffer = TextBuffer::new(text);
    let tagger = MarkerTagger::new(Some(buffer.current()), TaggerConfig::default());
    (buffer, tagger)
}

/// Collect all tags for the full range of a snapshot
pub fn tags_over(tagger: &MarkerTagger, snapshot: &TextSnapshot) -> Vec<TagSpan> {
    let request = [SnapshotSpan::new(snapshot.full_span(), snapshot.version())];
    tagger.get_tags(&request).collect()
}
