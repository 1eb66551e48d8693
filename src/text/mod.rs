//! Text snapshot model for the marker tagger.
//!
//! The core pieces are:
//!
//! - [`TextSnapshot`]: immutable, versioned view of full text content,
//!   backed by `ropey::Rope`
//! - [`TextBuffer`]: mutable owner that applies edits and mints snapshots
//! - [`TextChange`] / [`SpanTrackingMode`]: how spans from an older snapshot
//!   are re-expressed against a newer one

mod buffer;
mod snapshot;
mod tracking;

pub use buffer::TextBuffer;
pub use snapshot::TextSnapshot;
pub use tracking::{track_span, track_span_through, SpanTrackingMode, TextChange};
