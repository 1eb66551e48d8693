//! Live highlight spans for ReSharper disable/restore marker comments
//!
//! This crate provides the span index behind a "highlight ReSharper
//! comments" editor feature: given a text snapshot it finds every line
//! containing `// ReSharper disable` or `// ReSharper restore` as a
//! whole-word, case-sensitive match, keeps that set current as the text
//! changes, and answers range queries with classified spans a host editor
//! can style.
//!
//! # Example
//!
//! ```
//! use resharper_marks::{MarkerTagger, SnapshotSpan, TaggerConfig, TextBuffer};
//!
//! let buffer = TextBuffer::new("// ReSharper disable All\nfn main() {}\n");
//! let tagger = MarkerTagger::new(Some(buffer.current()), TaggerConfig::default());
//!
//! let request = [SnapshotSpan::new(buffer.current().full_span(), buffer.version())];
//! let tags: Vec<_> = tagger.get_tags(&request).collect();
//! assert_eq!(tags.len(), 1);
//! ```

pub mod config;
pub mod search;
pub mod span;
pub mod style;
pub mod tagger;
pub mod text;

// Re-export commonly used types
pub use config::TaggerConfig;
pub use span::{SnapshotSpan, Span, SpanSet};
pub use style::{Color, MarkerStyle, StylePriority};
pub use tagger::{build_marker_spans, ActivationState, MarkerTag, MarkerTagger, TagSpan, Tags};
pub use text::{SpanTrackingMode, TextBuffer, TextChange, TextSnapshot};
