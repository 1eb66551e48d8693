//! The marker span index
//!
//! `MarkerTagger` maintains the current span set for the current snapshot,
//! rebuilds it when the host reports a content change, and answers range
//! queries with tagged spans. The host drives the lifecycle: the set is
//! built once at construction, the tagger arms itself on the view's first
//! focus, and every snapshot advance after that rebuilds the set and fires
//! the tags-changed subscription over the whole new snapshot.

use crate::config::TaggerConfig;
use crate::search;
use crate::span::{SnapshotSpan, Span, SpanSet};
use crate::text::{SpanTrackingMode, TextSnapshot};

/// Whether the tagger has started listening for content changes.
///
/// The transition is one-shot: the first focus notification moves
/// `Unarmed` to `Armed`, and the tagger stays armed for the rest of its
/// lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationState {
    /// Waiting for first focus; queries answer from the construction-time
    /// span set
    Unarmed,
    /// Listening for content changes
    Armed,
}

/// The single classification attached to every produced span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerTag {
    pub name: String,
}

/// A tagged span in the index's current snapshot coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSpan {
    pub span: Span,
    pub tag: MarkerTag,
}

type TagsChangedFn = Box<dyn FnMut(SnapshotSpan)>;

/// Compute the normalized set of marker line extents for a snapshot.
///
/// Every whole-word, case-sensitive occurrence of any phrase expands to its
/// containing line's full extent. The result is a pure function of the
/// snapshot content and the phrase list; an absent snapshot yields the
/// empty set.
pub fn build_marker_spans(snapshot: Option<&TextSnapshot>, phrases: &[String]) -> SpanSet {
    let Some(snapshot) = snapshot else {
        return SpanSet::empty(0);
    };

    let mut extents = Vec::new();
    for phrase in phrases {
        for hit in search::find_all(snapshot, phrase) {
            extents.push(snapshot.line_extent_at(hit.start));
        }
    }
    SpanSet::new(snapshot.version(), extents)
}

/// Live index of marker comment lines, queryable by range.
pub struct MarkerTagger {
    config: TaggerConfig,
    snapshot: Option<TextSnapshot>,
    current: SpanSet,
    state: ActivationState,
    subscribers: Vec<TagsChangedFn>,
}

impl MarkerTagger {
    /// Create a tagger and build the initial span set from `snapshot`.
    pub fn new(snapshot: Option<TextSnapshot>, config: TaggerConfig) -> Self {
        let current = build_marker_spans(snapshot.as_ref(), &config.marker_phrases);
        tracing::debug!(spans = current.len(), "marker tagger created");
        Self {
            config,
            snapshot,
            current,
            state: ActivationState::Unarmed,
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> ActivationState {
        self.state
    }

    pub fn config(&self) -> &TaggerConfig {
        &self.config
    }

    /// The current normalized span set
    pub fn current_spans(&self) -> &SpanSet {
        &self.current
    }

    /// Subscribe to tags-changed notifications. The subscriber receives the
    /// affected range, which always covers the whole new snapshot.
    pub fn on_tags_changed(&mut self, subscriber: impl FnMut(SnapshotSpan) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// The view gained input focus. The first call arms the tagger; later
    /// calls are no-ops.
    pub fn focus_gained(&mut self) {
        if self.state == ActivationState::Unarmed {
            self.state = ActivationState::Armed;
            tracing::debug!("marker tagger armed");
        }
    }

    /// The view's content changed from snapshot `old` to snapshot `new`.
    ///
    /// Ignored until the tagger is armed, and when the snapshot did not
    /// actually advance. Otherwise the span set is rebuilt and every
    /// subscriber is notified with the full range of the new snapshot.
    pub fn layout_changed(&mut self, old: &TextSnapshot, new: &TextSnapshot) {
        if self.state != ActivationState::Armed {
            return;
        }
        if old.version() == new.version() {
            return;
        }

        self.current = build_marker_spans(Some(new), &self.config.marker_phrases);
        self.snapshot = Some(new.clone());
        tracing::debug!(
            version = new.version(),
            spans = self.current.len(),
            "marker spans rebuilt"
        );

        let affected = SnapshotSpan::new(new.full_span(), new.version());
        for subscriber in &mut self.subscribers {
            subscriber(affected);
        }
    }

    /// Tagged spans intersecting the requested ranges.
    ///
    /// Requested spans may be expressed against an older snapshot; they are
    /// translated into the index's current snapshot with edge-exclusive
    /// tracking first. An empty request, an empty index, or a request whose
    /// snapshot version is unreachable all produce an empty sequence.
    pub fn get_tags(&self, requested: &[SnapshotSpan]) -> Tags<'_> {
        if requested.is_empty() || self.current.is_empty() {
            return Tags::empty(&self.config.tag_name);
        }
        let Some(snapshot) = &self.snapshot else {
            return Tags::empty(&self.config.tag_name);
        };

        let translated: Vec<Span> = requested
            .iter()
            .filter_map(|span| snapshot.translate_span(*span, SpanTrackingMode::EdgeExclusive))
            .collect();
        let normalized = SpanSet::new(snapshot.version(), translated);

        Tags {
            current: self.current.spans(),
            requested: normalized.into_spans(),
            tag_name: &self.config.tag_name,
            i: 0,
            j: 0,
        }
    }
}

/// Lazy, finite sequence of tagged spans: the intersection of the requested
/// ranges with the current span set.
///
/// Restartable by cloning before iteration. Both inputs are normalized and
/// sorted, so the walk advances two cursors and never backtracks.
#[derive(Debug, Clone)]
pub struct Tags<'a> {
    current: &'a [Span],
    requested: Vec<Span>,
    tag_name: &'a str,
    i: usize,
    j: usize,
}

impl<'a> Tags<'a> {
    fn empty(tag_name: &'a str) -> Self {
        Self {
            current: &[],
            requested: Vec::new(),
            tag_name,
            i: 0,
            j: 0,
        }
    }
}

impl Iterator for Tags<'_> {
    type Item = TagSpan;

    fn next(&mut self) -> Option<TagSpan> {
        while self.i < self.current.len() && self.j < self.requested.len() {
            let a = self.current[self.i];
            let b = self.requested[self.j];
            let overlap = a.intersection(&b);

            // Advance whichever span ends first
            if a.end <= b.end {
                self.i += 1;
            } else {
                self.j += 1;
            }

            if let Some(span) = overlap {
                return Some(TagSpan {
                    span,
                    tag: MarkerTag {
                        name: self.tag_name.to_string(),
                    },
                });
            }
        }
        None
    }
}
