//! Tagger configuration
//!
//! The marker phrases and classification name are fixed constants in the
//! reference behavior. They are still passed in explicitly so the one-shot
//! wiring stays testable with other phrase sets.

use crate::style::MarkerStyle;

/// Marker phrase opening a suppression region
pub const DISABLE_MARKER: &str = "// ReSharper disable";
/// Marker phrase closing a suppression region
pub const RESTORE_MARKER: &str = "// ReSharper restore";
/// Classification name attached to every produced tag
pub const MARKER_TAG_NAME: &str = "resharper-comment";

/// Immutable settings supplied by whoever wires up the tagger.
#[derive(Debug, Clone)]
pub struct TaggerConfig {
    /// Literal phrases whose whole-word occurrence marks a line
    pub marker_phrases: Vec<String>,
    /// Classification name for produced tags
    pub tag_name: String,
    /// Visual style the host registers for that classification
    pub style: MarkerStyle,
}

impl Default for TaggerConfig {
    fn default() -> Self {
        Self {
            marker_phrases: vec![DISABLE_MARKER.to_string(), RESTORE_MARKER.to_string()],
            tag_name: MARKER_TAG_NAME.to_string(),
            style: MarkerStyle::default(),
        }
    }
}
