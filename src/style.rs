//! Visual style for the marker classification
//!
//! The host registers exactly one format for marker comment lines. The
//! reference style is a DimGray foreground named "Highlight ReSharper
//! Comments", ordered after high-priority styles so it wins over ordinary
//! comment coloring.
//!
//! Styles are YAML-defined like editor themes; the reference style is
//! embedded at compile time and also available as [`MarkerStyle::default`].

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// The embedded reference style definition
pub const DEFAULT_STYLE_YAML: &str = include_str!("../styles/resharper-comment.yaml");

/// RGB color (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse from a "#RRGGBB" hex string
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.trim_start_matches('#');
        if hex.len() != 6 {
            bail!("invalid color format: {}", s);
        }
        Ok(Color {
            r: u8::from_str_radix(&hex[0..2], 16).with_context(|| format!("bad red in {}", s))?,
            g: u8::from_str_radix(&hex[2..4], 16).with_context(|| format!("bad green in {}", s))?,
            b: u8::from_str_radix(&hex[4..6], 16).with_context(|| format!("bad blue in {}", s))?,
        })
    }
}

/// DimGray, the reference foreground for marker comment lines
pub const DIM_GRAY: Color = Color::rgb(0x69, 0x69, 0x69);

/// Anchor the style sorts after when the host orders its formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylePriority {
    Low,
    Default,
    High,
}

/// Raw style data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
struct StyleData {
    name: String,
    display_name: String,
    foreground: String,
    #[serde(default = "default_order_after")]
    order_after: StylePriority,
}

fn default_order_after() -> StylePriority {
    StylePriority::High
}

/// Resolved marker style with parsed color.
///
/// Registered once by the host at load time; constant afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerStyle {
    /// Classification name the style binds to (matches the tag name)
    pub name: String,
    /// User-visible name in the host's style settings
    pub display_name: String,
    pub foreground: Color,
    pub order_after: StylePriority,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            name: "resharper-comment".to_string(),
            display_name: "Highlight ReSharper Comments".to_string(),
            foreground: DIM_GRAY,
            order_after: StylePriority::High,
        }
    }
}

impl MarkerStyle {
    /// Parse a style definition from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let data: StyleData = serde_yaml::from_str(yaml).context("failed to parse style YAML")?;
        Ok(Self {
            foreground: Color::from_hex(&data.foreground)
                .with_context(|| format!("style {}", data.name))?,
            name: data.name,
            display_name: data.display_name,
            order_after: data.order_after,
        })
    }

    /// Load a style definition from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read style file {}", path.display()))?;
        Self::from_yaml(&content)
    }
}
