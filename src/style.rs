//! Badge style: glyph, colors, and the serializable override profile.
//!
//! The built-in defaults render the stock badge (neon glyph on a dark
//! purple disc). A [`StyleProfile`] is the JSON form users can pass to the
//! binary to override individual fields:
//!
//! ```json
//! { "glyph": "K", "glowColor": "#39d0ff", "background": "#1b2d4e" }
//! ```

use image::Rgba;
use palette::{Hsl, IntoColor, Srgb};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Alpha applied to the derived inner-shadow tint.
const SHADOW_ALPHA: u8 = 180;

/// Lightness removed from the background to obtain the shadow tint.
const SHADOW_DARKEN: f32 = 0.05;

// ============================================================================
// BadgeStyle
// ============================================================================

/// The resolved style a renderer is constructed with.
///
/// Constant across all sizes of one export run.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeStyle {
    /// The single character drawn in the middle of the badge.
    pub glyph: char,
    /// Fill color of the crisp foreground glyph pass.
    pub glyph_color: Rgba<u8>,
    /// Color of the layered glow passes underneath it.
    pub glow_color: Rgba<u8>,
    /// Fill color of the background disc.
    pub background: Rgba<u8>,
}

impl Default for BadgeStyle {
    fn default() -> Self {
        Self {
            glyph: 'R',
            glyph_color: Rgba([0, 255, 136, 255]),
            glow_color: Rgba([0, 255, 136, 255]),
            background: Rgba([45, 27, 78, 255]),
        }
    }
}

impl BadgeStyle {
    /// The translucent inner-shadow tint, derived from the background so
    /// custom profiles keep a consistent depth effect.
    pub fn shadow_tint(&self) -> Rgba<u8> {
        let mut tint = darken(self.background, SHADOW_DARKEN);
        tint[3] = SHADOW_ALPHA;
        tint
    }
}

/// Darkens a color by reducing its HSL lightness.
fn darken(color: Rgba<u8>, amount: f32) -> Rgba<u8> {
    let rgb = Srgb::new(
        color[0] as f32 / 255.0,
        color[1] as f32 / 255.0,
        color[2] as f32 / 255.0,
    );
    let mut hsl: Hsl = rgb.into_color();
    hsl.lightness = (hsl.lightness - amount).max(0.0);
    let darkened: Srgb = hsl.into_color();
    Rgba([
        (darkened.red * 255.0).round() as u8,
        (darkened.green * 255.0).round() as u8,
        (darkened.blue * 255.0).round() as u8,
        color[3],
    ])
}

// ============================================================================
// StyleProfile
// ============================================================================

/// Serializable style override, every field optional.
///
/// Colors are `#rrggbb` hex literals. Unknown fields are rejected: a
/// profile is explicit user input, so silently ignoring a typo would hide
/// the mistake.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StyleProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glyph: Option<char>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub glyph_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub glow_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,

    /// File-name prefix for the exported set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

impl StyleProfile {
    /// Reads and parses a profile file.
    pub fn load(path: &std::path::Path) -> Result<Self, Error> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Parses a profile from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the profile to JSON.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Resolves the profile against the built-in defaults.
    pub fn resolve(&self) -> Result<BadgeStyle, Error> {
        let defaults = BadgeStyle::default();
        Ok(BadgeStyle {
            glyph: self.glyph.unwrap_or(defaults.glyph),
            glyph_color: resolve_color(&self.glyph_color, defaults.glyph_color)?,
            glow_color: resolve_color(&self.glow_color, defaults.glow_color)?,
            background: resolve_color(&self.background, defaults.background)?,
        })
    }
}

fn resolve_color(literal: &Option<String>, default: Rgba<u8>) -> Result<Rgba<u8>, Error> {
    match literal {
        Some(s) => parse_color(s),
        None => Ok(default),
    }
}

/// Parses a `#rrggbb` hex literal into an opaque color.
pub fn parse_color(literal: &str) -> Result<Rgba<u8>, Error> {
    let rgb: Srgb<u8> = literal
        .trim()
        .parse()
        .map_err(|_| Error::Color(literal.to_string()))?;
    Ok(Rgba([rgb.red, rgb.green, rgb.blue, 255]))
}
