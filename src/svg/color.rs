//! Colour modes and hex colour helpers.
//!
//! A [`ColorMode`] rewrites every `fill="#…"` in a document. The rewrite is
//! uniform: it does not tell a mark's foreground fill apart from a background
//! rectangle sharing the document, which is the documented behaviour of the
//! presentation modes.

use palette::{Hsl, IntoColor, Srgb};
use serde::{Deserialize, Serialize};

use super::{Element, SvgDocument};
use crate::error::Result;

const WHITE: &str = "#FFFFFF";
const BLACK: &str = "#000000";

// ============================================================================
// ColorMode
// ============================================================================

/// One of the seven canonical presentations of a finalized mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// Brand colours on a light background (unchanged).
    FullColorLight,
    /// Brand colours on a dark background (unchanged).
    FullColorDark,
    /// White mark for placement on the primary brand colour.
    FullColorOnBrand,
    /// White mark for dark photography or fills.
    Reversed,
    MonoBlack,
    MonoWhite,
    /// Luminance-preserving gray conversion.
    Grayscale,
}

impl ColorMode {
    /// All modes in canonical order.
    pub const ALL: [ColorMode; 7] = [
        ColorMode::FullColorLight,
        ColorMode::FullColorDark,
        ColorMode::FullColorOnBrand,
        ColorMode::Reversed,
        ColorMode::MonoBlack,
        ColorMode::MonoWhite,
        ColorMode::Grayscale,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::FullColorLight => "full_color_light",
            ColorMode::FullColorDark => "full_color_dark",
            ColorMode::FullColorOnBrand => "full_color_on_brand",
            ColorMode::Reversed => "reversed",
            ColorMode::MonoBlack => "mono_black",
            ColorMode::MonoWhite => "mono_white",
            ColorMode::Grayscale => "grayscale",
        }
    }

    /// Applies this mode to a document in place.
    pub fn apply(self, doc: &mut SvgDocument) {
        match self {
            ColorMode::FullColorLight | ColorMode::FullColorDark => {}
            ColorMode::FullColorOnBrand | ColorMode::Reversed | ColorMode::MonoWhite => {
                rewrite_fills(&mut doc.root, |_| Some(WHITE.to_string()))
            }
            ColorMode::MonoBlack => rewrite_fills(&mut doc.root, |_| Some(BLACK.to_string())),
            ColorMode::Grayscale => rewrite_fills(&mut doc.root, grayscale_hex),
        }
    }
}

/// Applies a colour mode to serialized markup.
///
/// Fails only when `markup` cannot be parsed as an SVG document.
pub fn apply_color_mode(markup: &str, mode: ColorMode) -> Result<String> {
    let mut doc = SvgDocument::parse(markup)?;
    mode.apply(&mut doc);
    Ok(doc.to_markup())
}

/// Replaces every hex `fill` value in `root` and its descendants.
///
/// Non-hex values (`none`, `url(#…)`, `currentColor`) are left alone, as is
/// any hex value the mapping declines.
pub(crate) fn rewrite_fills(root: &mut Element, map: impl Fn(&str) -> Option<String>) {
    root.visit_mut(&mut |el| {
        let Some(fill) = el.get_attr("fill") else {
            return;
        };
        if !fill.starts_with('#') {
            return;
        }
        if let Some(replacement) = map(fill) {
            el.set_attr("fill", replacement);
        }
    });
}

// ============================================================================
// Hex helpers
// ============================================================================

/// Parses `#rgb` or `#rrggbb`.
pub fn parse_hex(hex: &str) -> Option<Srgb<u8>> {
    let digits = hex.trim().strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    digits.parse().ok()
}

/// Formats a colour as lowercase `#rrggbb`.
pub fn to_hex(rgb: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
}

/// Perceived luminance, `round(0.299R + 0.587G + 0.114B)`.
pub fn luminance(rgb: Srgb<u8>) -> u8 {
    let value =
        0.299 * f64::from(rgb.red) + 0.587 * f64::from(rgb.green) + 0.114 * f64::from(rgb.blue);
    value.round().clamp(0.0, 255.0) as u8
}

/// Converts a hex colour to the gray of equal luminance.
///
/// Achromatic input maps to itself, so the conversion is idempotent.
/// Returns `None` for values that are not hex colours.
pub fn grayscale_hex(hex: &str) -> Option<String> {
    let Some(rgb) = parse_hex(hex) else {
        tracing::warn!(value = hex, "skipping unparseable fill colour");
        return None;
    };
    let gray = luminance(rgb);
    Some(to_hex(Srgb::new(gray, gray, gray)))
}

/// Rotates the hue of a hex colour, returning lowercase hex.
///
/// Colours with almost no saturation have no meaningful hue; `None` is
/// returned for them so callers can pick an explicit substitute.
pub fn rotate_hue(hex: &str, degrees: f32) -> Option<String> {
    let rgb = parse_hex(hex)?;
    let rgb = Srgb::new(
        rgb.red as f32 / 255.0,
        rgb.green as f32 / 255.0,
        rgb.blue as f32 / 255.0,
    );
    let mut hsl: Hsl = rgb.into_color();
    if hsl.saturation < 0.1 {
        return None;
    }
    hsl.hue += degrees;
    let rotated: Srgb = hsl.into_color();
    Some(to_hex(Srgb::new(
        (rotated.red.clamp(0.0, 1.0) * 255.0).round() as u8,
        (rotated.green.clamp(0.0, 1.0) * 255.0).round() as u8,
        (rotated.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
    )))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_FILLS: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10" viewBox="0 0 10 10"><rect width="10" height="10" fill="#3B82F6"/><path d="M0 0 L5 5" fill="#F59E0B"/><path d="M1 1" fill="none"/></svg>"##;

    fn fills(markup: &str) -> Vec<String> {
        let doc = SvgDocument::parse(markup).unwrap();
        let mut out = Vec::new();
        doc.root.visit(&mut |el| {
            if let Some(fill) = el.get_attr("fill") {
                out.push(fill.to_string());
            }
        });
        out
    }

    #[test]
    fn grayscale_matches_reference_value() {
        assert_eq!(grayscale_hex("#3B82F6").as_deref(), Some("#7a7a7a"));
    }

    #[test]
    fn grayscale_is_idempotent_on_markup() {
        let once = apply_color_mode(TWO_FILLS, ColorMode::Grayscale).unwrap();
        let twice = apply_color_mode(&once, ColorMode::Grayscale).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn grayscale_handles_short_hex() {
        // #abc == #aabbcc
        assert_eq!(grayscale_hex("#abc"), grayscale_hex("#aabbcc"));
        assert_eq!(grayscale_hex("#zzz"), None);
        assert_eq!(grayscale_hex("red"), None);
    }

    #[test]
    fn mono_black_rewrites_every_hex_fill() {
        let out = apply_color_mode(TWO_FILLS, ColorMode::MonoBlack).unwrap();
        assert_eq!(fills(&out), ["#000000", "#000000", "none"]);
    }

    #[test]
    fn white_modes_rewrite_every_hex_fill() {
        for mode in [ColorMode::FullColorOnBrand, ColorMode::Reversed, ColorMode::MonoWhite] {
            let out = apply_color_mode(TWO_FILLS, mode).unwrap();
            assert_eq!(fills(&out), ["#FFFFFF", "#FFFFFF", "none"], "{mode:?}");
        }
    }

    #[test]
    fn full_color_modes_are_identity() {
        for mode in [ColorMode::FullColorLight, ColorMode::FullColorDark] {
            assert_eq!(apply_color_mode(TWO_FILLS, mode).unwrap(), TWO_FILLS);
        }
    }

    #[test]
    fn non_hex_fills_are_untouched() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4"><rect fill="url(#p)"/></svg>"##;
        let out = apply_color_mode(svg, ColorMode::MonoBlack).unwrap();
        assert!(out.contains(r##"fill="url(#p)""##));
    }

    #[test]
    fn malformed_markup_is_an_error() {
        assert!(apply_color_mode("<svg", ColorMode::Grayscale).is_err());
    }

    #[test]
    fn mode_keys_are_snake_case() {
        let keys: Vec<_> = ColorMode::ALL
            .iter()
            .map(|m| serde_json::to_string(m).unwrap())
            .collect();
        assert_eq!(keys[0], "\"full_color_light\"");
        assert_eq!(keys[6], "\"grayscale\"");
        for mode in ColorMode::ALL {
            assert_eq!(serde_json::to_string(&mode).unwrap(), format!("\"{}\"", mode.as_str()));
        }
    }

    #[test]
    fn hue_rotation_moves_chromatic_colours_only() {
        // Pure red rotated half way round is cyan.
        assert_eq!(rotate_hue("#FF0000", 180.0).as_deref(), Some("#00ffff"));
        assert_eq!(rotate_hue("#808080", 180.0), None);
    }

    #[test]
    fn luminance_of_gray_is_identity() {
        for v in [0u8, 1, 17, 122, 200, 255] {
            assert_eq!(luminance(Srgb::new(v, v, v)), v);
        }
    }
}
