//! Serializable project-state snapshot consumed by the engine.
//!
//! A [`ProjectState`] captures everything the generators read: the company
//! name, palette, typography, personality vector and logo preferences. It is
//! exchanged with the wizard and persistence layers as JSON.
//!
//! Every field carries a serde default, so a partial document (even `{}`)
//! deserializes into a usable snapshot.
//!
//! # Example
//!
//! ```
//! use brandmark::{LogoType, ProjectState};
//!
//! let json = r##"{
//!     "company_name": "Northwind",
//!     "industry": "Technology",
//!     "palette": { "primary": "#3B82F6" },
//!     "logo": { "logo_type": "wordmark_only" }
//! }"##;
//!
//! let project = ProjectState::from_json(json).unwrap();
//! assert_eq!(project.logo.logo_type, LogoType::WordmarkOnly);
//! assert_eq!(project.typography.family, "Inter");
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use crate::concept::LogoConcept;
use crate::svg::color::{luminance, parse_hex};

// ============================================================================
// Palette
// ============================================================================

const DEFAULT_PRIMARY: &str = "#000000";
const DEFAULT_SECONDARY: &str = "#666666";
const DEFAULT_ACCENT: &str = "#999999";
const DEFAULT_LIGHT_NEUTRAL: &str = "#F5F5F5";
const DEFAULT_DARK_NEUTRAL: &str = "#111111";

/// Brand colour palette as hex strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub neutrals: Vec<String>,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY.into(),
            secondary: DEFAULT_SECONDARY.into(),
            accent: DEFAULT_ACCENT.into(),
            neutrals: vec![
                "#F8FAFC".into(),
                "#E2E8F0".into(),
                "#64748B".into(),
                "#0F172A".into(),
            ],
        }
    }
}

impl ColorPalette {
    /// The primary colour, or `#000000` when blank or not a hex colour.
    pub fn primary_or_default(&self) -> &str {
        hex_or(&self.primary, DEFAULT_PRIMARY)
    }

    /// The secondary colour, or `#666666` when blank or not a hex colour.
    pub fn secondary_or_default(&self) -> &str {
        hex_or(&self.secondary, DEFAULT_SECONDARY)
    }

    /// The accent colour, or `#999999` when blank or not a hex colour.
    pub fn accent_or_default(&self) -> &str {
        hex_or(&self.accent, DEFAULT_ACCENT)
    }

    /// Returns the neutral with the highest luminance.
    pub fn lightest_neutral(&self) -> &str {
        self.neutral_by(|a, b| a > b).unwrap_or(DEFAULT_LIGHT_NEUTRAL)
    }

    /// Returns the neutral with the lowest luminance.
    pub fn darkest_neutral(&self) -> &str {
        self.neutral_by(|a, b| a < b).unwrap_or(DEFAULT_DARK_NEUTRAL)
    }

    fn neutral_by(&self, better: impl Fn(u8, u8) -> bool) -> Option<&str> {
        let mut best: Option<(&str, u8)> = None;
        for hex in &self.neutrals {
            let Some(rgb) = parse_hex(hex) else {
                continue;
            };
            let lum = luminance(rgb);
            match best {
                Some((_, current)) if !better(lum, current) => {}
                _ => best = Some((hex.as_str(), lum)),
            }
        }
        best.map(|(hex, _)| hex)
    }
}

fn hex_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    match parse_hex(value) {
        Some(_) => value.trim(),
        None => fallback,
    }
}

// ============================================================================
// Typography
// ============================================================================

/// Broad classification of the primary typeface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum FontCategory {
    Serif,
    #[default]
    SansSerif,
    Display,
    Monospace,
}

impl FontCategory {
    /// Generic CSS family used as the fallback in font stacks.
    pub fn generic_family(self) -> &'static str {
        match self {
            FontCategory::Serif => "serif",
            FontCategory::Monospace => "monospace",
            FontCategory::SansSerif | FontCategory::Display => "sans-serif",
        }
    }
}

/// Font sizes for the heading hierarchy, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct HeadingScale {
    pub h1: f32,
    pub h2: f32,
    pub h3: f32,
    pub body: f32,
}

impl Default for HeadingScale {
    fn default() -> Self {
        Self {
            h1: 48.0,
            h2: 36.0,
            h3: 24.0,
            body: 16.0,
        }
    }
}

/// The brand's typography system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct Typography {
    pub family: String,
    /// Webfont stylesheet URL embedded as an `@import` in emitted documents.
    pub import_url: Option<String>,
    pub category: FontCategory,
    pub weights: Vec<u16>,
    pub heading_scale: HeadingScale,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            family: "Inter".into(),
            import_url: None,
            category: FontCategory::SansSerif,
            weights: vec![400, 700],
            heading_scale: HeadingScale::default(),
        }
    }
}

impl Typography {
    /// Largest available weight at or below 500, or 400.
    pub fn regular_weight(&self) -> u16 {
        self.weights
            .iter()
            .copied()
            .filter(|w| *w <= 500)
            .max()
            .unwrap_or(400)
    }

    /// Smallest available weight at or above 700, or 700.
    pub fn bold_weight(&self) -> u16 {
        self.weights
            .iter()
            .copied()
            .filter(|w| *w >= 700)
            .min()
            .unwrap_or(700)
    }

    /// Font family, falling back to `Inter` when blank.
    pub fn family_or_default(&self) -> &str {
        let family = self.family.trim();
        if family.is_empty() { "Inter" } else { family }
    }

    /// Import URL, ignoring blank values.
    pub fn import_url(&self) -> Option<&str> {
        self.import_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

// ============================================================================
// Personality
// ============================================================================

/// Five-axis brand character descriptor, each axis 0-100.
///
/// Axis order: classic↔modern, calm↔dynamic, serious↔playful,
/// accessible↔premium, minimal↔rich. Serialized as a plain array.
///
/// Slider values arrive as arbitrary JSON numbers; each axis is rounded and
/// clamped into 0-100 when read.
///
/// ```
/// use brandmark::PersonalityVector;
///
/// let vector: PersonalityVector = serde_json::from_str("[72.5, 300, -4, 50, 0]").unwrap();
/// assert_eq!(vector, PersonalityVector::new([73, 100, 0, 50, 0]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(transparent)]
pub struct PersonalityVector(
    #[serde(deserialize_with = "deserialize_axes")]
    #[cfg_attr(feature = "jsonschema", schemars(with = "[f64; 5]"))]
    pub [u8; 5],
);

fn deserialize_axes<'de, D>(deserializer: D) -> Result<[u8; 5], D::Error>
where
    D: Deserializer<'de>,
{
    let raw = <[f64; 5]>::deserialize(deserializer)?;
    Ok(raw.map(|value| value.round().clamp(0.0, 100.0) as u8))
}

impl Default for PersonalityVector {
    fn default() -> Self {
        Self([50; 5])
    }
}

impl PersonalityVector {
    pub fn new(axes: [u8; 5]) -> Self {
        Self(axes)
    }

    fn axis(&self, index: usize) -> u8 {
        self.0[index].min(100)
    }

    pub fn classic_modern(&self) -> u8 {
        self.axis(0)
    }

    pub fn calm_dynamic(&self) -> u8 {
        self.axis(1)
    }

    pub fn serious_playful(&self) -> u8 {
        self.axis(2)
    }

    pub fn accessible_premium(&self) -> u8 {
        self.axis(3)
    }

    pub fn minimal_rich(&self) -> u8 {
        self.axis(4)
    }
}

// ============================================================================
// Logo preferences
// ============================================================================

/// The kind of mark the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum LogoType {
    WordmarkOnly,
    Lettermark,
    #[default]
    IconWordmark,
    Abstract,
}

impl LogoType {
    /// Returns true for styles that pair text with a catalog icon.
    pub fn uses_icon(self) -> bool {
        matches!(self, LogoType::IconWordmark | LogoType::Abstract)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LogoType::WordmarkOnly => "wordmark_only",
            LogoType::Lettermark => "lettermark",
            LogoType::IconWordmark => "icon_wordmark",
            LogoType::Abstract => "abstract",
        }
    }
}

/// User selections from the logo stage of the wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct LogoPreferences {
    pub logo_type: LogoType,
    /// Free-text icon style preference (`geometric`, `outlined`, `filled`, ...).
    pub icon_style: String,
    /// Up to five selected keywords.
    pub keywords: Vec<String>,
}

impl Default for LogoPreferences {
    fn default() -> Self {
        Self {
            logo_type: LogoType::IconWordmark,
            icon_style: "geometric".into(),
            keywords: Vec::new(),
        }
    }
}

// ============================================================================
// ProjectState
// ============================================================================

/// Snapshot of a brand project as read by the generators.
///
/// # JSON Format
///
/// ```json
/// {
///   "company_name": "Northwind",
///   "industry": "technology",
///   "palette": { "primary": "#3B82F6", "secondary": "#1E293B" },
///   "typography": { "family": "Inter", "weights": [400, 700] },
///   "personality_vector": [70, 40, 50, 60, 30],
///   "logo": { "logo_type": "icon_wordmark", "keywords": ["network"] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct ProjectState {
    pub company_name: String,
    pub industry: String,
    pub palette: ColorPalette,
    pub typography: Typography,
    pub personality_vector: PersonalityVector,
    pub logo: LogoPreferences,
    /// The concept chosen by the user; required for variation and rules output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finalized_concept: Option<LogoConcept>,
}

impl Default for ProjectState {
    fn default() -> Self {
        Self {
            company_name: "Brand".into(),
            industry: String::new(),
            palette: ColorPalette::default(),
            typography: Typography::default(),
            personality_vector: PersonalityVector::default(),
            logo: LogoPreferences::default(),
            finalized_concept: None,
        }
    }
}

impl ProjectState {
    /// Creates a default project for the given company name.
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            ..Self::default()
        }
    }

    /// Company name, falling back to `Brand` when blank.
    pub fn name(&self) -> &str {
        let name = self.company_name.trim();
        if name.is_empty() { "Brand" } else { name }
    }

    /// Sets the finalized concept.
    pub fn with_finalized_concept(mut self, concept: LogoConcept) -> Self {
        self.finalized_concept = Some(concept);
        self
    }

    /// Serializes the project to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the project to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a project from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_project_deserializes_to_defaults() {
        let project = ProjectState::from_json("{}").unwrap();

        assert_eq!(project.name(), "Brand");
        assert_eq!(project.palette.primary, "#000000");
        assert_eq!(project.typography.family, "Inter");
        assert_eq!(project.personality_vector, PersonalityVector([50; 5]));
        assert_eq!(project.logo.logo_type, LogoType::IconWordmark);
        assert!(project.finalized_concept.is_none());
    }

    #[test]
    fn partial_palette_keeps_other_defaults() {
        let project =
            ProjectState::from_json(r##"{"palette": {"primary": "#3B82F6"}}"##).unwrap();

        assert_eq!(project.palette.primary, "#3B82F6");
        assert_eq!(project.palette.secondary, "#666666");
        assert_eq!(project.palette.neutrals.len(), 4);
    }

    #[test]
    fn project_json_uses_snake_case() {
        let json = ProjectState::new("Acme").to_json_pretty().unwrap();

        assert!(json.contains("\"company_name\""));
        assert!(json.contains("\"personality_vector\""));
        assert!(json.contains("\"icon_wordmark\""));
        assert!(!json.contains("finalized_concept"));
    }

    #[test]
    fn blank_name_falls_back() {
        assert_eq!(ProjectState::new("   ").name(), "Brand");
        assert_eq!(ProjectState::new(" Acme ").name(), "Acme");
    }

    #[test]
    fn weight_selection() {
        let typography = Typography {
            weights: vec![300, 500, 600, 800, 900],
            ..Typography::default()
        };
        assert_eq!(typography.regular_weight(), 500);
        assert_eq!(typography.bold_weight(), 800);

        let sparse = Typography {
            weights: vec![600],
            ..Typography::default()
        };
        assert_eq!(sparse.regular_weight(), 400);
        assert_eq!(sparse.bold_weight(), 700);
    }

    #[test]
    fn neutral_extremes_by_luminance() {
        let palette = ColorPalette::default();
        assert_eq!(palette.lightest_neutral(), "#F8FAFC");
        assert_eq!(palette.darkest_neutral(), "#0F172A");

        let empty = ColorPalette {
            neutrals: vec!["not-a-colour".into()],
            ..ColorPalette::default()
        };
        assert_eq!(empty.lightest_neutral(), "#F5F5F5");
        assert_eq!(empty.darkest_neutral(), "#111111");
    }

    #[test]
    fn personality_axes_are_clamped() {
        let vector = PersonalityVector::new([120, 10, 20, 30, 255]);
        assert_eq!(vector.classic_modern(), 100);
        assert_eq!(vector.calm_dynamic(), 10);
        assert_eq!(vector.minimal_rich(), 100);
    }

    #[test]
    fn personality_accepts_any_slider_number() {
        let project =
            ProjectState::from_json(r#"{"personality_vector": [72.5, 40, 50, 60, 30]}"#).unwrap();
        assert_eq!(project.personality_vector.classic_modern(), 73);
        assert_eq!(project.personality_vector.calm_dynamic(), 40);

        let project =
            ProjectState::from_json(r#"{"personality_vector": [300, -20, 50, 100.4, 0]}"#).unwrap();
        assert_eq!(project.personality_vector, PersonalityVector::new([100, 0, 50, 100, 0]));
    }

    #[test]
    fn blank_palette_colours_read_as_defaults() {
        let project = ProjectState::from_json(
            r##"{"palette": {"primary": "", "secondary": "teal", "accent": " #F59E0B "}}"##,
        )
        .unwrap();

        assert_eq!(project.palette.primary, "");
        assert_eq!(project.palette.primary_or_default(), "#000000");
        assert_eq!(project.palette.secondary_or_default(), "#666666");
        assert_eq!(project.palette.accent_or_default(), "#F59E0B");
    }

    #[test]
    fn personality_serializes_as_array() {
        let json = serde_json::to_string(&PersonalityVector::new([1, 2, 3, 4, 5])).unwrap();
        assert_eq!(json, "[1,2,3,4,5]");
    }
}
