//! Expansion of a finalized concept into the 6 × 7 variation matrix.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::IconCatalog;
use crate::concept::{LayoutKind, LogoConcept};
use crate::error::Result;
use crate::svg::{
    compose_favicon, compose_horizontal, compose_icon_only, compose_lettermark,
    compose_social_avatar, compose_stacked, compose_wordmark_only, ColorMode, SvgDocument,
};
use crate::svg::compose::ICON_ONLY_CANVAS;

// ============================================================================
// VariationType
// ============================================================================

/// One of the six canonical usage forms of a finalized mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum VariationType {
    /// Horizontal lockup, or the concept's own text form without an icon.
    Primary,
    /// Stacked lockup, or the wordmark without an icon.
    Secondary,
    /// Icon alone, or the lettermark without an icon.
    Submark,
    Wordmark,
    /// 32×32 simplified mark.
    Favicon,
    /// Circle-clipped profile image.
    SocialAvatar,
}

impl VariationType {
    pub const ALL: [VariationType; 6] = [
        VariationType::Primary,
        VariationType::Secondary,
        VariationType::Submark,
        VariationType::Wordmark,
        VariationType::Favicon,
        VariationType::SocialAvatar,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VariationType::Primary => "primary",
            VariationType::Secondary => "secondary",
            VariationType::Submark => "submark",
            VariationType::Wordmark => "wordmark",
            VariationType::Favicon => "favicon",
            VariationType::SocialAvatar => "social_avatar",
        }
    }
}

// ============================================================================
// LogoVariationSet
// ============================================================================

/// Rendered markup for every variation type under every colour mode.
///
/// Sets produced by [`generate_logo_variations`] always hold all 42
/// entries. A deserialized set may be partial; check it with
/// [`is_complete`](Self::is_complete) before use.
///
/// # JSON Format
///
/// ```json
/// {
///   "primary": { "full_color_light": "<svg ...>", "grayscale": "<svg ...>" },
///   "favicon": { "mono_black": "<svg ...>" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(transparent)]
pub struct LogoVariationSet {
    renders: BTreeMap<VariationType, BTreeMap<ColorMode, String>>,
}

impl LogoVariationSet {
    /// Number of entries in a complete set.
    pub const COMPLETE_LEN: usize = VariationType::ALL.len() * ColorMode::ALL.len();

    /// Markup for one variation in one colour mode.
    pub fn get(&self, variation: VariationType, mode: ColorMode) -> Option<&str> {
        self.renders
            .get(&variation)
            .and_then(|modes| modes.get(&mode))
            .map(String::as_str)
    }

    /// All colour modes of one variation.
    pub fn variation(&self, variation: VariationType) -> Option<&BTreeMap<ColorMode, String>> {
        self.renders.get(&variation)
    }

    /// Total number of rendered entries.
    pub fn len(&self) -> usize {
        self.renders.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true when every variation type has every colour mode, each
    /// with non-empty markup.
    pub fn is_complete(&self) -> bool {
        VariationType::ALL.iter().all(|variation| {
            ColorMode::ALL
                .iter()
                .all(|mode| self.get(*variation, *mode).is_some_and(|m| !m.is_empty()))
        }) && self.len() == Self::COMPLETE_LEN
    }

    /// Iterates over `(variation, mode, markup)` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (VariationType, ColorMode, &str)> {
        self.renders.iter().flat_map(|(variation, modes)| {
            modes
                .iter()
                .map(move |(mode, markup)| (*variation, *mode, markup.as_str()))
        })
    }
}

// ============================================================================
// Generation
// ============================================================================

/// Builds the canonical document of one variation type.
pub fn variation_document(
    concept: &LogoConcept,
    variation: VariationType,
    catalog: &IconCatalog,
) -> Result<SvgDocument> {
    let params = &concept.params;
    let icon = params.resolve_icon(catalog)?;
    let style = params.text_style();
    let name = params.company_name.as_str();

    let doc = match (variation, icon) {
        (VariationType::Primary, Some(icon)) => compose_horizontal(icon, name, &style),
        (VariationType::Primary, None) if params.layout == LayoutKind::Lettermark => {
            compose_lettermark(name, &style)
        }
        (VariationType::Secondary, Some(icon)) => compose_stacked(icon, name, &style),
        (VariationType::Submark, Some(icon)) => compose_icon_only(icon, &params.color, ICON_ONLY_CANVAS),
        (VariationType::Submark, None) => compose_lettermark(name, &style),
        (VariationType::Favicon, icon) => compose_favicon(icon, name, &style),
        (VariationType::SocialAvatar, icon) => compose_social_avatar(icon, name, &style),
        (VariationType::Primary | VariationType::Secondary | VariationType::Wordmark, _) => {
            compose_wordmark_only(name, &style)
        }
    };
    Ok(doc)
}

/// Expands a concept into all 6 variation types × 7 colour modes.
///
/// Fails only when the concept references an icon missing from `catalog`.
#[tracing::instrument(skip_all, fields(concept = %concept.id))]
pub fn generate_logo_variations(
    concept: &LogoConcept,
    catalog: &IconCatalog,
) -> Result<LogoVariationSet> {
    let mut renders = BTreeMap::new();
    for variation in VariationType::ALL {
        let canonical = variation_document(concept, variation, catalog)?;
        let modes: BTreeMap<ColorMode, String> = ColorMode::ALL
            .into_iter()
            .map(|mode| {
                let mut doc = canonical.clone();
                mode.apply(&mut doc);
                (mode, doc.to_markup())
            })
            .collect();
        renders.insert(variation, modes);
    }

    let set = LogoVariationSet { renders };
    tracing::debug!(entries = set.len(), "generated logo variations");
    Ok(set)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concept::generate_logo_concepts;
    use crate::project::{LogoType, ProjectState};

    fn concept(logo_type: LogoType) -> LogoConcept {
        let mut project = ProjectState::new("Blue River");
        project.industry = "finance".into();
        project.palette.primary = "#3B82F6".into();
        project.palette.secondary = "#F59E0B".into();
        project.logo.logo_type = logo_type;
        generate_logo_concepts(&project, &IconCatalog::builtin()).remove(0)
    }

    #[test]
    fn icon_concept_expands_to_42_entries() {
        let set = generate_logo_variations(&concept(LogoType::IconWordmark), &IconCatalog::builtin())
            .unwrap();
        assert_eq!(set.len(), 42);
        assert!(set.is_complete());
        for (_, _, markup) in set.iter() {
            assert!(markup.starts_with("<svg"));
        }
    }

    #[test]
    fn wordmark_concept_expands_to_42_entries() {
        let set = generate_logo_variations(&concept(LogoType::WordmarkOnly), &IconCatalog::builtin())
            .unwrap();
        assert!(set.is_complete());
        let submark = set.get(VariationType::Submark, ColorMode::FullColorLight).unwrap();
        assert!(submark.contains(">BR</text>"));
    }

    #[test]
    fn colour_modes_are_applied() {
        let set = generate_logo_variations(&concept(LogoType::IconWordmark), &IconCatalog::builtin())
            .unwrap();
        let light = set.get(VariationType::Primary, ColorMode::FullColorLight).unwrap();
        let black = set.get(VariationType::Primary, ColorMode::MonoBlack).unwrap();
        let gray = set.get(VariationType::Primary, ColorMode::Grayscale).unwrap();

        assert!(light.contains("fill=\"#3B82F6\""));
        assert!(!black.contains("#3B82F6"));
        assert!(black.contains("fill=\"#000000\""));
        assert!(gray.contains("fill=\"#7a7a7a\""));
    }

    #[test]
    fn icon_variations_pick_icon_layouts() {
        let concept = concept(LogoType::IconWordmark);
        let catalog = IconCatalog::builtin();
        let submark = variation_document(&concept, VariationType::Submark, &catalog).unwrap();
        assert_eq!(submark.width(), ICON_ONLY_CANVAS);

        let favicon = variation_document(&concept, VariationType::Favicon, &catalog).unwrap();
        assert_eq!((favicon.width(), favicon.height()), (32.0, 32.0));

        let avatar = variation_document(&concept, VariationType::SocialAvatar, &catalog).unwrap();
        assert!(avatar.to_markup().contains("avatar-clip"));
    }

    #[test]
    fn partial_set_is_incomplete() {
        let set = generate_logo_variations(&concept(LogoType::Lettermark), &IconCatalog::builtin())
            .unwrap();
        let mut json: serde_json::Value = serde_json::to_value(&set).unwrap();
        json["favicon"]
            .as_object_mut()
            .unwrap()
            .remove("grayscale");

        let partial: LogoVariationSet = serde_json::from_value(json).unwrap();
        assert_eq!(partial.len(), 41);
        assert!(!partial.is_complete());
        assert!(partial.get(VariationType::Favicon, ColorMode::Grayscale).is_none());
        assert!(LogoVariationSet::default().is_empty());
    }

    #[test]
    fn missing_icon_is_reported() {
        let result = generate_logo_variations(&concept(LogoType::IconWordmark), &IconCatalog::default());
        assert!(result.is_err());
    }
}
