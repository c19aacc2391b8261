//! Candidate logo concepts and the combinatorial generator behind them.
//!
//! Every concept keeps the full [`StyleParams`] record it was rendered from.
//! Re-rendering those parameters against the same catalog reproduces the
//! concept's markup byte for byte, which is what refinement and the
//! variation stage rely on.

use serde::{Deserialize, Serialize};

use crate::catalog::{Brief, IconCatalog, IconEntry};
use crate::error::Result;
use crate::project::{LogoType, ProjectState};
use crate::svg::TextTransform::{Lowercase, Title, Uppercase};
use crate::svg::{
    compose_horizontal, compose_lettermark, compose_stacked, compose_wordmark_only, SvgDocument,
    TextStyle, TextTransform,
};

use self::ColorRole::{Primary, Secondary};
use self::Weight::{Bold, Regular};

/// Upper bound on the initial slate of concepts.
pub const MAX_CONCEPTS: usize = 12;

/// Number of top-ranked icons considered for icon-based concepts.
const TOP_ICONS: usize = 6;

/// Icons (by rank) that receive a third, alternate recipe.
const ALTERNATE_RECIPE_ICONS: usize = 3;

/// Keywords taken from the user's selection when building a brief.
const MAX_SELECTED_KEYWORDS: usize = 5;

const WORDMARK_FONT_SIZE: f32 = 48.0;
const ICON_FONT_SIZE: f32 = 40.0;

/// Attempts made to find distinct variation tuples before giving up.
const MAX_VARIATION_ATTEMPTS: usize = 64;

// ============================================================================
// StyleParams
// ============================================================================

/// Arrangement of the mark's parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    /// Icon left of the name.
    Horizontal,
    /// Icon above the name.
    Stacked,
    /// Name only.
    Wordmark,
    /// Initials only.
    Lettermark,
}

impl LayoutKind {
    pub fn uses_icon(self) -> bool {
        matches!(self, LayoutKind::Horizontal | LayoutKind::Stacked)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LayoutKind::Horizontal => "horizontal",
            LayoutKind::Stacked => "stacked",
            LayoutKind::Wordmark => "wordmark",
            LayoutKind::Lettermark => "lettermark",
        }
    }
}

/// The full parameter record behind one rendered concept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct StyleParams {
    pub company_name: String,
    /// CSS font stack, e.g. `Inter, sans-serif`.
    pub font_family: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_import_url: Option<String>,
    pub font_weight: u16,
    pub letter_spacing: f32,
    pub text_transform: TextTransform,
    pub layout: LayoutKind,
    /// Fill colour as a hex string.
    pub color: String,
    pub font_size: f32,
    /// Catalog identifier of the icon, for horizontal and stacked layouts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_id: Option<String>,
}

impl StyleParams {
    /// Text style for composing this record's text run.
    pub fn text_style(&self) -> TextStyle {
        TextStyle {
            font_stack: self.font_family.clone(),
            import_url: self.font_import_url.clone(),
            font_size: self.font_size,
            font_weight: self.font_weight,
            letter_spacing: self.letter_spacing,
            transform: self.text_transform,
            fill: self.color.clone(),
        }
    }

    /// Resolves the referenced icon, if the layout uses one.
    pub fn resolve_icon<'a>(&self, catalog: &'a IconCatalog) -> Result<Option<&'a IconEntry>> {
        match (&self.icon_id, self.layout.uses_icon()) {
            (Some(id), true) => catalog.require(id).map(Some),
            _ => Ok(None),
        }
    }

    /// Renders the document described by this record.
    ///
    /// An icon layout without an icon reference renders as a wordmark.
    pub fn render(&self, catalog: &IconCatalog) -> Result<SvgDocument> {
        let icon = self.resolve_icon(catalog)?;
        Ok(self.render_with(icon))
    }

    fn render_with(&self, icon: Option<&IconEntry>) -> SvgDocument {
        let style = self.text_style();
        match (self.layout, icon) {
            (LayoutKind::Horizontal, Some(icon)) => compose_horizontal(icon, &self.company_name, &style),
            (LayoutKind::Stacked, Some(icon)) => compose_stacked(icon, &self.company_name, &style),
            (LayoutKind::Lettermark, _) => compose_lettermark(&self.company_name, &style),
            _ => compose_wordmark_only(&self.company_name, &style),
        }
    }

    fn tuple(&self) -> (u16, i32, TextTransform, LayoutKind, String) {
        (
            self.font_weight,
            (self.letter_spacing * 100.0).round() as i32,
            self.text_transform,
            self.layout,
            self.color.to_ascii_lowercase(),
        )
    }
}

/// Renders a parameter record to markup.
///
/// Fails with [`BrandError::IconNotFound`](crate::BrandError::IconNotFound)
/// when the record names an icon the catalog does not hold.
pub fn render_concept(params: &StyleParams, catalog: &IconCatalog) -> Result<String> {
    Ok(params.render(catalog)?.to_markup())
}

// ============================================================================
// LogoConcept
// ============================================================================

/// One candidate logo with the parameters it was rendered from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct LogoConcept {
    /// Stable identifier, `concept-<n>` or `<base>-var-<n>`.
    pub id: String,
    pub markup: String,
    pub rationale: String,
    pub keywords: Vec<String>,
    /// The logo style this concept belongs to.
    pub style: LogoType,
    pub params: StyleParams,
}

impl LogoConcept {
    pub fn icon_id(&self) -> Option<&str> {
        self.params.icon_id.as_deref()
    }

    /// Replaces the parameter record and re-renders, keeping the identity.
    ///
    /// On error the concept is left unchanged.
    pub fn refine(&mut self, params: StyleParams, catalog: &IconCatalog) -> Result<()> {
        let markup = render_concept(&params, catalog)?;
        self.markup = markup;
        self.params = params;
        Ok(())
    }

    /// Parses the stored markup back into a document.
    pub fn document(&self) -> Result<SvgDocument> {
        SvgDocument::parse(&self.markup)
    }
}

// ============================================================================
// Recipes
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Weight {
    Regular,
    Medium,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorRole {
    Primary,
    Secondary,
    Accent,
}

impl ColorRole {
    fn label(self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
            ColorRole::Accent => "accent",
        }
    }
}

const WORDMARK_RECIPES: [(Weight, f32, TextTransform, ColorRole); 8] = [
    (Bold, 2.0, Uppercase, Primary),
    (Regular, 0.0, Title, Primary),
    (Bold, 0.0, Lowercase, Primary),
    (Regular, 6.0, Uppercase, Primary),
    (Bold, -1.0, Title, Secondary),
    (Regular, 1.0, Lowercase, Secondary),
    (Bold, 8.0, Uppercase, Secondary),
    (Regular, 3.0, Title, Secondary),
];

const LETTERMARK_RECIPES: [(Weight, f32, ColorRole); 6] = [
    (Bold, 64.0, Primary),
    (Regular, 64.0, Primary),
    (Bold, 80.0, Primary),
    (Bold, 64.0, Secondary),
    (Regular, 80.0, Secondary),
    (Bold, 96.0, Secondary),
];

struct IconRecipe {
    weight: Weight,
    transform: TextTransform,
    layout: LayoutKind,
    spacing: f32,
    color: ColorRole,
}

const ICON_RECIPES: [IconRecipe; 3] = [
    IconRecipe {
        weight: Bold,
        transform: Uppercase,
        layout: LayoutKind::Horizontal,
        spacing: 2.0,
        color: Primary,
    },
    IconRecipe {
        weight: Regular,
        transform: Lowercase,
        layout: LayoutKind::Stacked,
        spacing: 0.0,
        color: Primary,
    },
    IconRecipe {
        weight: Bold,
        transform: Title,
        layout: LayoutKind::Stacked,
        spacing: 4.0,
        color: Secondary,
    },
];

/// Project-derived inputs shared by every recipe.
struct RecipeContext<'p> {
    project: &'p ProjectState,
    font_stack: String,
}

impl<'p> RecipeContext<'p> {
    fn new(project: &'p ProjectState) -> Self {
        let typography = &project.typography;
        Self {
            project,
            font_stack: format!(
                "{}, {}",
                typography.family_or_default(),
                typography.category.generic_family()
            ),
        }
    }

    fn weight(&self, weight: Weight) -> u16 {
        match weight {
            Weight::Regular => self.project.typography.regular_weight(),
            Weight::Medium => 500,
            Weight::Bold => self.project.typography.bold_weight(),
        }
    }

    fn color(&self, role: ColorRole) -> &str {
        let palette = &self.project.palette;
        match role {
            ColorRole::Primary => palette.primary_or_default(),
            ColorRole::Secondary => palette.secondary_or_default(),
            ColorRole::Accent => palette.accent_or_default(),
        }
    }

    fn role_of(&self, color: &str) -> Option<ColorRole> {
        [ColorRole::Primary, ColorRole::Secondary, ColorRole::Accent]
            .into_iter()
            .find(|role| self.color(*role).eq_ignore_ascii_case(color))
    }

    #[allow(clippy::too_many_arguments)]
    fn params(
        &self,
        weight: u16,
        spacing: f32,
        transform: TextTransform,
        layout: LayoutKind,
        color: ColorRole,
        font_size: f32,
        icon: Option<&IconEntry>,
    ) -> StyleParams {
        StyleParams {
            company_name: self.project.name().to_string(),
            font_family: self.font_stack.clone(),
            font_import_url: self.project.typography.import_url().map(str::to_string),
            font_weight: weight,
            letter_spacing: spacing,
            text_transform: transform,
            layout,
            color: self.color(color).to_string(),
            font_size,
            icon_id: icon.map(|icon| icon.id.clone()),
        }
    }
}

fn weight_label(weight: u16) -> &'static str {
    match weight {
        0..=350 => "light",
        351..=450 => "regular",
        451..=650 => "medium",
        _ => "bold",
    }
}

fn tracking_label(spacing: f32) -> &'static str {
    if spacing < 0.0 {
        "tight"
    } else if spacing == 0.0 {
        "natural"
    } else if spacing <= 3.0 {
        "open"
    } else {
        "wide"
    }
}

fn case_label(transform: TextTransform) -> &'static str {
    match transform {
        TextTransform::Uppercase => "uppercase",
        TextTransform::Lowercase => "lowercase",
        TextTransform::Title => "title-case",
    }
}

fn describe(params: &StyleParams, color: &str, icon: Option<&IconEntry>) -> String {
    let weight = weight_label(params.font_weight);
    match (params.layout, icon) {
        (LayoutKind::Lettermark, _) => format!(
            "A {weight} {}px monogram of the initials in the {color} colour, compact enough for small placements.",
            params.font_size
        ),
        (layout, Some(icon)) if layout.uses_icon() => format!(
            "The {} icon ({}) set {} a {weight} {} name with {} tracking, in the {color} colour.",
            icon.display_name().to_lowercase(),
            icon.category.as_str(),
            if layout == LayoutKind::Horizontal { "beside" } else { "above" },
            case_label(params.text_transform),
            tracking_label(params.letter_spacing),
        ),
        _ => format!(
            "A {weight} {} wordmark with {} tracking in the {color} colour, letting the name carry the identity.",
            case_label(params.text_transform),
            tracking_label(params.letter_spacing),
        ),
    }
}

fn concept(
    id: String,
    params: StyleParams,
    icon: Option<&IconEntry>,
    color: &str,
    keywords: Vec<String>,
    style: LogoType,
) -> LogoConcept {
    LogoConcept {
        id,
        markup: params.render_with(icon).to_markup(),
        rationale: describe(&params, color, icon),
        keywords,
        style,
        params,
    }
}

// ============================================================================
// Initial slate
// ============================================================================

/// Generates the initial slate of concepts for a project.
///
/// - `wordmark_only`: exactly 8 concepts
/// - `lettermark`: exactly 6 concepts
/// - `icon_wordmark` / `abstract`: 1 to 12 concepts from the top-ranked icons
#[tracing::instrument(skip_all, fields(logo_type = project.logo.logo_type.as_str()))]
pub fn generate_logo_concepts(project: &ProjectState, catalog: &IconCatalog) -> Vec<LogoConcept> {
    let ctx = RecipeContext::new(project);
    let style = project.logo.logo_type;
    let concepts = match style {
        LogoType::WordmarkOnly => wordmark_concepts(&ctx, style),
        LogoType::Lettermark => lettermark_concepts(&ctx),
        LogoType::IconWordmark | LogoType::Abstract => icon_concepts(&ctx, catalog, style),
    };
    tracing::debug!(count = concepts.len(), "generated logo concepts");
    concepts
}

fn wordmark_concepts(ctx: &RecipeContext<'_>, style: LogoType) -> Vec<LogoConcept> {
    WORDMARK_RECIPES
        .iter()
        .enumerate()
        .map(|(index, (weight, spacing, transform, color))| {
            let params = ctx.params(
                ctx.weight(*weight),
                *spacing,
                *transform,
                LayoutKind::Wordmark,
                *color,
                WORDMARK_FONT_SIZE,
                None,
            );
            concept(
                format!("concept-{}", index + 1),
                params,
                None,
                color.label(),
                ctx.project.logo.keywords.clone(),
                style,
            )
        })
        .collect()
}

fn lettermark_concepts(ctx: &RecipeContext<'_>) -> Vec<LogoConcept> {
    LETTERMARK_RECIPES
        .iter()
        .enumerate()
        .map(|(index, (weight, size, color))| {
            let params = ctx.params(
                ctx.weight(*weight),
                0.0,
                Uppercase,
                LayoutKind::Lettermark,
                *color,
                *size,
                None,
            );
            concept(
                format!("concept-{}", index + 1),
                params,
                None,
                color.label(),
                ctx.project.logo.keywords.clone(),
                LogoType::Lettermark,
            )
        })
        .collect()
}

fn icon_concepts(ctx: &RecipeContext<'_>, catalog: &IconCatalog, style: LogoType) -> Vec<LogoConcept> {
    let project = ctx.project;
    let brief = Brief::new(
        project.logo.keywords.iter().take(MAX_SELECTED_KEYWORDS),
        project.industry.as_str(),
    );

    let mut ranked = catalog.rank(&brief, &project.logo.icon_style);
    if ranked.is_empty() {
        tracing::warn!(
            style = project.logo.icon_style.as_str(),
            "icon style filter left no icons, ranking the full catalog"
        );
        ranked = catalog.rank(&brief, "geometric");
    }
    if ranked.is_empty() {
        tracing::warn!("icon catalog is empty, falling back to wordmark concepts");
        return wordmark_concepts(ctx, style);
    }

    let mut concepts = Vec::with_capacity(MAX_CONCEPTS);
    'icons: for (rank, scored) in ranked.iter().take(TOP_ICONS).enumerate() {
        let icon = scored.icon;
        let mut keywords = brief.matched_keywords(icon);
        if keywords.is_empty() {
            keywords = icon.keywords.iter().take(3).cloned().collect();
        }

        let recipes = if rank < ALTERNATE_RECIPE_ICONS { 3 } else { 2 };
        for recipe in &ICON_RECIPES[..recipes] {
            if concepts.len() == MAX_CONCEPTS {
                break 'icons;
            }
            let params = ctx.params(
                ctx.weight(recipe.weight),
                recipe.spacing,
                recipe.transform,
                recipe.layout,
                recipe.color,
                ICON_FONT_SIZE,
                Some(icon),
            );
            concepts.push(concept(
                format!("concept-{}", concepts.len() + 1),
                params,
                Some(icon),
                recipe.color.label(),
                keywords.clone(),
                style,
            ));
        }
    }
    concepts
}

// ============================================================================
// More like this
// ============================================================================

fn alternatives<T: PartialEq + Copy>(candidates: &[T], current: T) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if *candidate != current && !out.contains(candidate) {
            out.push(*candidate);
        }
    }
    if out.is_empty() {
        out.push(current);
    }
    out
}

/// Generates up to `count` concepts in the neighbourhood of `base`.
///
/// The base's icon (if any) is held fixed while weight, spacing, case,
/// layout and colour cycle through values other than the base's own. Each
/// result keeps the base's style tag and is identified `<base>-var-<n>`.
#[tracing::instrument(skip_all, fields(base = %base.id, count = count))]
pub fn generate_concept_variations(
    base: &LogoConcept,
    project: &ProjectState,
    catalog: &IconCatalog,
    count: usize,
) -> Result<Vec<LogoConcept>> {
    let ctx = RecipeContext::new(project);
    let icon = base.params.resolve_icon(catalog)?;
    let current = &base.params;

    let weights = alternatives(
        &[ctx.weight(Weight::Regular), ctx.weight(Weight::Medium), ctx.weight(Weight::Bold)],
        current.font_weight,
    );
    let spacing_candidates = [-1.0f32, 0.0, 1.0, 2.0, 4.0, 6.0, 8.0];
    let spacings = alternatives(&spacing_candidates, current.letter_spacing);
    let cases = alternatives(&[Uppercase, Lowercase, Title], current.text_transform);
    let layouts = if icon.is_some() {
        alternatives(&[LayoutKind::Horizontal, LayoutKind::Stacked], current.layout)
    } else {
        vec![current.layout]
    };
    let base_role = ctx.role_of(&current.color);
    let colors: Vec<Option<ColorRole>> = alternatives(
        &[Some(ColorRole::Primary), Some(ColorRole::Secondary), Some(ColorRole::Accent)],
        base_role,
    );

    let mut seen = vec![current.tuple()];
    let mut out = Vec::with_capacity(count);
    for i in 0..MAX_VARIATION_ATTEMPTS {
        if out.len() == count {
            break;
        }
        let color_role = colors[i % colors.len()];
        let mut params = StyleParams {
            font_weight: weights[i % weights.len()],
            letter_spacing: spacings[i % spacings.len()],
            text_transform: cases[i % cases.len()],
            layout: layouts[i % layouts.len()],
            ..current.clone()
        };
        if let Some(role) = color_role {
            params.color = ctx.color(role).to_string();
        }

        let tuple = params.tuple();
        if seen.contains(&tuple) {
            continue;
        }
        seen.push(tuple);

        let label = color_role.map(ColorRole::label).unwrap_or("base");
        let mut variation = concept(
            format!("{}-var-{}", base.id, out.len() + 1),
            params,
            icon,
            label,
            base.keywords.clone(),
            base.style,
        );
        variation.rationale = format!("Variation of {}: {}", base.id, variation.rationale);
        out.push(variation);
    }

    tracing::debug!(generated = out.len(), "generated concept variations");
    Ok(out)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Complexity, IconCategory};
    use crate::error::BrandError;
    use crate::svg::{apply_color_mode, ColorMode};
    use std::collections::HashSet;

    fn project(logo_type: LogoType) -> ProjectState {
        let mut project = ProjectState::new("Northwind Labs");
        project.industry = "Technology".into();
        project.palette.primary = "#3B82F6".into();
        project.palette.secondary = "#1E293B".into();
        project.palette.accent = "#F59E0B".into();
        project.logo.logo_type = logo_type;
        project.logo.keywords = vec!["technology".into(), "network".into()];
        project
    }

    #[test]
    fn blank_palette_colour_falls_back() {
        let project = ProjectState::from_json(
            r#"{"company_name": "Acme", "palette": {"primary": ""}, "logo": {"logo_type": "wordmark_only"}}"#,
        )
        .unwrap();
        let concepts = generate_logo_concepts(&project, &IconCatalog::builtin());

        assert_eq!(concepts[0].params.color, "#000000");
        assert!(!concepts[0].markup.contains("fill=\"\""));

        let mono = apply_color_mode(&concepts[0].markup, ColorMode::MonoBlack).unwrap();
        assert!(mono.contains("fill=\"#000000\""));
        assert!(!mono.contains("fill=\"\""));
    }

    #[test]
    fn wordmark_slate_has_eight_distinct_tuples() {
        let concepts =
            generate_logo_concepts(&project(LogoType::WordmarkOnly), &IconCatalog::builtin());
        assert_eq!(concepts.len(), 8);

        let tuples: HashSet<_> = concepts.iter().map(|c| c.params.tuple()).collect();
        assert_eq!(tuples.len(), 8);
        assert!(concepts.iter().all(|c| c.params.layout == LayoutKind::Wordmark));
        assert!(concepts.iter().all(|c| c.style == LogoType::WordmarkOnly));
        assert_eq!(concepts[0].id, "concept-1");
        assert_eq!(concepts[7].id, "concept-8");
    }

    #[test]
    fn lettermark_slate_has_six_concepts() {
        let concepts =
            generate_logo_concepts(&project(LogoType::Lettermark), &IconCatalog::builtin());
        assert_eq!(concepts.len(), 6);
        assert!(concepts[0].markup.contains(">NL</text>"));
        assert_eq!(concepts[5].params.font_size, 96.0);
    }

    #[test]
    fn icon_slate_is_capped_at_twelve() {
        let concepts =
            generate_logo_concepts(&project(LogoType::IconWordmark), &IconCatalog::builtin());
        assert_eq!(concepts.len(), MAX_CONCEPTS);
        assert_eq!(concepts[0].icon_id(), Some("tech-network"));
        assert_eq!(concepts[0].params.layout, LayoutKind::Horizontal);
        assert_eq!(concepts[1].params.layout, LayoutKind::Stacked);
        assert_eq!(concepts[2].params.color, "#1E293B");
        assert_eq!(concepts[0].keywords, ["technology", "network"]);
    }

    #[test]
    fn small_catalog_yields_fewer_concepts() {
        let catalog = IconCatalog::new(vec![IconEntry::new(
            "only",
            IconCategory::Tech,
            &["network"],
            Complexity::Simple,
            "M0 0H24V24H0Z",
        )]);
        let concepts = generate_logo_concepts(&project(LogoType::Abstract), &catalog);
        assert_eq!(concepts.len(), 3);
        assert!(concepts.iter().all(|c| c.style == LogoType::Abstract));
    }

    #[test]
    fn empty_style_filter_falls_back_to_full_catalog() {
        let catalog = IconCatalog::new(vec![IconEntry::new(
            "simple-only",
            IconCategory::Tech,
            &["network"],
            Complexity::Simple,
            "M0 0H24V24H0Z",
        )]);
        let mut project = project(LogoType::IconWordmark);
        project.logo.icon_style = "filled".into();
        let concepts = generate_logo_concepts(&project, &catalog);
        assert_eq!(concepts.len(), 3);
        assert_eq!(concepts[0].icon_id(), Some("simple-only"));
    }

    #[test]
    fn empty_catalog_falls_back_to_wordmarks() {
        let concepts =
            generate_logo_concepts(&project(LogoType::IconWordmark), &IconCatalog::default());
        assert_eq!(concepts.len(), 8);
        assert!(concepts.iter().all(|c| c.icon_id().is_none()));
    }

    #[test]
    fn concepts_regenerate_byte_for_byte() {
        let catalog = IconCatalog::builtin();
        for logo_type in [LogoType::WordmarkOnly, LogoType::Lettermark, LogoType::IconWordmark] {
            for concept in generate_logo_concepts(&project(logo_type), &catalog) {
                assert_eq!(render_concept(&concept.params, &catalog).unwrap(), concept.markup);
            }
        }
    }

    #[test]
    fn weights_follow_typography() {
        let mut project = project(LogoType::WordmarkOnly);
        project.typography.weights = vec![300, 450, 800];
        let concepts = generate_logo_concepts(&project, &IconCatalog::builtin());
        assert_eq!(concepts[0].params.font_weight, 800);
        assert_eq!(concepts[1].params.font_weight, 450);
    }

    #[test]
    fn import_url_is_carried_into_markup() {
        let mut project = project(LogoType::WordmarkOnly);
        project.typography.import_url = Some("https://fonts.example.com/inter.css".into());
        let concepts = generate_logo_concepts(&project, &IconCatalog::builtin());
        assert!(concepts[0].markup.contains("@import url('https://fonts.example.com/inter.css');"));
        assert!(concepts[0].markup.contains("font-family=\"Inter, sans-serif\""));
    }

    #[test]
    fn variations_hold_the_icon_fixed() {
        let catalog = IconCatalog::builtin();
        let project = project(LogoType::IconWordmark);
        let base = generate_logo_concepts(&project, &catalog).remove(0);

        let variations = generate_concept_variations(&base, &project, &catalog, 4).unwrap();
        assert_eq!(variations.len(), 4);
        for (n, variation) in variations.iter().enumerate() {
            assert_eq!(variation.icon_id(), base.icon_id());
            assert_eq!(variation.style, base.style);
            assert_eq!(variation.id, format!("concept-1-var-{}", n + 1));
            assert_ne!(variation.params.tuple(), base.params.tuple());
            assert_ne!(variation.params.font_weight, base.params.font_weight);
            assert_ne!(variation.params.layout, base.params.layout);
        }
    }

    #[test]
    fn variations_never_exceed_count() {
        let catalog = IconCatalog::builtin();
        let project = project(LogoType::WordmarkOnly);
        let base = generate_logo_concepts(&project, &catalog).remove(0);

        assert!(generate_concept_variations(&base, &project, &catalog, 0).unwrap().is_empty());
        let many = generate_concept_variations(&base, &project, &catalog, 100).unwrap();
        assert!(many.len() <= 100);
        assert!(!many.is_empty());
        let tuples: HashSet<_> = many.iter().map(|c| c.params.tuple()).collect();
        assert_eq!(tuples.len(), many.len());
    }

    #[test]
    fn variation_with_dangling_icon_is_an_error() {
        let catalog = IconCatalog::builtin();
        let project = project(LogoType::IconWordmark);
        let base = generate_logo_concepts(&project, &catalog).remove(0);

        let err = generate_concept_variations(&base, &project, &IconCatalog::default(), 2)
            .unwrap_err();
        assert!(matches!(err, BrandError::IconNotFound(id) if id == "tech-network"));
    }

    #[test]
    fn refine_keeps_identity() {
        let catalog = IconCatalog::builtin();
        let mut concept = generate_logo_concepts(&project(LogoType::IconWordmark), &catalog).remove(0);
        let mut params = concept.params.clone();
        params.layout = LayoutKind::Stacked;
        params.color = "#10B981".into();

        concept.refine(params.clone(), &catalog).unwrap();
        assert_eq!(concept.id, "concept-1");
        assert_eq!(concept.params, params);
        assert!(concept.markup.contains("fill=\"#10B981\""));

        let before = concept.clone();
        params.icon_id = Some("missing".into());
        assert!(concept.refine(params, &catalog).is_err());
        assert_eq!(concept, before);
    }

    #[test]
    fn concept_json_round_trip() {
        let catalog = IconCatalog::builtin();
        let concept = generate_logo_concepts(&project(LogoType::IconWordmark), &catalog).remove(0);
        let json = serde_json::to_string(&concept).unwrap();
        assert!(json.contains("\"layout\":\"horizontal\""));
        assert!(json.contains("\"style\":\"icon_wordmark\""));
        let back: LogoConcept = serde_json::from_str(&json).unwrap();
        assert_eq!(back, concept);
    }
}
