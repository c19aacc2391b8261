//! The engine facade: every generator bound to one injected catalog.

use crate::catalog::{Brief, IconCatalog, ScoredIcon};
use crate::concept::{
    generate_concept_variations, generate_logo_concepts, render_concept, LogoConcept, StyleParams,
};
use crate::error::{BrandError, Result};
use crate::iconography::{generate_icon_set, rerender_icon_set, IconRenderStyle, IconographySystem};
use crate::pattern::{generate_patterns, PatternSystem};
use crate::project::ProjectState;
use crate::rules::{generate_construction_grid, generate_logo_rules, LogoRules};
use crate::variation::{generate_logo_variations, LogoVariationSet};

// ============================================================================
// BrandEngine
// ============================================================================

/// Generative logo and visual-identity engine.
///
/// `BrandEngine` owns an immutable [`IconCatalog`] and exposes every
/// generation stage as a method over a [`ProjectState`] snapshot. All methods
/// take `&self`, so one engine can serve concurrent callers.
///
/// # Stages
///
/// 1. **Concepts** ([`logo_concepts`](Self::logo_concepts)) - initial slate from the project's logo preferences
/// 2. **More like this** ([`concept_variations`](Self::concept_variations)) - neighbours of one concept
/// 3. **Variations** ([`logo_variations`](Self::logo_variations)) - 6 × 7 renders of the finalized concept
/// 4. **Rules** ([`logo_rules`](Self::logo_rules)) - clear space, minimum size and "don't" examples
/// 5. **Visual language** ([`icon_set`](Self::icon_set), [`patterns`](Self::patterns))
///
/// Stages 3 and 4 require [`ProjectState::finalized_concept`].
///
/// # Example
///
/// ```
/// use brandmark::{BrandEngine, LogoType, ProjectState};
///
/// let engine = BrandEngine::default();
///
/// let mut project = ProjectState::new("Northwind");
/// project.industry = "technology".into();
/// project.logo.logo_type = LogoType::IconWordmark;
///
/// let concepts = engine.logo_concepts(&project);
/// assert!(!concepts.is_empty() && concepts.len() <= 12);
///
/// let project = project.with_finalized_concept(concepts[0].clone());
/// let variations = engine.logo_variations(&project).unwrap();
/// assert!(variations.is_complete());
/// ```
#[derive(Debug, Clone)]
pub struct BrandEngine {
    catalog: IconCatalog,
}

impl Default for BrandEngine {
    /// An engine over the built-in catalog.
    fn default() -> Self {
        Self::builtin()
    }
}

impl BrandEngine {
    /// Creates an engine over the given catalog.
    pub fn new(catalog: IconCatalog) -> Self {
        Self { catalog }
    }

    /// Creates an engine over the built-in catalog.
    pub fn builtin() -> Self {
        Self::new(IconCatalog::builtin())
    }

    /// Returns the catalog this engine draws icons from.
    pub fn catalog(&self) -> &IconCatalog {
        &self.catalog
    }

    /// Ranks catalog icons against a brief, best first.
    pub fn rank_icons(&self, brief: &Brief, style: &str) -> Vec<ScoredIcon<'_>> {
        self.catalog.rank(brief, style)
    }

    /// Generates the initial slate of concepts.
    pub fn logo_concepts(&self, project: &ProjectState) -> Vec<LogoConcept> {
        generate_logo_concepts(project, &self.catalog)
    }

    /// Generates up to `count` concepts similar to `base`.
    pub fn concept_variations(
        &self,
        base: &LogoConcept,
        project: &ProjectState,
        count: usize,
    ) -> Result<Vec<LogoConcept>> {
        generate_concept_variations(base, project, &self.catalog, count)
    }

    /// Renders a parameter record to markup.
    pub fn render_concept(&self, params: &StyleParams) -> Result<String> {
        render_concept(params, &self.catalog)
    }

    /// Applies new parameters to a concept, keeping its identity.
    pub fn refine_concept(&self, concept: &mut LogoConcept, params: StyleParams) -> Result<()> {
        concept.refine(params, &self.catalog)
    }

    /// Expands the finalized concept into all variation types and colour modes.
    ///
    /// Fails with [`BrandError::ConceptNotFinalized`] when no concept has
    /// been finalized.
    pub fn logo_variations(&self, project: &ProjectState) -> Result<LogoVariationSet> {
        generate_logo_variations(finalized(project)?, &self.catalog)
    }

    /// Derives usage rules for the finalized concept.
    ///
    /// Fails with [`BrandError::ConceptNotFinalized`] when no concept has
    /// been finalized.
    pub fn logo_rules(&self, project: &ProjectState) -> Result<LogoRules> {
        generate_logo_rules(
            finalized(project)?,
            &project.palette,
            &project.typography,
            &self.catalog,
        )
    }

    /// Construction-grid overlay for the finalized concept.
    pub fn construction_grid(&self, project: &ProjectState) -> Result<String> {
        Ok(generate_construction_grid(finalized(project)?))
    }

    /// Selects and renders the working icon set.
    pub fn icon_set(&self, project: &ProjectState) -> IconographySystem {
        generate_icon_set(project, &self.catalog)
    }

    /// Re-renders an icon set in another style without re-scoring.
    pub fn rerender_icon_set(
        &self,
        system: &IconographySystem,
        style: IconRenderStyle,
    ) -> Result<IconographySystem> {
        rerender_icon_set(system, style, &self.catalog)
    }

    /// Generates pattern tiles and graphic devices.
    pub fn patterns(&self, project: &ProjectState) -> PatternSystem {
        generate_patterns(project)
    }
}

fn finalized(project: &ProjectState) -> Result<&LogoConcept> {
    project
        .finalized_concept
        .as_ref()
        .ok_or(BrandError::ConceptNotFinalized)
}

// ============================================================================
// Tests
// ============================================================================
