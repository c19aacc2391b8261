//! brandmark: Generative logo and visual-identity engine
//!
//! Given a brand's name, palette, typography and a few preferences, this
//! crate deterministically:
//!
//! - scores and ranks a curated icon catalog against a brief
//! - composes candidate logo concepts as standalone SVG documents
//! - expands a finalized concept into 6 variation types × 7 colour modes
//! - derives usage rules, including mutated "don't" examples
//! - generates a working icon set, pattern tiles and graphic devices
//!
//! Nothing here performs I/O or keeps mutable state; every generator is a
//! pure function of its inputs plus an injected, read-only [`IconCatalog`].
//!
//! # Example
//!
//! ```
//! use brandmark::{BrandEngine, ColorMode, LogoType, ProjectState, VariationType};
//!
//! let engine = BrandEngine::default();
//!
//! let mut project = ProjectState::new("Blue River");
//! project.palette.primary = "#3B82F6".into();
//! project.logo.logo_type = LogoType::WordmarkOnly;
//!
//! let concepts = engine.logo_concepts(&project);
//! assert_eq!(concepts.len(), 8);
//!
//! let project = project.with_finalized_concept(concepts[0].clone());
//! let variations = engine.logo_variations(&project).unwrap();
//! let gray = variations
//!     .get(VariationType::Primary, ColorMode::Grayscale)
//!     .unwrap();
//! assert!(gray.contains("fill=\"#7a7a7a\""));
//! ```
//!
//! # Project State
//!
//! The engine reads a [`ProjectState`] snapshot, usually exchanged as JSON.
//! Missing fields fall back to documented defaults:
//!
//! ```
//! use brandmark::ProjectState;
//!
//! let project = ProjectState::from_json(r#"{"company_name": "Acme"}"#).unwrap();
//! assert_eq!(project.palette.primary, "#000000");
//! assert_eq!(project.personality_vector.minimal_rich(), 50);
//! ```

pub mod catalog;
mod concept;
mod engine;
mod error;
mod iconography;
mod pattern;
mod project;
mod rules;
pub mod svg;
mod validate;
mod variation;

pub use catalog::{Brief, IconCatalog, IconCategory, IconEntry, ScoredIcon};
pub use concept::{
    generate_concept_variations, generate_logo_concepts, render_concept, LayoutKind, LogoConcept,
    StyleParams, MAX_CONCEPTS,
};
pub use engine::BrandEngine;
pub use error::{BrandError, Result};
pub use iconography::{
    generate_icon_set, rerender_icon_set, IconRenderStyle, IconSetEntry, IconographySystem,
};
pub use pattern::{
    generate_patterns, ColorVariant, GraphicDevice, PatternSystem, PatternTile, ScaleRange,
};
pub use project::{
    ColorPalette, FontCategory, HeadingScale, LogoPreferences, LogoType, PersonalityVector,
    ProjectState, Typography,
};
pub use rules::{
    generate_construction_grid, generate_logo_rules, ClearSpace, LogoRules, MinimumSize, Misuse,
    UsageDont,
};
pub use svg::{apply_color_mode, ColorMode, SvgDocument};
pub use validate::check_renderable;
pub use variation::{generate_logo_variations, LogoVariationSet, VariationType};
