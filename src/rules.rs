//! Usage rules for a finalized mark and the construction-grid overlay.
//!
//! The eight "don't" illustrations start from the concept's primary
//! variation as an [`SvgDocument`] and apply one structural mutation each,
//! so every example stays well-formed.

use serde::{Deserialize, Serialize};

use crate::catalog::IconCatalog;
use crate::concept::LogoConcept;
use crate::error::Result;
use crate::project::{ColorPalette, Typography};
use crate::svg::color::{rewrite_fills, rotate_hue};
use crate::svg::{fmt_num, Element, SvgDocument};
use crate::variation::{variation_document, VariationType};

const CLEAR_SPACE_MULTIPLIER: f32 = 1.5;
const CAP_HEIGHT_RATIO: f32 = 0.7;
const MIN_DIGITAL_PX: u32 = 80;
const MIN_PRINT_MM: u32 = 20;

/// Substitute for off-brand recolouring when the primary has no usable hue.
const OFF_BRAND_FALLBACK: &str = "#FF5F1F";

// ============================================================================
// Rule data
// ============================================================================

/// Minimum empty margin around the mark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct ClearSpace {
    /// Unit the multiplier is expressed in.
    pub unit: String,
    pub multiplier: f32,
    /// Resolved margin in pixels at the H1 size.
    pub value: f32,
    pub description: String,
}

/// Smallest sizes at which the mark stays legible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct MinimumSize {
    pub digital_px: u32,
    pub print_mm: u32,
}

impl Default for MinimumSize {
    fn default() -> Self {
        Self {
            digital_px: MIN_DIGITAL_PX,
            print_mm: MIN_PRINT_MM,
        }
    }
}

/// One incorrect-usage illustration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct UsageDont {
    pub id: String,
    pub description: String,
    /// The mark with the misuse applied.
    pub markup: String,
}

/// Usage rules derived from a finalized concept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct LogoRules {
    pub clear_space: ClearSpace,
    pub minimum_size: MinimumSize,
    pub approved_backgrounds: Vec<String>,
    /// Exactly one entry per [`Misuse`], in canonical order.
    pub donts: Vec<UsageDont>,
}

// ============================================================================
// Misuse
// ============================================================================

/// A structural mutation that illustrates incorrect use of the mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Misuse {
    Stretch,
    Rotate,
    Recolor,
    DropShadow,
    Crop,
    BusyBackground,
    Outline,
    LowOpacity,
}

impl Misuse {
    pub const ALL: [Misuse; 8] = [
        Misuse::Stretch,
        Misuse::Rotate,
        Misuse::Recolor,
        Misuse::DropShadow,
        Misuse::Crop,
        Misuse::BusyBackground,
        Misuse::Outline,
        Misuse::LowOpacity,
    ];

    /// Stable rule identifier.
    pub fn id(self) -> &'static str {
        match self {
            Misuse::Stretch => "no-stretch",
            Misuse::Rotate => "no-rotate",
            Misuse::Recolor => "no-recolor",
            Misuse::DropShadow => "no-drop-shadow",
            Misuse::Crop => "no-crop",
            Misuse::BusyBackground => "no-busy-background",
            Misuse::Outline => "no-outline",
            Misuse::LowOpacity => "no-low-opacity",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Misuse::Stretch => "Don't stretch or squash the logo. Always scale it proportionally.",
            Misuse::Rotate => "Don't rotate the logo. Keep it level with the baseline.",
            Misuse::Recolor => "Don't recolour the logo outside the approved brand palette.",
            Misuse::DropShadow => "Don't add drop shadows or other effects to the logo.",
            Misuse::Crop => "Don't crop the logo or let it run off the edge of its container.",
            Misuse::BusyBackground => {
                "Don't place the logo on busy patterns or images that reduce legibility."
            }
            Misuse::Outline => "Don't add outlines or strokes to the logo.",
            Misuse::LowOpacity => "Don't reduce the logo's opacity or make it translucent.",
        }
    }

    /// Applies the mutation to `doc` in place.
    pub fn apply(self, doc: &mut SvgDocument, palette: &ColorPalette) {
        let width = doc.width();
        let height = doc.height();
        let (cx, cy) = (fmt_num(width / 2.0), fmt_num(height / 2.0));

        match self {
            Misuse::Stretch => doc.wrap_content(Element::new("g").attr(
                "transform",
                format!("translate({cx} {cy}) scale(1.4 0.7) translate(-{cx} -{cy})"),
            )),
            Misuse::Rotate => doc.wrap_content(
                Element::new("g").attr("transform", format!("rotate(-15 {cx} {cy})")),
            ),
            Misuse::Recolor => {
                let off_brand = off_brand_color(palette.primary_or_default());
                rewrite_fills(&mut doc.root, |_| Some(off_brand.clone()));
            }
            Misuse::DropShadow => {
                doc.add_def(
                    Element::new("filter")
                        .attr("id", "dont-shadow")
                        .attr("x", "-20%")
                        .attr("y", "-20%")
                        .attr("width", "140%")
                        .attr("height", "140%")
                        .child(
                            Element::new("feDropShadow")
                                .num("dx", 4.0)
                                .num("dy", 4.0)
                                .num("stdDeviation", 3.0)
                                .attr("flood-color", "#000000")
                                .num("flood-opacity", 0.5),
                        ),
                );
                doc.wrap_content(Element::new("g").attr("filter", "url(#dont-shadow)"));
            }
            Misuse::Crop => {
                doc.add_def(
                    Element::new("clipPath").attr("id", "dont-crop").child(
                        Element::new("rect")
                            .num("x", 0.0)
                            .num("y", 0.0)
                            .num("width", width * 0.6)
                            .num("height", height * 0.75),
                    ),
                );
                doc.wrap_content(Element::new("g").attr("clip-path", "url(#dont-crop)"));
            }
            Misuse::BusyBackground => {
                doc.add_def(
                    Element::new("pattern")
                        .attr("id", "dont-busy")
                        .num("width", 12.0)
                        .num("height", 12.0)
                        .attr("patternUnits", "userSpaceOnUse")
                        .attr("patternTransform", "rotate(45)")
                        .child(
                            Element::new("rect")
                                .num("width", 6.0)
                                .num("height", 12.0)
                                .attr("fill", palette.secondary_or_default()),
                        )
                        .child(
                            Element::new("circle")
                                .num("cx", 9.0)
                                .num("cy", 6.0)
                                .num("r", 2.5)
                                .attr("fill", palette.accent_or_default()),
                        ),
                );
                doc.insert_behind_content(
                    Element::new("rect")
                        .num("width", width)
                        .num("height", height)
                        .attr("fill", "url(#dont-busy)"),
                );
            }
            Misuse::Outline => doc.root.visit_mut(&mut |el| {
                if matches!(el.name.as_str(), "path" | "text") {
                    el.set_attr("stroke", "#000000");
                    el.set_attr("stroke-width", "2");
                }
            }),
            Misuse::LowOpacity => {
                doc.wrap_content(Element::new("g").attr("opacity", "0.3"))
            }
        }
    }
}

/// The primary colour with its hue rotated half way round the wheel.
pub fn off_brand_color(primary: &str) -> String {
    rotate_hue(primary, 180.0).unwrap_or_else(|| OFF_BRAND_FALLBACK.to_string())
}

// ============================================================================
// Generation
// ============================================================================

/// Derives usage rules for a concept.
///
/// The "don't" examples mutate the primary variation of the concept.
/// Fails with [`BrandError::IconNotFound`](crate::BrandError::IconNotFound)
/// when the concept references an icon missing from `catalog`.
#[tracing::instrument(skip_all, fields(concept = %concept.id))]
pub fn generate_logo_rules(
    concept: &LogoConcept,
    palette: &ColorPalette,
    typography: &Typography,
    catalog: &IconCatalog,
) -> Result<LogoRules> {
    let canonical = variation_document(concept, VariationType::Primary, catalog)?;

    let cap_height = typography.heading_scale.h1 * CAP_HEIGHT_RATIO;
    let value = (cap_height * CLEAR_SPACE_MULTIPLIER * 100.0).round() / 100.0;
    let clear_space = ClearSpace {
        unit: "cap-height".into(),
        multiplier: CLEAR_SPACE_MULTIPLIER,
        value,
        description: format!(
            "Keep a clear space of at least {CLEAR_SPACE_MULTIPLIER}× the cap height ({}px) \
             on every side of the logo.",
            fmt_num(value)
        ),
    };

    let approved_backgrounds = vec![
        "#FFFFFF".to_string(),
        palette.lightest_neutral().to_string(),
        palette.darkest_neutral().to_string(),
        palette.primary_or_default().to_string(),
    ];

    let donts = Misuse::ALL
        .into_iter()
        .map(|misuse| {
            let mut doc = canonical.clone();
            misuse.apply(&mut doc, palette);
            UsageDont {
                id: misuse.id().to_string(),
                description: misuse.description().to_string(),
                markup: doc.to_markup(),
            }
        })
        .collect();

    Ok(LogoRules {
        clear_space,
        minimum_size: MinimumSize::default(),
        approved_backgrounds,
        donts,
    })
}

// ============================================================================
// Construction grid
// ============================================================================

const GRID_SIZE: f32 = 400.0;
const GRID_STEP: usize = 20;
const GUIDE_RADII: [f32; 3] = [62.0, 100.0, 162.0];
const BOUNDS_INSET: f32 = 40.0;

/// A fixed alignment overlay for presenting a concept.
///
/// The guides do not follow the concept's geometry; the concept only tags
/// the document.
pub fn generate_construction_grid(concept: &LogoConcept) -> String {
    let center = GRID_SIZE / 2.0;
    let mut doc = SvgDocument::new(GRID_SIZE, GRID_SIZE);
    doc.root.set_attr("data-concept", concept.id.as_str());

    let mut grid = Element::new("g")
        .attr("stroke", "#E2E8F0")
        .num("stroke-width", 0.5);
    for offset in (GRID_STEP..GRID_SIZE as usize).step_by(GRID_STEP) {
        let offset = offset as f32;
        if offset == center {
            continue;
        }
        grid.push(line(offset, 0.0, offset, GRID_SIZE));
        grid.push(line(0.0, offset, GRID_SIZE, offset));
    }
    doc.push(grid);

    doc.push(
        Element::new("g")
            .attr("stroke", "#94A3B8")
            .num("stroke-width", 1.0)
            .child(line(center, 0.0, center, GRID_SIZE))
            .child(line(0.0, center, GRID_SIZE, center)),
    );

    let mut guides = Element::new("g")
        .attr("fill", "none")
        .attr("stroke", "#3B82F6")
        .num("stroke-width", 1.0);
    for radius in GUIDE_RADII {
        guides.push(
            Element::new("circle")
                .num("cx", center)
                .num("cy", center)
                .num("r", radius),
        );
    }
    doc.push(guides);

    doc.push(
        Element::new("rect")
            .num("x", BOUNDS_INSET)
            .num("y", BOUNDS_INSET)
            .num("width", GRID_SIZE - BOUNDS_INSET * 2.0)
            .num("height", GRID_SIZE - BOUNDS_INSET * 2.0)
            .attr("fill", "none")
            .attr("stroke", "#EF4444")
            .num("stroke-width", 1.0)
            .attr("stroke-dasharray", "6 4"),
    );

    doc.to_markup()
}

fn line(x1: f32, y1: f32, x2: f32, y2: f32) -> Element {
    Element::new("line")
        .num("x1", x1)
        .num("y1", y1)
        .num("x2", x2)
        .num("y2", y2)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::IconCatalog;
    use crate::concept::{generate_logo_concepts, LayoutKind};
    use crate::error::BrandError;
    use crate::project::{LogoType, ProjectState};
    use std::collections::HashSet;

    fn project() -> ProjectState {
        let mut project = ProjectState::new("Blue River");
        project.industry = "finance".into();
        project.palette.primary = "#3B82F6".into();
        project.logo.logo_type = LogoType::IconWordmark;
        project
    }

    fn concept(project: &ProjectState) -> LogoConcept {
        generate_logo_concepts(project, &IconCatalog::builtin()).remove(0)
    }

    fn rules_for(project: &ProjectState, concept: &LogoConcept) -> LogoRules {
        generate_logo_rules(
            concept,
            &project.palette,
            &project.typography,
            &IconCatalog::builtin(),
        )
        .unwrap()
    }

    #[test]
    fn eight_distinct_donts() {
        let project = project();
        let rules = rules_for(&project, &concept(&project));

        assert_eq!(rules.donts.len(), 8);
        let ids: HashSet<_> = rules.donts.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids.len(), 8);
        for dont in &rules.donts {
            SvgDocument::parse(&dont.markup).unwrap();
        }
    }

    #[test]
    fn clear_space_and_minimum_size() {
        let project = project();
        let rules = rules_for(&project, &concept(&project));

        // 48 * 0.7 * 1.5
        assert_eq!(rules.clear_space.value, 50.4);
        assert_eq!(rules.clear_space.multiplier, 1.5);
        assert!(rules.clear_space.description.contains("50.4px"));
        assert_eq!(rules.minimum_size, MinimumSize { digital_px: 80, print_mm: 20 });
    }

    #[test]
    fn approved_backgrounds() {
        let project = project();
        let rules = rules_for(&project, &concept(&project));
        assert_eq!(
            rules.approved_backgrounds,
            ["#FFFFFF", "#F8FAFC", "#0F172A", "#3B82F6"]
        );
    }

    #[test]
    fn mutations_change_structure() {
        let project = project();
        let concept = concept(&project);
        let rules = rules_for(&project, &concept);
        let by_id = |id: &str| {
            rules
                .donts
                .iter()
                .find(|d| d.id == id)
                .map(|d| d.markup.clone())
                .unwrap()
        };

        assert!(by_id("no-stretch").contains("scale(1.4 0.7)"));
        assert!(by_id("no-rotate").contains("rotate(-15"));
        assert!(by_id("no-drop-shadow").contains("<feDropShadow"));
        assert!(by_id("no-crop").contains("clip-path=\"url(#dont-crop)\""));
        assert!(by_id("no-busy-background").contains("fill=\"url(#dont-busy)\""));
        assert!(by_id("no-outline").contains("stroke=\"#000000\""));
        assert!(by_id("no-low-opacity").contains("opacity=\"0.3\""));

        let recolored = by_id("no-recolor");
        assert!(!recolored.contains("#3B82F6"));
        assert!(recolored.contains(&off_brand_color("#3B82F6")));
    }

    #[test]
    fn off_brand_color_for_gray_primary() {
        assert_eq!(off_brand_color("#000000"), OFF_BRAND_FALLBACK);
        assert_ne!(off_brand_color("#3B82F6").to_lowercase(), "#3b82f6");
    }

    #[test]
    fn missing_icon_is_an_error() {
        let project = project();
        let mut concept = concept(&project);
        concept.params.icon_id = Some("gone".into());
        let err = generate_logo_rules(
            &concept,
            &project.palette,
            &project.typography,
            &IconCatalog::builtin(),
        )
        .unwrap_err();
        assert!(matches!(err, BrandError::IconNotFound(id) if id == "gone"));
    }

    #[test]
    fn donts_follow_primary_lockup_of_stacked_concept() {
        let project = project();
        let catalog = IconCatalog::builtin();
        let stacked = generate_logo_concepts(&project, &catalog)
            .into_iter()
            .find(|c| c.params.layout == LayoutKind::Stacked)
            .unwrap();
        let rules = rules_for(&project, &stacked);

        let primary = variation_document(&stacked, VariationType::Primary, &catalog).unwrap();
        let stacked_doc = stacked.document().unwrap();
        assert_ne!(primary.view_box(), stacked_doc.view_box());

        for dont in &rules.donts {
            let doc = SvgDocument::parse(&dont.markup).unwrap();
            assert_eq!(doc.view_box(), primary.view_box(), "{}", dont.id);
        }
    }

    #[test]
    fn construction_grid_is_geometry_independent() {
        let project = project();
        let concepts = generate_logo_concepts(&project, &IconCatalog::builtin());
        let a = generate_construction_grid(&concepts[0]);
        let b = generate_construction_grid(&concepts[1]);

        assert_eq!(
            a.replace(&concepts[0].id, ""),
            b.replace(&concepts[1].id, "")
        );
        assert!(a.contains("viewBox=\"0 0 400 400\""));
        assert!(a.contains("r=\"162\""));
        assert!(a.contains("stroke-dasharray=\"6 4\""));
    }
}
