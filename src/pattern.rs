//! Procedural pattern tiles and graphic devices.
//!
//! Everything here is a pure function of the palette and two personality
//! axes: minimal↔rich sets stroke width and dot radius, calm↔dynamic picks
//! the divider form.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::project::{ColorPalette, ProjectState};
use crate::svg::{fmt_num, Element, SvgDocument};

/// Side of every pattern tile.
pub const TILE_SIZE: f32 = 40.0;

/// calm↔dynamic value above which the divider becomes a wave.
const WAVE_THRESHOLD: u8 = 60;

const GOLDEN_ANGLE_DEG: f32 = 137.507_77;

// ============================================================================
// Data
// ============================================================================

/// Foreground/background colour pairing for a tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct ColorVariant {
    pub foreground: String,
    pub background: String,
}

/// Recommended scale factors for a tile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct ScaleRange {
    pub min: f32,
    pub max: f32,
}

/// A repeatable background tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct PatternTile {
    pub name: String,
    pub markup: String,
    pub usage: String,
    pub scale_range: ScaleRange,
    /// Up to four colour pairings.
    pub color_variants: Vec<ColorVariant>,
}

/// A standalone decorative element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct GraphicDevice {
    pub name: String,
    pub markup: String,
    pub usage: String,
    /// How the device was derived from the brand inputs.
    pub provenance: String,
}

/// Pattern tiles and graphic devices for a brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct PatternSystem {
    pub patterns: Vec<PatternTile>,
    pub devices: Vec<GraphicDevice>,
}

// ============================================================================
// Parameters
// ============================================================================

/// Inputs shared by all generators.
struct PatternParams<'a> {
    palette: &'a ColorPalette,
    primary: &'a str,
    secondary: &'a str,
    stroke_width: f32,
    dot_radius: f32,
    rich: u8,
    calm_dynamic: u8,
}

impl<'a> PatternParams<'a> {
    fn new(project: &'a ProjectState) -> Self {
        let rich = project.personality_vector.minimal_rich();
        let richness = f32::from(rich) / 100.0;
        Self {
            palette: &project.palette,
            primary: project.palette.primary_or_default(),
            secondary: project.palette.secondary_or_default(),
            stroke_width: 1.0 + richness * 2.0,
            dot_radius: 1.5 + richness * 2.5,
            rich,
            calm_dynamic: project.personality_vector.calm_dynamic(),
        }
    }

    fn color_variants(&self) -> Vec<ColorVariant> {
        let primary = self.primary;
        let secondary = self.secondary;
        [
            (primary, "#FFFFFF"),
            ("#FFFFFF", primary),
            (secondary, "#FFFFFF"),
            (primary, self.palette.lightest_neutral()),
        ]
        .into_iter()
        .map(|(foreground, background)| ColorVariant {
            foreground: foreground.to_string(),
            background: background.to_string(),
        })
        .collect()
    }
}

fn stroked_path(d: impl Into<String>, color: &str, width: f32) -> Element {
    Element::new("path")
        .attr("d", d)
        .attr("fill", "none")
        .attr("stroke", color)
        .num("stroke-width", width)
        .attr("stroke-linecap", "square")
}

fn tile(
    name: &str,
    usage: &str,
    scale: (f32, f32),
    content: Vec<Element>,
    params: &PatternParams<'_>,
) -> PatternTile {
    let mut doc = SvgDocument::new(TILE_SIZE, TILE_SIZE);
    for element in content {
        doc.push(element);
    }
    PatternTile {
        name: name.to_string(),
        markup: doc.to_markup(),
        usage: usage.to_string(),
        scale_range: ScaleRange {
            min: scale.0,
            max: scale.1,
        },
        color_variants: params.color_variants(),
    }
}

// ============================================================================
// Tiles
// ============================================================================

fn dot_grid(params: &PatternParams<'_>) -> PatternTile {
    let dots = [(10.0, 10.0), (30.0, 10.0), (10.0, 30.0), (30.0, 30.0)]
        .into_iter()
        .map(|(cx, cy)| {
            Element::new("circle")
                .num("cx", cx)
                .num("cy", cy)
                .num("r", params.dot_radius)
                .attr("fill", params.primary)
        })
        .collect();
    tile(
        "Dot Grid",
        "Quiet texture for large backgrounds, slide masters and packaging interiors.",
        (0.5, 2.0),
        dots,
        params,
    )
}

fn diagonal_lines(params: &PatternParams<'_>) -> PatternTile {
    tile(
        "Diagonal Lines",
        "Directional texture for section headers and promotional banners.",
        (0.5, 1.5),
        vec![stroked_path(
            "M0 40L40 0M-10 10L10 -10M30 50L50 30",
            params.primary,
            params.stroke_width,
        )],
        params,
    )
}

fn chevron(params: &PatternParams<'_>) -> PatternTile {
    tile(
        "Chevron",
        "Energetic accent for social graphics and campaign materials. Use sparingly.",
        (0.75, 2.0),
        vec![
            stroked_path("M0 20L20 0L40 20", params.secondary, params.stroke_width),
            stroked_path("M0 40L20 20L40 40", params.secondary, params.stroke_width),
        ],
        params,
    )
}

fn cross_grid(params: &PatternParams<'_>) -> PatternTile {
    tile(
        "Cross Grid",
        "Technical backdrop for data visualisations, documentation and web footers.",
        (0.5, 1.5),
        vec![
            stroked_path("M0 0H40M0 0V40", params.secondary, params.stroke_width / 2.0)
                .num("stroke-opacity", 0.4),
            stroked_path("M20 14V26M14 20H26", params.primary, params.stroke_width),
        ],
        params,
    )
}

// ============================================================================
// Devices
// ============================================================================

fn corner_accent(params: &PatternParams<'_>) -> GraphicDevice {
    let mut doc = SvgDocument::new(120.0, 120.0);
    doc.push(
        Element::new("path")
            .attr("d", "M0 0H80V8H8V80H0Z")
            .attr("fill", params.primary),
    );
    doc.push(
        Element::new("rect")
            .num("x", 16.0)
            .num("y", 16.0)
            .num("width", 16.0)
            .num("height", 16.0)
            .attr("fill", params.secondary),
    );
    GraphicDevice {
        name: "Corner Accent".into(),
        markup: doc.to_markup(),
        usage: "Anchor the top-left corner of covers, slides and social posts. Mirror for other \
                corners."
            .into(),
        provenance: "L-bracket in the primary colour with a secondary-colour square echoing the \
                     mark's proportions."
            .into(),
    }
}

fn divider(params: &PatternParams<'_>) -> GraphicDevice {
    let width = 400.0;
    let mid = 12.0;
    let mut doc = SvgDocument::new(width, mid * 2.0);
    let wave = params.calm_dynamic > WAVE_THRESHOLD;

    let d = if wave {
        let period = 50.0;
        let amplitude = 8.0;
        let mut d = format!(
            "M0 {}Q{} {} {} {}",
            fmt_num(mid),
            fmt_num(period / 4.0),
            fmt_num(mid - amplitude),
            fmt_num(period / 2.0),
            fmt_num(mid)
        );
        let mut x = period / 2.0;
        while x < width {
            x += period / 2.0;
            d.push_str(&format!("T{} {}", fmt_num(x), fmt_num(mid)));
        }
        d
    } else {
        format!("M0 {}H{}", fmt_num(mid), fmt_num(width))
    };
    doc.push(stroked_path(d, params.primary, params.stroke_width));

    let (name, provenance) = if wave {
        (
            "Wave Divider",
            format!(
                "Wave form because the calm\u{2194}dynamic axis is {} (above {WAVE_THRESHOLD}).",
                params.calm_dynamic
            ),
        )
    } else {
        (
            "Straight Divider",
            format!(
                "Straight rule because the calm\u{2194}dynamic axis is {} (at most {WAVE_THRESHOLD}).",
                params.calm_dynamic
            ),
        )
    };
    GraphicDevice {
        name: name.into(),
        markup: doc.to_markup(),
        usage: "Separate content sections in documents, web pages and presentations.".into(),
        provenance,
    }
}

fn dot_cluster(params: &PatternParams<'_>) -> GraphicDevice {
    let size = 200.0;
    let center = size / 2.0;
    let count = 12 + usize::from(params.rich / 10);
    let max_radius = center - params.dot_radius * 3.0;

    let mut doc = SvgDocument::new(size, size);
    for i in 0..count {
        let angle = i as f32 * GOLDEN_ANGLE_DEG * PI / 180.0;
        let distance = max_radius * ((i as f32 + 0.5) / count as f32).sqrt();
        let color = if i % 3 == 2 {
            params.secondary
        } else {
            params.primary
        };
        doc.push(
            Element::new("circle")
                .num("cx", center + distance * angle.cos())
                .num("cy", center + distance * angle.sin())
                .num("r", params.dot_radius * (1.0 + (i % 2) as f32 * 0.5))
                .attr("fill", color),
        );
    }

    GraphicDevice {
        name: "Dot Cluster".into(),
        markup: doc.to_markup(),
        usage: "Background ornament behind headlines or product shots. Keep it partially off-canvas."
            .into(),
        provenance: format!(
            "{count} dots on a golden-angle spiral; count and dot size grow with the \
             minimal\u{2194}rich axis ({}).",
            params.rich
        ),
    }
}

// ============================================================================
// Generation
// ============================================================================

/// Generates the 4 pattern tiles and 3 graphic devices for a project.
#[tracing::instrument(skip_all)]
pub fn generate_patterns(project: &ProjectState) -> PatternSystem {
    let params = PatternParams::new(project);
    let system = PatternSystem {
        patterns: vec![
            dot_grid(&params),
            diagonal_lines(&params),
            chevron(&params),
            cross_grid(&params),
        ],
        devices: vec![corner_accent(&params), divider(&params), dot_cluster(&params)],
    };
    tracing::debug!(
        patterns = system.patterns.len(),
        devices = system.devices.len(),
        "generated patterns"
    );
    system
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::PersonalityVector;

    fn project(axes: [u8; 5]) -> ProjectState {
        let mut project = ProjectState::new("Acme");
        project.palette.primary = "#3B82F6".into();
        project.palette.secondary = "#F59E0B".into();
        project.personality_vector = PersonalityVector::new(axes);
        project
    }

    #[test]
    fn four_tiles_and_three_devices() {
        let system = generate_patterns(&project([50; 5]));
        let names: Vec<_> = system.patterns.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Dot Grid", "Diagonal Lines", "Chevron", "Cross Grid"]);
        assert_eq!(system.devices.len(), 3);

        for tile in &system.patterns {
            assert!(tile.markup.contains("viewBox=\"0 0 40 40\""));
            assert_eq!(tile.color_variants.len(), 4);
            assert!(tile.scale_range.min < tile.scale_range.max);
        }
    }

    #[test]
    fn richness_drives_stroke_and_dots() {
        let minimal = generate_patterns(&project([50, 50, 50, 50, 0]));
        let rich = generate_patterns(&project([50, 50, 50, 50, 100]));

        assert!(minimal.patterns[0].markup.contains("r=\"1.5\""));
        assert!(rich.patterns[0].markup.contains("r=\"4\""));
        assert!(minimal.patterns[1].markup.contains("stroke-width=\"1\""));
        assert!(rich.patterns[1].markup.contains("stroke-width=\"3\""));

        let count = |markup: &str| markup.matches("<circle").count();
        assert_eq!(count(&minimal.devices[2].markup), 12);
        assert_eq!(count(&rich.devices[2].markup), 22);
    }

    #[test]
    fn divider_follows_calm_dynamic_axis() {
        let calm = generate_patterns(&project([50, 60, 50, 50, 50]));
        let dynamic = generate_patterns(&project([50, 61, 50, 50, 50]));

        assert_eq!(calm.devices[1].name, "Straight Divider");
        assert!(calm.devices[1].markup.contains("d=\"M0 12H400\""));
        assert_eq!(dynamic.devices[1].name, "Wave Divider");
        assert!(dynamic.devices[1].markup.contains("Q12.5 4 25 12"));
    }

    #[test]
    fn colour_variants_use_palette() {
        let system = generate_patterns(&project([50; 5]));
        let variants = &system.patterns[0].color_variants;
        assert_eq!(variants[0].foreground, "#3B82F6");
        assert_eq!(variants[1].background, "#3B82F6");
        assert_eq!(variants[2].foreground, "#F59E0B");
        assert_eq!(variants[3].background, "#F8FAFC");
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(generate_patterns(&project([10, 80, 30, 40, 70])), generate_patterns(&project([10, 80, 30, 40, 70])));
    }
}
