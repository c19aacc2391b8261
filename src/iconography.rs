//! The brand's working icon set.
//!
//! Icons are picked by scoring the catalog against a keyword pool derived
//! from the industry and personality vector, then rendered in one of three
//! [`IconRenderStyle`]s. Each rendered icon keeps its catalog identifier so
//! the set can be re-rendered in another style without re-scoring.

use serde::{Deserialize, Serialize};

use crate::catalog::{relevant_keywords, Brief, IconCatalog, IconEntry};
use crate::error::Result;
use crate::project::{FontCategory, ProjectState};
use crate::svg::{fmt_num, fmt_num_precise, Element, SvgDocument};

/// Icons in a working set.
pub const ICON_SET_SIZE: usize = 10;

const DUOTONE_FILL_OPACITY: f32 = 0.2;

// ============================================================================
// IconRenderStyle
// ============================================================================

/// How icons in the set are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum IconRenderStyle {
    /// Stroke only.
    #[default]
    Outlined,
    /// Solid fill.
    Filled,
    /// Low-opacity fill under a full-strength stroke.
    Duotone,
}

impl IconRenderStyle {
    /// Maps a free-text preference; anything unrecognized is outlined.
    pub fn from_preference(style: &str) -> Self {
        match style.trim().to_ascii_lowercase().as_str() {
            "filled" => IconRenderStyle::Filled,
            "duotone" => IconRenderStyle::Duotone,
            _ => IconRenderStyle::Outlined,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IconRenderStyle::Outlined => "outlined",
            IconRenderStyle::Filled => "filled",
            IconRenderStyle::Duotone => "duotone",
        }
    }

    /// Styles the icon path for this render style.
    ///
    /// `stroke_width` is already expressed in the icon's own coordinates.
    fn style_path(self, path: Element, color: &str, stroke_width: f32, rounded: bool) -> Element {
        let stroked = |path: Element| {
            path.attr("stroke", color)
                .attr("stroke-width", fmt_num_precise(stroke_width))
                .attr("stroke-linejoin", if rounded { "round" } else { "miter" })
                .attr("stroke-linecap", if rounded { "round" } else { "butt" })
        };
        match self {
            IconRenderStyle::Outlined => stroked(path.attr("fill", "none")),
            IconRenderStyle::Filled => path.attr("fill", color).attr("fill-rule", "evenodd"),
            IconRenderStyle::Duotone => stroked(
                path.attr("fill", color)
                    .num("fill-opacity", DUOTONE_FILL_OPACITY)
                    .attr("fill-rule", "evenodd"),
            ),
        }
    }

    fn color_usage(self, color: &str) -> String {
        match self {
            IconRenderStyle::Outlined => format!(
                "Draw icons as {color} strokes with no fill. Keep them on light backgrounds and \
                 never mix in filled icons."
            ),
            IconRenderStyle::Filled => format!(
                "Fill icons solid in {color}. Switch to white when placing them on the primary \
                 colour or dark imagery."
            ),
            IconRenderStyle::Duotone => format!(
                "Stroke icons in {color} over a 20% tint of the same colour. Do not introduce a \
                 second hue."
            ),
        }
    }
}

// ============================================================================
// IconographySystem
// ============================================================================

/// One rendered icon of the working set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct IconSetEntry {
    pub name: String,
    /// Catalog identifier of the source icon.
    pub icon_id: String,
    pub markup: String,
}

/// Icon drawing rules plus the rendered working set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct IconographySystem {
    pub style: IconRenderStyle,
    /// Stroke weight in grid units.
    pub stroke_weight: f32,
    /// Side of the square drawing grid.
    pub grid_size: u32,
    pub corner_radius: f32,
    /// Colour every icon is drawn in.
    pub color: String,
    pub color_usage: String,
    pub icons: Vec<IconSetEntry>,
}

/// Stroke weight from the minimal↔rich axis.
pub fn stroke_weight_for(minimal_rich: u8) -> f32 {
    match minimal_rich {
        0..35 => 1.5,
        35..=65 => 2.0,
        _ => 3.0,
    }
}

/// Drawing grid from the minimal↔rich axis.
pub fn grid_size_for(minimal_rich: u8) -> u32 {
    if minimal_rich > 65 { 32 } else { 24 }
}

/// Corner radius matching the typeface category.
pub fn corner_radius_for(category: FontCategory) -> f32 {
    match category {
        FontCategory::Serif | FontCategory::Monospace => 0.0,
        FontCategory::Display => 2.0,
        FontCategory::SansSerif => 4.0,
    }
}

impl IconographySystem {
    fn render(&self, icon: &IconEntry) -> IconSetEntry {
        let grid = self.grid_size as f32;
        let scale = icon.view_box.scale_to(grid);
        let stroke_width = self.stroke_weight / scale;

        let mut doc = SvgDocument::new(grid, grid);
        let mut group = Element::new("g").attr("data-icon", icon.id.as_str()).attr(
            "transform",
            format!(
                "scale({}) translate({} {})",
                fmt_num_precise(scale),
                fmt_num(-icon.view_box.min_x),
                fmt_num(-icon.view_box.min_y)
            ),
        );
        group.push(self.style.style_path(
            Element::new("path").attr("d", icon.path.as_str()),
            &self.color,
            stroke_width,
            self.corner_radius > 0.0,
        ));
        doc.push(group);

        IconSetEntry {
            name: icon.display_name(),
            icon_id: icon.id.clone(),
            markup: doc.to_markup(),
        }
    }
}

/// Selects and renders the brand's working icon set.
#[tracing::instrument(skip_all, fields(industry = %project.industry))]
pub fn generate_icon_set(project: &ProjectState, catalog: &IconCatalog) -> IconographySystem {
    let personality = &project.personality_vector;
    let rich = personality.minimal_rich();
    let style = IconRenderStyle::from_preference(&project.logo.icon_style);

    let pool = relevant_keywords(&project.industry, personality);
    let brief = Brief::new(&pool, project.industry.as_str());
    let ranked = catalog.rank(&brief, "geometric");

    let mut system = IconographySystem {
        style,
        stroke_weight: stroke_weight_for(rich),
        grid_size: grid_size_for(rich),
        corner_radius: corner_radius_for(project.typography.category),
        color: project.palette.primary_or_default().to_string(),
        color_usage: style.color_usage(project.palette.primary_or_default()),
        icons: Vec::new(),
    };
    let icons: Vec<IconSetEntry> = ranked
        .iter()
        .take(ICON_SET_SIZE)
        .map(|scored| system.render(scored.icon))
        .collect();
    system.icons = icons;

    tracing::debug!(icons = system.icons.len(), keywords = pool.len(), "generated icon set");
    system
}

/// Re-renders an existing set in another style, keeping its icon choice.
///
/// Fails with [`BrandError::IconNotFound`](crate::BrandError::IconNotFound)
/// if an entry's source icon is missing from `catalog`.
pub fn rerender_icon_set(
    system: &IconographySystem,
    style: IconRenderStyle,
    catalog: &IconCatalog,
) -> Result<IconographySystem> {
    let mut next = IconographySystem {
        style,
        color_usage: style.color_usage(&system.color),
        icons: Vec::with_capacity(system.icons.len()),
        ..system.clone()
    };
    for entry in &system.icons {
        let icon = catalog.require(&entry.icon_id)?;
        let rendered = next.render(icon);
        next.icons.push(rendered);
    }
    Ok(next)
}

// ============================================================================
// Tests
// ============================================================================
