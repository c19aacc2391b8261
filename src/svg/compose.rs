//! Builders for text and icon fragments and the layout combinators that
//! arrange them into standalone documents.
//!
//! All builders are pure. Layout math sizes each canvas from
//! [`estimate_text_width`], an average-glyph heuristic rather than real font
//! metrics, so identical inputs always give identical documents.

use serde::{Deserialize, Serialize};

use super::{Element, SvgDocument};
use crate::catalog::IconEntry;

/// Padding around every composed layout, in user units.
pub const PADDING: f32 = 20.0;

/// Baseline offset below the vertical centre, as a fraction of font size.
const BASELINE_SHIFT: f32 = 0.35;

pub const ICON_ONLY_CANVAS: f32 = 120.0;
pub const FAVICON_SIZE: f32 = 32.0;
pub const SOCIAL_AVATAR_SIZE: f32 = 400.0;

// ============================================================================
// Text metrics
// ============================================================================

/// Strategy for estimating rendered text width.
pub trait TextMetrics {
    fn text_width(&self, text: &str, font_size: f32, letter_spacing: f32) -> f32;
}

/// Treats every glyph as 0.55 em wide.
///
/// Proportional Latin faces average between 0.45 and 0.65 em per glyph, so
/// mixed-case text lands within roughly ±20% of the true advance. Narrow
/// all-caps runs and very wide display faces fall outside that band.
#[derive(Debug, Clone, Copy, Default)]
pub struct AverageGlyphWidth;

impl AverageGlyphWidth {
    pub const EM_PER_GLYPH: f32 = 0.55;
}

impl TextMetrics for AverageGlyphWidth {
    fn text_width(&self, text: &str, font_size: f32, letter_spacing: f32) -> f32 {
        let glyphs = text.chars().count();
        let gaps = glyphs.saturating_sub(1);
        glyphs as f32 * Self::EM_PER_GLYPH * font_size + gaps as f32 * letter_spacing
    }
}

/// Estimated width of `text` using [`AverageGlyphWidth`].
pub fn estimate_text_width(text: &str, font_size: f32, letter_spacing: f32) -> f32 {
    AverageGlyphWidth.text_width(text, font_size, letter_spacing)
}

// ============================================================================
// Text styling
// ============================================================================

/// Case transform applied to rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum TextTransform {
    Uppercase,
    Lowercase,
    Title,
}

impl TextTransform {
    pub fn apply(self, text: &str) -> String {
        match self {
            TextTransform::Uppercase => text.to_uppercase(),
            TextTransform::Lowercase => text.to_lowercase(),
            TextTransform::Title => title_case(text),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TextTransform::Uppercase => "uppercase",
            TextTransform::Lowercase => "lowercase",
            TextTransform::Title => "title",
        }
    }
}

fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Initials for a lettermark: the first letter of up to three words, or the
/// first character when the name is a single word.
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    match words.as_slice() {
        [] => String::new(),
        [single] => single.chars().take(1).collect(),
        many => many.iter().take(3).filter_map(|w| w.chars().next()).collect(),
    }
}

/// Typographic parameters for one text run.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// CSS font stack, e.g. `Inter, sans-serif`.
    pub font_stack: String,
    pub import_url: Option<String>,
    pub font_size: f32,
    pub font_weight: u16,
    pub letter_spacing: f32,
    pub transform: TextTransform,
    pub fill: String,
}

impl TextStyle {
    fn width_of(&self, text: &str) -> f32 {
        estimate_text_width(&self.transform.apply(text), self.font_size, self.letter_spacing)
    }
}

// ============================================================================
// Fragment builders
// ============================================================================

fn text_element(content: String, style: &TextStyle, x: f32, y: f32, anchor: &str) -> Element {
    Element::new("text")
        .num("x", x)
        .num("y", y)
        .attr("font-family", style.font_stack.as_str())
        .num("font-size", style.font_size)
        .attr("font-weight", style.font_weight.to_string())
        .num("letter-spacing", style.letter_spacing)
        .attr("fill", style.fill.as_str())
        .attr("text-anchor", anchor)
        .text(content)
}

/// A positioned text run with the style's case transform applied.
pub fn build_wordmark_text(text: &str, style: &TextStyle, x: f32, y: f32, anchor: &str) -> Element {
    text_element(style.transform.apply(text), style, x, y, anchor)
}

/// A centred run of the name's uppercase initials.
pub fn build_lettermark_text(name: &str, style: &TextStyle, x: f32, y: f32) -> Element {
    text_element(initials(name).to_uppercase(), style, x, y, "middle")
}

/// Wraps an icon path in a group scaled to `size` and translated to `(x, y)`.
///
/// Identity parts of the transform are omitted.
pub fn build_icon_element(icon: &IconEntry, fill: &str, size: f32, x: f32, y: f32) -> Element {
    let scale = icon.view_box.scale_to(size);
    let mut transform = Vec::new();
    if x != 0.0 || y != 0.0 {
        transform.push(format!("translate({} {})", super::fmt_num(x), super::fmt_num(y)));
    }
    if (scale - 1.0).abs() > f32::EPSILON {
        transform.push(format!("scale({})", super::fmt_num_precise(scale)));
    }
    if icon.view_box.min_x != 0.0 || icon.view_box.min_y != 0.0 {
        transform.push(format!(
            "translate({} {})",
            super::fmt_num(-icon.view_box.min_x),
            super::fmt_num(-icon.view_box.min_y)
        ));
    }

    let mut group = Element::new("g").attr("data-icon", icon.id.as_str());
    if !transform.is_empty() {
        group.set_attr("transform", transform.join(" "));
    }
    group.child(
        Element::new("path")
            .attr("d", icon.path.as_str())
            .attr("fill", fill)
            .attr("fill-rule", "evenodd"),
    )
}

fn document_for(width: f32, height: f32, style: Option<&TextStyle>) -> SvgDocument {
    let mut doc = SvgDocument::new(width, height);
    if let Some(url) = style.and_then(|s| s.import_url.as_deref()) {
        doc.push(Element::new("defs").child(Element::new("style").text(format!("@import url('{url}');"))));
    }
    doc
}

// ============================================================================
// Layout combinators
// ============================================================================

/// Icon on the left, text on the right.
pub fn compose_horizontal(icon: &IconEntry, text: &str, style: &TextStyle) -> SvgDocument {
    let icon_size = style.font_size * 1.6;
    let gap = style.font_size * 0.5;
    let text_width = style.width_of(text);
    let width = PADDING * 2.0 + icon_size + gap + text_width;
    let height = PADDING * 2.0 + icon_size.max(style.font_size * 1.2);

    let mut doc = document_for(width, height, Some(style));
    doc.push(build_icon_element(
        icon,
        &style.fill,
        icon_size,
        PADDING,
        (height - icon_size) / 2.0,
    ));
    doc.push(build_wordmark_text(
        text,
        style,
        PADDING + icon_size + gap,
        height / 2.0 + style.font_size * BASELINE_SHIFT,
        "start",
    ));
    doc
}

/// Icon centred above the text.
pub fn compose_stacked(icon: &IconEntry, text: &str, style: &TextStyle) -> SvgDocument {
    let icon_size = style.font_size * 2.0;
    let gap = style.font_size * 0.4;
    let text_width = style.width_of(text);
    let width = PADDING * 2.0 + icon_size.max(text_width);
    let height = PADDING * 2.0 + icon_size + gap + style.font_size;

    let mut doc = document_for(width, height, Some(style));
    doc.push(build_icon_element(
        icon,
        &style.fill,
        icon_size,
        (width - icon_size) / 2.0,
        PADDING,
    ));
    doc.push(build_wordmark_text(
        text,
        style,
        width / 2.0,
        PADDING + icon_size + gap + style.font_size * 0.8,
        "middle",
    ));
    doc
}

/// Text alone.
pub fn compose_wordmark_only(text: &str, style: &TextStyle) -> SvgDocument {
    let width = PADDING * 2.0 + style.width_of(text);
    let height = PADDING * 2.0 + style.font_size * 1.2;

    let mut doc = document_for(width, height, Some(style));
    doc.push(build_wordmark_text(
        text,
        style,
        width / 2.0,
        height / 2.0 + style.font_size * BASELINE_SHIFT,
        "middle",
    ));
    doc
}

/// The name's initials centred on a square canvas.
pub fn compose_lettermark(name: &str, style: &TextStyle) -> SvgDocument {
    let letters = initials(name).to_uppercase();
    let text_width = estimate_text_width(&letters, style.font_size, style.letter_spacing);
    let side = PADDING * 2.0 + text_width.max(style.font_size);

    let mut doc = document_for(side, side, Some(style));
    doc.push(build_lettermark_text(
        name,
        style,
        side / 2.0,
        side / 2.0 + style.font_size * BASELINE_SHIFT,
    ));
    doc
}

/// The icon alone at 80% of a square canvas.
pub fn compose_icon_only(icon: &IconEntry, fill: &str, canvas: f32) -> SvgDocument {
    let size = canvas * 0.8;
    let offset = (canvas - size) / 2.0;
    let mut doc = SvgDocument::new(canvas, canvas);
    doc.push(build_icon_element(icon, fill, size, offset, offset));
    doc
}

/// A 32×32 mark: the icon with a 2-unit margin, or the first initial.
pub fn compose_favicon(icon: Option<&IconEntry>, name: &str, style: &TextStyle) -> SvgDocument {
    match icon {
        Some(icon) => {
            let mut doc = SvgDocument::new(FAVICON_SIZE, FAVICON_SIZE);
            doc.push(build_icon_element(icon, &style.fill, FAVICON_SIZE - 4.0, 2.0, 2.0));
            doc
        }
        None => {
            let favicon_style = TextStyle {
                font_size: 20.0,
                letter_spacing: 0.0,
                ..style.clone()
            };
            let letter: String = initials(name).chars().take(1).collect();
            let mut doc = document_for(FAVICON_SIZE, FAVICON_SIZE, Some(&favicon_style));
            doc.push(build_lettermark_text(
                &letter,
                &favicon_style,
                FAVICON_SIZE / 2.0,
                FAVICON_SIZE / 2.0 + favicon_style.font_size * BASELINE_SHIFT,
            ));
            doc
        }
    }
}

/// A circle-clipped square for social profiles: white disc with the icon,
/// or the lettermark when there is no icon, at 60% of the canvas.
pub fn compose_social_avatar(icon: Option<&IconEntry>, name: &str, style: &TextStyle) -> SvgDocument {
    let canvas = SOCIAL_AVATAR_SIZE;
    let half = canvas / 2.0;
    let mark_size = canvas * 0.6;

    let mut doc = document_for(canvas, canvas, icon.is_none().then_some(style));
    doc.add_def(
        Element::new("clipPath").attr("id", "avatar-clip").child(
            Element::new("circle")
                .num("cx", half)
                .num("cy", half)
                .num("r", half),
        ),
    );

    let mut group = Element::new("g").attr("clip-path", "url(#avatar-clip)").child(
        Element::new("rect")
            .num("width", canvas)
            .num("height", canvas)
            .attr("fill", "#FFFFFF"),
    );
    match icon {
        Some(icon) => {
            let offset = (canvas - mark_size) / 2.0;
            group.push(build_icon_element(icon, &style.fill, mark_size, offset, offset));
        }
        None => {
            let letters = initials(name);
            let glyphs = letters.chars().count().max(1) as f32;
            let font_size = (mark_size / (glyphs * AverageGlyphWidth::EM_PER_GLYPH)).min(160.0);
            let avatar_style = TextStyle {
                font_size,
                letter_spacing: 0.0,
                ..style.clone()
            };
            group.push(build_lettermark_text(
                name,
                &avatar_style,
                half,
                half + font_size * BASELINE_SHIFT,
            ));
        }
    }
    doc.push(group);
    doc
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::IconCatalog;

    fn style() -> TextStyle {
        TextStyle {
            font_stack: "Inter, sans-serif".into(),
            import_url: Some("https://fonts.example.com/css?family=Inter&display=swap".into()),
            font_size: 40.0,
            font_weight: 700,
            letter_spacing: 2.0,
            transform: TextTransform::Uppercase,
            fill: "#3B82F6".into(),
        }
    }

    fn icon() -> IconEntry {
        IconCatalog::builtin().entries()[0].clone()
    }

    #[test]
    fn width_heuristic() {
        assert_eq!(estimate_text_width("", 40.0, 2.0), 0.0);
        assert_eq!(estimate_text_width("A", 40.0, 2.0), 22.0);
        // 4 glyphs * 22 + 3 gaps * 2
        assert_eq!(estimate_text_width("ACME", 40.0, 2.0), 94.0);
    }

    #[test]
    fn case_transforms() {
        assert_eq!(TextTransform::Uppercase.apply("acme labs"), "ACME LABS");
        assert_eq!(TextTransform::Lowercase.apply("Acme Labs"), "acme labs");
        assert_eq!(TextTransform::Title.apply("aCME  labs"), "Acme  Labs");
    }

    #[test]
    fn initials_rules() {
        assert_eq!(initials("Northwind"), "N");
        assert_eq!(initials("blue river trading company"), "brt");
        assert_eq!(initials("  "), "");
    }

    #[test]
    fn text_is_escaped() {
        let doc = compose_wordmark_only("R&D <Labs>", &style());
        let markup = doc.to_markup();
        assert!(markup.contains("R&amp;D &lt;LABS&gt;"));
        assert!(markup.contains("@import url('https://fonts.example.com/css?family=Inter&amp;display=swap');"));
    }

    #[test]
    fn horizontal_canvas_follows_heuristic() {
        let s = style();
        let doc = compose_horizontal(&icon(), "Acme", &s);
        let expected = PADDING * 2.0 + 64.0 + 20.0 + estimate_text_width("ACME", 40.0, 2.0);
        assert_eq!(doc.width(), expected);
        assert_eq!(doc.height(), PADDING * 2.0 + 64.0);
    }

    #[test]
    fn stacked_is_at_least_icon_wide() {
        let doc = compose_stacked(&icon(), "A", &style());
        assert_eq!(doc.width(), PADDING * 2.0 + 80.0);
    }

    #[test]
    fn composition_is_deterministic() {
        let a = compose_stacked(&icon(), "Acme", &style()).to_markup();
        let b = compose_stacked(&icon(), "Acme", &style()).to_markup();
        assert_eq!(a, b);
    }

    #[test]
    fn no_import_without_url() {
        let s = TextStyle {
            import_url: None,
            ..style()
        };
        assert!(!compose_wordmark_only("Acme", &s).to_markup().contains("@import"));
    }

    #[test]
    fn icon_element_transform() {
        let entry = icon();
        let g = build_icon_element(&entry, "#000000", 48.0, 10.0, 5.0);
        assert_eq!(g.get_attr("transform"), Some("translate(10 5) scale(2)"));

        let untouched = build_icon_element(&entry, "#000000", entry.view_box.width, 0.0, 0.0);
        assert!(untouched.get_attr("transform").is_none());

        let flat = IconEntry {
            view_box: crate::svg::ViewBox::new(0.0, 0.0, 0.0, 24.0),
            ..icon()
        };
        let g = build_icon_element(&flat, "#000000", 48.0, 10.0, 5.0);
        assert_eq!(g.get_attr("transform"), Some("translate(10 5)"));
    }

    #[test]
    fn favicon_is_32_square() {
        let with_icon = compose_favicon(Some(&icon()), "Acme", &style());
        assert_eq!((with_icon.width(), with_icon.height()), (32.0, 32.0));

        let lettered = compose_favicon(None, "Blue River", &style());
        let markup = lettered.to_markup();
        assert!(markup.contains(">B</text>"));
        assert!(markup.contains("font-size=\"20\""));
    }

    #[test]
    fn avatar_is_circle_clipped() {
        let doc = compose_social_avatar(None, "Blue River", &style());
        let markup = doc.to_markup();
        assert!(markup.contains("<clipPath id=\"avatar-clip\">"));
        assert!(markup.contains("clip-path=\"url(#avatar-clip)\""));
        assert!(markup.contains(">BR</text>"));
    }

    #[test]
    fn lettermark_is_square() {
        let doc = compose_lettermark("Blue River Trading", &style());
        assert_eq!(doc.width(), doc.height());
        assert!(doc.to_markup().contains(">BRT</text>"));
    }
}
