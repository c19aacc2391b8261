//! A small structured model of SVG documents.
//!
//! Everything the engine emits is built as an [`SvgDocument`] tree and
//! serialized deterministically. Colour modes and usage-rule mutations are
//! applied as tree transforms, and foreign markup is read back into the same
//! model with `roxmltree`.
//!
//! Serialization rules:
//! - attributes are written in insertion order
//! - childless elements are self-closing
//! - the root `<svg>` always carries the SVG namespace
//! - text escapes `& < >`, attribute values additionally escape `"`

pub mod color;
pub mod compose;

use std::fmt;

use crate::error::{BrandError, Result};

pub use color::{apply_color_mode, grayscale_hex, ColorMode};
pub use compose::{
    build_icon_element, build_lettermark_text, build_wordmark_text, compose_favicon,
    compose_horizontal, compose_icon_only, compose_lettermark, compose_social_avatar,
    compose_stacked, compose_wordmark_only, estimate_text_width, initials, AverageGlyphWidth,
    TextMetrics, TextStyle, TextTransform,
};

/// The SVG namespace written on every root element.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

// ============================================================================
// ViewBox
// ============================================================================

/// A `viewBox` coordinate-space declaration.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct ViewBox {
    pub min_x: f32,
    pub min_y: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewBox {
    pub fn new(min_x: f32, min_y: f32, width: f32, height: f32) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }

    /// A square coordinate space anchored at the origin.
    pub fn square(size: f32) -> Self {
        Self::new(0.0, 0.0, size, size)
    }

    /// Returns true when the box has a finite, positive area.
    pub fn is_drawable(&self) -> bool {
        [self.min_x, self.min_y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Scale that maps the box width onto `size`. An undrawable box maps to 1.
    pub fn scale_to(&self, size: f32) -> f32 {
        if self.is_drawable() { size / self.width } else { 1.0 }
    }

    /// Parses a `viewBox` attribute value (whitespace or comma separated).
    pub fn parse(value: &str) -> Option<Self> {
        let parts: Vec<f32> = value
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .collect::<std::result::Result<_, _>>()
            .ok()?;
        match parts.as_slice() {
            [x, y, w, h] => Some(Self::new(*x, *y, *w, *h)),
            _ => None,
        }
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            fmt_num(self.min_x),
            fmt_num(self.min_y),
            fmt_num(self.width),
            fmt_num(self.height)
        )
    }
}

// ============================================================================
// Nodes
// ============================================================================

/// A child of an element: another element or character data.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// One SVG element with ordered attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder form of [`set_attr`](Self::set_attr).
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder that writes a numeric attribute using [`fmt_num`].
    pub fn num(self, name: &str, value: f32) -> Self {
        self.attr(name, fmt_num(value))
    }

    /// Builder that appends a child element.
    pub fn child(mut self, element: Element) -> Self {
        self.children.push(Node::Element(element));
        self
    }

    /// Builder that appends character data.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Sets an attribute, replacing an existing value in place.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let index = self.attrs.iter().position(|(k, _)| k == name)?;
        Some(self.attrs.remove(index).1)
    }

    pub fn push(&mut self, element: Element) {
        self.children.push(Node::Element(element));
    }

    /// Iterates over direct child elements.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    /// Concatenated character data of this element and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Element(el) => out.push_str(&el.text_content()),
            }
        }
        out
    }

    /// Depth-first pre-order visit of this element and every descendant.
    pub fn visit(&self, f: &mut impl FnMut(&Element)) {
        f(self);
        for el in self.elements() {
            el.visit(f);
        }
    }

    /// Mutable depth-first pre-order visit.
    pub fn visit_mut(&mut self, f: &mut impl FnMut(&mut Element)) {
        f(self);
        for node in &mut self.children {
            if let Node::Element(el) = node {
                el.visit_mut(f);
            }
        }
    }

    fn write_to(&self, out: &mut String, is_root: bool) {
        out.push('<');
        out.push_str(&self.name);
        if is_root && self.name == "svg" && self.get_attr("xmlns").is_none() {
            out.push_str(" xmlns=\"");
            out.push_str(SVG_NS);
            out.push('"');
        }
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for node in &self.children {
            match node {
                Node::Element(el) => el.write_to(out, false),
                Node::Text(text) => out.push_str(&escape_text(text)),
            }
        }
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }
}

// ============================================================================
// SvgDocument
// ============================================================================

/// A standalone SVG document.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    pub root: Element,
}

impl SvgDocument {
    /// Creates an empty document whose viewBox matches its pixel size.
    pub fn new(width: f32, height: f32) -> Self {
        let root = Element::new("svg")
            .num("width", width)
            .num("height", height)
            .attr("viewBox", ViewBox::new(0.0, 0.0, width, height).to_string());
        Self { root }
    }

    /// Parses markup into the document model.
    ///
    /// Fails with [`BrandError::Markup`] when the text is not well-formed
    /// XML or its root element is not `<svg>`.
    pub fn parse(markup: &str) -> Result<Self> {
        let doc = roxmltree::Document::parse(markup)?;
        let root = doc.root_element();
        if root.tag_name().name() != "svg" {
            return Err(BrandError::Markup(format!(
                "expected <svg> root, found <{}>",
                root.tag_name().name()
            )));
        }
        Ok(Self {
            root: convert(root),
        })
    }

    /// Declared viewBox, if present and valid.
    pub fn view_box(&self) -> Option<ViewBox> {
        self.root.get_attr("viewBox").and_then(ViewBox::parse)
    }

    /// Document width from the `width` attribute, else the viewBox.
    pub fn width(&self) -> f32 {
        self.dimension("width", |vb| vb.width)
    }

    /// Document height from the `height` attribute, else the viewBox.
    pub fn height(&self) -> f32 {
        self.dimension("height", |vb| vb.height)
    }

    fn dimension(&self, attr: &str, from_view_box: impl Fn(ViewBox) -> f32) -> f32 {
        self.root
            .get_attr(attr)
            .and_then(|v| v.trim_end_matches("px").parse::<f32>().ok())
            .or_else(|| self.view_box().map(from_view_box))
            .unwrap_or(0.0)
    }

    pub fn push(&mut self, element: Element) {
        self.root.push(element);
    }

    /// Adds a definition, reusing the first `<defs>` child when present.
    pub fn add_def(&mut self, element: Element) {
        for node in &mut self.root.children {
            if let Node::Element(el) = node
                && el.name == "defs"
            {
                el.push(element);
                return;
            }
        }
        self.root
            .children
            .insert(0, Node::Element(Element::new("defs").child(element)));
    }

    /// Moves every drawable root child into `wrapper` and appends it.
    ///
    /// `<defs>`, `<style>` and `<title>` stay at the root so references and
    /// font imports keep resolving.
    pub fn wrap_content(&mut self, mut wrapper: Element) {
        let children = std::mem::take(&mut self.root.children);
        for node in children {
            match node {
                Node::Element(el) if is_structural(&el.name) => {
                    self.root.children.push(Node::Element(el))
                }
                other => wrapper.children.push(other),
            }
        }
        self.root.push(wrapper);
    }

    /// Inserts an element after the structural root children.
    pub fn insert_behind_content(&mut self, element: Element) {
        let index = self
            .root
            .children
            .iter()
            .position(|node| !matches!(node, Node::Element(el) if is_structural(&el.name)))
            .unwrap_or(self.root.children.len());
        self.root.children.insert(index, Node::Element(element));
    }

    /// Serializes the document to markup.
    pub fn to_markup(&self) -> String {
        let mut out = String::with_capacity(512);
        self.root.write_to(&mut out, true);
        out
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markup())
    }
}

fn is_structural(name: &str) -> bool {
    matches!(name, "defs" | "style" | "title")
}

fn convert(node: roxmltree::Node<'_, '_>) -> Element {
    let mut element = Element::new(node.tag_name().name());
    for attr in node.attributes() {
        element
            .attrs
            .push((attr.name().to_string(), attr.value().to_string()));
    }
    for child in node.children() {
        if child.is_element() {
            element.children.push(Node::Element(convert(child)));
        } else if let Some(text) = child.text() {
            element.children.push(Node::Text(text.to_string()));
        }
    }
    element
}

// ============================================================================
// Formatting helpers
// ============================================================================

/// Formats a coordinate with at most two decimals and no trailing zeros.
pub fn fmt_num(value: f32) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let text = format!("{rounded:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Like [`fmt_num`] with four decimals, for scale factors.
pub fn fmt_num_precise(value: f32) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let text = format!("{rounded:.4}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Escapes the three XML metacharacters in character data.
pub fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(input: &str) -> String {
    escape_text(input).replace('"', "&quot;")
}

// ============================================================================
// Tests
// ============================================================================
