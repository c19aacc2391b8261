//! Renderability checks for emitted documents using resvg/usvg.

use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use crate::error::{BrandError, Result};

/// Longest side of the check raster drawn by [`check_renderable`].
const CHECK_RASTER_SIZE: f32 = 64.0;

/// Verifies that `markup` is a standalone, drawable SVG document.
///
/// The document is parsed with usvg and drawn once into a small scratch
/// pixmap. Text is laid out only when matching fonts are installed, so a
/// document whose text cannot be shaped still passes.
pub fn check_renderable(markup: &str) -> Result<()> {
    let opts = Options::default();
    let tree = Tree::from_str(markup, &opts).map_err(|e| BrandError::Unrenderable(e.to_string()))?;

    let size = tree.size();
    if size.width() <= 0.0 || size.height() <= 0.0 {
        return Err(BrandError::Unrenderable("document has no area".into()));
    }

    let scale = CHECK_RASTER_SIZE / size.width().max(size.height());
    let width = (size.width() * scale).ceil().max(1.0) as u32;
    let height = (size.height() * scale).ceil().max(1.0) as u32;
    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| BrandError::Unrenderable(format!("cannot allocate {width}x{height} pixmap")))?;
    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::{Element, SvgDocument};

    #[test]
    fn accepts_engine_output() {
        let mut doc = SvgDocument::new(48.0, 24.0);
        doc.push(
            Element::new("path")
                .attr("d", "M0 0H24V24H0Z")
                .attr("fill", "#3B82F6"),
        );
        check_renderable(&doc.to_markup()).unwrap();
    }

    #[test]
    fn rejects_malformed_markup() {
        assert!(matches!(
            check_renderable("<svg xmlns=\"http://www.w3.org/2000/svg\"><g></svg>"),
            Err(BrandError::Unrenderable(_))
        ));
        assert!(check_renderable("not markup at all").is_err());
    }
}
