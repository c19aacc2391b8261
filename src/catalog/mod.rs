//! The curated icon catalog and the scorer that ranks it against a brief.
//!
//! An [`IconCatalog`] is an immutable value. The engine is handed one at
//! construction time; [`IconCatalog::builtin`] supplies the curated set and
//! tests can build their own from entries or JSON.

mod builtin;
pub mod score;

use serde::{Deserialize, Serialize};

use crate::error::{BrandError, Result};
use crate::svg::ViewBox;

pub use score::{
    filter_by_style, normalize_industry, relevant_keywords, score, Brief, ScoredIcon, StyleFilter,
};

// ============================================================================
// IconCategory / Complexity
// ============================================================================

/// Thematic category of a catalog icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum IconCategory {
    AbstractGeometric,
    Tech,
    Finance,
    Creative,
    Nature,
    Health,
}

impl IconCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            IconCategory::AbstractGeometric => "abstract-geometric",
            IconCategory::Tech => "tech",
            IconCategory::Finance => "finance",
            IconCategory::Creative => "creative",
            IconCategory::Nature => "nature",
            IconCategory::Health => "health",
        }
    }
}

/// Visual complexity tier, used by style filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

// ============================================================================
// IconEntry
// ============================================================================

/// One vector icon primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct IconEntry {
    pub id: String,
    pub category: IconCategory,
    /// Lowercase keyword tags, without duplicates.
    pub keywords: Vec<String>,
    pub complexity: Complexity,
    /// SVG path data in the coordinate space of `view_box`.
    pub path: String,
    pub view_box: ViewBox,
}

impl IconEntry {
    /// Creates an entry in the standard 24×24 coordinate space.
    pub fn new(
        id: impl Into<String>,
        category: IconCategory,
        keywords: &[&str],
        complexity: Complexity,
        path: impl Into<String>,
    ) -> Self {
        let mut tags: Vec<String> = Vec::with_capacity(keywords.len());
        for keyword in keywords {
            let keyword = keyword.trim().to_lowercase();
            if !keyword.is_empty() && !tags.contains(&keyword) {
                tags.push(keyword);
            }
        }
        Self {
            id: id.into(),
            category,
            keywords: tags,
            complexity,
            path: path.into(),
            view_box: ViewBox::square(24.0),
        }
    }

    /// Human-readable name derived from the identifier (`tech-chip` → `Chip`).
    pub fn display_name(&self) -> String {
        let stem = self
            .id
            .split_once('-')
            .map(|(_, rest)| rest)
            .unwrap_or(&self.id);
        crate::svg::TextTransform::Title.apply(&stem.replace('-', " "))
    }

    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k.eq_ignore_ascii_case(keyword))
    }
}

// ============================================================================
// IconCatalog
// ============================================================================

/// A read-only collection of icons.
///
/// There is no way to mutate a catalog after construction; substitute a
/// different catalog by building a new value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconCatalog {
    entries: Vec<IconEntry>,
}

impl IconCatalog {
    /// Creates a catalog from a list of entries.
    pub fn new(entries: Vec<IconEntry>) -> Self {
        Self { entries }
    }

    /// The curated catalog shipped with the engine.
    pub fn builtin() -> Self {
        Self::new(builtin::entries())
    }

    /// Deserializes a catalog from a JSON array of entries.
    ///
    /// Fails with [`BrandError::InvalidIcon`] for an entry whose viewBox has
    /// no drawable area.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        if let Some(entry) = catalog.iter().find(|entry| !entry.view_box.is_drawable()) {
            return Err(BrandError::InvalidIcon(entry.id.clone()));
        }
        Ok(catalog)
    }

    pub fn entries(&self) -> &[IconEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IconEntry> {
        self.entries.iter()
    }

    /// Looks up an icon by identifier.
    pub fn get(&self, id: &str) -> Option<&IconEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Like [`get`](Self::get), but reports a missing icon as an error.
    pub fn require(&self, id: &str) -> Result<&IconEntry> {
        self.get(id)
            .ok_or_else(|| BrandError::IconNotFound(id.to_string()))
    }

    /// Scores every icon that passes `style` and returns them best first.
    ///
    /// Ties keep catalog order.
    pub fn rank(&self, brief: &Brief, style: &str) -> Vec<ScoredIcon<'_>> {
        let mut scored: Vec<ScoredIcon<'_>> = filter_by_style(&self.entries, style)
            .into_iter()
            .map(|icon| ScoredIcon {
                icon,
                score: brief.score(icon),
            })
            .collect();
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored
    }
}

impl<'a> IntoIterator for &'a IconCatalog {
    type Item = &'a IconEntry;
    type IntoIter = std::slice::Iter<'a, IconEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_catalog_shape() {
        let catalog = IconCatalog::builtin();
        assert_eq!(catalog.len(), 35);

        let ids: HashSet<_> = catalog.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len(), "identifiers must be unique");

        for category in [
            IconCategory::AbstractGeometric,
            IconCategory::Tech,
            IconCategory::Finance,
            IconCategory::Creative,
            IconCategory::Nature,
            IconCategory::Health,
        ] {
            assert!(catalog.iter().any(|e| e.category == category), "{category:?}");
        }
    }

    #[test]
    fn builtin_paths_are_non_empty() {
        for entry in &IconCatalog::builtin() {
            assert!(entry.path.starts_with('M'), "{}", entry.id);
            assert!(!entry.keywords.is_empty(), "{}", entry.id);
        }
    }

    #[test]
    fn lookup_by_id() {
        let catalog = IconCatalog::builtin();
        assert_eq!(catalog.get("tech-chip").unwrap().category, IconCategory::Tech);
        assert!(catalog.get("does-not-exist").is_none());
        assert!(matches!(
            catalog.require("does-not-exist"),
            Err(BrandError::IconNotFound(id)) if id == "does-not-exist"
        ));
    }

    #[test]
    fn entry_keywords_are_normalized() {
        let entry = IconEntry::new(
            "x-test",
            IconCategory::Tech,
            &["Data", "data ", "", "Cloud"],
            Complexity::Simple,
            "M0 0Z",
        );
        assert_eq!(entry.keywords, ["data", "cloud"]);
        assert!(entry.has_keyword("DATA"));
    }

    #[test]
    fn display_names() {
        let catalog = IconCatalog::builtin();
        assert_eq!(catalog.require("fin-arrow-up").unwrap().display_name(), "Arrow Up");
        assert_eq!(catalog.require("tech-chip").unwrap().display_name(), "Chip");
    }

    #[test]
    fn substitute_catalog_from_json() {
        let json = serde_json::to_string(&IconCatalog::new(vec![IconEntry::new(
            "only-one",
            IconCategory::Nature,
            &["leaf"],
            Complexity::Simple,
            "M0 0H24V24Z",
        )]))
        .unwrap();
        let catalog = IconCatalog::from_json(&json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(json.contains("\"nature\""));
    }

    #[test]
    fn zero_width_view_box_is_rejected() {
        let json = r#"[{
            "id": "flat",
            "category": "nature",
            "keywords": ["leaf"],
            "complexity": "simple",
            "path": "M0 0H24V24Z",
            "view_box": {"min_x": 0, "min_y": 0, "width": 0, "height": 24}
        }]"#;
        let err = IconCatalog::from_json(json).unwrap_err();
        assert!(matches!(err, BrandError::InvalidIcon(id) if id == "flat"));
    }

    #[test]
    fn rank_is_sorted_and_stable() {
        let catalog = IconCatalog::builtin();
        let brief = Brief::new(["growth"], "finance");
        let ranked = catalog.rank(&brief, "geometric");

        assert_eq!(ranked.len(), catalog.len());
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        // Equal scores keep catalog order.
        let positions: Vec<usize> = ranked
            .iter()
            .map(|s| catalog.iter().position(|e| e.id == s.icon.id).unwrap())
            .collect();
        for pair in ranked.windows(2).zip(positions.windows(2)) {
            if pair.0[0].score == pair.0[1].score {
                assert!(pair.1[0] < pair.1[1]);
            }
        }
    }
}
