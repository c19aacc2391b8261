//! Brief scoring, style filtering and keyword pools.
//!
//! A score combines two bonuses: 20 points per keyword shared between the
//! brief and the icon (capped at 80) and 15 points when the icon's category
//! is aligned with the brief's industry. The total is capped at 100.

use super::{Complexity, IconCategory, IconEntry};
use crate::project::PersonalityVector;

const KEYWORD_POINTS: u32 = 20;
const KEYWORD_CAP: u32 = 80;
const INDUSTRY_POINTS: u32 = 15;
const SCORE_CAP: u32 = 100;

/// Maximum size of a derived keyword pool.
pub const KEYWORD_POOL_CAP: usize = 20;

// ============================================================================
// Brief
// ============================================================================

/// A scoring query: selected keywords plus an industry label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Brief {
    keywords: Vec<String>,
    industry: String,
}

impl Brief {
    /// Creates a brief, lowercasing and de-duplicating keywords.
    pub fn new<I, S>(keywords: I, industry: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if !keyword.is_empty() && !normalized.contains(&keyword) {
                normalized.push(keyword);
            }
        }
        Self {
            keywords: normalized,
            industry: industry.into(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn industry(&self) -> &str {
        &self.industry
    }

    /// Scores an icon against this brief.
    pub fn score(&self, icon: &IconEntry) -> u8 {
        score(icon, &self.keywords, &self.industry)
    }

    /// Keywords of the brief that the icon is tagged with.
    pub fn matched_keywords(&self, icon: &IconEntry) -> Vec<String> {
        self.keywords
            .iter()
            .filter(|k| icon.has_keyword(k))
            .cloned()
            .collect()
    }
}

/// An icon paired with its score against a brief.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredIcon<'a> {
    pub icon: &'a IconEntry,
    pub score: u8,
}

// ============================================================================
// Scoring
// ============================================================================

/// Scores `icon` against selected keywords and an industry label.
///
/// Always within `0..=100`.
pub fn score(icon: &IconEntry, keywords: &[String], industry: &str) -> u8 {
    let mut seen: Vec<String> = Vec::with_capacity(keywords.len());
    for keyword in keywords {
        let keyword = keyword.trim().to_lowercase();
        if !keyword.is_empty() && !seen.contains(&keyword) {
            seen.push(keyword);
        }
    }
    let overlap = seen.iter().filter(|k| icon.has_keyword(k)).count() as u32;
    let keyword_bonus = (overlap * KEYWORD_POINTS).min(KEYWORD_CAP);

    let industry_bonus = if industry_categories(industry).contains(&icon.category) {
        INDUSTRY_POINTS
    } else {
        0
    };

    (keyword_bonus + industry_bonus).min(SCORE_CAP) as u8
}

/// Lowercases an industry label and folds every run of other characters into
/// a single underscore (`"Real Estate"` → `"real_estate"`).
pub fn normalize_industry(industry: &str) -> String {
    let mut out = String::with_capacity(industry.len());
    for c in industry.trim().chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('_') {
            out.push('_');
        }
    }
    while out.ends_with('_') {
        out.pop();
    }
    out
}

/// Categories aligned with an industry. Unknown industries map to the
/// abstract-geometric baseline.
pub fn industry_categories(industry: &str) -> &'static [IconCategory] {
    use IconCategory::*;

    match normalize_industry(industry).as_str() {
        "technology" | "tech" | "software" | "saas" | "it" | "ai" | "cybersecurity" => {
            &[Tech, AbstractGeometric]
        }
        "finance" | "fintech" | "banking" | "insurance" | "accounting" | "investment" => {
            &[Finance, AbstractGeometric]
        }
        "healthcare" | "health" | "medical" | "wellness" | "fitness" | "pharma" => {
            &[Health, Nature]
        }
        "creative" | "design" | "media" | "entertainment" | "arts" | "marketing" | "agency" => {
            &[Creative, AbstractGeometric]
        }
        "nature" | "agriculture" | "sustainability" | "environment" | "food" | "outdoor" => {
            &[Nature, Health]
        }
        "education" | "edtech" => &[Creative, Tech],
        "retail" | "ecommerce" | "e_commerce" | "fashion" => &[Creative, Finance],
        "consulting" | "professional_services" | "legal" | "real_estate" => {
            &[AbstractGeometric, Finance]
        }
        _ => &[AbstractGeometric],
    }
}

/// Returns true when the industry label has its own alignment entry.
pub fn is_known_industry(industry: &str) -> bool {
    industry_categories(industry) != [IconCategory::AbstractGeometric]
}

// ============================================================================
// Style filter
// ============================================================================

/// Icon style preferences that narrow the candidate pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleFilter {
    /// Every icon qualifies.
    Geometric,
    /// Simple and medium icons, which hold up as thin outlines.
    Outlined,
    /// Medium and complex icons, which carry enough mass as solids.
    Filled,
}

impl StyleFilter {
    /// Parses a preference string; unknown styles yield `None`.
    pub fn parse(style: &str) -> Option<Self> {
        match style.trim().to_ascii_lowercase().as_str() {
            "geometric" => Some(Self::Geometric),
            "outlined" => Some(Self::Outlined),
            "filled" => Some(Self::Filled),
            _ => None,
        }
    }

    pub fn accepts(self, icon: &IconEntry) -> bool {
        match self {
            Self::Geometric => true,
            Self::Outlined => matches!(icon.complexity, Complexity::Simple | Complexity::Medium),
            Self::Filled => icon.complexity != Complexity::Simple,
        }
    }
}

/// Filters icons by style preference.
///
/// Unrecognized styles pass every icon through unchanged.
pub fn filter_by_style<'a>(icons: &'a [IconEntry], style: &str) -> Vec<&'a IconEntry> {
    match StyleFilter::parse(style) {
        Some(filter) => icons.iter().filter(|icon| filter.accepts(icon)).collect(),
        None => {
            tracing::warn!(style, "unrecognized icon style filter, keeping all icons");
            icons.iter().collect()
        }
    }
}

// ============================================================================
// Keyword pools
// ============================================================================

fn category_keywords(category: IconCategory) -> &'static [&'static str] {
    match category {
        IconCategory::Tech => &["technology", "network", "data", "digital", "innovation", "cloud"],
        IconCategory::Finance => &["finance", "growth", "trust", "security", "investment", "value"],
        IconCategory::Health => &["health", "care", "wellness", "balance", "vitality", "energy"],
        IconCategory::Creative => &["creative", "idea", "design", "inspiration", "art", "expression"],
        IconCategory::Nature => &["nature", "growth", "organic", "sustainability", "water", "leaf"],
        IconCategory::AbstractGeometric => {
            &["abstract", "structure", "connection", "unity", "precision"]
        }
    }
}

const CLASSIC_KEYWORDS: &[&str] = &["classic", "heritage", "stability", "trust"];
const MODERN_KEYWORDS: &[&str] = &["modern", "innovation", "digital", "future"];
const ELEGANT_KEYWORDS: &[&str] = &["elegant", "balance", "calm", "precision"];
const BOLD_KEYWORDS: &[&str] = &["bold", "energy", "power", "speed"];
const GENERAL_KEYWORDS: &[&str] = &["abstract", "connection", "growth", "unity", "quality"];

/// Keyword pool for briefs that are derived rather than user-selected.
///
/// Industry-aligned keywords come first, then personality keywords from the
/// classic↔modern and calm↔dynamic axes (below 35 or above 65), then
/// general-purpose keywords; duplicates are dropped and the pool is capped
/// at [`KEYWORD_POOL_CAP`].
pub fn relevant_keywords(industry: &str, personality: &PersonalityVector) -> Vec<String> {
    if !industry.trim().is_empty() && !is_known_industry(industry) {
        tracing::warn!(industry, "unknown industry, using the abstract-geometric baseline");
    }

    let mut pool: Vec<&'static str> = Vec::new();
    for category in industry_categories(industry) {
        pool.extend(category_keywords(*category));
    }

    let classic_modern = personality.classic_modern();
    if classic_modern < 35 {
        pool.extend(CLASSIC_KEYWORDS);
    } else if classic_modern > 65 {
        pool.extend(MODERN_KEYWORDS);
    }

    let calm_dynamic = personality.calm_dynamic();
    if calm_dynamic < 35 {
        pool.extend(ELEGANT_KEYWORDS);
    } else if calm_dynamic > 65 {
        pool.extend(BOLD_KEYWORDS);
    }

    pool.extend(GENERAL_KEYWORDS);

    let mut keywords: Vec<String> = Vec::with_capacity(KEYWORD_POOL_CAP);
    for keyword in pool {
        if keywords.len() == KEYWORD_POOL_CAP {
            break;
        }
        if !keywords.iter().any(|k| k == keyword) {
            keywords.push(keyword.to_string());
        }
    }
    keywords
}

// ============================================================================
// Tests
// ============================================================================
