//! The curated icon set. Every path is drawn on a 24×24 grid and relies on
//! the even-odd fill rule for holes.

use super::{Complexity, IconCategory, IconEntry};

use super::Complexity::{Complex, Medium, Simple};
use super::IconCategory::{AbstractGeometric, Creative, Finance, Health, Nature, Tech};

type Row = (
    &'static str,
    IconCategory,
    &'static [&'static str],
    Complexity,
    &'static str,
);

const ICONS: &[Row] = &[
    // abstract-geometric
    (
        "geo-circle",
        AbstractGeometric,
        &["abstract", "circle", "unity", "wholeness", "community"],
        Simple,
        "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20Z",
    ),
    (
        "geo-ring",
        AbstractGeometric,
        &["abstract", "ring", "connection", "continuity", "trust"],
        Simple,
        "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20ZM12 7a5 5 0 1 1 0 10a5 5 0 1 1 0-10Z",
    ),
    (
        "geo-triangle",
        AbstractGeometric,
        &["abstract", "triangle", "growth", "direction", "ambition"],
        Simple,
        "M12 3L22 20H2Z",
    ),
    (
        "geo-diamond",
        AbstractGeometric,
        &["abstract", "diamond", "premium", "precision", "value"],
        Simple,
        "M12 2L22 12L12 22L2 12Z",
    ),
    (
        "geo-hexagon",
        AbstractGeometric,
        &["abstract", "hexagon", "structure", "stability", "technology"],
        Medium,
        "M12 2L20.66 7V17L12 22L3.34 17V7Z",
    ),
    (
        "geo-interlock",
        AbstractGeometric,
        &["abstract", "partnership", "connection", "unity", "collaboration"],
        Medium,
        "M9 5a7 7 0 1 0 0 14a7 7 0 1 0 0-14ZM15 5a7 7 0 1 0 0 14a7 7 0 1 0 0-14Z",
    ),
    (
        "geo-spiral",
        AbstractGeometric,
        &["abstract", "spiral", "growth", "creativity", "evolution"],
        Complex,
        "M12 11a1 1 0 0 1 1 1a2 2 0 0 1-2 2a3 3 0 0 1-3-3a4 4 0 0 1 4-4a5 5 0 0 1 5 5a6 6 0 0 1-6 6a7 7 0 0 1-7-7a8 8 0 0 1 8-8a9 9 0 0 1 9 9H19.5a7.5 7.5 0 0 0-7.5-7.5Z",
    ),
    (
        "geo-stack",
        AbstractGeometric,
        &["abstract", "layers", "depth", "structure", "growth"],
        Medium,
        "M12 2L22 7L12 12L2 7ZM2 12L12 17L22 12V14L12 19L2 14Z",
    ),
    // tech
    (
        "tech-network",
        Tech,
        &["technology", "network", "connection", "data", "cloud"],
        Medium,
        "M12 3a2.5 2.5 0 1 0 0 5a2.5 2.5 0 1 0 0-5ZM5 16a2.5 2.5 0 1 0 0 5a2.5 2.5 0 1 0 0-5ZM19 16a2.5 2.5 0 1 0 0 5a2.5 2.5 0 1 0 0-5ZM11.25 8H12.75V13L17.5 16.5L16.6 17.7L12 14.3L7.4 17.7L6.5 16.5L11.25 13Z",
    ),
    (
        "tech-chip",
        Tech,
        &["technology", "chip", "hardware", "computing", "innovation"],
        Complex,
        "M7 7H17V17H7ZM9 2H10.5V5H9ZM13.5 2H15V5H13.5ZM9 19H10.5V22H9ZM13.5 19H15V22H13.5ZM2 9H5V10.5H2ZM2 13.5H5V15H2ZM19 9H22V10.5H19ZM19 13.5H22V15H19Z",
    ),
    (
        "tech-code",
        Tech,
        &["technology", "code", "software", "developer", "digital"],
        Simple,
        "M8.5 6L3 12L8.5 18L9.9 16.6L5.8 12L9.9 7.4ZM15.5 6L14.1 7.4L18.2 12L14.1 16.6L15.5 18L21 12Z",
    ),
    (
        "tech-cloud",
        Tech,
        &["technology", "cloud", "data", "storage", "saas"],
        Simple,
        "M7 19a5 5 0 0 1-0.5-9.97A6 6 0 0 1 18 8.5a4.5 4.5 0 0 1 0 10.5Z",
    ),
    (
        "tech-bolt",
        Tech,
        &["technology", "energy", "speed", "power", "innovation"],
        Simple,
        "M13 2L4 14H11L10 22L20 9H13Z",
    ),
    (
        "tech-signal",
        Tech,
        &["technology", "signal", "wireless", "communication", "network"],
        Medium,
        "M12 18a2 2 0 1 0 0 4a2 2 0 1 0 0-4ZM5 12.5a10 10 0 0 1 14 0L17.6 14a8 8 0 0 0-11.2 0ZM1.5 9a15 15 0 0 1 21 0L21.1 10.4a13 13 0 0 0-18.2 0Z",
    ),
    // finance
    (
        "fin-coin",
        Finance,
        &["finance", "money", "coin", "value", "wealth"],
        Simple,
        "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20ZM11 6H13V18H11Z",
    ),
    (
        "fin-chart",
        Finance,
        &["finance", "growth", "chart", "analytics", "investment"],
        Medium,
        "M3 20H21V22H3ZM4 14H7V19H4ZM9.5 10H12.5V19H9.5ZM15 6H18V19H15Z",
    ),
    (
        "fin-shield",
        Finance,
        &["finance", "security", "trust", "protection", "insurance"],
        Medium,
        "M12 2L20 5V11C20 16 16.5 20.5 12 22C7.5 20.5 4 16 4 11V5Z",
    ),
    (
        "fin-pillar",
        Finance,
        &["finance", "bank", "stability", "institution", "trust"],
        Medium,
        "M12 2L22 7V9H2V7ZM4 10H7V18H4ZM10.5 10H13.5V18H10.5ZM17 10H20V18H17ZM2 19H22V22H2Z",
    ),
    (
        "fin-arrow-up",
        Finance,
        &["finance", "growth", "progress", "investment", "success"],
        Simple,
        "M12 3L20 11H15V21H9V11H4Z",
    ),
    // creative
    (
        "cre-pen",
        Creative,
        &["creative", "design", "writing", "art", "craft"],
        Medium,
        "M16.5 3L21 7.5L9 19.5L3 21L4.5 15Z",
    ),
    (
        "cre-brush",
        Creative,
        &["creative", "art", "paint", "color", "expression"],
        Medium,
        "M20 2L22 4L13 13L11 11ZM10 12L12 14C12 18 9 21 3 21C5 19 5 17 5.5 15.5C6 13.5 8 12 10 12Z",
    ),
    (
        "cre-star",
        Creative,
        &["creative", "star", "excellence", "inspiration", "quality"],
        Simple,
        "M12 2L14.9 8.6L22 9.3L16.6 14L18.2 21L12 17.3L5.8 21L7.4 14L2 9.3L9.1 8.6Z",
    ),
    (
        "cre-spark",
        Creative,
        &["creative", "idea", "spark", "innovation", "inspiration"],
        Simple,
        "M12 2L14 10L22 12L14 14L12 22L10 14L2 12L10 10Z",
    ),
    (
        "cre-lens",
        Creative,
        &["creative", "photography", "media", "vision", "focus"],
        Medium,
        "M4 6H8L9.5 4H14.5L16 6H20V19H4ZM12 8.5a4 4 0 1 0 0 8a4 4 0 1 0 0-8Z",
    ),
    (
        "cre-bulb",
        Creative,
        &["creative", "idea", "innovation", "education", "insight"],
        Medium,
        "M12 2a7 7 0 0 1 4 12.75V17H8V14.75A7 7 0 0 1 12 2ZM9 18.5H15V20H9ZM10 21H14V22H10Z",
    ),
    // nature
    (
        "nat-leaf",
        Nature,
        &["nature", "leaf", "growth", "sustainability", "organic"],
        Simple,
        "M20 4C20 14 15 20 6 20C5 20 4 19.5 4 19.5C4 10 10 4 20 4Z",
    ),
    (
        "nat-tree",
        Nature,
        &["nature", "tree", "growth", "stability", "roots"],
        Medium,
        "M12 2L19 12H15L20 18H13V22H11V18H4L9 12H5Z",
    ),
    (
        "nat-mountain",
        Nature,
        &["nature", "mountain", "adventure", "ambition", "outdoors"],
        Simple,
        "M2 20L9 7L13 14L16 10L22 20Z",
    ),
    (
        "nat-wave",
        Nature,
        &["nature", "water", "wave", "flow", "calm"],
        Medium,
        "M2 14C5 10 8 10 12 14C16 18 19 18 22 14V20H2Z",
    ),
    (
        "nat-sun",
        Nature,
        &["nature", "sun", "energy", "warmth", "optimism"],
        Complex,
        "M12 7a5 5 0 1 0 0 10a5 5 0 1 0 0-10ZM11 1H13V4H11ZM11 20H13V23H11ZM1 11H4V13H1ZM20 11H23V13H20ZM4.2 5.6L5.6 4.2L7.8 6.4L6.4 7.8ZM16.2 17.6L17.6 16.2L19.8 18.4L18.4 19.8ZM4.2 18.4L6.4 16.2L7.8 17.6L5.6 19.8ZM16.2 6.4L18.4 4.2L19.8 5.6L17.6 7.8Z",
    ),
    // health
    (
        "hea-heart",
        Health,
        &["health", "heart", "care", "love", "wellness"],
        Simple,
        "M12 21L3.5 12.5A5 5 0 0 1 12 5.5A5 5 0 0 1 20.5 12.5Z",
    ),
    (
        "hea-cross",
        Health,
        &["health", "medical", "care", "clinic", "safety"],
        Simple,
        "M9 2H15V9H22V15H15V22H9V15H2V9H9Z",
    ),
    (
        "hea-pulse",
        Health,
        &["health", "pulse", "fitness", "vitality", "energy"],
        Medium,
        "M2 11H6.3L9.6 3.8L14 17.2L16.2 11H22V13H17.6L13.8 23.5L9.4 9.6L7.7 13H2Z",
    ),
    (
        "hea-lotus",
        Health,
        &["health", "wellness", "balance", "calm", "mindfulness"],
        Complex,
        "M12 3C14.5 6 15 9.5 12 14C9 9.5 9.5 6 12 3ZM3 9C7 9 10 11 12 16C7.5 16 4 14 3 9ZM21 9C20 14 16.5 16 12 16C14 11 17 9 21 9ZM4 18H20V19.5H4Z",
    ),
    (
        "hea-drop",
        Health,
        &["health", "water", "purity", "clean", "care"],
        Simple,
        "M12 2C12 2 19 10 19 15a7 7 0 0 1-14 0C5 10 12 2 12 2Z",
    ),
];

pub(super) fn entries() -> Vec<IconEntry> {
    ICONS
        .iter()
        .map(|(id, category, keywords, complexity, path)| {
            IconEntry::new(*id, *category, keywords, *complexity, *path)
        })
        .collect()
}
