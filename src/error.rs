//! Error types for the brand mark engine.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BrandError>;

/// Errors surfaced to callers of the engine.
///
/// Generation itself is total over its input domain; these variants cover
/// caller precondition violations, dangling icon references and foreign
/// markup that cannot be parsed.
#[derive(Error, Debug)]
pub enum BrandError {
    #[error("no logo concept has been finalized for this project")]
    ConceptNotFinalized,

    #[error("icon not found in catalog: {0}")]
    IconNotFound(String),

    #[error("icon {0} has an empty or non-finite viewBox")]
    InvalidIcon(String),

    #[error("malformed markup: {0}")]
    Markup(String),

    #[error("document is not renderable: {0}")]
    Unrenderable(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<roxmltree::Error> for BrandError {
    fn from(err: roxmltree::Error) -> Self {
        BrandError::Markup(err.to_string())
    }
}
