//! Error types for the site shell

use thiserror::Error;

/// Errors raised while loading the embedded site config
#[derive(Error, Debug)]
pub enum SiteConfigError {
    #[error("Site config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Site config field '{0}' must not be empty")]
    EmptyField(&'static str),

    #[error("Language tag '{0}' may only contain ASCII letters and '-'")]
    InvalidLang(String),

    #[error("Theme colour '{0}' is not a #rrggbb hex value")]
    InvalidThemeColor(String),

    #[error("Font variable '{0}' must start with '--'")]
    InvalidFontVariable(String),
}

/// Result type for site config operations
pub type SiteConfigResult<T> = Result<T, SiteConfigError>;
