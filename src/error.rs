//! Error types for Lexigraph
//!
//! Building, layout and rendering never fail; errors only come from the I/O
//! edges (reading pages and configuration).

use thiserror::Error;

/// Errors that can occur when loading input or configuration
#[derive(Error, Debug)]
pub enum LexigraphError {
    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration values that cannot be used
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type LexigraphResult<T> = Result<T, LexigraphError>;
