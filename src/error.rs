//! Error types for Lumenfield

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LumenfieldError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Asset error: {0}")]
    Asset(String),
}

pub type Result<T> = std::result::Result<T, LumenfieldError>;
