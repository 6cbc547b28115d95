// src/error.rs
//! Crate error type. Generation itself never fails; only parsing does.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A role tag outside the closed set.
    #[error("unknown role `{0}`")]
    UnknownRole(String),

    /// Malformed generator configuration.
    #[error("invalid generator config: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
