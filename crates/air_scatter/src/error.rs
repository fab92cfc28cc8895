//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias.
//! Variants cover invalid configuration, unusable boundary geometry, IO, and
//! generic errors. Generation and projection never fail through [Result]:
//! their degraded outcomes are value-level (shorter output, `None` points).
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_conversions_use_other_variant() {
        let owned: Error = String::from("boom").into();
        assert!(matches!(owned, Error::Other(ref msg) if msg == "boom"));

        let borrowed: Error = "issue".into();
        assert!(matches!(borrowed, Error::Other(ref msg) if msg == "issue"));
    }

    #[test]
    fn config_errors_carry_their_message() {
        let err = Error::InvalidConfig("spans must be > 0".into());
        assert_eq!(err.to_string(), "invalid configuration: spans must be > 0");
    }
}
