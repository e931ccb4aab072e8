//! Crate-level error type and `Result` alias.
//!
//! Only misuse is reported through this type: a missing executable, a
//! missing input or output file, an unusable setting. An external tool that
//! runs and fails is not an error here; it comes back as a
//! [`ClassificationResult`](crate::haplogrep::ClassificationResult) with
//! `success == false`.
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Haplogrep3 executable not found at: {}", .0.display())]
    ExecutableNotFound(PathBuf),

    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Output file not found: {}", .0.display())]
    OutputNotFound(PathBuf),

    #[error("Failed to get available trees: {0}")]
    TreeListing(String),

    #[error("Metric '{0}' is offered by the form but not supported by Haplogrep3")]
    UnsupportedMetric(String),

    #[error("Invalid setting: {name}={value} ({reason})")]
    InvalidSetting {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for the file-not-found family: executable, input or output.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::ExecutableNotFound(_) | Error::InputNotFound(_) | Error::OutputNotFound(_)
        )
    }
}
