//! Wrapper around the Haplogrep3 mitochondrial haplogroup classifier.
//!
//! [`haplogrep::Haplogrep3`] runs the external tool, [`form`] backs the
//! upload-and-report workflow, and [`config`] holds the saved user settings.

pub mod config;
pub mod error;
pub mod form;
pub mod haplogrep;

pub use error::{Error, Result};
pub use haplogrep::{
    ClassificationMetric, ClassificationRequest, ClassificationResult, ClassifyOptions, Haplogrep3,
};
