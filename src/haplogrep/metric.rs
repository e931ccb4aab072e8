use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Similarity metrics Haplogrep3 accepts for `--metric`.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassificationMetric {
    /// Tool default
    #[value(name = "kulczynski")]
    Kulczynski,
    #[value(name = "hamming")]
    Hamming,
    #[value(name = "jaccard")]
    Jaccard,
}

impl ClassificationMetric {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassificationMetric::Kulczynski => "kulczynski",
            ClassificationMetric::Hamming => "hamming",
            ClassificationMetric::Jaccard => "jaccard",
        }
    }
}

impl fmt::Display for ClassificationMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metric options presented by the upload form.
///
/// The form lists Kimura alongside the metrics the classifier knows. Kimura
/// has no counterpart in [`ClassificationMetric`], so every choice goes
/// through [`MetricChoice::to_metric`] and Kimura is refused there instead
/// of being dropped on the floor.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MetricChoice {
    #[default]
    #[value(name = "kulczynski")]
    Kulczynski,
    #[value(name = "hamming")]
    Hamming,
    #[value(name = "jaccard")]
    Jaccard,
    #[value(name = "kimura")]
    Kimura,
}

impl MetricChoice {
    pub const ALL: [MetricChoice; 4] = [
        MetricChoice::Kulczynski,
        MetricChoice::Hamming,
        MetricChoice::Jaccard,
        MetricChoice::Kimura,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            MetricChoice::Kulczynski => "KULCZYNSKI",
            MetricChoice::Hamming => "HAMMING",
            MetricChoice::Jaccard => "JACCARD",
            MetricChoice::Kimura => "KIMURA",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MetricChoice::Kulczynski => "Kulczynski (default)",
            MetricChoice::Hamming => "Hamming Distance",
            MetricChoice::Jaccard => "Jaccard Index",
            MetricChoice::Kimura => "Kimura Distance",
        }
    }

    pub fn to_metric(self) -> Result<ClassificationMetric> {
        match self {
            MetricChoice::Kulczynski => Ok(ClassificationMetric::Kulczynski),
            MetricChoice::Hamming => Ok(ClassificationMetric::Hamming),
            MetricChoice::Jaccard => Ok(ClassificationMetric::Jaccard),
            MetricChoice::Kimura => Err(Error::UnsupportedMetric(self.key().to_string())),
        }
    }
}

impl From<ClassificationMetric> for MetricChoice {
    fn from(metric: ClassificationMetric) -> Self {
        match metric {
            ClassificationMetric::Kulczynski => MetricChoice::Kulczynski,
            ClassificationMetric::Hamming => MetricChoice::Hamming,
            ClassificationMetric::Jaccard => MetricChoice::Jaccard,
        }
    }
}
