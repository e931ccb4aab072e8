//! Upload form workflow: take an uploaded VCF and the user's settings, run
//! the classification, and hand back something ready to display.

pub mod report;

use crate::error::{Error, Result};
use crate::haplogrep::{
    read_results, ClassificationRequest, ClassificationResult, ClassifyOptions, Haplogrep3,
    MetricChoice, DEFAULT_TREE,
};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use tempfile::TempPath;
use tracing::debug;

pub use report::{Report, ResultTable};

pub const HITS_RANGE: RangeInclusive<u32> = 1..=10;
pub const HET_LEVEL_RANGE: RangeInclusive<f64> = 0.0..=1.0;

pub const TROUBLESHOOTING_HINTS: &[&str] = &[
    "Check that the Haplogrep3 path is correct",
    "Confirm that the VCF file is well formed",
    "Try selecting a different phylogenetic tree",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSettings {
    pub tree: String,
    pub metric: MetricChoice,
    pub extend_report: bool,
    pub hits: u32,
    pub het_level: f64,
    pub keep_files: bool,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            tree: DEFAULT_TREE.to_string(),
            metric: MetricChoice::default(),
            extend_report: true,
            hits: 3,
            het_level: 0.9,
            keep_files: false,
        }
    }
}

impl FormSettings {
    /// Checks the settings and maps them onto classifier options.
    pub fn to_options(&self) -> Result<ClassifyOptions> {
        let metric = self.metric.to_metric()?;
        if !HITS_RANGE.contains(&self.hits) {
            return Err(Error::InvalidSetting {
                name: "hits",
                value: self.hits.to_string(),
                reason: format!("must be between {} and {}", HITS_RANGE.start(), HITS_RANGE.end()),
            });
        }
        if !HET_LEVEL_RANGE.contains(&self.het_level) {
            return Err(Error::InvalidSetting {
                name: "het_level",
                value: self.het_level.to_string(),
                reason: "must be between 0.0 and 1.0".to_string(),
            });
        }

        Ok(ClassifyOptions {
            tree: Some(self.tree.clone()),
            metric: Some(metric),
            extend_report: self.extend_report,
            hits: Some(self.hits),
            het_level: Some(self.het_level),
            ..ClassifyOptions::default()
        })
    }
}

/// An uploaded file as received from the client.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::InputNotFound(path.to_path_buf()));
        }
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(file_name, fs::read(path)?))
    }

    /// Final path component of the client-supplied name.
    fn safe_name(&self) -> String {
        Path::new(&self.file_name)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "upload.vcf".to_string())
    }
}

/// Where uploads and their results are kept when the user asks for it.
#[derive(Debug, Clone)]
pub struct StorageDirs {
    pub upload_dir: PathBuf,
    pub results_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeptFiles {
    pub input: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug)]
pub enum FormOutcome {
    Classified {
        result: ClassificationResult,
        content: String,
        table: ResultTable,
        kept: Option<KeptFiles>,
        finished_at: DateTime<Local>,
    },
    Failed {
        result: ClassificationResult,
    },
}

impl FormOutcome {
    pub fn result(&self) -> &ClassificationResult {
        match self {
            FormOutcome::Classified { result, .. } | FormOutcome::Failed { result } => result,
        }
    }
}

/// Input/output paths for one submission. Temporary paths are owned here
/// until [`Staged::release`].
struct Staged {
    input: PathBuf,
    output: PathBuf,
    temporary: Vec<TempPath>,
}

impl Staged {
    fn in_storage(upload: &Upload, dirs: &StorageDirs) -> Result<Self> {
        fs::create_dir_all(&dirs.upload_dir)?;
        fs::create_dir_all(&dirs.results_dir)?;

        let input = dirs.upload_dir.join(upload.safe_name());
        fs::write(&input, &upload.bytes)?;
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let output = dirs.results_dir.join(format!("{}_haplogroups.txt", stem));

        Ok(Self {
            input,
            output,
            temporary: Vec::new(),
        })
    }

    fn in_temp_dir(upload: &Upload) -> Result<Self> {
        let mut input = tempfile::Builder::new()
            .prefix("haplogrep-")
            .suffix(".vcf")
            .tempfile()?;
        input.write_all(&upload.bytes)?;
        input.flush()?;
        let input = input.into_temp_path();

        let output = tempfile::Builder::new()
            .prefix("haplogrep-")
            .suffix(".txt")
            .tempfile()?
            .into_temp_path();

        Ok(Self {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            temporary: vec![input, output],
        })
    }

    fn kept_files(&self) -> Option<KeptFiles> {
        self.temporary.is_empty().then(|| KeptFiles {
            input: self.input.clone(),
            output: self.output.clone(),
        })
    }

    /// Best-effort release: removes temporary files and ignores any failure
    /// to do so. Kept files are left alone.
    fn release(self) {
        for path in self.temporary {
            let staged = path.to_path_buf();
            if let Err(e) = path.close() {
                debug!("Could not remove temporary file {}: {}", staged.display(), e);
            }
        }
    }
}

/// Runs one form submission end to end.
///
/// Invalid settings (including the unsupported Kimura metric) are rejected
/// before anything touches the disk. Temporary files are always released,
/// whatever the outcome.
pub fn submit(
    wrapper: &Haplogrep3,
    upload: &Upload,
    settings: &FormSettings,
    dirs: &StorageDirs,
) -> Result<FormOutcome> {
    let options = settings.to_options()?;
    let staged = if settings.keep_files {
        Staged::in_storage(upload, dirs)?
    } else {
        Staged::in_temp_dir(upload)?
    };

    let outcome = classify_staged(wrapper, &staged, options);
    staged.release();
    outcome
}

fn classify_staged(wrapper: &Haplogrep3, staged: &Staged, options: ClassifyOptions) -> Result<FormOutcome> {
    let request = ClassificationRequest::new(&staged.input, &staged.output).with_options(options);
    let result = wrapper.classify(&request)?;
    if !result.success() {
        return Ok(FormOutcome::Failed { result });
    }

    let content = read_results(result.output_file())?;
    let table = ResultTable::parse(&content);
    Ok(FormOutcome::Classified {
        result,
        content,
        table,
        kept: staged.kept_files(),
        finished_at: Local::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_form() {
        let settings = FormSettings::default();
        let options = settings.to_options().unwrap();
        assert_eq!(options.tree.as_deref(), Some(DEFAULT_TREE));
        assert!(options.extend_report);
        assert_eq!(options.hits, Some(3));
        assert_eq!(options.het_level, Some(0.9));
        assert!(!settings.keep_files);
    }

    #[test]
    fn out_of_range_settings_are_rejected() {
        let hits = FormSettings {
            hits: 0,
            ..FormSettings::default()
        };
        assert!(matches!(
            hits.to_options(),
            Err(Error::InvalidSetting { name: "hits", .. })
        ));

        let het = FormSettings {
            het_level: 1.5,
            ..FormSettings::default()
        };
        assert!(matches!(
            het.to_options(),
            Err(Error::InvalidSetting { name: "het_level", .. })
        ));
    }

    #[test]
    fn kimura_never_reaches_the_classifier() {
        let settings = FormSettings {
            metric: MetricChoice::Kimura,
            ..FormSettings::default()
        };
        assert!(matches!(settings.to_options(), Err(Error::UnsupportedMetric(_))));
    }

    #[test]
    fn upload_names_cannot_escape_the_upload_dir() {
        assert_eq!(Upload::new("../../etc/x.vcf", vec![]).safe_name(), "x.vcf");
        assert_eq!(Upload::new("", vec![]).safe_name(), "upload.vcf");
    }
}
