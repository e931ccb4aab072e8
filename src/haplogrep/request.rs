use crate::error::{Error, Result};
use crate::haplogrep::metric::ClassificationMetric;
use clap::Args;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Optional `classify` parameters, shared by single and batch runs.
#[derive(Args, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassifyOptions {
    /// Classification tree (defaults to the configured tree)
    #[arg(long)]
    pub tree: Option<String>,

    /// Similarity metric
    #[arg(long, value_enum)]
    pub metric: Option<ClassificationMetric>,

    /// Include additional SNP information in the report
    #[arg(long)]
    pub extend_report: bool,

    /// Restrict to genotyping array SNPs (semicolon-separated ranges)
    #[arg(long)]
    pub chip: Option<String>,

    /// Skip mtDNA nomenclature correction
    #[arg(long)]
    pub skip_alignment_rules: bool,

    /// Export the best n hits for each sample
    #[arg(long)]
    pub hits: Option<u32>,

    /// Also write FASTA output
    #[arg(long)]
    pub write_fasta: bool,

    /// Also write a multiple sequence alignment
    #[arg(long)]
    pub write_fasta_msa: bool,

    /// Heteroplasmy level threshold
    #[arg(long = "het-level")]
    pub het_level: Option<f64>,
}

impl ClassifyOptions {
    /// Rejects values the tool cannot take. Checked before anything is spawned.
    pub fn validate(&self) -> Result<()> {
        if let Some(level) = self.het_level {
            if !level.is_finite() {
                return Err(Error::InvalidSetting {
                    name: "het_level",
                    value: level.to_string(),
                    reason: "must be a finite number".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// One `classify` invocation: where to read, where to write, how to classify.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassificationRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub options: ClassifyOptions,
}

impl ClassificationRequest {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            options: ClassifyOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ClassifyOptions) -> Self {
        self.options = options;
        self
    }

    /// Tool arguments from the `classify` token onwards.
    ///
    /// `--in`, `--out` and `--tree` always come first; optional flags follow
    /// in a fixed order. `--hetLevel` is the one value flag passed as a single
    /// `flag=value` token.
    pub fn to_args(&self, default_tree: &str) -> Vec<OsString> {
        let opts = &self.options;
        let mut args: Vec<OsString> = vec![
            "classify".into(),
            "--in".into(),
            self.input.clone().into_os_string(),
            "--out".into(),
            self.output.clone().into_os_string(),
            "--tree".into(),
            opts.tree
                .as_deref()
                .filter(|tree| !tree.is_empty())
                .unwrap_or(default_tree)
                .into(),
        ];

        if let Some(metric) = opts.metric {
            args.push("--metric".into());
            args.push(metric.as_str().into());
        }
        if opts.extend_report {
            args.push("--extend-report".into());
        }
        if let Some(chip) = opts.chip.as_deref().filter(|chip| !chip.is_empty()) {
            args.push("--chip".into());
            args.push(chip.into());
        }
        if opts.skip_alignment_rules {
            args.push("--skip-alignment-rules".into());
        }
        if let Some(hits) = opts.hits {
            args.push("--hits".into());
            args.push(hits.to_string().into());
        }
        if opts.write_fasta {
            args.push("--write-fasta".into());
        }
        if opts.write_fasta_msa {
            args.push("--write-fasta-msa".into());
        }
        if let Some(level) = opts.het_level {
            args.push(format!("--hetLevel={}", format_het_level(level)).into());
        }

        args
    }
}

/// Shortest round-trip form with a decimal point on whole numbers (`1.0`)
/// and a signed two-digit exponent for very small or large values (`5e-05`).
fn format_het_level(level: f64) -> String {
    let repr = format!("{:?}", level);
    if let Some((mantissa, exponent)) = repr.split_once('e') {
        if let Ok(exp) = exponent.parse::<i32>() {
            let sign = if exp < 0 { '-' } else { '+' };
            return format!("{}e{}{:02}", mantissa, sign, exp.abs());
        }
    }
    repr
}

/// Output file name a batch run uses for `input`: `<stem>_haplogroups.txt`.
pub fn batch_output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_dir.join(format!("{}_haplogroups.txt", stem))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: Vec<OsString>) -> Vec<String> {
        args.into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn required_flags_follow_classify() {
        let request = ClassificationRequest::new("in.vcf", "out.txt");
        assert_eq!(
            strings(request.to_args("phylotree-fu-rcrs@1.2")),
            vec![
                "classify",
                "--in",
                "in.vcf",
                "--out",
                "out.txt",
                "--tree",
                "phylotree-fu-rcrs@1.2"
            ]
        );
    }

    #[test]
    fn request_tree_overrides_default() {
        let request = ClassificationRequest::new("a.vcf", "b.txt").with_options(ClassifyOptions {
            tree: Some("phylotree-rcrs@17.2".to_string()),
            ..Default::default()
        });
        let args = strings(request.to_args("phylotree-fu-rcrs@1.2"));
        assert_eq!(args[5..7], ["--tree", "phylotree-rcrs@17.2"]);
    }

    #[test]
    fn optional_flags_keep_fixed_order() {
        let request = ClassificationRequest::new("a.vcf", "b.txt").with_options(ClassifyOptions {
            tree: None,
            metric: Some(ClassificationMetric::Hamming),
            extend_report: true,
            chip: Some("1-100;200-300".to_string()),
            skip_alignment_rules: true,
            hits: Some(3),
            write_fasta: true,
            write_fasta_msa: true,
            het_level: Some(0.9),
        });
        let args = strings(request.to_args("t"));
        assert_eq!(
            args[7..],
            [
                "--metric",
                "hamming",
                "--extend-report",
                "--chip",
                "1-100;200-300",
                "--skip-alignment-rules",
                "--hits",
                "3",
                "--write-fasta",
                "--write-fasta-msa",
                "--hetLevel=0.9"
            ]
        );
    }

    #[test]
    fn empty_tree_and_chip_count_as_omitted() {
        let request = ClassificationRequest::new("a.vcf", "b.txt").with_options(ClassifyOptions {
            tree: Some(String::new()),
            chip: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(
            strings(request.to_args("phylotree-fu-rcrs@1.2")),
            vec!["classify", "--in", "a.vcf", "--out", "b.txt", "--tree", "phylotree-fu-rcrs@1.2"]
        );
    }

    #[test]
    fn tiny_het_levels_use_a_two_digit_exponent() {
        assert_eq!(format_het_level(5e-5), "5e-05");
        assert_eq!(format_het_level(1.5e-7), "1.5e-07");
        assert_eq!(format_het_level(1e16), "1e+16");
        assert_eq!(format_het_level(0.25), "0.25");
    }

    #[test]
    fn non_finite_het_level_is_rejected() {
        for level in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let options = ClassifyOptions {
                het_level: Some(level),
                ..Default::default()
            };
            assert!(matches!(
                options.validate(),
                Err(Error::InvalidSetting { name: "het_level", .. })
            ));
        }
        assert!(ClassifyOptions::default().validate().is_ok());
    }

    #[test]
    fn het_level_is_a_single_token() {
        for (level, token) in [(0.9, "--hetLevel=0.9"), (1.0, "--hetLevel=1.0"), (0.0, "--hetLevel=0.0")] {
            let request = ClassificationRequest::new("a.vcf", "b.txt").with_options(ClassifyOptions {
                het_level: Some(level),
                ..Default::default()
            });
            let args = strings(request.to_args("t"));
            assert_eq!(args.last().map(String::as_str), Some(token));
            assert!(!args.iter().any(|a| a == "--hetLevel"));
        }
    }

    #[test]
    fn batch_output_uses_input_stem() {
        let out = batch_output_path(Path::new("/data/vcf/1001.vcf"), Path::new("/results"));
        assert_eq!(out, PathBuf::from("/results/1001_haplogroups.txt"));
    }
}
