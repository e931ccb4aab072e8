use crate::utils::progress_bar_builder::ProgressBarBuilder;
use anyhow::{bail, Result};
use haplogrep_wrapper::config::Config;
use haplogrep_wrapper::form::{self, FormOutcome, FormSettings, Report, StorageDirs, Upload};
use std::path::{Path, PathBuf};

pub fn run(config: &Config, haplogrep: Option<&Path>, vcf: PathBuf, settings: FormSettings) -> Result<()> {
    // Reject bad settings before resolving or probing the executable.
    settings.to_options()?;

    let wrapper = super::open_wrapper(config, haplogrep)?;
    let upload = Upload::from_path(&vcf)?;
    let dirs = StorageDirs {
        upload_dir: config.upload_dir(),
        results_dir: config.results_dir(),
    };

    let progress = ProgressBarBuilder::new("Analyzing VCF file... please wait.")
        .with_tick()
        .build()?;
    let outcome = form::submit(&wrapper, &upload, &settings, &dirs);
    progress.finish_and_clear();
    let outcome = outcome?;

    print!(
        "{}",
        Report {
            outcome: &outcome,
            settings: &settings,
        }
    );

    if let FormOutcome::Failed { result } = &outcome {
        bail!("classification failed with exit code {}", result.exit_code());
    }
    Ok(())
}
