use crate::utils::progress_bar_builder::ProgressBarBuilder;
use anyhow::{bail, Result};
use haplogrep_wrapper::config::Config;
use haplogrep_wrapper::haplogrep::ClassifyOptions;
use std::path::{Path, PathBuf};

pub fn run(
    config: &Config,
    haplogrep: Option<&Path>,
    inputs: Vec<PathBuf>,
    output_dir: PathBuf,
    options: ClassifyOptions,
    json: bool,
) -> Result<()> {
    let wrapper = super::open_wrapper(config, haplogrep)?;

    let progress = ProgressBarBuilder::new("Classifying VCF files")
        .with_length(inputs.len() as u64)
        .build()?;
    let results = wrapper.classify_batch_with(&inputs, &output_dir, &options, |index, _| {
        progress.set_message(format!("{}", inputs[index].display()));
        progress.inc(1);
    });
    progress.finish_and_clear();
    let results = results?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    }

    let successful = results.iter().filter(|r| r.success()).count();
    let failed = results.len() - successful;

    if !json {
        println!("Batch processing complete:");
        println!("  Total files: {}", results.len());
        println!("  Successful: {}", successful);
        println!("  Failed: {}", failed);

        if failed > 0 {
            println!("\nFailed files:");
            for result in results.iter().filter(|r| !r.success()) {
                let output_name = result
                    .output_file()
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                println!("  - {}: {}", output_name, result.error_message().trim_end());
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} files failed", failed, results.len());
    }
    Ok(())
}
