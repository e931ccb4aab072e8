use crate::utils::progress_bar_builder::ProgressBarBuilder;
use anyhow::{bail, Result};
use haplogrep_wrapper::config::Config;
use haplogrep_wrapper::haplogrep::{ClassificationRequest, ClassifyOptions};
use std::path::{Path, PathBuf};

pub fn run(
    config: &Config,
    haplogrep: Option<&Path>,
    input: PathBuf,
    output: PathBuf,
    options: ClassifyOptions,
    json: bool,
) -> Result<()> {
    let wrapper = super::open_wrapper(config, haplogrep)?;
    let request = ClassificationRequest::new(input, output).with_options(options);

    let progress = ProgressBarBuilder::new(format!("Classifying {}...", request.input.display()))
        .with_tick()
        .build()?;
    let result = wrapper.classify(&request);
    progress.finish_and_clear();
    let result = result?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.success() {
        println!("Classification successful!");
        println!("Results saved to: {}", result.output_file().display());
    }

    if !result.success() {
        bail!(
            "Classification failed (exit code {}): {}",
            result.exit_code(),
            result.error_message().trim_end()
        );
    }
    Ok(())
}
