use crate::error::{Error, Result};
use crate::haplogrep::launcher::Launcher;
use crate::haplogrep::request::{batch_output_path, ClassificationRequest, ClassifyOptions};
use crate::haplogrep::result::{ClassificationResult, LAUNCH_FAILURE_EXIT_CODE};
use crate::haplogrep::trees::{parse_tree_listing, DEFAULT_TREE};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Handle on an installed Haplogrep3 distribution.
///
/// Every call blocks until the child process exits. There is no timeout:
/// a tool that hangs blocks its caller.
#[derive(Debug, Clone)]
pub struct Haplogrep3 {
    launcher: Launcher,
    default_tree: String,
}

impl Haplogrep3 {
    /// Wraps a native executable, or a jar when the path ends in `.jar`
    /// (started with `java` from `PATH`).
    pub fn new(executable: impl Into<PathBuf>, default_tree: impl Into<String>) -> Result<Self> {
        Self::with_launcher(Launcher::detect(executable, "java"), default_tree)
    }

    /// Fails with [`Error::ExecutableNotFound`] when the distribution file is
    /// missing. This is the only time the executable is checked.
    pub fn with_launcher(launcher: Launcher, default_tree: impl Into<String>) -> Result<Self> {
        let distribution = launcher.distribution();
        if !distribution.exists() {
            return Err(Error::ExecutableNotFound(distribution.to_path_buf()));
        }
        Ok(Self {
            launcher,
            default_tree: default_tree.into(),
        })
    }

    /// Same as [`Haplogrep3::new`] with the stock default tree.
    pub fn with_default_tree(executable: impl Into<PathBuf>) -> Result<Self> {
        Self::new(executable, DEFAULT_TREE)
    }

    pub fn launcher(&self) -> &Launcher {
        &self.launcher
    }

    pub fn default_tree(&self) -> &str {
        &self.default_tree
    }

    /// Full command line for `request`, program first.
    pub fn command_line(&self, request: &ClassificationRequest) -> Vec<OsString> {
        let mut line = self.launcher.prefix();
        line.extend(request.to_args(&self.default_tree));
        line
    }

    /// Runs one classification.
    ///
    /// Returns [`Error::InputNotFound`] without spawning anything when the
    /// input is missing, and [`Error::InvalidSetting`] for a non-finite
    /// heteroplasmy level. Everything that happens after that, including a
    /// tool that cannot be started, is reported in the returned result.
    pub fn classify(&self, request: &ClassificationRequest) -> Result<ClassificationResult> {
        if !request.input.exists() {
            return Err(Error::InputNotFound(request.input.clone()));
        }
        request.options.validate()?;

        let args = request.to_args(&self.default_tree);
        debug!("Running {:?} {:?}", self.launcher.prefix(), args);

        let output_file = request.output.clone();
        let output = match self.launcher.command(args).output() {
            Ok(output) => output,
            Err(e) => {
                warn!("Failed to launch Haplogrep3: {}", e);
                return Ok(ClassificationResult::launch_failure(output_file, e.to_string()));
            }
        };

        // Killed by a signal: no exit code to report.
        let exit_code = output.status.code().unwrap_or(LAUNCH_FAILURE_EXIT_CODE);

        Ok(ClassificationResult::from_process(
            output_file,
            exit_code,
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ))
    }

    /// Classifies each input in order, one process at a time, writing
    /// `<stem>_haplogroups.txt` files into `output_dir` (created if needed).
    ///
    /// Always returns one result per input. A missing input becomes a failed
    /// result rather than aborting the remaining files.
    pub fn classify_batch<P: AsRef<Path>>(
        &self,
        inputs: &[P],
        output_dir: &Path,
        options: &ClassifyOptions,
    ) -> Result<Vec<ClassificationResult>> {
        self.classify_batch_with(inputs, output_dir, options, |_, _| {})
    }

    /// [`Haplogrep3::classify_batch`] with a callback after each file, used by
    /// the CLI to drive a progress bar.
    pub fn classify_batch_with<P, F>(
        &self,
        inputs: &[P],
        output_dir: &Path,
        options: &ClassifyOptions,
        mut on_result: F,
    ) -> Result<Vec<ClassificationResult>>
    where
        P: AsRef<Path>,
        F: FnMut(usize, &ClassificationResult),
    {
        fs::create_dir_all(output_dir)?;

        let mut results = Vec::with_capacity(inputs.len());
        for (index, input) in inputs.iter().enumerate() {
            let input = input.as_ref();
            let output = batch_output_path(input, output_dir);
            info!("Classifying {} -> {}", input.display(), output.display());

            let request = ClassificationRequest::new(input, &output).with_options(options.clone());
            let result = match self.classify(&request) {
                Ok(result) => result,
                Err(e) => ClassificationResult::launch_failure(output, e.to_string()),
            };
            if !result.success() {
                warn!("{} failed: {}", input.display(), result.error_message());
            }

            on_result(index, &result);
            results.push(result);
        }

        Ok(results)
    }

    /// Names of the trees the installed tool ships with.
    pub fn available_trees(&self) -> Result<Vec<String>> {
        let output = self.launcher.command([OsString::from("trees")]).output()?;
        if !output.status.success() {
            return Err(Error::TreeListing(
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ));
        }
        Ok(parse_tree_listing(&String::from_utf8_lossy(&output.stdout)))
    }

    /// See [`read_results`].
    pub fn read_results(&self, output_file: impl AsRef<Path>) -> Result<String> {
        read_results(output_file)
    }
}

/// Reads a finished output file as UTF-8 text.
pub fn read_results(output_file: impl AsRef<Path>) -> Result<String> {
    let path = output_file.as_ref();
    if !path.exists() {
        return Err(Error::OutputNotFound(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}
