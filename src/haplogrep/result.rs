use serde::Serialize;
use std::path::{Path, PathBuf};

/// Exit code recorded when the tool could not be launched or talked to.
pub const LAUNCH_FAILURE_EXIT_CODE: i32 = -1;

/// Terminal outcome of one `classify` invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    output_file: PathBuf,
    success: bool,
    stdout: String,
    error_message: String,
    exit_code: i32,
}

impl ClassificationResult {
    /// Classifies a finished process. Haplogrep3 frequently reports errors
    /// on stdout, so a failed run with an empty stderr falls back to
    /// [`scan_stdout_for_error`].
    pub fn from_process(output_file: PathBuf, exit_code: i32, stdout: String, stderr: String) -> Self {
        let success = exit_code == 0;
        let error_message = if success || !stderr.is_empty() {
            stderr
        } else if stdout.is_empty() {
            String::new()
        } else {
            scan_stdout_for_error(&stdout)
                .map(str::to_string)
                .unwrap_or_else(|| stdout.clone())
        };

        Self {
            output_file,
            success,
            stdout,
            error_message,
            exit_code,
        }
    }

    pub fn launch_failure(output_file: PathBuf, message: impl Into<String>) -> Self {
        Self {
            output_file,
            success: false,
            stdout: String::new(),
            error_message: message.into(),
            exit_code: LAUNCH_FAILURE_EXIT_CODE,
        }
    }

    pub fn output_file(&self) -> &Path {
        &self.output_file
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }
}

/// Finds the error line in a failed run's stdout.
///
/// Returns the first line containing `error:` in any letter case, trimmed of
/// surrounding whitespace, or `None` when no line qualifies.
pub fn scan_stdout_for_error(stdout: &str) -> Option<&str> {
    stdout
        .split('\n')
        .find(|line| line.to_ascii_lowercase().contains("error:"))
        .map(str::trim)
}
