use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;

/// Jar distributions need a working Java runtime; probe it before the first
/// classification so a missing JVM is reported up front.
pub fn check_java(java: &Path) -> Result<()> {
    let output = Command::new(java)
        .arg("-version")
        .output()
        .with_context(|| {
            format!(
                "{} not found. Please install a Java runtime (11 or newer) and ensure it's in your PATH",
                java.display()
            )
        })?;

    if !output.status.success() {
        bail!(
            "{} -version failed: {}",
            java.display(),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(())
}
