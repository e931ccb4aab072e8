pub mod analyze;
pub mod batch;
pub mod classify;
pub mod config;
pub mod show;
pub mod trees;

use crate::utils::external_tools::check_java;
use anyhow::Result;
use haplogrep_wrapper::config::Config;
use haplogrep_wrapper::haplogrep::{Haplogrep3, Launcher};
use std::path::Path;

/// Resolves and validates the Haplogrep3 distribution for a command.
pub(crate) fn open_wrapper(config: &Config, haplogrep: Option<&Path>) -> Result<Haplogrep3> {
    let wrapper = config.wrapper(haplogrep)?;
    if let Launcher::Jar { java, .. } = wrapper.launcher() {
        check_java(java)?;
    }
    Ok(wrapper)
}
