use anyhow::{Context, Result};
use haplogrep_wrapper::config::Config;
use std::path::PathBuf;

pub struct ConfigUpdate {
    pub executable: Option<PathBuf>,
    pub default_tree: Option<String>,
    pub java: Option<PathBuf>,
    pub upload_dir: Option<PathBuf>,
    pub results_dir: Option<PathBuf>,
}

impl ConfigUpdate {
    fn is_empty(&self) -> bool {
        self.executable.is_none()
            && self.default_tree.is_none()
            && self.java.is_none()
            && self.upload_dir.is_none()
            && self.results_dir.is_none()
    }

    fn apply(self, config: &mut Config) {
        if let Some(executable) = self.executable {
            config.executable = Some(executable);
        }
        if let Some(tree) = self.default_tree {
            config.default_tree = tree;
        }
        if let Some(java) = self.java {
            config.java = java;
        }
        if let Some(dir) = self.upload_dir {
            config.upload_dir = Some(dir);
        }
        if let Some(dir) = self.results_dir {
            config.results_dir = Some(dir);
        }
    }
}

pub fn run(mut config: Config, update: ConfigUpdate) -> Result<()> {
    if !update.is_empty() {
        update.apply(&mut config);
        let path = config.save().context("Failed to save configuration")?;
        println!("Configuration saved to {}", path.display());
    } else if let Some(path) = Config::config_path() {
        println!("# {}", path.display());
    }

    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}
