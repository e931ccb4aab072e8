use crate::error::{Error, Result};
use crate::haplogrep::{Haplogrep3, Launcher, DEFAULT_TREE};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Where the container image installs the Haplogrep3 jar.
pub const CONTAINER_JAR: &str = "/app/haplogrep/haplogrep3.jar";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub executable: Option<PathBuf>,
    #[serde(default = "default_tree")]
    pub default_tree: String,
    #[serde(default = "default_java")]
    pub java: PathBuf,
    #[serde(default)]
    pub upload_dir: Option<PathBuf>,
    #[serde(default)]
    pub results_dir: Option<PathBuf>,
}

fn default_tree() -> String {
    DEFAULT_TREE.to_string()
}

fn default_java() -> PathBuf {
    PathBuf::from("java")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            executable: None,
            default_tree: default_tree(),
            java: default_java(),
            upload_dir: None,
            results_dir: None,
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "haplogrep", "haplogrep-wrapper")
}

impl Config {
    pub fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Loads the user config, falling back to defaults when there is none or
    /// it cannot be parsed.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                match Self::load_from(&config_path) {
                    Ok(config) => return config,
                    Err(e) => warn!("Ignoring {}: {}", config_path.display(), e),
                }
            }
        }
        Config::default()
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::config_path()
            .ok_or_else(|| Error::Config("Failed to determine project directories".to_string()))?;
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Executable to use: the explicit override, then the configured path,
    /// then the container jar when present.
    pub fn resolve_executable(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = &self.executable {
            return Ok(path.clone());
        }
        let container = Path::new(CONTAINER_JAR);
        if container.exists() {
            return Ok(container.to_path_buf());
        }
        Err(Error::Config(
            "no Haplogrep3 executable configured; pass --haplogrep <path> or run `haplogrep-wrapper config --executable <path>`"
                .to_string(),
        ))
    }

    pub fn launcher(&self, executable: PathBuf) -> Launcher {
        Launcher::detect(executable, self.java.clone())
    }

    /// Builds the wrapper; fails if the resolved executable does not exist.
    pub fn wrapper(&self, explicit: Option<&Path>) -> Result<Haplogrep3> {
        let executable = self.resolve_executable(explicit)?;
        Haplogrep3::with_launcher(self.launcher(executable), self.default_tree.clone())
    }

    pub fn upload_dir(&self) -> PathBuf {
        self.upload_dir
            .clone()
            .unwrap_or_else(|| data_dir().join("uploads"))
    }

    pub fn results_dir(&self) -> PathBuf {
        self.results_dir
            .clone()
            .unwrap_or_else(|| data_dir().join("results"))
    }
}

fn data_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
