use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// How the Haplogrep3 distribution is started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Launcher {
    /// Platform build, run directly.
    Native(PathBuf),
    /// Jar build, run as `<java> -jar <jar>`.
    Jar { java: PathBuf, jar: PathBuf },
}

impl Launcher {
    /// Picks the jar launcher for `*.jar` paths, the native one otherwise.
    pub fn detect(executable: impl Into<PathBuf>, java: impl Into<PathBuf>) -> Self {
        let executable = executable.into();
        let is_jar = executable
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("jar"));
        if is_jar {
            Launcher::Jar {
                java: java.into(),
                jar: executable,
            }
        } else {
            Launcher::Native(executable)
        }
    }

    /// The file that has to exist for this launcher to work.
    pub fn distribution(&self) -> &Path {
        match self {
            Launcher::Native(path) => path,
            Launcher::Jar { jar, .. } => jar,
        }
    }

    /// Program plus any arguments that precede the subcommand.
    pub fn prefix(&self) -> Vec<OsString> {
        match self {
            Launcher::Native(path) => vec![path.clone().into_os_string()],
            Launcher::Jar { java, jar } => vec![
                java.clone().into_os_string(),
                "-jar".into(),
                jar.clone().into_os_string(),
            ],
        }
    }

    pub(crate) fn command<I>(&self, args: I) -> Command
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut prefix = self.prefix().into_iter();
        // prefix always holds at least the program
        let program = prefix.next().unwrap_or_default();
        let mut cmd = Command::new(program);
        cmd.args(prefix).args(args);
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jar_paths_use_java() {
        let launcher = Launcher::detect("/app/haplogrep/haplogrep3.jar", "java");
        assert_eq!(
            launcher.prefix(),
            vec![
                OsString::from("java"),
                OsString::from("-jar"),
                OsString::from("/app/haplogrep/haplogrep3.jar")
            ]
        );
        assert_eq!(launcher.distribution(), Path::new("/app/haplogrep/haplogrep3.jar"));
    }

    #[test]
    fn other_paths_run_directly() {
        let launcher = Launcher::detect("/opt/haplogrep/haplogrep3", "java");
        assert_eq!(launcher, Launcher::Native(PathBuf::from("/opt/haplogrep/haplogrep3")));
        assert_eq!(launcher.prefix(), vec![OsString::from("/opt/haplogrep/haplogrep3")]);
    }
}
