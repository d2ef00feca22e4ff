use crate::error::{BuildFlagsError, Result};
use log::debug;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

/// Thin wrapper around the `git` executable.
///
/// Every query spawns one subprocess, waits for it and returns its trimmed
/// stdout. A non-zero exit is turned into [`BuildFlagsError::GitFailed`].
#[derive(Debug, Clone)]
pub struct Git {
    program: OsString,
    dir: Option<PathBuf>,
}

impl Default for Git {
    fn default() -> Self {
        Git::new("git")
    }
}

impl Git {
    pub fn new(program: impl Into<OsString>) -> Self {
        Git {
            program: program.into(),
            dir: None,
        }
    }

    /// Run every query inside `dir` instead of the current directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    /// `git rev-parse --abbrev-ref HEAD`
    pub fn current_branch(&self) -> Result<String> {
        self.run(&["rev-parse", "--abbrev-ref", "HEAD"])
    }

    /// `git rev-parse --show-toplevel`
    pub fn toplevel(&self) -> Result<PathBuf> {
        self.run(&["rev-parse", "--show-toplevel"]).map(PathBuf::from)
    }

    /// Base name of the repository's top-level directory.
    pub fn project_name(&self) -> Result<String> {
        let toplevel = self.toplevel()?;
        toplevel
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .ok_or_else(|| BuildFlagsError::NoRepoName(toplevel.display().to_string()))
    }

    /// `git config --get remote.<remote>.url`
    pub fn remote_url(&self, remote: &str) -> Result<String> {
        let key = format!("remote.{}.url", remote);
        self.run(&["config", "--get", &key])
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let mut command = Command::new(&self.program);
        if let Some(dir) = &self.dir {
            command.current_dir(dir);
        }
        command.args(args);

        debug!("running {:?} {:?} in {:?}", self.program, args, self.dir);
        let output = command
            .output()
            .map_err(|source| BuildFlagsError::GitUnavailable {
                program: self.program.to_string_lossy().into_owned(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            debug!("git exited with {}: {}", output.status, stderr);
            return Err(BuildFlagsError::GitFailed {
                args: args.join(" "),
                status: output.status,
                stderr,
            });
        }

        let stdout = String::from_utf8(output.stdout)?;
        debug!("git returned {:?}", stdout.trim());
        Ok(stdout.trim().to_string())
    }
}
