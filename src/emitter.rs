//! Dispatch from an operation name to a git query and the definition it yields.

use crate::definition::Definition;
use crate::error::{BuildFlagsError, Result};
use crate::utils::git::Git;
use clap::ValueEnum;
use lazy_static::lazy_static;
use log::info;
use regex::Regex;

pub const DEFAULT_REMOTE: &str = "origin";

lazy_static! {
    // greedy: everything up to the last '/' after the host
    static ref OWNER_RE: Regex = Regex::new(r"github\.com[:/](.*)/").expect("owner regex is valid");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Operation {
    /// current branch name
    #[value(name = "git_branch")]
    GitBranch,
    /// base name of the repository's top-level directory
    #[value(name = "git_repo")]
    GitRepo,
    /// github owner taken from the remote url
    #[value(name = "git_owner")]
    GitOwner,
}

impl Operation {
    pub fn key(self) -> &'static str {
        match self {
            Operation::GitBranch => "GIT_BRANCH",
            Operation::GitRepo => "GIT_REPO",
            Operation::GitOwner => "GIT_OWNER",
        }
    }
}

/// Pull the github owner out of a remote url.
///
/// Both `git@github.com:owner/repo.git` and `https://github.com/owner/repo.git`
/// are accepted. Anything else is an error.
pub fn owner_from_url(url: &str) -> Result<String> {
    OWNER_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| BuildFlagsError::OwnerNotFound(url.to_string()))
}

pub struct Emitter {
    git: Git,
    remote: String,
}

impl Emitter {
    pub fn new(git: Git) -> Self {
        Emitter {
            git,
            remote: DEFAULT_REMOTE.to_string(),
        }
    }

    /// Remote whose url `git_owner` reads.
    pub fn with_remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = remote.into();
        self
    }

    pub fn emit(&self, op: Operation) -> Result<Definition> {
        let value = match op {
            Operation::GitBranch => self.git.current_branch()?,
            Operation::GitRepo => self.git.project_name()?,
            Operation::GitOwner => owner_from_url(&self.git.remote_url(&self.remote)?)?,
        };
        info!("{} = {}", op.key(), value);
        Ok(Definition::new(op.key(), value))
    }
}
