use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildFlagsError {
    #[error("failed to run `{program}`: {source}")]
    GitUnavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`git {args}` failed ({status}): {stderr}")]
    GitFailed {
        args: String,
        status: ExitStatus,
        stderr: String,
    },
    #[error("git output is not valid utf-8")]
    InvalidOutput(#[from] std::string::FromUtf8Error),
    #[error("can not take a repository name from {0:?}")]
    NoRepoName(String),
    #[error("no github owner in remote url {0:?}")]
    OwnerNotFound(String),
}

pub type Result<T> = std::result::Result<T, BuildFlagsError>;
