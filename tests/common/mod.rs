#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::{Path, PathBuf};

pub struct ScratchRepo {
    // keeps the directory alive for the test's lifetime
    pub tmp: TempDir,
    pub path: PathBuf,
}

#[fixture]
pub fn scratch_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A repository named `myproj` on branch `main` with one empty commit.
#[fixture]
pub fn repo(scratch_dir: TempDir) -> ScratchRepo {
    let child = scratch_dir.child("myproj");
    child.create_dir_all().expect("Failed to create repo dir");
    let path = child.path().to_path_buf();

    run_git_command(&path, &["init", "-q"]).assert().success();
    run_git_command(
        &path,
        &[
            "-c",
            "user.name=tester",
            "-c",
            "user.email=tester@example.com",
            "-c",
            "commit.gpgsign=false",
            "commit",
            "-q",
            "--allow-empty",
            "-m",
            "Initial commit",
        ],
    )
    .assert()
    .success();
    run_git_command(&path, &["branch", "-M", "main"])
        .assert()
        .success();

    ScratchRepo {
        tmp: scratch_dir,
        path,
    }
}

pub fn add_remote(dir: &Path, name: &str, url: &str) {
    run_git_command(dir, &["remote", "add", name, url])
        .assert()
        .success();
}

pub fn run_build_flags(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("build_flags").expect("Failed to find build_flags binary");
    cmd.env_remove("BUILD_FLAGS_DIR")
        .env_remove("BUILD_FLAGS_GIT")
        .env_remove("BUILD_FLAGS_REMOTE");
    clear_git_env(cmd.current_dir(dir));
    cmd.args(args);
    cmd
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    clear_git_env(cmd.current_dir(dir));
    cmd.args(args);
    cmd
}

/// The line the helper prints with the default quoting.
pub fn escaped(key: &str, value: &str) -> String {
    format!("-D {}=\\\"{}\\\"\n", key, value)
}

/// Run to success and hand back stdout.
pub fn success_stdout(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("stdout is not utf-8")
}

/// Keep a surrounding hook or CI step from pointing git at its own repository.
fn clear_git_env(cmd: &mut Command) -> &mut Command {
    cmd.env_remove("GIT_DIR")
        .env_remove("GIT_WORK_TREE")
        .env_remove("GIT_CEILING_DIRECTORIES")
}
