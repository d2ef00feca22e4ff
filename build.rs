// build.rs
use std::process::Command;

fn main() {
    // outside a checkout (e.g. a packaged tarball) git fails; fall back to the crate version.
    let git_version = Command::new("git")
        .args(["describe", "--tags", "--dirty"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=BUILD_FLAGS_VERSION={}", git_version);
}
