//! Embeds the commit `cardinal --version` reports.
//!
//! Release builds from a tagged commit print the package version; every other
//! build prints `dev@<short hash>` (or `dev@unknown` outside a git checkout).

use std::process::{Command, Output};

fn git(args: &[&str]) -> Option<Output> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
}

fn main() {
    // A new commit or checkout changes the version string
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");

    let hash = git(&["rev-parse", "--short", "HEAD"])
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .unwrap_or_default();
    let on_release_tag = git(&["describe", "--exact-match", "--tags", "HEAD"]).is_some();

    println!("cargo:rustc-env=GIT_HASH={hash}");
    println!("cargo:rustc-env=ON_RELEASE_TAG={on_release_tag}");
}
