//! Stamps the binary with its release identity.
//!
//! `/status` and the startup log read `ZYPP_VERSION` and `ZYPP_GIT_SHA` back
//! with `env!`. CI may pin either value; local builds derive them from the
//! package manifest and the checked-out commit.

use std::env;
use std::path::Path;
use std::process::Command;

const SHORT_SHA_LEN: usize = 7;

fn main() {
    let version = non_empty_env("ZYPP_VERSION")
        .or_else(|| non_empty_env("CARGO_PKG_VERSION"))
        .unwrap_or_else(|| "unknown".into());

    let git_sha = non_empty_env("ZYPP_GIT_SHA")
        .or_else(|| non_empty_env("GITHUB_SHA").map(|sha| sha.chars().take(SHORT_SHA_LEN).collect()))
        .or_else(head_commit)
        .unwrap_or_else(|| "unknown".into());

    for (key, value) in [("ZYPP_VERSION", &version), ("ZYPP_GIT_SHA", &git_sha)] {
        println!("cargo:rustc-env={key}={value}");
        println!("cargo:rerun-if-env-changed={key}");
    }
    println!("cargo:rerun-if-env-changed=GITHUB_SHA");

    // A new local commit changes HEAD (or the branch ref it points at)
    if Path::new(".git/HEAD").exists() {
        println!("cargo:rerun-if-changed=.git/HEAD");
        println!("cargo:rerun-if-changed=.git/refs/heads");
    }
}

/// Unset and blank variables both count as absent.
fn non_empty_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn head_commit() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", &format!("--short={SHORT_SHA_LEN}"), "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let sha = String::from_utf8(output.stdout).ok()?;
    Some(sha.trim().to_string()).filter(|sha| !sha.is_empty())
}
