//! Build script that stamps the CLI version and the HTTP user agent.
//!
//! `PEXELS_VERSION` is shown by `--version`; `PEXELS_USER_AGENT` is sent with
//! every API and image request so Pexels can attribute traffic to this tool.

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");
    println!("cargo:rerun-if-env-changed=PEXELS_BUILD_VERSION");

    // Packagers can pin the version without a git checkout.
    let version = std::env::var("PEXELS_BUILD_VERSION")
        .ok()
        .filter(|version| !version.trim().is_empty())
        .or_else(describe_checkout)
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=PEXELS_VERSION={}", version);
    println!(
        "cargo:rustc-env=PEXELS_USER_AGENT=pexels-cli/{} ({})",
        version,
        std::env::var("TARGET").unwrap_or_else(|_| "unknown".to_string())
    );
}

/// `git describe` of the checkout, with a `-dirty` suffix for local edits.
fn describe_checkout() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let described = String::from_utf8(output.stdout).ok()?;
    match described.trim() {
        "" => None,
        tag => Some(tag.trim_start_matches('v').to_string()),
    }
}
