use std::path::Path;
use std::process::{Command, Output};

/// Run the CLI with an isolated HOME so the user's settings are never read.
pub fn run_cli_with_env(args: &[&str], home: &Path, env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pexels"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_CONFIG_HOME", home.join("config"));
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("PEXELS_API_KEY");
    cmd.env_remove("PEXELS_PROXY");
    cmd.env_remove("RUST_LOG");
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI with an isolated HOME and expect success.
pub fn run_cli_with_env_success(args: &[&str], home: &Path, env: &[(&str, &str)]) -> String {
    let output = run_cli_with_env(args, home, env);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}
