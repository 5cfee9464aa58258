//! Injects build metadata consumed by `BuildInfo::current`.

use std::process::Command;

fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn main() {
    let build_date = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
    println!("cargo:rustc-env=GATHER_BUILD_DATE={}", build_date);

    if let Some(commit) = command_stdout("git", &["rev-parse", "--short", "HEAD"]) {
        println!("cargo:rustc-env=GATHER_GIT_COMMIT={}", commit);
    }

    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    if let Some(version) = command_stdout(&rustc, &["--version"]) {
        println!("cargo:rustc-env=GATHER_RUSTC_VERSION={}", version);
    }

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=build.rs");
}
