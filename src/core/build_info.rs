//! Build metadata printed by `--version`
//!
//! Values are injected by `build.rs`; tests build their own `BuildInfo`.

const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub build_date: String,
    pub git_commit: String,
    pub version: String,
    /// Toolchain that built the binary (`rustc --version`)
    pub toolchain_version: String,
    pub os_arch: String,
}

impl BuildInfo {
    /// Metadata of the running binary
    pub fn current() -> Self {
        Self {
            build_date: option_env!("GATHER_BUILD_DATE").unwrap_or(UNKNOWN).to_string(),
            git_commit: option_env!("GATHER_GIT_COMMIT").unwrap_or(UNKNOWN).to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            toolchain_version: option_env!("GATHER_RUSTC_VERSION")
                .unwrap_or(UNKNOWN)
                .to_string(),
            os_arch: format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH),
        }
    }

    /// The five-line version block, one field per line
    pub fn render(&self) -> String {
        format!(
            "Build Date: {}\nGit Commit: {}\nVersion: {}\nGo Version: {}\nOS / Arch: {}\n",
            self.build_date,
            self.git_commit,
            self.version,
            self.toolchain_version,
            self.os_arch
        )
    }
}
