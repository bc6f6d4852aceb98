//! Platform target mapping and asset name construction

use crate::ARCHIVE_EXT;

/// Map a host architecture name to the release packaging convention
///
/// Unknown names pass through unchanged: a host whose architecture string
/// already matches the packaging convention needs no entry here.
pub fn map_arch(arch: &str) -> &str {
    match arch {
        "x86" => "386",
        "x86_64" => "amd64",
        other => other,
    }
}

/// Map a host OS name to the release packaging convention
///
/// Same identity fallback as [`map_arch`].
pub fn map_os(os: &str) -> &str {
    match os {
        "win32" => "windows",
        other => other,
    }
}

/// Executable suffix for a normalized OS name
pub fn exe_suffix(os: &str) -> &'static str {
    if os == "windows" {
        ".exe"
    } else {
        ""
    }
}

/// Host platform in the naming convention of the release packaging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformTarget {
    /// Normalized OS family name
    pub os: String,

    /// Normalized CPU architecture name
    pub arch: String,
}

impl PlatformTarget {
    /// Detect the current host platform
    pub fn detect() -> Self {
        Self::from_host(std::env::consts::OS, std::env::consts::ARCH)
    }

    /// Build a target from raw host OS/architecture names
    pub fn from_host(os: &str, arch: &str) -> Self {
        Self {
            os: map_os(os).to_string(),
            arch: map_arch(arch).to_string(),
        }
    }

    /// Deterministic archive asset name for `tool` at `version`
    ///
    /// `version` is the numeric version, tag prefix already stripped.
    pub fn asset_name(&self, tool: &str, version: &str) -> String {
        format!(
            "{}_{}_{}_{}.{}",
            tool, version, self.os, self.arch, ARCHIVE_EXT
        )
    }

    /// Executable suffix for this target
    pub fn exe_suffix(&self) -> &'static str {
        exe_suffix(&self.os)
    }
}
