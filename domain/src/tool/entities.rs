//! Tool domain entities
//!
//! A [`ToolDescriptor`] is static configuration: it is built once as a
//! `static` table and never mutated. Whether the tool is present is a
//! property of the environment, answered by a probe at call time.

use serde::{Deserialize, Serialize};

/// Host platform, used to pick an install hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    MacOs,
    Linux,
    Windows,
    Other,
}

impl Platform {
    /// Platform this binary is running on
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` value to a platform
    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" => Platform::MacOs,
            "linux" => Platform::Linux,
            "windows" => Platform::Windows,
            _ => Platform::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::MacOs => "macos",
            Platform::Linux => "linux",
            Platform::Windows => "windows",
            Platform::Other => "other",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Description of a known external tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolDescriptor {
    /// Display name (e.g., "fd")
    pub name: &'static str,
    /// Command looked up on PATH
    pub command: &'static str,
    /// Arguments that print the version
    pub version_args: &'static [&'static str],
    /// What the tool is used for
    pub purpose: &'static str,
    /// What happens when the tool is missing
    pub fallback: &'static str,
    /// Install hint per platform
    pub install_hints: &'static [(Platform, &'static str)],
    /// Whether the tool has no built-in fallback
    pub required: bool,
}

impl ToolDescriptor {
    /// Install hint for a platform.
    ///
    /// Falls back to listing the hints for every known platform when the
    /// given platform has no entry.
    pub fn install_instructions_for(&self, platform: Platform) -> String {
        if let Some((_, hint)) = self.install_hints.iter().find(|(p, _)| *p == platform) {
            return hint.to_string();
        }

        if self.install_hints.is_empty() {
            return format!("Install {} with your system package manager", self.name);
        }

        let all = self
            .install_hints
            .iter()
            .map(|(p, hint)| format!("{}: {}", p, hint))
            .collect::<Vec<_>>()
            .join("; ");
        format!("Install {} ({})", self.name, all)
    }

    /// Install hint for the current platform
    pub fn install_instructions(&self) -> String {
        self.install_instructions_for(Platform::current())
    }
}

impl std::fmt::Display for ToolDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}
