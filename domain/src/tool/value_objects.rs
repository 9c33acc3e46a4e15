//! Tool diagnostics value objects
//!
//! A [`DiagnosticSnapshot`] is computed on demand and never cached. It is
//! reporting data only; control flow never branches on it.

use serde::Serialize;

/// Availability of one tool at the time of the probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolStatus {
    pub name: String,
    pub command: String,
    pub available: bool,
    /// First line of the version output, when it could be read
    pub version: Option<String>,
    pub required: bool,
    /// Behaviour when the tool is missing
    pub fallback: String,
    /// Install hint for the current platform
    pub install_hint: String,
}

/// Aggregate counts over a snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiagnosticSummary {
    pub total: usize,
    pub available: usize,
    pub missing: usize,
    pub required_missing: usize,
    pub optional_missing: usize,
}

/// Per-tool availability for a set of tools.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiagnosticSnapshot {
    pub tools: Vec<ToolStatus>,
}

impl DiagnosticSnapshot {
    pub fn new(tools: Vec<ToolStatus>) -> Self {
        Self { tools }
    }

    pub fn get(&self, name: &str) -> Option<&ToolStatus> {
        self.tools.iter().find(|t| t.name == name)
    }

    pub fn is_available(&self, name: &str) -> bool {
        self.get(name).is_some_and(|t| t.available)
    }

    pub fn summary(&self) -> DiagnosticSummary {
        let total = self.tools.len();
        let available = self.tools.iter().filter(|t| t.available).count();
        let required_missing = self
            .tools
            .iter()
            .filter(|t| t.required && !t.available)
            .count();
        let missing = total - available;

        DiagnosticSummary {
            total,
            available,
            missing,
            required_missing,
            optional_missing: missing - required_missing,
        }
    }

    /// `available / total * 100`, rounded down. An empty snapshot is 100% ready.
    pub fn readiness(&self) -> u8 {
        let summary = self.summary();
        if summary.total == 0 {
            return 100;
        }
        (summary.available * 100 / summary.total) as u8
    }

    /// Human-readable suggestions for missing tools
    pub fn optimization_tips(&self) -> Vec<String> {
        let summary = self.summary();
        let mut tips = Vec::new();

        if summary.missing == 0 {
            tips.push("All tools are available".to_string());
            return tips;
        }

        if summary.required_missing > 0 {
            tips.push(format!(
                "{} required tool(s) missing; some features are unavailable",
                summary.required_missing
            ));
        }

        if summary.optional_missing > 0 {
            tips.push(format!(
                "{} optional tool(s) missing; built-in fallbacks are in use",
                summary.optional_missing
            ));
        }

        for tool in self.tools.iter().filter(|t| !t.available) {
            tips.push(format!(
                "{}: {} (without it: {})",
                tool.name, tool.install_hint, tool.fallback
            ));
        }

        tips
    }
}
