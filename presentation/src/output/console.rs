//! Console output formatter for search results and diagnostics

use colored::Colorize;
use reposeek_domain::{DiagnosticSnapshot, GroupFilterOutcome, RepositorySet, SearchResult};

/// Formats reposeek output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// One display text per line, uncoloured (for `--list`)
    pub fn format_list(results: &[SearchResult]) -> String {
        let mut output = String::new();
        for result in results {
            output.push_str(result.display_text());
            output.push('\n');
        }
        output
    }

    /// Format as JSON
    pub fn format_json(results: &[SearchResult]) -> String {
        serde_json::to_string_pretty(results).unwrap_or_else(|_| "[]".to_string())
    }

    /// The line printed for a chosen result: `path` or `path:line`
    pub fn format_selection(result: &SearchResult) -> String {
        let path = result.absolute_path().display();
        match result.line_number() {
            Some(line) => format!("{}:{}", path, line),
            None => path.to_string(),
        }
    }

    pub fn format_filter_outcome(outcome: &GroupFilterOutcome) -> String {
        format!("{} {}", "Searching".cyan().bold(), outcome.summary())
    }

    /// Tool availability table plus readiness and tips (for `doctor`)
    pub fn format_diagnostics(snapshot: &DiagnosticSnapshot) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Tool Diagnostics"));
        output.push('\n');

        for tool in &snapshot.tools {
            if tool.available {
                output.push_str(&format!(
                    "  {} {:<5} {}\n",
                    "✓".green(),
                    tool.name.bold(),
                    tool.version.as_deref().unwrap_or("(version unknown)").dimmed()
                ));
            } else {
                let mark = if tool.required { "✗".red() } else { "-".yellow() };
                output.push_str(&format!(
                    "  {} {:<5} {} {}\n",
                    mark,
                    tool.name.bold(),
                    "missing, using:".dimmed(),
                    tool.fallback
                ));
            }
        }

        let readiness = snapshot.readiness();
        let readiness_text = format!("{}%", readiness);
        let readiness_text = match readiness {
            100 => readiness_text.green(),
            50..=99 => readiness_text.yellow(),
            _ => readiness_text.red(),
        };
        output.push_str(&format!(
            "\n{} {}\n",
            "Readiness:".cyan().bold(),
            readiness_text.bold()
        ));

        let tips = snapshot.optimization_tips();
        if !tips.is_empty() {
            output.push_str(&format!("\n{}\n", "Tips:".cyan().bold()));
            for tip in tips {
                output.push_str(&format!("  * {}\n", tip));
            }
        }

        output
    }

    /// Repository list followed by group names (for `repos`)
    pub fn format_repositories(repos: &RepositorySet, groups: &[String]) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", "Repositories:".cyan().bold()));
        if repos.is_empty() {
            output.push_str(&format!("  {}\n", "(none)".dimmed()));
        }
        let width = repos.aliases().map(str::len).max().unwrap_or(0);
        for (alias, path) in repos.iter() {
            output.push_str(&format!(
                "  {:<width$}  {}\n",
                alias.bold(),
                path.display(),
                width = width
            ));
        }

        if !groups.is_empty() {
            output.push_str(&format!("\n{}\n", "Groups:".cyan().bold()));
            for group in groups {
                output.push_str(&format!("  {}\n", group));
            }
        }

        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reposeek_domain::{ContentResult, FileResult, ToolStatus};

    fn status(name: &str, available: bool, required: bool) -> ToolStatus {
        ToolStatus {
            name: name.to_string(),
            command: name.to_string(),
            available,
            version: available.then(|| format!("{} 1.0", name)),
            required,
            fallback: "built-in".to_string(),
            install_hint: format!("install {}", name),
        }
    }

    fn results() -> Vec<SearchResult> {
        vec![
            FileResult::new("a", "x.txt", "/r/a/x.txt").into(),
            ContentResult::new("b", "y.rs", "/r/b/y.rs", 7, 3, "let y;").into(),
        ]
    }

    #[test]
    fn test_format_list() {
        assert_eq!(
            ConsoleFormatter::format_list(&results()),
            "a:x.txt\nb:y.rs:7: let y;\n"
        );
    }

    #[test]
    fn test_format_json_is_parseable() {
        let json = ConsoleFormatter::format_json(&results());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["kind"], "file");
        assert_eq!(value[1]["line_number"], 7);
    }

    #[test]
    fn test_format_selection() {
        let results = results();
        assert_eq!(ConsoleFormatter::format_selection(&results[0]), "/r/a/x.txt");
        assert_eq!(ConsoleFormatter::format_selection(&results[1]), "/r/b/y.rs:7");
    }

    #[test]
    fn test_format_diagnostics() {
        let snapshot = DiagnosticSnapshot::new(vec![
            status("fd", true, false),
            status("rg", false, false),
        ]);
        let text = ConsoleFormatter::format_diagnostics(&snapshot);
        assert!(text.contains("fd 1.0"));
        assert!(text.contains("missing, using:"));
        assert!(text.contains("50%"));
        assert!(text.contains("install rg"));
    }

    #[test]
    fn test_format_repositories() {
        let repos = RepositorySet::new().with("api", "/src/api");
        let text = ConsoleFormatter::format_repositories(&repos, &["backend".to_string()]);
        assert!(text.contains("/src/api"));
        assert!(text.contains("backend"));

        let empty = ConsoleFormatter::format_repositories(&RepositorySet::new(), &[]);
        assert!(empty.contains("(none)"));
        assert!(!empty.contains("Groups:"));
    }
}
