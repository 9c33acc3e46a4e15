//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for reposeek
#[derive(Parser, Debug)]
#[command(name = "reposeek")]
#[command(author, version, about = "Search files and content across many repositories")]
#[command(long_about = r#"
reposeek searches every configured repository at once and lets you pick one
result.

fd and rg are used when installed; otherwise a built-in walk is used.
fzf drives selection when installed; otherwise a numbered prompt is shown.

Configuration files are loaded from (in priority order):
1. REPOSEEK_* environment variables
2. --config <path>                      Explicit config file
3. ./reposeek.toml or ./.reposeek.toml  Project-level config
4. ~/.config/reposeek/config.toml       Global config

Example:
  reposeek files main.rs
  reposeek content -g backend "fn handle_request"
  reposeek --repo scratch=/tmp/scratch files --list notes
  reposeek doctor
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Add or override a repository for this run (repeatable)
    #[arg(long = "repo", value_name = "ALIAS=PATH", value_parser = parse_repository, global = true)]
    pub repositories: Vec<(String, PathBuf)>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find files whose name matches a pattern
    Files(SearchArgs),

    /// Find lines matching a pattern
    Content(SearchArgs),

    /// Show which external tools are installed
    Doctor,

    /// List configured repositories and groups
    Repos {
        /// Only list members of this group
        #[arg(short, long, value_name = "GROUP")]
        group: Option<String>,
    },
}

/// Arguments shared by `files` and `content`
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Search pattern (file search lists everything when omitted)
    #[arg(default_value = "")]
    pub pattern: String,

    /// Only search repositories in this group
    #[arg(short, long, value_name = "GROUP")]
    pub group: Option<String>,

    /// Require every group member to match the repository list exactly
    #[arg(long, requires = "group")]
    pub validate_group: bool,

    /// Print all results instead of selecting one
    #[arg(short, long)]
    pub list: bool,

    /// With --list, print results as JSON
    #[arg(long, requires = "list")]
    pub json: bool,

    /// Print a preview of the selected result
    #[arg(short, long, conflicts_with = "list")]
    pub preview: bool,
}

/// Parse `alias=path`
fn parse_repository(value: &str) -> Result<(String, PathBuf), String> {
    let (alias, path) = value
        .split_once('=')
        .ok_or_else(|| format!("expected ALIAS=PATH, got '{}'", value))?;
    let alias = alias.trim();
    if alias.is_empty() {
        return Err("repository alias cannot be empty".to_string());
    }
    if path.is_empty() {
        return Err(format!("repository '{}' has an empty path", alias));
    }
    Ok((alias.to_string(), PathBuf::from(path)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_files_command() {
        let cli = Cli::try_parse_from(["reposeek", "files", "-g", "backend", "main"]).unwrap();
        match cli.command {
            Some(Command::Files(args)) => {
                assert_eq!(args.pattern, "main");
                assert_eq!(args.group.as_deref(), Some("backend"));
                assert!(!args.list);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_files_pattern_is_optional() {
        let cli = Cli::try_parse_from(["reposeek", "files", "--list"]).unwrap();
        match cli.command {
            Some(Command::Files(args)) => assert!(args.pattern.is_empty()),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_repository_overrides() {
        let cli = Cli::try_parse_from([
            "reposeek",
            "--repo",
            "a=/src/a",
            "content",
            "needle",
            "--repo",
            "b=/src/b",
        ])
        .unwrap();
        assert_eq!(
            cli.repositories,
            vec![
                ("a".to_string(), PathBuf::from("/src/a")),
                ("b".to_string(), PathBuf::from("/src/b")),
            ]
        );
    }

    #[test]
    fn test_bad_repository_override() {
        assert!(Cli::try_parse_from(["reposeek", "--repo", "nopath", "doctor"]).is_err());
        assert!(Cli::try_parse_from(["reposeek", "--repo", "=/x", "doctor"]).is_err());
    }

    #[test]
    fn test_json_requires_list() {
        assert!(Cli::try_parse_from(["reposeek", "files", "--json", "x"]).is_err());
        assert!(Cli::try_parse_from(["reposeek", "files", "--list", "--json", "x"]).is_ok());
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::try_parse_from(["reposeek", "-vv", "doctor"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
