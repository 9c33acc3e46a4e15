//! CLI entrypoint for reposeek
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use reposeek_application::{
    DiagnoseToolsUseCase, PreviewProvider, RepositoryFilter, SearchParams, Searcher, SelectorSet,
    SmartSearcher, ToolProbe,
};
use reposeek_domain::{PreviewRequest, RepositorySet, SearchKind, SelectionError};
use reposeek_infrastructure::{
    ConfigGroupSource, ConfigLoader, FdFileSearcher, FileConfig, FzfSelector, RgContentSearcher,
    SystemToolProbe, TextPreviewProvider, ToolRegistry, WalkContentSearcher, WalkFileSearcher,
};
use reposeek_presentation::{
    BasicSelector, Cli, Command, ConsoleFormatter, SearchArgs, SearchSpinner,
};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Exit code when the user interrupts the picker
const EXIT_INTERRUPTED: u8 = 130;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    let config = load_config(&cli.config, cli.no_config, &cli.repositories)?;

    // === Dependency Injection ===
    let params = config.search_params();
    let repos = config.repository_set();
    let filter = RepositoryFilter::new(Arc::new(ConfigGroupSource::new(config.clone())));
    let probe: Arc<dyn ToolProbe> = Arc::new(SystemToolProbe::new());
    let registry = ToolRegistry::new();

    match command {
        Command::Doctor => {
            let snapshot = DiagnoseToolsUseCase::new(probe, registry.all())
                .execute()
                .await;
            print!("{}", ConsoleFormatter::format_diagnostics(&snapshot));
            if snapshot.summary().required_missing > 0 {
                Ok(ExitCode::FAILURE)
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
        Command::Repos { group } => {
            let listed = match group.as_deref() {
                Some(group) => filter.filter_by_group_lenient(&repos, group),
                None => repos,
            };
            print!(
                "{}",
                ConsoleFormatter::format_repositories(&listed, &filter.group_names())
            );
            Ok(ExitCode::SUCCESS)
        }
        Command::Files(args) => {
            let context = SearchContext {
                config: &config,
                params: &params,
                registry,
                probe,
                filter,
                repos,
                quiet: cli.quiet,
            };
            context.run(SearchKind::File, args).await
        }
        Command::Content(args) => {
            let context = SearchContext {
                config: &config,
                params: &params,
                registry,
                probe,
                filter,
                repos,
                quiet: cli.quiet,
            };
            context.run(SearchKind::Content, args).await
        }
    }
}

/// Load, override and validate configuration
fn load_config(
    path: &Option<std::path::PathBuf>,
    no_config: bool,
    overrides: &[(String, std::path::PathBuf)],
) -> Result<FileConfig> {
    let mut config = if no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(path.as_deref()).context("Failed to load configuration")?
    };

    for (alias, path) in overrides {
        let path = std::path::absolute(path)
            .with_context(|| format!("Invalid path for repository '{}'", alias))?;
        config.repositories.insert(alias.clone(), path);
    }

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("{} {}", "config:".yellow().bold(), issue);
        }
        bail!("Invalid configuration ({} issue(s))", issues.len());
    }

    Ok(config)
}

/// Everything a `files` or `content` run needs
struct SearchContext<'a> {
    config: &'a FileConfig,
    params: &'a SearchParams,
    registry: ToolRegistry,
    probe: Arc<dyn ToolProbe>,
    filter: RepositoryFilter,
    repos: RepositorySet,
    quiet: bool,
}

impl SearchContext<'_> {
    fn build_searcher(&self, kind: SearchKind) -> SmartSearcher {
        let selectors = SelectorSet {
            picker: self.registry.picker(&self.config.picker.command),
            interactive: Arc::new(
                FzfSelector::new()
                    .with_command(&self.config.picker.command)
                    .with_height(&self.config.picker.height),
            ),
            basic: Arc::new(BasicSelector::new().with_limit(self.params.basic_limit)),
        };

        let probe = Arc::clone(&self.probe);
        let filter = self.filter.clone();
        match kind {
            SearchKind::File => SmartSearcher::new(
                probe,
                self.registry.file_finder(),
                Arc::new(FdFileSearcher::new(filter.clone(), self.params)),
                Arc::new(WalkFileSearcher::new(filter, self.params)),
                selectors,
            ),
            SearchKind::Content => SmartSearcher::new(
                probe,
                self.registry.content_finder(),
                Arc::new(RgContentSearcher::new(filter.clone(), self.params)),
                Arc::new(WalkContentSearcher::new(filter, self.params)),
                selectors,
            ),
        }
    }

    async fn run(self, kind: SearchKind, args: SearchArgs) -> Result<ExitCode> {
        if self.repos.is_empty() {
            bail!(
                "No repositories configured. Add a [repositories] table to reposeek.toml or pass --repo ALIAS=PATH"
            );
        }

        let mut target_count = self.repos.len();
        if let Some(group) = args.group.as_deref() {
            if args.validate_group {
                self.filter
                    .filter_by_group_with_validation(&self.repos, group)?;
            }
            let (_, outcome) = self.filter.filter_with_info(&self.repos, group)?;
            info!("{}", outcome.summary());
            if !self.quiet {
                eprintln!("{}", ConsoleFormatter::format_filter_outcome(&outcome));
            }
            target_count = outcome.filtered_count;
        }

        let searcher = self.build_searcher(kind);
        if !searcher.has_primary() {
            for tip in searcher.optimization_tips().await {
                info!("{}", tip);
            }
        }
        let spinner = SearchSpinner::start(
            format!(
                "Searching {} repositories with {}",
                target_count,
                searcher.active_strategy()
            ),
            self.quiet,
        );

        let results = match searcher
            .search(&args.pattern, &self.repos, args.group.as_deref())
            .await
        {
            Ok(results) => results,
            Err(e) if e.is_timeout() => {
                warn!(error = %e, "Showing partial results");
                e.into_partial_results()
            }
            Err(e) => {
                spinner.clear();
                return Err(e.into());
            }
        };
        spinner.finish(results.len());

        if results.is_empty() {
            eprintln!(
                "{} No {} results for '{}'",
                "notice:".yellow().bold(),
                kind.as_str(),
                args.pattern
            );
            return Ok(ExitCode::FAILURE);
        }

        if args.list {
            let output = if args.json {
                ConsoleFormatter::format_json(&results)
            } else {
                ConsoleFormatter::format_list(&results)
            };
            print!("{}", output);
            if args.json {
                println!();
            }
            return Ok(ExitCode::SUCCESS);
        }

        let chosen = match searcher.select(&results, kind.as_str()).await {
            Ok(chosen) => chosen,
            Err(SelectionError::Interrupted) => return Ok(ExitCode::from(EXIT_INTERRUPTED)),
            Err(e) if e.is_user_abort() => return Ok(ExitCode::FAILURE),
            Err(e) => return Err(e.into()),
        };

        println!("{}", ConsoleFormatter::format_selection(&chosen));

        if args.preview {
            let preview = TextPreviewProvider::new()
                .render(&PreviewRequest::for_result(&chosen))
                .context("Preview failed")?;
            eprintln!();
            eprint!("{}", preview);
        }

        Ok(ExitCode::SUCCESS)
    }
}
