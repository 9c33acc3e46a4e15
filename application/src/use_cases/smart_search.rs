//! Smart search use case
//!
//! [`SmartSearcher`] composes a primary searcher, a fallback searcher and
//! two selectors behind one contract.
//!
//! # Strategy choice
//!
//! ```text
//! construction:  probe(primary tool) ──▶ primary present? keep it : drop it
//!
//! search():      primary ──ok──▶ results
//!                   │err
//!                   ▼
//!                fallback ──ok──▶ results
//!                   │err
//!                   ▼
//!                AllStrategiesFailed { primary, fallback }
//!
//! select():      probe(picker) ──▶ interactive selector : basic selector
//! ```
//!
//! The searcher choice is made once; the picker is re-probed on every
//! `select()` call. Neither strategy is ever retried.

use crate::ports::result_selector::ResultSelector;
use crate::ports::searcher::Searcher;
use crate::ports::tool_probe::ToolProbe;
use crate::use_cases::diagnose_tools::DiagnoseToolsUseCase;
use async_trait::async_trait;
use reposeek_domain::{
    DiagnosticSnapshot, RepositorySet, SearchError, SearchKind, SearchResult, SelectionError,
    ToolDescriptor,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The pair of selectors and the picker tool that decides between them
#[derive(Clone)]
pub struct SelectorSet {
    /// External picker binary gating the interactive selector
    pub picker: ToolDescriptor,
    pub interactive: Arc<dyn ResultSelector>,
    pub basic: Arc<dyn ResultSelector>,
}

/// Search orchestrator with primary/fallback strategies
pub struct SmartSearcher {
    primary: Option<Arc<dyn Searcher>>,
    fallback: Arc<dyn Searcher>,
    selectors: SelectorSet,
    probe: Arc<dyn ToolProbe>,
    diagnostics: DiagnoseToolsUseCase,
}

impl SmartSearcher {
    /// Build the orchestrator.
    ///
    /// `primary_tool` is probed once here; if it is missing the primary
    /// searcher is discarded and every search goes straight to `fallback`.
    pub fn new(
        probe: Arc<dyn ToolProbe>,
        primary_tool: &ToolDescriptor,
        primary: Arc<dyn Searcher>,
        fallback: Arc<dyn Searcher>,
        selectors: SelectorSet,
    ) -> Self {
        let primary = if probe.is_available(primary_tool) {
            info!(tool = primary_tool.name, "Using primary searcher");
            Some(primary)
        } else {
            info!(
                tool = primary_tool.name,
                fallback = fallback.name(),
                "Primary tool not found, using fallback searcher"
            );
            None
        };

        let diagnostics =
            DiagnoseToolsUseCase::new(Arc::clone(&probe), vec![*primary_tool, selectors.picker]);

        Self {
            primary,
            fallback,
            selectors,
            probe,
            diagnostics,
        }
    }

    /// Report on a custom tool list instead of just the primary tool and picker
    pub fn with_diagnostic_tools(mut self, tools: impl Into<Vec<ToolDescriptor>>) -> Self {
        self.diagnostics = DiagnoseToolsUseCase::new(Arc::clone(&self.probe), tools);
        self
    }

    /// Whether searches go to the primary searcher first
    pub fn has_primary(&self) -> bool {
        self.primary.is_some()
    }

    /// Name of the searcher tried first
    pub fn active_strategy(&self) -> &str {
        self.primary
            .as_ref()
            .map(|p| p.name())
            .unwrap_or_else(|| self.fallback.name())
    }

    /// Let the user choose one result.
    ///
    /// The picker binary is probed on every call.
    pub async fn select(
        &self,
        results: &[SearchResult],
        prompt: &str,
    ) -> Result<SearchResult, SelectionError> {
        if results.is_empty() {
            return Err(SelectionError::NoResults);
        }

        let selector = if self.probe.is_available(&self.selectors.picker) {
            &self.selectors.interactive
        } else {
            debug!(
                picker = self.selectors.picker.name,
                "Picker not found, using basic selector"
            );
            &self.selectors.basic
        };

        debug!(selector = selector.name(), count = results.len(), "Selecting result");
        selector.select(results, prompt).await
    }

    /// Fresh diagnostic snapshot (reporting only)
    pub async fn diagnostics(&self) -> DiagnosticSnapshot {
        self.diagnostics.execute().await
    }

    /// Suggestions for missing tools (reporting only)
    pub async fn optimization_tips(&self) -> Vec<String> {
        self.diagnostics().await.optimization_tips()
    }
}

#[async_trait]
impl Searcher for SmartSearcher {
    fn name(&self) -> &str {
        self.active_strategy()
    }

    fn kind(&self) -> SearchKind {
        self.fallback.kind()
    }

    async fn search(
        &self,
        pattern: &str,
        repos: &RepositorySet,
        group: Option<&str>,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let Some(primary) = &self.primary else {
            return self.fallback.search(pattern, repos, group).await;
        };

        let primary_err = match primary.search(pattern, repos, group).await {
            Ok(results) => return Ok(results),
            // Input errors fail the same way in every strategy
            Err(e @ (SearchError::Filter(_) | SearchError::EmptyPattern)) => return Err(e),
            Err(e) => e,
        };

        warn!(
            primary = primary.name(),
            fallback = self.fallback.name(),
            error = %primary_err,
            "Primary search failed, falling back"
        );

        match self.fallback.search(pattern, repos, group).await {
            Ok(results) => Ok(results),
            Err(fallback_err) => Err(SearchError::AllStrategiesFailed {
                primary: Box::new(primary_err),
                fallback: Box::new(fallback_err),
            }),
        }
    }

    fn format_for_picker(&self, results: &[SearchResult]) -> String {
        match &self.primary {
            Some(primary) => primary.format_for_picker(results),
            None => self.fallback.format_for_picker(results),
        }
    }

    fn parse_picker_selection<'a>(
        &self,
        line: &str,
        results: &'a [SearchResult],
    ) -> Option<&'a SearchResult> {
        match &self.primary {
            Some(primary) => primary.parse_picker_selection(line, results),
            None => self.fallback.parse_picker_selection(line, results),
        }
    }
}
