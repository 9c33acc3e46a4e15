//! Concurrent per-repository fan-out
//!
//! Runs one unit of work per repository, all under a single shared
//! deadline, and joins them before returning.
//!
//! ```text
//!            ┌──────── unit(repo a) ──┐
//! fan_out ───┼──────── unit(repo b) ──┼──▶ Arc<Mutex<Vec<SearchResult>>>
//!            └──────── unit(repo c) ──┘
//!                 shared deadline ──▶ CancellationToken
//! ```
//!
//! - A unit that fails is logged and contributes nothing; the others go on.
//! - When the deadline fires, every unit's token is cancelled, the remaining
//!   tasks are aborted (dropping any child process they own), and the
//!   results gathered so far come back inside [`SearchError::TimedOut`].

use reposeek_domain::{RepositorySet, SearchError, SearchResult};
use std::future::Future;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// One repository handed to a unit of work
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryTarget {
    pub alias: String,
    pub root: PathBuf,
}

/// Run `unit` for every repository in `repos` concurrently.
///
/// `label` names the strategy in log lines. Returns the accumulated
/// results once every unit has finished, or [`SearchError::TimedOut`]
/// with the partial results if `timeout` elapses first.
pub async fn fan_out<F, Fut>(
    label: &str,
    repos: &RepositorySet,
    timeout: Duration,
    unit: F,
) -> Result<Vec<SearchResult>, SearchError>
where
    F: Fn(RepositoryTarget, CancellationToken) -> Fut,
    Fut: Future<Output = Result<Vec<SearchResult>, SearchError>> + Send + 'static,
{
    let cancel = CancellationToken::new();
    let accumulator: Arc<Mutex<Vec<SearchResult>>> = Arc::default();
    let mut join_set = JoinSet::new();

    for (alias, root) in repos.iter() {
        let target = RepositoryTarget {
            alias: alias.to_string(),
            root: root.to_path_buf(),
        };
        let work = unit(target, cancel.child_token());
        let accumulator = Arc::clone(&accumulator);
        let alias = alias.to_string();
        let label = label.to_string();

        join_set.spawn(async move {
            match work.await {
                Ok(results) => {
                    debug!(searcher = %label, repository = %alias, count = results.len(), "Repository search complete");
                    accumulator
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .extend(results);
                }
                Err(e) => {
                    warn!(searcher = %label, repository = %alias, error = %e, "Repository search failed, skipping");
                }
            }
        });
    }

    let deadline = tokio::time::sleep(timeout);
    tokio::pin!(deadline);
    let mut timed_out = false;

    loop {
        tokio::select! {
            joined = join_set.join_next() => match joined {
                Some(Ok(())) => {}
                Some(Err(e)) => warn!(searcher = %label, "Repository task join error: {}", e),
                None => break,
            },
            _ = &mut deadline => {
                warn!(searcher = %label, timeout_secs = timeout.as_secs(), remaining = join_set.len(), "Search deadline reached");
                timed_out = true;
                cancel.cancel();
                join_set.shutdown().await;
                break;
            }
        }
    }

    let results = std::mem::take(&mut *accumulator.lock().unwrap_or_else(PoisonError::into_inner));

    if timed_out {
        Err(SearchError::TimedOut {
            timeout,
            partial: results,
        })
    } else {
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reposeek_domain::FileResult;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn repos() -> RepositorySet {
        RepositorySet::new()
            .with("a", "/r/a")
            .with("b", "/r/b")
            .with("c", "/r/c")
    }

    fn one_result(target: &RepositoryTarget) -> Vec<SearchResult> {
        vec![FileResult::new(&target.alias, "file.txt", target.root.join("file.txt")).into()]
    }

    #[tokio::test]
    async fn test_collects_results_from_every_repository() {
        let results = fan_out("test", &repos(), Duration::from_secs(5), |target, _| async move {
            Ok(one_result(&target))
        })
        .await
        .unwrap();

        let mut aliases: Vec<_> = results.iter().map(|r| r.repository().to_string()).collect();
        aliases.sort();
        assert_eq!(aliases, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_failed_repository_does_not_abort_others() {
        let results = fan_out("test", &repos(), Duration::from_secs(5), |target, _| async move {
            if target.alias == "b" {
                Err(SearchError::ToolExecutionFailed {
                    tool: "fd".to_string(),
                    repository: target.alias.clone(),
                    exit_code: Some(2),
                    message: "boom".to_string(),
                })
            } else {
                Ok(one_result(&target))
            }
        })
        .await
        .unwrap();

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.repository() != "b"));
    }

    #[tokio::test]
    async fn test_empty_repository_set() {
        let results = fan_out("test", &RepositorySet::new(), Duration::from_secs(1), |target, _| async move {
            Ok(one_result(&target))
        })
        .await
        .unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_returns_partial_results() {
        let err = fan_out("test", &repos(), Duration::from_secs(1), |target, _| async move {
            if target.alias == "c" {
                tokio::time::sleep(Duration::from_secs(60)).await;
            }
            Ok(one_result(&target))
        })
        .await
        .unwrap_err();

        assert!(err.is_timeout());
        let partial = err.into_partial_results();
        assert_eq!(partial.len(), 2);
        assert!(partial.iter().all(|r| r.repository() != "c"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_cancels_units() {
        let observed = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&observed);

        let single = RepositorySet::new().with("slow", "/r/slow");
        let err = fan_out("test", &single, Duration::from_secs(1), move |_, token| {
            let flag = Arc::clone(&flag);
            async move {
                // Cancellation is visible to the token before the task is aborted
                let watcher = token.clone();
                tokio::spawn(async move {
                    watcher.cancelled().await;
                    flag.store(true, Ordering::SeqCst);
                });
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(Vec::new())
            }
        })
        .await
        .unwrap_err();

        assert!(err.is_timeout());
        tokio::task::yield_now().await;
        assert!(observed.load(Ordering::SeqCst));
    }
}
