//! Search progress spinner

use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// Spinner on stderr while a search runs
pub struct SearchSpinner {
    bar: ProgressBar,
}

impl SearchSpinner {
    /// Start spinning; `quiet` draws nothing
    pub fn start(message: impl Into<String>, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr())
        };
        bar.set_style(Self::style());
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub fn set_message(&self, message: impl Into<String>) {
        self.bar.set_message(message.into());
    }

    /// Stop with a result count
    pub fn finish(self, found: usize) {
        let summary = match found {
            0 => "No results".yellow().to_string(),
            1 => "1 result".green().to_string(),
            n => format!("{} results", n).green().to_string(),
        };
        self.bar.finish_with_message(summary);
    }

    /// Stop and erase the spinner line
    pub fn clear(self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_spinner_is_hidden() {
        let spinner = SearchSpinner::start("Searching", true);
        assert!(spinner.bar.is_hidden());
        spinner.set_message("still searching");
        spinner.finish(3);
    }
}
