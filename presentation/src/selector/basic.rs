//! Numbered terminal selector
//!
//! Used when no interactive picker is installed.
//!
//! ```text
//!   1. backend-api:src/main.rs
//!   2. frontend:src/main.ts
//!   ...and 14 more
//! Select [1-20, q to quit]:
//! ```
//!
//! The list goes to stderr so stdout only ever carries the chosen result.

use async_trait::async_trait;
use colored::Colorize;
use reposeek_application::ResultSelector;
use reposeek_domain::{SearchResult, SelectionError};
use std::io::{self, BufRead, Write};

/// Numbered-prompt [`ResultSelector`]
#[derive(Debug, Clone)]
pub struct BasicSelector {
    limit: usize,
}

impl Default for BasicSelector {
    fn default() -> Self {
        Self { limit: 20 }
    }
}

impl BasicSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum number of results listed
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }

    /// Print the list to `output` and read one choice from `input`
    pub fn prompt_selection<R: BufRead, W: Write>(
        &self,
        results: &[SearchResult],
        prompt: &str,
        input: &mut R,
        output: &mut W,
    ) -> Result<SearchResult, SelectionError> {
        if results.is_empty() {
            return Err(SelectionError::NoResults);
        }

        let shown = results.len().min(self.limit);
        for (i, result) in results.iter().take(shown).enumerate() {
            writeln!(
                output,
                "{:>4} {}",
                format!("{}.", i + 1).cyan(),
                result.display_text()
            )?;
        }
        if results.len() > shown {
            writeln!(output, "  ...and {} more", results.len() - shown)?;
        }

        write!(output, "{} [1-{}, q to quit]: ", prompt.bold(), shown)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(SelectionError::NoSelectionMade);
        }

        let choice = line.trim();
        match choice.to_lowercase().as_str() {
            "" => Err(SelectionError::NoSelectionMade),
            "q" | "quit" => Err(SelectionError::Cancelled),
            _ => match choice.parse::<usize>() {
                Ok(n) if (1..=shown).contains(&n) => Ok(results[n - 1].clone()),
                _ => Err(SelectionError::InvalidSelection {
                    input: choice.to_string(),
                    max: shown,
                }),
            },
        }
    }
}

#[async_trait]
impl ResultSelector for BasicSelector {
    fn name(&self) -> &str {
        "basic"
    }

    async fn select(
        &self,
        results: &[SearchResult],
        prompt: &str,
    ) -> Result<SearchResult, SelectionError> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stderr();
        self.prompt_selection(results, prompt, &mut input, &mut output)
    }
}
