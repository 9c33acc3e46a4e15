//! Picker line protocol
//!
//! Every result is written to the picker as one line:
//!
//! ```text
//! <absolute path>:<line number>:<display text>
//! ```
//!
//! The line number is `0` for file results. The picker echoes the chosen
//! line back unchanged, and [`parse_picker_selection`] maps it to the
//! originating result by its display text.

use crate::search::SearchResult;

/// Field separator in picker lines
pub const PICKER_DELIMITER: char = ':';

/// Format one result as a picker line
pub fn format_picker_line(result: &SearchResult) -> String {
    format!(
        "{}{sep}{}{sep}{}",
        result.absolute_path().display(),
        result.line_number().unwrap_or(0),
        result.display_text(),
        sep = PICKER_DELIMITER
    )
}

/// Format a whole result set as the newline-joined block fed to the picker
pub fn format_for_picker(results: &[SearchResult]) -> String {
    results
        .iter()
        .map(format_picker_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Map a line echoed by the picker back to one of `results`.
///
/// The line is split on `:` into at most three parts and the third part is
/// matched against display texts. Lines with fewer parts, or whose third part
/// matches nothing, are matched whole against display texts and then against
/// complete picker lines.
pub fn parse_picker_selection<'a>(
    line: &str,
    results: &'a [SearchResult],
) -> Option<&'a SearchResult> {
    let line = line.trim_end_matches(['\n', '\r']);
    if line.is_empty() {
        return None;
    }

    let parts: Vec<&str> = line.splitn(3, PICKER_DELIMITER).collect();
    if let [_, _, display] = parts.as_slice() {
        if let Some(found) = results.iter().find(|r| r.display_text() == *display) {
            return Some(found);
        }
    }

    results
        .iter()
        .find(|r| r.display_text() == line)
        .or_else(|| results.iter().find(|r| format_picker_line(r) == line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{ContentResult, FileResult};

    fn sample_results() -> Vec<SearchResult> {
        vec![
            FileResult::new("a", "sub/foo.txt", "/r/a/sub/foo.txt").into(),
            FileResult::new("b", "bar.txt", "/r/b/bar.txt").into(),
            ContentResult::new("a", "src/x.rs", "/r/a/src/x.rs", 7, 3, "let url = \"http://x\";")
                .into(),
        ]
    }

    #[test]
    fn test_format_picker_line() {
        let results = sample_results();
        assert_eq!(format_picker_line(&results[0]), "/r/a/sub/foo.txt:0:a:sub/foo.txt");
        assert_eq!(
            format_picker_line(&results[2]),
            "/r/a/src/x.rs:7:a:src/x.rs:7: let url = \"http://x\";"
        );
    }

    #[test]
    fn test_format_for_picker_joins_lines() {
        let results = sample_results();
        let block = format_for_picker(&results);
        assert_eq!(block.lines().count(), 3);
        assert!(!block.ends_with('\n'));
    }

    #[test]
    fn test_every_formatted_line_round_trips() {
        let results = sample_results();
        for result in &results {
            let line = format_picker_line(result);
            assert_eq!(parse_picker_selection(&line, &results), Some(result));
            // The picker echoes with a trailing newline
            assert_eq!(parse_picker_selection(&format!("{}\n", line), &results), Some(result));
        }
    }

    #[test]
    fn test_parse_bare_display_text() {
        let results = sample_results();
        assert_eq!(parse_picker_selection("b:bar.txt", &results), Some(&results[1]));
    }

    #[test]
    fn test_parse_unknown_or_empty_line() {
        let results = sample_results();
        assert_eq!(parse_picker_selection("/nope:0:c:missing", &results), None);
        assert_eq!(parse_picker_selection("", &results), None);
        assert_eq!(parse_picker_selection("garbage", &results), None);
    }
}
