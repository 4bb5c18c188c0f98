//! Markdown table handling
//!
//! Pipe-delimited tables do not survive translation (the API reflows text
//! and mangles the separator rows), so the table region is split off, kept
//! verbatim, and reattached after the prose has been translated.

use regex::Regex;

/// Splits text into a translatable prefix and a literal table region
#[derive(Debug, Clone)]
pub struct TableSplitter {
    separator_re: Regex,
    delimiter_run_re: Regex,
}

impl Default for TableSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl TableSplitter {
    pub fn new() -> Self {
        // A separator row: pipes, dashes, colons and whitespace only,
        // with at least one dash.
        let separator_re = Regex::new(r"^[\s|:-]*-[\s|:-]*$").expect("static regex");
        // Runs of pipe-dash cells whose spacing needs repair after reassembly
        let delimiter_run_re = Regex::new(r"(\|\s*-+\s*)+").expect("static regex");
        Self {
            separator_re,
            delimiter_run_re,
        }
    }

    /// Split at the first header/separator line pair.
    ///
    /// The returned prefix ends just before the separator line; the table
    /// region is the separator line onward, and `prefix + table` always
    /// reconstructs the input. Without a match the whole text is prefix.
    ///
    /// Detection is heuristic: a pipe in prose directly above a dash-only
    /// line is classified as a table header, which can misfire on inline
    /// code containing `|`.
    pub fn split<'a>(&self, text: &'a str) -> (&'a str, &'a str) {
        let mut offset = 0;
        let mut prev_line: Option<&str> = None;

        for line in text.split_inclusive('\n') {
            let trimmed = line.trim_end_matches(['\n', '\r']);

            if let Some(prev) = prev_line {
                if prev.contains('|') && self.is_separator_line(trimmed) {
                    return (&text[..offset], &text[offset..]);
                }
            }

            prev_line = Some(trimmed);
            offset += line.len();
        }

        (text, "")
    }

    fn is_separator_line(&self, line: &str) -> bool {
        !line.trim().is_empty() && self.separator_re.is_match(line)
    }

    /// Repair separator rows whose spacing was disturbed by translation of
    /// the adjacent prose: every space inside a `| --- |` run becomes a
    /// hyphen.
    pub fn normalize(&self, text: &str) -> String {
        self.delimiter_run_re
            .replace_all(text, |caps: &regex::Captures<'_>| {
                caps[0].replace(' ', "-")
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE_TEXT: &str = "Intro paragraph.\n\
        | Name | Age |\n\
        |------|-----|\n\
        | Ann  | 30  |\n";

    #[test]
    fn test_split_at_separator_line() {
        let splitter = TableSplitter::new();
        let (prefix, table) = splitter.split(TABLE_TEXT);

        assert!(prefix.ends_with("| Name | Age |\n"));
        assert!(table.starts_with("|------|-----|"));
        assert_eq!(format!("{}{}", prefix, table), TABLE_TEXT);
    }

    #[test]
    fn test_split_without_pipes_returns_whole_text() {
        let splitter = TableSplitter::new();
        let input = "just prose\nacross two lines\n";
        let (prefix, table) = splitter.split(input);

        assert_eq!(prefix, input);
        assert_eq!(table, "");
    }

    #[test]
    fn test_pipe_without_separator_is_not_a_table() {
        let splitter = TableSplitter::new();
        let input = "a | b in prose\nmore prose\n";
        let (prefix, table) = splitter.split(input);

        assert_eq!(prefix, input);
        assert_eq!(table, "");
    }

    #[test]
    fn test_split_finds_first_table_only() {
        let splitter = TableSplitter::new();
        let input = "text\n| h |\n|---|\n| a |\n\n| h2 |\n|----|\n";
        let (prefix, table) = splitter.split(input);

        assert_eq!(prefix, "text\n| h |\n");
        assert!(table.starts_with("|---|"));
        assert_eq!(format!("{}{}", prefix, table), input);
    }

    #[test]
    fn test_separator_with_alignment_colons() {
        let splitter = TableSplitter::new();
        assert!(splitter.is_separator_line("|:---|---:|"));
        assert!(splitter.is_separator_line("| --- | --- |"));
        assert!(!splitter.is_separator_line("| a | b |"));
        assert!(!splitter.is_separator_line(""));
    }

    #[test]
    fn test_normalize_collapses_spaces_in_delimiter_runs() {
        let splitter = TableSplitter::new();
        let input = "| h |\n| --- | -- |\n";
        let normalized = splitter.normalize(input);

        assert!(normalized.contains("|-----|"));
        assert!(!normalized.contains("| ---"));
        // Prose outside delimiter runs is untouched
        assert!(normalized.starts_with("| h |\n"));
    }
}
