//! Line-comment toggling.
//!
//! Talon only has `#` line comments. Line primitives work on a single line's content;
//! [`toggle_comments`] applies them to a whole document for the editor-facing modes.

use crate::line_index::LineIndex;
use crate::rule_block::{RuleBlocks, RuleRange, is_blank, is_rule_header};
use crate::{Error, Result};

/// The lines a comment toggle applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentRequest {
    /// One line.
    Line(usize),
    /// One caret per entry; each distinct line toggles independently.
    Carets(Vec<usize>),
    /// Every line from `start` to `end` inclusive, each independently.
    Selection { start: usize, end: usize },
    /// The whole rule around the line, in one direction.
    Rule(usize),
    /// `Rule` on a rule header, `Line` anywhere else.
    Smart(usize),
}

/// Trimmed text starts with `#`.
pub fn is_commented(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// Inserts `"# "` at the first non-whitespace column. Blank lines come back unchanged.
pub fn comment_line(line: &str) -> String {
    if is_blank(line) {
        return line.to_string();
    }
    let indent = line.len() - line.trim_start().len();
    let (lead, rest) = line.split_at(indent);
    format!("{lead}# {rest}")
}

/// Removes a leading `"# "`, else a bare leading `"#"`, keeping indentation.
pub fn uncomment_line(line: &str) -> String {
    let indent = line.len() - line.trim_start().len();
    let (lead, rest) = line.split_at(indent);
    let rest = rest
        .strip_prefix("# ")
        .or_else(|| rest.strip_prefix('#'))
        .unwrap_or(rest);
    format!("{lead}{rest}")
}

pub fn toggle_line(line: &str) -> String {
    if is_commented(line) {
        uncomment_line(line)
    } else {
        comment_line(line)
    }
}

/// Applies `request` to `text`, returning the edited document.
///
/// Line terminators are preserved exactly.
pub fn toggle_comments(text: &str, request: &CommentRequest) -> Result<String> {
    let index = LineIndex::new(text);
    let mut edits: Vec<(usize, Direction)> = Vec::new();

    match request {
        CommentRequest::Line(line) => {
            check_line(&index, *line)?;
            edits.push((*line, Direction::Toggle));
        }
        CommentRequest::Carets(lines) => {
            let mut lines = lines.clone();
            lines.sort_unstable();
            lines.dedup();
            for line in lines {
                check_line(&index, line)?;
                edits.push((line, Direction::Toggle));
            }
        }
        CommentRequest::Selection { start, end } => {
            let (start, end) = if start <= end {
                (*start, *end)
            } else {
                (*end, *start)
            };
            check_line(&index, end)?;
            edits.extend((start..=end).map(|line| (line, Direction::Toggle)));
        }
        CommentRequest::Rule(line) => {
            check_line(&index, *line)?;
            edits.extend(rule_edits(&index, *line));
        }
        CommentRequest::Smart(line) => {
            check_line(&index, *line)?;
            let text = index.line(*line).unwrap_or_default();
            if is_rule_header(text) {
                edits.extend(rule_edits(&index, *line));
            } else {
                edits.push((*line, Direction::Toggle));
            }
        }
    }

    Ok(apply(&index, &edits))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Toggle,
    Comment,
    Uncomment,
}

fn check_line(index: &LineIndex<'_>, line: usize) -> Result<()> {
    if line < index.line_count() {
        Ok(())
    } else {
        Err(Error::LineOutOfRange {
            line,
            line_count: index.line_count(),
        })
    }
}

/// One direction for the whole rule, taken from its first line.
fn rule_edits(index: &LineIndex<'_>, line: usize) -> Vec<(usize, Direction)> {
    let blocks = RuleBlocks::from_index(index.clone());
    let range = match blocks.find_rule(line) {
        Some(range) => range,
        None => commented_rule(index, line),
    };

    let first = index.line(range.start).unwrap_or_default();
    let direction = if is_commented(first) {
        Direction::Uncomment
    } else {
        Direction::Comment
    };
    range.lines().map(|line| (line, direction)).collect()
}

/// A rule commented out as a whole: `# header:` followed by indented lines.
fn commented_rule(index: &LineIndex<'_>, line: usize) -> RuleRange {
    let header = index.line(line).unwrap_or_default();
    if !is_commented(header) || !is_rule_header(&uncomment_line(header)) {
        return RuleRange::single(line);
    }

    let mut end = line;
    while let Some(next) = index.line(end + 1) {
        if is_blank(next) || !next.starts_with(char::is_whitespace) {
            break;
        }
        end += 1;
    }
    RuleRange::new(line, end)
}

fn apply(index: &LineIndex<'_>, edits: &[(usize, Direction)]) -> String {
    let mut out = String::with_capacity(index.text().len() + edits.len() * 2);
    let mut edits = edits.iter().peekable();

    for (line, content) in index.lines().enumerate() {
        let edit = match edits.peek() {
            Some((target, direction)) if *target == line => {
                edits.next();
                Some(*direction)
            }
            _ => None,
        };
        match edit {
            None => out.push_str(content),
            Some(Direction::Toggle) => out.push_str(&toggle_line(content)),
            Some(Direction::Comment) => out.push_str(&comment_line(content)),
            Some(Direction::Uncomment) => out.push_str(&uncomment_line(content)),
        }
        out.push_str(index.terminator(line).unwrap_or_default());
    }
    out
}

#[cfg(test)]
#[path = "comment_tests.rs"]
mod tests;
