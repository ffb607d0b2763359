//! Rule-block resolution over raw line text.
//!
//! Works without a parse tree, so editor commands can find the rule around a line
//! even while the file is mid-edit. Comment toggling and folding both go through here.

use std::ops::RangeInclusive;

use crate::line_index::LineIndex;

/// Inclusive line range of one rule: its header line and the body lines below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleRange {
    pub start: usize,
    pub end: usize,
}

impl RuleRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn single(line: usize) -> Self {
        Self::new(line, line)
    }

    pub fn lines(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }

    pub fn is_single_line(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, line: usize) -> bool {
        self.lines().contains(&line)
    }
}

/// A trimmed line that ends with `:` and is not a comment.
pub fn is_rule_header(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.ends_with(':') && !trimmed.starts_with('#')
}

/// Three or more dashes and nothing else once trimmed.
pub fn is_separator(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= 3 && trimmed.bytes().all(|b| b == b'-')
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn is_indented(line: &str) -> bool {
    line.starts_with(char::is_whitespace)
}

/// Whether `line` continues the body of the rule above it.
///
/// An indented line ending in `:` opens a rule of its own instead, so every line of
/// a resolved range resolves back to that same range.
fn is_body_line(line: &str) -> bool {
    if is_blank(line) || is_separator(line) {
        return false;
    }
    if line.starts_with('#') {
        return true;
    }
    is_indented(line) && !is_rule_header(line)
}

/// Rule lookups over one text.
#[derive(Debug, Clone)]
pub struct RuleBlocks<'a> {
    index: LineIndex<'a>,
}

impl<'a> RuleBlocks<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            index: LineIndex::new(text),
        }
    }

    pub fn from_index(index: LineIndex<'a>) -> Self {
        Self { index }
    }

    pub fn line_index(&self) -> &LineIndex<'a> {
        &self.index
    }

    /// The rule containing `line`, or `None` when a blank line, a separator or the top
    /// of the file comes before any rule header, or when the header's body ends above
    /// `line`.
    pub fn find_rule(&self, line: usize) -> Option<RuleRange> {
        if line >= self.index.line_count() {
            tracing::trace!(line, "rule lookup past the last line");
            return None;
        }

        let mut start = None;
        for candidate in (0..=line).rev() {
            let text = self.index.line(candidate)?;
            if is_rule_header(text) {
                start = Some(candidate);
                break;
            }
            if is_blank(text) || is_separator(text) {
                break;
            }
        }
        let Some(start) = start else {
            tracing::trace!(line, "no rule header above line");
            return None;
        };

        // A line the body scan stops short of belongs to no rule.
        let range = RuleRange::new(start, self.body_end(start));
        if !range.contains(line) {
            tracing::trace!(line, ?range, "line outside the rule above it");
            return None;
        }
        Some(range)
    }

    /// Like [`RuleBlocks::find_rule`], degrading to `line..=line` when no rule is found.
    pub fn find_rule_range(&self, line: usize) -> RuleRange {
        self.find_rule(line).unwrap_or(RuleRange::single(line))
    }

    /// Last line of the body below the header at `start`.
    pub(crate) fn body_end(&self, start: usize) -> usize {
        let mut end = start;
        while let Some(next) = self.index.line(end + 1) {
            if !is_body_line(next) {
                break;
            }
            end += 1;
        }
        end
    }

    /// Every header line that resolves to a rule, top to bottom.
    pub fn rule_starts(&self) -> Vec<usize> {
        self.index
            .lines()
            .enumerate()
            .filter(|(_, text)| is_rule_header(text))
            .map(|(line, _)| line)
            .collect()
    }

    /// Every rule in the text, in order.
    pub fn rules(&self) -> Vec<RuleRange> {
        self.rule_starts()
            .into_iter()
            .map(|start| RuleRange::new(start, self.body_end(start)))
            .collect()
    }
}

#[cfg(test)]
#[path = "rule_block_tests.rs"]
mod tests;
