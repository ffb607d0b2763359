//! Fold regions for multi-line constructs.
//!
//! Two sources: the parse tree ([`syntax_folds`]) and the line-based rule resolver
//! ([`rule_folds`]), the latter usable while the file does not parse cleanly.
//! A region runs from the end of a construct's first line to the end of its last
//! line, so the first line stays visible.

use rowan::{NodeOrToken, TextRange, TextSize};

use crate::line_index::LineIndex;
use crate::parser::{Item, Parse, SyntaxKind, SyntaxNode};
use crate::rule_block::RuleBlocks;

pub const BODY_PLACEHOLDER: &str = " ...";
pub const BINDING_PLACEHOLDER: &str = " { ... }";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FoldRegion {
    pub range: TextRange,
    pub placeholder: &'static str,
}

/// Folds for every item and statement that spans more than one line, in source order.
pub fn syntax_folds(parse: &Parse) -> Vec<FoldRegion> {
    let root = parse.syntax();
    let text = root.text().to_string();
    let index = LineIndex::new(&text);
    let mut folds = Vec::new();

    for item in parse.file().items() {
        let placeholder = match item {
            Item::Binding(_) => BINDING_PLACEHOLDER,
            Item::Match(_) | Item::Command(_) => BODY_PLACEHOLDER,
        };
        folds.extend(fold_node(&index, item.as_cst(), placeholder));

        for stmt in item.statements() {
            folds.extend(fold_node(&index, stmt.as_cst(), BODY_PLACEHOLDER));
        }
    }
    folds
}

/// Folds for every rule whose resolved range has body lines.
pub fn rule_folds(text: &str) -> Vec<FoldRegion> {
    let blocks = RuleBlocks::new(text);
    let index = blocks.line_index();

    blocks
        .rules()
        .into_iter()
        .filter(|rule| !rule.is_single_line())
        .filter_map(|rule| {
            let start = index.line_end(rule.start)?;
            let end = index.line_end(rule.end)?;
            (end > start).then(|| FoldRegion {
                range: TextRange::new(start, end),
                placeholder: BODY_PLACEHOLDER,
            })
        })
        .collect()
}

fn fold_node(index: &LineIndex<'_>, node: &SyntaxNode, placeholder: &'static str) -> Option<FoldRegion> {
    let extent = significant_extent(node)?;
    let first_line = index.line_of_offset(extent.start());
    let last_line = index.line_of_offset(extent.end() - TextSize::from(1));
    if first_line == last_line {
        return None;
    }

    let mut start = index.line_end(first_line)?;
    // A literal spanning the line break keeps the fold from starting inside it.
    if let Some(token) = token_straddling(node, start) {
        start = token.end();
    }
    let end = index.line_end(last_line)?.max(extent.end());
    (end > start).then(|| FoldRegion {
        range: TextRange::new(start, end),
        placeholder,
    })
}

/// Range from the first to the last token that is not trivia or a line break.
fn significant_extent(node: &SyntaxNode) -> Option<TextRange> {
    let mut tokens = node
        .descendants_with_tokens()
        .filter_map(NodeOrToken::into_token)
        .filter(|t| !t.kind().is_trivia() && t.kind() != SyntaxKind::Newline);
    let first = tokens.next()?.text_range();
    let last = tokens.last().map_or(first, |t| t.text_range());
    Some(first.cover(last))
}

fn token_straddling(node: &SyntaxNode, offset: TextSize) -> Option<TextRange> {
    node.descendants_with_tokens()
        .filter_map(NodeOrToken::into_token)
        .map(|t| t.text_range())
        .find(|range| range.start() < offset && offset < range.end())
}

#[cfg(test)]
#[path = "folding_tests.rs"]
mod tests;
