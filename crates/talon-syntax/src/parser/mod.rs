//! Parser infrastructure for Talon files.
//!
//! # Architecture
//!
//! This parser produces a lossless concrete syntax tree (CST) via Rowan's green tree builder.
//!
//! - Zero-copy parsing: tokens carry spans, text sliced only when building tree nodes
//! - Trivia buffering: whitespace/comments collected, then attached to whichever node
//!   the next significant token lands in
//! - Lookahead before commit: each top-level production is decided up front, so no
//!   node is ever opened and abandoned
//!
//! # Recovery Strategy
//!
//! The parser always produces a tree and never fails. A token no production accepts is
//! attached directly to the `File` node and reported; the parser then retries at the
//! next token. Every loop iteration consumes at least one token.

pub mod ast;
pub mod cst;
pub mod lexer;

mod core;
mod grammar;
mod invariants;

#[cfg(test)]
mod cst_tests;
#[cfg(test)]
mod tests;

pub use cst::{SyntaxKind, SyntaxNode, SyntaxToken, TalonLang};

pub use ast::{Binding, BindingArgs, Command, File, Item, Match, Rule, Statement};

pub use self::core::Parser;

use crate::diagnostics::Diagnostics;
use lexer::lex;

/// Parse result containing the green tree and what went wrong along the way.
///
/// The tree is always complete; diagnostics are returned separately.
#[derive(Debug, Clone)]
pub struct Parse {
    cst: rowan::GreenNode,
    diagnostics: Diagnostics,
}

impl Parse {
    pub fn as_cst(&self) -> &rowan::GreenNode {
        &self.cst
    }

    /// Creates a typed view over the immutable green tree.
    /// This is cheap: SyntaxNode is a thin wrapper with parent pointers.
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.cst.clone())
    }

    pub fn file(&self) -> File {
        File::cast(self.syntax()).unwrap_or_else(|| unreachable!("parser always produces File"))
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }
}

/// Main entry point. Infallible: malformed input yields diagnostics, never an error.
pub fn parse(source: &str) -> Parse {
    parse_with_parser(Parser::new(source, lex(source)))
}

pub(crate) fn parse_with_parser(mut parser: Parser) -> Parse {
    let token_count = parser.tokens.len();
    parser.parse_file();
    let dropped = parser.dropped;
    let (cst, diagnostics) = parser.finish();
    let parse = Parse { cst, diagnostics };

    tracing::debug!(
        tokens = token_count,
        items = parse.file().items().count(),
        dropped,
        diagnostics = parse.diagnostics.len(),
        "parsed talon source"
    );
    parse
}
