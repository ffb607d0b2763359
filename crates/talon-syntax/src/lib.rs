//! Syntax core for Talon voice-command files.
//!
//! # Example
//!
//! ```
//! use talon_syntax::parse;
//!
//! let source = "hello world:\n    insert(\"hi\")\n";
//! let parse = parse(source);
//! let command = parse.file().commands().next().unwrap();
//! assert_eq!(command.statements().count(), 1);
//! eprintln!("{}", parse.diagnostics().printer().source(source).render());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod comment;
pub mod diagnostics;
pub mod folding;
pub mod line_index;
pub mod parser;
pub mod printer;
pub mod rule_block;

pub use comment::{CommentRequest, toggle_comments};
pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Severity};
pub use folding::{FoldRegion, rule_folds, syntax_folds};
pub use line_index::LineIndex;
pub use parser::lexer::{LexState, Token, Tokenizer, lex, token_text, tokenize};
pub use parser::{Parse, SyntaxKind, SyntaxNode, SyntaxToken, parse};
pub use printer::SyntaxPrinter;
pub use rule_block::{RuleBlocks, RuleRange};

/// Errors from misusing the editing API. Malformed source text is never an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("line {line} is out of range (document has {line_count} lines)")]
    LineOutOfRange { line: usize, line_count: usize },
}

/// Result type for editing operations.
pub type Result<T> = std::result::Result<T, Error>;
