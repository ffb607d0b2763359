//! Parser state machine and low-level operations.

use rowan::{GreenNode, GreenNodeBuilder, TextRange};

use super::cst::{SyntaxKind, TokenSet};
use super::lexer::{Token, token_text};
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Returned by lookahead past the last token.
pub(super) const EOF: SyntaxKind = SyntaxKind::__LAST;

/// Trivia tokens are buffered and flushed when starting a new node.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) trivia_buffer: Vec<Token>,
    pub(super) builder: GreenNodeBuilder<'static>,
    pub(super) diagnostics: Diagnostics,
    /// Index of the first separator token; context headers keyed by a plain word
    /// are only recognized above it.
    pub(super) header_end: usize,
    /// Dropped tokens on the current line, reported as one diagnostic.
    pub(super) unrecognized: Option<TextRange>,
    pub(super) dropped: usize,
    pub(super) debug_fuel: std::cell::Cell<u32>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        let header_end = tokens
            .iter()
            .position(|t| t.kind == SyntaxKind::Separator)
            .unwrap_or(0);
        Self {
            source,
            tokens,
            pos: 0,
            trivia_buffer: Vec::with_capacity(4),
            builder: GreenNodeBuilder::new(),
            diagnostics: Diagnostics::new(),
            header_end,
            unrecognized: None,
            dropped: 0,
            debug_fuel: std::cell::Cell::new(256),
        }
    }

    pub(super) fn finish(mut self) -> (GreenNode, Diagnostics) {
        self.drain_trivia();
        (self.builder.finish(), self.diagnostics)
    }

    /// Current non-trivia kind, buffering any trivia in front of it.
    pub(super) fn current(&mut self) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        self.nth_raw(0)
    }

    fn reset_debug_fuel(&self) {
        self.debug_fuel.set(256);
    }

    pub(super) fn nth_raw(&self, lookahead: usize) -> SyntaxKind {
        self.ensure_progress();
        self.tokens
            .get(self.pos + lookahead)
            .map_or(EOF, |t| t.kind)
    }

    pub(super) fn current_span(&mut self) -> TextRange {
        self.skip_trivia_to_buffer();
        self.tokens.get(self.pos).map_or_else(
            || TextRange::empty((self.source.len() as u32).into()),
            |t| t.span,
        )
    }

    pub(super) fn eof(&mut self) -> bool {
        self.current() == EOF
    }

    pub(super) fn currently_is(&mut self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn currently_is_one_of(&mut self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    /// Raw index of the first non-trivia token at or after `pos`.
    pub(super) fn skip_trivia_from(&self, mut pos: usize) -> usize {
        while pos < self.tokens.len() && self.tokens[pos].kind.is_trivia() {
            pos += 1;
        }
        pos
    }

    /// Kind at raw index `pos`, or [`EOF`] past the end.
    pub(super) fn kind_at(&self, pos: usize) -> SyntaxKind {
        self.tokens.get(pos).map_or(EOF, |t| t.kind)
    }

    pub(super) fn skip_trivia_to_buffer(&mut self) {
        while self.pos < self.tokens.len() && self.tokens[self.pos].kind.is_trivia() {
            self.trivia_buffer.push(self.tokens[self.pos]);
            self.pos += 1;
        }
    }

    pub(super) fn drain_trivia(&mut self) {
        for token in self.trivia_buffer.drain(..) {
            let text = token_text(self.source, &token);
            self.builder.token(token.kind.into(), text);
        }
    }

    pub(super) fn start_node(&mut self, kind: SyntaxKind) {
        self.drain_trivia();
        self.builder.start_node(kind.into());
    }

    pub(super) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    pub(super) fn bump(&mut self) {
        assert!(self.pos < self.tokens.len(), "bump called at EOF");
        self.reset_debug_fuel();

        self.drain_trivia();

        let token = self.tokens[self.pos];
        let text = token_text(self.source, &token);
        self.builder.token(token.kind.into(), text);
        self.pos += 1;
    }

    pub(super) fn eat_token(&mut self, kind: SyntaxKind) -> bool {
        if self.currently_is(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Bumps every token up to, not including, the end of the line.
    pub(super) fn bump_to_line_end(&mut self) {
        while !matches!(self.current(), SyntaxKind::Newline | EOF) {
            self.bump();
        }
    }

    /// Attaches the current token to the enclosing node without wrapping it.
    ///
    /// Consecutive dropped tokens on one line are reported as one diagnostic;
    /// newlines and separator lines are dropped silently.
    pub(super) fn drop_token(&mut self) {
        let kind = self.current();
        let span = self.current_span();
        tracing::trace!(?kind, ?span, "dropping token");
        self.dropped += 1;

        if matches!(kind, SyntaxKind::Newline | SyntaxKind::Separator) {
            self.flush_unrecognized();
        } else {
            self.unrecognized = Some(match self.unrecognized {
                Some(pending) => pending.cover(span),
                None => span,
            });
        }
        self.bump();
    }

    pub(super) fn flush_unrecognized(&mut self) {
        let Some(range) = self.unrecognized.take() else {
            return;
        };
        let text = self.source[std::ops::Range::<usize>::from(range)].to_string();
        self.diagnostics
            .report(DiagnosticKind::UnrecognizedInput, range)
            .message(text)
            .emit();
    }

    /// Reports tokens the lexer degraded: invalid characters and literals missing
    /// their closing delimiter.
    pub(super) fn report_lexical_problems(&mut self) {
        for token in &self.tokens {
            let text = token_text(self.source, token);
            let kind = match token.kind {
                SyntaxKind::InvalidChar => {
                    self.diagnostics
                        .report(DiagnosticKind::InvalidCharacter, token.span)
                        .message(text.escape_debug().to_string())
                        .emit();
                    continue;
                }
                SyntaxKind::String if !is_closed(text, '"', true) => {
                    DiagnosticKind::UnterminatedString
                }
                SyntaxKind::Capture if !is_closed(text, '>', false) => {
                    DiagnosticKind::UnclosedCapture
                }
                SyntaxKind::Regex if !is_closed(text, '$', true) => {
                    DiagnosticKind::UnterminatedRegex
                }
                _ => continue,
            };
            self.diagnostics.report(kind, token.span).emit();
        }
    }
}

/// Whether a delimited literal ends with an unescaped `close`.
fn is_closed(text: &str, close: char, escapes: bool) -> bool {
    let mut chars = text.chars().skip(1).peekable();
    while let Some(c) = chars.next() {
        if escapes && c == '\\' {
            chars.next();
        } else if c == close {
            return chars.peek().is_none();
        }
    }
    false
}
