//! Resumable lexer for Talon files.
//!
//! Produces span-based tokens without storing text - text is sliced from source only when needed.
//!
//! Recognition happens in two layers. Logos matches the context-free token at the current
//! position; a cooking step then applies the rules that depend on [`LexState`]:
//! separator lines, list references and identifier classification.
//!
//! ## Resumption
//!
//! The whole lexer state is the two-flag [`LexState`]. A host can save it at any token
//! boundary (see [`Tokenizer::state`]) and later restart with [`tokenize`] from that offset,
//! getting the same tokens a full scan would produce.
//!
//! ## Error handling
//!
//! The lexer never fails. A character no rule accepts becomes an `InvalidChar` token of
//! exactly one character, so every step makes progress.

use logos::Logos;
use rowan::TextRange;

use super::cst::SyntaxKind;

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

/// Lexer mode carried across tokens and across resumptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LexState {
    /// Left of a rule's colon, where identifiers are spoken words.
    pub in_command_pattern: bool,
    /// Nothing but horizontal whitespace seen since the last newline.
    pub at_line_start: bool,
}

impl LexState {
    pub const INITIAL: LexState = LexState {
        in_command_pattern: true,
        at_line_start: true,
    };

    /// Packs the state into two bits: bit 0 is command-pattern mode, bit 1 is line start.
    #[inline]
    pub const fn to_bits(self) -> u8 {
        (self.in_command_pattern as u8) | ((self.at_line_start as u8) << 1)
    }

    /// Inverse of [`LexState::to_bits`]; higher bits are ignored.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            in_command_pattern: bits & 0b01 != 0,
            at_line_start: bits & 0b10 != 0,
        }
    }

    fn after(self, kind: SyntaxKind) -> Self {
        match kind {
            SyntaxKind::Whitespace => self,
            SyntaxKind::Newline => Self::INITIAL,
            SyntaxKind::Separator => Self {
                in_command_pattern: true,
                at_line_start: false,
            },
            SyntaxKind::Colon => Self {
                in_command_pattern: false,
                at_line_start: false,
            },
            _ => Self {
                at_line_start: false,
                ..self
            },
        }
    }
}

impl Default for LexState {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Identifier prefixes that mark a call as a Talon action.
const ACTION_PREFIXES: &[&str] = &["user.", "app.", "win.", "edit.", "key.", "mouse."];

/// Bare action names that need no namespace.
const BUILTIN_ACTIONS: &[&str] = &["insert", "sleep", "print"];

/// Streaming tokenizer over `source[offset..end]`.
///
/// Each call to `next` consumes at least one character and yields exactly one token.
#[derive(Debug, Clone)]
pub struct Tokenizer<'src> {
    source: &'src str,
    offset: usize,
    end: usize,
    state: LexState,
}

impl<'src> Tokenizer<'src> {
    /// State to resume from at [`Tokenizer::offset`].
    #[inline]
    pub fn state(&self) -> LexState {
        self.state
    }

    /// Offset of the next token to be produced.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn cook(&self, rest: &'src str, kind: SyntaxKind, len: usize) -> (SyntaxKind, usize) {
        match kind {
            SyntaxKind::Dash if self.state.at_line_start => match separator_len(rest) {
                Some(len) => (SyntaxKind::Separator, len),
                None => (SyntaxKind::Dash, len),
            },
            SyntaxKind::BraceOpen if self.state.in_command_pattern => match list_ref_len(rest) {
                Some(len) => (SyntaxKind::ListRef, len),
                None => (SyntaxKind::BraceOpen, len),
            },
            SyntaxKind::Identifier => {
                let (text, after) = rest.split_at(len);
                let kind = classify_identifier(text, after.starts_with('('), self.state);
                (kind, len)
            }
            _ => (kind, len),
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.offset >= self.end {
            return None;
        }

        let rest = &self.source[self.offset..self.end];
        let mut lexer = SyntaxKind::lexer(rest);
        let (kind, len) = match lexer.next() {
            Some(Ok(kind)) => self.cook(rest, kind, lexer.span().end),
            Some(Err(())) | None => {
                let len = rest.chars().next().map_or(1, char::len_utf8);
                (SyntaxKind::InvalidChar, len)
            }
        };
        debug_assert!(len > 0, "lexer must consume at least one character");

        let start = self.offset;
        self.offset += len;
        self.state = self.state.after(kind);
        Some(Token::new(kind, range_to_text_range(start, self.offset)))
    }
}

/// Starts tokenizing `source[start..end]` in `state`.
///
/// Offsets are clamped to the source and moved back onto character boundaries.
pub fn tokenize(source: &str, start: usize, end: usize, state: LexState) -> Tokenizer<'_> {
    let end = floor_char_boundary(source, end.min(source.len()));
    let start = floor_char_boundary(source, start.min(end));
    Tokenizer {
        source,
        offset: start,
        end,
        state,
    }
}

/// Tokenizes the whole source from [`LexState::INITIAL`].
pub fn lex(source: &str) -> Vec<Token> {
    tokenize(source, 0, source.len(), LexState::INITIAL).collect()
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'q>(source: &'q str, token: &Token) -> &'q str {
    &source[std::ops::Range::<usize>::from(token.span)]
}

fn range_to_text_range(start: usize, end: usize) -> TextRange {
    TextRange::new((start as u32).into(), (end as u32).into())
}

fn floor_char_boundary(source: &str, mut index: usize) -> usize {
    while !source.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Length of a separator line starting at `rest`: three or more dashes, then only
/// horizontal whitespace up to the newline or the end of input.
fn separator_len(rest: &str) -> Option<usize> {
    let dashes = rest.bytes().take_while(|&b| b == b'-').count();
    if dashes < 3 {
        return None;
    }
    let trailing = rest[dashes..]
        .bytes()
        .take_while(|&b| matches!(b, b' ' | b'\t' | b'\r'))
        .count();
    let len = dashes + trailing;
    match rest.as_bytes().get(len) {
        None | Some(b'\n') => Some(len),
        Some(_) => None,
    }
}

/// Length of `{namespace.name}` starting at `rest`, when the braces close on the same
/// line and the content is dotted.
fn list_ref_len(rest: &str) -> Option<usize> {
    let line = rest.split('\n').next().unwrap_or(rest);
    let close = line.find('}')?;
    line[1..close].contains('.').then_some(close + 1)
}

fn classify_identifier(text: &str, followed_by_paren: bool, state: LexState) -> SyntaxKind {
    if let Some(keyword) = SyntaxKind::keyword(text) {
        return keyword;
    }
    if followed_by_paren {
        let is_action = BUILTIN_ACTIONS.contains(&text)
            || ACTION_PREFIXES.iter().any(|prefix| text.starts_with(prefix));
        return if is_action {
            SyntaxKind::ActionName
        } else {
            SyntaxKind::FunctionName
        };
    }
    if text.contains('.') {
        SyntaxKind::VariableRef
    } else if state.in_command_pattern {
        SyntaxKind::Word
    } else {
        SyntaxKind::Identifier
    }
}
