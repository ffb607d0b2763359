//! Syntax kinds for Talon files.
//!
//! `SyntaxKind` serves dual roles: token kinds (from the lexer) and node kinds (from the parser).
//! Logos derives the context-free part of token recognition; kinds that depend on lexer
//! state (separators, list references, classified identifiers) and node kinds lack
//! token/regex attributes and are produced by the cooking step in [`super::lexer`].
//! `TalonLang` implements Rowan's `Language` trait for tree construction.

use logos::Logos;
use rowan::Language;
use serde::Serialize;

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Logos, Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    /// Spaces, tabs and carriage returns. Never contains `\n`.
    #[regex(r"[ \t\r]+")]
    Whitespace = 0,

    #[token("\n")]
    Newline,

    #[regex(r"#[^\n]*", allow_greedy = true)]
    Comment,

    /// Three or more dashes alone on a line. Cooked from `Dash`.
    Separator,

    /// Double-quoted; unterminated literals run to the end of input.
    #[regex(r#""(?:[^"\\]|\\[\s\S])*\\?"?"#, allow_greedy = true)]
    String,

    /// Digits with embedded dots, deliberately loose.
    #[regex(r"[0-9][0-9.]*")]
    Number,

    /// `<name>`; unterminated captures stop at the end of the line.
    #[regex(r"<[^>\n]*>?", allow_greedy = true)]
    Capture,

    /// `{namespace.name}` in command-pattern position. Cooked from `BraceOpen`.
    ListRef,

    /// `^...$` with backslash escapes, never crossing a newline.
    #[regex(r"\^(?:[^$\\\n]|\\[^\n])*\\?\$?", allow_greedy = true)]
    Regex,

    #[regex(r#"/[\p{L}\p{N}._\-][^\n"),]*"#, allow_greedy = true)]
    Path,

    /// `user.foo(`, `edit.copy(`, `insert(` and friends.
    ActionName,

    /// Any other identifier directly followed by `(`.
    FunctionName,

    /// Dotted identifier not followed by `(`.
    VariableRef,

    /// Plain identifier in command-pattern position.
    Word,

    /// Identifier as matched by Logos; cooked into one of the kinds above or a keyword.
    #[regex(r"[\p{L}_][\p{L}\p{N}_.\-]*")]
    Identifier,

    KwAnd,
    KwNot,
    KwOr,
    KwSettings,
    KwTag,
    KwApp,
    KwKey,
    KwFace,
    KwDeck,
    KwGamepad,
    KwNoise,
    KwParrot,
    KwMode,
    KwUser,
    KwSelf,

    #[token(":")]
    Colon,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token(",")]
    Comma,

    #[token(".")]
    Dot,

    #[token("|")]
    Pipe,

    #[token("-")]
    Dash,

    #[token("=")]
    Equals,

    #[token("+")]
    Plus,

    #[token("*")]
    Star,

    #[token("$")]
    Dollar,

    #[token(">")]
    Greater,

    /// Exactly one unrecognized character.
    InvalidChar,

    // --- Node kinds (non-terminals) ---
    File,
    Match,
    Command,
    Rule,
    Statement,
    Binding,
    BindingArgs,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    /// Tokens the parser skips during lookahead and attaches to the enclosing node.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | Comment)
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        (KwAnd as u16..=KwSelf as u16).contains(&(self as u16))
    }

    #[inline]
    pub fn is_node(self) -> bool {
        self >= File && self < __LAST
    }

    /// Keyword kind for `text`, if it is one of the reserved words.
    pub fn keyword(text: &str) -> Option<SyntaxKind> {
        let kind = match text {
            "and" => KwAnd,
            "not" => KwNot,
            "or" => KwOr,
            "settings" => KwSettings,
            "tag" => KwTag,
            "app" => KwApp,
            "key" => KwKey,
            "face" => KwFace,
            "deck" => KwDeck,
            "gamepad" => KwGamepad,
            "noise" => KwNoise,
            "parrot" => KwParrot,
            "mode" => KwMode,
            "user" => KwUser,
            "self" => KwSelf,
            _ => return None,
        };
        Some(kind)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TalonLang {}

impl Language for TalonLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<TalonLang>;
pub type SyntaxToken = rowan::SyntaxToken<TalonLang>;

/// 64-bit bitset of `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Creates an empty token set.
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Panics at compile time if any kind's discriminant >= 64.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: SyntaxKind) -> Self {
        let kind = kind as u16;
        assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
        TokenSet(1 << kind)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for i in 0..64u16 {
            if self.0 & (1 << i) != 0 && i < __LAST as u16 {
                let kind: SyntaxKind = unsafe { std::mem::transmute(i) };
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    pub const TRIVIA: TokenSet = TokenSet::new(&[Whitespace, Comment]);

    /// `and` / `not` in front of a context header.
    pub const MODIFIERS: TokenSet = TokenSet::new(&[KwAnd, KwNot]);

    /// Tokens that can name a context header: `app:`, `title:`, `code.language:`.
    pub const MATCH_KEYS: TokenSet =
        TokenSet::new(&[Identifier, Word, VariableRef, KwApp, KwTag, KwMode]);

    /// Keywords that introduce a binding block: `settings():`, `key(ctrl-a):`.
    pub const BINDING_KEYWORDS: TokenSet = TokenSet::new(&[
        KwSettings, KwTag, KwApp, KwKey, KwFace, KwDeck, KwGamepad, KwNoise, KwParrot,
    ]);

    /// A statement block ends before a line starting with one of these.
    /// Differs from a plain identifier-or-keyword stop set: `Word` also stops, `VariableRef`
    /// continues, and `parse_block` always takes the rest of the colon's line first.
    pub const TOP_LEVEL_FIRST: TokenSet = BINDING_KEYWORDS
        .union(MODIFIERS)
        .union(TokenSet::new(&[Identifier, Word]));

    /// A rule (command pattern) runs up to one of these.
    pub const RULE_END: TokenSet = TokenSet::new(&[Colon, Newline]);
}
