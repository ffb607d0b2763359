//! Grammar productions for Talon files.
//!
//! The grammar is line-oriented. Each top-level construct is decided by a lookahead
//! predicate over the token vector before any node is opened, since the green tree
//! builder cannot roll back. Productions:
//!
//! ```text
//! file      = (match | command | binding | <dropped token>)*
//! match     = modifier* key ':' <rest of line> '\n'? (separator '\n'?)?
//! command   = rule ':' block
//! binding   = keyword ('(' <tokens> ')')? ':' block
//! block     = statement? '\n'? (statement '\n'? | '\n')*   -- until a line starts a top-level construct
//! ```

use super::core::{EOF, Parser};
use super::cst::SyntaxKind;
use super::cst::token_sets::{
    BINDING_KEYWORDS, MATCH_KEYS, MODIFIERS, RULE_END, TOP_LEVEL_FIRST,
};

impl Parser<'_> {
    pub fn parse_file(&mut self) {
        self.start_node(SyntaxKind::File);
        self.report_lexical_problems();

        while !self.eof() {
            if self.at_match() {
                self.flush_unrecognized();
                self.parse_match();
            } else if self.at_command() {
                self.flush_unrecognized();
                self.parse_command();
            } else if self.at_binding() {
                self.flush_unrecognized();
                self.parse_binding();
            } else {
                self.drop_token();
            }
        }

        self.flush_unrecognized();
        self.drain_trivia();
        self.finish_node();
    }

    /// `and`/`not`* key `:`
    fn at_match(&mut self) -> bool {
        self.current();
        let mut pos = self.pos;
        while MODIFIERS.contains(self.kind_at(pos)) {
            pos = self.skip_trivia_from(pos + 1);
        }

        let key = self.kind_at(pos);
        let key_allowed = match key {
            SyntaxKind::Word => pos < self.header_end,
            _ => MATCH_KEYS.contains(key),
        };
        if !key_allowed {
            return false;
        }
        let colon = self.skip_trivia_from(pos + 1);
        self.kind_at(colon) == SyntaxKind::Colon
    }

    /// A non-empty run of tokens on this line, ended by a colon, that does not
    /// read as a binding header.
    fn at_command(&mut self) -> bool {
        let first = self.current();
        if RULE_END.contains(first) || first == EOF || self.at_binding() {
            return false;
        }

        let mut pos = self.pos;
        while !RULE_END.contains(self.kind_at(pos)) && self.kind_at(pos) != EOF {
            pos += 1;
        }
        self.kind_at(pos) == SyntaxKind::Colon
    }

    /// keyword, optional parenthesized arguments, colon.
    fn at_binding(&mut self) -> bool {
        if !BINDING_KEYWORDS.contains(self.current()) {
            return false;
        }

        let mut pos = self.skip_trivia_from(self.pos + 1);
        if self.kind_at(pos) == SyntaxKind::ParenOpen {
            while !matches!(self.kind_at(pos), SyntaxKind::ParenClose | EOF) {
                pos += 1;
            }
            if self.kind_at(pos) == EOF {
                return false;
            }
            pos = self.skip_trivia_from(pos + 1);
        }
        self.kind_at(pos) == SyntaxKind::Colon
    }

    fn parse_match(&mut self) {
        self.start_node(SyntaxKind::Match);
        while self.currently_is_one_of(MODIFIERS) {
            self.bump();
        }
        // Key
        self.bump();
        self.bump_expected(SyntaxKind::Colon);
        self.bump_to_line_end();
        self.eat_token(SyntaxKind::Newline);

        if self.eat_token(SyntaxKind::Separator) {
            self.eat_token(SyntaxKind::Newline);
        }
        self.finish_node();
    }

    fn parse_command(&mut self) {
        self.start_node(SyntaxKind::Command);

        self.start_node(SyntaxKind::Rule);
        while !self.currently_is_one_of(RULE_END) {
            self.bump();
        }
        self.finish_node();

        self.bump_expected(SyntaxKind::Colon);
        self.parse_block();
        self.finish_node();
    }

    fn parse_binding(&mut self) {
        self.start_node(SyntaxKind::Binding);
        // Keyword
        self.bump();

        if self.currently_is(SyntaxKind::ParenOpen) {
            self.start_node(SyntaxKind::BindingArgs);
            self.bump();
            while !self.currently_is(SyntaxKind::ParenClose) {
                self.bump();
            }
            self.bump();
            self.finish_node();
        }

        self.bump_expected(SyntaxKind::Colon);
        self.parse_block();
        self.finish_node();
    }

    /// Statements after a colon: the rest of the colon line, then following lines
    /// until one begins with a binding keyword, a modifier or a bare identifier.
    ///
    /// Boundaries are found per line, not by indentation.
    fn parse_block(&mut self) {
        // Whatever follows the colon on its own line belongs to this block.
        if !matches!(self.current(), SyntaxKind::Newline | EOF) {
            self.parse_statement();
        }
        self.eat_token(SyntaxKind::Newline);

        loop {
            let kind = self.current();
            if kind == EOF || TOP_LEVEL_FIRST.contains(kind) {
                break;
            }
            if kind == SyntaxKind::Newline {
                self.bump();
                continue;
            }
            self.parse_statement();
            self.eat_token(SyntaxKind::Newline);
        }
    }

    fn parse_statement(&mut self) {
        self.start_node(SyntaxKind::Statement);
        self.bump_to_line_end();
        self.finish_node();
    }
}
