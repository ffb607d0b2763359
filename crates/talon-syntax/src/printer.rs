//! Builder-pattern printer for parsed Talon files.
//!
//! The default output is the typed view (items, rules, statements); `raw(true)` dumps
//! the concrete tree token by token.

use std::fmt::Write;

use rowan::NodeOrToken;

use crate::parser::{Binding, Command, Item, Match, Parse, Statement, SyntaxNode};

pub struct SyntaxPrinter<'p> {
    parse: &'p Parse,
    raw: bool,
    trivia: bool,
    spans: bool,
}

impl<'p> SyntaxPrinter<'p> {
    pub fn new(parse: &'p Parse) -> Self {
        Self {
            parse,
            raw: false,
            trivia: false,
            spans: false,
        }
    }

    pub fn raw(mut self, value: bool) -> Self {
        self.raw = value;
        self
    }

    /// Include whitespace and comment tokens in the raw dump.
    pub fn with_trivia(mut self, value: bool) -> Self {
        self.trivia = value;
        self
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.format(&mut out);
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        if self.raw {
            self.format_cst(&self.parse.syntax(), 0, w)
        } else {
            self.format_file(w)
        }
    }

    fn format_cst(&self, node: &SyntaxNode, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let span = self.span_str(node.text_range());

        writeln!(w, "{}{:?}{}", prefix, node.kind(), span)?;

        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Node(n) => self.format_cst(&n, indent + 1, w)?,
                NodeOrToken::Token(t) => {
                    if self.trivia || !t.kind().is_trivia() {
                        let child_prefix = "  ".repeat(indent + 1);
                        let child_span = self.span_str(t.text_range());
                        writeln!(
                            w,
                            "{}{:?}{} {:?}",
                            child_prefix,
                            t.kind(),
                            child_span,
                            t.text()
                        )?;
                    }
                }
            }
        }
        Ok(())
    }

    fn format_file(&self, w: &mut impl Write) -> std::fmt::Result {
        let file = self.parse.file();
        let span = self.span_str(file.as_cst().text_range());
        writeln!(w, "File{}", span)?;

        for item in file.items() {
            match item {
                Item::Match(m) => self.format_match(&m, w)?,
                Item::Command(c) => self.format_command(&c, w)?,
                Item::Binding(b) => self.format_binding(&b, w)?,
            }
        }
        Ok(())
    }

    fn format_match(&self, m: &Match, w: &mut impl Write) -> std::fmt::Result {
        let span = self.span_str(m.as_cst().text_range());
        let mut header = String::new();
        for modifier in m.modifiers() {
            header.push_str(modifier.text());
            header.push(' ');
        }
        if let Some(key) = m.key() {
            header.push_str(key.text());
        }
        writeln!(w, "  Match{} {}: {}", span, header, m.value_text())?;

        if let Some(sep) = m.separator() {
            let span = self.span_str(sep.text_range());
            writeln!(w, "    Separator{}", span)?;
        }
        Ok(())
    }

    fn format_command(&self, c: &Command, w: &mut impl Write) -> std::fmt::Result {
        let span = self.span_str(c.as_cst().text_range());
        writeln!(w, "  Command{}", span)?;

        if let Some(rule) = c.rule() {
            let span = self.span_str(rule.as_cst().text_range());
            writeln!(w, "    Rule{} {}", span, rule.as_cst().text())?;
        }
        for stmt in c.statements() {
            self.format_statement(&stmt, w)?;
        }
        Ok(())
    }

    fn format_binding(&self, b: &Binding, w: &mut impl Write) -> std::fmt::Result {
        let span = self.span_str(b.as_cst().text_range());
        let keyword = b.keyword().map(|t| t.text().to_string()).unwrap_or_default();
        let args = b
            .args()
            .map(|a| a.as_cst().text().to_string())
            .unwrap_or_default();
        writeln!(w, "  Binding{} {}{}", span, keyword, args)?;

        for stmt in b.statements() {
            self.format_statement(&stmt, w)?;
        }
        Ok(())
    }

    fn format_statement(&self, stmt: &Statement, w: &mut impl Write) -> std::fmt::Result {
        let span = self.span_str(stmt.as_cst().text_range());
        writeln!(w, "    Statement{} {}", span, stmt.as_cst().text())
    }

    fn span_str(&self, range: rowan::TextRange) -> String {
        if !self.spans {
            return String::new();
        }
        format!(
            " [{}..{}]",
            u32::from(range.start()),
            u32::from(range.end())
        )
    }
}

impl Parse {
    pub fn printer(&self) -> SyntaxPrinter<'_> {
        SyntaxPrinter::new(self)
    }

    /// Typed tree dump, as printed by `SyntaxPrinter` with default options.
    pub fn dump_ast(&self) -> String {
        self.printer().dump()
    }

    /// Concrete tree dump without trivia.
    pub fn dump_cst(&self) -> String {
        self.printer().raw(true).dump()
    }
}
