//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors.
//! Cast is infallible for correct `SyntaxKind`; accessors return `Option` where the
//! tree shape allows the piece to be missing.

use super::cst::token_sets::MODIFIERS;
use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(File, File);
ast_node!(Match, Match);
ast_node!(Command, Command);
ast_node!(Rule, Rule);
ast_node!(Binding, Binding);
ast_node!(BindingArgs, BindingArgs);
ast_node!(Statement, Statement);

/// Top-level construct of a file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Item {
    Match(Match),
    Command(Command),
    Binding(Binding),
}

impl Item {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::Match => Match::cast(node).map(Item::Match),
            SyntaxKind::Command => Command::cast(node).map(Item::Command),
            SyntaxKind::Binding => Binding::cast(node).map(Item::Binding),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Item::Match(n) => n.as_cst(),
            Item::Command(n) => n.as_cst(),
            Item::Binding(n) => n.as_cst(),
        }
    }

    /// Statement block, empty for context headers.
    pub fn statements(&self) -> Vec<Statement> {
        match self {
            Item::Match(_) => Vec::new(),
            Item::Command(n) => n.statements().collect(),
            Item::Binding(n) => n.statements().collect(),
        }
    }
}

/// Direct child tokens of `node`, trivia excluded.
fn significant_tokens(node: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> + '_ {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .filter(|t| !t.kind().is_trivia())
}

fn child_token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    significant_tokens(node).find(|t| t.kind() == kind)
}

impl File {
    pub fn items(&self) -> impl Iterator<Item = Item> + '_ {
        self.0.children().filter_map(Item::cast)
    }

    pub fn matches(&self) -> impl Iterator<Item = Match> + '_ {
        self.0.children().filter_map(Match::cast)
    }

    pub fn commands(&self) -> impl Iterator<Item = Command> + '_ {
        self.0.children().filter_map(Command::cast)
    }

    pub fn bindings(&self) -> impl Iterator<Item = Binding> + '_ {
        self.0.children().filter_map(Binding::cast)
    }

    /// Tokens left outside every construct, newlines and separators included.
    pub fn dropped_tokens(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        significant_tokens(&self.0)
    }
}

impl Match {
    /// Leading `and` / `not` keywords.
    pub fn modifiers(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        significant_tokens(&self.0).take_while(|t| MODIFIERS.contains(t.kind()))
    }

    pub fn key(&self) -> Option<SyntaxToken> {
        significant_tokens(&self.0).find(|t| !MODIFIERS.contains(t.kind()))
    }

    pub fn colon(&self) -> Option<SyntaxToken> {
        child_token(&self.0, SyntaxKind::Colon)
    }

    /// Everything after the colon up to the end of the header line.
    pub fn value_tokens(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        significant_tokens(&self.0)
            .skip_while(|t| t.kind() != SyntaxKind::Colon)
            .skip(1)
            .take_while(|t| t.kind() != SyntaxKind::Newline)
    }

    /// Value text with surrounding whitespace trimmed, e.g. `chrome` for `app: chrome`.
    pub fn value_text(&self) -> String {
        let mut tokens = self.value_tokens();
        let Some(first) = tokens.next() else {
            return String::new();
        };
        let end = tokens.last().unwrap_or_else(|| first.clone());
        let range = first.text_range().cover(end.text_range());
        let start = self.0.text_range().start();
        let text = self.0.text().to_string();
        text[std::ops::Range::<usize>::from(range - start)].to_string()
    }

    /// The separator line closing the context header, when this is the last header line.
    pub fn separator(&self) -> Option<SyntaxToken> {
        child_token(&self.0, SyntaxKind::Separator)
    }
}

impl Command {
    pub fn rule(&self) -> Option<Rule> {
        self.0.children().find_map(Rule::cast)
    }

    pub fn colon(&self) -> Option<SyntaxToken> {
        child_token(&self.0, SyntaxKind::Colon)
    }

    pub fn statements(&self) -> impl Iterator<Item = Statement> + '_ {
        self.0.children().filter_map(Statement::cast)
    }
}

impl Rule {
    pub fn tokens(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        significant_tokens(&self.0)
    }
}

impl Binding {
    pub fn keyword(&self) -> Option<SyntaxToken> {
        significant_tokens(&self.0).next()
    }

    pub fn args(&self) -> Option<BindingArgs> {
        self.0.children().find_map(BindingArgs::cast)
    }

    pub fn colon(&self) -> Option<SyntaxToken> {
        child_token(&self.0, SyntaxKind::Colon)
    }

    pub fn statements(&self) -> impl Iterator<Item = Statement> + '_ {
        self.0.children().filter_map(Statement::cast)
    }
}

impl BindingArgs {
    /// Tokens between the parentheses; newlines inside the list are skipped.
    pub fn tokens(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        significant_tokens(&self.0).filter(|t| {
            !matches!(
                t.kind(),
                SyntaxKind::ParenOpen | SyntaxKind::ParenClose | SyntaxKind::Newline
            )
        })
    }
}

impl Statement {
    pub fn tokens(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        significant_tokens(&self.0)
    }
}
