//! Print the token stream, optionally resuming mid-file.

use serde::Serialize;
use talon_syntax::{LexState, SyntaxKind, token_text, tokenize};

use super::source::{SourceInput, exit_with};

pub struct TokensArgs {
    pub source: SourceInput,
    pub start: usize,
    pub end: Option<usize>,
    pub state: LexState,
    pub json: bool,
}

#[derive(Serialize)]
struct TokenRecord<'a> {
    kind: SyntaxKind,
    start: u32,
    end: u32,
    text: &'a str,
}

/// Tokens plus what a caller needs to resume after them.
#[derive(Serialize)]
struct TokenStream<'a> {
    tokens: Vec<TokenRecord<'a>>,
    offset: usize,
    state: u8,
}

pub fn run(args: TokensArgs) {
    let text = args.source.load_or_exit();
    let end = args.end.unwrap_or(text.len());
    let stream = collect(&text, args.start, end, args.state);

    if args.json {
        match serde_json::to_string_pretty(&stream) {
            Ok(json) => println!("{}", json),
            Err(err) => exit_with(err),
        }
        return;
    }

    print!("{}", render(&stream));
}

fn collect(text: &str, start: usize, end: usize, state: LexState) -> TokenStream<'_> {
    let mut tokenizer = tokenize(text, start, end, state);
    let mut tokens = Vec::new();
    for token in tokenizer.by_ref() {
        tokens.push(TokenRecord {
            kind: token.kind,
            start: token.span.start().into(),
            end: token.span.end().into(),
            text: token_text(text, &token),
        });
    }
    tracing::debug!(count = tokens.len(), offset = tokenizer.offset(), "tokenized");

    TokenStream {
        tokens,
        offset: tokenizer.offset(),
        state: tokenizer.state().to_bits(),
    }
}

fn render(stream: &TokenStream<'_>) -> String {
    let mut out = String::new();
    for token in &stream.tokens {
        out.push_str(&format!(
            "{:?} {}..{} {:?}\n",
            token.kind, token.start, token.end, token.text
        ));
    }
    let state = LexState::from_bits(stream.state);
    out.push_str(&format!(
        "# offset {} state {} (command pattern: {}, line start: {})\n",
        stream.offset, stream.state, state.in_command_pattern, state.at_line_start
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_tokens_and_resume_point() {
        let stream = collect("{user.x}: y\n", 0, 12, LexState::INITIAL);
        insta::assert_snapshot!(render(&stream), @r#"
        ListRef 0..8 "{user.x}"
        Colon 8..9 ":"
        Whitespace 9..10 " "
        Identifier 10..11 "y"
        Newline 11..12 "\n"
        # offset 12 state 3 (command pattern: true, line start: true)
        "#);
    }

    #[test]
    fn resumes_from_saved_state() {
        let text = "a: {user.x}\n";
        let stream = collect(text, 3, text.len(), LexState::from_bits(0));
        let kinds: Vec<_> = stream.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [
                SyntaxKind::BraceOpen,
                SyntaxKind::VariableRef,
                SyntaxKind::BraceClose,
                SyntaxKind::Newline
            ]
        );
    }

    #[test]
    fn json_shape() {
        let stream = collect("hi", 0, 2, LexState::INITIAL);
        let json = serde_json::to_string(&stream).unwrap();
        insta::assert_snapshot!(
            json,
            @r#"{"tokens":[{"kind":"Word","start":0,"end":2,"text":"hi"}],"offset":2,"state":1}"#
        );
    }
}
