use indoc::indoc;

use crate::parser::{Parse, parse};

fn plain_diagnostics(parse: &Parse) -> String {
    parse.diagnostics().printer().render()
}

#[test]
fn line_without_colon_is_dropped() {
    let parse = parse("hello world\n");
    insta::assert_snapshot!(parse.dump_cst(), @r#"
    File
      Word "hello"
      Word "world"
      Newline "\n"
    "#);
    insta::assert_snapshot!(
        plain_diagnostics(&parse),
        @"warning at 0..11: `hello world` is not a rule, context header or binding"
    );
    assert!(!parse.diagnostics().has_errors());
}

#[test]
fn binding_keyword_line_ends_block() {
    // Block boundaries are found per line: a body line opening with a binding
    // keyword closes the rule even though it is indented.
    let parse = parse("hi:\n    key(enter)\n");
    insta::assert_snapshot!(parse.dump_ast(), @r"
    File
      Command
        Rule hi
    ");
    insta::assert_snapshot!(
        plain_diagnostics(&parse),
        @"warning at 8..18: `key(enter)` is not a rule, context header or binding"
    );
}

#[test]
fn word_line_ends_block() {
    let input = indoc! {"
    hi:
        x = 1
    "};
    let parse = parse(input);
    assert_eq!(parse.file().commands().next().unwrap().statements().count(), 0);
    assert_eq!(parse.diagnostics().len(), 1);
}

#[test]
fn invalid_character() {
    let parse = parse("hi: insert(;)\n");
    insta::assert_snapshot!(parse.dump_ast(), @r"
    File
      Command
        Rule hi
        Statement insert(;)
    ");
    insta::assert_snapshot!(plain_diagnostics(&parse), @"error at 11..12: invalid character `;`");
    assert!(parse.diagnostics().has_errors());
}

#[test]
fn unterminated_string() {
    let parse = parse("hi: insert(\"abc\n");
    assert_eq!(parse.file().commands().count(), 1);
    insta::assert_snapshot!(plain_diagnostics(&parse), @"warning at 11..16: unterminated string");
}

#[test]
fn escaped_quote_does_not_close_string() {
    let parse = parse("hi: insert(\"abc\\\"");
    insta::assert_snapshot!(plain_diagnostics(&parse), @"warning at 11..17: unterminated string");
}

#[test]
fn unclosed_capture_swallows_colon() {
    let parse = parse("say <user.text: x\n");
    insta::assert_snapshot!(plain_diagnostics(&parse), @r"
    warning at 4..17: missing closing `>`
    warning at 0..17: `say <user.text: x` is not a rule, context header or binding
    ");
    assert_eq!(parse.file().items().count(), 0);
}

#[test]
fn unterminated_regex() {
    let parse = parse("title: ^foo\n");
    insta::assert_snapshot!(plain_diagnostics(&parse), @"warning at 7..11: missing closing `$`");
}

#[test]
fn stray_separator_is_silent() {
    let input = indoc! {"
    ---
    hi: x

    ---
    "};
    let parse = parse(input);
    assert!(parse.diagnostics().is_empty());
    assert_eq!(parse.file().commands().count(), 1);
}

#[test]
fn unclosed_binding_args() {
    let parse = parse("key(ctrl:\n");
    // Without `)` the line is an ordinary rule.
    insta::assert_snapshot!(parse.dump_ast(), @r"
    File
      Command
        Rule key(ctrl
    ");
}

#[test]
fn punctuation_soup_terminates() {
    let input = "::: ((( ))) ||| \n:\n:";
    let parse = parse(input);
    assert_eq!(parse.syntax().text().to_string(), input);
    assert_eq!(parse.file().items().count(), 0);
    assert_eq!(parse.diagnostics().len(), 3);
}

#[test]
fn dropped_tokens_stay_in_file() {
    let parse = parse("; \nhi: x\n");
    let dropped: Vec<_> = parse
        .file()
        .dropped_tokens()
        .map(|t| t.text().to_string())
        .collect();
    assert_eq!(dropped, [";", "\n"]);
    assert_eq!(parse.diagnostics().error_count(), 1);
    assert_eq!(parse.diagnostics().warning_count(), 1);
    assert_eq!(parse.file().commands().count(), 1);
}
