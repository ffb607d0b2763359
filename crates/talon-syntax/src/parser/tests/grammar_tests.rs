use indoc::indoc;

use crate::parser::parse;

#[test]
fn inline_statement_on_colon_line() {
    let parse = parse("hello: insert(\"x\")\n");
    insta::assert_snapshot!(parse.dump_ast(), @r#"
    File
      Command
        Rule hello
        Statement insert("x")
    "#);
}

#[test]
fn inline_statement_then_continuation_lines() {
    let input = indoc! {"
    copy that: edit.copy()
        sleep(50ms)
    "};

    let parse = parse(input);
    insta::assert_snapshot!(parse.dump_ast(), @r"
    File
      Command
        Rule copy that
        Statement edit.copy()
        Statement sleep(50ms)
    ");
}

#[test]
fn blank_lines_inside_block() {
    let input = indoc! {"
    hello:
        user.a()

        user.b()
    bye:
        user.c()
    "};

    let parse = parse(input);
    insta::assert_snapshot!(parse.dump_ast(), @r"
    File
      Command
        Rule hello
        Statement user.a()
        Statement user.b()
      Command
        Rule bye
        Statement user.c()
    ");
}

#[test]
fn comment_lines_are_trivia_in_block() {
    let input = indoc! {"
    hello:
        # first
        user.a()
    "};

    let parse = parse(input);
    insta::assert_snapshot!(parse.dump_ast(), @r"
    File
      Command
        Rule hello
        Statement user.a()
    ");
}

#[test]
fn statement_excludes_trailing_comment() {
    let parse = parse("hi: user.a() # why\n");
    let stmt = parse.file().commands().next().unwrap().statements().next().unwrap();
    assert_eq!(stmt.as_cst().text().to_string(), "user.a()");
}

#[test]
fn header_block_then_rules() {
    let input = indoc! {"
    mode: command
    and app: slack
    ---
    <user.letter> mode: user.x(letter)
    "};

    let parse = parse(input);
    insta::assert_snapshot!(parse.dump_ast(), @r"
    File
      Match mode: command
      Match and app: slack
        Separator
      Command
        Rule <user.letter> mode
        Statement user.x(letter)
    ");
}

#[test]
fn empty_command_body() {
    let parse = parse("hello:\nbye: user.b()\n");
    insta::assert_snapshot!(parse.dump_ast(), @r"
    File
      Command
        Rule hello
      Command
        Rule bye
        Statement user.b()
    ");
}

#[test]
fn binding_blocks() {
    let input = indoc! {"
    settings():
        user.mouse_speed = 2
        speech.timeout = 0.3
    face(smile): user.mouse_click()
    noise(pop):
        user.mouse_click()
    "};

    let parse = parse(input);
    insta::assert_snapshot!(parse.dump_ast(), @r"
    File
      Binding settings()
        Statement user.mouse_speed = 2
        Statement speech.timeout = 0.3
      Binding face(smile)
        Statement user.mouse_click()
      Binding noise(pop)
        Statement user.mouse_click()
    ");
}

#[test]
fn rule_with_list_and_optional_words() {
    let parse = parse("[please] open {user.website}: user.open(website)\n");
    insta::assert_snapshot!(parse.printer().raw(true).dump(), @r#"
    File
      Command
        Rule
          BracketOpen "["
          Word "please"
          BracketClose "]"
          Word "open"
          ListRef "{user.website}"
        Colon ":"
        Statement
          ActionName "user.open"
          ParenOpen "("
          Identifier "website"
          ParenClose ")"
        Newline "\n"
    "#);
}

#[test]
fn spans_in_typed_dump() {
    let parse = parse("hi: x\n");
    insta::assert_snapshot!(parse.printer().with_spans(true).dump(), @r"
    File [0..6]
      Command [0..6]
        Rule [0..2] hi
        Statement [4..5] x
    ");
}

#[test]
fn no_trailing_newline() {
    let parse = parse("hello: user.a()");
    let command = parse.file().commands().next().unwrap();
    assert_eq!(command.statements().count(), 1);
    assert_eq!(parse.syntax().text().to_string(), "hello: user.a()");
}

#[test]
fn colon_line_identifier_is_a_statement() {
    let parse = parse("hi: x\n");
    insta::assert_snapshot!(parse.dump_ast(), @r"
    File
      Command
        Rule hi
        Statement x
    ");
    assert!(parse.diagnostics().is_empty());
}

#[test]
fn dotted_variable_line_continues_block() {
    let parse = parse("hi:\n    user.x = 1\n");
    insta::assert_snapshot!(parse.dump_ast(), @r"
    File
      Command
        Rule hi
        Statement user.x = 1
    ");
}

#[test]
fn bare_word_line_ends_block() {
    let parse = parse("hi:\n    x = 1\n");
    insta::assert_snapshot!(parse.dump_ast(), @r"
    File
      Command
        Rule hi
    ");
    insta::assert_snapshot!(
        parse.diagnostics().printer().render(),
        @"warning at 8..13: `x = 1` is not a rule, context header or binding"
    );
}
