use crate::parser::cst::{SyntaxKind::*, TalonLang, TokenSet, token_sets};
use crate::parser::parse;
use rowan::Language;

#[test]
fn test_token_set_contains() {
    let set = TokenSet::new(&[ParenOpen, ParenClose, Star]);
    assert!(set.contains(ParenOpen));
    assert!(set.contains(ParenClose));
    assert!(set.contains(Star));
    assert!(!set.contains(Plus));
    assert!(!set.contains(Colon));
}

#[test]
fn test_token_set_union() {
    let a = TokenSet::new(&[KwAnd, KwNot]);
    let b = TokenSet::single(Word);
    let c = a.union(b);
    assert!(c.contains(KwAnd));
    assert!(c.contains(KwNot));
    assert!(c.contains(Word));
    assert!(!c.contains(Identifier));
    assert!(!TokenSet::EMPTY.contains(Word));
}

#[test]
fn test_token_set_ignores_node_kinds() {
    assert!(!token_sets::TOP_LEVEL_FIRST.contains(File));
    assert!(!token_sets::TOP_LEVEL_FIRST.contains(__LAST));
}

#[test]
fn test_top_level_first() {
    for kind in [KwSettings, KwParrot, KwAnd, KwNot, Identifier, Word] {
        assert!(token_sets::TOP_LEVEL_FIRST.contains(kind), "{kind:?}");
    }
    for kind in [ActionName, VariableRef, Newline, KwMode, Separator] {
        assert!(!token_sets::TOP_LEVEL_FIRST.contains(kind), "{kind:?}");
    }
}

#[test]
fn test_is_trivia() {
    assert!(Whitespace.is_trivia());
    assert!(Comment.is_trivia());
    assert!(!Newline.is_trivia());
    assert!(!Separator.is_trivia());
    assert!(!InvalidChar.is_trivia());
}

#[test]
fn test_syntax_kind_count_under_64() {
    assert!(
        (__LAST as u16) < 64,
        "SyntaxKind has {} variants, exceeds TokenSet capacity of 64",
        __LAST as u16
    );
}

#[test]
fn test_keyword_table() {
    assert_eq!(crate::SyntaxKind::keyword("gamepad"), Some(KwGamepad));
    assert_eq!(crate::SyntaxKind::keyword("self"), Some(KwSelf));
    assert_eq!(crate::SyntaxKind::keyword("Self"), None);
    assert_eq!(crate::SyntaxKind::keyword("user.foo"), None);
    assert!(KwAnd.is_keyword());
    assert!(KwSelf.is_keyword());
    assert!(!Identifier.is_keyword());
    assert!(!Colon.is_keyword());
}

#[test]
fn test_kind_roundtrip_through_rowan() {
    for kind in [Whitespace, Word, KwSelf, Greater, File, BindingArgs] {
        let raw = TalonLang::kind_to_raw(kind);
        assert_eq!(TalonLang::kind_from_raw(raw), kind);
    }
    assert!(Statement.is_node());
    assert!(!InvalidChar.is_node());
}

#[test]
fn cst_command() {
    let parse = parse("hello world:\n    insert(\"hi\")\n");
    insta::assert_snapshot!(parse.dump_cst(), @r#"
    File
      Command
        Rule
          Word "hello"
          Word "world"
        Colon ":"
        Newline "\n"
        Statement
          ActionName "insert"
          ParenOpen "("
          String "\"hi\""
          ParenClose ")"
        Newline "\n"
    "#);
}

#[test]
fn cst_match_absorbs_separator() {
    let parse = parse("app: chrome\n-----\n");
    insta::assert_snapshot!(parse.dump_cst(), @r#"
    File
      Match
        KwApp "app"
        Colon ":"
        Identifier "chrome"
        Newline "\n"
        Separator "-----"
        Newline "\n"
    "#);
}

#[test]
fn cst_binding() {
    let parse = parse("settings():\n    speech.timeout = 0.3\n");
    insta::assert_snapshot!(parse.dump_cst(), @r#"
    File
      Binding
        KwSettings "settings"
        BindingArgs
          ParenOpen "("
          ParenClose ")"
        Colon ":"
        Newline "\n"
        Statement
          VariableRef "speech.timeout"
          Equals "="
          Number "0.3"
        Newline "\n"
    "#);
}

#[test]
fn cst_trivia_placement() {
    let parse = parse("hi: x\n");
    insta::assert_snapshot!(parse.printer().raw(true).with_trivia(true).dump(), @r#"
    File
      Command
        Rule
          Word "hi"
        Colon ":"
        Whitespace " "
        Statement
          Identifier "x"
        Newline "\n"
    "#);
}

#[test]
fn cst_is_lossless() {
    let input = "# header\napp: x # trailing\n---\n\n  hi  : \t y ;\n€ key(\n";
    let parse = parse(input);
    assert_eq!(parse.syntax().text().to_string(), input);
}

#[test]
fn kinds_serialize_by_name() {
    let json = serde_json::to_string(&[ListRef, KwSettings]).unwrap();
    assert_eq!(json, r#"["ListRef","KwSettings"]"#);
}
