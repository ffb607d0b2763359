//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Source input: a file or `-s` text is required, never both
//! 2. Comment modes are mutually exclusive
//! 3. Params extraction: correct fields are extracted from ArgMatches

use std::path::PathBuf;

use talon_syntax::{CommentRequest, LexState};

use super::*;
use crate::cli::commands::{
    ast_command, check_command, comment_command, fold_command, rule_command, tokens_command,
};

#[test]
fn ast_params_from_file() {
    let m = ast_command()
        .try_get_matches_from(["ast", "vscode.talon", "--raw", "--spans"])
        .unwrap();
    let params = AstParams::from_matches(&m);
    assert_eq!(params.source_path, Some(PathBuf::from("vscode.talon")));
    assert_eq!(params.source_text, None);
    assert!(params.raw);
    assert!(params.spans);
    assert!(!params.trivia);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn ast_params_from_inline_text() {
    let m = ast_command()
        .try_get_matches_from(["ast", "-s", "hi: x", "--color", "never"])
        .unwrap();
    let params = AstParams::from_matches(&m);
    assert_eq!(params.source_text.as_deref(), Some("hi: x"));
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn source_is_required() {
    let result = check_command().try_get_matches_from(["check"]);
    assert!(result.is_err());
}

#[test]
fn file_and_inline_text_conflict() {
    let result = check_command().try_get_matches_from(["check", "a.talon", "-s", "hi: x"]);
    assert!(result.is_err());
}

#[test]
fn check_params() {
    let m = check_command()
        .try_get_matches_from(["check", "a.talon", "--strict", "--color", "always"])
        .unwrap();
    let params = CheckParams::from_matches(&m);
    assert!(params.strict);
    assert_eq!(params.color, ColorChoice::Always);
}

#[test]
fn tokens_defaults() {
    let m = tokens_command()
        .try_get_matches_from(["tokens", "a.talon"])
        .unwrap();
    let params = TokensParams::from_matches(&m);
    assert_eq!(params.start, 0);
    assert_eq!(params.end, None);
    assert_eq!(params.state, LexState::INITIAL.to_bits());
    assert!(!params.json);
}

#[test]
fn tokens_resume_params() {
    let m = tokens_command()
        .try_get_matches_from([
            "tokens", "a.talon", "--start", "10", "--end", "20", "--state", "1", "--json",
        ])
        .unwrap();
    let params = TokensParams::from_matches(&m);
    assert_eq!(params.start, 10);
    assert_eq!(params.end, Some(20));
    assert!(params.json);

    let args: crate::commands::tokens::TokensArgs = params.into();
    assert!(args.state.in_command_pattern);
    assert!(!args.state.at_line_start);
}

#[test]
fn tokens_state_out_of_range() {
    let result = tokens_command().try_get_matches_from(["tokens", "a.talon", "--state", "4"]);
    assert!(result.is_err());
}

#[test]
fn fold_params() {
    let m = fold_command()
        .try_get_matches_from(["fold", "a.talon", "--rules"])
        .unwrap();
    let params = FoldParams::from_matches(&m);
    assert!(params.rules);
    assert!(!params.json);
}

#[test]
fn rule_requires_line() {
    assert!(rule_command().try_get_matches_from(["rule", "a.talon"]).is_err());

    let m = rule_command()
        .try_get_matches_from(["rule", "a.talon", "-n", "4"])
        .unwrap();
    assert_eq!(RuleParams::from_matches(&m).line, 4);
}

#[test]
fn comment_line_mode() {
    let m = comment_command()
        .try_get_matches_from(["comment", "a.talon", "--line", "3"])
        .unwrap();
    let params = CommentParams::from_matches(&m);
    assert_eq!(params.request, CommentRequest::Line(3));
    assert!(!params.write);
}

#[test]
fn comment_carets_accumulate() {
    let m = comment_command()
        .try_get_matches_from(["comment", "a.talon", "--caret", "5", "--caret", "1"])
        .unwrap();
    let params = CommentParams::from_matches(&m);
    assert_eq!(params.request, CommentRequest::Carets(vec![5, 1]));
}

#[test]
fn comment_selection_and_write() {
    let m = comment_command()
        .try_get_matches_from(["comment", "a.talon", "--selection", "6", "2", "-w"])
        .unwrap();
    let params = CommentParams::from_matches(&m);
    assert_eq!(params.request, CommentRequest::Selection { start: 6, end: 2 });
    assert!(params.write);
}

#[test]
fn comment_rule_and_smart_modes() {
    let m = comment_command()
        .try_get_matches_from(["comment", "a.talon", "--rule", "2"])
        .unwrap();
    assert_eq!(CommentParams::from_matches(&m).request, CommentRequest::Rule(2));

    let m = comment_command()
        .try_get_matches_from(["comment", "a.talon", "--smart", "0"])
        .unwrap();
    assert_eq!(CommentParams::from_matches(&m).request, CommentRequest::Smart(0));
}

#[test]
fn comment_modes_are_exclusive() {
    let result =
        comment_command().try_get_matches_from(["comment", "a.talon", "--line", "1", "--rule", "2"]);
    assert!(result.is_err());

    let result = comment_command().try_get_matches_from(["comment", "a.talon"]);
    assert!(result.is_err());
}

#[test]
fn every_subcommand_is_registered() {
    let cli = build_cli();
    let names: Vec<_> = cli.get_subcommands().map(|c| c.get_name().to_string()).collect();
    assert_eq!(names, ["ast", "tokens", "check", "fold", "rule", "comment"]);
}
