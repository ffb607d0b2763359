//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::{ArgGroup, Command};

use super::args::*;

/// Source input shared by every command: a file, stdin or `-s` text.
fn with_source_args(cmd: Command) -> Command {
    cmd.arg(source_path_arg())
        .arg(source_text_arg())
        .group(
            ArgGroup::new("source_input")
                .args(["source_path", "source_text"])
                .required(true),
        )
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("talon-syntax")
        .about("Tokenize, parse, fold and comment Talon voice-command files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(ast_command())
        .subcommand(tokens_command())
        .subcommand(check_command())
        .subcommand(fold_command())
        .subcommand(rule_command())
        .subcommand(comment_command())
}

/// Show the syntax tree of a Talon file.
pub fn ast_command() -> Command {
    let cmd = Command::new("ast")
        .about("Show the syntax tree of a Talon file")
        .after_help(
            r#"EXAMPLES:
  talon-syntax ast vscode.talon
  talon-syntax ast vscode.talon --raw --trivia
  talon-syntax ast -s 'hello: insert("hi")' --spans"#,
        )
        .arg(raw_arg())
        .arg(trivia_arg())
        .arg(spans_arg())
        .arg(color_arg());
    with_source_args(cmd)
}

/// Print the token stream, optionally for a resumed sub-range.
pub fn tokens_command() -> Command {
    let cmd = Command::new("tokens")
        .about("Print the token stream of a Talon file")
        .after_help(
            r#"EXAMPLES:
  talon-syntax tokens vscode.talon
  talon-syntax tokens vscode.talon --start 120 --state 3
  talon-syntax tokens -s '{user.website}: x' --json"#,
        )
        .arg(start_arg())
        .arg(end_arg())
        .arg(state_arg())
        .arg(json_arg());
    with_source_args(cmd)
}

/// Report diagnostics.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Report diagnostics for a Talon file")
        .after_help(
            r#"EXAMPLES:
  talon-syntax check vscode.talon
  talon-syntax check vscode.talon --strict"#,
        )
        .arg(strict_arg())
        .arg(color_arg());
    with_source_args(cmd)
}

/// List fold regions.
pub fn fold_command() -> Command {
    let cmd = Command::new("fold")
        .about("List fold regions of a Talon file")
        .arg(rules_arg())
        .arg(json_arg());
    with_source_args(cmd)
}

/// Resolve the rule around a line.
pub fn rule_command() -> Command {
    let cmd = Command::new("rule")
        .about("Find the rule containing a line")
        .after_help(
            r#"EXAMPLES:
  talon-syntax rule vscode.talon --line 4"#,
        )
        .arg(line_arg().required(true));
    with_source_args(cmd)
}

/// Toggle comments.
pub fn comment_command() -> Command {
    let cmd = Command::new("comment")
        .about("Toggle line comments")
        .after_help(
            r#"EXAMPLES:
  talon-syntax comment vscode.talon --line 3
  talon-syntax comment vscode.talon --caret 1 --caret 5
  talon-syntax comment vscode.talon --selection 2 6 --write
  talon-syntax comment vscode.talon --rule 4"#,
        )
        .arg(line_arg())
        .arg(caret_arg())
        .arg(selection_arg())
        .arg(rule_arg())
        .arg(smart_arg())
        .arg(write_arg())
        .group(
            ArgGroup::new("mode")
                .args(["line", "caret", "selection", "rule", "smart"])
                .required(true),
        );
    with_source_args(cmd)
}
