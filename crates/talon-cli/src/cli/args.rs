//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Talon file to read (positional, "-" for stdin).
pub fn source_path_arg() -> Arg {
    Arg::new("source_path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Talon file to read (use \"-\" for stdin)")
}

/// Inline source text (-s/--source).
pub fn source_text_arg() -> Arg {
    Arg::new("source_text")
        .short('s')
        .long("source")
        .value_name("TEXT")
        .conflicts_with("source_path")
        .help("Inline source text")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}

/// Print every token with its kind (--raw).
pub fn raw_arg() -> Arg {
    Arg::new("raw")
        .long("raw")
        .action(ArgAction::SetTrue)
        .help("Show the concrete syntax tree instead of the summary")
}

/// Include whitespace and comments in raw output (--trivia).
pub fn trivia_arg() -> Arg {
    Arg::new("trivia")
        .long("trivia")
        .action(ArgAction::SetTrue)
        .help("Include whitespace and comment tokens (with --raw)")
}

/// Show source positions (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show source positions")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output JSON")
}

/// Byte offset to start tokenizing at (--start).
pub fn start_arg() -> Arg {
    Arg::new("start")
        .long("start")
        .value_name("OFFSET")
        .default_value("0")
        .value_parser(value_parser!(usize))
        .help("Byte offset to start tokenizing at")
}

/// Byte offset to stop tokenizing at (--end).
pub fn end_arg() -> Arg {
    Arg::new("end")
        .long("end")
        .value_name("OFFSET")
        .value_parser(value_parser!(usize))
        .help("Byte offset to stop tokenizing at (default: end of input)")
}

/// Saved lexer state to resume from (--state).
pub fn state_arg() -> Arg {
    Arg::new("state")
        .long("state")
        .value_name("BITS")
        .default_value("3")
        .value_parser(value_parser!(u8).range(0..4))
        .help("Lexer state bits to resume from (1: command pattern, 2: line start)")
}

/// Fold from line text instead of the parse tree (--rules).
pub fn rules_arg() -> Arg {
    Arg::new("rules")
        .long("rules")
        .action(ArgAction::SetTrue)
        .help("Fold rules found from line text instead of the parse tree")
}

/// Zero-based line (--line).
pub fn line_arg() -> Arg {
    Arg::new("line")
        .short('n')
        .long("line")
        .value_name("LINE")
        .value_parser(value_parser!(usize))
        .help("Zero-based line number")
}

/// One caret per occurrence (--caret).
pub fn caret_arg() -> Arg {
    Arg::new("caret")
        .long("caret")
        .value_name("LINE")
        .action(ArgAction::Append)
        .value_parser(value_parser!(usize))
        .help("Toggle the line of each caret (repeatable)")
}

/// Inclusive line range (--selection START END).
pub fn selection_arg() -> Arg {
    Arg::new("selection")
        .long("selection")
        .value_names(["START", "END"])
        .num_args(2)
        .value_parser(value_parser!(usize))
        .help("Toggle every line from START to END")
}

/// Whole-rule toggle (--rule LINE).
pub fn rule_arg() -> Arg {
    Arg::new("rule")
        .long("rule")
        .value_name("LINE")
        .value_parser(value_parser!(usize))
        .help("Toggle the whole rule around LINE")
}

/// Rule toggle on headers, line toggle elsewhere (--smart LINE).
pub fn smart_arg() -> Arg {
    Arg::new("smart")
        .long("smart")
        .value_name("LINE")
        .value_parser(value_parser!(usize))
        .help("Toggle the rule when LINE is a rule header, otherwise the line")
}

/// Write the result back to the file (--write).
pub fn write_arg() -> Arg {
    Arg::new("write")
        .short('w')
        .long("write")
        .action(ArgAction::SetTrue)
        .help("Write the result back to FILE instead of stdout")
}
