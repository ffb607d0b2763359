//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use talon_syntax::{CommentRequest, LexState};

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::comment::CommentArgs;
use crate::commands::fold::FoldArgs;
use crate::commands::rule::RuleArgs;
use crate::commands::source::SourceInput;
use crate::commands::tokens::TokensArgs;

pub struct AstParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub raw: bool,
    pub trivia: bool,
    pub spans: bool,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            raw: m.get_flag("raw"),
            trivia: m.get_flag("trivia"),
            spans: m.get_flag("spans"),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            source: SourceInput::new(p.source_path, p.source_text),
            raw: p.raw,
            trivia: p.trivia,
            spans: p.spans,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TokensParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub start: usize,
    pub end: Option<usize>,
    pub state: u8,
    pub json: bool,
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            start: m.get_one::<usize>("start").copied().unwrap_or(0),
            end: m.get_one::<usize>("end").copied(),
            state: m
                .get_one::<u8>("state")
                .copied()
                .unwrap_or(LexState::INITIAL.to_bits()),
            json: m.get_flag("json"),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            source: SourceInput::new(p.source_path, p.source_text),
            start: p.start,
            end: p.end,
            state: LexState::from_bits(p.state),
            json: p.json,
        }
    }
}

pub struct CheckParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub strict: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            source: SourceInput::new(p.source_path, p.source_text),
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct FoldParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub rules: bool,
    pub json: bool,
}

impl FoldParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            rules: m.get_flag("rules"),
            json: m.get_flag("json"),
        }
    }
}

impl From<FoldParams> for FoldArgs {
    fn from(p: FoldParams) -> Self {
        Self {
            source: SourceInput::new(p.source_path, p.source_text),
            rules: p.rules,
            json: p.json,
        }
    }
}

pub struct RuleParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub line: usize,
}

impl RuleParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            // Required by clap.
            line: m.get_one::<usize>("line").copied().unwrap_or(0),
        }
    }
}

impl From<RuleParams> for RuleArgs {
    fn from(p: RuleParams) -> Self {
        Self {
            source: SourceInput::new(p.source_path, p.source_text),
            line: p.line,
        }
    }
}

pub struct CommentParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub request: CommentRequest,
    pub write: bool,
}

impl CommentParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            request: parse_comment_request(m),
            write: m.get_flag("write"),
        }
    }
}

impl From<CommentParams> for CommentArgs {
    fn from(p: CommentParams) -> Self {
        Self {
            source: SourceInput::new(p.source_path, p.source_text),
            request: p.request,
            write: p.write,
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

/// The `mode` group guarantees exactly one of these is present.
fn parse_comment_request(m: &ArgMatches) -> CommentRequest {
    if let Some(carets) = m.get_many::<usize>("caret") {
        return CommentRequest::Carets(carets.copied().collect());
    }
    if let Some(mut bounds) = m.get_many::<usize>("selection") {
        let start = bounds.next().copied().unwrap_or(0);
        let end = bounds.next().copied().unwrap_or(start);
        return CommentRequest::Selection { start, end };
    }
    if let Some(line) = m.get_one::<usize>("rule") {
        return CommentRequest::Rule(*line);
    }
    if let Some(line) = m.get_one::<usize>("smart") {
        return CommentRequest::Smart(*line);
    }
    CommentRequest::Line(m.get_one::<usize>("line").copied().unwrap_or(0))
}
