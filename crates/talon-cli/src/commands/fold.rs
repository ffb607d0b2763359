//! List fold regions, from the parse tree or from line text.

use serde::Serialize;
use talon_syntax::{FoldRegion, LineIndex, parse, rule_folds, syntax_folds};

use super::source::{SourceInput, exit_with};

pub struct FoldArgs {
    pub source: SourceInput,
    pub rules: bool,
    pub json: bool,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct FoldRecord {
    start: u32,
    end: u32,
    /// Zero-based line the fold starts on.
    line: usize,
    placeholder: &'static str,
}

pub fn run(args: FoldArgs) {
    let text = args.source.load_or_exit();
    let records = collect(&text, args.rules);

    if args.json {
        match serde_json::to_string_pretty(&records) {
            Ok(json) => println!("{}", json),
            Err(err) => exit_with(err),
        }
        return;
    }

    for record in &records {
        println!(
            "{}..{} line {} {:?}",
            record.start, record.end, record.line, record.placeholder
        );
    }
}

fn collect(text: &str, from_rules: bool) -> Vec<FoldRecord> {
    let folds: Vec<FoldRegion> = if from_rules {
        rule_folds(text)
    } else {
        syntax_folds(&parse(text))
    };
    let index = LineIndex::new(text);

    folds
        .into_iter()
        .map(|fold| FoldRecord {
            start: fold.range.start().into(),
            end: fold.range.end().into(),
            line: index.line_of_offset(fold.range.start()),
            placeholder: fold.placeholder,
        })
        .collect()
}
