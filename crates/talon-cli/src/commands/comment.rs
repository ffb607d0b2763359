//! Toggle line comments and print or write back the result.

use std::fs;

use talon_syntax::{CommentRequest, toggle_comments};

use super::source::{SourceInput, exit_with};

pub struct CommentArgs {
    pub source: SourceInput,
    pub request: CommentRequest,
    pub write: bool,
}

pub fn run(args: CommentArgs) {
    let text = args.source.load_or_exit();
    let output = toggle_comments(&text, &args.request).unwrap_or_else(|err| exit_with(err));

    if !args.write {
        print!("{}", output);
        return;
    }

    let Some(path) = args.source.file_path() else {
        exit_with("--write needs a FILE argument");
    };
    if let Err(err) = fs::write(path, output) {
        exit_with(format!("failed to write '{}': {}", path.display(), err));
    }
    tracing::info!(path = %path.display(), "comments toggled");
}
