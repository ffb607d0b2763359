use talon_syntax::parse;

use super::source::SourceInput;

pub struct CheckArgs {
    pub source: SourceInput,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let text = args.source.load_or_exit();
    let parse = parse(&text);
    let diagnostics = parse.diagnostics();

    let failed = diagnostics.has_errors() || (args.strict && diagnostics.has_warnings());
    if !diagnostics.is_empty() {
        let label = args.source.label();
        eprintln!(
            "{}",
            diagnostics
                .printer()
                .source(&text)
                .path(&label)
                .colored(args.color)
                .render()
        );
    }

    if failed {
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
