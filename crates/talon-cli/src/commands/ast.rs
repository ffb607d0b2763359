//! Show the syntax tree of a Talon file.

use talon_syntax::parse;

use super::source::SourceInput;

pub struct AstArgs {
    pub source: SourceInput,
    pub raw: bool,
    pub trivia: bool,
    pub spans: bool,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let text = args.source.load_or_exit();
    let parse = parse(&text);

    // Diagnostics never stop the dump; the tree is best effort.
    if !parse.diagnostics().is_empty() {
        let label = args.source.label();
        eprintln!(
            "{}",
            parse
                .diagnostics()
                .printer()
                .source(&text)
                .path(&label)
                .colored(args.color)
                .render()
        );
    }

    let output = parse
        .printer()
        .raw(args.raw)
        .with_trivia(args.trivia)
        .with_spans(args.spans)
        .dump();
    print!("{}", output);
}
