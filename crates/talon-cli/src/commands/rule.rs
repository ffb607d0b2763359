use talon_syntax::RuleBlocks;

use super::source::SourceInput;

pub struct RuleArgs {
    pub source: SourceInput,
    pub line: usize,
}

pub fn run(args: RuleArgs) {
    let text = args.source.load_or_exit();
    println!("{}", describe(&text, args.line));
}

/// `start..=end`, marked when the resolver found no rule and fell back to the line itself.
fn describe(text: &str, line: usize) -> String {
    let blocks = RuleBlocks::new(text);
    match blocks.find_rule(line) {
        Some(range) => format!("{}..={}", range.start, range.end),
        None => {
            let range = blocks.find_rule_range(line);
            format!("{}..={} (no rule)", range.start, range.end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found_and_not_found() {
        let text = "hello world:\n    insert(\"hi\")\n\nbye\n";
        assert_eq!(describe(text, 1), "0..=1");
        assert_eq!(describe(text, 3), "3..=3 (no rule)");
    }
}
