mod args;
mod commands;
mod dispatch;

#[cfg(test)]
mod dispatch_tests;

pub use commands::build_cli;
pub use dispatch::{
    AstParams, CheckParams, CommentParams, FoldParams, RuleParams, TokensParams,
};

/// Color output mode for CLI commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn should_colorize(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            // Diagnostics go to stderr; a piped stdout still disables colors.
            ColorChoice::Auto => {
                std::io::IsTerminal::is_terminal(&std::io::stdout())
                    && std::io::IsTerminal::is_terminal(&std::io::stderr())
            }
        }
    }
}
