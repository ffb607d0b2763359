mod cli;
mod commands;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{
    AstParams, CheckParams, CommentParams, FoldParams, RuleParams, TokensParams, build_cli,
};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("ast", m)) => {
            let params = AstParams::from_matches(m);
            commands::ast::run(params.into());
        }
        Some(("tokens", m)) => {
            let params = TokensParams::from_matches(m);
            commands::tokens::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("fold", m)) => {
            let params = FoldParams::from_matches(m);
            commands::fold::run(params.into());
        }
        Some(("rule", m)) => {
            let params = RuleParams::from_matches(m);
            commands::rule::run(params.into());
        }
        Some(("comment", m)) => {
            let params = CommentParams::from_matches(m);
            commands::comment::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
