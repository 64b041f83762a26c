//! poi CLI
//!
//! Command-line interface for importing and browsing points of interest.

mod cli_types;
mod commands;
mod error;

use std::io::Write;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use cli_types::{Cli, Commands};
pub(crate) use error::CliError;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format(|buf, record| match record.level() {
            log::Level::Error => writeln!(
                buf,
                "{} {}",
                "error:".if_supports_color(Stderr, |t| t.red()),
                record.args()
            ),
            log::Level::Warn => writeln!(
                buf,
                "{} {}",
                "\u{26A0}".if_supports_color(Stderr, |t| t.yellow()),
                record.args()
            ),
            _ => writeln!(buf, "{}", record.args()),
        })
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let db_path = poi_import::resolve_db_path(cli.db);
    log::debug!("Using database {}", db_path.display());

    let result = match cli.command {
        Commands::Import { paths } => commands::import::run_import(&db_path, &paths),
        Commands::List { category, json } => {
            commands::list::run_list(&db_path, category.as_deref(), json)
        }
        Commands::Search { query, json } => commands::search::run_search(&db_path, &query, json),
        Commands::Stats => commands::stats::run_stats(&db_path),
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
