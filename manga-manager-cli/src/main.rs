//! manga-manager CLI
//!
//! Command-line interface for listing and editing the book catalog.

mod cli_types;
mod commands;
mod error;
mod logging;

use clap::Parser;

use cli_types::{Cli, Commands};
pub(crate) use error::CliError;
pub(crate) use logging::log_blank;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let db = cli.db;
    let result = match cli.command {
        Commands::List {
            filter,
            sort,
            reverse,
            start,
            limit,
        } => commands::list::run_list(db, &filter, sort.as_deref(), reverse, start, limit),
        Commands::Find { book } => commands::find::run_find(db, &book),
        Commands::Add { volumes } => commands::edit::run_add(db, &volumes),
        Commands::Remove { volumes } => commands::edit::run_remove(db, &volumes),
        Commands::Replace {
            old,
            new_name,
            new_author,
            new_tome,
            new_family,
        } => {
            let new = commands::edit::replacement(&old, new_name, new_author, new_tome, new_family);
            commands::edit::run_replace(db, &old.to_book(), &new)
        }
        Commands::Stats => commands::stats::run_stats(db),
        Commands::Path => {
            commands::run_path(db);
            Ok(())
        }
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
