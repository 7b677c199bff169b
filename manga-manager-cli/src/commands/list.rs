use std::path::PathBuf;

use manga_manager_catalog::SortOrder;
use manga_manager_db::{FilterStatus, ListQuery};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::{log_record, log_table_header, open_library};

/// List books with the given filter, sort key, and page.
pub(crate) fn run_list(
    db_path: Option<PathBuf>,
    filter: &str,
    sort_key: Option<&str>,
    reverse: bool,
    start: Option<i64>,
    limit: Option<i64>,
) -> Result<(), CliError> {
    let library = open_library(db_path)?;

    let mut sort = SortOrder::default();
    if let Some(key) = sort_key
        && !sort.set_sort_key(key)
    {
        log::warn!("Unknown sort key '{}', sorting by {}", key, sort.current_sort_key());
    }
    sort.set_reverse(reverse);

    let query = ListQuery::new(sort)
        .paginate(start.unwrap_or(-1), limit.unwrap_or(-1))
        .filter(filter);

    let listing = library.list(&query)?;
    let total = library.count(&query)?;

    if listing.filter == FilterStatus::Rejected {
        log::warn!(
            "Filter ignored: only letters, digits, '_', spaces, ';' and ':' are allowed"
        );
    }

    if listing.rows.is_empty() {
        log::info!(
            "{}",
            "No books match.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }

    log_table_header();
    for record in &listing.rows {
        log_record(record);
    }
    crate::log_blank();
    log::info!(
        "{}",
        format!("Showing {} of {} book(s)", listing.rows.len(), total)
            .if_supports_color(Stdout, |t| t.dimmed()),
    );

    Ok(())
}
