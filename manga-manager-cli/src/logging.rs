//! Terminal logger: user-facing output goes through the `log` macros.

use std::io::Write;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

/// Install the global logger.
///
/// Normal output prints bare messages; `--verbose` adds level and target,
/// `--quiet` hides everything below warnings. `RUST_LOG` still applies on top.
pub(crate) fn init(verbose: bool, quiet: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .format(move |buf, record| {
            if verbose {
                return writeln!(
                    buf,
                    "[{} {}] {}",
                    record.level(),
                    record.target(),
                    record.args()
                );
            }
            match record.level() {
                Level::Error => writeln!(
                    buf,
                    "{} {}",
                    "error:".if_supports_color(Stdout, |t| t.red()),
                    record.args()
                ),
                Level::Warn => writeln!(
                    buf,
                    "{} {}",
                    "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                    record.args()
                ),
                _ => writeln!(buf, "{}", record.args()),
            }
        })
        .init();
}

/// Print an empty line at info level.
pub(crate) fn log_blank() {
    log::info!("");
}
