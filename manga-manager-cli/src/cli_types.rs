//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use manga_manager_catalog::Book;

#[derive(Parser)]
#[command(name = "manga-manager")]
#[command(about = "Manage a local manga and book collection", long_about = None)]
pub(crate) struct Cli {
    /// Library database file (defaults to the user data directory)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (includes generated SQL)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// The fields that identify one book on the command line.
#[derive(Args, Clone, Debug)]
pub(crate) struct BookArgs {
    /// Series or book name (stored as the title)
    pub name: String,

    /// Author name
    pub author: String,

    /// Volume number
    pub tome: String,

    /// Category tags (e.g., shonen,ninja)
    #[arg(short, long, value_delimiter = ',')]
    pub family: Vec<String>,
}

impl BookArgs {
    pub(crate) fn to_book(&self) -> Book {
        Book::new("", &self.name, &self.author, &self.tome).with_family(self.family.clone())
    }
}

/// Several volumes of the same series.
#[derive(Args, Clone, Debug)]
pub(crate) struct VolumesArgs {
    /// Series or book name (stored as the title)
    pub name: String,

    /// Author name
    pub author: String,

    /// One or more volume numbers
    #[arg(required = true, num_args = 1..)]
    pub tomes: Vec<String>,

    /// Category tags (e.g., shonen,ninja)
    #[arg(short, long, value_delimiter = ',')]
    pub family: Vec<String>,
}

impl VolumesArgs {
    pub(crate) fn to_books(&self) -> Vec<Book> {
        self.tomes
            .iter()
            .map(|tome| {
                Book::new("", &self.name, &self.author, tome).with_family(self.family.clone())
            })
            .collect()
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List books, optionally filtered, sorted, and paginated
    List {
        /// Filter such as "title: Nar; author: Kishi" (case-sensitive prefixes)
        #[arg(long, default_value = "")]
        filter: String,

        /// Primary sort key: title, author, type or tome
        #[arg(long)]
        sort: Option<String>,

        /// Reverse the primary sort key
        #[arg(short, long)]
        reverse: bool,

        /// Number of rows to skip (only used together with --limit)
        #[arg(long, allow_negative_numbers = true)]
        start: Option<i64>,

        /// Maximum number of rows to show (only used together with --start)
        #[arg(short, long, allow_negative_numbers = true)]
        limit: Option<i64>,
    },

    /// Find books by their exact title, author, type and tome
    Find {
        #[command(flatten)]
        book: BookArgs,
    },

    /// Add one or more volumes, skipping ones already in the library
    Add {
        #[command(flatten)]
        volumes: VolumesArgs,
    },

    /// Remove one or more volumes (fails without changes if any is missing)
    Remove {
        #[command(flatten)]
        volumes: VolumesArgs,
    },

    /// Replace a stored book with new values
    Replace {
        #[command(flatten)]
        old: BookArgs,

        /// New name (defaults to the current one)
        #[arg(long)]
        new_name: Option<String>,

        /// New author (defaults to the current one)
        #[arg(long)]
        new_author: Option<String>,

        /// New volume number (defaults to the current one)
        #[arg(long)]
        new_tome: Option<String>,

        /// New category tags (defaults to the current ones)
        #[arg(long, value_delimiter = ',')]
        new_family: Option<Vec<String>>,
    },

    /// Show library statistics
    Stats,

    /// Print the library database path
    Path,
}
