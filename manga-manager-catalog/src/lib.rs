//! Book collection data model, sort ordering, and filter-string parsing.
//!
//! This crate defines the catalog's data model without any database
//! dependencies. Consumers build [`Book`] values from user input or stored
//! rows and hand them to `manga-manager-db` for persistence.

pub mod search;
pub mod sort;
pub mod types;

pub use search::{is_acceptable_filter, parse_search, SearchTerms};
pub use sort::{SortField, SortOrder, UnknownField};
pub use types::*;
