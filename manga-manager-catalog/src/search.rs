//! Parser for the free-text filter typed into the library's search box.
//!
//! Filters are `field: prefix` pairs separated by semicolons:
//! ```text
//! title: One Pi; author: Oda
//! ```
//!
//! Each pair restricts the listing to rows whose field starts with the given
//! prefix (case-sensitive). Pairs are combined with AND.

use crate::sort::SortField;

/// Ordered field → prefix pairs parsed from a filter string.
///
/// Each field appears at most once, at the position it was first given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerms {
    terms: Vec<(SortField, String)>,
}

impl SearchTerms {
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SortField, &str)> {
        self.terms.iter().map(|(field, value)| (*field, value.as_str()))
    }

    pub fn get(&self, field: SortField) -> Option<&str> {
        self.terms
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
    }

    /// Insert a term. A repeated field keeps its position and takes the new value.
    pub fn insert(&mut self, field: SortField, value: impl Into<String>) {
        let value = value.into();
        match self.terms.iter_mut().find(|(f, _)| *f == field) {
            Some(slot) => slot.1 = value,
            None => self.terms.push((field, value)),
        }
    }
}

/// Whether a filter string only uses characters the search box accepts:
/// word characters, spaces, `;` and `:`. Empty strings are not acceptable.
///
/// Word characters are `_` plus Unicode letters and numbers as
/// [`char::is_alphanumeric`] defines them, so accented and CJK titles pass.
/// Combining marks such as U+0301 and other whitespace do not.
///
/// Filters that fail this check are ignored rather than reported.
pub fn is_acceptable_filter(filter: &str) -> bool {
    !filter.is_empty()
        && filter
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == ' ' || c == ';' || c == ':')
}

/// Parse a filter string into search terms.
///
/// # Examples
///
/// ```
/// use manga_manager_catalog::search::parse_search;
/// use manga_manager_catalog::SortField;
///
/// let terms = parse_search("title: one; author: bob");
/// assert_eq!(terms.get(SortField::Title), Some("one"));
/// assert_eq!(terms.get(SortField::Author), Some("bob"));
///
/// // A segment without a colon makes the whole string unparseable.
/// assert!(parse_search("naruto").is_empty());
/// ```
pub fn parse_search(input: &str) -> SearchTerms {
    let mut terms = SearchTerms::default();

    for segment in input.split(';') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }

        let Some((key, value)) = segment.split_once(':') else {
            return SearchTerms::default();
        };

        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        // Unknown keys are dropped; the rest of the filter still applies.
        if let Some(field) = SortField::from_str_loose(key) {
            terms.insert(field, value);
        }
    }

    terms
}
