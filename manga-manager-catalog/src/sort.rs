//! Sortable fields and the multi-key sort order used when listing books.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A column of the `books` table that can be sorted or filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Title,
    Author,
    Type,
    Tome,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown field '{0}' (expected title, author, type or tome)")]
pub struct UnknownField(pub String);

impl SortField {
    /// All fields in their default priority order.
    pub const ALL: [SortField; 4] = [Self::Title, Self::Author, Self::Type, Self::Tome];

    /// Column name in the `books` table.
    pub fn column(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Type => "type",
            Self::Tome => "tome",
        }
    }

    /// Column header shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Author => "Author",
            Self::Type => "Type",
            Self::Tome => "Tome",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "title" => Some(Self::Title),
            "author" => Some(Self::Author),
            "type" => Some(Self::Type),
            "tome" => Some(Self::Tome),
            _ => None,
        }
    }
}

impl FromStr for SortField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_loose(s).ok_or_else(|| UnknownField(s.to_string()))
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Priority list of sort keys plus a reverse flag for the primary key.
///
/// Secondary keys always sort ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    priority: [SortField; 4],
    reverse: bool,
}

impl Default for SortOrder {
    fn default() -> Self {
        Self {
            priority: SortField::ALL,
            reverse: false,
        }
    }
}

impl SortOrder {
    pub fn new(primary: SortField, reverse: bool) -> Self {
        let mut order = Self::default();
        order.sort_by(primary);
        order.reverse = reverse;
        order
    }

    /// The field rows are primarily ordered by.
    pub fn current_sort_key(&self) -> SortField {
        self.priority[0]
    }

    pub fn priority(&self) -> &[SortField] {
        &self.priority
    }

    pub fn is_reversed(&self) -> bool {
        self.reverse
    }

    /// Make `field` the primary key. The other fields fall back to their
    /// default relative order.
    pub fn sort_by(&mut self, field: SortField) {
        self.priority[0] = field;
        let rest = SortField::ALL.into_iter().filter(|f| *f != field);
        for (slot, f) in self.priority[1..].iter_mut().zip(rest) {
            *slot = f;
        }
    }

    /// Set the primary key by column name. Unrecognized names are ignored.
    ///
    /// Returns whether the name was recognized.
    pub fn set_sort_key(&mut self, key: &str) -> bool {
        match SortField::from_str_loose(key) {
            Some(field) => {
                self.sort_by(field);
                true
            }
            None => false,
        }
    }

    pub fn set_reverse(&mut self, reverse: bool) {
        self.reverse = reverse;
    }

    /// Body of the SQL `ORDER BY` clause, e.g. `author DESC, title, type, tome`.
    pub fn order_by_clause(&self) -> String {
        self.priority
            .iter()
            .enumerate()
            .map(|(i, field)| {
                if i == 0 && self.reverse {
                    format!("{} DESC", field.column())
                } else {
                    field.column().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
