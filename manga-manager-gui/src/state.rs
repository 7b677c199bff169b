use std::collections::HashSet;

use manga_manager_catalog::{Book, BookRecord, SortField, SortOrder};
use manga_manager_db::{CatalogError, FilterStatus, Library, ListQuery};

use crate::settings::ViewSettings;

/// Sidebar navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Library,
    Settings,
}

/// Page sizes offered in the toolbar.
pub const PAGE_SIZES: [u64; 4] = [25, 50, 100, 250];

// -- Table state --

/// What the book table shows: the current page of rows plus the sort,
/// filter, and selection that produced it.
#[derive(Debug, Clone)]
pub struct TableState {
    pub sort: SortOrder,
    pub filter_text: String,
    pub page: u64,
    pub page_size: u64,
    pub rows: Vec<BookRecord>,
    /// Rows matching the filter across all pages.
    pub total: u64,
    pub filter_status: FilterStatus,
    /// Record ids of the selected rows.
    pub selected: HashSet<i64>,
    /// Set whenever the rows need to be queried again.
    pub dirty: bool,
}

impl Default for TableState {
    fn default() -> Self {
        Self::from_view_settings(&ViewSettings::default())
    }
}

impl TableState {
    pub fn from_view_settings(view: &ViewSettings) -> Self {
        Self {
            sort: SortOrder::new(view.sort_key, view.reverse),
            filter_text: String::new(),
            page: 0,
            page_size: view.page_size.max(1),
            rows: Vec::new(),
            total: 0,
            filter_status: FilterStatus::Unfiltered,
            selected: HashSet::new(),
            dirty: true,
        }
    }

    /// Header click: a new column becomes the primary key, the current one
    /// flips direction.
    pub fn click_header(&mut self, field: SortField) {
        if self.sort.current_sort_key() == field {
            let reversed = self.sort.is_reversed();
            self.sort.set_reverse(!reversed);
        } else {
            self.sort.set_sort_key(field.column());
            self.sort.set_reverse(false);
        }
        self.page = 0;
        self.dirty = true;
    }

    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
        self.filter_edited();
    }

    /// The filter box was edited in place.
    pub fn filter_edited(&mut self) {
        self.page = 0;
        self.dirty = true;
    }

    pub fn set_page_size(&mut self, size: u64) {
        self.page_size = size.max(1);
        self.page = 0;
        self.dirty = true;
    }

    pub fn page_count(&self) -> u64 {
        self.total.div_ceil(self.page_size).max(1)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count()
    }

    pub fn previous_page(&mut self) {
        if self.has_previous() {
            self.page -= 1;
            self.dirty = true;
        }
    }

    pub fn next_page(&mut self) {
        if self.has_next() {
            self.page += 1;
            self.dirty = true;
        }
    }

    fn query(&self) -> ListQuery {
        let start = (self.page * self.page_size) as i64;
        ListQuery::new(self.sort.clone())
            .paginate(start, self.page_size as i64)
            .filter(self.filter_text.clone())
    }

    /// Query the current page again. A page past the end (after deletes or
    /// a narrower filter) snaps back to the last page.
    pub fn refresh(&mut self, library: &Library) -> Result<(), CatalogError> {
        self.total = library.count(&self.query())?;
        let last = self.page_count() - 1;
        if self.page > last {
            self.page = last;
        }

        let listing = library.list(&self.query())?;
        self.rows = listing.rows;
        self.filter_status = listing.filter;

        let visible: HashSet<i64> = self.rows.iter().map(|r| r.id).collect();
        self.selected.retain(|id| visible.contains(id));
        self.dirty = false;
        Ok(())
    }

    // -- Selection --

    /// Plain click selects one row; ctrl/cmd-click toggles it.
    pub fn click_row(&mut self, id: i64, modifiers: egui::Modifiers) {
        if modifiers.ctrl || modifiers.command {
            if !self.selected.remove(&id) {
                self.selected.insert(id);
            }
        } else {
            self.selected.clear();
            self.selected.insert(id);
        }
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selected.contains(&id)
    }

    /// Selected rows, in display order.
    pub fn selected_records(&self) -> Vec<&BookRecord> {
        self.rows
            .iter()
            .filter(|r| self.selected.contains(&r.id))
            .collect()
    }

    /// Selected rows as books, in display order.
    pub fn selected_books(&self) -> Vec<Book> {
        self.selected_records()
            .into_iter()
            .map(Book::from_record)
            .collect()
    }

    /// The selected book, if exactly one row is selected.
    pub fn single_selection(&self) -> Option<Book> {
        match self.selected_books().as_slice() {
            [book] => Some(book.clone()),
            _ => None,
        }
    }

    /// Status line under the table.
    pub fn summary(&self) -> String {
        let filter = match self.filter_status {
            FilterStatus::Unfiltered => String::new(),
            FilterStatus::Applied(n) => format!(" | {n} filter term(s)"),
            FilterStatus::Rejected => " | filter ignored".to_string(),
        };
        format!(
            "{} book(s) | page {} of {} | {} selected{}",
            self.total,
            self.page + 1,
            self.page_count(),
            self.selected.len(),
            filter
        )
    }
}
