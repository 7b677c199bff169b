pub mod book_table;
pub mod popup;
pub mod prompt;
