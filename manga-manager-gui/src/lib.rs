//! Desktop front end for the manga-manager book catalog.

pub mod app;
pub mod settings;
pub mod state;
pub mod views;
pub mod widgets;
