//! manga-manager GUI
//!
//! Desktop window for browsing and editing the book catalog.

use manga_manager_gui::app::MangaManagerApp;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Manga Manager")
            .with_inner_size([960.0, 600.0])
            .with_min_inner_size([640.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "manga-manager",
        options,
        Box::new(|cc| Ok(Box::new(MangaManagerApp::new(cc)))),
    )
}
