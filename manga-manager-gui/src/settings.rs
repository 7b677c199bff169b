use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use manga_manager_catalog::SortField;

/// How many recently opened databases are remembered.
pub const MAX_RECENT_DATABASES: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppSettings {
    #[serde(default)]
    pub library: LibrarySettings,
    #[serde(default)]
    pub view: ViewSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LibrarySettings {
    pub database: Option<PathBuf>,
    #[serde(default)]
    pub recent_databases: Vec<RecentDatabase>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecentDatabase {
    pub path: PathBuf,
    pub last_opened: String,
    pub book_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewSettings {
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    #[serde(default = "default_sort_key")]
    pub sort_key: SortField,
    #[serde(default)]
    pub reverse: bool,
}

fn default_page_size() -> u64 {
    50
}

fn default_sort_key() -> SortField {
    SortField::Title
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            sort_key: default_sort_key(),
            reverse: false,
        }
    }
}

impl LibrarySettings {
    /// Record `path` as the current database and move it to the front of
    /// the recent list.
    pub fn remember(&mut self, path: &Path, book_count: u64) {
        self.database = Some(path.to_path_buf());
        self.recent_databases.retain(|r| r.path != path);
        self.recent_databases.insert(
            0,
            RecentDatabase {
                path: path.to_path_buf(),
                last_opened: chrono::Utc::now().to_rfc3339(),
                book_count,
            },
        );
        self.recent_databases.truncate(MAX_RECENT_DATABASES);
    }
}

/// Returns `~/.config/manga-manager/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("manga-manager").join("settings.toml")
}

/// Load settings from disk, returning defaults if missing or corrupt.
pub fn load_settings() -> AppSettings {
    load_settings_from(&settings_path())
}

pub fn load_settings_from(path: &Path) -> AppSettings {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            log::warn!("Failed to parse settings at {}: {}", path.display(), e);
            AppSettings::default()
        }),
        Err(_) => AppSettings::default(),
    }
}

/// Save settings to disk atomically (write to temp, then rename).
pub fn save_settings(settings: &AppSettings) -> std::io::Result<()> {
    save_settings_to(settings, &settings_path())
}

pub fn save_settings_to(settings: &AppSettings, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(settings).map_err(std::io::Error::other)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, contents)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(&dir.path().join("nope.toml"));
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.view.page_size, 50);
        assert_eq!(settings.view.sort_key, SortField::Title);
        assert!(!settings.view.reverse);
    }

    #[test]
    fn corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "this is = = not toml").unwrap();
        assert_eq!(load_settings_from(&path), AppSettings::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[view]\nsort_key = \"tome\"\n").unwrap();
        let settings = load_settings_from(&path);
        assert_eq!(settings.view.sort_key, SortField::Tome);
        assert_eq!(settings.view.page_size, 50);
        assert!(settings.library.database.is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let mut settings = AppSettings::default();
        settings.view.page_size = 25;
        settings.view.reverse = true;
        settings
            .library
            .remember(Path::new("/tmp/books/library.db"), 12);

        save_settings_to(&settings, &path).unwrap();
        assert!(!path.with_extension("toml.tmp").exists());
        assert_eq!(load_settings_from(&path), settings);
    }

    #[test]
    fn remember_moves_to_front_and_caps_list() {
        let mut library = LibrarySettings::default();
        for i in 0..12 {
            library.remember(Path::new(&format!("/db/{i}.db")), i);
        }
        assert_eq!(library.recent_databases.len(), MAX_RECENT_DATABASES);
        assert_eq!(library.recent_databases[0].path, Path::new("/db/11.db"));

        library.remember(Path::new("/db/5.db"), 99);
        assert_eq!(library.recent_databases.len(), MAX_RECENT_DATABASES);
        assert_eq!(library.recent_databases[0].book_count, 99);
        assert_eq!(
            library
                .recent_databases
                .iter()
                .filter(|r| r.path == Path::new("/db/5.db"))
                .count(),
            1
        );
        assert_eq!(library.database.as_deref(), Some(Path::new("/db/5.db")));
    }
}
