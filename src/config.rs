use serde::{Deserialize, Serialize};
use specta::Type;
use std::path::PathBuf;

const APP_NAME: &str = "save_keeper";

/// Persisted application settings. `root` is the directory the backup tool
/// lives in and writes its output under ("loaded saves", "logs"); the tool
/// anchors everything to its own location, so the app points there too.
#[derive(Serialize, Deserialize, Type, Clone, Debug)]
pub struct AppSettings {
    pub version: u8,
    pub root: PathBuf,
}

impl Default for AppSettings {
    fn default() -> Self {
        let root = std::env::current_exe()
            .ok()
            .and_then(|exe_path| exe_path.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."));

        Self { version: 0, root }
    }
}

impl AppSettings {
    pub fn load() -> Result<AppSettings, confy::ConfyError> {
        confy::load(APP_NAME, None)
    }

    pub fn save(&self) -> Result<(), confy::ConfyError> {
        confy::store(APP_NAME, None, self)
    }
}
